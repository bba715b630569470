//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use relaypanel_app::ports::{PanelView, RelayBackend, Timer};
use relaypanel_app::services::controller::{RelayOutcome, RelayPanelController};
use relaypanel_domain::relay::RelayState;

/// Drive a networked relay board.
#[derive(Debug, Parser)]
#[command(name = "relaypanel", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to `relaypanel.toml` when present).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use an in-memory simulated board instead of the HTTP backend.
    #[arg(long = "virtual")]
    pub use_virtual: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Switch a relay on.
    On {
        #[arg(allow_negative_numbers = true)]
        relay: i64,
    },
    /// Switch a relay off.
    Off {
        #[arg(allow_negative_numbers = true)]
        relay: i64,
    },
    /// Flip a relay.
    Toggle {
        #[arg(allow_negative_numbers = true)]
        relay: i64,
    },
    /// Show the state of a relay.
    Status {
        #[arg(allow_negative_numbers = true)]
        relay: i64,
    },
    /// Power-cycle a relay.
    Reboot {
        #[arg(allow_negative_numbers = true)]
        relay: i64,
    },
    /// Switch every relay on with a single request.
    AllOn,
    /// Switch every relay off with a single request.
    AllOff,
    /// Flip every relay.
    ToggleAll,
    /// Show the state of every relay.
    List,
}

/// Execute `command` and return whether every request succeeded.
pub async fn run<B, V, T>(controller: &RelayPanelController<B, V, T>, command: Command) -> bool
where
    B: RelayBackend,
    V: PanelView,
    T: Timer,
{
    tracing::debug!(?command, "running command");
    match command {
        Command::On { relay } => controller.set_relay(relay, RelayState::On).await.is_ok(),
        Command::Off { relay } => controller.set_relay(relay, RelayState::Off).await.is_ok(),
        Command::Toggle { relay } => controller.toggle_relay(relay).await.is_ok(),
        Command::Status { relay } => controller.show_relay_status(relay).await.is_ok(),
        Command::Reboot { relay } => controller.reboot_relay(relay).await.is_ok(),
        Command::AllOn => controller
            .set_all(RelayState::On)
            .await
            .is_ok_and(|outcomes| all_succeeded(&outcomes)),
        Command::AllOff => controller
            .set_all(RelayState::Off)
            .await
            .is_ok_and(|outcomes| all_succeeded(&outcomes)),
        Command::ToggleAll => all_succeeded(&controller.toggle_all().await),
        Command::List => all_succeeded(&controller.load_all_statuses().await),
    }
}

fn all_succeeded(outcomes: &[RelayOutcome]) -> bool {
    outcomes.iter().all(|(_, outcome)| outcome.is_ok())
}
