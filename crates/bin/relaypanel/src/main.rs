use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use relaypanel::cli::{self, Cli};
use relaypanel::config::Config;
use relaypanel::console::ConsoleView;
use relaypanel::timer::TokioTimer;
use relaypanel_adapter_http_reqwest::ReqwestBackend;
use relaypanel_adapter_virtual::VirtualRelayBoard;
use relaypanel_app::services::controller::RelayPanelController;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("unable to load configuration")?;
    init_tracing(&config.logging.filter);

    let panel = config.panel_config()?;
    let view = ConsoleView::new(panel.labels.clone(), std::io::stdout());

    let succeeded = if cli.use_virtual {
        tracing::info!(relays = %panel.relay_count, "using virtual relay board");
        let board = VirtualRelayBoard::new(panel.relay_count);
        let controller = RelayPanelController::new(board, view, TokioTimer, panel);
        cli::run(&controller, cli.command).await
    } else {
        let backend =
            ReqwestBackend::new(&config.http_backend()).context("unable to set up relay backend")?;
        tracing::info!(base_url = %backend.base_url(), "using relay board");
        let controller = RelayPanelController::new(backend, view, TokioTimer, panel);
        cli::run(&controller, cli.command).await
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
