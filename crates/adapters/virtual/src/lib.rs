//! # relaypanel-adapter-virtual
//!
//! Simulated relay board for demos and tests. It answers the same commands as
//! the real controller, keeps the relay states in memory and starts with
//! every relay off.
//!
//! | Command | Behaviour |
//! |---------|-----------|
//! | `on/<id>`, `off/<id>` | Set the relay |
//! | `toggle/<id>` | Flip the relay |
//! | `reboot/<id>` | Switch off, then on |
//! | `all_on/`, `all_off/` | Set every relay |
//! | `status/<id>` | `1` when on, `0` when off |
//!
//! ## Dependency rule
//!
//! Depends on `relaypanel-app` (port traits) and `relaypanel-domain` only.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use relaypanel_app::ports::RelayBackend;
use relaypanel_domain::command::RelayCommand;
use relaypanel_domain::error::BackendError;
use relaypanel_domain::relay::{RelayCount, RelayId, RelayState};

/// HTTP status the real controller answers for a relay it does not have.
const NOT_FOUND: u16 = 404;
/// HTTP status reported while the board is switched offline.
const UNAVAILABLE: u16 = 503;

/// In-memory relay board.
pub struct VirtualRelayBoard {
    states: Mutex<Vec<RelayState>>,
    offline: AtomicBool,
}

impl VirtualRelayBoard {
    /// A board with `count` relays, all off.
    #[must_use]
    pub fn new(count: RelayCount) -> Self {
        Self {
            states: Mutex::new(vec![RelayState::Off; usize::from(count.get())]),
            offline: AtomicBool::new(false),
        }
    }

    /// Current state of `relay`, or `None` if the board has no such relay.
    #[must_use]
    pub fn state(&self, relay: RelayId) -> Option<RelayState> {
        self.lock_states().get(relay.index()).copied()
    }

    /// Make every request fail until switched back online.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn apply(&self, command: RelayCommand) -> Result<(), BackendError> {
        self.ensure_online()?;
        let mut states = self.lock_states();
        if let Some(relay) = command.relay() {
            let Some(slot) = states.get_mut(relay.index()) else {
                return Err(BackendError::Status(NOT_FOUND));
            };
            *slot = match command {
                RelayCommand::Off(_) => RelayState::Off,
                RelayCommand::Toggle(_) => slot.toggled(),
                _ => RelayState::On,
            };
        } else {
            let state = RelayState::from(command == RelayCommand::AllOn);
            states.iter_mut().for_each(|slot| *slot = state);
        }
        Ok(())
    }

    fn ensure_online(&self) -> Result<(), BackendError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(BackendError::Status(UNAVAILABLE))
        } else {
            Ok(())
        }
    }

    fn lock_states(&self) -> MutexGuard<'_, Vec<RelayState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for VirtualRelayBoard {
    fn default() -> Self {
        Self::new(RelayCount::default())
    }
}

impl RelayBackend for VirtualRelayBoard {
    async fn send(&self, command: RelayCommand) -> Result<(), BackendError> {
        tracing::debug!(%command, "virtual board command");
        self.apply(command)
    }

    async fn status(&self, relay: RelayId) -> Result<RelayState, BackendError> {
        self.ensure_online()?;
        self.state(relay).ok_or(BackendError::Status(NOT_FOUND))
    }
}
