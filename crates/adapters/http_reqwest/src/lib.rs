//! # relaypanel-adapter-http-reqwest
//!
//! Native HTTP implementation of the `RelayBackend` port. Every relay command
//! is a plain `GET` against the board's web controller, relative to a base
//! URL:
//!
//! | Command | Request | Response |
//! |---------|---------|----------|
//! | on / off / toggle / reboot | `GET <base>/<verb>/<id>` | body ignored |
//! | all on / all off | `GET <base>/all_on/`, `GET <base>/all_off/` | body ignored |
//! | status | `GET <base>/status/<id>` | integer, `> 0` means on |
//!
//! Non-2xx answers surface as `BackendError::Status`, connection problems and
//! timeouts as `BackendError::Transport`.
//!
//! ## Dependency rule
//!
//! Depends on `relaypanel-app` (port traits) and `relaypanel-domain`.

mod backend;
pub mod error;

pub use backend::{HttpBackendConfig, ReqwestBackend};
pub use error::HttpError;
