//! # relaypanel-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RelayBackend`: send relay commands, query relay status
//!   - `PanelView`: render relay state, loading flags and notifications
//!   - `Timer`: wait for settle delays and cool-downs
//! - Define the **driving/inbound** use-case struct:
//!   - `RelayPanelController`: set, toggle, reboot, query and refresh relays
//! - Provide in-process helpers that don't need IO (status sequencing,
//!   click cool-down)
//!
//! ## Dependency rule
//! Depends on `relaypanel-domain` only (plus `futures` for fan-out).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
