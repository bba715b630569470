//! # relaypanel-domain
//!
//! Pure domain model for the relay control panel.
//!
//! ## Responsibilities
//! - Relay identity: [`relay::RelayCount`] and the [`relay::RelayId`]s it validates
//! - Relay state and how the backend encodes it
//! - Backend commands and their routes
//! - Notifications, localized labels, panel timings and the element map
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod command;
pub mod element;
pub mod error;
pub mod labels;
pub mod notification;
pub mod relay;
pub mod timing;
