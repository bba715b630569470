//! Application services: use-case implementations.
//!
//! The controller accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod click_guard;
pub mod controller;
pub mod sequencer;
