//! # relaypanel: command-line relay panel
//!
//! Composition root that wires the panel controller to a backend.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Construct the backend adapter (HTTP board or virtual board)
//! - Construct the controller, injecting the console view and tokio timer
//! - Run one command and report success through the exit status
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no panel logic belongs here.

pub mod cli;
pub mod config;
pub mod console;
pub mod timer;
