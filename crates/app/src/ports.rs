//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! The panel runs on a single-threaded event loop (the browser UI thread, or a
//! current-thread runtime), so port futures are not required to be `Send`.

pub mod backend;
pub mod timer;
pub mod view;

pub use backend::RelayBackend;
pub use timer::Timer;
pub use view::PanelView;
