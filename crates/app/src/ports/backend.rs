//! Backend port: the remote relay controller.

use std::future::Future;

use relaypanel_domain::command::RelayCommand;
use relaypanel_domain::error::BackendError;
use relaypanel_domain::relay::{RelayId, RelayState};

/// Something that owns the relays' authoritative state.
///
/// Implementations issue exactly one request per call and never retry.
pub trait RelayBackend {
    /// Send a state-changing command. The response body carries no meaning
    /// beyond success or failure.
    fn send(&self, command: RelayCommand) -> impl Future<Output = Result<(), BackendError>>;

    /// Query the current state of one relay.
    fn status(&self, relay: RelayId) -> impl Future<Output = Result<RelayState, BackendError>>;
}

impl<T: RelayBackend> RelayBackend for std::rc::Rc<T> {
    fn send(&self, command: RelayCommand) -> impl Future<Output = Result<(), BackendError>> {
        (**self).send(command)
    }

    fn status(&self, relay: RelayId) -> impl Future<Output = Result<RelayState, BackendError>> {
        (**self).status(relay)
    }
}
