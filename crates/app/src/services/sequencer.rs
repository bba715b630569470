//! Ordering of overlapping status queries.
//!
//! Responses for the same relay may arrive in any order. Each query takes a
//! ticket when it is issued and its response is applied only if no response
//! from a later-issued query has been applied already, so the view always
//! converges on the most recently requested state.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use relaypanel_domain::relay::RelayId;

/// Issue order of a status query, per relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct Slot {
    issued: u64,
    applied: u64,
}

/// Per-relay ticket book.
#[derive(Debug, Default)]
pub struct StatusSequencer {
    slots: Mutex<HashMap<RelayId, Slot>>,
}

impl StatusSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket for `relay`.
    pub fn issue(&self, relay: RelayId) -> Ticket {
        let mut slots = self.lock();
        let slot = slots.entry(relay).or_default();
        slot.issued += 1;
        Ticket(slot.issued)
    }

    /// Record a response; `false` means a newer one was already applied and
    /// this one must be dropped.
    pub fn accept(&self, relay: RelayId, ticket: Ticket) -> bool {
        let mut slots = self.lock();
        let slot = slots.entry(relay).or_default();
        if ticket.0 > slot.applied {
            slot.applied = ticket.0;
            true
        } else {
            false
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<RelayId, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
