//! Relay identity and state.
//!
//! A panel drives a fixed number of relays, numbered from 1. The count is
//! configuration, so every [`RelayId`] is minted against a [`RelayCount`]
//! and can never fall outside `1..=count`.

use std::fmt;
use std::num::NonZeroU8;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidRelayCount, InvalidRelayId, MalformedStatus};

/// Number of relay channels exposed by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RelayCount(NonZeroU8);

impl RelayCount {
    /// Number of channels on the stock 16-relay board.
    pub const DEFAULT: Self = Self(NonZeroU8::new(16).unwrap());

    /// Create a relay count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRelayCount`] when `count` is zero.
    pub fn new(count: u8) -> Result<Self, InvalidRelayCount> {
        NonZeroU8::new(count).map(Self).ok_or(InvalidRelayCount)
    }

    /// The raw number of channels.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Validate a raw identifier coming from the UI.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRelayId`] when `raw` is outside `1..=count`.
    pub fn relay(self, raw: i64) -> Result<RelayId, InvalidRelayId> {
        match u8::try_from(raw) {
            Ok(value) if (1..=self.get()).contains(&value) => Ok(RelayId(value)),
            _ => Err(InvalidRelayId {
                value: raw,
                max: self.get(),
            }),
        }
    }

    /// Every relay id in ascending order.
    pub fn ids(self) -> impl Iterator<Item = RelayId> + Clone {
        (1..=self.get()).map(RelayId)
    }
}

impl Default for RelayCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for RelayCount {
    type Error = InvalidRelayCount;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RelayCount> for u8 {
    fn from(value: RelayCount) -> Self {
        value.get()
    }
}

impl fmt::Display for RelayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated, 1-based relay channel number.
///
/// Only obtainable through [`RelayCount::relay`] or [`RelayCount::ids`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RelayId(u8);

impl RelayId {
    /// The channel number.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot, for indexing per-relay tables.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Display for RelayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<RelayId> for i64 {
    fn from(value: RelayId) -> Self {
        i64::from(value.0)
    }
}

/// Whether a relay is energised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayState {
    On,
    Off,
}

impl RelayState {
    /// Interpret the magnitude reported by the backend (`> 0` is on).
    #[must_use]
    pub fn from_magnitude(value: i64) -> Self {
        if value > 0 { Self::On } else { Self::Off }
    }

    /// Parse a `status/<id>` response body.
    ///
    /// A body that is not a number is an error rather than "off", so a broken
    /// board shows up as a failed query instead of a relay that looks off.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedStatus`] when the body is not an integer.
    pub fn parse_status(body: &str) -> Result<Self, MalformedStatus> {
        body.trim()
            .parse::<i64>()
            .map(Self::from_magnitude)
            .map_err(|_| MalformedStatus {
                body: body.to_string(),
            })
    }

    /// Whether the relay is energised.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

impl From<bool> for RelayState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}
