//! Handles of the UI elements belonging to each relay.
//!
//! The map is built once from the relay count, so a view never derives an
//! element name at runtime and cannot silently miss one.

use crate::relay::{RelayCount, RelayId, RelayState};

/// Element ids of one relay card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayElements {
    pub relay: RelayId,
    /// Container that carries the `loading` class.
    pub card: String,
    pub indicator: String,
    pub text: String,
}

impl RelayElements {
    fn new(relay: RelayId) -> Self {
        Self {
            relay,
            card: format!("relay-card-{relay}"),
            indicator: format!("status-indicator-{relay}"),
            text: format!("status-text-{relay}"),
        }
    }
}

/// Relay id → element handles, for every relay of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMap {
    elements: Vec<RelayElements>,
}

impl ElementMap {
    #[must_use]
    pub fn new(count: RelayCount) -> Self {
        Self {
            elements: count.ids().map(RelayElements::new).collect(),
        }
    }

    /// Handles for `relay`, or `None` if it belongs to a larger panel.
    #[must_use]
    pub fn get(&self, relay: RelayId) -> Option<&RelayElements> {
        self.elements.get(relay.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelayElements> {
        self.elements.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// CSS classes of the status indicator and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAppearance {
    pub indicator_class: &'static str,
    pub text_class: &'static str,
}

impl StatusAppearance {
    /// Before the first status of the relay has been read.
    pub const PENDING: Self = Self {
        indicator_class: "status-indicator",
        text_class: "status-text",
    };

    /// Appearance of a relay whose state may not be known yet.
    #[must_use]
    pub fn of_known(state: Option<RelayState>) -> Self {
        state.map_or(Self::PENDING, Self::of)
    }

    #[must_use]
    pub fn of(state: RelayState) -> Self {
        if state.is_on() {
            Self {
                indicator_class: "status-indicator on",
                text_class: "status-text on",
            }
        } else {
            Self {
                indicator_class: "status-indicator off",
                text_class: "status-text off",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_one_entry_per_relay() {
        let map = ElementMap::new(RelayCount::default());
        assert_eq!(map.len(), 16);
        let last = map.iter().last().unwrap();
        assert_eq!(last.card, "relay-card-16");
    }

    #[test]
    fn should_name_elements_after_relay() {
        let count = RelayCount::default();
        let map = ElementMap::new(count);
        let elements = map.get(count.relay(3).unwrap()).unwrap();
        assert_eq!(elements.card, "relay-card-3");
        assert_eq!(elements.indicator, "status-indicator-3");
        assert_eq!(elements.text, "status-text-3");
    }

    #[test]
    fn should_miss_relays_of_a_larger_panel() {
        let map = ElementMap::new(RelayCount::new(2).unwrap());
        let foreign = RelayCount::default().relay(9).unwrap();
        assert!(map.get(foreign).is_none());
    }

    #[test]
    fn should_pick_classes_from_state() {
        assert_eq!(StatusAppearance::of(RelayState::On).indicator_class, "status-indicator on");
        assert_eq!(StatusAppearance::of(RelayState::Off).text_class, "status-text off");
    }

    #[test]
    fn should_use_plain_classes_until_state_is_known() {
        assert_eq!(StatusAppearance::of_known(None), StatusAppearance::PENDING);
        assert_eq!(
            StatusAppearance::of_known(Some(RelayState::On)),
            StatusAppearance::of(RelayState::On)
        );
    }
}
