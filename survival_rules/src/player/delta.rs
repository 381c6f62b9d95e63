//! State deltas carried by scene actions.

use serde::{Deserialize, Serialize};

use crate::attributes::Attribute;

/// A validated change to apply to a player.
///
/// Attribute changes are keyed by [`Attribute`], so a delta can only ever
/// name attributes the rules know about.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateDelta {
    /// Signed change per attribute, in declaration order.
    pub changes: Vec<(Attribute, i32)>,
    /// Items added to the inventory.
    pub inventory_add: Vec<String>,
}

impl StateDelta {
    /// Create an empty delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a change to an attribute. Repeated attributes accumulate.
    pub fn with_change(mut self, attribute: Attribute, amount: i32) -> Self {
        match self.changes.iter_mut().find(|(a, _)| *a == attribute) {
            Some((_, existing)) => *existing = existing.saturating_add(amount),
            None => self.changes.push((attribute, amount)),
        }
        self
    }

    /// Add an item to pick up.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.inventory_add.push(item.into());
        self
    }

    /// Total change for one attribute (zero if absent).
    pub fn change_for(&self, attribute: Attribute) -> i32 {
        self.changes
            .iter()
            .filter(|(a, _)| *a == attribute)
            .map(|(_, amount)| *amount)
            .sum()
    }

    /// True when applying the delta would change nothing.
    pub fn is_empty(&self) -> bool {
        self.changes.iter().all(|(_, amount)| *amount == 0) && self.inventory_add.is_empty()
    }
}
