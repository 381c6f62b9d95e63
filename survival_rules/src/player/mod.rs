//! Player state: numeric attributes plus inventory.

mod delta;
mod inventory;

pub use delta::*;
pub use inventory::*;

use serde::{Deserialize, Serialize};

use crate::attributes::Attribute;

/// One player's mutable state for the length of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Always within `0..=100`.
    pub health: i32,
    /// Never negative.
    pub hunger: i32,
    /// Never negative.
    pub thirst: i32,
    pub inventory: Inventory,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            health: Attribute::Health.initial_value(),
            hunger: Attribute::Hunger.initial_value(),
            thirst: Attribute::Thirst.initial_value(),
            inventory: Inventory::new(),
        }
    }
}

impl PlayerState {
    /// Create a fresh player with default attributes and an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Health => self.health,
            Attribute::Hunger => self.hunger,
            Attribute::Thirst => self.thirst,
        }
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut i32 {
        match attribute {
            Attribute::Health => &mut self.health,
            Attribute::Hunger => &mut self.hunger,
            Attribute::Thirst => &mut self.thirst,
        }
    }

    /// Apply a delta in place.
    ///
    /// Every change is added to its attribute and the result clamped into
    /// the attribute's range; new items are unioned into the inventory.
    /// This never fails.
    pub fn apply(&mut self, delta: &StateDelta) {
        for (attribute, amount) in &delta.changes {
            let slot = self.slot_mut(*attribute);
            *slot = attribute.clamp(slot.saturating_add(*amount));
        }
        self.inventory.extend(delta.inventory_add.iter().cloned());
    }

    /// Consuming form of [`PlayerState::apply`].
    pub fn with_delta(mut self, delta: &StateDelta) -> Self {
        self.apply(delta);
        self
    }

    /// Check if the player is still alive.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Take a display-ready copy of the current values.
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            health: self.health,
            hunger: self.hunger,
            thirst: self.thirst,
            inventory: self.inventory.iter().map(str::to_string).collect(),
        }
    }
}

/// Read-only view of a player's state, ready for a front end.
///
/// The inventory is listed in the order items were picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub health: i32,
    pub hunger: i32,
    pub thirst: i32,
    pub inventory: Vec<String>,
}

impl StatusSnapshot {
    /// Single-line summary, e.g. `Health 80% | Hunger 5 | Thirst 0 | Inventory: knife`.
    pub fn summary_line(&self) -> String {
        let inventory = if self.inventory.is_empty() {
            "empty".to_string()
        } else {
            self.inventory.join(", ")
        };
        format!(
            "Health {}% | Hunger {} | Thirst {} | Inventory: {}",
            self.health, self.hunger, self.thirst, inventory
        )
    }
}
