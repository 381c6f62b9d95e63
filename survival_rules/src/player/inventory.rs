//! Inventory held by the player.

use serde::{Deserialize, Serialize};

/// A set of item names that remembers the order items were first picked up.
///
/// Adding an item that is already held is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns `true` if the item was not held before.
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Check whether the item is held.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl<S: Into<String>> Extend<S> for Inventory {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Inventory {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        inventory.extend(iter);
        inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut inventory = Inventory::new();
        assert!(inventory.insert("knife"));
        assert!(!inventory.insert("knife"));
        assert_eq!(inventory.len(), 1);
        assert!(inventory.contains("knife"));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let inventory: Inventory = ["rope", "coconut", "knife", "rope"].into_iter().collect();
        let items: Vec<_> = inventory.iter().collect();
        assert_eq!(items, vec!["rope", "coconut", "knife"]);
    }

    #[test]
    fn test_empty_inventory() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert!(!inventory.contains("anything"));
    }
}
