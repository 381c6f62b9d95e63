//! Raw scene records as handed over by a content source.
//!
//! Nothing here is validated yet. The field aliases accept the keys used by
//! the original island content files (`text`, `image`, `next`, `state_change`).
//! Unknown keys are rejected, so a typo fails loudly instead of loading as an
//! empty delta. State changes belong to actions; a scene has none.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unvalidated scene definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawScene {
    /// Scene id. File-based sources usually fill this from the file name.
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "text")]
    pub body: String,
    #[serde(default, alias = "image")]
    pub illustration: Option<String>,
    #[serde(default)]
    pub ending: bool,
    #[serde(default)]
    pub actions: Vec<RawAction>,
}

impl RawScene {
    /// Create a scene record with the given id and body.
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    /// Set the illustration reference.
    pub fn with_illustration(mut self, illustration: impl Into<String>) -> Self {
        self.illustration = Some(illustration.into());
        self
    }

    /// Mark the scene as an ending.
    pub fn as_ending(mut self) -> Self {
        self.ending = true;
        self
    }

    /// Append an action.
    pub fn with_action(mut self, action: RawAction) -> Self {
        self.actions.push(action);
        self
    }
}

/// Unvalidated action definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAction {
    #[serde(alias = "text")]
    pub label: String,
    /// Scene id, or `GAME_OVER` to end the game.
    #[serde(alias = "next")]
    pub target: String,
    #[serde(default, alias = "state_change")]
    pub state_delta: BTreeMap<String, i32>,
    #[serde(default, alias = "inventory")]
    pub inventory_add: Vec<String>,
}

impl RawAction {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            ..Default::default()
        }
    }

    /// Add a change for a named attribute.
    pub fn with_delta(mut self, key: impl Into<String>, amount: i32) -> Self {
        self.state_delta.insert(key.into(), amount);
        self
    }

    /// Add an item picked up when taking this action.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.inventory_add.push(item.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_original_keys() {
        let json = r#"{
            "text": "You wake up on the shore.",
            "image": "assets/start.jpg",
            "actions": [
                { "text": "Look around", "next": "look_around", "state_change": { "thirst": 5 } },
                { "text": "Give up", "next": "GAME_OVER" }
            ]
        }"#;

        let scene: RawScene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.body, "You wake up on the shore.");
        assert_eq!(scene.illustration.as_deref(), Some("assets/start.jpg"));
        assert!(!scene.ending);
        assert_eq!(scene.actions.len(), 2);
        assert_eq!(scene.actions[0].target, "look_around");
        assert_eq!(scene.actions[0].state_delta.get("thirst"), Some(&5));
        assert!(scene.actions[1].inventory_add.is_empty());
    }

    #[test]
    fn test_missing_body_defaults_to_empty() {
        let scene: RawScene = serde_json::from_str(r#"{ "ending": true }"#).unwrap();
        assert!(scene.body.is_empty());
        assert!(scene.ending);
        assert!(scene.actions.is_empty());
    }

    #[test]
    fn test_misspelled_action_key_rejected() {
        let json = r#"{
            "text": "x",
            "actions": [ { "text": "go", "next": "GAME_OVER", "state_chnage": { "health": -100 } } ]
        }"#;
        let err = serde_json::from_str::<RawScene>(json).unwrap_err();
        assert!(err.to_string().contains("state_chnage"));
    }

    #[test]
    fn test_scene_level_state_change_rejected() {
        let json = r#"{
            "text": "x",
            "state_change": { "health": -50 },
            "actions": [ { "text": "go", "next": "GAME_OVER" } ]
        }"#;
        let err = serde_json::from_str::<RawScene>(json).unwrap_err();
        assert!(err.to_string().contains("state_change"));
    }

    #[test]
    fn test_builders() {
        let scene = RawScene::new("a", "body")
            .with_illustration("a.png")
            .with_action(RawAction::new("go", "b").with_delta("health", -1).with_item("knife"));
        assert_eq!(scene.actions[0].state_delta.get("health"), Some(&-1));
        assert_eq!(scene.actions[0].inventory_add, vec!["knife".to_string()]);
    }
}
