//! Renderable views - the only data a front end consumes.

use serde::{Deserialize, Serialize};
use survival_rules::StatusSnapshot;

use super::Session;
use crate::scene_graph::SceneId;

/// A choice as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Index to pass back to [`Session::step`]. Front ends that reorder
    /// choices for display must echo this value, not the display position.
    pub index: usize,
    pub label: String,
    /// Taking this choice ends the game.
    pub is_terminal: bool,
}

/// Everything needed to draw the current scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneView {
    pub scene: SceneId,
    pub body: String,
    pub illustration: Option<String>,
    pub status: StatusSnapshot,
    /// In the scene's declaration order.
    pub choices: Vec<Choice>,
    /// The scene is an ending with nothing left to choose.
    pub is_ending: bool,
}

impl SceneView {
    /// Build the view of a session's current scene.
    pub fn render(session: &Session) -> Self {
        let scene = session.current_scene();
        Self {
            scene: scene.id.clone(),
            body: scene.body.clone(),
            illustration: scene.illustration.clone(),
            status: session.state().status(),
            choices: scene
                .actions
                .iter()
                .enumerate()
                .map(|(index, action)| Choice {
                    index,
                    label: action.label.clone(),
                    is_terminal: action.target.is_terminal(),
                })
                .collect(),
            is_ending: scene.ending && scene.actions.is_empty(),
        }
    }
}
