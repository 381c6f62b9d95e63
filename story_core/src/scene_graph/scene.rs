//! Scene and action definitions - the nodes and edges of the story.

use serde::{Deserialize, Serialize, Serializer};
use survival_rules::StateDelta;

/// Unique identifier for a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub String);

impl SceneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SceneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved reference to a scene inside its graph.
///
/// Only the loader creates these, and only after checking the target exists,
/// so following one never misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRef {
    id: SceneId,
    index: usize,
}

impl SceneRef {
    pub(crate) fn new(id: SceneId, index: usize) -> Self {
        Self { id, index }
    }

    pub fn id(&self) -> &SceneId {
        &self.id
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

impl Serialize for SceneRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.id.serialize(serializer)
    }
}

/// Where an action leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Another scene in the same graph.
    Scene(SceneRef),
    /// The end of the game.
    Terminal,
}

impl Target {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Target::Terminal)
    }

    /// The target scene id, or `None` for game over.
    pub fn scene_id(&self) -> Option<&SceneId> {
        match self {
            Target::Scene(scene) => Some(scene.id()),
            Target::Terminal => None,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Scene(scene) => write!(f, "{}", scene.id()),
            Target::Terminal => f.write_str(super::TERMINAL_TARGET),
        }
    }
}

/// A labelled choice offered on a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: String,
    pub target: Target,
    /// Applied to the player when the action is taken.
    pub delta: StateDelta,
}

/// A single narrative node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub id: SceneId,
    /// Body text, newlines already unescaped.
    pub body: String,
    /// Asset reference for an illustration, if any.
    pub illustration: Option<String>,
    /// Endings are the only scenes allowed to offer no actions.
    pub ending: bool,
    /// Actions in declaration order.
    pub actions: Vec<Action>,
}
