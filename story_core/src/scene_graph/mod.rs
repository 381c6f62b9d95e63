//! Scene Graph module - the immutable story content.
//!
//! The graph consists of:
//! - **Scenes**: narrative nodes with body text, an optional illustration and actions
//! - **Actions**: labelled edges to another scene or to game over, carrying a state delta
//! - **Start**: the scene every new session begins in
//!
//! A graph can only be obtained through [`SceneGraph::load`], which validates the
//! raw records first. Once built it is never mutated, so it can be shared by any
//! number of sessions.

mod diagnostics;
mod loader;
mod raw;
mod scene;
#[cfg(test)]
pub(crate) mod strategies;

pub use diagnostics::*;
pub use loader::{ContentError, ContentErrors};
pub use raw::*;
pub use scene::*;

use std::collections::HashMap;

/// Reserved action target that ends the game.
pub const TERMINAL_TARGET: &str = "GAME_OVER";

/// The validated, read-only story.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    /// Scenes in declaration order.
    scenes: Vec<Scene>,

    /// Index: SceneId -> position in `scenes`.
    index: HashMap<SceneId, usize>,

    /// Position of the start scene.
    start: usize,
}

impl SceneGraph {
    /// Validate raw scene records and build the graph.
    ///
    /// Fails with every content error found, not only the first one.
    pub fn load(
        start: impl Into<SceneId>,
        raw_scenes: impl IntoIterator<Item = RawScene>,
    ) -> Result<Self, ContentErrors> {
        loader::load(start.into(), raw_scenes.into_iter().collect())
    }

    /// Get scene by ID.
    pub fn scene(&self, id: &SceneId) -> Option<&Scene> {
        self.index.get(id).map(|position| &self.scenes[*position])
    }

    /// Check if a scene is declared.
    pub fn contains(&self, id: &SceneId) -> bool {
        self.index.contains_key(id)
    }

    pub fn start_id(&self) -> &SceneId {
        &self.scenes[self.start].id
    }

    pub fn start_scene(&self) -> &Scene {
        &self.scenes[self.start]
    }

    /// All scenes in declaration order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Get the total number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Always false for a loaded graph, which has at least its start scene.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Get the total number of actions across all scenes.
    pub fn action_count(&self) -> usize {
        self.scenes.iter().map(|scene| scene.actions.len()).sum()
    }

    pub(crate) fn scene_at(&self, position: usize) -> &Scene {
        &self.scenes[position]
    }

    pub(crate) fn position_of(&self, id: &SceneId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn start_position(&self) -> usize {
        self.start
    }
}
