//! # Story Core
//!
//! The branching narrative engine. This crate turns raw scene records into a
//! validated scene graph, runs player sessions over it, and renders views for
//! whichever front end is attached.
//!
//! ## Core Components
//!
//! - **scene_graph**: Immutable scenes and actions, the loader/validator, and diagnostics
//! - **engine**: Sessions, the transition step, and renderable views
//!
//! ## Front End Surface
//!
//! Adapters (terminal, chat bot, GUI) talk to the core through four calls only:
//! [`load`], [`new_session`], [`render_view`] and [`step`]. The core does no I/O
//! and never prints; errors come back typed so the adapter decides what the
//! player sees.

pub mod engine;
pub mod scene_graph;

pub use engine::*;
pub use scene_graph::*;

pub use survival_rules::{Attribute, PlayerState, StateDelta, StatusSnapshot};

use std::sync::Arc;

/// Validate raw scene records and build a shareable graph.
pub fn load(
    start: impl Into<SceneId>,
    raw_scenes: impl IntoIterator<Item = RawScene>,
) -> Result<Arc<SceneGraph>, ContentErrors> {
    SceneGraph::load(start, raw_scenes).map(Arc::new)
}

/// Start a new session at the graph's start scene.
pub fn new_session(graph: &Arc<SceneGraph>) -> Session {
    Session::new(Arc::clone(graph))
}

/// Render the session's current scene.
pub fn render_view(session: &Session) -> SceneView {
    session.view()
}

/// Take an action in the session's current scene.
pub fn step(session: &mut Session, action_index: usize) -> Result<StepResult, CallerError> {
    session.step(action_index)
}
