//! Transition Engine - sessions and the step function.
//!
//! A step works as follows:
//! 1. **Guard**: reject the call if the session already ended or the index is out of range
//! 2. **Resolve**: pick the action from the current scene
//! 3. **Apply**: apply its state delta to the player, even when it ends the game
//! 4. **Move**: follow the target, or mark the session over on `GAME_OVER`
//! 5. **Render**: hand back a view of the new scene
//!
//! Targets were resolved when the graph was loaded, so the engine never has
//! to handle a missing scene.

mod view;

pub use view::*;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use survival_rules::{PlayerState, StatusSnapshot};
use tracing::{debug, info};
use uuid::Uuid;

use crate::scene_graph::{Scene, SceneGraph, SceneId, Target};

/// Unique identifier for a session, used to tell concurrent players apart in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Misuse of the engine by a front end.
///
/// Distinct from content errors: these always point at the integration, not
/// at the story files.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallerError {
    #[error("action index {index} out of range for scene '{scene}' ({available} action(s) available)")]
    ActionOutOfRange {
        scene: SceneId,
        index: usize,
        available: usize,
    },

    /// The session reached game over and accepts no further steps.
    #[error("session is over; start a new one")]
    SessionOver,

    #[error("scene '{0}' is not part of the graph")]
    UnknownScene(SceneId),
}

/// Outcome of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepResult {
    /// The player moved to a new scene.
    Continue(SceneView),
    /// The action ended the game. Carries the player's final status.
    GameOver(StatusSnapshot),
}

/// One player's live traversal of a scene graph.
///
/// Holds no external handles, so a front end may drop it at any point.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    graph: Arc<SceneGraph>,
    state: PlayerState,
    /// Position of the current scene in the graph.
    current: usize,
    over: bool,
    steps_taken: u32,
}

impl Session {
    /// Start a session at the graph's start scene with a fresh player.
    pub fn new(graph: Arc<SceneGraph>) -> Self {
        let start = graph.start_position();
        Self::at_position(graph, start)
    }

    /// Start a session at a specific scene with a fresh player.
    pub fn starting_at(graph: Arc<SceneGraph>, start: &SceneId) -> Result<Self, CallerError> {
        let position = graph
            .position_of(start)
            .ok_or_else(|| CallerError::UnknownScene(start.clone()))?;
        Ok(Self::at_position(graph, position))
    }

    fn at_position(graph: Arc<SceneGraph>, position: usize) -> Self {
        let session = Self {
            id: SessionId::new(),
            graph,
            state: PlayerState::new(),
            current: position,
            over: false,
            steps_taken: 0,
        };
        debug!(session = %session.id, scene = %session.current(), "session_started");
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn graph(&self) -> &Arc<SceneGraph> {
        &self.graph
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn current(&self) -> &SceneId {
        &self.current_scene().id
    }

    pub fn current_scene(&self) -> &Scene {
        self.graph.scene_at(self.current)
    }

    /// Check if the session reached game over.
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Render the current scene.
    pub fn view(&self) -> SceneView {
        SceneView::render(self)
    }

    /// Take the action at `action_index` of the current scene.
    ///
    /// A terminal action still applies its delta before the game ends. After
    /// game over every further call fails with [`CallerError::SessionOver`].
    pub fn step(&mut self, action_index: usize) -> Result<StepResult, CallerError> {
        if self.over {
            return Err(CallerError::SessionOver);
        }

        let graph = Arc::clone(&self.graph);
        let scene = graph.scene_at(self.current);
        let action = scene
            .actions
            .get(action_index)
            .ok_or_else(|| CallerError::ActionOutOfRange {
                scene: scene.id.clone(),
                index: action_index,
                available: scene.actions.len(),
            })?;

        self.state.apply(&action.delta);
        self.steps_taken = self.steps_taken.saturating_add(1);

        match &action.target {
            Target::Terminal => {
                self.over = true;
                info!(
                    session = %self.id,
                    scene = %scene.id,
                    steps = self.steps_taken,
                    health = self.state.health,
                    "session_game_over"
                );
                Ok(StepResult::GameOver(self.state.status()))
            }
            Target::Scene(next) => {
                self.current = next.index();
                debug!(
                    session = %self.id,
                    from = %scene.id,
                    to = %next.id(),
                    action = action_index,
                    "session_step"
                );
                Ok(StepResult::Continue(self.view()))
            }
        }
    }
}
