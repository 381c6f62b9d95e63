//! Structural checks and export of the scene graph.

use serde::Serialize;
use std::collections::VecDeque;

use super::{SceneGraph, SceneId, Target};

/// One action flattened into a graph edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: SceneId,
    pub label: String,
    pub to: Target,
}

impl SceneGraph {
    /// Scenes that cannot be reached from the start scene, in declaration order.
    ///
    /// Unreachable scenes are dead content, not an error: the graph stays usable.
    pub fn unreachable_scenes(&self) -> Vec<SceneId> {
        let mut visited = vec![false; self.len()];
        let mut queue = VecDeque::new();

        visited[self.start_position()] = true;
        queue.push_back(self.start_position());

        while let Some(position) = queue.pop_front() {
            for action in &self.scene_at(position).actions {
                if let Target::Scene(next) = &action.target {
                    if !visited[next.index()] {
                        visited[next.index()] = true;
                        queue.push_back(next.index());
                    }
                }
            }
        }

        self.scenes()
            .zip(visited)
            .filter(|(_, seen)| !seen)
            .map(|(scene, _)| scene.id.clone())
            .collect()
    }

    /// Every action of every scene as an edge.
    ///
    /// Ordered by scene declaration, then action declaration, so repeated calls
    /// on the same graph produce identical output.
    pub fn export_edges(&self) -> Vec<Edge> {
        self.scenes()
            .flat_map(|scene| {
                scene.actions.iter().map(move |action| Edge {
                    from: scene.id.clone(),
                    label: action.label.clone(),
                    to: action.target.clone(),
                })
            })
            .collect()
    }
}
