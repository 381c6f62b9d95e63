//! Loader - turns raw scene records into a validated [`SceneGraph`].
//!
//! Validation collects every violation in one pass instead of stopping at
//! the first, so an author sees the whole defect list after each edit.

use std::collections::{HashMap, HashSet};
use survival_rules::{Attribute, StateDelta};
use tracing::{info, warn};

use super::{Action, RawAction, RawScene, Scene, SceneGraph, SceneId, SceneRef, Target, TERMINAL_TARGET};

/// A single problem found in the content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// Two scenes share an id.
    #[error("duplicate scene id '{scene}'")]
    DuplicateScene { scene: SceneId },

    /// An action points at a scene that was never declared.
    #[error("scene '{scene}', action {action}: unknown target scene '{target}'")]
    UnknownTarget {
        scene: SceneId,
        action: usize,
        target: String,
    },

    /// An action's state delta names something other than health, hunger or thirst.
    #[error("scene '{scene}', action {action}: unknown state attribute '{key}'")]
    UnknownAttribute {
        scene: SceneId,
        action: usize,
        key: String,
    },

    /// A scene that is not an ending offers no actions.
    #[error("scene '{scene}' has no actions and is not marked as an ending")]
    DeadEnd { scene: SceneId },

    /// A scene has no body text.
    #[error("scene '{scene}' has no body text")]
    MissingBody { scene: SceneId },

    /// A scene record has no id.
    #[error("scene record {position} has no id")]
    MissingId { position: usize },

    /// A scene uses the id reserved for the end-of-game target.
    #[error("scene id '{scene}' is reserved for ending the game")]
    ReservedId { scene: SceneId },

    /// The designated start scene is not declared.
    #[error("start scene '{start}' is not declared")]
    UnknownStart { start: SceneId },
}

impl ContentError {
    /// The scene the error is attached to, if the record had an id.
    pub fn scene(&self) -> Option<&SceneId> {
        match self {
            ContentError::DuplicateScene { scene }
            | ContentError::UnknownTarget { scene, .. }
            | ContentError::UnknownAttribute { scene, .. }
            | ContentError::DeadEnd { scene }
            | ContentError::MissingBody { scene }
            | ContentError::ReservedId { scene } => Some(scene),
            ContentError::UnknownStart { start } => Some(start),
            ContentError::MissingId { .. } => None,
        }
    }
}

/// Every problem found while loading.
///
/// Duplicate ids come first, then per-scene problems in scene and action
/// declaration order, then a missing start scene. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render_errors(.0))]
pub struct ContentErrors(Vec<ContentError>);

impl ContentErrors {
    pub fn errors(&self) -> &[ContentError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentError> {
        self.0.iter()
    }
}

impl IntoIterator for ContentErrors {
    type Item = ContentError;
    type IntoIter = std::vec::IntoIter<ContentError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn render_errors(errors: &[ContentError]) -> String {
    let mut out = format!("{} content error(s):", errors.len());
    for error in errors {
        out.push_str("\n  - ");
        out.push_str(&error.to_string());
    }
    out
}

/// Validate raw scenes and build the graph.
pub(super) fn load(start: SceneId, raw_scenes: Vec<RawScene>) -> Result<SceneGraph, ContentErrors> {
    let mut errors = Vec::new();

    // First pass: assign indices, first declaration of an id wins. Later
    // copies are still validated below but never enter the graph.
    let mut index: HashMap<SceneId, usize> = HashMap::new();
    let mut records = Vec::with_capacity(raw_scenes.len());
    let mut reported_duplicates = HashSet::new();
    for raw in raw_scenes {
        let id = SceneId::new(raw.id.clone());
        let kept = if raw.id.trim().is_empty() {
            false
        } else if index.contains_key(&id) {
            if reported_duplicates.insert(id.clone()) {
                errors.push(ContentError::DuplicateScene { scene: id });
            }
            false
        } else {
            let position = index.len();
            index.insert(id, position);
            true
        };
        records.push((raw, kept));
    }

    // Second pass: validate every record against the full id set.
    let mut scenes = Vec::with_capacity(index.len());
    for (position, (raw, kept)) in records.into_iter().enumerate() {
        let id = SceneId::new(raw.id);
        if id.as_str().trim().is_empty() {
            errors.push(ContentError::MissingId { position });
        } else if id.as_str() == TERMINAL_TARGET {
            errors.push(ContentError::ReservedId { scene: id.clone() });
        }
        if raw.body.trim().is_empty() {
            errors.push(ContentError::MissingBody { scene: id.clone() });
        }
        if raw.actions.is_empty() && !raw.ending {
            errors.push(ContentError::DeadEnd { scene: id.clone() });
        }

        let actions = raw
            .actions
            .into_iter()
            .enumerate()
            .filter_map(|(position, action)| resolve_action(&id, position, action, &index, &mut errors))
            .collect();

        if kept {
            scenes.push(Scene {
                id,
                body: raw.body,
                illustration: raw.illustration,
                ending: raw.ending,
                actions,
            });
        }
    }

    let start_index = match index.get(&start) {
        Some(start_index) => *start_index,
        None => {
            errors.push(ContentError::UnknownStart { start });
            0
        }
    };

    if !errors.is_empty() {
        warn!(error_count = errors.len(), "scene_graph_rejected");
        return Err(ContentErrors(errors));
    }

    let graph = SceneGraph {
        scenes,
        index,
        start: start_index,
    };
    info!(
        scene_count = graph.len(),
        action_count = graph.action_count(),
        start = %graph.start_id(),
        "scene_graph_loaded"
    );
    for unreachable in graph.unreachable_scenes() {
        warn!(scene = %unreachable, "scene_unreachable_from_start");
    }
    Ok(graph)
}

fn resolve_action(
    scene: &SceneId,
    position: usize,
    raw: RawAction,
    index: &HashMap<SceneId, usize>,
    errors: &mut Vec<ContentError>,
) -> Option<Action> {
    let mut valid = true;

    let target = if raw.target == TERMINAL_TARGET {
        Some(Target::Terminal)
    } else {
        let id = SceneId::new(raw.target.clone());
        match index.get(&id) {
            Some(target_index) => Some(Target::Scene(SceneRef::new(id, *target_index))),
            None => {
                errors.push(ContentError::UnknownTarget {
                    scene: scene.clone(),
                    action: position,
                    target: raw.target,
                });
                None
            }
        }
    };

    let mut delta = StateDelta::new();
    for (key, amount) in raw.state_delta {
        match key.parse::<Attribute>() {
            Ok(attribute) => delta = delta.with_change(attribute, amount),
            Err(_) => {
                errors.push(ContentError::UnknownAttribute {
                    scene: scene.clone(),
                    action: position,
                    key,
                });
                valid = false;
            }
        }
    }
    for item in raw.inventory_add {
        delta = delta.with_item(item);
    }

    match (target, valid) {
        (Some(target), true) => Some(Action {
            label: raw.label,
            target,
            delta,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from(start: &str, scenes: Vec<RawScene>) -> Result<SceneGraph, ContentErrors> {
        SceneGraph::load(start, scenes)
    }

    #[test]
    fn test_load_valid_graph() {
        let graph = load_from(
            "a",
            vec![
                RawScene::new("a", "Scene A").with_action(RawAction::new("to b", "b").with_delta("thirst", 5)),
                RawScene::new("b", "Scene B").with_action(RawAction::new("die", "GAME_OVER")),
            ],
        )
        .unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.start_id(), &SceneId::from("a"));
        let a = graph.scene(&SceneId::from("a")).unwrap();
        assert_eq!(a.actions[0].target.scene_id(), Some(&SceneId::from("b")));
        assert_eq!(a.actions[0].delta.change_for(Attribute::Thirst), 5);
        let b = graph.scene(&SceneId::from("b")).unwrap();
        assert!(b.actions[0].target.is_terminal());
    }

    #[test]
    fn test_unknown_target_rejected() {
        let errors = load_from(
            "c",
            vec![RawScene::new("c", "Scene C").with_action(RawAction::new("go", "Z"))],
        )
        .unwrap_err();

        assert_eq!(
            errors.errors(),
            &[ContentError::UnknownTarget {
                scene: SceneId::from("c"),
                action: 0,
                target: "Z".to_string(),
            }]
        );
        let message = errors.to_string();
        assert!(message.contains("'c'"));
        assert!(message.contains("'Z'"));
    }

    #[test]
    fn test_collects_every_error() {
        let errors = load_from(
            "start",
            vec![
                RawScene::new("a", "")
                    .with_action(RawAction::new("go", "nowhere"))
                    .with_action(RawAction::new("drink", "a").with_delta("mana", 3)),
                RawScene::new("a", "again"),
                RawScene::new("b", "Stuck here"),
            ],
        )
        .unwrap_err();

        assert_eq!(
            errors.errors(),
            &[
                ContentError::DuplicateScene { scene: SceneId::from("a") },
                ContentError::MissingBody { scene: SceneId::from("a") },
                ContentError::UnknownTarget {
                    scene: SceneId::from("a"),
                    action: 0,
                    target: "nowhere".to_string(),
                },
                ContentError::UnknownAttribute {
                    scene: SceneId::from("a"),
                    action: 1,
                    key: "mana".to_string(),
                },
                ContentError::DeadEnd { scene: SceneId::from("a") },
                ContentError::DeadEnd { scene: SceneId::from("b") },
                ContentError::UnknownStart { start: SceneId::from("start") },
            ]
        );
        assert!(errors.to_string().starts_with("7 content error(s):"));
    }

    #[test]
    fn test_duplicate_reported_once() {
        let errors = load_from(
            "a",
            vec![
                RawScene::new("a", "one").as_ending(),
                RawScene::new("a", "two").as_ending(),
                RawScene::new("a", "three").as_ending(),
            ],
        )
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].scene(), Some(&SceneId::from("a")));
    }

    #[test]
    fn test_ending_may_have_no_actions() {
        let graph = load_from(
            "a",
            vec![
                RawScene::new("a", "Walk").with_action(RawAction::new("rest", "home")),
                RawScene::new("home", "You made it.").as_ending(),
            ],
        )
        .unwrap();
        assert!(graph.scene(&SceneId::from("home")).unwrap().actions.is_empty());
    }

    #[test]
    fn test_whitespace_body_is_missing() {
        let errors = load_from("a", vec![RawScene::new("a", "  \n ").as_ending()]).unwrap_err();
        assert_eq!(errors.errors(), &[ContentError::MissingBody { scene: SceneId::from("a") }]);
    }

    #[test]
    fn test_empty_source_rejected() {
        let errors = load_from("a", Vec::new()).unwrap_err();
        assert_eq!(errors.errors(), &[ContentError::UnknownStart { start: SceneId::from("a") }]);
    }

    #[test]
    fn test_duplicate_copy_is_still_validated() {
        let errors = load_from(
            "a",
            vec![
                RawScene::new("a", "The real scene").as_ending(),
                RawScene::new("a", "").with_action(RawAction::new("go", "nowhere").with_delta("mana", 1)),
            ],
        )
        .unwrap_err();

        assert_eq!(
            errors.errors(),
            &[
                ContentError::DuplicateScene { scene: SceneId::from("a") },
                ContentError::MissingBody { scene: SceneId::from("a") },
                ContentError::UnknownTarget {
                    scene: SceneId::from("a"),
                    action: 0,
                    target: "nowhere".to_string(),
                },
                ContentError::UnknownAttribute {
                    scene: SceneId::from("a"),
                    action: 0,
                    key: "mana".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_copy_does_not_replace_first() {
        let errors = load_from(
            "a",
            vec![
                RawScene::new("a", "first").with_action(RawAction::new("go", "b")),
                RawScene::new("b", "second").as_ending(),
                RawScene::new("a", "copy").as_ending(),
            ],
        )
        .unwrap_err();
        assert_eq!(errors.errors(), &[ContentError::DuplicateScene { scene: SceneId::from("a") }]);
    }

    #[test]
    fn test_reserved_id_rejected() {
        let errors = load_from(
            "a",
            vec![
                RawScene::new("a", "Walk").with_action(RawAction::new("end", "GAME_OVER")),
                RawScene::new("GAME_OVER", "Not a scene").as_ending(),
            ],
        )
        .unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ContentError::ReservedId {
                scene: SceneId::from("GAME_OVER")
            }]
        );
    }

    #[test]
    fn test_missing_id_rejected() {
        let errors = load_from(
            "a",
            vec![
                RawScene::new("a", "Walk").with_action(RawAction::new("rest", "home")),
                RawScene::new("", "No id").as_ending(),
                RawScene::new("", "").as_ending(),
                RawScene::new("home", "You made it.").as_ending(),
            ],
        )
        .unwrap_err();

        assert_eq!(
            errors.errors(),
            &[
                ContentError::MissingId { position: 1 },
                ContentError::MissingId { position: 2 },
                ContentError::MissingBody { scene: SceneId::from("") },
            ]
        );
        assert_eq!(errors.errors()[0].scene(), None);
    }
}
