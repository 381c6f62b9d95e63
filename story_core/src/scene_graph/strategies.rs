//! Generators for well-formed stories.

use proptest::prelude::*;

use super::{RawAction, RawScene, TERMINAL_TARGET};

/// A valid story of one to seven scenes `s0..sN`, starting at `s0`.
///
/// Targets point at any scene or at game over. Scenes without actions are
/// marked as endings.
pub(crate) fn arb_story() -> impl Strategy<Value = Vec<RawScene>> {
    (1usize..8).prop_flat_map(|count| {
        proptest::collection::vec(proptest::collection::vec((0..=count, -50i32..50), 0..4), count).prop_map(
            move |scenes| {
                scenes
                    .into_iter()
                    .enumerate()
                    .map(|(position, actions)| {
                        let mut raw = RawScene::new(format!("s{position}"), format!("Scene {position}"));
                        raw.ending = actions.is_empty();
                        for (choice, (target, amount)) in actions.into_iter().enumerate() {
                            let target = if target == count {
                                TERMINAL_TARGET.to_string()
                            } else {
                                format!("s{target}")
                            };
                            raw = raw.with_action(
                                RawAction::new(format!("choice {choice}"), target).with_delta("thirst", amount),
                            );
                        }
                        raw
                    })
                    .collect()
            },
        )
    })
}
