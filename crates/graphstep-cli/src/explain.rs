//! Plain-language narration of a step sequence.

use rustc_hash::FxHashSet;
use std::fmt::Display;
use std::hash::Hash;

/// Shown when a step adds no node compared to the previous one.
const UNKNOWN_NODE: &str = "?";

/// Describes each step as `Step i: Visited node X. Visited so far: [..]`.
///
/// The newly visited node is the first entry of a step that was absent
/// from the previous step.
pub fn explain_steps<N: Display + Eq + Hash>(steps: &[Vec<N>]) -> Vec<String> {
    let mut lines = Vec::with_capacity(steps.len());
    let mut previous: FxHashSet<&N> = FxHashSet::default();

    for (i, step) in steps.iter().enumerate() {
        let new_node = step
            .iter()
            .find(|node| !previous.contains(node))
            .map_or_else(|| UNKNOWN_NODE.to_string(), ToString::to_string);
        let so_far = step
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "Step {}: Visited node {new_node}. Visited so far: [{so_far}]",
            i + 1
        ));
        previous = step.iter().collect();
    }
    lines
}
