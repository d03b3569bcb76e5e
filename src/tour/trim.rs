//! Collapsing raw trails into simple sub-circuits.

use crate::Edge;

/// Trims detours from a raw closed trail.
///
/// Working backwards from the trail's last edge, repeatedly keep the nearest
/// earlier edge whose target matches the current edge's source and discard
/// everything strictly between, until the front of the trail is reached. The
/// result is the minimal closing sub-circuit embedded in the trail; the
/// discarded detour edges were never committed globally and resurface as
/// leftovers of a later trail search.
pub(crate) fn trim_trail(trail: Vec<Edge>) -> Vec<Edge> {
    let Some(&last) = trail.last() else {
        return trail;
    };

    let mut kept = vec![last];
    let mut position = trail.len() - 1;

    while position > 0 {
        let goal = trail[position].source();

        // Consecutive trail edges share a vertex, so the scan finds a match
        // at the immediate predecessor at the latest.
        position = (0..position)
            .rev()
            .find(|&earlier| trail[earlier].target() == goal)
            .unwrap();
        kept.push(trail[position]);
    }

    kept.reverse();
    kept
}
