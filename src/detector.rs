//! The incremental change-detection test.
//!
//! On every `fit`, after the window absorbs the new sample and cascades any
//! compression, the detector walks the window from newest to oldest,
//! incrementally partitioning it into a right (recent) half and a left
//! (older) half, and checks at each partition whether the two halves' means
//! differ by more than a Hoeffding-style cutoff. The first partition that
//! fails the test causes every slot older than it to be dropped.

use crate::variance::{MeanSummary, VarianceSummary};
use crate::window::Window;

/// Run one pass of the change-detection scan against `window`, given the
/// current `aggregate` and target false-positive rate `delta`.
///
/// If a drift is declared, the window is pruned in place, `aggregate` is
/// rebuilt from the surviving slots, and this returns `true`. Otherwise
/// `window` and `aggregate` are left untouched and this returns `false`.
pub(crate) fn detect_and_prune(
    window: &mut Window,
    aggregate: &mut VarianceSummary,
    delta: f64,
) -> bool {
    let n = aggregate.n;
    if n <= 1 {
        // `ln(N)` is undefined/degenerate for N <= 1; nothing to test yet.
        return false;
    }

    let delta_prime = delta / (n as f64).ln();
    let bound = (2.0 / delta_prime).ln();
    // Snapshotted once per fit and reused for every cut, per the reference;
    // recomputing per cut from left/right would change the test's guarantees.
    let variance = aggregate.variance();

    let mut right = MeanSummary::from_variance(aggregate);
    let mut left = MeanSummary::EMPTY;

    // Skip flattened index 0: it is the freshest write slot, and partitioning
    // there gives a left half of size <= 1 with a degenerate mean.
    for idx in 1..window.flat_len() {
        let slot = window.get_flat(idx);
        if slot.is_empty() {
            continue;
        }

        right = match right.remove(&slot) {
            Some(r) => r,
            None => break,
        };
        left = left.merge(&slot);

        let h = 1.0 / right.n + 1.0 / left.n;
        let epsilon = (2.0 * h * variance * bound).sqrt() + (2.0 / 3.0) * h * bound;

        if (right.mean - left.mean).abs() > epsilon {
            window.clear_after(idx);
            *aggregate = window.rebuild_aggregate_up_to(idx);
            return true;
        }
    }

    false
}
