//! Running-total pricing over a selection.

use crate::selection::Selection;

/// Sum of `price` over occupied slots; empty slots contribute 0.
///
/// A flat sum: no currency conversion, tax, or discounting. Recomputed on
/// demand so it can never go stale.
pub fn total(selection: &Selection) -> i64 {
    selection.occupied().map(|(_, part)| part.price).sum()
}
