//! Local range pre-reduction.
//!
//! When a lane owns a contiguous range of elements instead of one scalar, the
//! range is folded into a single boolean before any inter-lane combination.
//! The fold is a pure sequential scan over the lane's own elements: no shared
//! state, no barriers, so it is testable in isolation from group semantics.

use super::op::BoolOp;

/// Fold a lane's element range into one boolean.
///
/// Starts from the operator identity, so an empty range contributes exactly
/// the identity (`false` for `Or`, `true` for `And`). The predicate is
/// invoked once per element, in order, with no short-circuit: callers may
/// rely on it being called exactly `items.len()` times.
pub fn fold_slice<T, P>(items: &[T], predicate: P, op: BoolOp) -> bool
where
    P: Fn(&T) -> bool,
{
    let mut acc = op.identity();
    for item in items {
        acc = op.combine(acc, predicate(item));
    }
    acc
}
