//! Group-collective boolean reductions.
//!
//! `any_of`, `all_of` and `none_of` over a group of cooperating lanes, in
//! two call shapes each: **scalar** (one value per lane) and **joint** (a
//! contiguous range of elements per lane, folded locally before the lanes
//! combine). The predicate defaults to the nonzero cast ([`Truthy`]) and may
//! be supplied explicitly through the `_by` variants. All twelve entry
//! points are thin instantiations of one generic [`reduce`], so the two
//! combination engines behind [`BoolReduce`] are exercised identically by
//! every one of them.
//!
//! Every entry point is collective: each lane of the group must call it, and
//! each lane receives the identical boolean.

pub mod fold;
pub mod op;
pub mod tree;
pub mod vote;

pub use op::{BoolOp, Truthy};
pub use tree::ScratchPad;

use crate::group::Group;

/// A lane's contribution to one collective call: one scalar or a local
/// element range. An empty range contributes the operator's identity.
pub enum ValueSource<'a, T> {
    Scalar(&'a T),
    Range(&'a [T]),
}

/// Scope-level selection of the combination strategy.
///
/// Implemented per group type, not branched at runtime: work-groups always
/// combine through the shared-scratch tree engine, sub-groups through the
/// native vote path when the backend exposes one (`native-vote` feature,
/// on by default) and through the tree engine otherwise. Every lane of a
/// given group therefore takes the same path by construction.
pub trait BoolReduce: Group {
    /// Combine each lane's `local` boolean into one group-wide result,
    /// broadcast to every lane.
    fn reduce_bool(&self, local: bool, op: BoolOp) -> bool;
}

/// The generic reduction every entry point instantiates.
///
/// Normalizes the lane's contribution to one boolean (folding a range
/// locally first, see [`fold::fold_slice`]), then combines across the group.
pub fn reduce<G, T, P>(group: &G, source: ValueSource<'_, T>, predicate: P, op: BoolOp) -> bool
where
    G: BoolReduce + ?Sized,
    P: Fn(&T) -> bool,
{
    let local = match source {
        ValueSource::Scalar(value) => predicate(value),
        ValueSource::Range(items) => fold::fold_slice(items, &predicate, op),
    };
    group.reduce_bool(local, op)
}

// ── Scalar entry points ───────────────────────────────────────────

/// True iff at least one lane's value satisfies the default predicate.
pub fn any_of<G, T>(group: &G, value: T) -> bool
where
    G: BoolReduce + ?Sized,
    T: Truthy,
{
    reduce(group, ValueSource::Scalar(&value), T::is_truthy, BoolOp::Or)
}

/// True iff every lane's value satisfies the default predicate.
pub fn all_of<G, T>(group: &G, value: T) -> bool
where
    G: BoolReduce + ?Sized,
    T: Truthy,
{
    reduce(group, ValueSource::Scalar(&value), T::is_truthy, BoolOp::And)
}

/// True iff no lane's value satisfies the default predicate.
pub fn none_of<G, T>(group: &G, value: T) -> bool
where
    G: BoolReduce + ?Sized,
    T: Truthy,
{
    !any_of(group, value)
}

/// [`any_of`] with an explicit predicate.
pub fn any_of_by<G, T, P>(group: &G, value: T, predicate: P) -> bool
where
    G: BoolReduce + ?Sized,
    P: Fn(&T) -> bool,
{
    reduce(group, ValueSource::Scalar(&value), predicate, BoolOp::Or)
}

/// [`all_of`] with an explicit predicate.
pub fn all_of_by<G, T, P>(group: &G, value: T, predicate: P) -> bool
where
    G: BoolReduce + ?Sized,
    P: Fn(&T) -> bool,
{
    reduce(group, ValueSource::Scalar(&value), predicate, BoolOp::And)
}

/// [`none_of`] with an explicit predicate.
pub fn none_of_by<G, T, P>(group: &G, value: T, predicate: P) -> bool
where
    G: BoolReduce + ?Sized,
    P: Fn(&T) -> bool,
{
    !any_of_by(group, value, predicate)
}

// ── Joint (range) entry points ────────────────────────────────────
//
// Each lane contributes zero or more elements; the range is folded locally
// before inter-lane combination, and must not be mutated until the
// collective returns.

/// True iff at least one element across all lanes' ranges satisfies the
/// default predicate. A group whose combined ranges are empty yields false.
pub fn joint_any_of<G, T>(group: &G, items: &[T]) -> bool
where
    G: BoolReduce + ?Sized,
    T: Truthy,
{
    reduce(group, ValueSource::Range(items), T::is_truthy, BoolOp::Or)
}

/// True iff every element across all lanes' ranges satisfies the default
/// predicate; vacuously true when the combined ranges are empty.
pub fn joint_all_of<G, T>(group: &G, items: &[T]) -> bool
where
    G: BoolReduce + ?Sized,
    T: Truthy,
{
    reduce(group, ValueSource::Range(items), T::is_truthy, BoolOp::And)
}

/// True iff no element across all lanes' ranges satisfies the default
/// predicate.
pub fn joint_none_of<G, T>(group: &G, items: &[T]) -> bool
where
    G: BoolReduce + ?Sized,
    T: Truthy,
{
    !joint_any_of(group, items)
}

/// [`joint_any_of`] with an explicit predicate.
pub fn joint_any_of_by<G, T, P>(group: &G, items: &[T], predicate: P) -> bool
where
    G: BoolReduce + ?Sized,
    P: Fn(&T) -> bool,
{
    reduce(group, ValueSource::Range(items), predicate, BoolOp::Or)
}

/// [`joint_all_of`] with an explicit predicate.
pub fn joint_all_of_by<G, T, P>(group: &G, items: &[T], predicate: P) -> bool
where
    G: BoolReduce + ?Sized,
    P: Fn(&T) -> bool,
{
    reduce(group, ValueSource::Range(items), predicate, BoolOp::And)
}

/// [`joint_none_of`] with an explicit predicate.
pub fn joint_none_of_by<G, T, P>(group: &G, items: &[T], predicate: P) -> bool
where
    G: BoolReduce + ?Sized,
    P: Fn(&T) -> bool,
{
    !joint_any_of_by(group, items, predicate)
}
