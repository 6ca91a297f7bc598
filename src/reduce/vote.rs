//! Hardware-vote reduction path for sub-groups.
//!
//! On backends with native vote instructions, `any`/`all` over a sub-group
//! is a single instruction whose result is broadcast to every active lane by
//! hardware. This module emulates that contract over the sub-group's lane
//! slots: each lane records its predicate, a ballot is taken, and every lane
//! derives the answer from the ballot's population count. The only barriers
//! are the ones the instruction's own semantics imply — publish before
//! ballot, ballot before the slots may be reused.

use crate::group::Group;
use crate::reduce::op::BoolOp;
use crate::reduce::tree::ScratchPad;

/// Vote `local` across all lanes of `group`; every lane receives the
/// identical result.
///
/// Collective: every lane of the group must participate. `Or` answers
/// whether the satisfied-count is nonzero; `And` whether it equals the lane
/// count.
pub fn native_vote<G: Group + ?Sized>(
    group: &G,
    slots: &ScratchPad,
    local: bool,
    op: BoolOp,
) -> bool {
    let size = group.local_size() as usize;
    let rank = group.local_rank() as usize;
    debug_assert!(rank < size);
    debug_assert!(slots.len() >= size);

    slots.store(rank, local);
    group.barrier();

    // Every lane takes the ballot itself; reading the same slots yields the
    // same count on all lanes, which is the broadcast.
    let satisfied = slots.count_set(size);
    group.barrier();

    match op {
        BoolOp::Or => satisfied > 0,
        BoolOp::And => satisfied as usize == size,
    }
}
