//! Barrier-synchronized tree reduction over a shared scratch area.
//!
//! The portable combination engine: required at work-group scope always, and
//! at sub-group scope when the `native-vote` feature is disabled. Each lane
//! publishes its locally-folded boolean into its scratch slot, then the
//! active lane count is halved per round until slot 0 holds the group answer.
//! O(log n) barrier rounds instead of O(n) serial combination, and the
//! `rank < stride` predicate is uniform across the group, so no lane takes a
//! divergent path through the rounds.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::group::Group;
use crate::reduce::op::BoolOp;

/// Per-group scratch area: one 0/1-encoded slot per lane.
///
/// Exclusively owned by one collective call at a time. Sequential collectives
/// in the same group may reuse the pad; the trailing barrier in
/// [`combine`] is what makes that reuse safe. No locking — discipline is
/// enforced entirely through barrier placement.
pub struct ScratchPad {
    slots: Box<[AtomicU32]>,
}

impl ScratchPad {
    /// Allocate a pad with `len` zeroed slots.
    pub fn new(len: usize) -> Self {
        let slots = (0..len).map(|_| AtomicU32::new(0)).collect();
        Self { slots }
    }

    /// Number of lane slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Publish a lane's boolean into its slot.
    pub fn store(&self, lane: usize, value: bool) {
        self.slots[lane].store(value as u32, Ordering::SeqCst);
    }

    /// Read a lane's slot.
    pub fn load(&self, lane: usize) -> bool {
        self.slots[lane].load(Ordering::SeqCst) != 0
    }

    /// Count the set slots among the first `n` lanes.
    pub fn count_set(&self, n: usize) -> u32 {
        let mut count = 0;
        for slot in &self.slots[..n] {
            if slot.load(Ordering::SeqCst) != 0 {
                count += 1;
            }
        }
        count
    }
}

/// Tree-combine `local` across all lanes of `group`; every lane receives the
/// identical group result.
///
/// Collective: every lane of the group must call this with the same `op`.
/// Rounds halve the active count, rounding down; when the active count is
/// odd the unpaired tail slot is folded by lane 0 in the same round, so
/// non-power-of-two groups need no padding. A barrier closes each round, a
/// barrier precedes the broadcast read of slot 0, and a trailing barrier
/// keeps the pad from being overwritten by a subsequent collective before
/// every lane has read the result.
pub fn combine<G: Group + ?Sized>(group: &G, pad: &ScratchPad, local: bool, op: BoolOp) -> bool {
    let size = group.local_size() as usize;
    let rank = group.local_rank() as usize;
    debug_assert!(size >= 1);
    debug_assert!(rank < size);
    debug_assert!(pad.len() >= size);

    pad.store(rank, local);
    group.barrier();

    let mut active = size;
    while active > 1 {
        let stride = active / 2;
        if rank < stride {
            let mut acc = op.combine(pad.load(rank), pad.load(rank + stride));
            if active % 2 == 1 && rank == 0 {
                acc = op.combine(acc, pad.load(active - 1));
            }
            pad.store(rank, acc);
        }
        group.barrier();
        active = stride;
    }

    let result = pad.load(0);
    group.barrier();
    result
}
