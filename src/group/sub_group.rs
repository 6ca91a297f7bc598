//! Sub-group scope: a hardware-sized partition of a work-group.

use std::sync::{Arc, Barrier};

use crate::group::Group;
use crate::reduce::tree::ScratchPad;
use crate::reduce::{BoolOp, BoolReduce};
use crate::{runtime_error, Result};

/// Default sub-group width, matching the common warp size.
pub const DEFAULT_SUB_GROUP_SIZE: u32 = 32;

/// A hardware-sized grouping of lanes within a work-group.
///
/// The width is fixed by the launch configuration (default
/// [`DEFAULT_SUB_GROUP_SIZE`]); a work-group whose size is not a multiple of
/// the width ends with one narrower sub-group. Whether the scope reduces
/// through a native vote instruction is a backend property fixed at build
/// time (the `native-vote` feature), never a per-call decision — every lane
/// of a given sub-group takes the same path.
#[derive(Clone)]
pub struct SubGroup {
    size: u32,
    rank: u32,
    sub_group_id: u32,
    barrier: Arc<Barrier>,
    slots: Arc<ScratchPad>,
}

impl SubGroup {
    /// Build a lane's view of its sub-group.
    pub fn from_parts(
        size: u32,
        rank: u32,
        sub_group_id: u32,
        barrier: Arc<Barrier>,
        slots: Arc<ScratchPad>,
    ) -> Result<Self> {
        if size == 0 {
            return Err(runtime_error!("Sub-group size must be nonzero"));
        }
        if rank >= size {
            return Err(runtime_error!(
                "Lane rank {} exceeds sub-group size {}",
                rank,
                size
            ));
        }
        if slots.len() < size as usize {
            return Err(runtime_error!(
                "Lane slots hold {} entries, sub-group needs {}",
                slots.len(),
                size
            ));
        }
        Ok(Self {
            size,
            rank,
            sub_group_id,
            barrier,
            slots,
        })
    }

    /// This sub-group's index within its work-group.
    pub fn sub_group_id(&self) -> u32 {
        self.sub_group_id
    }

    /// Whether this scope reduces through a native vote instruction.
    /// Fixed per backend build, uniform across the group.
    pub fn has_hardware_vote(&self) -> bool {
        cfg!(feature = "native-vote")
    }

    pub(crate) fn slots(&self) -> &ScratchPad {
        &self.slots
    }
}

impl Group for SubGroup {
    fn local_size(&self) -> u32 {
        self.size
    }

    fn local_rank(&self) -> u32 {
        self.rank
    }

    fn barrier(&self) {
        self.barrier.wait();
    }
}

impl BoolReduce for SubGroup {
    #[cfg(feature = "native-vote")]
    fn reduce_bool(&self, local: bool, op: BoolOp) -> bool {
        crate::reduce::vote::native_vote(self, self.slots(), local, op)
    }

    #[cfg(not(feature = "native-vote"))]
    fn reduce_bool(&self, local: bool, op: BoolOp) -> bool {
        crate::reduce::tree::combine(self, self.slots(), local, op)
    }
}
