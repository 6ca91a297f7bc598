//! Work-group scope: all lanes cooperating on one block of the launch.

use std::sync::{Arc, Barrier};

use crate::group::geometry::Dim3;
use crate::group::Group;
use crate::reduce::tree::ScratchPad;
use crate::reduce::{BoolOp, BoolReduce};
use crate::{runtime_error, Result};

/// The full set of lanes cooperating on one block of work.
///
/// Every lane of the group holds its own `WorkGroup` value; the barrier and
/// scratch pad behind it are shared. The group lives for one kernel
/// invocation and is never constructed by user code outside a launch.
#[derive(Clone)]
pub struct WorkGroup {
    local_dims: Dim3,
    group_id: Dim3,
    size: u32,
    rank: u32,
    barrier: Arc<Barrier>,
    scratch: Arc<ScratchPad>,
}

impl WorkGroup {
    /// Build a lane's view of its work-group from a 3-component local index.
    pub fn new(
        local_dims: Dim3,
        group_id: Dim3,
        local_idx: Dim3,
        barrier: Arc<Barrier>,
        scratch: Arc<ScratchPad>,
    ) -> Result<Self> {
        if !local_dims.contains(local_idx) {
            return Err(runtime_error!(
                "Local index {:?} outside work-group dims {:?}",
                local_idx,
                local_dims
            ));
        }
        let rank = local_dims.linearize(local_idx);
        Self::from_parts(local_dims, group_id, rank, barrier, scratch)
    }

    /// Build a lane's view of its work-group from a linear rank.
    pub fn from_parts(
        local_dims: Dim3,
        group_id: Dim3,
        rank: u32,
        barrier: Arc<Barrier>,
        scratch: Arc<ScratchPad>,
    ) -> Result<Self> {
        let size = local_dims.count() as u32;
        if size == 0 {
            return Err(runtime_error!("Work-group dims {:?} are empty", local_dims));
        }
        if rank >= size {
            return Err(runtime_error!(
                "Lane rank {} exceeds work-group size {}",
                rank,
                size
            ));
        }
        if scratch.len() < size as usize {
            return Err(runtime_error!(
                "Scratch pad holds {} slots, work-group needs {}",
                scratch.len(),
                size
            ));
        }
        Ok(Self {
            local_dims,
            group_id,
            size,
            rank,
            barrier,
            scratch,
        })
    }

    /// The group's index within the launch grid.
    pub fn group_id(&self) -> Dim3 {
        self.group_id
    }

    /// The group's local extent.
    pub fn local_dims(&self) -> Dim3 {
        self.local_dims
    }

    /// This lane's 3-component index within the group.
    pub fn local_idx(&self) -> Dim3 {
        self.local_dims.delinearize(self.rank)
    }

    /// Work-groups never expose a native vote instruction; they always
    /// combine through the shared-scratch tree engine.
    pub fn has_hardware_vote(&self) -> bool {
        false
    }

    pub(crate) fn scratch(&self) -> &ScratchPad {
        &self.scratch
    }
}

impl Group for WorkGroup {
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

impl BoolReduce for WorkGroup {
    fn reduce_bool(&self, local: bool, op: BoolOp) -> bool {
        crate::reduce::tree::combine(self, self.scratch(), local, op)
    }
}
