//! Execution scopes: cooperating lanes with a collective barrier.
//!
//! Two concrete scopes exist: the [`WorkGroup`] (size set by the launch
//! configuration) and the [`SubGroup`] (a hardware-sized partition of a
//! work-group). Both are constructed by the launch machinery for the
//! duration of one kernel invocation and handed to lanes through
//! [`crate::launch::LaneContext`].

pub mod geometry;
pub mod sub_group;
pub mod work_group;

pub use geometry::Dim3;
pub use sub_group::SubGroup;
pub use work_group::WorkGroup;

/// A scope of cooperating lanes.
///
/// # Barrier contract
///
/// `barrier()` is collective: every lane of the group must reach a matching
/// call before any lane proceeds past it. Partial participation is undefined
/// behavior — in this execution model it deadlocks the group and, with it,
/// the whole launch. There is no runtime check and no recovery path, exactly
/// as in accelerator kernel execution.
///
/// After a `barrier()` returns, all writes issued by any lane of the group
/// before its matching call are visible to every lane of the group. No
/// visibility is implied across different groups.
pub trait Group {
    /// Number of lanes in this scope.
    fn local_size(&self) -> u32;

    /// This lane's 0-based rank within the scope; unique and contiguous.
    fn local_rank(&self) -> u32;

    /// Collective synchronization point. See the trait-level contract.
    fn barrier(&self);

    /// True for the lane with rank 0.
    fn is_leader(&self) -> bool {
        self.local_rank() == 0
    }
}
