//! Hierarchical group-collective boolean reductions.
//!
//! Cooperating lanes — a whole work-group, or a hardware sub-group within
//! one — agree on a single boolean derived from per-lane values or per-lane
//! element ranges: `any_of`, `all_of`, `none_of`, all instantiations of one
//! generic reduction over an associative boolean operator. Sub-groups
//! reduce through an emulated native vote instruction; work-groups (and
//! sub-groups on builds without the `native-vote` feature) combine through
//! a barrier-synchronized tree over shared scratch storage.
//!
//! Lanes are OS threads: a [`launch::launch`] spawns one thread per lane,
//! wires up the group barriers and scratch, and hands each lane a
//! [`launch::LaneContext`]. The host synchronizes with a launch only
//! through [`launch::Submission::wait`].
//!
//! ```no_run
//! use group_collectives::launch::{launch, LaneContext, LaunchConfig, HostBuffer};
//! use group_collectives::reduce;
//!
//! let flags = HostBuffer::from_vec(vec![0u8; 1024]);
//! let out = HostBuffer::<u8>::zeroed(1024);
//!
//! let kernel_flags = flags.clone();
//! let kernel_out = out.clone();
//! let submission = launch(
//!     LaunchConfig::new(1024u32, 256u32),
//!     move |lane: &LaneContext| {
//!         let value = kernel_flags.read()[lane.global_linear_id()];
//!         let result = reduce::any_of(lane.work_group(), value);
//!         kernel_out.write_at(lane.global_linear_id(), result as u8);
//!     },
//! )
//! .unwrap();
//! submission.wait().unwrap();
//! ```

pub mod error;
pub mod group;
pub mod launch;
pub mod reduce;

pub use error::{CollectiveError, Result};
pub use group::{Dim3, Group, SubGroup, WorkGroup};
pub use launch::{launch, GroupKernel, HostBuffer, LaneContext, LaunchConfig, Submission};
pub use reduce::{all_of, any_of, none_of, BoolOp, BoolReduce, Truthy};
