//! Kernel launch boundary: lane spawning, group wiring, host completion.
//!
//! A launch turns a [`LaunchConfig`] into OS threads — one per lane — wired
//! together with the shared barriers and scratch storage their groups need.
//! Work-groups execute one after another (nothing in the collective model
//! guarantees cross-group visibility, so nothing is lost); lanes within a
//! work-group run concurrently. The host observes completion only through
//! the returned [`Submission`].

pub mod buffer;

pub use buffer::HostBuffer;

use std::sync::{Arc, Barrier};
use std::thread;

use serde::{Deserialize, Serialize};

use crate::error::CollectiveError;
use crate::group::geometry::Dim3;
use crate::group::sub_group::DEFAULT_SUB_GROUP_SIZE;
use crate::group::{SubGroup, WorkGroup};
use crate::reduce::tree::ScratchPad;
use crate::{config_error, runtime_error, Result};

/// Geometry of one kernel launch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Global index space, 1D/2D/3D.
    pub global: Dim3,
    /// Work-group extent; each component must divide the matching global
    /// component.
    pub local: Dim3,
    /// Sub-group width used to partition each work-group.
    pub sub_group_size: u32,
}

impl LaunchConfig {
    pub fn new(global: impl Into<Dim3>, local: impl Into<Dim3>) -> Self {
        Self {
            global: global.into(),
            local: local.into(),
            sub_group_size: DEFAULT_SUB_GROUP_SIZE,
        }
    }

    pub fn with_sub_group_size(mut self, sub_group_size: u32) -> Self {
        self.sub_group_size = sub_group_size;
        self
    }

    /// Number of work-groups per dimension.
    pub fn group_range(&self) -> Dim3 {
        Dim3 {
            x: self.global.x / self.local.x,
            y: self.global.y / self.local.y,
            z: self.global.z / self.local.z,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.global.count() == 0 {
            return Err(config_error!("global range {:?} is empty", self.global));
        }
        if !self.local.divides(self.global) {
            return Err(config_error!(
                "local range {:?} does not divide global range {:?}",
                self.local,
                self.global
            ));
        }
        if self.sub_group_size == 0 {
            return Err(config_error!("sub-group size must be nonzero"));
        }
        Ok(())
    }
}

/// Everything one lane sees of the launch: its indices and its group
/// handles. Constructed by [`launch`], never by user code.
pub struct LaneContext {
    global_idx: Dim3,
    global_linear_id: usize,
    work_group: WorkGroup,
    sub_group: SubGroup,
}

impl LaneContext {
    /// This lane's 3-component index in the global range.
    pub fn global_idx(&self) -> Dim3 {
        self.global_idx
    }

    /// This lane's linear index in the global range.
    pub fn global_linear_id(&self) -> usize {
        self.global_linear_id
    }

    pub fn work_group(&self) -> &WorkGroup {
        &self.work_group
    }

    pub fn sub_group(&self) -> &SubGroup {
        &self.sub_group
    }
}

/// A kernel body, executed once per lane.
pub trait GroupKernel: Send + Sync + 'static {
    fn execute(&self, lane: &LaneContext);
}

impl<F> GroupKernel for F
where
    F: Fn(&LaneContext) + Send + Sync + 'static,
{
    fn execute(&self, lane: &LaneContext) {
        self(lane)
    }
}

/// A submitted launch. The host learns of completion — or of a fault —
/// only by calling [`wait`](Self::wait).
pub struct Submission {
    handle: thread::JoinHandle<std::result::Result<(), String>>,
}

impl Submission {
    /// Block the calling host thread until the launch has finished.
    ///
    /// A faulted launch (any lane panicked) surfaces as
    /// [`CollectiveError::LaunchFault`]; fatal, never retried, and no
    /// partial results are defined. A launch whose lanes stall on a barrier
    /// blocks here indefinitely — there is no timeout or cancellation,
    /// matching accelerator execution semantics.
    pub fn wait(self) -> Result<()> {
        match self.handle.join() {
            Ok(Ok(())) => {
                log::trace!("Launch complete");
                Ok(())
            }
            Ok(Err(msg)) => Err(CollectiveError::LaunchFault(msg)),
            Err(_) => Err(CollectiveError::LaunchFault(
                "launch orchestrator panicked".into(),
            )),
        }
    }

    /// Non-blocking completion probe.
    pub fn is_complete(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Submit a kernel over the given launch geometry.
///
/// Returns as soon as the launch is enqueued; use [`Submission::wait`] to
/// synchronize with completion.
pub fn launch<K: GroupKernel>(config: LaunchConfig, kernel: K) -> Result<Submission> {
    config.validate()?;
    log::debug!(
        "Launching kernel: global {:?}, local {:?}, sub-group size {}",
        config.global,
        config.local,
        config.sub_group_size
    );

    let kernel = Arc::new(kernel);
    let handle = thread::Builder::new()
        .name("collective-launch".into())
        .spawn(move || run_launch(&config, kernel))
        .map_err(|e| runtime_error!("Failed to spawn launch thread: {}", e))?;

    Ok(Submission { handle })
}

/// Drive every work-group of the launch, one group at a time.
fn run_launch<K: GroupKernel>(
    config: &LaunchConfig,
    kernel: Arc<K>,
) -> std::result::Result<(), String> {
    let local_size = config.local.count() as usize;
    let group_range = config.group_range();
    let sub_group_size = config.sub_group_size as usize;

    for group_linear in 0..group_range.count() as u32 {
        let group_id = group_range.delinearize(group_linear);
        log::trace!("Dispatching work-group {:?} ({} lanes)", group_id, local_size);

        let wg_barrier = Arc::new(Barrier::new(local_size));
        let wg_scratch = Arc::new(ScratchPad::new(local_size));

        // One barrier + slot array per sub-group partition; the trailing
        // partition may be narrower than the configured width.
        let num_sub_groups = local_size.div_ceil(sub_group_size);
        let sub_state: Vec<(Arc<Barrier>, Arc<ScratchPad>)> = (0..num_sub_groups)
            .map(|i| {
                let width = sub_group_size.min(local_size - i * sub_group_size);
                (
                    Arc::new(Barrier::new(width)),
                    Arc::new(ScratchPad::new(width)),
                )
            })
            .collect();

        // Wire every lane's context before spawning any thread, so a
        // malformed group can never leave siblings parked on a barrier.
        let mut contexts = Vec::with_capacity(local_size);
        for lane_linear in 0..local_size {
            let local_idx = config.local.delinearize(lane_linear as u32);
            let global_idx = group_id.scaled(config.local).offset(local_idx);
            let global_linear_id = config.global.linearize(global_idx) as usize;

            let work_group = WorkGroup::from_parts(
                config.local,
                group_id,
                lane_linear as u32,
                Arc::clone(&wg_barrier),
                Arc::clone(&wg_scratch),
            )
            .map_err(|e| e.to_string())?;

            let sg_index = lane_linear / sub_group_size;
            let sg_width = sub_group_size.min(local_size - sg_index * sub_group_size);
            let (sg_barrier, sg_slots) = &sub_state[sg_index];
            let sub_group = SubGroup::from_parts(
                sg_width as u32,
                (lane_linear % sub_group_size) as u32,
                sg_index as u32,
                Arc::clone(sg_barrier),
                Arc::clone(sg_slots),
            )
            .map_err(|e| e.to_string())?;

            contexts.push(LaneContext {
                global_idx,
                global_linear_id,
                work_group,
                sub_group,
            });
        }

        let handles: Vec<_> = contexts
            .into_iter()
            .map(|ctx| {
                let kernel = Arc::clone(&kernel);
                thread::spawn(move || kernel.execute(&ctx))
            })
            .collect();

        let mut fault = None;
        for handle in handles {
            if handle.join().is_err() && fault.is_none() {
                fault = Some(format!("lane faulted in work-group {group_id:?}"));
            }
        }
        if let Some(msg) = fault {
            return Err(msg);
        }
    }

    Ok(())
}
