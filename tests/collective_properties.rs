//! Algebraic properties every collective must satisfy, checked end-to-end
//! through real launches.

mod common;

use common::*;
use group_collectives::launch::{launch, HostBuffer, LaneContext, LaunchConfig};
use group_collectives::{reduce, Group, Truthy};

const LOCAL_SIZE: usize = 64;
const GLOBAL_SIZE: usize = 256;

/// Every lane of a group must observe the identical result, whatever the
/// input distribution.
#[test]
fn lanes_agree_on_result() {
    init_logging();
    let input = HostBuffer::from_vec(create_bool_test_data(LOCAL_SIZE, GLOBAL_SIZE));
    let output = HostBuffer::<u8>::zeroed(GLOBAL_SIZE);

    let kernel_input = input.clone();
    let kernel_output = output.clone();
    launch(
        LaunchConfig::new(GLOBAL_SIZE as u32, LOCAL_SIZE as u32),
        move |lane: &LaneContext| {
            let value = kernel_input.read()[lane.global_linear_id()];
            let result = reduce::any_of(lane.work_group(), value);
            kernel_output.write_at(lane.global_linear_id(), result as u8);
        },
    )
    .unwrap()
    .wait()
    .unwrap();

    let results = output.snapshot();
    for group in results.chunks(LOCAL_SIZE) {
        assert!(
            group.iter().all(|&r| r == group[0]),
            "lanes of one group disagreed: {group:?}"
        );
    }
}

/// A lane contributing an empty range behaves as the operator's identity;
/// a group of only empty ranges yields `all_of == true`, `any_of == false`,
/// `none_of == true`.
#[test]
fn empty_ranges_reduce_to_identity() {
    init_logging();
    let output = HostBuffer::<u8>::zeroed(GLOBAL_SIZE * 3);

    let kernel_output = output.clone();
    launch(
        LaunchConfig::new(GLOBAL_SIZE as u32, LOCAL_SIZE as u32),
        move |lane: &LaneContext| {
            let group = lane.work_group();
            let items: &[u8] = &[];
            let any = reduce::joint_any_of(group, items);
            let all = reduce::joint_all_of(group, items);
            let none = reduce::joint_none_of(group, items);

            let id = lane.global_linear_id();
            kernel_output.write_at(id, any as u8);
            kernel_output.write_at(GLOBAL_SIZE + id, all as u8);
            kernel_output.write_at(2 * GLOBAL_SIZE + id, none as u8);
        },
    )
    .unwrap()
    .wait()
    .unwrap();

    let results = output.snapshot();
    assert!(results[..GLOBAL_SIZE].iter().all(|&r| r == 0), "any_of");
    assert!(
        results[GLOBAL_SIZE..2 * GLOBAL_SIZE].iter().all(|&r| r == 1),
        "all_of"
    );
    assert!(results[2 * GLOBAL_SIZE..].iter().all(|&r| r == 1), "none_of");
}

/// An explicit truthiness predicate must be indistinguishable from the
/// default, for any source.
#[test]
fn explicit_truthiness_matches_default() {
    init_logging();
    let input = HostBuffer::from_vec(create_bool_test_data(LOCAL_SIZE, GLOBAL_SIZE));
    let output = HostBuffer::<u8>::zeroed(GLOBAL_SIZE);

    let kernel_input = input.clone();
    let kernel_output = output.clone();
    launch(
        LaunchConfig::new(GLOBAL_SIZE as u32, LOCAL_SIZE as u32),
        move |lane: &LaneContext| {
            let group = lane.work_group();
            let value = kernel_input.read()[lane.global_linear_id()];

            let matches = reduce::any_of(group, value)
                == reduce::any_of_by(group, value, |v| v.is_truthy())
                && reduce::all_of(group, value)
                    == reduce::all_of_by(group, value, |v| v.is_truthy())
                && reduce::none_of(group, value)
                    == reduce::none_of_by(group, value, |v| v.is_truthy());
            kernel_output.write_at(lane.global_linear_id(), matches as u8);
        },
    )
    .unwrap()
    .wait()
    .unwrap();

    assert!(output.snapshot().iter().all(|&r| r == 1));
}

/// Combining at sub-group scope, then combining the per-sub-group results
/// at work-group scope, must equal combining directly at work-group scope.
#[test]
fn sub_group_nesting_matches_direct_reduction() {
    init_logging();
    let input = HostBuffer::from_vec(create_bool_test_data(LOCAL_SIZE, GLOBAL_SIZE));
    let output = HostBuffer::<u8>::zeroed(GLOBAL_SIZE);

    let kernel_input = input.clone();
    let kernel_output = output.clone();
    launch(
        LaunchConfig::new(GLOBAL_SIZE as u32, LOCAL_SIZE as u32).with_sub_group_size(16),
        move |lane: &LaneContext| {
            let wg = lane.work_group();
            let sg = lane.sub_group();
            let value = kernel_input.read()[lane.global_linear_id()];

            // Or: non-leaders contribute the identity at the outer scope.
            let sub_any = reduce::any_of(sg, value);
            let nested_any = reduce::any_of(wg, sg.is_leader() && sub_any);
            let direct_any = reduce::any_of(wg, value);

            // And: identity is true.
            let sub_all = reduce::all_of(sg, value);
            let nested_all = reduce::all_of(wg, !sg.is_leader() || sub_all);
            let direct_all = reduce::all_of(wg, value);

            let matches = nested_any == direct_any && nested_all == direct_all;
            kernel_output.write_at(lane.global_linear_id(), matches as u8);
        },
    )
    .unwrap()
    .wait()
    .unwrap();

    assert!(output.snapshot().iter().all(|&r| r == 1));
}

/// Sequential collectives in the same kernel reuse the group's scratch
/// without interference.
#[test]
fn sequential_collectives_are_independent() {
    init_logging();
    let output = HostBuffer::<u8>::zeroed(GLOBAL_SIZE);

    let kernel_output = output.clone();
    launch(
        LaunchConfig::new(GLOBAL_SIZE as u32, LOCAL_SIZE as u32),
        move |lane: &LaneContext| {
            let group = lane.work_group();
            let rank = group.local_rank();

            let first = reduce::any_of(group, rank == 3);
            let second = reduce::none_of(group, rank == 3);
            let third = reduce::all_of(group, true);

            let matches = first && !second && third;
            kernel_output.write_at(lane.global_linear_id(), matches as u8);
        },
    )
    .unwrap()
    .wait()
    .unwrap();

    assert!(output.snapshot().iter().all(|&r| r == 1));
}
