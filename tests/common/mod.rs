//! Shared data generator and validators for the collective test suites.
//!
//! Work-groups are fed one of four canonical boolean patterns, cycling by
//! group linear id: alternating starting true, all false, alternating
//! starting false, all true. The cycle makes the per-group outcomes of
//! `any_of`/`all_of`/`none_of` a fixed four-element vector — and because
//! every aligned sub-slice (width >= 2) of each pattern reduces to the same
//! outcome as the whole pattern, the same vectors hold per sub-group.

#![allow(dead_code)]

use group_collectives::Dim3;

/// Per-group expected results, cycling by group index.
pub const ANY_EXPECTED: [bool; 4] = [true, false, true, true];
pub const ALL_EXPECTED: [bool; 4] = [false, false, false, true];
pub const NONE_EXPECTED: [bool; 4] = [false, true, false, false];

/// Expected results under the logical-negation predicate.
pub const NEG_ANY_EXPECTED: [bool; 4] = [true, true, true, false];
pub const NEG_ALL_EXPECTED: [bool; 4] = [false, true, false, false];
pub const NEG_NONE_EXPECTED: [bool; 4] = [false, false, false, true];

/// Element `lane` of canonical pattern `pattern`.
pub fn pattern_value(pattern: usize, lane: usize) -> u8 {
    match pattern % 4 {
        0 => (lane % 2 == 0) as u8,
        1 => 0,
        2 => (lane % 2 == 1) as u8,
        _ => 1,
    }
}

/// 1D test data: `total` elements in chunks of `chunk_size`, chunk `i`
/// filled from canonical pattern `i % 4`.
pub fn create_bool_test_data(chunk_size: usize, total: usize) -> Vec<u8> {
    (0..total)
        .map(|i| pattern_value(i / chunk_size, i % chunk_size))
        .collect()
}

/// N-D test data: the element at each global linear id takes its value from
/// the pattern assigned to its work-group (by group linear id), indexed by
/// the lane's rank within that group. For a 1D launch this coincides with
/// [`create_bool_test_data`].
pub fn create_grouped_test_data(global: Dim3, local: Dim3) -> Vec<u8> {
    let group_range = Dim3::new(global.x / local.x, global.y / local.y, global.z / local.z);
    (0..global.count() as u32)
        .map(|linear| {
            let idx = global.delinearize(linear);
            let group = Dim3::new(idx.x / local.x, idx.y / local.y, idx.z / local.z);
            let local_idx = Dim3::new(idx.x % local.x, idx.y % local.y, idx.z % local.z);
            pattern_value(
                group_range.linearize(group) as usize,
                local.linearize(local_idx) as usize,
            )
        })
        .collect()
}

/// Validate per-group results of a 1D launch against the expected cycle.
///
/// Results are read at `offset + global linear id`. With `sub_group_size`
/// of 0 each work-group is checked as a whole; otherwise each
/// `sub_group_size`-wide partition is checked independently (the canonical
/// patterns reduce identically at both granularities).
pub fn check_binary_reduce(
    results: &[u8],
    local_size: usize,
    global_size: usize,
    expected: [bool; 4],
    name: &str,
    sub_group_size: usize,
    offset: usize,
) {
    let partition = if sub_group_size == 0 {
        local_size
    } else {
        sub_group_size
    };

    for group in 0..global_size / local_size {
        let want = expected[group % 4];
        let group_results = &results[offset + group * local_size..offset + (group + 1) * local_size];
        for (part_idx, part) in group_results.chunks(partition).enumerate() {
            for (lane, &value) in part.iter().enumerate() {
                assert_eq!(
                    value != 0,
                    want,
                    "{name}: group {group}, partition {part_idx}, lane {lane}: \
                     expected {want}, got {}",
                    value != 0
                );
            }
        }
    }
}

/// Validate per-group results of an N-D launch against the expected cycle,
/// reading each lane's result at its global linear id.
pub fn check_grouped_reduce(
    results: &[u8],
    global: Dim3,
    local: Dim3,
    expected: [bool; 4],
    name: &str,
) {
    let group_range = Dim3::new(global.x / local.x, global.y / local.y, global.z / local.z);
    for linear in 0..global.count() as u32 {
        let idx = global.delinearize(linear);
        let group = Dim3::new(idx.x / local.x, idx.y / local.y, idx.z / local.z);
        let group_linear = group_range.linearize(group) as usize;
        let want = expected[group_linear % 4];
        assert_eq!(
            results[linear as usize] != 0,
            want,
            "{name}: global id {linear} (group {group_linear}): expected {want}"
        );
    }
}

/// Initialize test logging once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
