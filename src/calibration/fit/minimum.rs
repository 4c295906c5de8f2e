//! Deterministic bounded minimization over an integer domain.

use rayon::prelude::*;

/// One sub-interval candidate during minimization.
#[derive(Debug, Clone, Copy)]
struct SearchRange {
    start: i32,
    end: i32,
    testpoint: i32,
}

/// Approximate the domain value minimizing `objective` over `[min, max]`.
///
/// The domain is split into `parallelism` equal-width sub-ranges, the
/// objective is sampled once at each midpoint (in parallel, each evaluation
/// independent), and the search descends into the sub-range with the lowest
/// sample, first range winning ties. Descent repeats until a sub-range spans
/// a single value.
///
/// Deterministic for a given parallelism, but not guaranteed to find the
/// true global minimum: a narrow valley can hide inside a sub-range that
/// loses to a wider, shallower one at a coarse partitioning depth. In
/// exchange the objective is evaluated only O(P log_P(range)) times instead
/// of O(range).
pub fn find_possible_minimum<F>(min: i32, max: i32, parallelism: u32, objective: F) -> i32
where
    F: Fn(i32) -> u64 + Sync,
{
    // A single partition would never narrow the range.
    assert!(parallelism >= 2, "parallelism must be at least 2");
    assert!(min <= max);

    let mut lo = min;
    let mut hi = max;

    loop {
        if lo == hi {
            return lo;
        }

        let step = (hi - lo) / parallelism as i32 + 1;
        let offset = step / 2;

        let ranges: Vec<SearchRange> = (0..parallelism as i32)
            .map(|i| {
                let start = (lo + i * step).min(hi);
                let end = (start + step - 1).min(hi);
                SearchRange {
                    start,
                    end,
                    testpoint: (start + offset).min(end),
                }
            })
            .collect();

        let values: Vec<u64> = ranges
            .par_iter()
            .map(|range| objective(range.testpoint))
            .collect();

        let mut best = 0;
        for (i, value) in values.iter().enumerate().skip(1) {
            if *value < values[best] {
                best = i;
            }
        }

        if step == 1 {
            return ranges[best].testpoint;
        }
        lo = ranges[best].start;
        hi = ranges[best].end;
    }
}
