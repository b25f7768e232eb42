use std::ops::Range;

use crate::core::VisibilityMask;

/// Splits strictly increasing indices into maximal runs of consecutive
/// integers.
///
/// Each run is returned as the half-open index range it covers, so a
/// polyline can be stroked once per run instead of bridging excluded points.
/// Empty input yields no runs.
#[must_use]
pub fn split_runs(indices: &[usize]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let Some((&first, rest)) = indices.split_first() else {
        return runs;
    };

    let mut start = first;
    let mut end = first + 1;
    for &index in rest {
        if index != end {
            runs.push(start..end);
            start = index;
        }
        end = index + 1;
    }
    runs.push(start..end);
    runs
}

#[must_use]
pub fn runs_of_mask(mask: &VisibilityMask) -> Vec<Range<usize>> {
    split_runs(mask.indices())
}
