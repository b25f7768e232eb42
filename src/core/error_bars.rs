use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::AxisRange;
use crate::core::range::{LOG_RANGE_HIGH_PAD, LOG_RANGE_LOW_PAD};
use crate::core::types::ensure_same_len;
use crate::error::PlotResult;

/// Whisker endpoints for one point's error bar along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorBar {
    /// Index of the source point in the series.
    pub index: usize,
    pub low: f64,
    pub high: f64,
}

/// Computes log-axis error bars, dropping bars that never rise above zero.
///
/// `low` is clamped into `[0.5 * range.low, 2 * max(max(high), range.high)]`
/// so the whisker cap of a bar reaching into the non-positive domain lands
/// outside the visible area instead of drawing at the axis edge.
pub fn clip_log_error_bars(
    centers: &[f64],
    errors: &[f64],
    range: AxisRange,
) -> PlotResult<Vec<ErrorBar>> {
    ensure_same_len("errors", centers.len(), errors.len())?;

    let mut bars: Vec<ErrorBar> = centers
        .iter()
        .zip(errors)
        .enumerate()
        .map(|(index, (c, e))| ErrorBar {
            index,
            low: c - e,
            high: c + e,
        })
        .filter(|bar| bar.high > 0.0)
        .collect();

    if bars.is_empty() {
        return Ok(bars);
    }

    let max_high = bars.iter().map(|bar| bar.high).fold(f64::NEG_INFINITY, f64::max);
    let floor = LOG_RANGE_LOW_PAD * range.low;
    let ceiling = LOG_RANGE_HIGH_PAD * max_high.max(range.high);
    for bar in &mut bars {
        // Not `f64::clamp`: that panics when floor > ceiling.
        bar.low = bar.low.max(floor).min(ceiling);
    }

    trace!(
        kept = bars.len(),
        total = centers.len(),
        floor,
        ceiling,
        "clipped log error bars"
    );
    Ok(bars)
}

/// Plain `center -/+ error` bars for linear axes.
pub fn symmetric_error_bars(centers: &[f64], errors: &[f64]) -> PlotResult<Vec<ErrorBar>> {
    ensure_same_len("errors", centers.len(), errors.len())?;
    Ok(centers
        .iter()
        .zip(errors)
        .enumerate()
        .map(|(index, (c, e))| ErrorBar {
            index,
            low: c - e,
            high: c + e,
        })
        .collect())
}
