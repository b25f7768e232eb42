use tracing::{debug, trace};

use crate::core::types::ensure_same_len;
use crate::core::{AxisRange, AxisScales, PointSeries, VisibilityMask};
use crate::error::{PlotError, PlotResult};

/// Lower bound padding factor applied to a computed log range.
pub const LOG_RANGE_LOW_PAD: f64 = 0.5;
/// Upper bound padding factor applied to a computed log range.
pub const LOG_RANGE_HIGH_PAD: f64 = 2.0;

/// Resolved log-axis range together with the indices admissible under it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRangeResolution {
    pub range: AxisRange,
    pub admissible: VisibilityMask,
}

/// Computes a plotting range for a log-scaled axis.
///
/// An explicit `input_range` is returned verbatim once both bounds are
/// checked to be strictly positive. Without one, the range spans the
/// positive values (and their error bars), padded by `0.5x` below and `2x`
/// above.
pub fn resolve_log_range(
    values: &[f64],
    errors: Option<&[f64]>,
    input_range: Option<AxisRange>,
) -> PlotResult<AxisRange> {
    resolve_log_range_with_mask(values, errors, input_range).map(|resolution| resolution.range)
}

/// Same as [`resolve_log_range`], also reporting which values are
/// admissible: inside `[low, high]` for an explicit range, strictly
/// positive for a computed one.
pub fn resolve_log_range_with_mask(
    values: &[f64],
    errors: Option<&[f64]>,
    input_range: Option<AxisRange>,
) -> PlotResult<LogRangeResolution> {
    if let Some(errors) = errors {
        ensure_same_len("errors", values.len(), errors.len())?;
    }

    if let Some(range) = input_range {
        if !range.is_log_admissible() {
            return Err(PlotError::InvalidLogRange {
                low: range.low,
                high: range.high,
            });
        }
        let admissible =
            VisibilityMask::from_predicate(values.len(), |i| range.contains_inclusive(values[i]));
        trace!(
            low = range.low,
            high = range.high,
            admissible = admissible.len(),
            "using explicit log range"
        );
        return Ok(LogRangeResolution { range, admissible });
    }

    let positive = VisibilityMask::from_predicate(values.len(), |i| values[i] > 0.0);
    if positive.is_empty() {
        return Err(PlotError::NoPositiveValues);
    }

    let mut min_value = f64::INFINITY;
    for &i in positive.indices() {
        min_value = min_value.min(values[i]);
    }

    let max_value = match errors {
        Some(errors) => {
            // Lower whiskers only tighten the bound while they stay positive.
            for &i in positive.indices() {
                let lowered = values[i] - errors[i];
                if lowered > 0.0 {
                    min_value = min_value.min(lowered);
                }
            }
            values
                .iter()
                .zip(errors)
                .map(|(v, e)| v + e)
                .fold(f64::NEG_INFINITY, f64::max)
        }
        None => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };

    let range = AxisRange::new(min_value * LOG_RANGE_LOW_PAD, max_value * LOG_RANGE_HIGH_PAD);
    debug!(
        low = range.low,
        high = range.high,
        positive = positive.len(),
        total = values.len(),
        "computed log range"
    );
    Ok(LogRangeResolution {
        range,
        admissible: positive,
    })
}

/// Axis ranges and the point subset to draw for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotWindow {
    pub xrange: Option<AxisRange>,
    pub yrange: Option<AxisRange>,
    /// `None` when no axis is logarithmic and every point is drawn.
    pub mask: Option<VisibilityMask>,
}

impl PlotWindow {
    /// Indices to draw: the mask when present, otherwise every point.
    #[must_use]
    pub fn visible_indices(&self, len: usize) -> Vec<usize> {
        match &self.mask {
            Some(mask) => mask.indices().to_vec(),
            None => (0..len).collect(),
        }
    }
}

/// Resolves both axis ranges and the visibility mask of `series`.
///
/// Linear axes keep their explicit range untouched (or none at all). On a
/// log axis a point is visible only when its value is strictly above the
/// resolved lower bound; with two log axes both conditions must hold.
pub fn resolve_plot_window(
    series: &PointSeries,
    scales: AxisScales,
    xrange: Option<AxisRange>,
    yrange: Option<AxisRange>,
) -> PlotResult<PlotWindow> {
    if !scales.x.is_log() && !scales.y.is_log() {
        return Ok(PlotWindow {
            xrange,
            yrange,
            mask: None,
        });
    }

    let xrange = if scales.x.is_log() {
        Some(resolve_log_range(series.x(), series.xerr(), xrange)?)
    } else {
        xrange
    };
    let yrange = if scales.y.is_log() {
        Some(resolve_log_range(series.y(), series.yerr(), yrange)?)
    } else {
        yrange
    };

    let x_floor = xrange.filter(|_| scales.x.is_log()).map(|r| r.low);
    let y_floor = yrange.filter(|_| scales.y.is_log()).map(|r| r.low);
    let (x, y) = (series.x(), series.y());
    let mask = VisibilityMask::from_predicate(series.len(), |i| {
        x_floor.is_none_or(|low| x[i] > low) && y_floor.is_none_or(|low| y[i] > low)
    });

    if mask.is_empty() {
        return Err(PlotError::NoVisiblePoints);
    }
    debug!(
        visible = mask.len(),
        total = series.len(),
        "resolved plot window"
    );

    Ok(PlotWindow {
        xrange,
        yrange,
        mask: Some(mask),
    })
}
