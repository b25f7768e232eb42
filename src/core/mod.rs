pub mod clip;
pub mod error_bars;
pub mod range;
pub mod runs;
pub mod types;

pub use clip::{KeepSide, clip_half_plane, clip_segment, clip_to_rect};
pub use error_bars::{ErrorBar, clip_log_error_bars, symmetric_error_bars};
pub use range::{
    LogRangeResolution, PlotWindow, resolve_log_range, resolve_log_range_with_mask,
    resolve_plot_window,
};
pub use runs::{runs_of_mask, split_runs};
pub use types::{
    Axis, AxisRange, AxisScale, AxisScales, ClipRect, Point2, PointSeries, VisibilityMask,
};
