//! sciplot-rs: rendering and geometry core of a scientific plotting stack.
//!
//! The crate decides what geometry and style reach a vector-graphics
//! backend: a scoped graphics-state stack, polygon and segment clipping,
//! log-axis range resolution with visibility masks, run segmentation of
//! masked polylines, and log-axis error-bar clamping. Rasterization and
//! output encoding belong to the [`render::PlotDevice`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ScatterPlot, ScatterPlotConfig};
pub use error::{PlotError, PlotResult};
