use tracing::debug;

use crate::core::{
    Axis, AxisRange, ErrorBar, PlotWindow, Point2, PointSeries, clip_log_error_bars,
    resolve_plot_window, runs_of_mask, symmetric_error_bars,
};
use crate::error::PlotResult;
use crate::render::{LineType, PlotDevice, PlotRenderer, StyleKey};

use super::{MarkerSelection, ScatterPlotConfig};

/// Geometry selected for drawing, before any device call.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    pub window: PlotWindow,
    pub markers: MarkerSelection,
    /// Visible points, present when symbols are drawn.
    pub symbol_points: Option<Vec<Point2>>,
    /// One polyline per contiguous visible run, empty without a line type.
    pub curves: Vec<Vec<Point2>>,
    /// Vertical whiskers from `yerr`.
    pub y_error_bars: Vec<ErrorBar>,
    /// Horizontal whiskers from `xerr`.
    pub x_error_bars: Vec<ErrorBar>,
}

/// Quick scatter/line plot of one point series.
///
/// Construction does all the range and visibility work, so an unplottable
/// series fails before anything reaches a device.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    series: PointSeries,
    config: ScatterPlotConfig,
    layout: PlotLayout,
}

impl ScatterPlot {
    pub fn new(series: PointSeries, config: ScatterPlotConfig) -> PlotResult<Self> {
        let xrange = config.xrange.map(AxisRange::validate).transpose()?;
        let yrange = config.yrange.map(AxisRange::validate).transpose()?;
        let markers = config.markers()?;
        let window = resolve_plot_window(&series, config.scales(), xrange, yrange)?;

        let symbol_points: Option<Vec<Point2>> = markers.symbol_type.map(|_| {
            window
                .visible_indices(series.len())
                .into_iter()
                .map(|i| series.point(i))
                .collect()
        });

        let curves: Vec<Vec<Point2>> = if markers.line_type.is_some() {
            match &window.mask {
                None => vec![series.points().collect()],
                Some(mask) => runs_of_mask(mask)
                    .into_iter()
                    .map(|run| run.map(|i| series.point(i)).collect())
                    .collect(),
            }
        } else {
            Vec::new()
        };

        let y_error_bars = axis_error_bars(&series, Axis::Y, &config, window.yrange)?;
        let x_error_bars = axis_error_bars(&series, Axis::X, &config, window.xrange)?;

        debug!(
            points = series.len(),
            curves = curves.len(),
            y_error_bars = y_error_bars.len(),
            x_error_bars = x_error_bars.len(),
            "built scatter layout"
        );

        Ok(Self {
            series,
            config,
            layout: PlotLayout {
                window,
                markers,
                symbol_points,
                curves,
                y_error_bars,
                x_error_bars,
            },
        })
    }

    #[must_use]
    pub fn series(&self) -> &PointSeries {
        &self.series
    }

    #[must_use]
    pub fn config(&self) -> &ScatterPlotConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    #[must_use]
    pub fn xrange(&self) -> Option<AxisRange> {
        self.layout.window.xrange
    }

    #[must_use]
    pub fn yrange(&self) -> Option<AxisRange> {
        self.layout.window.yrange
    }

    /// Draws symbols, curves and error bars inside one saved scope.
    pub fn emit<D: PlotDevice>(&self, renderer: &mut PlotRenderer<D>) -> PlotResult<()> {
        renderer.with_saved_state(|r| {
            if let Some(color) = &self.config.color {
                r.set(StyleKey::Color, color.clone())?;
            }
            if let Some(width) = self.config.line_width {
                r.set(StyleKey::LineWidth, width)?;
            }

            if let (Some(points), Some(kind)) =
                (&self.layout.symbol_points, self.layout.markers.symbol_type)
            {
                r.with_saved_state(|r| {
                    r.set(StyleKey::SymbolType, kind)?;
                    if let Some(size) = self.config.symbol_size {
                        r.set(StyleKey::SymbolSize, size)?;
                    }
                    r.symbols(points)
                })?;
            }

            if let Some(line_type) = self.layout.markers.line_type {
                r.with_saved_state(|r| {
                    r.set(StyleKey::LineType, line_type)?;
                    for curve in &self.layout.curves {
                        r.curve(curve)?;
                    }
                    Ok(())
                })?;
            }

            if !self.layout.y_error_bars.is_empty() || !self.layout.x_error_bars.is_empty() {
                r.with_saved_state(|r| self.emit_error_bars(r))?;
            }
            Ok(())
        })
    }

    fn emit_error_bars<D: PlotDevice>(&self, r: &mut PlotRenderer<D>) -> PlotResult<()> {
        r.set(
            StyleKey::LineType,
            self.config.err_line_type.unwrap_or(LineType::Solid),
        )?;
        if let Some(width) = self.config.err_line_width {
            r.set(StyleKey::LineWidth, width)?;
        }
        if let Some(color) = &self.config.err_line_color {
            r.set(StyleKey::LineColor, color.clone())?;
        }

        let (x, y) = (self.series.x(), self.series.y());
        for bar in &self.layout.y_error_bars {
            let at = x[bar.index];
            r.line(Point2::new(at, bar.low), Point2::new(at, bar.high))?;
        }
        for bar in &self.layout.x_error_bars {
            let at = y[bar.index];
            r.line(Point2::new(bar.low, at), Point2::new(bar.high, at))?;
        }
        Ok(())
    }
}

fn axis_error_bars(
    series: &PointSeries,
    axis: Axis,
    config: &ScatterPlotConfig,
    range: Option<AxisRange>,
) -> PlotResult<Vec<ErrorBar>> {
    let Some(errors) = series.errors(axis) else {
        return Ok(Vec::new());
    };
    let values = series.values(axis);
    let log = match axis {
        Axis::X => config.xlog,
        Axis::Y => config.ylog,
    };
    match (log, range) {
        (true, Some(range)) => clip_log_error_bars(values, errors, range),
        _ => symmetric_error_bars(values, errors),
    }
}
