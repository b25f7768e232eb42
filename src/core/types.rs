use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Coordinate axis selector, used wherever an algorithm works on one
/// dimension of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn coord(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[must_use]
    pub fn with_coord(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
        self
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Ordered `(low, high)` plotting range for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub low: f64,
    pub high: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn validate(self) -> PlotResult<Self> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(PlotError::InvalidData(
                "axis range bounds must be finite".to_owned(),
            ));
        }
        if self.low >= self.high {
            return Err(PlotError::InvalidData(format!(
                "axis range must satisfy low < high, got [{}, {}]",
                self.low, self.high
            )));
        }
        Ok(self)
    }

    /// Both bounds are strictly positive, as a log axis requires.
    #[must_use]
    pub fn is_log_admissible(self) -> bool {
        self.low > 0.0 && self.high > 0.0
    }

    #[must_use]
    pub fn contains_inclusive(self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

/// Axis-aligned clip box read from graphics state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl ClipRect {
    #[must_use]
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    #[must_use]
    pub fn contains(self, point: Point2) -> bool {
        point.x >= self.xmin && point.x <= self.xmax && point.y >= self.ymin && point.y <= self.ymax
    }

    pub fn validate(self) -> PlotResult<Self> {
        let finite = [self.xmin, self.xmax, self.ymin, self.ymax]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.xmin > self.xmax || self.ymin > self.ymax {
            return Err(PlotError::InvalidStyle(format!(
                "clip rect must be finite with min <= max, got x=[{}, {}] y=[{}, {}]",
                self.xmin, self.xmax, self.ymin, self.ymax
            )));
        }
        Ok(self)
    }
}

/// Mapping mode of one plot axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisScale {
    #[default]
    Linear,
    /// Only strictly positive values are representable.
    Log,
}

impl AxisScale {
    #[must_use]
    pub const fn from_log_flag(log: bool) -> Self {
        if log { Self::Log } else { Self::Linear }
    }

    #[must_use]
    pub const fn is_log(self) -> bool {
        matches!(self, Self::Log)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisScales {
    pub x: AxisScale,
    pub y: AxisScale,
}

impl AxisScales {
    #[must_use]
    pub const fn new(x: AxisScale, y: AxisScale) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn from_log_flags(xlog: bool, ylog: bool) -> Self {
        Self::new(AxisScale::from_log_flag(xlog), AxisScale::from_log_flag(ylog))
    }
}

/// Paired `x`/`y` samples with optional symmetric errors.
///
/// All present sequences share one length; constructors reject anything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSeries {
    x: Vec<f64>,
    y: Vec<f64>,
    xerr: Option<Vec<f64>>,
    yerr: Option<Vec<f64>>,
}

impl PointSeries {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> PlotResult<Self> {
        ensure_same_len("y", x.len(), y.len())?;
        Ok(Self {
            x,
            y,
            xerr: None,
            yerr: None,
        })
    }

    pub fn with_xerr(mut self, xerr: Vec<f64>) -> PlotResult<Self> {
        validate_errors("xerr", self.x.len(), &xerr)?;
        self.xerr = Some(xerr);
        Ok(self)
    }

    pub fn with_yerr(mut self, yerr: Vec<f64>) -> PlotResult<Self> {
        validate_errors("yerr", self.x.len(), &yerr)?;
        self.yerr = Some(yerr);
        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn xerr(&self) -> Option<&[f64]> {
        self.xerr.as_deref()
    }

    #[must_use]
    pub fn yerr(&self) -> Option<&[f64]> {
        self.yerr.as_deref()
    }

    #[must_use]
    pub fn values(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    #[must_use]
    pub fn errors(&self, axis: Axis) -> Option<&[f64]> {
        match axis {
            Axis::X => self.xerr(),
            Axis::Y => self.yerr(),
        }
    }

    /// Point at `index`; panics when out of bounds like slice indexing.
    #[must_use]
    pub fn point(&self, index: usize) -> Point2 {
        Point2::new(self.x[index], self.y[index])
    }

    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| Point2::new(x, y))
    }
}

pub(crate) fn ensure_same_len(field: &'static str, expected: usize, actual: usize) -> PlotResult<()> {
    if expected != actual {
        return Err(PlotError::SeriesLengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

fn validate_errors(field: &'static str, expected: usize, errors: &[f64]) -> PlotResult<()> {
    ensure_same_len(field, expected, errors.len())?;
    if let Some(bad) = errors.iter().find(|e| !(e.is_finite() && **e >= 0.0)) {
        return Err(PlotError::InvalidData(format!(
            "{field} values must be finite and >= 0, got {bad}"
        )));
    }
    Ok(())
}

/// Strictly increasing indices of the points admissible for the current
/// axis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VisibilityMask(Vec<usize>);

impl VisibilityMask {
    /// Collects every index in `0..len` accepted by `admit`.
    pub fn from_predicate(len: usize, mut admit: impl FnMut(usize) -> bool) -> Self {
        Self((0..len).filter(|&i| admit(i)).collect())
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}
