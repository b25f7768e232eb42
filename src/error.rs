use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlotError {
    #[error("{field} and points are different size: expected {expected}, got {actual}")]
    SeriesLengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("cannot use plot range <= 0 for log axes, got [{low}, {high}]")]
    InvalidLogRange { low: f64, high: f64 },

    #[error("no values are greater than zero on log axis")]
    NoPositiveValues,

    #[error("no points are in range")]
    NoVisiblePoints,

    #[error("restore_state called without a matching save_state")]
    UnbalancedRestore,

    #[error("renderer closed with {depth} unrestored state scope(s)")]
    UnbalancedScope { depth: usize },

    #[error("style `{key}` expects a {expected} value")]
    StyleMismatch {
        key: &'static str,
        expected: &'static str,
    },

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
