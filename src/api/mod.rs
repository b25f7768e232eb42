mod scatter;
mod scatter_config;

pub use scatter::{PlotLayout, ScatterPlot};
pub use scatter_config::{
    DEFAULT_SCATTER_SYMBOL, MarkerSelection, SCATTER_CONFIG_JSON_SCHEMA_V1, ScatterPlotConfig,
};
