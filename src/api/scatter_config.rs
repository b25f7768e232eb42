use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, AxisScales};
use crate::error::{PlotError, PlotResult};
use crate::render::{ColorSpec, LineType, SymbolKind, SymbolShape};

pub const SCATTER_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Marker used when a scatter plot asks for symbols without naming one.
pub const DEFAULT_SCATTER_SYMBOL: SymbolKind = SymbolKind::Shape(SymbolShape::FilledCircle);

/// Options of a quick scatter/line plot.
///
/// Every field is optional in JSON, so host applications can persist only
/// what they override.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterPlotConfig {
    pub xlog: bool,
    pub ylog: bool,
    pub xrange: Option<AxisRange>,
    pub yrange: Option<AxisRange>,
    /// Shorthand marker: a canonical line-type name selects a curve,
    /// anything else names a symbol.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub line_type: Option<LineType>,
    pub symbol_type: Option<SymbolKind>,
    pub symbol_size: Option<f64>,
    pub color: Option<ColorSpec>,
    pub line_width: Option<f64>,
    pub err_line_type: Option<LineType>,
    pub err_line_width: Option<f64>,
    pub err_line_color: Option<ColorSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ScatterPlotConfigJsonContractV1 {
    schema_version: u32,
    config: ScatterPlotConfig,
}

/// Line and symbol selection after shorthand expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSelection {
    pub line_type: Option<LineType>,
    /// `None` when only a curve is drawn.
    pub symbol_type: Option<SymbolKind>,
}

impl ScatterPlotConfig {
    #[must_use]
    pub fn scales(&self) -> AxisScales {
        AxisScales::from_log_flags(self.xlog, self.ylog)
    }

    /// Expands the `type` shorthand; symbols are drawn when one is named or
    /// when no marker of either kind is.
    pub fn markers(&self) -> PlotResult<MarkerSelection> {
        let mut line_type = self.line_type;
        let mut symbol_type = self.symbol_type;
        if let Some(kind) = self.kind.as_deref() {
            match LineType::from_canonical_name(kind) {
                Some(parsed) => line_type = Some(parsed),
                None => symbol_type = Some(kind.parse()?),
            }
        }
        if symbol_type.is_none() && line_type.is_none() {
            symbol_type = Some(DEFAULT_SCATTER_SYMBOL);
        }
        Ok(MarkerSelection {
            line_type,
            symbol_type,
        })
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        let payload = ScatterPlotConfigJsonContractV1 {
            schema_version: SCATTER_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize scatter config: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse scatter config: {e}")))?;

        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidData(format!("failed to parse scatter config: {e}"))
            });
        }

        let payload: ScatterPlotConfigJsonContractV1 =
            serde_json::from_value(value).map_err(|e| {
                PlotError::InvalidData(format!("failed to parse scatter config payload: {e}"))
            })?;
        if payload.schema_version != SCATTER_CONFIG_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported scatter config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
