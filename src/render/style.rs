use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ClipRect;
use crate::error::{PlotError, PlotResult};

use super::{ColorSpec, LineType, SymbolKind, TextHAlign, TextVAlign};

/// Closed set of style attributes tracked by the graphics state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKey {
    Color,
    LineColor,
    FillColor,
    LineType,
    LineWidth,
    FillLevel,
    FillMode,
    FontFace,
    FontSize,
    TextAngle,
    SymbolType,
    SymbolSize,
    TextHAlign,
    TextVAlign,
    ClipRect,
}

impl StyleKey {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::LineColor => "line_color",
            Self::FillColor => "fill_color",
            Self::LineType => "line_type",
            Self::LineWidth => "line_width",
            Self::FillLevel => "fill_level",
            Self::FillMode => "fill_mode",
            Self::FontFace => "font_face",
            Self::FontSize => "font_size",
            Self::TextAngle => "text_angle",
            Self::SymbolType => "symbol_type",
            Self::SymbolSize => "symbol_size",
            Self::TextHAlign => "text_h_align",
            Self::TextVAlign => "text_v_align",
            Self::ClipRect => "clip_rect",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleValue {
    Color(ColorSpec),
    Number(f64),
    Text(String),
    LineType(LineType),
    Symbol(SymbolKind),
    HAlign(TextHAlign),
    VAlign(TextVAlign),
    ClipRect(ClipRect),
}

impl StyleValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_symbol(&self) -> Option<SymbolKind> {
        match self {
            Self::Symbol(kind) => Some(*kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_clip_rect(&self) -> Option<ClipRect> {
        match self {
            Self::ClipRect(rect) => Some(*rect),
            _ => None,
        }
    }
}

impl From<ColorSpec> for StyleValue {
    fn from(value: ColorSpec) -> Self {
        Self::Color(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<LineType> for StyleValue {
    fn from(value: LineType) -> Self {
        Self::LineType(value)
    }
}

impl From<SymbolKind> for StyleValue {
    fn from(value: SymbolKind) -> Self {
        Self::Symbol(value)
    }
}

impl From<ClipRect> for StyleValue {
    fn from(value: ClipRect) -> Self {
        Self::ClipRect(value)
    }
}

/// Style change forwarded to the backend device.
///
/// Symbol, alignment and clip attributes are consulted by the renderer at
/// draw time and never reach the device as state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceStyle {
    Color(ColorSpec),
    PenColor(ColorSpec),
    FillColor(ColorSpec),
    LineType(LineType),
    LineWidth(f64),
    FillLevel(f64),
    FillMode(f64),
    FontFace(String),
    FontSize(f64),
    TextAngle(f64),
}

/// Checks that `value` fits `key` and maps the pair to its device-facing
/// form, if it has one.
pub fn device_style(key: StyleKey, value: &StyleValue) -> PlotResult<Option<DeviceStyle>> {
    let style = match (key, value) {
        (StyleKey::Color, StyleValue::Color(color)) => {
            color.validate()?;
            DeviceStyle::Color(color.clone())
        }
        (StyleKey::LineColor, StyleValue::Color(color)) => {
            color.validate()?;
            DeviceStyle::PenColor(color.clone())
        }
        (StyleKey::FillColor, StyleValue::Color(color)) => {
            color.validate()?;
            DeviceStyle::FillColor(color.clone())
        }
        (StyleKey::LineType, StyleValue::LineType(line_type)) => DeviceStyle::LineType(*line_type),
        (StyleKey::LineWidth, StyleValue::Number(width)) => {
            DeviceStyle::LineWidth(non_negative(key, *width)?)
        }
        (StyleKey::FillLevel, StyleValue::Number(level)) => {
            DeviceStyle::FillLevel(non_negative(key, *level)?)
        }
        (StyleKey::FillMode, StyleValue::Number(mode)) => {
            DeviceStyle::FillMode(non_negative(key, *mode)?)
        }
        (StyleKey::FontFace, StyleValue::Text(face)) => DeviceStyle::FontFace(face.clone()),
        (StyleKey::FontSize, StyleValue::Number(size)) => {
            DeviceStyle::FontSize(non_negative(key, *size)?)
        }
        (StyleKey::TextAngle, StyleValue::Number(angle)) if angle.is_finite() => {
            DeviceStyle::TextAngle(*angle)
        }
        (StyleKey::SymbolType, StyleValue::Symbol(_))
        | (StyleKey::TextHAlign, StyleValue::HAlign(_))
        | (StyleKey::TextVAlign, StyleValue::VAlign(_)) => return Ok(None),
        (StyleKey::SymbolSize, StyleValue::Number(size)) => {
            if !size.is_finite() || *size <= 0.0 {
                return Err(PlotError::InvalidStyle(format!(
                    "`{key}` must be finite and > 0, got {size}"
                )));
            }
            return Ok(None);
        }
        (StyleKey::ClipRect, StyleValue::ClipRect(rect)) => {
            rect.validate()?;
            return Ok(None);
        }
        (key, _) => {
            return Err(PlotError::StyleMismatch {
                key: key.name(),
                expected: expected_kind(key),
            });
        }
    };
    Ok(Some(style))
}

fn non_negative(key: StyleKey, value: f64) -> PlotResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlotError::InvalidStyle(format!(
            "`{key}` must be finite and >= 0, got {value}"
        )));
    }
    Ok(value)
}

const fn expected_kind(key: StyleKey) -> &'static str {
    match key {
        StyleKey::Color | StyleKey::LineColor | StyleKey::FillColor => "color",
        StyleKey::LineType => "line type",
        StyleKey::LineWidth
        | StyleKey::FillLevel
        | StyleKey::FillMode
        | StyleKey::FontSize
        | StyleKey::TextAngle
        | StyleKey::SymbolSize => "finite number",
        StyleKey::FontFace => "text",
        StyleKey::SymbolType => "symbol",
        StyleKey::TextHAlign => "horizontal alignment",
        StyleKey::TextVAlign => "vertical alignment",
        StyleKey::ClipRect => "clip rect",
    }
}
