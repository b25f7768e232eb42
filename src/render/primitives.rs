use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Point2;
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Decodes a `0xRRGGBB` triplet; bits above the low 24 are ignored.
    #[must_use]
    pub fn from_hex_triplet(triplet: u32) -> Self {
        let channel = |shift: u32| f64::from((triplet >> shift) & 0xff) / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidStyle(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// A color as a plot author writes it: a backend color name, a hex
/// triplet, or explicit channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Named(String),
    Hex(u32),
    Rgb(Color),
}

impl ColorSpec {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn validate(&self) -> PlotResult<()> {
        match self {
            Self::Named(name) if name.trim().is_empty() => Err(PlotError::InvalidStyle(
                "color name must not be empty".to_owned(),
            )),
            Self::Named(_) => Ok(()),
            Self::Hex(triplet) if *triplet > 0x00ff_ffff => Err(PlotError::InvalidStyle(format!(
                "hex color {triplet:#x} exceeds 24 bits"
            ))),
            Self::Hex(_) => Ok(()),
            Self::Rgb(color) => color.validate(),
        }
    }

    /// Channel values, or `None` for a named color the backend resolves.
    #[must_use]
    pub fn to_rgb(&self) -> Option<Color> {
        match self {
            Self::Named(_) => None,
            Self::Hex(triplet) => Some(Color::from_hex_triplet(*triplet)),
            Self::Rgb(color) => Some(*color),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::Rgb(color)
    }
}

/// Stroke dash pattern understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    Solid,
    #[serde(alias = "dot")]
    Dotted,
    DotDashed,
    #[serde(alias = "dash", alias = "dashed")]
    ShortDashed,
    LongDashed,
    DotDotDashed,
    DotDotDotDashed,
}

impl LineType {
    pub const ALL: [Self; 7] = [
        Self::Solid,
        Self::Dotted,
        Self::DotDashed,
        Self::ShortDashed,
        Self::LongDashed,
        Self::DotDotDashed,
        Self::DotDotDotDashed,
    ];

    /// Backend name of the dash pattern.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
            Self::DotDashed => "dotdashed",
            Self::ShortDashed => "shortdashed",
            Self::LongDashed => "longdashed",
            Self::DotDotDashed => "dotdotdashed",
            Self::DotDotDotDashed => "dotdotdotdashed",
        }
    }

    /// Matches canonical names only, without the `dot`/`dash` aliases.
    #[must_use]
    pub fn from_canonical_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|line_type| line_type.name() == name)
    }
}

impl FromStr for LineType {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" => Ok(Self::Dotted),
            "dash" | "dashed" => Ok(Self::ShortDashed),
            other => Self::from_canonical_name(other)
                .ok_or_else(|| PlotError::InvalidStyle(format!("unknown line type `{other}`"))),
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named marker shapes, numbered as the backend numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SymbolShape {
    None = 0,
    Dot,
    Plus,
    Asterisk,
    Circle,
    Cross,
    Square,
    Triangle,
    Diamond,
    Star,
    InvertedTriangle,
    Starburst,
    FancyPlus,
    FancyCross,
    FancySquare,
    FancyDiamond,
    FilledCircle,
    FilledSquare,
    FilledTriangle,
    FilledDiamond,
    FilledInvertedTriangle,
    FilledFancySquare,
    FilledFancyDiamond,
    HalfFilledCircle,
    HalfFilledSquare,
    HalfFilledTriangle,
    HalfFilledDiamond,
    HalfFilledInvertedTriangle,
    HalfFilledFancySquare,
    HalfFilledFancyDiamond,
    Octagon,
    FilledOctagon,
}

const SYMBOL_NAMES: [(SymbolShape, &str); 32] = [
    (SymbolShape::None, "none"),
    (SymbolShape::Dot, "dot"),
    (SymbolShape::Plus, "plus"),
    (SymbolShape::Asterisk, "asterisk"),
    (SymbolShape::Circle, "circle"),
    (SymbolShape::Cross, "cross"),
    (SymbolShape::Square, "square"),
    (SymbolShape::Triangle, "triangle"),
    (SymbolShape::Diamond, "diamond"),
    (SymbolShape::Star, "star"),
    (SymbolShape::InvertedTriangle, "inverted triangle"),
    (SymbolShape::Starburst, "starburst"),
    (SymbolShape::FancyPlus, "fancy plus"),
    (SymbolShape::FancyCross, "fancy cross"),
    (SymbolShape::FancySquare, "fancy square"),
    (SymbolShape::FancyDiamond, "fancy diamond"),
    (SymbolShape::FilledCircle, "filled circle"),
    (SymbolShape::FilledSquare, "filled square"),
    (SymbolShape::FilledTriangle, "filled triangle"),
    (SymbolShape::FilledDiamond, "filled diamond"),
    (SymbolShape::FilledInvertedTriangle, "filled inverted triangle"),
    (SymbolShape::FilledFancySquare, "filled fancy square"),
    (SymbolShape::FilledFancyDiamond, "filled fancy diamond"),
    (SymbolShape::HalfFilledCircle, "half filled circle"),
    (SymbolShape::HalfFilledSquare, "half filled square"),
    (SymbolShape::HalfFilledTriangle, "half filled triangle"),
    (SymbolShape::HalfFilledDiamond, "half filled diamond"),
    (SymbolShape::HalfFilledInvertedTriangle, "half filled inverted triangle"),
    (SymbolShape::HalfFilledFancySquare, "half filled fancy square"),
    (SymbolShape::HalfFilledFancyDiamond, "half filled fancy diamond"),
    (SymbolShape::Octagon, "octagon"),
    (SymbolShape::FilledOctagon, "filled octagon"),
];

impl SymbolShape {
    #[must_use]
    pub fn name(self) -> &'static str {
        SYMBOL_NAMES[self as usize].1
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        SYMBOL_NAMES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(shape, _)| *shape)
    }
}

/// Marker drawn at each point: a named shape or a single glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SymbolKind {
    Shape(SymbolShape),
    Glyph(char),
}

impl SymbolKind {
    pub const DEFAULT: Self = Self::Shape(SymbolShape::Square);

    /// Backend marker code: the shape number, or the glyph's code point.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Self::Shape(shape) => u32::from(shape as u8),
            Self::Glyph(glyph) => u32::from(glyph),
        }
    }
}

impl FromStr for SymbolKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(glyph), None) = (chars.next(), chars.next()) {
            return Ok(Self::Glyph(glyph));
        }
        SymbolShape::from_name(s)
            .map(Self::Shape)
            .ok_or_else(|| PlotError::InvalidStyle(format!("unknown symbol type `{s}`")))
    }
}

impl TryFrom<String> for SymbolKind {
    type Error = PlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SymbolKind> for String {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Shape(shape) => shape.name().to_owned(),
            SymbolKind::Glyph(glyph) => glyph.to_string(),
        }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextHAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVAlign {
    Top,
    #[default]
    Center,
    Baseline,
    Bottom,
}

impl TextHAlign {
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Left => 'l',
            Self::Center => 'c',
            Self::Right => 'r',
        }
    }
}

impl TextVAlign {
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Top => 't',
            Self::Center => 'c',
            Self::Baseline => 'x',
            Self::Bottom => 'b',
        }
    }
}

/// One geometry call handed to the backend device.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    MoveTo(Point2),
    LineTo(Point2),
    Line(Point2, Point2),
    Symbols {
        points: Vec<Point2>,
        kind: SymbolKind,
        size: f64,
    },
    Curve(Vec<Point2>),
    Polygon(Vec<Point2>),
    Text {
        at: Point2,
        text: String,
        h_align: TextHAlign,
        v_align: TextVAlign,
    },
}

impl Primitive {
    pub fn validate(&self) -> PlotResult<()> {
        let finite = |p: &Point2| p.x.is_finite() && p.y.is_finite();
        let all_finite = match self {
            Self::MoveTo(p) | Self::LineTo(p) => finite(p),
            Self::Line(p, q) => finite(p) && finite(q),
            Self::Symbols { points, size, .. } => {
                if !size.is_finite() || *size <= 0.0 {
                    return Err(PlotError::InvalidData(
                        "symbol size must be finite and > 0".to_owned(),
                    ));
                }
                points.iter().all(finite)
            }
            Self::Curve(points) | Self::Polygon(points) => points.iter().all(finite),
            Self::Text { at, text, .. } => {
                if text.is_empty() {
                    return Err(PlotError::InvalidData(
                        "text primitive must not be empty".to_owned(),
                    ));
                }
                finite(at)
            }
        };
        if !all_finite {
            return Err(PlotError::InvalidData(
                "primitive coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
