mod primitives;
mod recording_device;
mod renderer;
mod state;
mod style;

pub use primitives::{
    Color, ColorSpec, LineType, Primitive, SymbolKind, SymbolShape, TextHAlign, TextVAlign,
};
pub use recording_device::{DeviceEvent, RecordingDevice};
pub use renderer::{DEFAULT_SYMBOL_SIZE, PlotRenderer};
pub use state::{GraphicsStateStack, StyleMap};
pub use style::{DeviceStyle, StyleKey, StyleValue, device_style};

use crate::error::PlotResult;

/// Contract implemented by any vector-graphics backend.
///
/// The device owns rasterization and output encoding. It receives style
/// changes as they happen and each primitive together with the flattened
/// style visible at the time of the call.
pub trait PlotDevice {
    fn begin_page(&mut self) -> PlotResult<()>;

    fn end_page(&mut self) -> PlotResult<()>;

    fn save_state(&mut self) -> PlotResult<()>;

    fn restore_state(&mut self) -> PlotResult<()>;

    fn apply_style(&mut self, style: &DeviceStyle) -> PlotResult<()>;

    fn draw(&mut self, primitive: &Primitive, style: &StyleMap) -> PlotResult<()>;
}
