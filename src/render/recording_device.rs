use crate::error::{PlotError, PlotResult};
use crate::render::{DeviceStyle, PlotDevice, Primitive, StyleMap};

/// One call observed by [`RecordingDevice`].
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    BeginPage,
    EndPage,
    Save,
    Restore,
    Style(DeviceStyle),
    Draw { primitive: Primitive, style: StyleMap },
}

/// In-memory device used by tests and headless rendering.
///
/// It validates every primitive and tracks page and save nesting, so
/// callers catch bad geometry or unbalanced scopes without a real backend.
#[derive(Debug, Default)]
pub struct RecordingDevice {
    pub events: Vec<DeviceEvent>,
    page_open: bool,
    depth: usize,
}

impl RecordingDevice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_page_open(&self) -> bool {
        self.page_open
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.events.iter().filter_map(|event| match event {
            DeviceEvent::Draw { primitive, .. } => Some(primitive),
            _ => None,
        })
    }

    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.primitives().count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn ensure_page(&self) -> PlotResult<()> {
        if !self.page_open {
            return Err(PlotError::InvalidData(
                "device page is not open".to_owned(),
            ));
        }
        Ok(())
    }
}

impl PlotDevice for RecordingDevice {
    fn begin_page(&mut self) -> PlotResult<()> {
        if self.page_open {
            return Err(PlotError::InvalidData(
                "device page is already open".to_owned(),
            ));
        }
        self.page_open = true;
        self.events.push(DeviceEvent::BeginPage);
        Ok(())
    }

    fn end_page(&mut self) -> PlotResult<()> {
        self.ensure_page()?;
        self.page_open = false;
        self.events.push(DeviceEvent::EndPage);
        Ok(())
    }

    fn save_state(&mut self) -> PlotResult<()> {
        self.depth += 1;
        self.events.push(DeviceEvent::Save);
        Ok(())
    }

    fn restore_state(&mut self) -> PlotResult<()> {
        self.depth = self
            .depth
            .checked_sub(1)
            .ok_or(PlotError::UnbalancedRestore)?;
        self.events.push(DeviceEvent::Restore);
        Ok(())
    }

    fn apply_style(&mut self, style: &DeviceStyle) -> PlotResult<()> {
        self.events.push(DeviceEvent::Style(style.clone()));
        Ok(())
    }

    fn draw(&mut self, primitive: &Primitive, style: &StyleMap) -> PlotResult<()> {
        self.ensure_page()?;
        primitive.validate()?;
        self.events.push(DeviceEvent::Draw {
            primitive: primitive.clone(),
            style: style.clone(),
        });
        Ok(())
    }
}
