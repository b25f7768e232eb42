use tracing::{debug, trace, warn};

use crate::core::{ClipRect, Point2, clip_segment, clip_to_rect};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    GraphicsStateStack, PlotDevice, Primitive, StyleKey, StyleValue, SymbolKind, TextHAlign,
    TextVAlign, device_style,
};

pub const DEFAULT_SYMBOL_SIZE: f64 = 0.01;

/// Drawing session over one backend device.
///
/// Every style write lands in the graphics state and, when the device has a
/// matching setting, is forwarded to it. Geometry is clipped against the
/// current clip rect before it reaches the device.
#[derive(Debug)]
pub struct PlotRenderer<D: PlotDevice> {
    device: D,
    state: GraphicsStateStack,
}

impl<D: PlotDevice> PlotRenderer<D> {
    #[must_use]
    pub fn new(device: D) -> Self {
        Self {
            device,
            state: GraphicsStateStack::new(),
        }
    }

    /// Starts a page with a fresh graphics state.
    pub fn open(&mut self) -> PlotResult<()> {
        self.state = GraphicsStateStack::new();
        self.device.begin_page()
    }

    /// Ends the page; fails when a saved scope was never restored.
    pub fn close(&mut self) -> PlotResult<()> {
        let depth = self.state.depth();
        if depth > 0 {
            warn!(depth, "closing renderer with open state scopes");
            return Err(PlotError::UnbalancedScope { depth });
        }
        self.device.end_page()
    }

    #[must_use]
    pub fn device(&self) -> &D {
        &self.device
    }

    #[must_use]
    pub fn into_device(self) -> D {
        self.device
    }

    #[must_use]
    pub fn state(&self) -> &GraphicsStateStack {
        &self.state
    }

    pub fn set(&mut self, key: StyleKey, value: impl Into<StyleValue>) -> PlotResult<()> {
        let value = value.into();
        let forwarded = device_style(key, &value)?;
        trace!(%key, "set style");
        self.state.set(key, value);
        if let Some(style) = forwarded {
            self.device.apply_style(&style)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.state.get(key)
    }

    #[must_use]
    pub fn clip_rect(&self) -> Option<ClipRect> {
        self.state.get(StyleKey::ClipRect).and_then(StyleValue::as_clip_rect)
    }

    /// Saves state and device together; a device failure drops the new
    /// frame again so depth stays in step with the device.
    pub fn save_state(&mut self) -> PlotResult<()> {
        self.state.save();
        if let Err(err) = self.device.save_state() {
            self.state.restore()?;
            return Err(err);
        }
        Ok(())
    }

    pub fn restore_state(&mut self) -> PlotResult<()> {
        self.state.restore()?;
        self.device.restore_state()
    }

    /// Runs `draw` between a save and its restore.
    ///
    /// The restore happens whether `draw` succeeds or fails; the error from
    /// `draw` takes precedence over one raised by the restore.
    pub fn with_saved_state<T>(
        &mut self,
        draw: impl FnOnce(&mut Self) -> PlotResult<T>,
    ) -> PlotResult<T> {
        self.save_state()?;
        let outcome = draw(self);
        let restored = self.restore_state();
        match (outcome, restored) {
            (Ok(value), Ok(())) => Ok(value),
            (Err(err), _) => {
                debug!(error = %err, "restored state after failed scoped draw");
                Err(err)
            }
            (Ok(_), Err(err)) => Err(err),
        }
    }

    pub fn move_to(&mut self, p: Point2) -> PlotResult<()> {
        self.emit(Primitive::MoveTo(p))
    }

    pub fn line_to(&mut self, p: Point2) -> PlotResult<()> {
        self.emit(Primitive::LineTo(p))
    }

    pub fn line(&mut self, p: Point2, q: Point2) -> PlotResult<()> {
        match self.clip_rect() {
            None => self.emit(Primitive::Line(p, q)),
            Some(rect) => match clip_segment(p, q, rect) {
                Some((a, b)) => self.emit(Primitive::Line(a, b)),
                None => Ok(()),
            },
        }
    }

    /// Draws the current symbol at each point inside the clip rect.
    pub fn symbols(&mut self, points: &[Point2]) -> PlotResult<()> {
        let kind = self
            .state
            .get(StyleKey::SymbolType)
            .and_then(StyleValue::as_symbol)
            .unwrap_or(SymbolKind::DEFAULT);
        let size = self
            .state
            .get(StyleKey::SymbolSize)
            .and_then(StyleValue::as_number)
            .unwrap_or(DEFAULT_SYMBOL_SIZE);

        let points: Vec<Point2> = match self.clip_rect() {
            None => points.to_vec(),
            Some(rect) => points.iter().copied().filter(|p| rect.contains(*p)).collect(),
        };
        if points.is_empty() {
            return Ok(());
        }
        self.emit(Primitive::Symbols { points, kind, size })
    }

    /// Strokes a polyline, split wherever it leaves the clip rect.
    pub fn curve(&mut self, points: &[Point2]) -> PlotResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        let Some(rect) = self.clip_rect() else {
            return self.emit(Primitive::Curve(points.to_vec()));
        };

        let mut piece: Vec<Point2> = Vec::new();
        for pair in points.windows(2) {
            match clip_segment(pair[0], pair[1], rect) {
                Some((start, end)) => {
                    if piece.last() != Some(&start) {
                        self.flush_curve_piece(&mut piece)?;
                        piece.push(start);
                    }
                    piece.push(end);
                }
                None => self.flush_curve_piece(&mut piece)?,
            }
        }
        self.flush_curve_piece(&mut piece)
    }

    fn flush_curve_piece(&mut self, piece: &mut Vec<Point2>) -> PlotResult<()> {
        let taken = std::mem::take(piece);
        if taken.len() >= 2 {
            self.emit(Primitive::Curve(taken))?;
        }
        Ok(())
    }

    /// Fills a polygon after clipping it to the clip rect. A polygon clipped
    /// away entirely draws nothing.
    pub fn polygon(&mut self, points: &[Point2]) -> PlotResult<()> {
        let points = match self.clip_rect() {
            None => points.to_vec(),
            Some(rect) => clip_to_rect(points, rect),
        };
        if points.is_empty() {
            trace!("polygon clipped away");
            return Ok(());
        }
        self.emit(Primitive::Polygon(points))
    }

    pub fn text(&mut self, at: Point2, text: impl Into<String>) -> PlotResult<()> {
        let h_align = match self.state.get(StyleKey::TextHAlign) {
            Some(StyleValue::HAlign(align)) => *align,
            _ => TextHAlign::default(),
        };
        let v_align = match self.state.get(StyleKey::TextVAlign) {
            Some(StyleValue::VAlign(align)) => *align,
            _ => TextVAlign::default(),
        };
        self.emit(Primitive::Text {
            at,
            text: text.into(),
            h_align,
            v_align,
        })
    }

    fn emit(&mut self, primitive: Primitive) -> PlotResult<()> {
        let style = self.state.snapshot();
        self.device.draw(&primitive, &style)
    }
}
