use indexmap::IndexMap;

use crate::error::{PlotError, PlotResult};

use super::{StyleKey, StyleValue};

/// Flat attribute dictionary as seen by one draw call.
pub type StyleMap = IndexMap<StyleKey, StyleValue>;

/// Stack of style frames with save/restore scoping.
///
/// `current` is the only mutable frame. `saved` holds the frozen frames,
/// nearest save last, so lookups scan it in reverse after `current`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicsStateStack {
    current: StyleMap,
    saved: Vec<StyleMap>,
}

impl GraphicsStateStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` into the current frame only.
    pub fn set(&mut self, key: StyleKey, value: StyleValue) {
        self.current.insert(key, value);
    }

    #[must_use]
    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.current
            .get(&key)
            .or_else(|| self.saved.iter().rev().find_map(|frame| frame.get(&key)))
    }

    #[must_use]
    pub fn get_or<'a>(&'a self, key: StyleKey, default: &'a StyleValue) -> &'a StyleValue {
        self.get(key).unwrap_or(default)
    }

    /// Freezes the current frame and starts an empty one on top of it.
    pub fn save(&mut self) {
        let frozen = std::mem::take(&mut self.current);
        self.saved.push(frozen);
    }

    /// Drops the current frame and reactivates the most recently saved one.
    pub fn restore(&mut self) -> PlotResult<()> {
        let frame = self.saved.pop().ok_or(PlotError::UnbalancedRestore)?;
        self.current = frame;
        Ok(())
    }

    /// Number of saves not yet restored.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Every visible attribute, nearest frame winning, in first-set order.
    #[must_use]
    pub fn snapshot(&self) -> StyleMap {
        let mut flat = StyleMap::new();
        for frame in self.saved.iter().chain(std::iter::once(&self.current)) {
            for (key, value) in frame {
                flat.insert(*key, value.clone());
            }
        }
        flat
    }
}
