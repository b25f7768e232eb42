use sciplot_rs::core::ClipRect;
use sciplot_rs::error::PlotError;
use sciplot_rs::render::{
    ColorSpec, GraphicsStateStack, LineType, StyleKey, StyleValue, SymbolKind, SymbolShape,
};

#[test]
fn balanced_scopes_restore_outer_values() {
    let mut state = GraphicsStateStack::new();
    state.set(StyleKey::Color, StyleValue::Color(ColorSpec::named("red")));
    state.set(StyleKey::LineType, StyleValue::LineType(LineType::Dotted));

    state.save();
    state.set(StyleKey::Color, StyleValue::Color(ColorSpec::Hex(0x00ff00)));
    state.save();
    state.set(StyleKey::LineType, StyleValue::LineType(LineType::LongDashed));
    assert_eq!(
        state.get(StyleKey::Color),
        Some(&StyleValue::Color(ColorSpec::Hex(0x00ff00)))
    );
    state.restore().expect("inner restore");
    state.restore().expect("outer restore");

    assert_eq!(
        state.get(StyleKey::Color),
        Some(&StyleValue::Color(ColorSpec::named("red")))
    );
    assert_eq!(
        state.get(StyleKey::LineType),
        Some(&StyleValue::LineType(LineType::Dotted))
    );
    assert_eq!(state.depth(), 0);
}

#[test]
fn nearest_saved_frame_wins_over_older_frames() {
    let mut state = GraphicsStateStack::new();
    state.set(StyleKey::FontSize, StyleValue::Number(10.0));
    state.save();
    state.set(StyleKey::FontSize, StyleValue::Number(14.0));
    state.save();

    assert_eq!(state.get(StyleKey::FontSize), Some(&StyleValue::Number(14.0)));
}

#[test]
fn extra_restore_reports_unbalanced_scope() {
    let mut state = GraphicsStateStack::new();
    state.save();
    state.restore().expect("matching restore");
    assert_eq!(state.restore(), Err(PlotError::UnbalancedRestore));
}

#[test]
fn clip_rect_is_ordinary_state() {
    let mut state = GraphicsStateStack::new();
    let rect = ClipRect::new(0.0, 1.0, 0.0, 1.0);
    state.save();
    state.set(StyleKey::ClipRect, StyleValue::ClipRect(rect));
    assert_eq!(
        state.get(StyleKey::ClipRect).and_then(StyleValue::as_clip_rect),
        Some(rect)
    );
    state.restore().expect("restore");
    assert_eq!(state.get(StyleKey::ClipRect), None);
}

#[test]
fn snapshot_keeps_first_set_order() {
    let mut state = GraphicsStateStack::new();
    state.set(
        StyleKey::SymbolType,
        StyleValue::Symbol(SymbolKind::Shape(SymbolShape::Diamond)),
    );
    state.set(StyleKey::SymbolSize, StyleValue::Number(0.02));
    state.save();
    state.set(StyleKey::LineWidth, StyleValue::Number(2.0));

    let keys: Vec<StyleKey> = state.snapshot().keys().copied().collect();
    assert_eq!(
        keys,
        vec![StyleKey::SymbolType, StyleKey::SymbolSize, StyleKey::LineWidth]
    );
}
