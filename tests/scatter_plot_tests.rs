use approx::assert_relative_eq;
use sciplot_rs::api::{DEFAULT_SCATTER_SYMBOL, ScatterPlot, ScatterPlotConfig};
use sciplot_rs::core::{AxisRange, Point2, PointSeries};
use sciplot_rs::error::PlotError;
use sciplot_rs::render::{
    ColorSpec, DeviceEvent, DeviceStyle, LineType, PlotRenderer, Primitive, RecordingDevice,
    SymbolKind, SymbolShape,
};

fn series(x: &[f64], y: &[f64]) -> PointSeries {
    PointSeries::new(x.to_vec(), y.to_vec()).expect("series")
}

#[test]
fn defaults_to_filled_circle_symbols() {
    let plot = ScatterPlot::new(series(&[1.0, 2.0], &[3.0, 4.0]), ScatterPlotConfig::default())
        .expect("plot");
    let layout = plot.layout();
    assert_eq!(layout.markers.symbol_type, Some(DEFAULT_SCATTER_SYMBOL));
    assert_eq!(layout.markers.line_type, None);
    assert!(layout.curves.is_empty());
    assert_eq!(
        layout.symbol_points.as_deref(),
        Some(&[Point2::new(1.0, 3.0), Point2::new(2.0, 4.0)][..])
    );
}

#[test]
fn line_type_shorthand_selects_curve_only() {
    let config = ScatterPlotConfig {
        kind: Some("dotted".to_owned()),
        ..ScatterPlotConfig::default()
    };
    let plot = ScatterPlot::new(series(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), config).expect("plot");
    assert_eq!(plot.layout().markers.line_type, Some(LineType::Dotted));
    assert_eq!(plot.layout().symbol_points, None);
    assert_eq!(plot.layout().curves.len(), 1);
}

#[test]
fn symbol_shorthand_is_parsed() {
    let config = ScatterPlotConfig {
        kind: Some("half filled diamond".to_owned()),
        ..ScatterPlotConfig::default()
    };
    let plot = ScatterPlot::new(series(&[1.0], &[1.0]), config).expect("plot");
    assert_eq!(
        plot.layout().markers.symbol_type,
        Some(SymbolKind::Shape(SymbolShape::HalfFilledDiamond))
    );

    let bad = ScatterPlotConfig {
        kind: Some("hexagon".to_owned()),
        ..ScatterPlotConfig::default()
    };
    assert!(matches!(
        ScatterPlot::new(series(&[1.0], &[1.0]), bad),
        Err(PlotError::InvalidStyle(_))
    ));
}

#[test]
fn log_curve_breaks_at_excluded_points() {
    let config = ScatterPlotConfig {
        ylog: true,
        line_type: Some(LineType::Solid),
        ..ScatterPlotConfig::default()
    };
    let plot = ScatterPlot::new(
        series(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 2.0, -1.0, 4.0, 5.0, 0.0]),
        config,
    )
    .expect("plot");

    let yrange = plot.yrange().expect("log y range");
    assert_relative_eq!(yrange.low, 0.5);
    assert_relative_eq!(yrange.high, 10.0);
    assert_eq!(
        plot.layout().curves,
        vec![
            vec![Point2::new(0.0, 1.0), Point2::new(1.0, 2.0)],
            vec![Point2::new(3.0, 4.0), Point2::new(4.0, 5.0)],
        ]
    );
}

#[test]
fn log_y_error_bars_are_clamped() {
    let data = series(&[1.0, 2.0, 3.0], &[1.0, 10.0, 100.0])
        .with_yerr(vec![2.0, 1.0, 10.0])
        .expect("yerr");
    let config = ScatterPlotConfig {
        ylog: true,
        ..ScatterPlotConfig::default()
    };
    let plot = ScatterPlot::new(data, config).expect("plot");

    // Range: low = 0.5 * min(1, 9, 90) = 0.5, high = 2 * 110 = 220.
    let yrange = plot.yrange().expect("range");
    assert_relative_eq!(yrange.low, 0.5);
    assert_relative_eq!(yrange.high, 220.0);

    let bars = &plot.layout().y_error_bars;
    assert_eq!(bars.len(), 3);
    assert_relative_eq!(bars[0].low, 0.25);
    assert_relative_eq!(bars[0].high, 3.0);
    assert_relative_eq!(bars[2].low, 90.0);
    assert!(plot.layout().x_error_bars.is_empty());
}

#[test]
fn explicit_non_positive_log_range_fails_before_drawing() {
    let config = ScatterPlotConfig {
        xlog: true,
        xrange: Some(AxisRange::new(0.0, 10.0)),
        ..ScatterPlotConfig::default()
    };
    let err = ScatterPlot::new(series(&[1.0], &[1.0]), config).unwrap_err();
    assert_eq!(err, PlotError::InvalidLogRange { low: 0.0, high: 10.0 });
}

#[test]
fn inverted_explicit_range_is_rejected() {
    let config = ScatterPlotConfig {
        yrange: Some(AxisRange::new(5.0, 1.0)),
        ..ScatterPlotConfig::default()
    };
    assert!(matches!(
        ScatterPlot::new(series(&[1.0], &[1.0]), config),
        Err(PlotError::InvalidData(_))
    ));
}

#[test]
fn emit_draws_inside_balanced_scopes() {
    let data = series(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0])
        .with_yerr(vec![0.5, 0.5, 0.5])
        .expect("yerr");
    let config = ScatterPlotConfig {
        kind: Some("circle".to_owned()),
        line_type: Some(LineType::LongDashed),
        color: Some(ColorSpec::named("red")),
        err_line_color: Some(ColorSpec::Hex(0x0000ff)),
        ..ScatterPlotConfig::default()
    };
    let plot = ScatterPlot::new(data, config).expect("plot");

    let mut renderer = PlotRenderer::new(RecordingDevice::new());
    renderer.open().expect("open");
    plot.emit(&mut renderer).expect("emit");
    renderer.close().expect("balanced close");

    let device = renderer.into_device();
    let symbols = device
        .primitives()
        .filter(|p| matches!(p, Primitive::Symbols { .. }))
        .count();
    let curves = device
        .primitives()
        .filter(|p| matches!(p, Primitive::Curve(_)))
        .count();
    let lines = device
        .primitives()
        .filter(|p| matches!(p, Primitive::Line(..)))
        .count();
    assert_eq!((symbols, curves, lines), (1, 1, 3));

    let saves = device
        .events
        .iter()
        .filter(|e| matches!(e, DeviceEvent::Save))
        .count();
    let restores = device
        .events
        .iter()
        .filter(|e| matches!(e, DeviceEvent::Restore))
        .count();
    assert_eq!(saves, restores);
    assert!(device.events.iter().any(|e| matches!(
        e,
        DeviceEvent::Style(DeviceStyle::PenColor(ColorSpec::Hex(0x0000ff)))
    )));
}

#[test]
fn config_json_round_trip_and_bare_payload() {
    let config = ScatterPlotConfig {
        xlog: true,
        yrange: Some(AxisRange::new(1.0, 100.0)),
        symbol_type: Some(SymbolKind::Glyph('x')),
        line_type: Some(LineType::DotDashed),
        color: Some(ColorSpec::Hex(0x336699)),
        ..ScatterPlotConfig::default()
    };
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ScatterPlotConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);

    let bare = r#"{ "ylog": true, "type": "filled square", "line_type": "dashed" }"#;
    let parsed = ScatterPlotConfig::from_json_str(bare).expect("parse bare");
    assert!(parsed.ylog);
    assert_eq!(parsed.kind.as_deref(), Some("filled square"));
    assert_eq!(parsed.line_type, Some(LineType::ShortDashed));

    let future = r#"{ "schema_version": 9, "config": {} }"#;
    assert!(ScatterPlotConfig::from_json_str(future).is_err());
}
