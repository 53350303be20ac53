use std::sync::Arc;

use folio_chart::api::{ChartEngine, ChartEngineConfig, ChartInputs};
use folio_chart::core::{CanvasSize, LineSeries, PointSeries, Series, SeriesId, SeriesPoint, Viewport};
use folio_chart::render::{CanvasLayerKind, Color, DrawCommand, NullRenderer, TextHAlign};

const DAY: f64 = 86_400.0;
const START: f64 = 1_704_067_200.0;

fn series() -> Arc<[Series]> {
    let line = LineSeries::new(
        "balance",
        vec![
            SeriesPoint::new(START, 100.0),
            SeriesPoint::new(START + 2.0 * DAY, 120.0),
            SeriesPoint::new(START + 4.0 * DAY, 80.0),
        ],
        Color::rgb(0.1, 0.4, 0.9),
    );
    let points = PointSeries::new(
        "trades",
        vec![SeriesPoint::new(START + DAY, 90.0)],
        Color::rgb(0.9, 0.4, 0.1),
    );
    Arc::from(vec![Series::from(line), Series::from(points)])
}

fn inputs() -> ChartInputs {
    ChartInputs::new(CanvasSize::new(600, 300), series())
        .with_viewport(Viewport::new().with_x_domain(START, START + 4.0 * DAY))
}

fn hovered_engine(at_time: f64) -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine init");
    engine.frame(&inputs()).expect("first frame");
    let layout = engine.last_layout().expect("layout");
    let x = layout.x_axis.scale.scale(at_time);
    let y = layout.plot.height / 2.0;
    engine.pointer_move(x, y);
    engine
}

#[test]
fn hover_draws_crosshair_lines_and_labels() {
    let mut engine = hovered_engine(START + DAY);
    assert!(engine.frame(&inputs()).expect("hover frame"));

    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    let lines = frame
        .layer(CanvasLayerKind::Crosshair)
        .expect("crosshair layer")
        .commands
        .iter()
        .filter(|command| matches!(command, DrawCommand::Line(_)))
        .count();
    assert_eq!(lines, 2);

    let date_label = frame
        .layer(CanvasLayerKind::Axis)
        .expect("axis layer")
        .commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text(text) if text.h_align == TextHAlign::Center => Some(text.text.as_str()),
            _ => None,
        })
        .last();
    assert_eq!(date_label, Some("2024-01-02"));
}

#[test]
fn readout_interpolates_each_series_at_the_hovered_time() {
    let engine = hovered_engine(START + DAY);
    let readout = engine.readout(&inputs()).expect("readout");

    assert!((readout.time - (START + DAY)).abs() <= 1e-3);
    assert_eq!(readout.values.len(), 2);
    assert_eq!(readout.values[0].series_id, SeriesId::new("balance"));
    let balance = readout.values[0].value.expect("balance value");
    assert!((balance - 110.0).abs() <= 1e-3);
    assert_eq!(readout.values[1].series_id, SeriesId::new("trades"));
}

#[test]
fn leaving_the_canvas_hides_the_crosshair() {
    let mut engine = hovered_engine(START + DAY);
    engine.frame(&inputs()).expect("hover frame");

    assert_eq!(engine.pointer_leave(), None);
    assert!(engine.mouse_position().is_none());
    assert!(engine.frame(&inputs()).expect("frame after leave"));
    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    assert!(
        frame
            .layer(CanvasLayerKind::Crosshair)
            .expect("crosshair layer")
            .commands
            .is_empty()
    );
    assert!(engine.readout(&inputs()).is_none());
}

#[test]
fn mouse_over_disabled_ignores_hover() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine init");
    let inputs = inputs().with_mouse_over(false);
    engine.frame(&inputs).expect("frame");

    engine.pointer_move(100.0, 100.0);
    assert!(engine.mouse_position().is_none());
    assert!(!engine.frame(&inputs).expect("nothing changed"));
    assert!(engine.readout(&inputs).is_none());
}

#[test]
fn hover_in_gutter_draws_no_crosshair() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine init");
    engine.frame(&inputs()).expect("frame");
    let plot = engine.last_layout().expect("layout").plot;

    engine.pointer_move(plot.width + 5.0, plot.height / 2.0);
    engine.frame(&inputs()).expect("hover frame");
    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    assert!(
        frame
            .layer(CanvasLayerKind::Crosshair)
            .expect("crosshair layer")
            .commands
            .is_empty()
    );
    assert!(engine.readout(&inputs()).is_none());
}
