#![cfg(feature = "cairo-backend")]

use std::sync::Arc;

use cairo::{Context, Format, ImageSurface};
use folio_chart::ChartError;
use folio_chart::api::{ChartEngine, ChartEngineConfig, ChartInputs};
use folio_chart::core::{CanvasSize, LineSeries, Series, SeriesPoint};
use folio_chart::render::{CairoRenderer, Color};

fn inputs(width: u32, height: u32) -> ChartInputs {
    let line = LineSeries::new(
        "equity",
        vec![
            SeriesPoint::new(1_704_067_200.0, 10.0),
            SeriesPoint::new(1_704_153_600.0, 20.0),
            SeriesPoint::new(1_704_240_000.0, 15.0),
        ],
        Color::rgb(0.1, 0.4, 0.9),
    )
    .with_filled(true);
    let series: Arc<[Series]> = Arc::from(vec![Series::from(line)]);
    ChartInputs::new(CanvasSize::new(width, height), series)
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_renders_series_and_axis_primitives() {
    let renderer = CairoRenderer::new(900, 500).expect("renderer");
    let mut engine = ChartEngine::new(renderer, ChartEngineConfig::default()).expect("engine init");

    assert!(engine.frame(&inputs(900, 500)).expect("frame"));
    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();

    assert!(stats.lines_drawn >= 2);
    assert_eq!(stats.paths_drawn, 2);
    assert!(stats.rects_drawn >= 2);
    assert!(stats.texts_drawn > 0);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let mut engine = ChartEngine::new(renderer, ChartEngineConfig::default()).expect("engine init");

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context, &inputs(600, 320))
        .expect("render on context");

    assert!(engine.last_layout().is_some());
    let renderer = engine.into_renderer();
    assert!(renderer.last_stats().texts_drawn > 0);
}
