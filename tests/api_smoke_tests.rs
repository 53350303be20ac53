use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use folio_chart::api::{ChartEngine, ChartEngineConfig, ChartInputs};
use folio_chart::core::{CanvasSize, LineSeries, Series, SeriesPoint, Viewport};
use folio_chart::interaction::InteractionMode;
use folio_chart::render::{Color, NullRenderer};

fn inputs() -> ChartInputs {
    let line = LineSeries::new(
        "equity",
        vec![
            SeriesPoint::new(0.0, 10.0),
            SeriesPoint::new(50_000.0, 30.0),
            SeriesPoint::new(100_000.0, 20.0),
        ],
        Color::rgb(0.1, 0.4, 0.9),
    );
    let series: Arc<[Series]> = Arc::from(vec![Series::from(line)]);
    ChartInputs::new(CanvasSize::new(800, 600), series)
}

fn engine_with_reports() -> (ChartEngine<NullRenderer>, Rc<RefCell<Vec<Viewport>>>) {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine init");
    let reports = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reports);
    engine.set_on_change_viewport(move |viewport| sink.borrow_mut().push(*viewport));
    (engine, reports)
}

#[test]
fn engine_smoke_flow() {
    let (mut engine, reports) = engine_with_reports();
    let inputs = inputs();

    assert!(engine.frame(&inputs).expect("first frame"));
    let layout = engine.last_layout().expect("layout");
    assert_eq!(layout.x_domain, (0.0, 100_000.0));
    let plot = layout.plot;

    engine.pointer_down(plot.width / 2.0, plot.height / 2.0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Panning);
    engine.pointer_move(plot.width / 2.0 + 40.0, plot.height / 2.0);
    engine.pointer_move(plot.width / 2.0 + 80.0, plot.height / 2.0);
    assert!(engine.frame(&inputs).expect("panned frame"));
    assert!(reports.borrow().is_empty());

    let reported = engine.pointer_up().expect("gesture reported");
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert_eq!(reports.borrow().len(), 1);
    assert_eq!(reports.borrow()[0], reported);

    let (low, high) = reported.x_domain.expect("panned x domain");
    let shift = -80.0 * 100_000.0 / plot.width;
    assert!((low - shift).abs() <= 1e-6);
    assert!((high - (100_000.0 + shift)).abs() <= 1e-6);
    assert_eq!(reported.y_domain, None);

    assert_eq!(engine.pointer_up(), None);
    assert_eq!(reports.borrow().len(), 1);
}

#[test]
fn engine_keeps_its_viewport_until_host_changes_input() {
    let (mut engine, _reports) = engine_with_reports();
    let inputs = inputs();
    engine.frame(&inputs).expect("first frame");

    engine.pointer_down(100.0, 100.0);
    engine.pointer_move(150.0, 100.0);
    let reported = engine.pointer_up().expect("gesture reported");

    engine.frame(&inputs).expect("frame with stale host viewport");
    assert_eq!(engine.viewport(), reported);

    let host = Viewport::new().with_x_domain(10.0, 20.0);
    engine.frame(&inputs.clone().with_viewport(host)).expect("host frame");
    assert_eq!(engine.viewport(), host);
    assert_eq!(engine.last_layout().expect("layout").x_domain, (10.0, 20.0));
}

#[test]
fn host_viewport_waits_for_the_gesture_to_end() {
    let (mut engine, _reports) = engine_with_reports();
    let inputs = inputs();
    engine.frame(&inputs).expect("first frame");

    engine.pointer_down(100.0, 100.0);
    engine.pointer_move(120.0, 100.0);
    let dragged = engine.viewport();

    let host = Viewport::new().with_x_domain(10.0, 20.0);
    engine.frame(&inputs.clone().with_viewport(host)).expect("frame mid gesture");
    assert_eq!(engine.viewport(), dragged);
    assert_eq!(engine.pointer_up(), Some(dragged));
}

#[test]
fn pointer_down_requires_a_drawn_frame() {
    let (mut engine, reports) = engine_with_reports();
    engine.pointer_down(100.0, 100.0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert_eq!(engine.pointer_up(), None);
    assert!(reports.borrow().is_empty());
}

#[test]
fn disabled_pan_and_zoom_ignores_gestures() {
    let (mut engine, reports) = engine_with_reports();
    let inputs = inputs().with_pan_and_zoom(false);
    engine.frame(&inputs).expect("frame");

    engine.pointer_down(100.0, 100.0);
    engine.pointer_move(200.0, 100.0);
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
    assert_eq!(engine.viewport(), Viewport::default());
    assert!(reports.borrow().is_empty());
}

#[test]
fn cancel_reports_the_dragged_viewport() {
    let (mut engine, reports) = engine_with_reports();
    engine.frame(&inputs()).expect("frame");

    engine.pointer_down(100.0, 100.0);
    engine.pointer_move(110.0, 100.0);
    let cancelled = engine.pointer_cancel().expect("cancel reported");
    assert_eq!(reports.borrow().as_slice(), &[cancelled]);
}

#[test]
fn invalid_config_is_rejected() {
    let config = ChartEngineConfig::default().with_y_margin_ratio(0.5);
    assert!(ChartEngine::new(NullRenderer::default(), config).is_err());

    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine init");
    assert!(
        engine
            .set_config(ChartEngineConfig::default().with_font_size_px(0.0))
            .is_err()
    );
    assert!(
        engine
            .set_config(ChartEngineConfig::default().with_font_size_px(13.0))
            .is_ok()
    );
    assert!((engine.config().font_size_px - 13.0).abs() <= 1e-9);
}

#[test]
fn resolve_layout_does_not_draw() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine init");
    let layout = engine.resolve_layout(&inputs());

    assert_eq!(layout.x_domain, (0.0, 100_000.0));
    assert!(layout.y_domain.0 < 10.0 && layout.y_domain.1 > 30.0);
    assert_eq!(engine.renderer().render_count, 0);
}
