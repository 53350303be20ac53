use folio_chart::core::{Scale, SeriesPoint, project_line_paths};

fn scales() -> (Scale, Scale) {
    (
        Scale::linear((0.0, 100.0), (0.0, 1000.0)),
        Scale::linear((0.0, 10.0), (100.0, 0.0)),
    )
}

#[test]
fn gap_splits_line_into_two_disjoint_paths() {
    let (x, y) = scales();
    let points = vec![
        SeriesPoint::new(0.0, 1.0),
        SeriesPoint::new(10.0, 2.0),
        SeriesPoint::gap(20.0),
        SeriesPoint::new(30.0, 3.0),
        SeriesPoint::new(40.0, 4.0),
    ];

    let paths = project_line_paths(&points, false, x, y, (0.0, 100.0));
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].points, vec![(0.0, 90.0), (100.0, 80.0)]);
    assert_eq!(paths[1].points, vec![(300.0, 70.0), (400.0, 60.0)]);
}

#[test]
fn staircase_inserts_horizontal_run_before_each_step() {
    let (x, y) = scales();
    let points = vec![
        SeriesPoint::new(0.0, 1.0),
        SeriesPoint::new(10.0, 5.0),
        SeriesPoint::new(20.0, 2.0),
    ];

    let paths = project_line_paths(&points, true, x, y, (0.0, 100.0));
    assert_eq!(paths.len(), 1);
    assert_eq!(
        paths[0].points,
        vec![
            (0.0, 90.0),
            (100.0, 90.0),
            (100.0, 50.0),
            (200.0, 50.0),
            (200.0, 80.0),
        ]
    );
}

#[test]
fn window_keeps_one_neighbour_on_each_side() {
    let (x, y) = scales();
    let points: Vec<SeriesPoint> = (0..10)
        .map(|i| SeriesPoint::new(f64::from(i) * 10.0, 1.0))
        .collect();

    let paths = project_line_paths(&points, false, x, y, (35.0, 55.0));
    let xs: Vec<f64> = paths[0].points.iter().map(|(px, _)| *px).collect();
    assert_eq!(xs, vec![300.0, 400.0, 500.0, 600.0]);
}

#[test]
fn each_sub_path_fills_down_to_the_baseline() {
    let (x, y) = scales();
    let points = vec![
        SeriesPoint::new(0.0, 1.0),
        SeriesPoint::new(10.0, 2.0),
        SeriesPoint::gap(20.0),
        SeriesPoint::new(30.0, 3.0),
    ];
    let paths = project_line_paths(&points, false, x, y, (0.0, 100.0));
    let baseline = y.scale(0.0);

    let fills: Vec<_> = paths
        .iter()
        .filter_map(|path| path.fill_polygon(baseline))
        .collect();
    // A lone point encloses no area.
    assert_eq!(fills.len(), 1);
    assert_eq!(
        fills[0],
        vec![(0.0, 90.0), (100.0, 80.0), (100.0, 100.0), (0.0, 100.0)]
    );
}

#[test]
fn empty_input_yields_no_paths() {
    let (x, y) = scales();
    assert!(project_line_paths(&[], false, x, y, (0.0, 100.0)).is_empty());
}
