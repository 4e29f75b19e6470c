use stockplot::ChartError;
use stockplot::core::{ColumnSeries, LabelAxis, PlotPoint};
use stockplot::item::{ChartStyle, LineItem};
use stockplot::render::{MarkerKind, RecordingSurface};

fn indicator_series() -> ColumnSeries {
    ColumnSeries::from_columns(
        vec![
            ("fast", vec![1.0, 2.0, 1.5]),
            ("slow", vec![0.5, 0.8, 1.1]),
            ("signal", vec![3.0, -1.0, 0.0]),
        ],
        LabelAxis::None,
    )
    .expect("valid series")
}

#[test]
fn one_polyline_per_selected_column_in_key_order() {
    let item = LineItem::new(
        indicator_series(),
        ["slow", "fast"],
        ChartStyle::default(),
        None,
    )
    .expect("valid item");

    let polylines = item.geometry().polylines();
    assert_eq!(polylines.len(), 2);
    assert_eq!(
        polylines[0].points,
        vec![
            PlotPoint::new(0.0, 0.5),
            PlotPoint::new(1.0, 0.8),
            PlotPoint::new(2.0, 1.1),
        ]
    );
    assert_eq!(
        polylines[1].points,
        vec![
            PlotPoint::new(0.0, 1.0),
            PlotPoint::new(1.0, 2.0),
            PlotPoint::new(2.0, 1.5),
        ]
    );
    assert!(item.geometry().marker_batches().is_empty());
    assert!(item.geometry().rects().is_empty());
}

#[test]
fn marker_batches_share_the_polyline_anchors() {
    let style = ChartStyle::default();
    let item = LineItem::new(
        indicator_series(),
        ["fast"],
        style,
        Some(MarkerKind::Circle),
    )
    .expect("valid item");

    let batches = item.geometry().marker_batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].kind, MarkerKind::Circle);
    assert_eq!(batches[0].anchors, item.geometry().polylines()[0].points);
    assert!((batches[0].size_px - style.marker_size_px).abs() < 1e-12);
    assert_eq!(batches[0].color, style.marker_color);
}

#[test]
fn unknown_or_empty_keys_are_rejected() {
    let err = LineItem::new(
        indicator_series(),
        ["fast", "medium"],
        ChartStyle::default(),
        None,
    )
    .unwrap_err();
    match err {
        ChartError::UnknownColumnKey { key } => assert_eq!(key, "medium"),
        other => panic!("unexpected error: {other}"),
    }

    let empty = LineItem::new(
        indicator_series(),
        Vec::<String>::new(),
        ChartStyle::default(),
        None,
    );
    assert!(matches!(empty, Err(ChartError::InvalidData(_))));
}

#[test]
fn plot_range_spans_all_columns_not_just_drawn_ones() {
    let item = LineItem::new(indicator_series(), ["fast"], ChartStyle::default(), None)
        .expect("valid item");

    let (min, max) = item.local_plot_range(0.0, 2.0);
    assert!((min - -1.0).abs() < 1e-12);
    assert!((max - 3.0).abs() < 1e-12);

    // The cached geometry, by contrast, only covers the drawn column.
    let extent = item.bounding_extent();
    assert!((extent.y_min - 1.0).abs() < 1e-12);
    assert!((extent.y_max - 2.0).abs() < 1e-12);
}

#[test]
fn feature_projection_reads_any_named_column() {
    let item = LineItem::new(indicator_series(), ["fast"], ChartStyle::default(), None)
        .expect("valid item");

    let signal = item.feature_values(Some("signal")).expect("named column");
    assert_eq!(signal, vec![3.0, -1.0, 0.0]);
    let default = item.feature_values(None).expect("first column");
    assert_eq!(default, vec![1.0, 2.0, 1.5]);
    assert!(item.feature_values(Some("missing")).is_err());
}

#[test]
fn single_point_series_still_builds_and_paints() {
    let series = ColumnSeries::from_columns(vec![("v", vec![4.2])], LabelAxis::None)
        .expect("valid series");
    let item = LineItem::new(series, ["v"], ChartStyle::default(), Some(MarkerKind::Circle))
        .expect("valid item");

    let mut surface = RecordingSurface::new();
    item.paint(&mut surface).expect("paint");
    assert_eq!(surface.polylines.len(), 1);
    assert_eq!(surface.polylines[0].points.len(), 1);
    assert_eq!(surface.markers.len(), 1);

    let extent = item.bounding_extent();
    assert!((extent.x_min - 0.0).abs() < 1e-12);
    assert!((extent.x_max - 0.0).abs() < 1e-12);
    assert!((extent.y_min - 4.2).abs() < 1e-12);
}

#[test]
fn marker_name_lookup_accepts_the_shorthand() {
    assert_eq!(MarkerKind::from_name("circle"), Some(MarkerKind::Circle));
    assert_eq!(MarkerKind::from_name("o"), Some(MarkerKind::Circle));
    assert_eq!(MarkerKind::from_name("square"), None);
}
