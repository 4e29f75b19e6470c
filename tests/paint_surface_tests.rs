use approx::assert_relative_eq;
use stockplot::ChartError;
use stockplot::core::{ColumnSeries, LabelAxis, PlotPoint, Viewport};
use stockplot::item::{ChartStyle, LineItem};
use stockplot::render::{
    Color, GeometryBuffer, MarkerKind, PlotTransform, Polyline, RecordingSurface, Stroke,
};

#[test]
fn transform_maps_windows_onto_the_viewport() {
    let transform = PlotTransform::from_windows((0.0, 10.0), (0.0, 100.0), Viewport::new(200, 100))
        .expect("valid transform");

    let origin = transform.apply(PlotPoint::new(0.0, 0.0));
    assert_relative_eq!(origin.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(origin.y, 100.0, epsilon = 1e-9);

    let top_right = transform.apply(PlotPoint::new(10.0, 100.0));
    assert_relative_eq!(top_right.x, 200.0, epsilon = 1e-9);
    assert_relative_eq!(top_right.y, 0.0, epsilon = 1e-9);

    let center = transform.apply(PlotPoint::new(5.0, 50.0));
    assert_relative_eq!(center.x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(center.y, 50.0, epsilon = 1e-9);
}

#[test]
fn transform_rejects_degenerate_inputs() {
    let zero_viewport = PlotTransform::from_windows((0.0, 1.0), (0.0, 1.0), Viewport::new(0, 100));
    assert!(matches!(
        zero_viewport,
        Err(ChartError::InvalidViewport { width: 0, .. })
    ));

    let empty_window = PlotTransform::from_windows((3.0, 3.0), (0.0, 1.0), Viewport::new(10, 10));
    assert!(matches!(empty_window, Err(ChartError::InvalidData(_))));

    let nan_window =
        PlotTransform::from_windows((0.0, 1.0), (f64::NAN, 1.0), Viewport::new(10, 10));
    assert!(matches!(nan_window, Err(ChartError::InvalidData(_))));
}

#[test]
fn markers_arrive_in_device_space_at_constant_radius() {
    let style = ChartStyle::default();
    let series = ColumnSeries::from_columns(vec![("v", vec![0.0, 50.0, 100.0])], LabelAxis::None)
        .expect("valid series");
    let item = LineItem::new(series, ["v"], style, Some(MarkerKind::Circle)).expect("valid item");

    let transform = PlotTransform::from_windows((0.0, 10.0), (0.0, 100.0), Viewport::new(200, 100))
        .expect("valid transform");
    let mut surface = RecordingSurface::with_transform(transform);
    item.paint(&mut surface).expect("paint");

    assert_eq!(surface.markers.len(), 3);
    for (marker, anchor) in surface.markers.iter().zip([
        PlotPoint::new(0.0, 0.0),
        PlotPoint::new(1.0, 50.0),
        PlotPoint::new(2.0, 100.0),
    ]) {
        let expected = transform.apply(anchor);
        assert_relative_eq!(marker.center.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(marker.center.y, expected.y, epsilon = 1e-9);
        assert_relative_eq!(marker.radius_px, style.marker_size_px / 2.0, epsilon = 1e-12);
    }

    // Polyline points stay in data space; only markers are premapped.
    assert_eq!(surface.polylines[0].points[1], PlotPoint::new(1.0, 50.0));
}

#[test]
fn marker_size_does_not_bleed_into_data_extent() {
    let series = ColumnSeries::from_columns(vec![("v", vec![1.0, 2.0])], LabelAxis::None)
        .expect("valid series");
    let item = LineItem::new(series, ["v"], ChartStyle::default(), Some(MarkerKind::Circle))
        .expect("valid item");

    let extent = item.bounding_extent();
    assert_relative_eq!(extent.x_min, 0.0, epsilon = 1e-12);
    assert_relative_eq!(extent.x_max, 1.0, epsilon = 1e-12);
    assert_relative_eq!(extent.y_min, 1.0, epsilon = 1e-12);
    assert_relative_eq!(extent.y_max, 2.0, epsilon = 1e-12);
}

#[test]
fn surface_errors_abort_the_replay() {
    let mut buffer = GeometryBuffer::new();
    buffer.push_polyline(Polyline::new(
        vec![PlotPoint::new(0.0, 0.0), PlotPoint::new(1.0, 1.0)],
        Stroke::new(0.0, Color::rgb(0.1, 0.2, 0.3)),
    ));

    assert!(buffer.validate().is_err());

    let mut surface = RecordingSurface::new();
    let result = buffer.replay(&mut surface);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
    assert!(surface.polylines.is_empty());
}

#[test]
fn identity_surface_sees_data_coordinates() {
    use stockplot::render::PaintSurface;

    let surface = RecordingSurface::new();
    let mapped = surface.data_to_device(PlotPoint::new(3.5, -2.0));
    assert_relative_eq!(mapped.x, 3.5, epsilon = 1e-12);
    assert_relative_eq!(mapped.y, -2.0, epsilon = 1e-12);
}
