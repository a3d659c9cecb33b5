use chart_timeseries::api::{Borders, ChartTimeSeries, HeadlessScene};
use chart_timeseries::core::{AxisId, ScreenPoint, Viewport};
use chart_timeseries::render::RecordingDevice;

fn painted_chart(width: u32, height: u32) -> ChartTimeSeries<HeadlessScene> {
    let mut chart = ChartTimeSeries::new(HeadlessScene::new(width, height));
    chart.set_bounds(0.0, 1.0, 0.0, 1.0);
    let mut device = RecordingDevice::default();
    assert!(chart.paint(&mut device));
    chart.host_mut().mark_clean();
    chart
}

#[test]
fn default_borders_before_first_layout() {
    let chart = ChartTimeSeries::new(HeadlessScene::new(800, 600));
    assert_eq!(chart.borders(), Borders::new(60, 50, 20, 20));
    assert_eq!(chart.geometry(), Viewport::default());
}

#[test]
fn first_paint_positions_axes_on_plot_corners() {
    let chart = painted_chart(800, 600);

    assert_eq!(chart.geometry(), Viewport::new(800, 600));
    assert_eq!(
        chart.plot_rect(),
        (ScreenPoint::new(60.0, 50.0), ScreenPoint::new(780.0, 580.0))
    );

    let x_axis = chart.axis(AxisId::Bottom);
    assert_eq!(x_axis.point1(), ScreenPoint::new(60.0, 50.0));
    assert_eq!(x_axis.point2(), ScreenPoint::new(780.0, 50.0));

    let y_axis = chart.axis(AxisId::Left);
    assert_eq!(y_axis.point1(), ScreenPoint::new(60.0, 50.0));
    assert_eq!(y_axis.point2(), ScreenPoint::new(60.0, 580.0));
}

#[test]
fn changing_only_top_border_relayouts_on_next_paint() {
    let mut chart = painted_chart(800, 600);

    chart.set_borders(60, 50, 20, 40);
    assert!(chart.host().is_dirty());
    assert_eq!(chart.borders(), Borders::new(60, 50, 20, 40));

    let mut device = RecordingDevice::default();
    assert!(chart.paint(&mut device));
    assert_eq!(
        chart.axis(AxisId::Left).point2(),
        ScreenPoint::new(60.0, 560.0)
    );
}

#[test]
fn identical_borders_do_not_mark_dirty() {
    let mut chart = painted_chart(800, 600);

    chart.set_borders(60, 50, 20, 20);

    assert!(!chart.host().is_dirty());
    assert!(chart.is_plots_transform_valid());
}

#[test]
fn borders_larger_than_scene_are_clamped() {
    let mut chart = painted_chart(100, 100);

    chart.set_borders(-10, 30, 500, 20);

    assert_eq!(chart.borders(), Borders::new(0, 30, 100, 20));
    let (point1, point2) = chart.plot_rect();
    assert!(point2.x >= point1.x);
    assert!(point2.y >= point1.y);
}

#[test]
fn resized_scene_moves_axes() {
    let mut chart = painted_chart(800, 600);
    chart.host_mut().resize(1000, 700);

    let mut device = RecordingDevice::default();
    assert!(chart.paint(&mut device));

    assert_eq!(
        chart.axis(AxisId::Bottom).point2(),
        ScreenPoint::new(980.0, 50.0)
    );
    assert_eq!(
        chart.axis(AxisId::Left).point2(),
        ScreenPoint::new(60.0, 680.0)
    );
}
