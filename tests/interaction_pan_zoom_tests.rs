use approx::assert_relative_eq;
use chart_timeseries::api::{ChartTimeSeries, HeadlessScene};
use chart_timeseries::core::{AxisId, ScreenPoint};
use chart_timeseries::interaction::{MouseEvent, ZoomMode};
use chart_timeseries::render::RecordingDevice;

/// 800x600 scene with default borders: the plot area spans x 60..780 and
/// y 50..580, so the horizontal axis is 720 px and the vertical one 530 px.
fn laid_out_chart(x_max: f64, y_max: f64) -> ChartTimeSeries<HeadlessScene> {
    let mut chart = ChartTimeSeries::new(HeadlessScene::new(800, 600));
    chart.set_bounds(0.0, x_max, 0.0, y_max);
    let mut device = RecordingDevice::default();
    assert!(chart.paint(&mut device));
    chart.host_mut().mark_clean();
    chart
}

fn drag(from: (f64, f64), to: (f64, f64)) -> MouseEvent {
    MouseEvent::new(ScreenPoint::new(to.0, to.1), ScreenPoint::new(from.0, from.1))
}

#[test]
fn pan_without_bounds_shifts_window_by_pointer_displacement() {
    let mut chart = laid_out_chart(10.0, 10.0);

    // 72 px to the right is one data unit earlier on a 10-unit, 720 px axis.
    assert!(chart.on_pointer_move(&drag((400.0, 300.0), (472.0, 300.0))));

    let (min, max) = chart.axis(AxisId::Bottom).range();
    assert_relative_eq!(min, -1.0, epsilon = 1e-12);
    assert_relative_eq!(max, 9.0, epsilon = 1e-12);
    assert_eq!(chart.axis(AxisId::Left).range(), (0.0, 10.0));
    assert!(!chart.is_plots_transform_valid());
    assert!(chart.host().is_dirty());
}

#[test]
fn pan_past_lower_bound_reanchors_minimum_and_keeps_previous_maximum() {
    let mut chart = laid_out_chart(10.0, 10.0);
    chart.set_bounds_enabled(true);
    chart.set_axis_range(AxisId::Bottom, 1.0, 9.0);

    // Displacement of -3 units would give [-2, 6].
    assert!(chart.on_pointer_move(&drag((400.0, 300.0), (670.0, 300.0))));

    assert_eq!(chart.axis(AxisId::Bottom).range(), (0.0, 9.0));
    assert_eq!(chart.axis(AxisId::Left).range(), (0.0, 10.0));
}

#[test]
fn pan_past_upper_bound_reanchors_maximum_and_keeps_previous_minimum() {
    let mut chart = laid_out_chart(10.0, 10.0);
    chart.set_bounds_enabled(true);
    chart.set_axis_range(AxisId::Bottom, 1.0, 9.0);

    assert!(chart.on_pointer_move(&drag((670.0, 300.0), (400.0, 300.0))));

    assert_eq!(chart.axis(AxisId::Bottom).range(), (1.0, 10.0));
}

#[test]
fn vertical_pan_follows_pointer_in_value_direction() {
    let mut chart = laid_out_chart(10.0, 53.0);

    // 10 px up on a 53-unit, 530 px axis.
    assert!(chart.on_pointer_move(&drag((400.0, 300.0), (400.0, 310.0))));

    let (min, max) = chart.axis(AxisId::Left).range();
    assert_relative_eq!(min, -1.0, epsilon = 1e-12);
    assert_relative_eq!(max, 52.0, epsilon = 1e-12);
    assert_eq!(chart.axis(AxisId::Bottom).range(), (0.0, 10.0));
}

#[test]
fn wheel_step_zooms_in_by_five_percent_per_side() {
    let mut chart = laid_out_chart(100.0, 100.0);

    assert!(chart.on_wheel(&MouseEvent::at(ScreenPoint::new(400.0, 300.0)), 1));

    for id in [AxisId::Bottom, AxisId::Left] {
        let (min, max) = chart.axis(id).range();
        assert_relative_eq!(min, 5.0, epsilon = 1e-12);
        assert_relative_eq!(max, 95.0, epsilon = 1e-12);
    }
    assert!(!chart.is_plots_transform_valid());
    assert!(chart.host().is_dirty());
}

#[test]
fn negative_wheel_zooms_out() {
    let mut chart = laid_out_chart(100.0, 100.0);

    assert!(chart.on_wheel(&MouseEvent::default(), -2));

    let (min, max) = chart.axis(AxisId::Bottom).range();
    assert_relative_eq!(min, -10.0, epsilon = 1e-12);
    assert_relative_eq!(max, 110.0, epsilon = 1e-12);
}

#[test]
fn zoom_out_is_clamped_to_enabled_bounds() {
    let mut chart = laid_out_chart(100.0, 100.0);
    chart.set_bounds_enabled(true);

    assert!(chart.on_wheel(&MouseEvent::default(), -1));

    assert_eq!(chart.axis(AxisId::Bottom).range(), (0.0, 100.0));
    assert_eq!(chart.axis(AxisId::Left).range(), (0.0, 100.0));
}

#[test]
fn horizontal_zoom_mode_leaves_value_axis_untouched() {
    let mut chart = laid_out_chart(100.0, 100.0);
    chart.set_zoom_mode(ZoomMode::Horizontal);
    assert_eq!(chart.zoom_mode(), ZoomMode::Horizontal);

    assert!(chart.on_wheel(&MouseEvent::default(), 1));

    let (min, max) = chart.axis(AxisId::Bottom).range();
    assert_relative_eq!(min, 5.0, epsilon = 1e-12);
    assert_relative_eq!(max, 95.0, epsilon = 1e-12);
    assert_eq!(chart.axis(AxisId::Left).range(), (0.0, 100.0));
}

#[test]
fn vertical_zoom_mode_leaves_time_axis_untouched() {
    let mut chart = laid_out_chart(100.0, 100.0);
    chart.set_zoom_mode(ZoomMode::Vertical);

    assert!(chart.on_wheel(&MouseEvent::default(), 1));

    assert_eq!(chart.axis(AxisId::Bottom).range(), (0.0, 100.0));
    let (min, max) = chart.axis(AxisId::Left).range();
    assert_relative_eq!(min, 5.0, epsilon = 1e-12);
    assert_relative_eq!(max, 95.0, epsilon = 1e-12);
}

#[test]
fn disabled_interaction_consumes_events_without_changes() {
    let mut chart = laid_out_chart(100.0, 100.0);
    chart.set_interaction_enabled(false);
    assert!(!chart.interaction_enabled());

    assert!(chart.on_pointer_move(&drag((400.0, 300.0), (500.0, 350.0))));
    assert!(chart.on_wheel(&MouseEvent::default(), 3));

    assert_eq!(chart.axis(AxisId::Bottom).range(), (0.0, 100.0));
    assert_eq!(chart.axis(AxisId::Left).range(), (0.0, 100.0));
    assert!(chart.is_plots_transform_valid());
    assert!(!chart.host().is_dirty());
}

#[test]
fn hit_test_excludes_plot_area_boundary() {
    let chart = laid_out_chart(10.0, 10.0);

    assert!(chart.hit(ScreenPoint::new(61.0, 51.0)));
    assert!(chart.hit(ScreenPoint::new(400.0, 300.0)));
    assert!(!chart.hit(ScreenPoint::new(60.0, 300.0)));
    assert!(!chart.hit(ScreenPoint::new(780.0, 300.0)));
    assert!(!chart.hit(ScreenPoint::new(400.0, 50.0)));
    assert!(!chart.hit(ScreenPoint::new(400.0, 580.0)));
    assert!(!chart.hit(ScreenPoint::new(10.0, 10.0)));
}

#[test]
fn interaction_before_first_layout_skips_pan() {
    let mut chart = ChartTimeSeries::new(HeadlessScene::new(800, 600));
    chart.set_bounds(0.0, 10.0, 0.0, 10.0);

    assert!(chart.on_pointer_move(&drag((0.0, 0.0), (50.0, 50.0))));

    assert_eq!(chart.axis(AxisId::Bottom).range(), (0.0, 10.0));
    assert_eq!(chart.axis(AxisId::Left).range(), (0.0, 10.0));
}
