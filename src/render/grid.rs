use crate::core::Axis;
use crate::render::{Color, PaintDevice};

/// Background grid following the tick positions of both chart axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGrid {
    pub visible: bool,
    pub color: Color,
    pub line_width: f64,
}

impl Default for PlotGrid {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::rgb(0.95, 0.95, 0.95),
            line_width: 1.0,
        }
    }
}

impl PlotGrid {
    pub fn paint(&self, device: &mut dyn PaintDevice, x_axis: &Axis, y_axis: &Axis) {
        if !self.visible {
            return;
        }

        device.set_pen(self.color, self.line_width);
        let (bottom, top) = (y_axis.point1().y, y_axis.point2().y);
        for x in x_axis.tick_positions() {
            device.draw_line(*x, bottom, *x, top);
        }
        let (left, right) = (x_axis.point1().x, x_axis.point2().x);
        for y in y_axis.tick_positions() {
            device.draw_line(left, *y, right, *y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlotGrid;
    use crate::core::{Axis, AxisPosition, ScreenPoint};
    use crate::render::RecordingDevice;

    #[test]
    fn one_line_per_tick_of_each_axis() {
        let mut x_axis = Axis::new(AxisPosition::Bottom);
        x_axis.set_point1(ScreenPoint::new(0.0, 0.0));
        x_axis.set_point2(ScreenPoint::new(200.0, 0.0));
        x_axis.set_range(0.0, 10.0);
        x_axis.update();
        let mut y_axis = Axis::new(AxisPosition::Left);
        y_axis.set_point1(ScreenPoint::new(0.0, 0.0));
        y_axis.set_point2(ScreenPoint::new(0.0, 100.0));
        y_axis.set_range(0.0, 1.0);
        y_axis.update();

        let mut device = RecordingDevice::default();
        PlotGrid::default().paint(&mut device, &x_axis, &y_axis);
        assert_eq!(
            device.commands().len(),
            x_axis.tick_values().len() + y_axis.tick_values().len()
        );

        let mut hidden = RecordingDevice::default();
        PlotGrid {
            visible: false,
            ..PlotGrid::default()
        }
        .paint(&mut hidden, &x_axis, &y_axis);
        assert!(hidden.is_empty());
    }
}
