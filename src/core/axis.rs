use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ScreenPoint;
use crate::core::primitives::format_tick_value;
use crate::render::{Color, PaintDevice, TextHAlign, TextPrimitive};

const BOTTOM_TARGET_TICK_SPACING_PX: f64 = 72.0;
const LEFT_TARGET_TICK_SPACING_PX: f64 = 32.0;
const MIN_TICKS: usize = 2;
const MAX_TICKS: usize = 12;
const MAX_GENERATED_TICKS: usize = MAX_TICKS * 4;
const TICK_LENGTH_PX: f64 = 5.0;
const LABEL_FONT_SIZE_PX: f64 = 11.0;
const TITLE_FONT_SIZE_PX: f64 = 12.0;

/// Screen edge the axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisPosition {
    Left,
    Bottom,
}

/// Index-addressable axis selector. `Left` is index 0 (vertical axis) and
/// `Bottom` is index 1 (horizontal axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisId {
    Left = 0,
    Bottom = 1,
}

impl AxisId {
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Tick values of one axis; most charts stay below the inline capacity.
pub type TickValues = SmallVec<[f64; 16]>;

/// One numeric axis: a displayed `[min, max]` range placed on a fixed screen
/// segment `point1 -> point2`.
///
/// `min <= max` is not enforced. A zero-width range is a valid state; it only
/// yields a single tick and prevents the chart transform from updating.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    position: AxisPosition,
    title: String,
    visible: bool,
    minimum: f64,
    maximum: f64,
    point1: ScreenPoint,
    point2: ScreenPoint,
    tick_step: f64,
    ticks_dirty: bool,
    tick_values: TickValues,
    tick_positions: TickValues,
    tick_labels: Vec<String>,
}

impl Axis {
    #[must_use]
    pub fn new(position: AxisPosition) -> Self {
        Self {
            position,
            title: String::new(),
            visible: true,
            minimum: 0.0,
            maximum: 0.0,
            point1: ScreenPoint::default(),
            point2: ScreenPoint::default(),
            tick_step: 0.0,
            ticks_dirty: true,
            tick_values: TickValues::new(),
            tick_positions: TickValues::new(),
            tick_labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> AxisPosition {
        self.position
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.minimum, self.maximum)
    }

    pub fn set_range(&mut self, minimum: f64, maximum: f64) {
        if self.minimum == minimum && self.maximum == maximum {
            return;
        }
        self.minimum = minimum;
        self.maximum = maximum;
        self.ticks_dirty = true;
    }

    #[must_use]
    pub fn point1(&self) -> ScreenPoint {
        self.point1
    }

    #[must_use]
    pub fn point2(&self) -> ScreenPoint {
        self.point2
    }

    pub fn set_point1(&mut self, point: ScreenPoint) {
        if self.point1 != point {
            self.point1 = point;
            self.ticks_dirty = true;
        }
    }

    pub fn set_point2(&mut self, point: ScreenPoint) {
        if self.point2 != point {
            self.point2 = point;
            self.ticks_dirty = true;
        }
    }

    /// Screen length of the axis segment.
    #[must_use]
    pub fn screen_length(&self) -> f64 {
        (self.point2.x - self.point1.x).hypot(self.point2.y - self.point1.y)
    }

    #[must_use]
    pub fn tick_step(&self) -> f64 {
        self.tick_step
    }

    #[must_use]
    pub fn tick_values(&self) -> &[f64] {
        &self.tick_values
    }

    /// Screen coordinate of every tick along the axis direction.
    #[must_use]
    pub fn tick_positions(&self) -> &[f64] {
        &self.tick_positions
    }

    #[must_use]
    pub fn tick_labels(&self) -> &[String] {
        &self.tick_labels
    }

    /// Picks a 1/2/5 x 10^k tick step for the current range and screen length.
    pub fn recalculate_tick_spacing(&mut self) {
        let target_spacing = match self.position {
            AxisPosition::Bottom => BOTTOM_TARGET_TICK_SPACING_PX,
            AxisPosition::Left => LEFT_TARGET_TICK_SPACING_PX,
        };
        let target = tick_target_count(self.screen_length(), target_spacing, MIN_TICKS, MAX_TICKS);
        self.tick_step = nice_tick_step(self.minimum, self.maximum, target);
        self.ticks_dirty = false;
    }

    /// Finalizes tick values, screen positions and labels for painting.
    pub fn update(&mut self) {
        if self.ticks_dirty {
            self.recalculate_tick_spacing();
        }

        self.tick_values = tick_values(self.minimum, self.maximum, self.tick_step);
        let (along_start, along_end) = self.along_axis();
        let span = self.maximum - self.minimum;
        self.tick_positions = self
            .tick_values
            .iter()
            .map(|value| {
                if span == 0.0 {
                    along_start
                } else {
                    along_start + (value - self.minimum) / span * (along_end - along_start)
                }
            })
            .collect();
        self.tick_labels = self
            .tick_values
            .iter()
            .map(|value| format_tick_value(*value, self.tick_step))
            .collect();
    }

    pub fn paint(&self, device: &mut dyn PaintDevice) {
        if !self.visible {
            return;
        }

        let color = Color::rgb(0.0, 0.0, 0.0);
        device.set_pen(color, 1.0);
        device.draw_line(self.point1.x, self.point1.y, self.point2.x, self.point2.y);

        for (position, label) in self.tick_positions.iter().zip(&self.tick_labels) {
            match self.position {
                AxisPosition::Bottom => {
                    let y = self.point1.y;
                    device.draw_line(*position, y, *position, y - TICK_LENGTH_PX);
                    device.draw_text(TextPrimitive::new(
                        label.clone(),
                        *position,
                        y - TICK_LENGTH_PX - LABEL_FONT_SIZE_PX - 2.0,
                        LABEL_FONT_SIZE_PX,
                        color,
                        TextHAlign::Center,
                    ));
                }
                AxisPosition::Left => {
                    let x = self.point1.x;
                    device.draw_line(x, *position, x - TICK_LENGTH_PX, *position);
                    device.draw_text(TextPrimitive::new(
                        label.clone(),
                        x - TICK_LENGTH_PX - 3.0,
                        *position - LABEL_FONT_SIZE_PX / 2.0,
                        LABEL_FONT_SIZE_PX,
                        color,
                        TextHAlign::Right,
                    ));
                }
            }
        }

        if self.title.is_empty() {
            return;
        }
        let title = match self.position {
            AxisPosition::Bottom => TextPrimitive::new(
                self.title.clone(),
                (self.point1.x + self.point2.x) / 2.0,
                self.point1.y - TICK_LENGTH_PX - LABEL_FONT_SIZE_PX - TITLE_FONT_SIZE_PX - 8.0,
                TITLE_FONT_SIZE_PX,
                color,
                TextHAlign::Center,
            ),
            AxisPosition::Left => TextPrimitive::new(
                self.title.clone(),
                self.point1.x,
                self.point2.y + 6.0,
                TITLE_FONT_SIZE_PX,
                color,
                TextHAlign::Center,
            ),
        };
        device.draw_text(title);
    }

    fn along_axis(&self) -> (f64, f64) {
        match self.position {
            AxisPosition::Bottom => (self.point1.x, self.point2.x),
            AxisPosition::Left => (self.point1.y, self.point2.y),
        }
    }
}

fn tick_target_count(axis_span_px: f64, target_spacing_px: f64, min: usize, max: usize) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min;
    }
    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min, max)
}

fn nice_tick_step(minimum: f64, maximum: f64, target_count: usize) -> f64 {
    let span = (maximum - minimum).abs();
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }

    let rough = span / target_count.max(2) as f64;
    let magnitude = 10.0_f64.powf(rough.log10().floor());
    let normalized = rough / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

fn tick_values(minimum: f64, maximum: f64, step: f64) -> TickValues {
    let mut values = TickValues::new();
    if step <= 0.0 || !step.is_finite() || minimum == maximum {
        values.push(minimum);
        return values;
    }

    let (low, high) = if minimum <= maximum {
        (minimum, maximum)
    } else {
        (maximum, minimum)
    };
    let first = (low / step).ceil() * step;
    // Step below float resolution at this magnitude.
    if !first.is_finite() || first + step == first {
        values.push(minimum);
        return values;
    }

    let tolerance = step * 1e-9;
    let steps = ((high + tolerance - first) / step).floor();
    if !(steps >= 0.0) {
        return values;
    }
    let count = (steps as usize).saturating_add(1).min(MAX_GENERATED_TICKS);
    values.extend((0..count).map(|i| first + i as f64 * step));
    values
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{Axis, AxisId, AxisPosition, MAX_GENERATED_TICKS, nice_tick_step, tick_values};
    use crate::core::ScreenPoint;

    fn bottom_axis(range: (f64, f64)) -> Axis {
        let mut axis = Axis::new(AxisPosition::Bottom);
        axis.set_point1(ScreenPoint::new(60.0, 50.0));
        axis.set_point2(ScreenPoint::new(780.0, 50.0));
        axis.set_range(range.0, range.1);
        axis
    }

    #[test]
    fn axis_id_maps_left_to_zero_and_bottom_to_one() {
        assert_eq!(AxisId::from_index(0), Some(AxisId::Left));
        assert_eq!(AxisId::from_index(1), Some(AxisId::Bottom));
        assert_eq!(AxisId::from_index(2), None);
    }

    #[test]
    fn nice_step_uses_one_two_five_sequence() {
        assert_relative_eq!(nice_tick_step(0.0, 100.0, 10), 10.0);
        assert_relative_eq!(nice_tick_step(0.0, 100.0, 6), 20.0);
        assert_relative_eq!(nice_tick_step(0.0, 1.0, 4), 0.5);
        assert_eq!(nice_tick_step(3.0, 3.0, 4), 0.0);
    }

    #[test]
    fn tick_values_stay_inside_range() {
        let values = tick_values(-3.0, 17.0, 5.0);
        assert_eq!(values.as_slice(), &[0.0, 5.0, 10.0, 15.0]);
    }

    #[test]
    fn degenerate_range_yields_single_tick() {
        let mut axis = bottom_axis((4.0, 4.0));
        axis.update();
        assert_eq!(axis.tick_values(), &[4.0]);
        assert_eq!(axis.tick_positions(), &[60.0]);
    }

    #[test]
    fn update_positions_ticks_on_screen_segment() {
        let mut axis = bottom_axis((0.0, 100.0));
        axis.update();

        assert!(axis.tick_step() > 0.0);
        let first = axis.tick_positions().first().copied().expect("first tick");
        let last = axis.tick_positions().last().copied().expect("last tick");
        assert_relative_eq!(first, 60.0);
        assert_relative_eq!(last, 780.0);
        assert_eq!(axis.tick_labels().len(), axis.tick_values().len());
    }

    #[test]
    fn range_change_marks_ticks_for_recalculation() {
        let mut axis = bottom_axis((0.0, 100.0));
        axis.update();
        let step_before = axis.tick_step();

        axis.set_range(0.0, 1.0);
        axis.update();
        assert!(axis.tick_step() < step_before);
    }

    #[test]
    fn narrow_window_at_large_magnitude_yields_bounded_ticks() {
        let mut axis = bottom_axis((1.0e17, 1.0e17 + 64.0));
        axis.update();

        let ticks = axis.tick_values();
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= MAX_GENERATED_TICKS);
        assert_eq!(axis.tick_positions().len(), ticks.len());
        assert!(ticks.iter().all(|value| value.is_finite()));
    }

    #[test]
    fn step_below_float_resolution_falls_back_to_single_tick() {
        let values = tick_values(1.0e17, 1.0e17 + 64.0, 1.0);
        assert_eq!(values.as_slice(), &[1.0e17]);
    }

    #[test]
    fn tick_count_is_capped() {
        let values = tick_values(0.0, 1.0e6, 1.0);
        assert_eq!(values.len(), MAX_GENERATED_TICKS);
        assert_eq!(values[0], 0.0);
    }
}
