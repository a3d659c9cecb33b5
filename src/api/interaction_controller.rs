use tracing::trace;

use crate::core::{Axis, ScreenPoint};
use crate::interaction::{MouseEvent, ZoomMode, pan_range, zoom_range};

use super::{ChartTimeSeries, SceneHost};

impl<H: SceneHost> ChartTimeSeries<H> {
    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction.set_enabled(enabled);
    }

    #[must_use]
    pub fn interaction_enabled(&self) -> bool {
        self.interaction.is_enabled()
    }

    pub fn set_zoom_mode(&mut self, mode: ZoomMode) {
        self.interaction.set_zoom_mode(mode);
    }

    #[must_use]
    pub fn zoom_mode(&self) -> ZoomMode {
        self.interaction.zoom_mode()
    }

    /// `true` when `position` lies strictly inside the plot area.
    ///
    /// Hosts use it to decide whether pointer and wheel events reach the chart.
    #[must_use]
    pub fn hit(&self, position: ScreenPoint) -> bool {
        self.layout.contains(position)
    }

    /// Pans both axes by the pointer displacement of `event`.
    ///
    /// Always reports the event as handled, even when interaction is disabled.
    pub fn on_pointer_move(&mut self, event: &MouseEvent) -> bool {
        if !self.interaction.is_enabled() {
            return true;
        }

        for dimension in 0..2 {
            let limits = self.constraint.limits(dimension);
            let axis = self.axis_for_dimension_mut(dimension);
            let Some((min, max)) = pan_range(
                axis.range(),
                axis.point1().component(dimension),
                axis.point2().component(dimension),
                event.last_screen_pos.component(dimension),
                event.screen_pos.component(dimension),
                limits,
            ) else {
                trace!(dimension, "skip pan: axis has no screen extent");
                continue;
            };
            axis.set_range(min, max);
            trace!(dimension, min, max, "pan committed");
        }

        self.transform.invalidate();
        self.host.set_dirty(true);
        true
    }

    /// Zooms the axes selected by the zoom mode; positive `delta` zooms in.
    ///
    /// Always reports the event as handled, even when interaction is disabled.
    pub fn on_wheel(&mut self, _event: &MouseEvent, delta: i32) -> bool {
        if !self.interaction.is_enabled() {
            return true;
        }

        let mode = self.interaction.zoom_mode();
        for dimension in (0..2).filter(|dimension| mode.applies_to(*dimension)) {
            let limits = self.constraint.limits(dimension);
            let axis = self.axis_for_dimension_mut(dimension);
            let (min, max) = zoom_range(axis.range(), f64::from(delta), limits);
            axis.set_range(min, max);
            axis.recalculate_tick_spacing();
            trace!(dimension, delta, min, max, "zoom committed");
        }

        self.transform.invalidate();
        self.host.set_dirty(true);
        true
    }

    fn axis_for_dimension_mut(&mut self, dimension: usize) -> &mut Axis {
        if dimension == 0 {
            &mut self.x_axis
        } else {
            &mut self.y_axis
        }
    }
}
