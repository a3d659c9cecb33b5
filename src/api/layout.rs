use tracing::debug;

use crate::core::{ScreenPoint, Viewport};

use super::{Borders, ChartTimeSeries, SceneHost};

/// Chart geometry: scene size, border insets and the resulting plot corners.
///
/// `point1` is the bottom-left and `point2` the top-right corner of the plot
/// area, both in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutManager {
    geometry: Viewport,
    borders: Borders,
    point1: ScreenPoint,
    point2: ScreenPoint,
    layout_changed: bool,
}

impl LayoutManager {
    #[must_use]
    pub fn new(borders: Borders) -> Self {
        let mut layout = Self {
            geometry: Viewport::default(),
            borders: Borders::new(0, 0, 0, 0),
            point1: ScreenPoint::default(),
            point2: ScreenPoint::default(),
            layout_changed: false,
        };
        layout.set_borders(borders);
        layout
    }

    #[must_use]
    pub fn geometry(&self) -> Viewport {
        self.geometry
    }

    #[must_use]
    pub fn borders(&self) -> Borders {
        self.borders
    }

    #[must_use]
    pub fn point1(&self) -> ScreenPoint {
        self.point1
    }

    #[must_use]
    pub fn point2(&self) -> ScreenPoint {
        self.point2
    }

    #[must_use]
    pub fn is_layout_changed(&self) -> bool {
        self.layout_changed
    }

    /// Stores new insets. Returns `false` when all four match the current ones.
    ///
    /// Stored insets are the ones actually applied: negative values become 0
    /// and, once a geometry is known, right/top are re-read from the plot
    /// corners so the plot area never inverts.
    pub fn set_borders(&mut self, borders: Borders) -> bool {
        if self.borders == borders {
            return false;
        }
        self.apply_borders(borders);
        self.borders = if self.geometry.is_valid() {
            Borders::new(
                self.point1.x as i32,
                self.point1.y as i32,
                self.geometry.width as i32 - self.point2.x as i32,
                self.geometry.height as i32 - self.point2.y as i32,
            )
        } else {
            Borders::new(
                borders.left.max(0),
                borders.bottom.max(0),
                borders.right.max(0),
                borders.top.max(0),
            )
        };
        self.layout_changed = true;
        true
    }

    #[must_use]
    pub fn needs_layout(&self, scene_size: Viewport) -> bool {
        self.layout_changed || scene_size != self.geometry
    }

    /// Adopts the scene size and reapplies the stored borders.
    pub fn apply_geometry(&mut self, scene_size: Viewport) {
        self.geometry = scene_size;
        self.apply_borders(self.borders);
        self.layout_changed = false;
    }

    /// Strictly-inside test against the plot corners.
    #[must_use]
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x > self.point1.x
            && point.x < self.point2.x
            && point.y > self.point1.y
            && point.y < self.point2.y
    }

    fn apply_borders(&mut self, borders: Borders) {
        let left = f64::from(borders.left.max(0));
        let bottom = f64::from(borders.bottom.max(0));
        self.point1 = ScreenPoint::new(left, bottom);

        let right_edge = f64::from(self.geometry.width) - f64::from(borders.right);
        let top_edge = f64::from(self.geometry.height) - f64::from(borders.top);
        self.point2 = ScreenPoint::new(right_edge.max(left), top_edge.max(bottom));
    }
}

impl<H: SceneHost> ChartTimeSeries<H> {
    /// Changes the plot-area insets; applied on the next paint.
    pub fn set_borders(&mut self, left: i32, bottom: i32, right: i32, top: i32) {
        if !self.layout.set_borders(Borders::new(left, bottom, right, top)) {
            return;
        }
        debug!(
            left,
            bottom,
            right,
            top,
            applied = ?self.layout.borders(),
            "borders changed"
        );
        self.host.set_dirty(true);
    }

    #[must_use]
    pub fn borders(&self) -> Borders {
        self.layout.borders()
    }

    #[must_use]
    pub fn geometry(&self) -> Viewport {
        self.layout.geometry()
    }

    /// Bottom-left and top-right corners of the plot area.
    #[must_use]
    pub fn plot_rect(&self) -> (ScreenPoint, ScreenPoint) {
        (self.layout.point1(), self.layout.point2())
    }

    /// Repositions axes and legend when the scene size or the borders changed.
    pub(super) fn layout_pass(&mut self, scene_size: Viewport) {
        if !self.layout.needs_layout(scene_size) {
            return;
        }

        self.layout.apply_geometry(scene_size);
        let (point1, point2) = (self.layout.point1(), self.layout.point2());
        self.x_axis.set_point1(point1);
        self.x_axis.set_point2(ScreenPoint::new(point2.x, point1.y));
        self.y_axis.set_point1(point1);
        self.y_axis.set_point2(ScreenPoint::new(point1.x, point2.y));
        if let Some(legend) = self.legend.as_mut() {
            legend.set_anchor(point2);
        }
        self.transform.invalidate();
        debug!(
            width = scene_size.width,
            height = scene_size.height,
            "chart layout updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutManager;
    use crate::api::Borders;
    use crate::core::{ScreenPoint, Viewport};

    #[test]
    fn default_borders_place_plot_corners() {
        let mut layout = LayoutManager::new(Borders::default());
        assert!(layout.is_layout_changed());
        layout.apply_geometry(Viewport::new(800, 600));

        assert_eq!(layout.point1(), ScreenPoint::new(60.0, 50.0));
        assert_eq!(layout.point2(), ScreenPoint::new(780.0, 580.0));
        assert!(!layout.is_layout_changed());
    }

    #[test]
    fn identical_borders_are_ignored() {
        let mut layout = LayoutManager::new(Borders::default());
        layout.apply_geometry(Viewport::new(800, 600));
        assert!(!layout.set_borders(Borders::default()));
        assert!(!layout.is_layout_changed());
    }

    #[test]
    fn change_in_any_single_inset_is_applied() {
        let mut layout = LayoutManager::new(Borders::default());
        layout.apply_geometry(Viewport::new(800, 600));
        assert!(layout.set_borders(Borders::new(60, 50, 20, 40)));
        assert_eq!(layout.borders(), Borders::new(60, 50, 20, 40));
        assert_eq!(layout.point2(), ScreenPoint::new(780.0, 560.0));
    }

    #[test]
    fn oversized_borders_are_clamped_and_reread() {
        let mut layout = LayoutManager::new(Borders::default());
        layout.apply_geometry(Viewport::new(100, 100));
        assert!(layout.set_borders(Borders::new(-5, 30, 150, 20)));

        assert_eq!(layout.point1(), ScreenPoint::new(0.0, 30.0));
        assert_eq!(layout.point2(), ScreenPoint::new(0.0, 80.0));
        assert_eq!(layout.borders(), Borders::new(0, 30, 100, 20));
    }

    #[test]
    fn hit_region_is_open_interval() {
        let mut layout = LayoutManager::new(Borders::default());
        layout.apply_geometry(Viewport::new(800, 600));

        assert!(layout.contains(ScreenPoint::new(61.0, 51.0)));
        assert!(!layout.contains(ScreenPoint::new(60.0, 300.0)));
        assert!(!layout.contains(ScreenPoint::new(400.0, 580.0)));
    }
}
