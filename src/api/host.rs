use crate::core::{Transform2D, Viewport};

/// Scene/canvas that embeds the chart.
///
/// The host owns the redraw loop: it reports the current scene size, exposes
/// its dirty flag (the chart only ever raises it) and may carry a scene-level
/// transform that the chart honours when clipping.
pub trait SceneHost {
    fn scene_size(&self) -> Viewport;
    fn set_dirty(&mut self, dirty: bool);

    fn scene_transform(&self) -> Option<Transform2D> {
        None
    }
}

/// In-memory host for headless rendering and tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeadlessScene {
    size: Viewport,
    dirty: bool,
    transform: Option<Transform2D>,
}

impl HeadlessScene {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Viewport::new(width, height),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform2D) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Viewport::new(width, height);
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Host-side acknowledgement that the dirty state has been redrawn.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl SceneHost for HeadlessScene {
    fn scene_size(&self) -> Viewport {
        self.size
    }

    fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    fn scene_transform(&self) -> Option<Transform2D> {
        self.transform
    }
}
