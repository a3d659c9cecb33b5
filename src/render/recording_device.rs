use crate::core::{DataPoint, ScreenPoint, Transform2D};
use crate::error::ChartResult;
use crate::render::{ChartLayerKind, ClipRect, Color, LinePrimitive, PaintDevice, Pen, TextPrimitive};

/// One call received by a [`RecordingDevice`], with geometry already mapped
/// through the matrix stack active at the time of the call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginLayer(ChartLayerKind),
    SetClipping(ClipRect),
    DisableClipping,
    PushMatrix,
    AppendTransform(Transform2D),
    PopMatrix,
    Line(LinePrimitive),
    Polyline { points: Vec<ScreenPoint>, pen: Pen },
    Text(TextPrimitive),
}

/// Headless paint device that records every draw call.
///
/// It keeps a real matrix stack so recorded coordinates are the ones a
/// backend would rasterize, which lets tests assert clipping, transforms
/// and layer order without a graphics context.
#[derive(Debug, Clone)]
pub struct RecordingDevice {
    commands: Vec<DrawCommand>,
    matrix_stack: Vec<Transform2D>,
    current: Transform2D,
    pen: Pen,
    clip: Option<ClipRect>,
}

impl Default for RecordingDevice {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            matrix_stack: Vec::new(),
            current: Transform2D::identity(),
            pen: Pen::default(),
            clip: None,
        }
    }
}

impl RecordingDevice {
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Layers in the order they were started.
    #[must_use]
    pub fn layers(&self) -> Vec<ChartLayerKind> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::BeginLayer(layer) => Some(*layer),
                _ => None,
            })
            .collect()
    }

    /// Commands recorded between the start of `layer` and the next layer.
    #[must_use]
    pub fn layer_commands(&self, layer: ChartLayerKind) -> &[DrawCommand] {
        let Some(start) = self
            .commands
            .iter()
            .position(|command| *command == DrawCommand::BeginLayer(layer))
        else {
            return &[];
        };
        let end = self.commands[start + 1..]
            .iter()
            .position(|command| matches!(command, DrawCommand::BeginLayer(_)))
            .map_or(self.commands.len(), |offset| start + 1 + offset);
        &self.commands[start + 1..end]
    }

    #[must_use]
    pub fn polylines(&self) -> Vec<&[ScreenPoint]> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&TextPrimitive> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn active_clip(&self) -> Option<ClipRect> {
        self.clip
    }

    #[must_use]
    pub fn matrix_depth(&self) -> usize {
        self.matrix_stack.len()
    }

    /// Validates every recorded line and text primitive.
    pub fn validate(&self) -> ChartResult<()> {
        for command in &self.commands {
            match command {
                DrawCommand::Line(line) => line.validate()?,
                DrawCommand::Text(text) => text.validate()?,
                _ => {}
            }
        }
        Ok(())
    }
}

impl PaintDevice for RecordingDevice {
    fn begin_layer(&mut self, layer: ChartLayerKind) {
        self.commands.push(DrawCommand::BeginLayer(layer));
    }

    fn set_clipping(&mut self, clip: ClipRect) {
        self.clip = Some(clip);
        self.commands.push(DrawCommand::SetClipping(clip));
    }

    fn disable_clipping(&mut self) {
        self.clip = None;
        self.commands.push(DrawCommand::DisableClipping);
    }

    fn push_matrix(&mut self) {
        self.matrix_stack.push(self.current);
        self.commands.push(DrawCommand::PushMatrix);
    }

    fn append_transform(&mut self, transform: Transform2D) {
        self.current = self.current.then_apply(transform);
        self.commands.push(DrawCommand::AppendTransform(transform));
    }

    fn pop_matrix(&mut self) {
        self.current = self.matrix_stack.pop().unwrap_or_default();
        self.commands.push(DrawCommand::PopMatrix);
    }

    fn set_pen(&mut self, color: Color, width: f64) {
        self.pen = Pen { color, width };
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (x1, y1) = self.current.map_xy(x1, y1);
        let (x2, y2) = self.current.map_xy(x2, y2);
        self.commands.push(DrawCommand::Line(LinePrimitive {
            x1,
            y1,
            x2,
            y2,
            pen: self.pen,
        }));
    }

    fn draw_polyline(&mut self, points: &[DataPoint]) {
        let points = points
            .iter()
            .map(|point| self.current.map_point(*point))
            .collect();
        self.commands.push(DrawCommand::Polyline {
            points,
            pen: self.pen,
        });
    }

    fn draw_text(&mut self, text: TextPrimitive) {
        let (x, y) = self.current.map_xy(text.x, text.y);
        self.commands.push(DrawCommand::Text(TextPrimitive { x, y, ..text }));
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawCommand, RecordingDevice};
    use crate::core::{DataPoint, ScreenPoint, Transform2D};
    use crate::render::{ChartLayerKind, Color, PaintDevice};

    #[test]
    fn polyline_is_mapped_through_matrix_stack() {
        let mut device = RecordingDevice::default();
        device.push_matrix();
        device.append_transform(Transform2D::from_translation(10.0, 20.0));
        device.append_transform(Transform2D::from_scale(2.0, 2.0));
        device.draw_polyline(&[DataPoint::new(1.0, 1.0), DataPoint::new(2.0, 3.0)]);
        device.pop_matrix();
        device.draw_line(1.0, 1.0, 2.0, 2.0);

        assert_eq!(
            device.polylines(),
            vec![&[ScreenPoint::new(12.0, 22.0), ScreenPoint::new(14.0, 26.0)][..]]
        );
        let Some(DrawCommand::Line(line)) = device.commands().last() else {
            panic!("expected trailing line command");
        };
        assert_eq!((line.x1, line.y1, line.x2, line.y2), (1.0, 1.0, 2.0, 2.0));
        assert_eq!(device.matrix_depth(), 0);
    }

    #[test]
    fn layer_commands_are_sliced_between_markers() {
        let mut device = RecordingDevice::default();
        device.begin_layer(ChartLayerKind::Grid);
        device.set_pen(Color::BLACK, 1.0);
        device.draw_line(0.0, 0.0, 1.0, 1.0);
        device.begin_layer(ChartLayerKind::Axes);

        assert_eq!(device.layers(), vec![ChartLayerKind::Grid, ChartLayerKind::Axes]);
        assert_eq!(device.layer_commands(ChartLayerKind::Grid).len(), 1);
        assert!(device.layer_commands(ChartLayerKind::Axes).is_empty());
        assert!(device.layer_commands(ChartLayerKind::Title).is_empty());
        assert!(device.validate().is_ok());
    }

    #[test]
    fn zero_width_pen_fails_validation() {
        let mut device = RecordingDevice::default();
        device.set_pen(Color::BLACK, 0.0);
        device.draw_line(0.0, 0.0, 1.0, 1.0);
        assert!(device.validate().is_err());
    }
}
