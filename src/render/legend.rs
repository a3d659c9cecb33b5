use crate::core::ScreenPoint;
use crate::render::{Color, PaintDevice, TextHAlign, TextPrimitive};

const ROW_HEIGHT_PX: f64 = 16.0;
const SWATCH_WIDTH_PX: f64 = 18.0;
const FONT_SIZE_PX: f64 = 11.0;
const PADDING_PX: f64 = 6.0;

/// Legend row describing one plot.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub visible: bool,
}

/// Legend collaborator owned by the chart.
///
/// The chart calls `on_attach` once when the legend is installed, feeds it
/// the current plot entries on every `update`, and moves its anchor to the
/// top-right corner of the plot area on every layout pass.
pub trait Legend {
    fn on_attach(&mut self) {}
    fn update(&mut self, entries: &[LegendEntry]);
    fn paint(&self, device: &mut dyn PaintDevice);
    fn set_anchor(&mut self, anchor: ScreenPoint);
    fn anchor(&self) -> ScreenPoint;
}

/// Default legend: one swatch and label per visible plot, stacked downwards
/// from the anchor and right-aligned on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartLegend {
    anchor: ScreenPoint,
    entries: Vec<LegendEntry>,
    attached: bool,
}

impl ChartLegend {
    #[must_use]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Legend for ChartLegend {
    fn on_attach(&mut self) {
        self.attached = true;
    }

    fn update(&mut self, entries: &[LegendEntry]) {
        self.entries = entries
            .iter()
            .filter(|entry| entry.visible)
            .cloned()
            .collect();
    }

    fn paint(&self, device: &mut dyn PaintDevice) {
        let right = self.anchor.x - PADDING_PX;
        for (row, entry) in self.entries.iter().enumerate() {
            let y = self.anchor.y - PADDING_PX - ROW_HEIGHT_PX * (row as f64 + 0.5);
            device.set_pen(entry.color, 2.0);
            device.draw_line(right - SWATCH_WIDTH_PX, y, right, y);
            if entry.label.is_empty() {
                continue;
            }
            device.draw_text(TextPrimitive::new(
                entry.label.clone(),
                right - SWATCH_WIDTH_PX - 4.0,
                y - FONT_SIZE_PX / 2.0,
                FONT_SIZE_PX,
                Color::BLACK,
                TextHAlign::Right,
            ));
        }
    }

    fn set_anchor(&mut self, anchor: ScreenPoint) {
        self.anchor = anchor;
    }

    fn anchor(&self) -> ScreenPoint {
        self.anchor
    }
}
