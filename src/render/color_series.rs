use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Source of plot colors, addressed by plot insertion index.
pub trait ColorGenerator {
    /// Color for `index`, wrapping around the palette.
    fn color_repeating(&self, index: usize) -> Color;
}

/// Built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    Spectrum,
    Warm,
    Cool,
    Blues,
    Custom,
}

const SPECTRUM: [(u8, u8, u8); 7] = [
    (0, 0, 0),
    (228, 26, 28),
    (55, 126, 184),
    (77, 175, 74),
    (152, 78, 163),
    (255, 127, 0),
    (166, 86, 40),
];

const WARM: [(u8, u8, u8); 8] = [
    (121, 23, 23),
    (181, 0, 0),
    (227, 0, 0),
    (255, 0, 0),
    (255, 99, 0),
    (255, 135, 0),
    (255, 195, 0),
    (255, 225, 0),
];

const COOL: [(u8, u8, u8); 8] = [
    (117, 177, 1),
    (88, 128, 41),
    (80, 176, 89),
    (0, 130, 84),
    (0, 169, 149),
    (38, 125, 161),
    (0, 88, 192),
    (45, 64, 150),
];

const BLUES: [(u8, u8, u8); 7] = [
    (59, 102, 145),
    (58, 140, 209),
    (0, 102, 204),
    (73, 120, 216),
    (24, 54, 121),
    (97, 140, 190),
    (41, 65, 108),
];

/// Palette-backed [`ColorGenerator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSeries {
    scheme: ColorScheme,
    colors: Vec<Color>,
}

impl Default for ColorSeries {
    fn default() -> Self {
        Self::from_scheme(ColorScheme::Spectrum)
    }
}

impl ColorSeries {
    /// Builds a built-in palette. `Custom` starts empty and paints black.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        let table: &[(u8, u8, u8)] = match scheme {
            ColorScheme::Spectrum => &SPECTRUM,
            ColorScheme::Warm => &WARM,
            ColorScheme::Cool => &COOL,
            ColorScheme::Blues => &BLUES,
            ColorScheme::Custom => &[],
        };
        Self {
            scheme,
            colors: table
                .iter()
                .map(|(red, green, blue)| Color::from_rgb8(*red, *green, *blue))
                .collect(),
        }
    }

    pub fn custom(colors: Vec<Color>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::InvalidData(
                "custom color series must contain at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self {
            scheme: ColorScheme::Custom,
            colors,
        })
    }

    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl ColorGenerator for ColorSeries {
    fn color_repeating(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::BLACK;
        }
        self.colors[index % self.colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorGenerator, ColorScheme, ColorSeries};
    use crate::render::Color;

    #[test]
    fn colors_wrap_around_palette() {
        let series = ColorSeries::from_scheme(ColorScheme::Spectrum);
        assert_eq!(series.len(), 7);
        assert_eq!(series.color_repeating(0), series.color_repeating(7));
        assert_ne!(series.color_repeating(1), series.color_repeating(2));
    }

    #[test]
    fn custom_series_rejects_empty_and_invalid_palettes() {
        assert!(ColorSeries::custom(Vec::new()).is_err());
        assert!(ColorSeries::custom(vec![Color::rgb(2.0, 0.0, 0.0)]).is_err());

        let series = ColorSeries::custom(vec![Color::rgb(1.0, 0.0, 0.0)]).expect("valid palette");
        assert_eq!(series.scheme(), ColorScheme::Custom);
        assert_eq!(series.color_repeating(41), Color::rgb(1.0, 0.0, 0.0));
    }
}
