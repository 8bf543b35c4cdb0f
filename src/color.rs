use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed pie palette
// ---------------------------------------------------------------------------

/// Colorblind-friendly palette for pie slices, cycled by key position.
pub const PIE_COLORS: [Color32; 4] = [
    Color32::from_rgb(0x37, 0x7e, 0xb8), // blue
    Color32::from_rgb(0xff, 0x7f, 0x00), // orange
    Color32::from_rgb(0xf7, 0x81, 0xbf), // pink
    Color32::from_rgb(0x4d, 0xaf, 0x4a), // green
];

/// Pie color for the n-th key, cycling through the fixed palette.
pub fn pie_color(index: usize) -> Color32 {
    PIE_COLORS[index % PIE_COLORS.len()]
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: booster category → Color32
// ---------------------------------------------------------------------------

/// Maps booster version categories to distinct, stable colours. Built from
/// the full dataset's category list, so the same category keeps its colour
/// however the charts are filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over the given categories (first-appearance order).
    pub fn new(categories: &[String]) -> Self {
        let palette = generate_palette(categories.len());
        let mapping: BTreeMap<String, Color32> = categories
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colors() {
        let palette = generate_palette(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn color_map_is_stable_per_category() {
        let cats = vec!["FT".to_string(), "v1.0".to_string(), "B4".to_string()];
        let a = ColorMap::new(&cats);
        let b = ColorMap::new(&cats);
        for cat in &cats {
            assert_eq!(a.color_for(cat), b.color_for(cat));
        }
    }

    #[test]
    fn unknown_category_gets_the_default_color() {
        let map = ColorMap::new(&["FT".to_string()]);
        assert_eq!(map.color_for("unknown"), Color32::GRAY);
    }

    #[test]
    fn pie_color_cycles() {
        assert_eq!(pie_color(0), pie_color(PIE_COLORS.len()));
    }
}
