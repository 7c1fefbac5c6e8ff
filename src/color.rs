use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed series colours
// ---------------------------------------------------------------------------

/// Due-fees series in the area chart.
pub const DUE_SERIES: Color32 = Color32::from_rgb(55, 83, 109);
/// Paid-fees series in the area chart.
pub const PAID_SERIES: Color32 = Color32::from_rgb(26, 118, 255);
/// Reference line at the fee ceiling.
pub const CEILING: Color32 = Color32::from_rgb(184, 115, 51);

/// Histogram fills, one per fee category.
pub const HIST_ACADEMIC: Color32 = Color32::from_rgb(55, 83, 109);
pub const HIST_HOSTEL: Color32 = Color32::from_rgb(26, 118, 255);
pub const HIST_TRANSPORT: Color32 = Color32::from_rgb(205, 60, 60);

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
            let hsl = Hsl::new(hue, 0.65, 0.6);
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
// Color mapping: fee-category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (donut wedges, summary rows) to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map for the given labels, one hue per label.
    pub fn new(labels: &[String]) -> Self {
        let palette = generate_palette(labels.len());
        let mapping: BTreeMap<String, Color32> = labels
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(3).len(), 3);
    }

    #[test]
    fn test_unknown_label_falls_back_to_default() {
        let map = ColorMap::new(&["Academic Fees Paid".to_string()]);
        assert_eq!(map.color_for("Hostel Fees Paid"), Color32::GRAY);
        assert_ne!(map.color_for("Academic Fees Paid"), Color32::GRAY);
    }
}
