//! Centralized color constants for the map and UI.
//!
//! Country fills come from the category palettes below; everything the
//! color resolver cannot place gets `NO_DATA`.

use eframe::egui::Color32;

/// Fill for countries with no value for the active category.
pub const NO_DATA: Color32 = Color32::from_rgb(217, 217, 217);

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for labels.
    pub const LABEL: Color32 = Color32::from_rgb(100, 100, 100);
    /// Slightly brighter for values.
    pub const VALUE: Color32 = Color32::from_rgb(160, 160, 160);
    /// Loading indicator.
    pub const LOADING: Color32 = Color32::from_rgb(255, 180, 50);
}

/// Colors for the map canvas.
pub mod map {
    use super::Color32;

    pub const OCEAN_TOP: Color32 = Color32::from_rgb(178, 229, 255);
    pub const OCEAN_BOTTOM: Color32 = Color32::from_rgb(128, 191, 255);
    /// Country outline.
    pub const BORDER: Color32 = Color32::from_rgb(255, 255, 255);
    /// Outline of the hovered country.
    pub const HOVER_BORDER: Color32 = Color32::from_rgb(40, 40, 60);
    pub const MARKER_STROKE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const MARKER_LABEL: Color32 = Color32::from_rgb(255, 255, 255);
}

/// Tooltip box colors.
pub mod tooltip {
    use super::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 245);
    pub const BORDER: Color32 = Color32::from_rgb(200, 200, 210);
    pub const TITLE: Color32 = Color32::from_rgb(30, 30, 40);
    pub const TEXT: Color32 = Color32::from_rgb(70, 70, 80);
    pub const MUTED: Color32 = Color32::from_rgb(120, 120, 130);
}

/// Visa requirement palette.
pub mod visa {
    use super::Color32;

    pub const FREE: Color32 = Color32::from_rgb(46, 184, 103);
    pub const ON_ARRIVAL: Color32 = Color32::from_rgb(244, 157, 37);
    pub const E_VISA: Color32 = Color32::from_rgb(54, 140, 226);
    pub const STICKER: Color32 = Color32::from_rgb(221, 60, 60);
    pub const NO_ADMISSION: Color32 = Color32::from_rgb(140, 140, 140);
    pub const NOT_APPLICABLE: Color32 = Color32::from_rgb(217, 217, 217);
    pub const OTHER: Color32 = Color32::from_rgb(153, 112, 194);
    /// The selected passport's own country.
    pub const HOME: Color32 = Color32::from_rgb(157, 38, 217);
}

/// Best-time-to-visit palette.
pub mod best_time {
    use super::Color32;

    pub const BEST: Color32 = Color32::from_rgb(38, 217, 38);
    pub const OKAY: Color32 = Color32::from_rgb(232, 186, 48);
    pub const AVOID: Color32 = Color32::from_rgb(221, 60, 60);
}

/// Day temperature ramp as (upper bound °C, color); the last entry is open.
pub const TEMPERATURE_RAMP: [(f32, Color32); 7] = [
    (0.0, Color32::from_rgb(102, 102, 255)),
    (10.0, Color32::from_rgb(71, 126, 235)),
    (20.0, Color32::from_rgb(51, 204, 204)),
    (25.0, Color32::from_rgb(51, 204, 51)),
    (30.0, Color32::from_rgb(230, 230, 25)),
    (35.0, Color32::from_rgb(244, 140, 37)),
    (f32::INFINITY, Color32::from_rgb(245, 61, 61)),
];

/// Monthly rainfall ramp as (upper bound mm, color); the last entry is open.
pub const RAINFALL_RAMP: [(f32, Color32); 7] = [
    (10.0, Color32::from_rgb(244, 230, 190)),
    (25.0, Color32::from_rgb(184, 211, 224)),
    (50.0, Color32::from_rgb(140, 191, 217)),
    (100.0, Color32::from_rgb(92, 173, 214)),
    (150.0, Color32::from_rgb(38, 157, 217)),
    (200.0, Color32::from_rgb(20, 102, 184)),
    (f32::INFINITY, Color32::from_rgb(8, 54, 145)),
];

/// Color of the first ramp step whose upper bound contains `value`.
pub fn ramp(steps: &[(f32, Color32)], value: f32) -> Color32 {
    if !value.is_finite() {
        return NO_DATA;
    }
    steps
        .iter()
        .find(|(upper, _)| value <= *upper)
        .or(steps.last())
        .map(|(_, color)| *color)
        .unwrap_or(NO_DATA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_breakpoints_are_inclusive() {
        assert_eq!(ramp(&TEMPERATURE_RAMP, 0.0), TEMPERATURE_RAMP[0].1);
        assert_eq!(ramp(&TEMPERATURE_RAMP, 0.1), TEMPERATURE_RAMP[1].1);
        assert_eq!(ramp(&TEMPERATURE_RAMP, 35.0), TEMPERATURE_RAMP[5].1);
        assert_eq!(ramp(&TEMPERATURE_RAMP, 48.0), TEMPERATURE_RAMP[6].1);
        assert_eq!(ramp(&RAINFALL_RAMP, 200.5), RAINFALL_RAMP[6].1);
    }

    #[test]
    fn test_ramp_rejects_nan() {
        assert_eq!(ramp(&RAINFALL_RAMP, f32::NAN), NO_DATA);
    }
}
