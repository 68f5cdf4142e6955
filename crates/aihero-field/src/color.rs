//! Color utility functions for replaying the display list on a terminal.

use aihero_core::Rgb;
use ratatui::style::Color;

use crate::display::Paint;

/// Flatten a translucent color onto the background.
pub fn composite(color: Rgb, alpha: f32, background: Rgb) -> Color {
    color.over(background, alpha).into()
}

/// Color and alpha of a paint at position `t` (0 = start, 1 = end).
pub fn sample(paint: &Paint, t: f32) -> (Rgb, f32) {
    match *paint {
        Paint::Solid { color, alpha } => (color, alpha),
        Paint::Gradient {
            start,
            start_alpha,
            end,
            end_alpha,
        } => {
            let t = t.clamp(0.0, 1.0);
            (
                start.lerp(end, t),
                start_alpha + (end_alpha - start_alpha) * t,
            )
        }
    }
}

/// Whether a color would be indistinguishable from the background.
pub fn is_invisible(alpha: f32) -> bool {
    alpha < 0.01
}
