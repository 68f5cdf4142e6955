//! Display list produced by one frame of the field.

use aihero_core::Rgb;

/// How a line is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// One color along the whole line.
    Solid { color: Rgb, alpha: f32 },
    /// Linear gradient from the line's start to its end.
    Gradient {
        start: Rgb,
        start_alpha: f32,
        end: Rgb,
        end_alpha: f32,
    },
}

/// A single draw call, in virtual pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear { color: Rgb },
    /// Axis-aligned square with its top-left corner at `(x, y)`.
    Rect {
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
        alpha: f32,
    },
    /// Filled disc with an optional glow halo.
    Dot {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgb,
        alpha: f32,
        glow: f32,
    },
    /// Straight line segment.
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        paint: Paint,
    },
}

impl DrawCommand {
    /// Whether this command strokes a line.
    pub fn is_line(&self) -> bool {
        matches!(self, DrawCommand::Line { .. })
    }
}
