//! Replays a display list onto a ratatui canvas.

use aihero_core::Rgb;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Context, Line, Points},
    },
};

use crate::color::{composite, is_invisible, sample};
use crate::display::{DrawCommand, Paint};

/// Number of sub-segments used to approximate a gradient stroke.
const GRADIENT_STEPS: usize = 4;
/// Halo alpha relative to the dot it surrounds.
const GLOW_ALPHA: f32 = 0.25;
/// Dots at least this large are outlined as well as plotted.
const OUTLINE_RADIUS: f32 = 3.0;

/// Widget drawing one frame of the field.
///
/// Virtual pixel coordinates (origin top-left, y down) are mapped onto the
/// canvas bounds, so the widget may be drawn into any area.
#[derive(Debug, Clone, Copy)]
pub struct FieldWidget<'a> {
    commands: &'a [DrawCommand],
    width: f32,
    height: f32,
}

impl<'a> FieldWidget<'a> {
    /// Create a widget for a display list laid out in a `width` × `height`
    /// viewport.
    pub fn new(commands: &'a [DrawCommand], (width, height): (f32, f32)) -> Self {
        Self {
            commands,
            width,
            height,
        }
    }
}

impl Widget for FieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.commands.is_empty() || self.width <= 0.0 || self.height <= 0.0 {
            return;
        }

        let background = self
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Clear { color } => Some(*color),
                _ => None,
            })
            .unwrap_or(Rgb::BACKGROUND);
        let height = f64::from(self.height);
        let commands = self.commands;

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(background.into())
            .x_bounds([0.0, f64::from(self.width)])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                for command in commands {
                    paint_command(ctx, command, background, height);
                }
            })
            .render(area, buf);
    }
}

fn paint_command(ctx: &mut Context, command: &DrawCommand, background: Rgb, height: f64) {
    // Canvas y grows upwards.
    let flip = |y: f32| height - f64::from(y);

    match *command {
        DrawCommand::Clear { .. } => {}
        DrawCommand::Rect {
            x,
            y,
            size,
            color,
            alpha,
        } => {
            let half = size / 2.0;
            ctx.draw(&Points {
                coords: &[(f64::from(x + half), flip(y + half))],
                color: composite(color, alpha, background),
            });
        }
        DrawCommand::Dot {
            x,
            y,
            radius,
            color,
            alpha,
            glow,
        } => {
            if glow > 0.0 && !is_invisible(alpha * GLOW_ALPHA) {
                ctx.draw(&Circle {
                    x: f64::from(x),
                    y: flip(y),
                    radius: f64::from(radius + glow),
                    color: composite(color, alpha * GLOW_ALPHA, background),
                });
            }
            let fill = composite(color, alpha, background);
            if radius >= OUTLINE_RADIUS {
                ctx.draw(&Circle {
                    x: f64::from(x),
                    y: flip(y),
                    radius: f64::from(radius),
                    color: fill,
                });
            }
            ctx.draw(&Points {
                coords: &[(f64::from(x), flip(y))],
                color: fill,
            });
        }
        DrawCommand::Line {
            from, to, paint, ..
        } => match paint {
            Paint::Solid { color, alpha } => {
                if !is_invisible(alpha) {
                    ctx.draw(&Line::new(
                        f64::from(from.0),
                        flip(from.1),
                        f64::from(to.0),
                        flip(to.1),
                        composite(color, alpha, background),
                    ));
                }
            }
            Paint::Gradient { .. } => {
                for step in 0..GRADIENT_STEPS {
                    let t0 = step as f32 / GRADIENT_STEPS as f32;
                    let t1 = (step + 1) as f32 / GRADIENT_STEPS as f32;
                    let (color, alpha) = sample(&paint, (t0 + t1) / 2.0);
                    if is_invisible(alpha) {
                        continue;
                    }
                    let at = |t: f32| {
                        (
                            from.0 + (to.0 - from.0) * t,
                            from.1 + (to.1 - from.1) * t,
                        )
                    };
                    let (a, b) = (at(t0), at(t1));
                    ctx.draw(&Line::new(
                        f64::from(a.0),
                        flip(a.1),
                        f64::from(b.0),
                        flip(b.1),
                        composite(color, alpha, background),
                    ));
                }
            }
        },
    }
}
