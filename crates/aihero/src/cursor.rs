//! Custom pointer drawn over the UI and the registry of hoverable regions.

use std::time::Duration;

use aihero_core::{Rgb, Route};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};

use crate::form::FormField;

/// Time for the dot to catch up with the pointer.
const DOT_DURATION: f32 = 0.1;
/// Time for the follower ring to catch up with the pointer.
const FOLLOWER_DURATION: f32 = 0.3;
/// Follower scale while over something clickable.
const HOVER_SCALE: f32 = 3.0;

/// What a clickable region does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Route(Route),
    Field(FormField),
    Submit,
    SendAgain,
    CarouselPrev,
    CarouselNext,
    /// Entry of the home page video list.
    Video(usize),
}

/// Interactive regions of the current frame.
///
/// Cleared before each render and filled by the widgets that draw
/// something clickable. Later registrations sit on top.
#[derive(Debug, Default)]
pub struct HoverRegistry {
    regions: Vec<(Rect, Target)>,
}

impl HoverRegistry {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, area: Rect, target: Target) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under a terminal cell.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.regions.len()
    }
}

/// Move `current` toward `target`, covering most of the gap within `duration`.
fn ease(current: f32, target: f32, dt: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return target;
    }
    let k = 1.0 - (-dt * 5.0 / duration).exp();
    current + (target - current) * k
}

/// A dot tracking the pointer closely and a ring trailing behind it.
#[derive(Debug)]
pub struct CustomCursor {
    target: (f32, f32),
    dot: (f32, f32),
    follower: (f32, f32),
    scale: f32,
    hovering: bool,
    visible: bool,
}

impl Default for CustomCursor {
    fn default() -> Self {
        Self {
            target: (0.0, 0.0),
            dot: (0.0, 0.0),
            follower: (0.0, 0.0),
            scale: 1.0,
            hovering: false,
            visible: false,
        }
    }
}

impl CustomCursor {
    /// Pointer moved to a terminal cell.
    pub fn move_to(&mut self, column: u16, row: u16) {
        let target = (f32::from(column), f32::from(row));
        if !self.visible {
            // First sighting: appear in place instead of sliding in from the corner.
            self.dot = target;
            self.follower = target;
            self.visible = true;
        }
        self.target = target;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Current pointer cell, if the pointer is over the terminal.
    pub fn position(&self) -> Option<(u16, u16)> {
        self.visible
            .then(|| (self.target.0 as u16, self.target.1 as u16))
    }

    /// Advance the easing by `dt`.
    pub fn step(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        self.dot.0 = ease(self.dot.0, self.target.0, dt, DOT_DURATION);
        self.dot.1 = ease(self.dot.1, self.target.1, dt, DOT_DURATION);
        self.follower.0 = ease(self.follower.0, self.target.0, dt, FOLLOWER_DURATION);
        self.follower.1 = ease(self.follower.1, self.target.1, dt, FOLLOWER_DURATION);
        let scale = if self.hovering { HOVER_SCALE } else { 1.0 };
        self.scale = ease(self.scale, scale, dt, FOLLOWER_DURATION);
    }

    /// Draw the ring then the dot into `buf`, clipped to `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if !self.visible {
            return;
        }

        let ring = if self.scale > 2.0 {
            "◎"
        } else if self.scale > 1.4 {
            "◯"
        } else {
            "○"
        };
        let ring_color: Color = if self.hovering {
            Rgb::PRIMARY.into()
        } else {
            Rgb::WHITE.lerp(Rgb::BACKGROUND, 0.5).into()
        };
        Self::put(area, buf, self.follower, ring, ring_color);
        Self::put(area, buf, self.dot, "•", Rgb::WHITE.into());
    }

    fn put(area: Rect, buf: &mut Buffer, (x, y): (f32, f32), symbol: &str, color: Color) {
        let position = Position::new(x.round() as u16, y.round() as u16);
        if !area.contains(position) {
            return;
        }
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_symbol(symbol).set_style(Style::new().fg(color));
        }
    }
}
