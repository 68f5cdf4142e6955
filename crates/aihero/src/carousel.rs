//! Looping autoplay carousel over a fixed number of slides.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    delay: Duration,
    last_advance: Instant,
}

impl Carousel {
    pub fn new(len: usize, delay: Duration, now: Instant) -> Self {
        Self {
            len,
            index: 0,
            delay,
            last_advance: now,
        }
    }

    /// Autoplay step. Returns `true` when the carousel moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.len == 0 || self.delay.is_zero() {
            return false;
        }
        if now.saturating_duration_since(self.last_advance) < self.delay {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        self.last_advance = now;
        true
    }

    /// Manual step forward; restarts the autoplay delay.
    pub fn next(&mut self, now: Instant) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.last_advance = now;
    }

    pub fn prev(&mut self, now: Instant) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.last_advance = now;
    }

    /// Indices of `count` consecutive slides starting at the current one, wrapping.
    pub fn visible(&self, count: usize) -> impl Iterator<Item = usize> + '_ {
        let count = count.min(self.len);
        (0..count).map(move |offset| (self.index + offset) % self.len)
    }
}

/// Slides shown side by side for a given width in columns.
pub fn slides_per_view(columns: u16) -> usize {
    match columns {
        0..60 => 1,
        60..100 => 2,
        _ => 3,
    }
}
