//! Lifecycle of a mounted field: listeners, frame scheduling and teardown.

use std::time::{Duration, Instant};

use aihero_core::FieldSettings;

use crate::display::DrawCommand;
use crate::scheduler::FrameScheduler;
use crate::state::FieldState;

/// Input the field reacts to, in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldEvent {
    PointerMove { x: f32, y: f32 },
    PointerLeave,
    Resize { width: f32, height: f32 },
}

/// Kinds of event a mounted field listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Listener {
    Pointer,
    Resize,
}

impl Listener {
    fn accepts(self, event: &FieldEvent) -> bool {
        match self {
            Listener::Pointer => matches!(
                event,
                FieldEvent::PointerMove { .. } | FieldEvent::PointerLeave
            ),
            Listener::Resize => matches!(event, FieldEvent::Resize { .. }),
        }
    }
}

/// A field attached to a host loop.
///
/// Owns the field state, the frame schedule and the listener registrations.
/// After [`teardown`](Self::teardown) events are ignored and no frame is ever
/// due again.
#[derive(Debug)]
pub struct FieldMount {
    state: FieldState,
    scheduler: FrameScheduler,
    listeners: Vec<Listener>,
}

impl FieldMount {
    /// Initialize a field for the viewport, attach its listeners and schedule
    /// the first frame.
    pub fn mount(mut state: FieldState, width: f32, height: f32, now: Instant) -> Self {
        state.initialize(width, height);
        let scheduler = FrameScheduler::new(state.settings().frame_interval(), now);
        tracing::info!(
            nodes = state.nodes().len(),
            interval_ms = scheduler.interval().as_millis() as u64,
            "field mounted"
        );
        Self {
            state,
            scheduler,
            listeners: vec![Listener::Pointer, Listener::Resize],
        }
    }

    /// Mount a field with OS-seeded randomness.
    pub fn new(settings: FieldSettings, width: f32, height: f32) -> Self {
        Self::mount(FieldState::new(settings), width, height, Instant::now())
    }

    /// Dispatch an event to the field if a listener for it is attached.
    ///
    /// Returns whether the event was delivered.
    pub fn handle(&mut self, event: FieldEvent) -> bool {
        if !self.listeners.iter().any(|l| l.accepts(&event)) {
            return false;
        }
        match event {
            FieldEvent::PointerMove { x, y } => self.state.on_pointer_move(x, y),
            FieldEvent::PointerLeave => self.state.on_pointer_leave(),
            FieldEvent::Resize { width, height } => self.state.on_resize(width, height),
        }
        true
    }

    /// Run a frame if one is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Option<&[DrawCommand]> {
        if !self.scheduler.is_due(now) {
            return None;
        }
        self.scheduler.complete(now);
        Some(self.state.on_frame())
    }

    /// Time until the next frame is due, `None` after teardown.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_next(now)
    }

    /// Cancel the pending frame and detach all listeners.
    ///
    /// Safe to call any number of times; returns whether anything was still
    /// attached.
    pub fn teardown(&mut self) -> bool {
        if self.scheduler.is_cancelled() && self.listeners.is_empty() {
            return false;
        }
        self.scheduler.cancel();
        self.listeners.clear();
        tracing::info!(generation = self.state.generation(), "field torn down");
        true
    }

    pub fn is_active(&self) -> bool {
        !self.scheduler.is_cancelled()
    }

    /// Display list of the most recent frame.
    pub fn display(&self) -> &[DrawCommand] {
        self.state.display()
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }
}

impl Drop for FieldMount {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(now: Instant) -> FieldMount {
        let settings = FieldSettings {
            static_star_count: 3,
            twinkle_star_count: 2,
            node_count: 4,
            frame_rate: 50,
            ..Default::default()
        };
        FieldMount::mount(FieldState::with_seed(settings, 21), 640.0, 480.0, now)
    }

    #[test]
    fn test_tick_paces_frames() {
        let now = Instant::now();
        let mut mount = mounted(now);
        assert!(mount.tick(now).is_some());
        assert!(mount.tick(now + Duration::from_millis(5)).is_none());
        assert!(mount.tick(now + Duration::from_millis(20)).is_some());
    }

    #[test]
    fn test_events_reach_state() {
        let now = Instant::now();
        let mut mount = mounted(now);
        assert!(mount.handle(FieldEvent::PointerMove { x: 12.0, y: 34.0 }));
        assert_eq!(mount.state().pointer().x, 12.0);

        assert!(mount.handle(FieldEvent::Resize {
            width: 320.0,
            height: 200.0
        }));
        assert_eq!(mount.state().viewport(), (320.0, 200.0));
        assert_eq!(mount.state().generation(), 2);

        assert!(mount.handle(FieldEvent::PointerLeave));
        assert!(!mount.state().pointer().is_visible());
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let now = Instant::now();
        let mut mount = mounted(now);
        assert!(mount.teardown());
        assert!(!mount.teardown());
        assert!(!mount.teardown());
        assert!(!mount.is_active());
        assert!(mount.tick(now + Duration::from_secs(1)).is_none());
        assert_eq!(mount.time_until_next(now), None);
    }

    #[test]
    fn test_events_ignored_after_teardown() {
        let now = Instant::now();
        let mut mount = mounted(now);
        mount.teardown();
        assert!(!mount.handle(FieldEvent::PointerMove { x: 1.0, y: 1.0 }));
        assert!(!mount.handle(FieldEvent::Resize {
            width: 10.0,
            height: 10.0
        }));
        assert_eq!(mount.state().generation(), 1);
    }
}
