//! Animated constellation backdrop.
//!
//! The field owns three layers of entities (fixed background dots, twinkling
//! dots and drifting nodes), advances them once per frame and emits a display
//! list of draw commands. Nodes close to each other, or to the pointer, are
//! joined by lines whose opacity decays with distance. The display list is
//! replayed onto a ratatui canvas by [`FieldWidget`].

mod color;
mod display;
mod entities;
mod mount;
mod proximity;
mod render;
mod scheduler;
mod state;

pub use display::{DrawCommand, Paint};
pub use entities::{BackgroundPoint, MotionNode, PointerState, TwinklingPoint};
pub use mount::{FieldEvent, FieldMount};
pub use proximity::{NodeLink, PointerLink, node_link, pointer_link};
pub use render::FieldWidget;
pub use scheduler::FrameScheduler;
pub use state::FieldState;
