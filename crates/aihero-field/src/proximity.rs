//! Proximity connections between nodes and the pointer.
//!
//! Every test is done on squared distances; the square root is only taken for
//! pairs that are already known to be inside the threshold.

use aihero_core::FieldSettings;

use crate::entities::{MotionNode, PointerState};

/// Base alpha of a node-to-node line at zero distance.
const NODE_LINK_ALPHA: f32 = 0.12;
/// Multiplier applied when either endpoint is near the pointer.
const POINTER_BOOST: f32 = 2.0;
/// Base alpha of a node-to-pointer line at zero distance.
const POINTER_LINK_ALPHA: f32 = 0.4;
/// Alpha of the gradient's node end, relative to the line alpha.
const POINTER_GRADIENT_GAIN: f32 = 1.5;
/// Width of a node-to-pointer line at zero distance.
const POINTER_LINK_WIDTH: f32 = 1.5;
/// Glow radius of a node touching the pointer.
const POINTER_GLOW: f32 = 12.0;
/// Opacity of a node far from the pointer.
pub(crate) const NODE_BASE_OPACITY: f32 = 0.4;

/// A node within reach of the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerLink {
    /// Distance from node to pointer.
    pub distance: f32,
    /// Closeness in 0..=1: 1 at the pointer, 0 at the threshold.
    pub strength: f32,
}

impl PointerLink {
    /// Alpha of the connecting line.
    pub fn opacity(&self) -> f32 {
        self.strength * POINTER_LINK_ALPHA
    }

    /// Alpha at the node end of the gradient.
    pub fn gradient_start_alpha(&self) -> f32 {
        self.opacity() * POINTER_GRADIENT_GAIN
    }

    /// Stroke width of the connecting line.
    pub fn line_width(&self) -> f32 {
        POINTER_LINK_WIDTH * self.strength
    }

    /// Glow radius around the node.
    pub fn glow(&self) -> f32 {
        POINTER_GLOW * self.strength
    }

    /// Brightened node opacity.
    pub fn node_opacity(&self) -> f32 {
        NODE_BASE_OPACITY + self.strength * (1.0 - NODE_BASE_OPACITY)
    }
}

/// Two nodes close enough to be joined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLink {
    pub distance: f32,
    /// Line alpha, including the pointer boost.
    pub opacity: f32,
    /// Whether either endpoint is near the pointer.
    pub boosted: bool,
}

/// Connect a node to the pointer if it lies strictly inside the threshold.
pub fn pointer_link(
    node: &MotionNode,
    pointer: &PointerState,
    settings: &FieldSettings,
) -> Option<PointerLink> {
    let distance_sq = pointer.distance_sq(node.x, node.y);
    if distance_sq >= settings.mouse_connection_distance_sq() {
        return None;
    }
    let distance = distance_sq.sqrt();
    Some(PointerLink {
        distance,
        strength: 1.0 - distance / settings.mouse_connection_distance,
    })
}

/// Connect two nodes if they lie strictly inside the threshold.
pub fn node_link(
    a: &MotionNode,
    b: &MotionNode,
    pointer: &PointerState,
    settings: &FieldSettings,
) -> Option<NodeLink> {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let distance_sq = dx * dx + dy * dy;
    if distance_sq >= settings.connection_distance_sq() {
        return None;
    }
    let distance = distance_sq.sqrt();

    let reach_sq = settings.mouse_connection_distance_sq();
    let boosted =
        pointer.distance_sq(a.x, a.y) < reach_sq || pointer.distance_sq(b.x, b.y) < reach_sq;
    let boost = if boosted { POINTER_BOOST } else { 1.0 };

    Some(NodeLink {
        distance,
        opacity: (1.0 - distance / settings.connection_distance) * NODE_LINK_ALPHA * boost,
        boosted,
    })
}
