//! Entity records of the field and the free functions that evolve them.

use std::f32::consts::TAU;

use aihero_core::{ColorTag, FieldSettings};
use rand::Rng;

/// A tiny distant dot. Never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundPoint {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

/// A bright dot whose opacity follows a sinusoid of its phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwinklingPoint {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Current phase in radians.
    pub phase: f32,
    /// Phase advance per frame.
    pub speed: f32,
}

/// A drifting constellation node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionNode {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub tag: ColorTag,
}

/// Last known pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Far off-screen position used while no pointer has been seen.
    pub const OFFSCREEN: PointerState = PointerState {
        x: -2000.0,
        y: -2000.0,
    };

    /// Whether the pointer core should be drawn.
    pub fn is_visible(&self) -> bool {
        self.x > 0.0
    }

    /// Squared distance from the pointer to a point.
    pub fn distance_sq(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::OFFSCREEN
    }
}

/// Spawn a background dot somewhere inside the viewport.
pub fn spawn_background<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> BackgroundPoint {
    BackgroundPoint {
        x: rng.random::<f32>() * width,
        y: rng.random::<f32>() * height,
        size: rng.random::<f32>() * 1.2 + 0.5,
        opacity: 0.2 + rng.random::<f32>() * 0.4,
    }
}

/// Spawn a twinkling dot with a random phase.
pub fn spawn_twinkling<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> TwinklingPoint {
    TwinklingPoint {
        x: rng.random::<f32>() * width,
        y: rng.random::<f32>() * height,
        size: rng.random::<f32>() * 1.8 + 0.8,
        phase: rng.random::<f32>() * TAU,
        speed: 0.03 + rng.random::<f32>() * 0.04,
    }
}

/// Spawn a node with a random heading; roughly 40% carry the primary color.
pub fn spawn_node<R: Rng + ?Sized>(
    rng: &mut R,
    width: f32,
    height: f32,
    settings: &FieldSettings,
) -> MotionNode {
    MotionNode {
        x: rng.random::<f32>() * width,
        y: rng.random::<f32>() * height,
        vx: (rng.random::<f32>() - 0.5) * settings.node_speed,
        vy: (rng.random::<f32>() - 0.5) * settings.node_speed,
        size: rng.random::<f32>() * 2.0 + 1.2,
        tag: if rng.random::<f32>() > 0.6 {
            ColorTag::Primary
        } else {
            ColorTag::Secondary
        },
    }
}

/// Opacity of a twinkling dot at its current phase, in 0.3..=1.0.
pub fn twinkle_opacity(point: &TwinklingPoint) -> f32 {
    0.3 + (point.phase.sin() + 1.0) / 2.0 * 0.7
}

/// Advance a twinkling dot by one frame.
pub fn twinkle(point: TwinklingPoint) -> TwinklingPoint {
    TwinklingPoint {
        phase: (point.phase + point.speed) % TAU,
        ..point
    }
}

/// Move a node by its velocity and wrap it around the expanded viewport.
pub fn advance(node: MotionNode, width: f32, height: f32, margin: f32) -> MotionNode {
    let moved = MotionNode {
        x: node.x + node.vx,
        y: node.y + node.vy,
        ..node
    };
    wrap(moved, width, height, margin)
}

/// Teleport a node that left `[-margin, size + margin]` to the opposite edge.
pub fn wrap(node: MotionNode, width: f32, height: f32, margin: f32) -> MotionNode {
    let mut node = node;
    if node.x < -margin {
        node.x = width + margin;
    }
    if node.x > width + margin {
        node.x = -margin;
    }
    if node.y < -margin {
        node.y = height + margin;
    }
    if node.y > height + margin {
        node.y = -margin;
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn node_at(x: f32, y: f32, vx: f32, vy: f32) -> MotionNode {
        MotionNode {
            x,
            y,
            vx,
            vy,
            size: 2.0,
            tag: ColorTag::Primary,
        }
    }

    #[test]
    fn test_wrap_right_edge() {
        let node = advance(node_at(850.0, 300.0, 0.2, 0.0), 800.0, 600.0, 50.0);
        assert_eq!(node.x, -50.0);
        assert_eq!(node.y, 300.0);
    }

    #[test]
    fn test_wrap_left_edge() {
        let node = advance(node_at(-50.0, 300.0, -0.1, 0.0), 800.0, 600.0, 50.0);
        assert_eq!(node.x, 850.0);
    }

    #[test]
    fn test_wrap_vertical_edges() {
        let down = advance(node_at(10.0, 650.0, 0.0, 0.15), 800.0, 600.0, 50.0);
        assert_eq!(down.y, -50.0);
        let up = advance(node_at(10.0, -50.0, 0.0, -0.15), 800.0, 600.0, 50.0);
        assert_eq!(up.y, 650.0);
    }

    #[test]
    fn test_inside_bounds_untouched() {
        let node = advance(node_at(100.0, 100.0, 0.1, -0.1), 800.0, 600.0, 50.0);
        assert!((node.x - 100.1).abs() < 1e-4);
        assert!((node.y - 99.9).abs() < 1e-4);
    }

    #[test]
    fn test_wrapped_nodes_stay_in_expanded_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let settings = FieldSettings {
            node_speed: 40.0,
            ..Default::default()
        };
        let mut nodes: Vec<MotionNode> = (0..50)
            .map(|_| spawn_node(&mut rng, 300.0, 200.0, &settings))
            .collect();
        for _ in 0..500 {
            for node in &mut nodes {
                *node = advance(*node, 300.0, 200.0, 50.0);
                assert!((-50.0..=350.0).contains(&node.x));
                assert!((-50.0..=250.0).contains(&node.y));
            }
        }
    }

    #[test]
    fn test_twinkle_opacity_range() {
        let mut point = TwinklingPoint {
            x: 0.0,
            y: 0.0,
            size: 1.0,
            phase: 0.0,
            speed: 0.05,
        };
        for _ in 0..400 {
            let opacity = twinkle_opacity(&point);
            assert!((0.3..=1.0 + f32::EPSILON).contains(&opacity));
            point = twinkle(point);
        }
    }

    #[test]
    fn test_twinkle_peak() {
        let point = TwinklingPoint {
            x: 0.0,
            y: 0.0,
            size: 1.0,
            phase: std::f32::consts::FRAC_PI_2,
            speed: 0.05,
        };
        assert!((twinkle_opacity(&point) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let settings = FieldSettings::default();
        for _ in 0..200 {
            let bg = spawn_background(&mut rng, 640.0, 480.0);
            assert!((0.0..=640.0).contains(&bg.x));
            assert!((0.5..=1.7).contains(&bg.size));
            assert!((0.2..=0.6).contains(&bg.opacity));

            let tw = spawn_twinkling(&mut rng, 640.0, 480.0);
            assert!((0.03..=0.07).contains(&tw.speed));

            let node = spawn_node(&mut rng, 640.0, 480.0, &settings);
            assert!(node.vx.abs() <= settings.node_speed / 2.0);
            assert!(node.vy.abs() <= settings.node_speed / 2.0);
        }
    }

    #[test]
    fn test_pointer_sentinel() {
        let pointer = PointerState::default();
        assert!(!pointer.is_visible());
        assert_eq!(pointer.distance_sq(-2000.0, -1997.0), 9.0);
    }
}
