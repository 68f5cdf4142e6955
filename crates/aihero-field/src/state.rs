//! Per-mount field state.

use aihero_core::{FieldSettings, Rgb};
use rand::{SeedableRng, rngs::StdRng};

use crate::display::{DrawCommand, Paint};
use crate::entities::{
    self, BackgroundPoint, MotionNode, PointerState, TwinklingPoint, twinkle_opacity,
};
use crate::proximity::{NODE_BASE_OPACITY, node_link, pointer_link};

/// Twinkling dots larger than this get a glow.
const TWINKLE_GLOW_SIZE: f32 = 1.5;
const TWINKLE_GLOW: f32 = 4.0;
const NODE_LINK_WIDTH: f32 = 0.8;
const POINTER_CORE_RADIUS: f32 = 3.0;
const POINTER_CORE_GLOW: f32 = 15.0;

/// Everything one mounted field owns: its entity layers, the pointer and the
/// display list of the last frame.
#[derive(Debug)]
pub struct FieldState {
    settings: FieldSettings,
    width: f32,
    height: f32,
    background: Vec<BackgroundPoint>,
    twinkling: Vec<TwinklingPoint>,
    nodes: Vec<MotionNode>,
    pointer: PointerState,
    /// Incremented on every (re)initialization.
    generation: u64,
    display: Vec<DrawCommand>,
    rng: StdRng,
}

impl FieldState {
    /// Create an empty field seeded from the operating system.
    pub fn new(settings: FieldSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Create an empty field with a fixed seed.
    pub fn with_seed(settings: FieldSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: FieldSettings, rng: StdRng) -> Self {
        Self {
            settings,
            width: 0.0,
            height: 0.0,
            background: Vec::new(),
            twinkling: Vec::new(),
            nodes: Vec::new(),
            pointer: PointerState::OFFSCREEN,
            generation: 0,
            display: Vec::new(),
            rng,
        }
    }

    /// Replace every entity with a fresh generation sized for the viewport.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;

        self.background = (0..self.settings.static_star_count)
            .map(|_| entities::spawn_background(rng, w, h))
            .collect();
        self.twinkling = (0..self.settings.twinkle_star_count)
            .map(|_| entities::spawn_twinkling(rng, w, h))
            .collect();
        self.nodes = (0..self.settings.node_count)
            .map(|_| entities::spawn_node(rng, w, h, &self.settings))
            .collect();
        self.display.clear();
        self.generation += 1;

        tracing::debug!(
            width = w,
            height = h,
            generation = self.generation,
            "field initialized"
        );
    }

    /// Reinitialize for a new viewport size.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.initialize(width, height);
    }

    /// Record the pointer position; picked up by the next frame.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = PointerState { x, y };
    }

    /// Forget the pointer.
    pub fn on_pointer_leave(&mut self) {
        self.pointer = PointerState::OFFSCREEN;
    }

    /// Whether there is a surface to draw on.
    pub fn has_surface(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Advance one frame and rebuild the display list.
    ///
    /// Without a drawing surface the frame is skipped and the list is empty.
    pub fn on_frame(&mut self) -> &[DrawCommand] {
        self.display.clear();
        if !self.has_surface() {
            return &self.display;
        }

        self.display.push(DrawCommand::Clear {
            color: Rgb::BACKGROUND,
        });
        self.draw_background();
        self.draw_twinkling();

        let (w, h, margin) = (self.width, self.height, self.settings.wrap_margin);
        for node in &mut self.nodes {
            *node = entities::advance(*node, w, h, margin);
        }

        self.draw_connections();
        self.draw_pointer_core();
        self.draw_nodes();

        &self.display
    }

    fn draw_background(&mut self) {
        self.display
            .extend(self.background.iter().map(|p| DrawCommand::Rect {
                x: p.x,
                y: p.y,
                size: p.size,
                color: Rgb::WHITE,
                alpha: p.opacity,
            }));
    }

    fn draw_twinkling(&mut self) {
        for point in &mut self.twinkling {
            *point = entities::twinkle(*point);
            self.display.push(DrawCommand::Dot {
                x: point.x,
                y: point.y,
                radius: point.size,
                color: Rgb::WHITE,
                alpha: twinkle_opacity(point),
                glow: if point.size > TWINKLE_GLOW_SIZE {
                    TWINKLE_GLOW
                } else {
                    0.0
                },
            });
        }
    }

    fn draw_connections(&mut self) {
        let pointer = self.pointer;
        for (i, a) in self.nodes.iter().enumerate() {
            if let Some(link) = pointer_link(a, &pointer, &self.settings) {
                self.display.push(DrawCommand::Line {
                    from: (a.x, a.y),
                    to: (pointer.x, pointer.y),
                    width: link.line_width(),
                    paint: Paint::Gradient {
                        start: a.tag.rgb(),
                        start_alpha: link.gradient_start_alpha(),
                        end: Rgb::PRIMARY,
                        end_alpha: 0.0,
                    },
                });
            }

            for b in &self.nodes[i + 1..] {
                if let Some(link) = node_link(a, b, &pointer, &self.settings) {
                    self.display.push(DrawCommand::Line {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        width: NODE_LINK_WIDTH,
                        paint: Paint::Solid {
                            color: Rgb::PRIMARY,
                            alpha: link.opacity,
                        },
                    });
                }
            }
        }
    }

    fn draw_pointer_core(&mut self) {
        if self.pointer.is_visible() {
            self.display.push(DrawCommand::Dot {
                x: self.pointer.x,
                y: self.pointer.y,
                radius: POINTER_CORE_RADIUS,
                color: Rgb::PRIMARY,
                alpha: 1.0,
                glow: POINTER_CORE_GLOW,
            });
        }
    }

    fn draw_nodes(&mut self) {
        for node in &self.nodes {
            let (alpha, glow) = match pointer_link(node, &self.pointer, &self.settings) {
                Some(link) => (link.node_opacity(), link.glow()),
                None => (NODE_BASE_OPACITY, 0.0),
            };
            self.display.push(DrawCommand::Dot {
                x: node.x,
                y: node.y,
                radius: node.size,
                color: node.tag.rgb(),
                alpha,
                glow,
            });
        }
    }

    /// Display list of the most recent frame.
    pub fn display(&self) -> &[DrawCommand] {
        &self.display
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Viewport size in virtual pixels.
    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn background(&self) -> &[BackgroundPoint] {
        &self.background
    }

    pub fn twinkling(&self) -> &[TwinklingPoint] {
        &self.twinkling
    }

    pub fn nodes(&self) -> &[MotionNode] {
        &self.nodes
    }

    /// Replace the nodes of the current generation.
    #[cfg(test)]
    pub fn set_nodes(&mut self, nodes: Vec<MotionNode>) {
        self.nodes = nodes;
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
