//! Tunable settings for the animated background.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sizing and behavior constants of the constellation field.
///
/// Counts stay fixed for one generation of entities; changing them only takes
/// effect on the next (re)initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Number of tiny fixed background dots.
    pub static_star_count: usize,
    /// Number of twinkling dots.
    pub twinkle_star_count: usize,
    /// Number of drifting constellation nodes.
    pub node_count: usize,
    /// Maximum distance (px) at which two nodes are connected.
    pub connection_distance: f32,
    /// Maximum distance (px) at which a node connects to the pointer.
    pub mouse_connection_distance: f32,
    /// Velocity range of a node per frame, per axis.
    pub node_speed: f32,
    /// How far (px) a node may drift past the viewport before wrapping.
    pub wrap_margin: f32,
    /// Target frames per second.
    pub frame_rate: u32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            static_star_count: 400,
            twinkle_star_count: 80,
            node_count: 60,
            connection_distance: 180.0,
            mouse_connection_distance: 300.0,
            node_speed: 0.3,
            wrap_margin: 50.0,
            frame_rate: 60,
        }
    }
}

impl FieldSettings {
    /// Time budget of a single frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.frame_rate.max(1)))
    }

    /// Squared node-to-node connection threshold.
    pub fn connection_distance_sq(&self) -> f32 {
        self.connection_distance * self.connection_distance
    }

    /// Squared node-to-pointer connection threshold.
    pub fn mouse_connection_distance_sq(&self) -> f32 {
        self.mouse_connection_distance * self.mouse_connection_distance
    }
}

/// Mapping of terminal cells onto the field's virtual pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Virtual pixels per terminal column.
    pub cell_width: f32,
    /// Virtual pixels per terminal row.
    pub cell_height: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

impl RenderSettings {
    /// Viewport size in virtual pixels for a terminal area.
    pub fn viewport(&self, columns: u16, rows: u16) -> (f32, f32) {
        (
            columns as f32 * self.cell_width,
            rows as f32 * self.cell_height,
        )
    }

    /// Center of a terminal cell in virtual pixels.
    pub fn cell_center(&self, column: u16, row: u16) -> (f32, f32) {
        (
            (column as f32 + 0.5) * self.cell_width,
            (row as f32 + 0.5) * self.cell_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = FieldSettings::default();
        assert_eq!(settings.node_count, 60);
        assert_eq!(settings.connection_distance_sq(), 180.0 * 180.0);
        assert_eq!(settings.mouse_connection_distance_sq(), 300.0 * 300.0);
    }

    #[test]
    fn test_frame_interval() {
        let settings = FieldSettings {
            frame_rate: 50,
            ..Default::default()
        };
        assert_eq!(settings.frame_interval(), Duration::from_millis(20));

        let zero = FieldSettings {
            frame_rate: 0,
            ..Default::default()
        };
        assert_eq!(zero.frame_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_deserialize() {
        let settings: FieldSettings = toml::from_str("node_count = 12").unwrap();
        assert_eq!(settings.node_count, 12);
        assert_eq!(settings.static_star_count, 400);
    }

    #[test]
    fn test_render_mapping() {
        let render = RenderSettings::default();
        assert_eq!(render.viewport(100, 40), (800.0, 640.0));
        assert_eq!(render.cell_center(0, 0), (4.0, 8.0));
    }
}
