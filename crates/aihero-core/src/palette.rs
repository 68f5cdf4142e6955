//! Brand palette.

use ratatui::style::Color;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Neon cyan used for links, lines and the pointer core.
    pub const PRIMARY: Rgb = Rgb(0, 243, 255);
    /// Violet used for the secondary node color.
    pub const SECONDARY: Rgb = Rgb(188, 19, 254);
    /// Green used for success states.
    pub const ACCENT: Rgb = Rgb(10, 255, 10);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    /// Page background (#050505).
    pub const BACKGROUND: Rgb = Rgb(5, 5, 5);

    /// Composite this color with `alpha` over `base`.
    pub fn over(self, base: Rgb, alpha: f32) -> Rgb {
        let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        let mix = |fg: u8, bg: u8| (bg as f32 + (fg as f32 - bg as f32) * a).round() as u8;
        Rgb(mix(self.0, base.0), mix(self.1, base.1), mix(self.2, base.2))
    }

    /// Linear interpolation between two colors, `t` in 0..=1.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        other.over(self, t)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

/// Binary color tag carried by each motion node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Primary,
    Secondary,
}

impl ColorTag {
    /// Resolve the tag to its palette color.
    pub fn rgb(self) -> Rgb {
        match self {
            ColorTag::Primary => Rgb::PRIMARY,
            ColorTag::Secondary => Rgb::SECONDARY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_extremes() {
        assert_eq!(Rgb::WHITE.over(Rgb::BACKGROUND, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::WHITE.over(Rgb::BACKGROUND, 0.0), Rgb::BACKGROUND);
        assert_eq!(Rgb::WHITE.over(Rgb::BACKGROUND, 7.0), Rgb::WHITE);
        assert_eq!(Rgb::WHITE.over(Rgb::BACKGROUND, f32::NAN), Rgb::BACKGROUND);
    }

    #[test]
    fn test_over_half() {
        assert_eq!(Rgb(200, 100, 0).over(Rgb(0, 0, 0), 0.5), Rgb(100, 50, 0));
    }

    #[test]
    fn test_tag_colors() {
        assert_eq!(ColorTag::Primary.rgb(), Rgb::PRIMARY);
        assert_eq!(ColorTag::Secondary.rgb(), Rgb::SECONDARY);
        assert_eq!(Color::from(Rgb::PRIMARY), Color::Rgb(0, 243, 255));
    }
}
