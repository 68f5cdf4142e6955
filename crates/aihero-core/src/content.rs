//! Record types for the static site content.

use crate::Route;

/// An entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

/// Icon shown next to a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramIcon {
    Cpu,
    Bot,
    Languages,
}

impl ProgramIcon {
    /// Terminal glyph for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            ProgramIcon::Cpu => "▣",
            ProgramIcon::Bot => "⚙",
            ProgramIcon::Languages => "文",
        }
    }
}

/// Weekly schedule of the two program tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub expert: &'static str,
    pub hobby: &'static str,
    pub duration: &'static str,
}

/// Monthly price of the two program tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    pub expert: &'static str,
    pub hobby: &'static str,
}

/// A course program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
    /// Key learning points.
    pub details: &'static [&'static str],
    /// Tools and technologies taught.
    pub tools: &'static [&'static str],
    pub schedule: Option<Schedule>,
    pub pricing: Option<Pricing>,
    pub icon: ProgramIcon,
}

/// Icon shown next to a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Award,
    Users,
    TrendingUp,
    Zap,
    Brain,
    Rocket,
}

impl FeatureIcon {
    /// Terminal glyph for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            FeatureIcon::Award => "★",
            FeatureIcon::Users => "☺",
            FeatureIcon::TrendingUp => "↗",
            FeatureIcon::Zap => "ϟ",
            FeatureIcon::Brain => "◉",
            FeatureIcon::Rocket => "➶",
        }
    }
}

/// A selling point of the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
}

/// A member of the teaching staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub specialty: Option<&'static str>,
}

/// A headline number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub suffix: &'static str,
}

/// A quote from a parent, student or partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
}

/// A clip from the school's YouTube channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Video {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub url: &'static str,
}
