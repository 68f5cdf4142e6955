//! Core types shared across the AI HERO crates.
//!
//! Routes, the brand palette, tunable settings for the animated background
//! and the record types the content tables are built from.

mod content;
mod palette;
mod route;
mod settings;

pub use content::{
    Feature, FeatureIcon, NavItem, Pricing, Program, ProgramIcon, Schedule, Stat, TeamMember,
    Testimonial, Video,
};
pub use palette::{ColorTag, Rgb};
pub use route::Route;
pub use settings::{FieldSettings, RenderSettings};
