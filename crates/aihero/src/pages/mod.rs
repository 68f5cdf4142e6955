//! Page bodies, one module per route, plus the shared card and button widgets.

use aihero_content::PageIntro;
use aihero_core::Rgb;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};

use crate::cursor::{HoverRegistry, Target};

pub mod about;
pub mod contact;
pub mod features;
pub mod home;
pub mod programs;

/// Card fill, slightly lifted from the page background.
pub const SURFACE: Color = Color::Rgb(14, 14, 22);
pub const TEXT: Color = Color::Rgb(230, 230, 235);
pub const MUTED: Color = Color::Rgb(140, 140, 155);

pub fn primary() -> Color {
    Rgb::PRIMARY.into()
}

pub fn secondary() -> Color {
    Rgb::SECONDARY.into()
}

pub fn accent() -> Color {
    Rgb::ACCENT.into()
}

/// Opaque bordered card; returns the inner area.
pub fn card(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);
    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(border))
        .style(Style::new().bg(SURFACE));
    if !title.is_empty() {
        block = block.title(Line::from(format!(" {title} ")).fg(TEXT).bold());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Heading and lead centered at the top of `area`; returns what is left below.
pub fn intro(frame: &mut Frame, area: Rect, intro: PageIntro) -> Rect {
    let [heading, lead, rest] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(intro.heading).fg(primary()).bold())
            .alignment(Alignment::Center),
        heading,
    );
    frame.render_widget(
        Paragraph::new(intro.lead)
            .style(Style::new().fg(MUTED))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        lead,
    );
    rest
}

/// Framed button that registers itself as a hover target.
pub fn button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    color: Color,
    hover: &mut HoverRegistry,
    target: Target,
) {
    frame.render_widget(Clear, area);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(color))
        .style(Style::new().bg(SURFACE));
    frame.render_widget(
        Paragraph::new(Line::from(label).fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
    hover.register(area, target);
}

/// Width a button needs for `label`, borders and padding included.
pub fn button_width(label: &str) -> u16 {
    u16::try_from(label.chars().count()).unwrap_or(u16::MAX / 2) + 4
}

/// `• text` bullet line.
pub fn bullet(text: &str, color: Color) -> Line<'_> {
    Line::from(vec![Span::from("• ").fg(color), Span::from(text).fg(TEXT)])
}

/// Label/value line, e.g. `Narx: 500,000 so'm/oy`.
pub fn labeled<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::from(format!("{label}: ")).fg(MUTED),
        Span::from(value).fg(TEXT),
    ])
}
