use aihero_content::{STATS, TEAM, intro};
use aihero_core::Route;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
};

use super::{MUTED, TEXT, accent, button, card, primary, secondary};
use crate::carousel::{Carousel, slides_per_view};
use crate::cursor::{HoverRegistry, Target};

const MISSION: &str = "Biz maktablarga sun'iy intellekt, robototexnika va Koreys tilini \
    amaliy, zamonaviy va qiziqarli tarzda olib kiramiz. Maqsadimiz: har bir o'quvchi \
    kelajak texnologiyalarini yaratuvchisiga aylanishi.";

pub fn render(frame: &mut Frame, area: Rect, carousel: &Carousel, hover: &mut HoverRegistry) {
    let rest = super::intro(frame, area, intro(Route::About));
    let [mission, team] =
        Layout::vertical([Constraint::Length(6), Constraint::Fill(1)])
            .spacing(1)
            .areas(rest);

    let inner = card(frame, mission, "Missiyamiz", secondary());
    let mut lines = vec![Line::from(MISSION).fg(TEXT), Line::default()];
    lines.push(Line::from(
        STATS
            .iter()
            .map(|s| format!("{}{} {}", s.value, s.suffix, s.label))
            .collect::<Vec<_>>()
            .join("   "),
    )
    .fg(accent()));
    frame.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );

    render_team(frame, team, carousel, hover);
}

fn render_team(frame: &mut Frame, area: Rect, carousel: &Carousel, hover: &mut HoverRegistry) {
    let [title, row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(7)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::from("BIZNING JAMOA").fg(primary()).bold())
            .alignment(Alignment::Center),
        title,
    );

    let [prev, slides, next] = Layout::horizontal([
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(5),
    ])
    .spacing(1)
    .areas(row);

    let [prev, next] = [prev, next].map(|side| {
        Layout::vertical([Constraint::Length(3)])
            .flex(ratatui::layout::Flex::Center)
            .split(side)[0]
    });
    button(frame, prev, "‹", MUTED, hover, Target::CarouselPrev);
    button(frame, next, "›", MUTED, hover, Target::CarouselNext);

    let count = slides_per_view(slides.width);
    let columns = Layout::horizontal((0..count).map(|_| Constraint::Fill(1)))
        .spacing(2)
        .split(slides);
    for (column, index) in columns.iter().zip(carousel.visible(count)) {
        let member = &TEAM[index];
        let inner = card(frame, *column, "", primary());
        let mut lines = vec![
            Line::from(member.name).fg(TEXT).bold(),
            Line::from(member.role).fg(primary()),
        ];
        if let Some(specialty) = member.specialty {
            lines.push(Line::from(specialty).fg(MUTED).italic());
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
