use aihero_content::{PROGRAMS, intro};
use aihero_core::{Program, Route};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{MUTED, TEXT, accent, bullet, button, button_width, card, labeled, primary, secondary};
use crate::cursor::{HoverRegistry, Target};

const ENROLL: &str = "Ariza qoldirish";

pub fn render(frame: &mut Frame, area: Rect, hover: &mut HoverRegistry) {
    let rest = super::intro(frame, area, intro(Route::Programs));
    let [cards, footer] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(rest);

    let columns = Layout::horizontal(PROGRAMS.iter().map(|_| Constraint::Fill(1)))
        .spacing(1)
        .split(cards);
    for (index, (program, column)) in PROGRAMS.iter().zip(columns.iter()).enumerate() {
        let border = if index % 2 == 0 { primary() } else { secondary() };
        let title = format!("{} {}", program.icon.glyph(), program.title);
        let inner = card(frame, *column, &title, border);
        frame.render_widget(
            Paragraph::new(program_lines(program)).wrap(Wrap { trim: true }),
            inner,
        );
    }

    let [enroll] = Layout::horizontal([Constraint::Length(button_width(ENROLL))])
        .flex(ratatui::layout::Flex::Center)
        .areas(footer);
    button(frame, enroll, ENROLL, accent(), hover, Target::Route(Route::Contact));
}

fn program_lines(program: &Program) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(subtitle) = program.subtitle {
        lines.push(Line::from(subtitle).fg(primary()).italic());
    }
    lines.push(Line::from(program.description).fg(TEXT));
    lines.push(Line::default());
    lines.extend(program.details.iter().map(|detail| bullet(detail, accent())));
    lines.push(Line::default());

    let mut tools = vec![Span::from("Vositalar: ").fg(MUTED)];
    for (i, tool) in program.tools.iter().enumerate() {
        if i > 0 {
            tools.push(Span::from(" · ").fg(MUTED));
        }
        tools.push(Span::from(*tool).fg(secondary()));
    }
    lines.push(Line::from(tools));

    if let Some(schedule) = program.schedule {
        lines.push(Line::default());
        lines.push(labeled("Expert", schedule.expert));
        lines.push(labeled("Hobby", schedule.hobby));
        lines.push(labeled("Davomiyligi", schedule.duration));
    }
    if let Some(pricing) = program.pricing {
        lines.push(Line::default());
        lines.push(labeled("Expert narxi", pricing.expert));
        lines.push(labeled("Hobby narxi", pricing.hobby));
    }
    lines
}
