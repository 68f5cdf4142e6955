use aihero_content::{FEATURES, intro};
use aihero_core::Route;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{Paragraph, Wrap},
};

use super::{TEXT, card, primary, secondary};

pub fn render(frame: &mut Frame, area: Rect) {
    let rest = super::intro(frame, area, intro(Route::Features));
    let rows = Layout::vertical([Constraint::Fill(1); 2]).spacing(1).split(rest);

    for (row, pair) in rows.iter().zip(FEATURES.chunks(2)) {
        let columns = Layout::horizontal([Constraint::Fill(1); 2])
            .spacing(2)
            .split(*row);
        for (column, feature) in columns.iter().zip(pair) {
            let border = if feature.id.ends_with(['1', '4']) {
                primary()
            } else {
                secondary()
            };
            let inner = card(frame, *column, "", border);
            let lines = vec![
                Line::from(format!("{}  {}", feature.icon.glyph(), feature.title))
                    .fg(border)
                    .bold(),
                Line::default(),
                Line::from(feature.description).fg(TEXT),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
        }
    }
}
