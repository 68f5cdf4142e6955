use aihero_content::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, intro};
use aihero_core::{Rgb, Route};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};

use super::{MUTED, SURFACE, TEXT, accent, button, button_width, card, primary, secondary};
use crate::cursor::{HoverRegistry, Target};
use crate::form::{ContactForm, FormField};

const SUBMIT: &str = "Arizani Yuborish";
const SENDING: &str = "Yuborilmoqda...";
const SEND_AGAIN: &str = "Yana ariza yuborish";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    form: &ContactForm,
    sending: bool,
    hover: &mut HoverRegistry,
) {
    let rest = super::intro(frame, area, intro(Route::Contact));
    let [info, panel] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .spacing(2)
            .areas(rest);

    render_info(frame, info);
    if form.is_submitted() {
        render_success(frame, panel, hover);
    } else {
        render_form(frame, panel, form, sending, hover);
    }
}

fn render_info(frame: &mut Frame, area: Rect) {
    let inner = card(frame, area, "Bog'lanish", secondary());
    let lines = vec![
        Line::from("📞 Telefon").fg(MUTED),
        Line::from(CONTACT_PHONE).fg(TEXT).bold(),
        Line::default(),
        Line::from("📧 Email").fg(MUTED),
        Line::from(CONTACT_EMAIL).fg(TEXT).bold(),
        Line::default(),
        Line::from("📍 Manzil").fg(MUTED),
        Line::from(CONTACT_ADDRESS).fg(TEXT),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_form(
    frame: &mut Frame,
    area: Rect,
    form: &ContactForm,
    sending: bool,
    hover: &mut HoverRegistry,
) {
    let inner = card(frame, area, "Ariza", primary());
    let [name, school, phone, email, message, error, submit] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(2),
        Constraint::Length(3),
    ])
    .areas(inner);

    for (field, slot) in FormField::ALL
        .into_iter()
        .zip([name, school, phone, email, message])
    {
        render_input(frame, slot, form, field);
        hover.register(slot, Target::Field(field));
    }

    if let Some(text) = form.error() {
        frame.render_widget(
            Paragraph::new(Line::from(text).fg(Color::from(Rgb(255, 90, 90))))
                .wrap(Wrap { trim: true }),
            error,
        );
    }

    let label = if sending { SENDING } else { SUBMIT };
    let [submit] = Layout::horizontal([Constraint::Length(button_width(label))])
        .flex(ratatui::layout::Flex::Center)
        .areas(submit);
    if sending {
        // No hover target while a request is in flight.
        button(frame, submit, label, MUTED, &mut HoverRegistry::default(), Target::Submit);
    } else {
        button(frame, submit, label, accent(), hover, Target::Submit);
    }
}

fn render_input(frame: &mut Frame, area: Rect, form: &ContactForm, field: FormField) {
    let focused = form.focused() == Some(field);
    let border = if focused { primary() } else { MUTED };
    let title = if field.is_required() {
        Line::from(vec![
            Span::from(format!(" {}", field.label())).fg(TEXT),
            Span::from(" * ").fg(secondary()),
        ])
    } else {
        Line::from(format!(" {} ", field.label())).fg(TEXT)
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(border))
        .style(Style::new().bg(SURFACE))
        .title(title);

    let value = form.value(field);
    let mut lines: Vec<Line> = if value.is_empty() && !focused {
        vec![Line::from(field.placeholder()).fg(MUTED).italic()]
    } else {
        value.split('\n').map(|l| Line::from(l).fg(TEXT)).collect()
    };
    if focused && let Some(last) = lines.last_mut() {
        last.push_span(Span::from("▏").fg(primary()));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_success(frame: &mut Frame, area: Rect, hover: &mut HoverRegistry) {
    let inner = card(frame, area, "", accent());
    let [text, again] = Layout::vertical([Constraint::Length(5), Constraint::Length(3)])
        .flex(ratatui::layout::Flex::Center)
        .areas(inner);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("✔ Qabul qilindi!").fg(accent()).bold(),
            Line::default(),
            Line::from("Sizning arizangiz muvaffaqiyatli yuborildi. Bizning menejerlarimiz tez orada siz bilan bog'lanishadi.")
                .fg(TEXT),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        text,
    );

    let [again] = Layout::horizontal([Constraint::Length(button_width(SEND_AGAIN))])
        .flex(ratatui::layout::Flex::Center)
        .areas(again);
    button(frame, again, SEND_AGAIN, primary(), hover, Target::SendAgain);
}
