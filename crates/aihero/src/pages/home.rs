use aihero_content::{HIGHLIGHTS, PROGRAMS, STATS, TESTIMONIALS, VIDEOS, YOUTUBE_CHANNEL, intro};
use aihero_core::Route;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{
    MUTED, TEXT, accent, bullet, button, button_width, card, labeled, primary, secondary,
};
use crate::cursor::{HoverRegistry, Target};

const CTA_PRIMARY: &str = "Hamkorlikni Boshlash →";
const CTA_SECONDARY: &str = "Dasturlarimiz";

/// Red of the YouTube brand.
const YOUTUBE_RED: Color = Color::Rgb(220, 38, 38);

/// Home page; `active_video` indexes [`VIDEOS`].
pub fn render(frame: &mut Frame, area: Rect, active_video: usize, hover: &mut HoverRegistry) {
    let rest = super::intro(frame, area, intro(Route::Home));
    let [ctas, stats, videos, lower] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(VIDEOS.len() as u16 + 2),
        Constraint::Fill(1),
    ])
    .spacing(1)
    .areas(rest);

    render_ctas(frame, ctas, hover);
    render_stats(frame, stats);
    render_videos(frame, videos, active_video, hover);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .spacing(2)
            .areas(lower);
    render_highlights(frame, left);
    render_testimonials(frame, right);
}

fn render_ctas(frame: &mut Frame, area: Rect, hover: &mut HoverRegistry) {
    let [first, second] = Layout::horizontal([
        Constraint::Length(button_width(CTA_PRIMARY)),
        Constraint::Length(button_width(CTA_SECONDARY)),
    ])
    .flex(Flex::Center)
    .spacing(2)
    .areas(area);
    button(
        frame,
        first,
        CTA_PRIMARY,
        primary(),
        hover,
        Target::Route(Route::Contact),
    );
    button(
        frame,
        second,
        CTA_SECONDARY,
        secondary(),
        hover,
        Target::Route(Route::Programs),
    );
}

fn render_stats(frame: &mut Frame, area: Rect) {
    let columns = Layout::horizontal(STATS.iter().map(|_| Constraint::Fill(1)))
        .spacing(2)
        .split(area);
    for (stat, column) in STATS.iter().zip(columns.iter()) {
        let inner = card(frame, *column, "", primary());
        let text = vec![
            Line::from(vec![
                Span::from(stat.value).fg(TEXT).bold(),
                Span::from(stat.suffix).fg(accent()).bold(),
            ]),
            Line::from(stat.label).fg(MUTED),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
    }
}

fn render_videos(frame: &mut Frame, area: Rect, active: usize, hover: &mut HoverRegistry) {
    let inner = card(frame, area, "▶ YouTube Kanalimiz", YOUTUBE_RED);
    let [list, detail] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .spacing(2)
            .areas(inner);

    for (index, video) in VIDEOS.iter().enumerate() {
        let row = Rect {
            y: list.y + index as u16,
            height: 1,
            ..list
        };
        if row.y >= list.bottom() {
            break;
        }
        let line = if index == active {
            Line::from(vec![
                Span::from("▶ ").fg(primary()),
                Span::from(video.title).fg(primary()).bold(),
                Span::from(format!(" {}", video.duration)).fg(MUTED),
            ])
        } else {
            Line::from(vec![
                Span::from("  "),
                Span::from(video.title).fg(TEXT),
                Span::from(format!(" {}", video.duration)).fg(MUTED),
            ])
        };
        frame.render_widget(Paragraph::new(line), row);
        hover.register(row, Target::Video(index));
    }

    let Some(video) = VIDEOS.get(active) else {
        return;
    };
    let lines = vec![
        Line::from(video.title).fg(TEXT).bold(),
        labeled("Davomiylik", video.duration),
        Line::from(video.url).fg(secondary()).underlined(),
        Line::from(vec![
            Span::from("Obuna Bo'lish: ").fg(MUTED),
            Span::from(YOUTUBE_CHANNEL).fg(YOUTUBE_RED),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), detail);
}

fn render_highlights(frame: &mut Frame, area: Rect) {
    let inner = card(frame, area, "Nega AI HERO?", secondary());
    let mut lines: Vec<Line> = HIGHLIGHTS.iter().map(|h| bullet(h, accent())).collect();
    lines.push(Line::default());
    lines.extend(
        PROGRAMS
            .iter()
            .map(|p| Line::from(format!("{} {}", p.icon.glyph(), p.title)).fg(primary())),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_testimonials(frame: &mut Frame, area: Rect) {
    let inner = card(frame, area, "Fikrlar", primary());
    let mut lines = Vec::new();
    for testimonial in &TESTIMONIALS {
        lines.push(Line::from(format!("“{}”", testimonial.content)).fg(TEXT).italic());
        lines.push(Line::from(vec![
            Span::from(testimonial.name).fg(primary()).bold(),
            Span::from(format!(" · {}", testimonial.role)).fg(MUTED),
        ]));
        lines.push(Line::default());
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(active_video: usize) -> (Terminal<TestBackend>, HoverRegistry) {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut hover = HoverRegistry::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, active_video, &mut hover)
            })
            .unwrap();
        (terminal, hover)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_ctas_lead_to_contact_and_programs() {
        let (_, hover) = draw(0);

        assert_eq!(hover.len(), 2 + VIDEOS.len());
        let targets: Vec<Target> = (0..100)
            .filter_map(|x| hover.target_at(x, 6))
            .collect();
        assert!(targets.contains(&Target::Route(Route::Contact)));
        assert!(targets.contains(&Target::Route(Route::Programs)));
    }

    #[test]
    fn test_every_video_is_selectable() {
        let (_, hover) = draw(0);
        for index in 0..VIDEOS.len() {
            let found = (0..40u16)
                .flat_map(|y| (0..100u16).map(move |x| (x, y)))
                .any(|(x, y)| hover.target_at(x, y) == Some(Target::Video(index)));
            assert!(found, "video {index} has no hover target");
        }
    }

    #[test]
    fn test_active_video_details_shown() {
        let (terminal, _) = draw(2);
        let screen = screen(&terminal);
        assert!(screen.contains(&format!("▶ {}", VIDEOS[2].title)));
        assert!(screen.contains(VIDEOS[2].url));
        assert!(screen.contains(YOUTUBE_CHANNEL));
        assert!(!screen.contains(VIDEOS[0].url));
    }
}
