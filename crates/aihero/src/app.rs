use std::time::{Duration, Instant};

use aihero_config::Config;
use aihero_contact::{ContactMonitor, Credentials, TelegramClient};
use aihero_content::{NAV_ITEMS, VIDEOS};
use aihero_core::Route;
use aihero_field::{FieldEvent, FieldMount, FieldWidget};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::carousel::Carousel;
use crate::cursor::{CustomCursor, HoverRegistry, Target};
use crate::form::ContactForm;
use crate::pages::{self, MUTED, TEXT, primary};

/// Longest wait for input when no animation frame is due.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    route: Route,
    /// Terminal size in cells.
    size: (u16, u16),
    /// Animated backdrop, absent when disabled.
    field: Option<FieldMount>,
    contact: ContactMonitor,
    form: ContactForm,
    carousel: Carousel,
    /// Index into the home page video list.
    active_video: usize,
    cursor: CustomCursor,
    hover: HoverRegistry,
    last_update: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let now = Instant::now();
        let telegram = &config.telegram;
        let client = TelegramClient::new(
            Credentials::from_parts(telegram.bot_token(), telegram.chat_id()),
            &telegram.api_base,
            Duration::from_secs(telegram.timeout_secs),
        );
        let route = Route::from_path(&config.ui.start_route);
        let carousel = Carousel::new(
            aihero_content::TEAM.len(),
            Duration::from_millis(config.ui.carousel_delay_ms),
            now,
        );

        Self {
            running: false,
            route,
            size: (0, 0),
            field: None,
            contact: ContactMonitor::new(client),
            form: ContactForm::default(),
            carousel,
            active_video: 0,
            cursor: CustomCursor::default(),
            hover: HoverRegistry::default(),
            last_update: now,
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.size = (size.width, size.height);
        if self.config.ui.background {
            self.mount_field();
        }

        self.running = true;
        while self.running {
            self.update(Instant::now());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        self.unmount_field();
        Ok(())
    }

    fn mount_field(&mut self) {
        let (width, height) = self.config.render.viewport(self.size.0, self.size.1);
        self.field = Some(FieldMount::new(self.config.field.clone(), width, height));
    }

    fn unmount_field(&mut self) {
        if let Some(mut field) = self.field.take() {
            field.teardown();
        }
    }

    /// Advance everything time-driven.
    fn update(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_update);
        self.last_update = now;

        if let Some(field) = self.field.as_mut() {
            field.tick(now);
        }
        if self.route == Route::About {
            self.carousel.tick(now);
        }
        self.cursor.step(dt);

        let status = self.contact.status();
        if self.form.apply(status) {
            tracing::info!(?status, "contact submission finished");
            self.contact.reset();
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.hover.clear();

        if let Some(field) = &self.field {
            frame.render_widget(
                FieldWidget::new(field.display(), field.state().viewport()),
                area,
            );
        }

        let [nav, body, help] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let body = body.inner(ratatui::layout::Margin::new(2, 0));

        self.render_nav(frame, nav);
        match self.route {
            Route::Home => pages::home::render(frame, body, self.active_video, &mut self.hover),
            Route::Programs => pages::programs::render(frame, body, &mut self.hover),
            Route::Features => pages::features::render(frame, body),
            Route::About => pages::about::render(frame, body, &self.carousel, &mut self.hover),
            Route::Contact => pages::contact::render(
                frame,
                body,
                &self.form,
                self.contact.is_sending(),
                &mut self.hover,
            ),
        }
        self.render_help(frame, help);

        if self.config.ui.cursor {
            let hovering = self
                .cursor
                .position()
                .and_then(|(column, row)| self.hover.target_at(column, row))
                .is_some();
            self.cursor.set_hovering(hovering);
            self.cursor.render(area, frame.buffer_mut());
        }
    }

    fn render_nav(&mut self, frame: &mut Frame, area: Rect) {
        let brand = Span::from(" AI HERO ").fg(primary()).bold();
        let mut x = area.x + brand.width() as u16 + 2;
        frame.render_widget(Paragraph::new(Line::from(brand)), area);

        for (i, item) in NAV_ITEMS.iter().enumerate() {
            let label = format!("{} {}", i + 1, item.label);
            let width = label.chars().count() as u16;
            let slot = Rect::new(x, area.y, width, 1).intersection(area);
            let span = if item.route == self.route {
                Span::from(label).fg(primary()).bold().underlined()
            } else {
                Span::from(label).fg(TEXT)
            };
            frame.render_widget(Paragraph::new(Line::from(span)), slot);
            self.hover.register(slot, Target::Route(item.route));
            x = x.saturating_add(width + 3);
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let hint = if self.route == Route::Contact && self.form.is_editing() {
            "tab maydon · enter keyingi · ctrl+s yuborish · esc chiqish"
        } else {
            "←/→ sahifa · 1-5 tanlash · b fon · v video · [/] jamoa · q chiqish"
        };
        let line = Line::from(vec![
            Span::from(format!(" {} ", self.route)).fg(primary()),
            Span::from(hint).fg(MUTED),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    ///
    /// Waits no longer than the next animation frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .field
            .as_ref()
            .and_then(|field| field.time_until_next(Instant::now()))
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

        if event::poll(timeout)? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    /// Dispatch one terminal event.
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::Resize(columns, rows) => self.on_resize(columns, rows),
            Event::FocusLost => self.on_pointer_leave(),
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let editing = self.route == Route::Contact && self.form.is_editing();
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (KeyModifiers::CONTROL, KeyCode::Char('s')) if self.route == Route::Contact => {
                self.submit_form()
            }
            _ if editing => self.on_form_key(key),
            (_, KeyCode::Esc | KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Right | KeyCode::Char('l')) => self.navigate(self.route.next()),
            (_, KeyCode::Left | KeyCode::Char('h')) => self.navigate(self.route.prev()),
            (_, KeyCode::Char(c @ '1'..='5')) => {
                let index = c as usize - '1' as usize;
                self.navigate(Route::ALL[index]);
            }
            (_, KeyCode::Char('b')) => self.toggle_background(),
            (_, KeyCode::Char(']')) => self.carousel.next(Instant::now()),
            (_, KeyCode::Char('[')) => self.carousel.prev(Instant::now()),
            (_, KeyCode::Char('v')) if self.route == Route::Home => {
                self.select_video((self.active_video + 1) % VIDEOS.len());
            }
            (_, KeyCode::Tab | KeyCode::Enter) if self.route == Route::Contact => {
                if self.form.is_submitted() {
                    self.form.send_again();
                } else {
                    self.form.focus_first();
                }
            }
            _ => {}
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.form.blur(),
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Enter if self.form.focused() == Some(crate::form::FormField::Message) => {
                self.form.insert('\n')
            }
            KeyCode::Enter => self.form.focus_next(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.insert(c),
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let (x, y) = self.config.render.cell_center(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.cursor.move_to(mouse.column, mouse.row);
                self.send_field_event(FieldEvent::PointerMove { x, y });
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.cursor.move_to(mouse.column, mouse.row);
                self.send_field_event(FieldEvent::PointerMove { x, y });
                if let Some(target) = self.hover.target_at(mouse.column, mouse.row) {
                    self.activate(target);
                }
            }
            _ => {}
        }
    }

    fn on_resize(&mut self, columns: u16, rows: u16) {
        self.size = (columns, rows);
        let (width, height) = self.config.render.viewport(columns, rows);
        self.send_field_event(FieldEvent::Resize { width, height });
    }

    fn on_pointer_leave(&mut self) {
        self.cursor.hide();
        self.send_field_event(FieldEvent::PointerLeave);
    }

    fn send_field_event(&mut self, event: FieldEvent) {
        if let Some(field) = self.field.as_mut() {
            field.handle(event);
        }
    }

    fn activate(&mut self, target: Target) {
        let now = Instant::now();
        match target {
            Target::Route(route) => self.navigate(route),
            Target::Field(field) => self.form.focus(field),
            Target::Submit => self.submit_form(),
            Target::SendAgain => self.form.send_again(),
            Target::CarouselPrev => self.carousel.prev(now),
            Target::CarouselNext => self.carousel.next(now),
            Target::Video(index) => self.select_video(index),
        }
    }

    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!(from = %self.route, to = %route, "navigate");
        self.route = route;
        self.form.blur();
        self.hover.clear();
    }

    fn select_video(&mut self, index: usize) {
        if index < VIDEOS.len() && index != self.active_video {
            tracing::debug!(title = VIDEOS[index].title, "select video");
            self.active_video = index;
        }
    }

    fn toggle_background(&mut self) {
        if self.field.is_some() {
            self.unmount_field();
        } else {
            self.mount_field();
        }
    }

    fn submit_form(&mut self) {
        if self.contact.is_sending() {
            return;
        }
        let Some(request) = self.form.validate() else {
            return;
        };
        if self.contact.submit(request).is_some() {
            tracing::info!("contact submission started");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aihero_field::PointerState;
    use crossterm::event::KeyEventState;
    use ratatui::{Terminal, backend::TestBackend};

    fn test_app() -> App {
        let mut config = Config::default();
        config.ui.background = false;
        App::new(config)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.on_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }

    #[test]
    fn test_start_route_from_config() {
        let mut config = Config::default();
        config.ui.start_route = "/aloqa".to_string();
        assert_eq!(App::new(config).route, Route::Contact);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut app = test_app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.route, Route::Programs);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.route, Route::About);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.route, Route::Features);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        app.running = true;
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = test_app();
        app.running = true;
        app.on_key_event(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert!(!app.running);
    }

    #[test]
    fn test_typing_goes_to_form_while_editing() {
        let mut app = test_app();
        app.running = true;
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Tab);
        assert!(app.form.is_editing());

        for c in "qa".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.running);
        assert_eq!(app.route, Route::Contact);
        assert_eq!(app.form.value(crate::form::FormField::Name), "qa");

        press(&mut app, KeyCode::Esc);
        assert!(!app.form.is_editing());
        assert!(app.running);
    }

    #[test]
    fn test_clicking_nav_item() {
        let mut app = test_app();
        draw(&mut app);
        let (column, row) = (0..100)
            .map(|x| (x, 0))
            .find(|&(x, y)| app.hover.target_at(x, y) == Some(Target::Route(Route::About)))
            .expect("about link on the nav bar");

        click(&mut app, column, row);
        assert_eq!(app.route, Route::About);
    }

    #[test]
    fn test_incomplete_form_is_not_sent() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('5'));
        app.submit_form();
        assert!(app.form.error().is_some());
        assert!(!app.contact.is_sending());
    }

    #[test]
    fn test_background_toggle_mounts_field() {
        let mut app = test_app();
        app.size = (80, 24);
        press(&mut app, KeyCode::Char('b'));
        let field = app.field.as_ref().unwrap();
        assert_eq!(field.state().viewport(), (640.0, 384.0));
        assert!(field.is_active());

        press(&mut app, KeyCode::Char('b'));
        assert!(app.field.is_none());
    }

    #[test]
    fn test_resize_reaches_field() {
        let mut app = test_app();
        app.size = (80, 24);
        app.mount_field();
        let generation = app.field.as_ref().unwrap().state().generation();
        app.on_resize(100, 30);
        let state = app.field.as_ref().unwrap().state();
        assert_eq!(state.viewport(), (800.0, 480.0));
        assert!(state.generation() > generation);
    }

    #[test]
    fn test_focus_lost_clears_pointer() {
        let mut app = test_app();
        app.size = (80, 24);
        app.mount_field();

        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }));
        let pointer = app.field.as_ref().unwrap().state().pointer();
        assert_eq!((pointer.x, pointer.y), (84.0, 88.0));
        assert_eq!(app.cursor.position(), Some((10, 5)));

        app.handle_event(Event::FocusLost);
        assert_eq!(
            app.field.as_ref().unwrap().state().pointer(),
            PointerState::OFFSCREEN
        );
        assert_eq!(app.cursor.position(), None);
    }

    #[test]
    fn test_selecting_video_changes_active() {
        let mut app = test_app();
        draw(&mut app);
        assert_eq!(app.active_video, 0);

        let (column, row) = (0..40)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .find(|&(x, y)| app.hover.target_at(x, y) == Some(Target::Video(2)))
            .expect("third video in the list");
        click(&mut app, column, row);
        assert_eq!(app.active_video, 2);

        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.active_video, 3);
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.active_video, 0);

        app.activate(Target::Video(VIDEOS.len()));
        assert_eq!(app.active_video, 0);
    }
}
