//! Main view: picks the header presentation, routes events, renders the page.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use kiosk_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::{Component, DrawerComponent, HeaderComponent, PageComponent};

/// Top-level composite component.
///
/// Exactly one of the two header presentations is active at a time, chosen
/// by the layout mode; both read and write the same `NavState`, so flipping
/// the mode never loses selection state.
#[derive(Debug, Default)]
pub struct MainView {
    header: HeaderComponent,
    drawer: DrawerComponent,
    page: PageComponent,
}

impl MainView {
    /// Whether a Down keypress belongs to the header (dropdown trigger)
    /// rather than the page scroll.
    fn header_wants_down(app: &App) -> bool {
        match app.nav.focused_item() {
            Some(index) if index < app.nav.tab_count() => app.ctx.site.routes().tab_has_submenu(index),
            _ => false,
        }
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        app.update(msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Open overlays take the keyboard first.
        if app.nav.overlay().is_drawer() {
            return self.drawer.handle_key_events(app, key);
        }
        if app.nav.overlay().is_menu() {
            return self.header.handle_key_events(app, key);
        }

        // Application-level keys.
        match key.code {
            KeyCode::Char('q') => return vec![Effect::Quit],
            KeyCode::Char('[') => return vec![Effect::NavigateBack],
            KeyCode::Char(']') => return vec![Effect::NavigateForward],
            KeyCode::Char('e') => {
                if let Some(path) = app.nav.activate_call_to_action(app.ctx.site.routes()) {
                    return vec![Effect::Navigate(path)];
                }
                return Vec::new();
            }
            KeyCode::Char('m') if app.layout.is_narrow() => {
                app.nav.toggle_drawer();
                return Vec::new();
            }
            _ => {}
        }

        if !app.layout.is_narrow() {
            match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter => {
                    return self.header.handle_key_events(app, key);
                }
                KeyCode::Down if Self::header_wants_down(app) => {
                    return self.header.handle_key_events(app, key);
                }
                _ => {}
            }
        }

        self.page.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.nav.overlay().is_drawer() {
            return self.drawer.handle_mouse_events(app, mouse);
        }
        if app.nav.overlay().is_menu() {
            return self.header.handle_mouse_events(app, mouse);
        }

        let mut effects = Vec::new();
        if app.layout.is_narrow() {
            effects.extend(self.drawer.handle_mouse_events(app, mouse));
        } else {
            effects.extend(self.header.handle_mouse_events(app, mouse));
        }
        effects.extend(self.page.handle_mouse_events(app, mouse));
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the whole background for a consistent canvas.
        let fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(fill, area);

        let rows = Layout::vertical([
            Constraint::Length(3), // Header chrome
            Constraint::Min(1),    // Page body
            Constraint::Length(1), // Hint bar
        ])
        .split(area);

        if app.layout.is_narrow() {
            self.drawer.render(frame, rows[0], app);
        } else {
            self.header.render(frame, rows[0], app);
        }
        self.page.render(frame, rows[1], app);

        let mut hints: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.muted_style())];
        hints.extend(self.get_hint_spans(app));
        frame.render_widget(Paragraph::new(Line::from(hints)).style(app.ctx.theme.muted_style()), rows[2]);

        // Overlays paint last so they sit on top of the page.
        if app.nav.overlay().is_menu() {
            self.header.render_menu(frame, app);
        }
        if app.nav.overlay().is_drawer() {
            // The drawer covers everything below the header chrome.
            let below = Rect::new(area.x, rows[0].bottom(), area.width, area.height.saturating_sub(rows[0].height));
            self.drawer.render_drawer(frame, below, app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut spans = Vec::new();
        if app.nav.overlay().is_drawer() || app.layout.is_narrow() {
            spans.extend(self.drawer.get_hint_spans(app));
        } else {
            spans.extend(self.header.get_hint_spans(app));
        }
        if !app.nav.overlay().is_open() {
            spans.extend(self.page.get_hint_spans(app));
            let mut globals = vec![("e", " Estimate  ")];
            if app.router.can_back() {
                globals.push(("[", " Back  "));
            }
            if app.router.can_forward() {
                globals.push(("]", " Forward  "));
            }
            globals.push(("q", " Quit"));
            spans.extend(app.ctx.theme.build_hint_spans(&globals));
        }
        if app.ctx.debug_enabled {
            spans.push(Span::styled(
                format!("  {}", app.router.current()),
                app.ctx.theme.muted_style(),
            ));
        }
        spans
    }
}
