//! Renders the content of the current page.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use kiosk_types::Effect;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::Component;

/// Lines scrolled per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

/// The page body component.
///
/// Looks up the current path in the site document and renders its content
/// as wrapped, scrollable text. Knows nothing about navigation beyond the
/// router's current path.
#[derive(Debug, Default)]
pub struct PageComponent;

impl PageComponent {
    fn build_lines(app: &App, width: usize) -> Vec<Line<'static>> {
        let theme = &app.ctx.theme;
        let path = app.router.current();
        let mut lines: Vec<Line<'static>> = Vec::new();

        let Some(page) = app.ctx.site.page(path) else {
            lines.push(Line::styled("Nothing here".to_string(), theme.title_style()));
            lines.push(Line::default());
            for wrapped in textwrap::wrap(
                &format!("No page exists at {path}. Use the navigation above to find your way back."),
                width,
            ) {
                lines.push(Line::styled(wrapped.into_owned(), theme.muted_style()));
            }
            return lines;
        };

        lines.push(Line::styled(page.title.clone(), theme.title_style()));
        lines.push(Line::default());
        if let Some(lede) = &page.lede {
            for wrapped in textwrap::wrap(lede, width) {
                lines.push(Line::styled(
                    wrapped.into_owned(),
                    theme.muted_style().add_modifier(Modifier::ITALIC),
                ));
            }
            lines.push(Line::default());
        }
        for section in &page.sections {
            if let Some(heading) = &section.heading {
                lines.push(Line::styled(heading.clone(), theme.heading_style()));
            }
            for wrapped in textwrap::wrap(&section.body, width) {
                lines.push(Line::styled(wrapped.into_owned(), theme.text_style()));
            }
            lines.push(Line::default());
        }

        if page.contact_card
            && let Some(contact) = &app.ctx.site.company().contact
        {
            lines.push(Line::styled("Reach us directly".to_string(), theme.heading_style()));
            lines.push(Line::styled(format!("  E-mail  {}", contact.email), theme.text_style()));
            if let Some(phone) = &contact.phone {
                lines.push(Line::styled(format!("  Phone   {phone}"), theme.text_style()));
            }
            lines.push(Line::styled(
                "  press y to copy the e-mail address".to_string(),
                theme.muted_style().add_modifier(Modifier::ITALIC),
            ));
        }

        lines
    }

    /// Whether the current page shows the contact card (and thus the copy
    /// shortcut).
    fn copyable_email(app: &App) -> Option<String> {
        let page = app.ctx.site.page(app.router.current())?;
        if !page.contact_card {
            return None;
        }
        let contact = app.ctx.site.company().contact.as_ref()?;
        Some(contact.email.clone())
    }
}

impl Component for PageComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match key.code {
            KeyCode::Up => app.page.scroll_by(-1),
            KeyCode::Down => app.page.scroll_by(1),
            KeyCode::PageUp => app.page.scroll_pages(-1),
            KeyCode::PageDown => app.page.scroll_pages(1),
            KeyCode::Home => app.page.to_top(),
            KeyCode::End => app.page.to_bottom(),
            KeyCode::Char('y') => {
                if let Some(email) = Self::copyable_email(app) {
                    effects.push(Effect::CopyToClipboard(email));
                }
            }
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::ScrollUp => app.page.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => app.page.scroll_by(WHEEL_STEP),
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let inner = Rect::new(
            area.x + 2,
            area.y + 1,
            area.width.saturating_sub(4),
            area.height.saturating_sub(1),
        );
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = Self::build_lines(app, inner.width as usize);
        app.page.measure(lines.len() as u16, inner.height);

        let body = Paragraph::new(Text::from(lines)).scroll((app.page.scroll(), 0));
        frame.render_widget(body, inner);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut spans = app.ctx.theme.build_hint_spans(&[("↑/↓", " Scroll  ")]);
        if Self::copyable_email(app).is_some() {
            spans.extend(app.ctx.theme.build_hint_spans(&[("y", " Copy e-mail  ")]));
        }
        spans
    }
}
