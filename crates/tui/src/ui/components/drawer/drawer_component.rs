//! Narrow-layout header: hamburger row and slide-out drawer.
//!
//! Shares `NavState` with the wide header, so flipping layouts keeps the
//! same selection; only the presentation changes.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use kiosk_types::{Effect, TabSelection};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::components::{Component, hit_index};
use crate::ui::utils::drawer_panel;

/// Width of the slide-out panel.
const DRAWER_WIDTH: u16 = 26;

/// The narrow-layout header component.
#[derive(Debug, Default)]
pub struct DrawerComponent;

impl DrawerComponent {
    fn choose_item(app: &mut App, index: usize) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(path) = app.nav.choose_drawer_item(index, app.ctx.site.routes()) {
            effects.push(Effect::Navigate(path));
        }
        effects
    }

    /// Renders the open drawer over the page. Called by the main view last
    /// so the panel paints on top.
    pub fn render_drawer(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        if !app.nav.overlay().is_drawer() {
            return;
        }
        let theme = &app.ctx.theme;

        // Dim the page behind the panel.
        frame.render_widget(Block::default().style(theme.scrim_style()), area);

        let panel = drawer_panel(area, DRAWER_WIDTH);
        frame.render_widget(Clear, panel);
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.border_style(true))
            .style(theme.drawer_style());
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let mut labels: Vec<String> = app.ctx.site.routes().tabs().map(|descriptor| descriptor.name.clone()).collect();
        if let Some(cta) = app.ctx.site.routes().call_to_action() {
            labels.push(cta.name.clone());
        }

        let selected = app.nav.selected();
        let tab_count = app.nav.tab_count();
        let mut item_areas = Vec::with_capacity(labels.len());
        for (index, label) in labels.iter().enumerate() {
            let row_area = Rect::new(inner.x, inner.y + 1 + index as u16, inner.width, 1);
            if row_area.bottom() > inner.bottom() {
                break;
            }
            let is_cta = index == tab_count;
            let is_selected = if is_cta {
                selected == TabSelection::CallToAction
            } else {
                selected == TabSelection::Tab(index)
            };
            let focused = app.nav.item_focus_flags.get(index).map(|flag| flag.get()).unwrap_or_default();
            let marker = if is_selected { "▸ " } else { "  " };
            let label = format!("{marker}{label:<width$}", width = inner.width.saturating_sub(2) as usize);
            let style = theme.drawer_item_style(is_selected, focused, is_cta);
            frame.render_widget(Paragraph::new(Line::styled(label, style)), row_area);
            item_areas.push(row_area);
        }

        app.nav.drawer_area = panel;
        app.nav.item_areas = item_areas;
    }
}

impl Component for DrawerComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !app.nav.overlay().is_drawer() {
            return effects;
        }
        match key.code {
            KeyCode::Up => {
                if let Some(flag) = app.nav.cycle_focus(false) {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Down => {
                if let Some(flag) = app.nav.cycle_focus(true) {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Enter => {
                if let Some(index) = app.nav.focused_item() {
                    effects.extend(Self::choose_item(app, index));
                }
            }
            KeyCode::Esc | KeyCode::Char('m') => app.nav.toggle_drawer(),
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if app.nav.overlay().is_drawer() => {
                if let Some(index) = hit_index(&app.nav.item_areas, mouse.column, mouse.row) {
                    effects.extend(Self::choose_item(app, index));
                } else if !app.nav.drawer_area.contains(position) {
                    // Outside click: close, swallow the click.
                    app.nav.dismiss_overlay();
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if app.nav.toggle_area.contains(position) {
                    app.nav.toggle_drawer();
                } else if app.nav.logo_area.contains(position) {
                    if let Some(descriptor) = app.ctx.site.routes().tab(0) {
                        let path = descriptor.path.clone();
                        app.nav.activate_tab(TabSelection::Tab(0));
                        effects.push(Effect::Navigate(path));
                    }
                }
            }
            _ => {}
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.ctx.theme;
        let block = Block::default().borders(Borders::BOTTOM).border_style(theme.border_style(false));
        frame.render_widget(block, area);

        let row = if area.height >= 3 { area.y + 1 } else { area.y };

        let logo = format!("◆ {}", app.ctx.site.company().name);
        let logo_width = (logo.width() as u16).min(area.width.saturating_sub(6));
        let logo_area = Rect::new(area.x + 1, row, logo_width, 1);
        frame.render_widget(Paragraph::new(Line::styled(logo, theme.logo_style())), logo_area);

        let toggle = if app.nav.overlay().is_drawer() { "[✕]" } else { "[☰]" };
        let toggle_area = Rect::new(area.right().saturating_sub(5), row, 3, 1);
        frame.render_widget(Paragraph::new(Line::styled(toggle, theme.title_style())), toggle_area);

        app.nav.last_area = area;
        app.nav.logo_area = logo_area;
        app.nav.toggle_area = toggle_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        if app.nav.overlay().is_drawer() {
            app.ctx
                .theme
                .build_hint_spans(&[("↑/↓", " Item  "), ("Enter", " Open  "), ("Esc", " Close  ")])
        } else {
            app.ctx.theme.build_hint_spans(&[("m", " Menu  ")])
        }
    }
}
