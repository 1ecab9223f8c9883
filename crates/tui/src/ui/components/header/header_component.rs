//! Wide-layout header: logo, tab strip, call-to-action button, dropdown.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use kiosk_types::{Effect, TabSelection};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::Overlay;
use crate::app::App;
use crate::ui::components::{Component, hit_index};
use crate::ui::utils::anchored_below;

/// Gap between items in the tab strip.
const ITEM_GAP: u16 = 2;

/// The wide-layout header component.
///
/// Renders a single chrome row (logo left, tabs and the call-to-action
/// button right) and, while one is open, the dropdown submenu. All
/// navigation state lives in `App::nav`; this component translates input
/// into `NavState` handler calls and `Effect`s.
#[derive(Debug, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    /// Activates the strip item at `index` (tabs first, button last) and
    /// requests navigation to its path.
    fn activate_item(app: &mut App, index: usize) -> Vec<Effect> {
        let mut effects = Vec::new();
        if index == app.nav.tab_count() {
            if let Some(path) = app.nav.activate_call_to_action(app.ctx.site.routes()) {
                effects.push(Effect::Navigate(path));
            }
        } else if let Some(descriptor) = app.ctx.site.routes().tab(index) {
            let path = descriptor.path.clone();
            app.nav.activate_tab(TabSelection::Tab(index));
            app.nav.dismiss_overlay();
            effects.push(Effect::Navigate(path));
        }
        effects
    }

    /// Opens the dropdown for the tab at `index`, unless that menu is
    /// already showing.
    fn open_menu_for(app: &mut App, index: usize) {
        let already_open = matches!(app.nav.overlay(), Overlay::Menu { tab, .. } if tab == index);
        if already_open || !app.ctx.site.routes().tab_has_submenu(index) {
            return;
        }
        let anchor = app.nav.item_areas.get(index).copied().unwrap_or_default();
        app.nav.open_menu(index, anchor);
    }

    fn handle_menu_key(app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let Overlay::Menu { tab, .. } = app.nav.overlay() else {
            return effects;
        };
        let len = app.ctx.site.routes().submenu_of(tab).count();
        match key.code {
            KeyCode::Up => app.nav.move_menu_cursor(false, len),
            KeyCode::Down => app.nav.move_menu_cursor(true, len),
            KeyCode::Enter => {
                let cursor = app.nav.menu_cursor();
                if let Some(path) = app.nav.choose_menu_entry(cursor, app.ctx.site.routes()) {
                    effects.push(Effect::Navigate(path));
                }
            }
            KeyCode::Esc => app.nav.dismiss_overlay(),
            _ => {}
        }
        effects
    }

    fn handle_menu_mouse(app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let Overlay::Menu { tab, anchor } = app.nav.overlay() else {
            return effects;
        };
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(row) = hit_index(&app.nav.menu_item_areas, mouse.column, mouse.row) {
                    if let Some(path) = app.nav.choose_menu_entry(row, app.ctx.site.routes()) {
                        effects.push(Effect::Navigate(path));
                    }
                } else if anchor.contains(position) {
                    // Click on the trigger tab itself: ordinary tab activation.
                    effects.extend(Self::activate_item(app, tab));
                } else if !app.nav.menu_area.contains(position) {
                    // Outside click: close, swallow the click.
                    app.nav.dismiss_overlay();
                }
            }
            MouseEventKind::Moved => {
                if let Some(row) = hit_index(&app.nav.menu_item_areas, mouse.column, mouse.row) {
                    let len = app.nav.menu_item_areas.len();
                    app.nav.set_menu_cursor(row, len);
                } else if !app.nav.menu_area.contains(position) && !anchor.contains(position) {
                    app.nav.dismiss_overlay();
                }
            }
            _ => {}
        }
        effects
    }

    /// Renders the dropdown. Called by the main view after the page so the
    /// menu paints on top of the content.
    pub fn render_menu(&mut self, frame: &mut Frame, app: &mut App) {
        let Overlay::Menu { tab, anchor } = app.nav.overlay() else {
            return;
        };

        let entries: Vec<(usize, String)> = app
            .ctx
            .site
            .routes()
            .submenu_of(tab)
            .filter_map(|descriptor| descriptor.submenu.map(|position| (position, descriptor.name.clone())))
            .collect();
        if entries.is_empty() {
            return;
        }

        let theme = &app.ctx.theme;
        let inner_width = entries.iter().map(|(_, name)| name.width()).max().unwrap_or(0) as u16 + 2;
        let area = anchored_below(anchor, inner_width + 2, entries.len() as u16 + 2, frame.area());

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(true))
            .style(theme.menu_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let selected_tab = app.nav.selected();
        let submenu_selection = app.nav.submenu_selection();
        let cursor = app.nav.menu_cursor();
        let mut item_areas = Vec::with_capacity(entries.len());
        for (row, (position, name)) in entries.iter().enumerate() {
            let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            if row_area.bottom() > inner.bottom() {
                break;
            }
            let selected = selected_tab == TabSelection::Tab(tab) && submenu_selection == Some(*position);
            let style = theme.menu_entry_style(selected, *position == cursor);
            let label = format!(" {name:<width$}", width = inner.width.saturating_sub(1) as usize);
            frame.render_widget(Paragraph::new(Line::styled(label, style)), row_area);
            item_areas.push(row_area);
        }
        app.nav.menu_area = area;
        app.nav.menu_item_areas = item_areas;
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.nav.overlay().is_menu() {
            return Self::handle_menu_key(app, key);
        }

        let mut effects = Vec::new();
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
            }
            KeyCode::BackTab => {
                app.focus.prev();
            }
            KeyCode::Left => {
                if let Some(flag) = app.nav.cycle_focus(false) {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Right => {
                if let Some(flag) = app.nav.cycle_focus(true) {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Down => {
                if let Some(index) = app.nav.focused_item()
                    && index < app.nav.tab_count()
                {
                    Self::open_menu_for(app, index);
                }
            }
            KeyCode::Enter => {
                if let Some(index) = app.nav.focused_item() {
                    effects.extend(Self::activate_item(app, index));
                }
            }
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.nav.overlay().is_menu() {
            return Self::handle_menu_mouse(app, mouse);
        }

        let mut effects = Vec::new();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if app.nav.logo_area.contains(Position::new(mouse.column, mouse.row)) {
                    effects.extend(Self::activate_item(app, 0));
                } else if let Some(index) = hit_index(&app.nav.item_areas, mouse.column, mouse.row) {
                    if let Some(flag) = app.nav.item_focus_flags.get(index) {
                        app.focus.focus(flag);
                    }
                    effects.extend(Self::activate_item(app, index));
                }
            }
            MouseEventKind::Moved => {
                if let Some(index) = hit_index(&app.nav.item_areas, mouse.column, mouse.row)
                    && index < app.nav.tab_count()
                {
                    Self::open_menu_for(app, index);
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

        // Logo, far left; activates the home tab.
        let logo = format!("◆ {}", app.ctx.site.company().name);
        let logo_width = logo.width() as u16;
        let logo_area = Rect::new(area.x + 1, row, logo_width.min(area.width), 1);
        frame.render_widget(Paragraph::new(Line::styled(logo, theme.logo_style())), logo_area);

        // Tabs and the call-to-action button, right-aligned.
        let mut labels: Vec<String> = app.ctx.site.routes().tabs().map(|descriptor| descriptor.name.clone()).collect();
        if let Some(cta) = app.ctx.site.routes().call_to_action() {
            labels.push(format!("[ {} ]", cta.name));
        }
        let widths: Vec<u16> = labels.iter().map(|label| label.width() as u16).collect();
        let total: u16 = widths.iter().sum::<u16>() + ITEM_GAP * widths.len().saturating_sub(1) as u16;
        let mut x = area.right().saturating_sub(total + 1).max(logo_area.right() + ITEM_GAP);

        let selected = app.nav.selected();
        let tab_count = app.nav.tab_count();
        let mut item_areas = Vec::with_capacity(labels.len());
        for (index, label) in labels.iter().enumerate() {
            let width = widths[index].min(area.right().saturating_sub(x));
            let item_area = Rect::new(x, row, width, 1);
            let focused = app.nav.item_focus_flags.get(index).map(|flag| flag.get()).unwrap_or_default();
            let style = if index < tab_count {
                theme.tab_style(selected == TabSelection::Tab(index), focused)
            } else {
                theme.call_to_action_style(selected == TabSelection::CallToAction, focused)
            };
            frame.render_widget(Paragraph::new(Line::from(Span::styled(label.clone(), style))), item_area);
            item_areas.push(item_area);
            x = x.saturating_add(width + ITEM_GAP);
        }

        app.nav.last_area = area;
        app.nav.logo_area = logo_area;
        app.nav.item_areas = item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        if app.nav.overlay().is_menu() {
            app.ctx
                .theme
                .build_hint_spans(&[("↑/↓", " Entry  "), ("Enter", " Open  "), ("Esc", " Close  ")])
        } else {
            app.ctx
                .theme
                .build_hint_spans(&[("←/→", " Tabs  "), ("Enter", " Open  "), ("↓", " Menu  ")])
        }
    }
}
