//! Styling for the kiosk UI.
//!
//! One semantic palette used everywhere, in the brochure's house colors
//! (deep blue with an orange accent). Components never pick raw colors; they
//! ask the theme for a role or a ready-made style.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    /// Primary brand color: header chrome, titles, the dropdown surface.
    pub brand: Color,
    /// Secondary brand color: the call-to-action button and highlights.
    pub accent: Color,
    pub border: Color,
    pub focus: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

#[derive(Debug, Clone)]
pub struct Theme {
    roles: ThemeRoles,
}

impl Theme {
    /// The brochure palette.
    pub fn brochure() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Rgb(16, 20, 28),
                surface: Color::Rgb(24, 30, 42),
                text: Color::Rgb(222, 226, 232),
                text_muted: Color::Rgb(140, 150, 164),
                brand: Color::Rgb(11, 114, 185),
                accent: Color::Rgb(255, 186, 96),
                border: Color::Rgb(58, 68, 86),
                focus: Color::Rgb(120, 180, 240),
                selection_bg: Color::Rgb(38, 84, 124),
                selection_fg: Color::Rgb(240, 244, 248),
            },
        }
    }

    pub fn roles(&self) -> &ThemeRoles {
        &self.roles
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.roles.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.roles.text_muted)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.roles.accent).add_modifier(Modifier::BOLD)
    }

    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.roles.focus).add_modifier(Modifier::BOLD)
    }

    pub fn logo_style(&self) -> Style {
        Style::default().fg(self.roles.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles.focus } else { self.roles.border };
        Style::default().fg(color)
    }

    /// Style for one tab label in the strip.
    pub fn tab_style(&self, selected: bool, focused: bool) -> Style {
        let mut style = if selected {
            Style::default().fg(self.roles.text).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            self.muted_style()
        };
        if focused {
            style = style.fg(self.roles.focus);
        }
        style
    }

    /// Style for the call-to-action button.
    pub fn call_to_action_style(&self, selected: bool, focused: bool) -> Style {
        let mut style = Style::default()
            .fg(self.roles.background)
            .bg(self.roles.accent)
            .add_modifier(Modifier::BOLD);
        if selected {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    /// Base style of the dropdown surface.
    pub fn menu_style(&self) -> Style {
        Style::default().fg(self.roles.selection_fg).bg(self.roles.brand)
    }

    /// Style for one dropdown row.
    pub fn menu_entry_style(&self, selected: bool, under_cursor: bool) -> Style {
        let mut style = self.menu_style();
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        if under_cursor {
            style = style.bg(self.roles.selection_bg);
        }
        style
    }

    /// Base style of the drawer panel.
    pub fn drawer_style(&self) -> Style {
        Style::default().fg(self.roles.selection_fg).bg(self.roles.brand)
    }

    /// Style for one drawer row; the call-to-action row keeps its accent.
    pub fn drawer_item_style(&self, selected: bool, focused: bool, call_to_action: bool) -> Style {
        let mut style = if call_to_action {
            Style::default().fg(self.roles.background).bg(self.roles.accent)
        } else {
            self.drawer_style()
        };
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        } else if !call_to_action {
            style = style.add_modifier(Modifier::DIM);
        }
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    /// Dimmed backdrop behind an open overlay.
    pub fn scrim_style(&self) -> Style {
        Style::default().bg(self.roles.background).add_modifier(Modifier::DIM)
    }

    /// Renders `(key, label)` pairs for the hint bar.
    pub fn build_hint_spans<'a>(&self, pairs: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
        let key_style = Style::default().fg(self.roles.accent);
        let label_style = self.muted_style();
        let mut spans = Vec::with_capacity(pairs.len() * 2);
        for (key, label) in pairs {
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(*label, label_style));
        }
        spans
    }
}
