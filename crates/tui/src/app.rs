//! Application state for the kiosk TUI.
//!
//! `App` is the central state container: the validated site, the location
//! router, the header navigation state, and the page scroll position.
//! Components mutate it through the handlers on the owned state types and
//! report side effects as `Effect`s for the runtime to execute.

use kiosk_site::SiteRegistry;
use kiosk_types::{Effect, LayoutMode, Msg};
use rat_focus::{Focus, FocusBuilder};

use crate::RunOptions;
use crate::router::Router;
use crate::ui::components::header::NavState;
use crate::ui::components::page::PageState;
use crate::ui::theme::Theme;

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    /// The validated site document and its route table.
    pub site: SiteRegistry,
    /// Active color palette.
    pub theme: Theme,
    /// Global debug flag (from env).
    pub debug_enabled: bool,
}

impl SharedCtx {
    pub fn new(site: SiteRegistry) -> Self {
        let debug_enabled = std::env::var("DEBUG")
            .map(|value| !value.is_empty() && value != "0" && value.to_lowercase() != "false")
            .unwrap_or(false);
        Self {
            site,
            theme: Theme::brochure(),
            debug_enabled,
        }
    }
}

pub struct App {
    /// Shared, cross-cutting context (site, theme, config).
    pub ctx: SharedCtx,
    /// Location history; the current path lives here.
    pub router: Router,
    /// Header navigation state (selection, submenu, overlay).
    pub nav: NavState,
    /// Scroll position of the current page.
    pub page: PageState,
    /// Which header presentation is active.
    pub layout: LayoutMode,
    /// Width threshold below which the layout collapses.
    pub narrow_below: u16,
    /// Focus engine over the header items; rebuilt before each render.
    pub focus: Focus,
}

impl App {
    pub fn new(site: SiteRegistry, options: &RunOptions) -> Self {
        let ctx = SharedCtx::new(site);
        let router = Router::new(options.start_path.clone().unwrap_or_else(|| "/".to_string()));
        let mut nav = NavState::new(ctx.site.routes());
        // Initial reconciliation: derive the highlight from the start path.
        nav.reconcile(router.current(), ctx.site.routes());
        let focus = FocusBuilder::build_for(&nav);
        Self {
            ctx,
            router,
            nav,
            page: PageState::default(),
            layout: LayoutMode::default(),
            narrow_below: options.narrow_width,
            focus,
        }
    }

    /// Applies an application-level message.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {}
            Msg::Resize(width, _) => {
                let mode = LayoutMode::classify(*width, self.narrow_below);
                if mode != self.layout {
                    self.layout = mode;
                    self.nav.on_layout_change(mode);
                    tracing::debug!(?mode, width = *width, "layout mode changed");
                }
            }
        }
        Vec::new()
    }

    /// Runs after every location change: reconciles the header against the
    /// new path and forgets the previous page's scroll position.
    pub fn apply_location_change(&mut self) {
        let changed = self.nav.reconcile(self.router.current(), self.ctx.site.routes());
        if changed {
            tracing::debug!(path = self.router.current(), selected = ?self.nav.selected(), "navigation reconciled");
        }
        self.page.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_types::TabSelection;

    fn test_app(start: Option<&str>) -> App {
        let site = SiteRegistry::from_embedded().expect("embedded site is valid");
        let options = RunOptions {
            start_path: start.map(str::to_string),
            ..RunOptions::default()
        };
        App::new(site, &options)
    }

    #[test]
    fn startup_reconciles_against_the_start_path() {
        let app = test_app(Some("/about"));
        assert_eq!(app.nav.selected(), TabSelection::Tab(3));
    }

    #[test]
    fn unknown_start_path_keeps_the_default_selection() {
        let app = test_app(Some("/missing"));
        assert_eq!(app.nav.selected(), TabSelection::Tab(0));
    }

    #[test]
    fn resize_flips_the_layout_and_drops_the_menu() {
        let mut app = test_app(None);
        app.update(&Msg::Resize(160, 40));
        assert_eq!(app.layout, LayoutMode::Wide);

        app.nav.open_menu(1, ratatui::layout::Rect::default());
        app.update(&Msg::Resize(60, 40));
        assert_eq!(app.layout, LayoutMode::Narrow);
        assert!(!app.nav.overlay().is_open(), "menu does not survive the flip");
    }

    #[test]
    fn location_changes_reset_the_page_scroll() {
        let mut app = test_app(None);
        app.page.measure(40, 10);
        app.page.scroll_by(7);
        app.router.navigate("/services");
        app.apply_location_change();
        assert_eq!(app.page.scroll(), 0);
        assert_eq!(app.nav.selected(), TabSelection::Tab(1));
        assert_eq!(app.nav.submenu_selection(), Some(0));
    }
}
