//! # Kiosk TUI
//!
//! Terminal rendition of the company brochure site: informational pages
//! behind a header that tracks which tab is active, keeps that highlight in
//! sync with the current location, opens a dropdown submenu, and collapses
//! into a slide-out drawer on narrow terminals.
//!
//! ## Architecture
//!
//! State lives in [`app::App`]; components translate input into handler
//! calls on that state and report `Effect`s. The runtime executes effects:
//! navigation effects move the in-app router and then reconcile the header
//! against the new path, so the highlight is always re-derived from the
//! location rather than trusted to stay in step on its own.

mod app;
mod router;
mod ui;

use anyhow::Result;
use kiosk_site::SiteRegistry;
use kiosk_types::DEFAULT_NARROW_WIDTH;

/// Startup options for the TUI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Path to open at startup; defaults to the home page.
    pub start_path: Option<String>,
    /// Collapse to the drawer layout below this terminal width.
    pub narrow_width: u16,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            start_path: None,
            narrow_width: DEFAULT_NARROW_WIDTH,
        }
    }
}

/// Runs the kiosk until the user quits.
pub async fn run(site: SiteRegistry, options: RunOptions) -> Result<()> {
    ui::runtime::run_app(site, options).await
}
