//! Shared type definitions for the kiosk terminal brochure.
//!
//! This crate holds the leaf types every other crate agrees on: the route
//! table scanned during navigation reconciliation, the tab selection model,
//! the wide/narrow layout classification, and the `Msg`/`Effect` enums that
//! drive the TUI's update loop.

use thiserror::Error;

/// Which header element is highlighted as active.
///
/// The call-to-action page (the estimate request) is reachable from the
/// header but never highlights a tab; it gets its own variant instead of an
/// out-of-band tab index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSelection {
    /// A top-level tab, by position in the tab strip.
    Tab(usize),
    /// The standalone call-to-action page; no tab is visually active.
    CallToAction,
}

impl Default for TabSelection {
    fn default() -> Self {
        TabSelection::Tab(0)
    }
}

impl TabSelection {
    /// Returns the tab-strip position, or `None` for the call-to-action page.
    pub fn tab_index(self) -> Option<usize> {
        match self {
            TabSelection::Tab(index) => Some(index),
            TabSelection::CallToAction => None,
        }
    }
}

/// One navigable destination, as scanned during reconciliation.
///
/// A descriptor either names a top-level tab (`submenu == None`), one entry
/// of a tab's dropdown submenu (`submenu == Some(position)`), or the
/// call-to-action page (`target == TabSelection::CallToAction`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Display label.
    pub name: String,
    /// Canonical path, always starting with `/`.
    pub path: String,
    /// What the header highlights when this descriptor is current.
    pub target: TabSelection,
    /// Position within the owning tab's submenu, when this descriptor is a
    /// submenu entry.
    pub submenu: Option<usize>,
}

impl RouteDescriptor {
    pub fn tab(name: impl Into<String>, path: impl Into<String>, tab: usize) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            target: TabSelection::Tab(tab),
            submenu: None,
        }
    }

    pub fn submenu_entry(name: impl Into<String>, path: impl Into<String>, tab: usize, position: usize) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            target: TabSelection::Tab(tab),
            submenu: Some(position),
        }
    }

    pub fn call_to_action(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            target: TabSelection::CallToAction,
            submenu: None,
        }
    }
}

/// Structural problems detected while building a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route `{path}` targets tab {tab}, but the strip only has {tab_count} tabs")]
    TabOutOfRange { path: String, tab: usize, tab_count: usize },
    #[error("tab {tab} is claimed by more than one top-level route (`{path}`)")]
    DuplicateTab { path: String, tab: usize },
    #[error("no top-level route claims tab {tab}")]
    MissingTab { tab: usize },
    #[error("route `{path}` is a submenu entry but targets the call-to-action page")]
    SubmenuOnCallToAction { path: String },
    #[error("both `{first}` and `{second}` claim the call-to-action slot")]
    DuplicateCallToAction { first: String, second: String },
    #[error("route `{name}` has an invalid path `{path}`; paths must start with `/`")]
    BadPath { name: String, path: String },
}

/// The ordered sequence of route descriptors scanned during reconciliation.
///
/// Scan order is significant: when two descriptors share a path (a submenu
/// entry doubling as a tab's landing page), the first match wins. The
/// collaborator that builds the table owns that ordering; this type only
/// enforces structural invariants at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteDescriptor>,
    tab_count: usize,
}

impl RouteTable {
    /// Validates and wraps an ordered descriptor sequence.
    ///
    /// Every tab position must be claimed by exactly one top-level route;
    /// submenu entries may share their owner's position freely.
    pub fn new(entries: Vec<RouteDescriptor>, tab_count: usize) -> Result<Self, RouteTableError> {
        let mut call_to_action: Option<&RouteDescriptor> = None;
        let mut claimed = vec![false; tab_count];
        for descriptor in &entries {
            if !descriptor.path.starts_with('/') {
                return Err(RouteTableError::BadPath {
                    name: descriptor.name.clone(),
                    path: descriptor.path.clone(),
                });
            }
            match descriptor.target {
                TabSelection::Tab(tab) if tab >= tab_count => {
                    return Err(RouteTableError::TabOutOfRange {
                        path: descriptor.path.clone(),
                        tab,
                        tab_count,
                    });
                }
                TabSelection::Tab(tab) => {
                    if descriptor.submenu.is_none() {
                        if claimed[tab] {
                            return Err(RouteTableError::DuplicateTab {
                                path: descriptor.path.clone(),
                                tab,
                            });
                        }
                        claimed[tab] = true;
                    }
                }
                TabSelection::CallToAction => {
                    if descriptor.submenu.is_some() {
                        return Err(RouteTableError::SubmenuOnCallToAction {
                            path: descriptor.path.clone(),
                        });
                    }
                    if let Some(first) = call_to_action {
                        return Err(RouteTableError::DuplicateCallToAction {
                            first: first.path.clone(),
                            second: descriptor.path.clone(),
                        });
                    }
                    call_to_action = Some(descriptor);
                }
            }
        }
        if let Some(tab) = claimed.iter().position(|&taken| !taken) {
            return Err(RouteTableError::MissingTab { tab });
        }
        Ok(Self { entries, tab_count })
    }

    /// All descriptors in scan order.
    pub fn entries(&self) -> &[RouteDescriptor] {
        &self.entries
    }

    /// Number of top-level tabs in the strip.
    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    /// First descriptor whose path equals `path`, honoring scan order.
    pub fn find_by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.entries.iter().find(|descriptor| descriptor.path == path)
    }

    /// The top-level tab at `position` in the strip.
    pub fn tab(&self, position: usize) -> Option<&RouteDescriptor> {
        self.tabs().find(|descriptor| descriptor.target == TabSelection::Tab(position))
    }

    /// Top-level tabs in strip order.
    pub fn tabs(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.entries
            .iter()
            .filter(|descriptor| descriptor.submenu.is_none() && matches!(descriptor.target, TabSelection::Tab(_)))
    }

    /// Submenu entries owned by the tab at `tab`, in submenu order.
    pub fn submenu_of(&self, tab: usize) -> impl Iterator<Item = &RouteDescriptor> {
        self.entries
            .iter()
            .filter(move |descriptor| descriptor.target == TabSelection::Tab(tab) && descriptor.submenu.is_some())
    }

    /// The submenu entry at `position` under the tab at `tab`.
    pub fn submenu_entry(&self, tab: usize, position: usize) -> Option<&RouteDescriptor> {
        self.submenu_of(tab).find(|descriptor| descriptor.submenu == Some(position))
    }

    /// Whether the tab at `position` owns a dropdown submenu.
    pub fn tab_has_submenu(&self, position: usize) -> bool {
        self.submenu_of(position).next().is_some()
    }

    /// The call-to-action descriptor, when the table carries one.
    pub fn call_to_action(&self) -> Option<&RouteDescriptor> {
        self.entries
            .iter()
            .find(|descriptor| descriptor.target == TabSelection::CallToAction)
    }
}

/// Terminal width below which the header collapses into the drawer layout.
pub const DEFAULT_NARROW_WIDTH: u16 = 100;

/// Which of the two mutually exclusive header presentations is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Inline tab strip with a hover-triggered dropdown.
    #[default]
    Wide,
    /// Hamburger toggle with a slide-out drawer.
    Narrow,
}

impl LayoutMode {
    /// Classifies a viewport width against the narrow threshold.
    pub fn classify(width: u16, narrow_below: u16) -> Self {
        if width < narrow_below { LayoutMode::Narrow } else { LayoutMode::Wide }
    }

    pub fn is_narrow(self) -> bool {
        matches!(self, LayoutMode::Narrow)
    }
}

/// Messages that update application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic tick; used for housekeeping such as the resize fallback.
    Tick,
    /// Terminal resized to the given width and height.
    Resize(u16, u16),
}

/// Side effects reported by handlers for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Change the current location to the given path.
    Navigate(String),
    /// Step back through the location history.
    NavigateBack,
    /// Step forward through the location history.
    NavigateForward,
    /// Copy the given text to the system clipboard.
    CopyToClipboard(String),
    /// Leave the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RouteTable {
        RouteTable::new(
            vec![
                RouteDescriptor::submenu_entry("Services", "/services", 1, 0),
                RouteDescriptor::submenu_entry("Custom Software", "/custom-software", 1, 1),
                RouteDescriptor::tab("Home", "/", 0),
                RouteDescriptor::tab("Services", "/services", 1),
                RouteDescriptor::tab("Revolution", "/revolution", 2),
                RouteDescriptor::call_to_action("Free Estimate", "/estimate"),
            ],
            3,
        )
        .expect("sample table is valid")
    }

    #[test]
    fn first_match_wins_on_shared_paths() {
        let table = sample_table();
        let hit = table.find_by_path("/services").expect("path present");
        assert_eq!(hit.submenu, Some(0));
        assert_eq!(hit.target, TabSelection::Tab(1));
    }

    #[test]
    fn tabs_iterate_in_strip_order() {
        let table = sample_table();
        let names: Vec<&str> = table.tabs().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Home", "Services", "Revolution"]);
        assert!(table.tab_has_submenu(1));
        assert!(!table.tab_has_submenu(0));
    }

    #[test]
    fn submenu_lookup_by_owner_and_position() {
        let table = sample_table();
        let entry = table.submenu_entry(1, 1).expect("entry present");
        assert_eq!(entry.path, "/custom-software");
        assert!(table.submenu_entry(0, 0).is_none());
    }

    #[test]
    fn call_to_action_is_found() {
        let table = sample_table();
        assert_eq!(table.call_to_action().map(|d| d.path.as_str()), Some("/estimate"));
    }

    #[test]
    fn rejects_out_of_range_tab() {
        let err = RouteTable::new(vec![RouteDescriptor::tab("Lost", "/lost", 7)], 3).unwrap_err();
        assert!(matches!(err, RouteTableError::TabOutOfRange { tab: 7, tab_count: 3, .. }));
    }

    #[test]
    fn rejects_a_doubly_claimed_tab() {
        let err = RouteTable::new(
            vec![RouteDescriptor::tab("Home", "/", 0), RouteDescriptor::tab("Again", "/again", 0)],
            1,
        )
        .unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicateTab { tab: 0, .. }));
    }

    #[test]
    fn rejects_an_unclaimed_tab() {
        let err = RouteTable::new(vec![RouteDescriptor::tab("Home", "/", 0)], 2).unwrap_err();
        assert!(matches!(err, RouteTableError::MissingTab { tab: 1 }));
    }

    #[test]
    fn rejects_second_call_to_action() {
        let err = RouteTable::new(
            vec![
                RouteDescriptor::call_to_action("Estimate", "/estimate"),
                RouteDescriptor::call_to_action("Quote", "/quote"),
            ],
            0,
        )
        .unwrap_err();
        assert!(matches!(err, RouteTableError::DuplicateCallToAction { .. }));
    }

    #[test]
    fn rejects_relative_path() {
        let err = RouteTable::new(vec![RouteDescriptor::tab("Home", "home", 0)], 1).unwrap_err();
        assert!(matches!(err, RouteTableError::BadPath { .. }));
    }

    #[test]
    fn layout_mode_classification_boundary() {
        assert_eq!(LayoutMode::classify(99, DEFAULT_NARROW_WIDTH), LayoutMode::Narrow);
        assert_eq!(LayoutMode::classify(100, DEFAULT_NARROW_WIDTH), LayoutMode::Wide);
        assert_eq!(LayoutMode::classify(240, DEFAULT_NARROW_WIDTH), LayoutMode::Wide);
    }

    #[test]
    fn tab_selection_default_is_first_tab() {
        assert_eq!(TabSelection::default(), TabSelection::Tab(0));
        assert_eq!(TabSelection::Tab(4).tab_index(), Some(4));
        assert_eq!(TabSelection::CallToAction.tab_index(), None);
    }
}
