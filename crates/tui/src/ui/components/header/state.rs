//! Navigation state for the header.
//!
//! `NavState` is the single source of truth for what the header highlights:
//! the selected tab, the selected submenu entry, and whether a transient
//! overlay (dropdown menu or drawer) is showing. The presentation layer reads
//! it freely but mutates it only through the handlers here, so every
//! multi-field transition lands in one update and a frame never observes a
//! half-applied state.

use kiosk_types::{LayoutMode, RouteTable, TabSelection};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// The transient surface currently open, if any.
///
/// An open overlay always carries the context it needs: the dropdown knows
/// which tab triggered it and where that trigger was rendered, the drawer
/// needs neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    /// Dropdown submenu for the tab at `tab`, anchored to its strip area.
    Menu { tab: usize, anchor: Rect },
    /// Slide-out drawer (narrow layout only).
    Drawer,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::Closed)
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, Overlay::Menu { .. })
    }

    pub fn is_drawer(&self) -> bool {
        matches!(self, Overlay::Drawer)
    }
}

/// Header navigation state.
///
/// Created once per session and reconciled against the router's current path
/// on every location change; never persisted. The focus flags and area
/// rectangles are presentation bookkeeping: one flag per tab plus a final one
/// for the call-to-action button, shared by the tab strip and the drawer
/// (only one of the two is ever visible).
#[derive(Debug, Clone)]
pub struct NavState {
    selected: TabSelection,
    submenu_selection: Option<usize>,
    overlay: Overlay,
    menu_cursor: usize,
    tab_count: usize,

    /// Focus flag for the whole header in the focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags for the tabs, with the call-to-action button last.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Last rendered header area; used for mouse hit testing.
    pub last_area: Rect,
    /// Last rendered logo area (activates the home tab).
    pub logo_area: Rect,
    /// Hit areas for the current presentation's items, indexed like the flags.
    pub item_areas: Vec<Rect>,
    /// Hamburger toggle area (narrow layout).
    pub toggle_area: Rect,
    /// Last rendered dropdown area and its per-entry rows.
    pub menu_area: Rect,
    pub menu_item_areas: Vec<Rect>,
    /// Last rendered drawer panel area.
    pub drawer_area: Rect,
}

impl NavState {
    pub fn new(routes: &RouteTable) -> Self {
        let tab_count = routes.tab_count();
        let item_focus_flags: Vec<FocusFlag> = (0..=tab_count)
            .map(|i| FocusFlag::named(&format!("header.item.{i}")))
            .collect();
        if let Some(first) = item_focus_flags.first() {
            first.set(true);
        }
        Self {
            selected: TabSelection::default(),
            submenu_selection: None,
            overlay: Overlay::Closed,
            menu_cursor: 0,
            tab_count,
            container_focus: FocusFlag::named("header"),
            item_focus_flags,
            last_area: Rect::default(),
            logo_area: Rect::default(),
            item_areas: Vec::new(),
            toggle_area: Rect::default(),
            menu_area: Rect::default(),
            menu_item_areas: Vec::new(),
            drawer_area: Rect::default(),
        }
    }

    pub fn selected(&self) -> TabSelection {
        self.selected
    }

    pub fn submenu_selection(&self) -> Option<usize> {
        self.submenu_selection
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    /// Derives the highlight state from the current path.
    ///
    /// Scans the table in order and adopts the first descriptor whose path
    /// matches: its target becomes the selected tab and its submenu position
    /// (or absence) becomes the submenu selection, so a stale submenu
    /// highlight cannot survive under an unrelated tab. Unknown paths leave
    /// the state untouched. Returns whether anything changed, and changes
    /// nothing when the state already matches, so back-to-back calls with
    /// the same path are free.
    pub fn reconcile(&mut self, path: &str, routes: &RouteTable) -> bool {
        let Some(descriptor) = routes.find_by_path(path) else {
            return false;
        };
        if self.selected == descriptor.target && self.submenu_selection == descriptor.submenu {
            return false;
        }
        self.selected = descriptor.target;
        self.submenu_selection = descriptor.submenu;
        true
    }

    /// Optimistic highlight on tab activation; the caller requests the
    /// actual navigation separately.
    pub fn activate_tab(&mut self, selection: TabSelection) {
        self.selected = selection;
    }

    /// Highlights the call-to-action and returns its path for navigation.
    pub fn activate_call_to_action(&mut self, routes: &RouteTable) -> Option<String> {
        let descriptor = routes.call_to_action()?;
        self.selected = TabSelection::CallToAction;
        self.overlay = Overlay::Closed;
        Some(descriptor.path.clone())
    }

    /// Opens the dropdown for `tab`, anchored at its rendered area.
    ///
    /// Does not change the selected tab. The cursor starts on the entry that
    /// is currently selected, when the open submenu owns the selection.
    pub fn open_menu(&mut self, tab: usize, anchor: Rect) {
        self.menu_cursor = match (self.selected, self.submenu_selection) {
            (TabSelection::Tab(owner), Some(position)) if owner == tab => position,
            _ => 0,
        };
        self.overlay = Overlay::Menu { tab, anchor };
    }

    /// Moves the dropdown cursor, wrapping at either end.
    pub fn move_menu_cursor(&mut self, down: bool, len: usize) {
        if len == 0 {
            return;
        }
        let step = if down { 1 } else { len - 1 };
        self.menu_cursor = (self.menu_cursor + step) % len;
    }

    /// Puts the dropdown cursor on a specific entry (mouse hover).
    pub fn set_menu_cursor(&mut self, position: usize, len: usize) {
        if position < len {
            self.menu_cursor = position;
        }
    }

    /// Commits the submenu entry at `position` of the open dropdown.
    ///
    /// Applies the whole transition at once: submenu selection, owning tab,
    /// and overlay dismissal. Returns the entry's path for the navigation
    /// sink, or `None` when no dropdown is open or the position is unknown.
    pub fn choose_menu_entry(&mut self, position: usize, routes: &RouteTable) -> Option<String> {
        let Overlay::Menu { tab, .. } = self.overlay else {
            return None;
        };
        let descriptor = routes.submenu_entry(tab, position)?;
        let path = descriptor.path.clone();
        self.selected = TabSelection::Tab(tab);
        self.submenu_selection = Some(position);
        self.overlay = Overlay::Closed;
        Some(path)
    }

    /// Closes whatever overlay is open without touching the selections.
    pub fn dismiss_overlay(&mut self) {
        self.overlay = Overlay::Closed;
    }

    /// Flips the drawer open or closed.
    pub fn toggle_drawer(&mut self) {
        self.overlay = if self.overlay.is_drawer() {
            Overlay::Closed
        } else {
            Overlay::Drawer
        };
    }

    /// Commits the drawer item at `position` (tabs first, call-to-action
    /// last) and closes the drawer. Returns the item's path.
    pub fn choose_drawer_item(&mut self, position: usize, routes: &RouteTable) -> Option<String> {
        if position == self.tab_count {
            return self.activate_call_to_action(routes);
        }
        let descriptor = routes.tab(position)?;
        let path = descriptor.path.clone();
        self.selected = TabSelection::Tab(position);
        self.overlay = Overlay::Closed;
        Some(path)
    }

    /// Reacts to the wide/narrow presentation flip.
    ///
    /// Selections survive the flip; an overlay belonging to the departed
    /// presentation is dismissed.
    pub fn on_layout_change(&mut self, mode: LayoutMode) {
        match (mode, self.overlay) {
            (LayoutMode::Narrow, Overlay::Menu { .. }) | (LayoutMode::Wide, Overlay::Drawer) => {
                self.overlay = Overlay::Closed;
            }
            _ => {}
        }
    }

    /// Position of the focused strip/drawer item, if any.
    pub fn focused_item(&self) -> Option<usize> {
        self.item_focus_flags.iter().position(|flag| flag.get())
    }

    /// Returns the flag of the neighbouring item for focus cycling.
    pub fn cycle_focus(&mut self, forward: bool) -> Option<FocusFlag> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let current = self.focused_item()?;
        let step = if forward { 1 } else { len - 1 };
        self.item_focus_flags.get((current + step) % len).cloned()
    }
}

impl HasFocus for NavState {
    /// Each strip/drawer item is a leaf under the header container.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.item_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_types::RouteDescriptor;

    fn routes() -> RouteTable {
        RouteTable::new(
            vec![
                RouteDescriptor::submenu_entry("Services", "/services", 1, 0),
                RouteDescriptor::submenu_entry("Custom Software", "/custom-software", 1, 1),
                RouteDescriptor::submenu_entry("Mobile Apps", "/mobile-apps", 1, 2),
                RouteDescriptor::submenu_entry("Websites", "/websites", 1, 3),
                RouteDescriptor::tab("Home", "/", 0),
                RouteDescriptor::tab("Services", "/services", 1),
                RouteDescriptor::tab("The Revolution", "/revolution", 2),
                RouteDescriptor::tab("About Us", "/about", 3),
                RouteDescriptor::tab("Contact Us", "/contact", 4),
                RouteDescriptor::call_to_action("Free Estimate", "/estimate"),
            ],
            5,
        )
        .expect("test table is valid")
    }

    #[test]
    fn reconcile_matches_every_tab_path() {
        let table = routes();
        let mut nav = NavState::new(&table);
        for (expected, path) in [(0, "/"), (1, "/services"), (2, "/revolution"), (3, "/about"), (4, "/contact")] {
            nav.reconcile(path, &table);
            assert_eq!(nav.selected(), TabSelection::Tab(expected), "path {path}");
        }
    }

    #[test]
    fn reconcile_ignores_unknown_paths() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.reconcile("/about", &table);
        assert!(!nav.reconcile("/no-such-page", &table));
        assert_eq!(nav.selected(), TabSelection::Tab(3));
    }

    #[test]
    fn reconcile_is_idempotent() {
        let table = routes();
        let mut nav = NavState::new(&table);
        assert!(nav.reconcile("/mobile-apps", &table));
        let snapshot = (nav.selected(), nav.submenu_selection());
        assert!(!nav.reconcile("/mobile-apps", &table));
        assert_eq!((nav.selected(), nav.submenu_selection()), snapshot);
    }

    #[test]
    fn estimate_path_selects_the_call_to_action() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.reconcile("/estimate", &table);
        assert_eq!(nav.selected(), TabSelection::CallToAction);
        assert_eq!(nav.submenu_selection(), None);
    }

    #[test]
    fn services_path_resolves_to_the_submenu_entry() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.reconcile("/services", &table);
        assert_eq!(nav.selected(), TabSelection::Tab(1));
        assert_eq!(nav.submenu_selection(), Some(0));
    }

    #[test]
    fn reconcile_clears_a_stale_submenu_selection() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.reconcile("/custom-software", &table);
        assert_eq!(nav.submenu_selection(), Some(1));
        nav.reconcile("/about", &table);
        assert_eq!(nav.selected(), TabSelection::Tab(3));
        assert_eq!(nav.submenu_selection(), None);
    }

    #[test]
    fn choosing_a_menu_entry_is_one_transition() {
        let table = routes();
        let mut nav = NavState::new(&table);
        let anchor = Rect::new(40, 1, 10, 1);
        nav.open_menu(1, anchor);
        assert_eq!(nav.overlay(), Overlay::Menu { tab: 1, anchor });

        let path = nav.choose_menu_entry(2, &table);
        assert_eq!(path.as_deref(), Some("/mobile-apps"));
        assert_eq!(nav.selected(), TabSelection::Tab(1));
        assert_eq!(nav.submenu_selection(), Some(2));
        assert_eq!(nav.overlay(), Overlay::Closed);
    }

    #[test]
    fn opening_the_menu_does_not_change_the_selection() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.reconcile("/about", &table);
        nav.open_menu(1, Rect::default());
        assert_eq!(nav.selected(), TabSelection::Tab(3));
    }

    #[test]
    fn menu_cursor_starts_on_the_selected_entry() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.reconcile("/websites", &table);
        nav.open_menu(1, Rect::default());
        assert_eq!(nav.menu_cursor(), 3);

        nav.dismiss_overlay();
        nav.reconcile("/about", &table);
        nav.open_menu(1, Rect::default());
        assert_eq!(nav.menu_cursor(), 0);
    }

    #[test]
    fn menu_cursor_wraps_both_ways() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.open_menu(1, Rect::default());
        nav.move_menu_cursor(false, 4);
        assert_eq!(nav.menu_cursor(), 3);
        nav.move_menu_cursor(true, 4);
        assert_eq!(nav.menu_cursor(), 0);
    }

    #[test]
    fn dismissal_leaves_selections_alone() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.reconcile("/custom-software", &table);
        nav.open_menu(1, Rect::default());
        nav.dismiss_overlay();
        assert_eq!(nav.overlay(), Overlay::Closed);
        assert_eq!(nav.selected(), TabSelection::Tab(1));
        assert_eq!(nav.submenu_selection(), Some(1));
    }

    #[test]
    fn toggling_the_drawer_twice_restores_the_overlay() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.toggle_drawer();
        assert!(nav.overlay().is_drawer());
        nav.toggle_drawer();
        assert_eq!(nav.overlay(), Overlay::Closed);
    }

    #[test]
    fn drawer_items_cover_tabs_and_the_call_to_action() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.toggle_drawer();
        let path = nav.choose_drawer_item(2, &table);
        assert_eq!(path.as_deref(), Some("/revolution"));
        assert_eq!(nav.selected(), TabSelection::Tab(2));
        assert_eq!(nav.overlay(), Overlay::Closed);

        nav.toggle_drawer();
        let path = nav.choose_drawer_item(5, &table);
        assert_eq!(path.as_deref(), Some("/estimate"));
        assert_eq!(nav.selected(), TabSelection::CallToAction);
        assert_eq!(nav.overlay(), Overlay::Closed);
    }

    #[test]
    fn layout_flip_preserves_selection_and_drops_foreign_overlays() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.reconcile("/contact", &table);

        nav.open_menu(1, Rect::default());
        nav.on_layout_change(LayoutMode::Narrow);
        assert_eq!(nav.overlay(), Overlay::Closed);
        assert_eq!(nav.selected(), TabSelection::Tab(4));

        nav.toggle_drawer();
        nav.on_layout_change(LayoutMode::Wide);
        assert_eq!(nav.overlay(), Overlay::Closed);
        assert_eq!(nav.selected(), TabSelection::Tab(4));

        nav.toggle_drawer();
        nav.on_layout_change(LayoutMode::Narrow);
        assert!(nav.overlay().is_drawer(), "drawer survives while narrow");
    }

    #[test]
    fn optimistic_activation_makes_reconciliation_a_no_op() {
        let table = routes();
        let mut nav = NavState::new(&table);
        nav.activate_tab(TabSelection::Tab(2));
        assert!(!nav.reconcile("/revolution", &table));
        assert_eq!(nav.selected(), TabSelection::Tab(2));
    }

    #[test]
    fn focus_cycles_across_tabs_and_the_button() {
        let table = routes();
        let mut nav = NavState::new(&table);
        assert_eq!(nav.focused_item(), Some(0));
        let flag = nav.cycle_focus(false).expect("wraps to the last item");
        assert_eq!(flag.widget_id(), nav.item_focus_flags[5].widget_id());
    }
}
