//! Site document loading for the kiosk terminal brochure.
//!
//! `SiteRegistry` is the configuration collaborator: it parses the site
//! document (the embedded default or a file passed on the command line),
//! validates it, and exposes the company identity, the page contents, and
//! the merged [`RouteTable`] the navigation core reconciles against.
//!
//! The route table's scan order is fixed here and nowhere else: submenu
//! entries first, then top-level tabs, then the call-to-action page. A path
//! that appears both as a submenu entry and as its owner tab's landing page
//! therefore resolves to the submenu entry.

mod models;
mod validation;

use std::path::Path;

use kiosk_types::{RouteDescriptor, RouteTable};

pub use models::{CallToActionSpec, CompanySpec, ContactSpec, NavSpec, PageSpec, SectionSpec, SiteSpec, SubmenuSpec, TabSpec};
pub use validation::SiteError;

const EMBEDDED_SITE: &str = include_str!("../assets/site.json");

/// A validated site document plus the route table derived from it.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    spec: SiteSpec,
    routes: RouteTable,
}

impl SiteRegistry {
    /// Loads the site document compiled into the binary.
    pub fn from_embedded() -> Result<Self, SiteError> {
        Self::from_json(EMBEDDED_SITE)
    }

    /// Loads a site document from disk; same validation as the embedded one.
    pub fn from_path(path: &Path) -> Result<Self, SiteError> {
        let text = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parses and validates a site document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SiteError> {
        let spec: SiteSpec = serde_json::from_str(text)?;
        validation::validate(&spec)?;
        let routes = build_route_table(&spec)?;
        tracing::debug!(
            routes = routes.entries().len(),
            pages = spec.pages.len(),
            company = %spec.company.name,
            "site document loaded"
        );
        Ok(Self { spec, routes })
    }

    pub fn company(&self) -> &CompanySpec {
        &self.spec.company
    }

    /// The merged route table, in reconciliation scan order.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Content for the page at `path`, if the document has one.
    pub fn page(&self, path: &str) -> Option<&PageSpec> {
        self.spec.pages.get(path)
    }

    pub fn page_count(&self) -> usize {
        self.spec.pages.len()
    }
}

fn build_route_table(spec: &SiteSpec) -> Result<RouteTable, SiteError> {
    let mut entries = Vec::new();
    for (tab_index, tab) in spec.nav.tabs.iter().enumerate() {
        for (position, entry) in tab.submenu.iter().enumerate() {
            entries.push(RouteDescriptor::submenu_entry(&entry.name, &entry.path, tab_index, position));
        }
    }
    for (tab_index, tab) in spec.nav.tabs.iter().enumerate() {
        entries.push(RouteDescriptor::tab(&tab.name, &tab.path, tab_index));
    }
    let cta = &spec.nav.call_to_action;
    entries.push(RouteDescriptor::call_to_action(&cta.name, &cta.path));

    Ok(RouteTable::new(entries, spec.nav.tabs.len())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_types::TabSelection;

    #[test]
    fn embedded_site_loads() {
        let site = SiteRegistry::from_embedded().expect("embedded site is valid");
        assert_eq!(site.routes().tab_count(), 5);
        assert!(site.page("/").is_some());
        assert_eq!(site.page_count(), 9);
    }

    #[test]
    fn submenu_entries_scan_before_tabs() {
        let site = SiteRegistry::from_embedded().expect("embedded site is valid");
        let hit = site.routes().find_by_path("/services").expect("path present");
        assert_eq!(hit.submenu, Some(0));
        assert_eq!(hit.target, TabSelection::Tab(1));
    }

    #[test]
    fn call_to_action_targets_the_sentinel() {
        let site = SiteRegistry::from_embedded().expect("embedded site is valid");
        let hit = site.routes().find_by_path("/estimate").expect("path present");
        assert_eq!(hit.target, TabSelection::CallToAction);
    }

    #[test]
    fn every_route_has_a_page() {
        let site = SiteRegistry::from_embedded().expect("embedded site is valid");
        for descriptor in site.routes().entries() {
            assert!(
                site.page(&descriptor.path).is_some(),
                "route {} has no page",
                descriptor.path
            );
        }
    }
}
