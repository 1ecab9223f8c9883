//! Load-time validation of the site document.
//!
//! Everything the navigation core treats as infallible is checked here,
//! before the UI starts: a malformed document is a startup error, never a
//! runtime condition.

use std::collections::HashSet;
use std::path::PathBuf;

use kiosk_types::RouteTableError;
use thiserror::Error;

use crate::models::SiteSpec;

/// Problems that make a site document unusable.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read site file `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("site document is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error("navigation is invalid: {0}")]
    Routes(#[from] RouteTableError),
    #[error("tab path `{0}` is declared more than once")]
    DuplicateTabPath(String),
    #[error("submenu path `{0}` collides with another destination")]
    DuplicateSubmenuPath(String),
    #[error("call-to-action path `{0}` collides with a tab or submenu entry")]
    CallToActionCollision(String),
    #[error("route `{name}` (`{path}`) has no page content")]
    MissingPage { name: String, path: String },
    #[error("page `{0}` is not reachable from any route")]
    OrphanPage(String),
}

/// Cross-checks the document before a route table is built from it.
///
/// A submenu entry may share its owner tab's path (the submenu overview);
/// every other path collision is an authoring mistake.
pub(crate) fn validate(spec: &SiteSpec) -> Result<(), SiteError> {
    let mut tab_paths: HashSet<&str> = HashSet::new();
    for tab in &spec.nav.tabs {
        if !tab_paths.insert(tab.path.as_str()) {
            return Err(SiteError::DuplicateTabPath(tab.path.clone()));
        }
    }

    let mut submenu_paths: HashSet<&str> = HashSet::new();
    for tab in &spec.nav.tabs {
        for entry in &tab.submenu {
            if !submenu_paths.insert(entry.path.as_str()) {
                return Err(SiteError::DuplicateSubmenuPath(entry.path.clone()));
            }
            if entry.path != tab.path && tab_paths.contains(entry.path.as_str()) {
                return Err(SiteError::DuplicateSubmenuPath(entry.path.clone()));
            }
        }
    }

    let cta = &spec.nav.call_to_action;
    if tab_paths.contains(cta.path.as_str()) || submenu_paths.contains(cta.path.as_str()) {
        return Err(SiteError::CallToActionCollision(cta.path.clone()));
    }

    let mut reachable: HashSet<&str> = HashSet::new();
    reachable.extend(tab_paths);
    reachable.extend(submenu_paths);
    reachable.insert(cta.path.as_str());

    for tab in &spec.nav.tabs {
        require_page(spec, &tab.name, &tab.path)?;
        for entry in &tab.submenu {
            require_page(spec, &entry.name, &entry.path)?;
        }
    }
    require_page(spec, &cta.name, &cta.path)?;

    for path in spec.pages.keys() {
        if !reachable.contains(path.as_str()) {
            return Err(SiteError::OrphanPage(path.clone()));
        }
    }

    Ok(())
}

fn require_page(spec: &SiteSpec, name: &str, path: &str) -> Result<(), SiteError> {
    if spec.pages.contains_key(path) {
        Ok(())
    } else {
        Err(SiteError::MissingPage {
            name: name.to_string(),
            path: path.to_string(),
        })
    }
}
