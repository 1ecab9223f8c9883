//! Serde models for the site document.
//!
//! The document is authored as JSON (see `assets/site.json`) and describes
//! everything the kiosk renders: company identity, the header navigation, and
//! the page contents keyed by path. Pages keep their declared order, which is
//! why the map is an `IndexMap`.

use indexmap::IndexMap;
use serde::Deserialize;

/// Root of the site document.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSpec {
    pub company: CompanySpec,
    pub nav: NavSpec,
    pub pages: IndexMap<String, PageSpec>,
}

/// Company identity shown in the header and on the contact pages.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanySpec {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub contact: Option<ContactSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSpec {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Header navigation: top-level tabs plus the call-to-action button.
#[derive(Debug, Clone, Deserialize)]
pub struct NavSpec {
    pub tabs: Vec<TabSpec>,
    pub call_to_action: CallToActionSpec,
}

/// One top-level tab, optionally owning a dropdown submenu.
#[derive(Debug, Clone, Deserialize)]
pub struct TabSpec {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub submenu: Vec<SubmenuSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmenuSpec {
    pub name: String,
    pub path: String,
}

/// The standalone call-to-action destination.
#[derive(Debug, Clone, Deserialize)]
pub struct CallToActionSpec {
    pub name: String,
    pub path: String,
}

/// Content of one page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSpec {
    pub title: String,
    #[serde(default)]
    pub lede: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
    /// Show the company contact card under the sections.
    #[serde(default)]
    pub contact_card: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionSpec {
    #[serde(default)]
    pub heading: Option<String>,
    pub body: String,
}
