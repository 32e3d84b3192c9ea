//! The assembled site model and its renderer-facing views.

use std::collections::BTreeMap;

use serde::Serialize;
use wayfind_config::SiteConfig;
use wayfind_sidebar::{NavItem, ResolvedSidebar};
use wayfind_surface::{NavbarLayout, ValidatedFeature, ValidatedFooterGroup};

/// Immutable output of assembly.
///
/// Owns the resolved sidebars for the duration of one build; nothing is
/// shared across concurrent builds. Use [`SiteModel::view`] to obtain the
/// serializable projection handed to an external renderer.
#[derive(Debug)]
pub struct SiteModel {
    /// Global site metadata.
    pub site: SiteConfig,
    /// Resolved sidebars keyed by id.
    pub sidebars: BTreeMap<String, ResolvedSidebar>,
    /// Navbar entries partitioned into leading/trailing groups.
    pub navbar: NavbarLayout,
    /// Footer groups in declaration order.
    pub footer: Vec<ValidatedFooterGroup>,
    /// Feature cards in declaration order.
    pub features: Vec<ValidatedFeature>,
}

impl SiteModel {
    /// Serializable projection of the whole model.
    #[must_use]
    pub fn view(&self) -> SiteView<'_> {
        SiteView {
            site: &self.site,
            sidebars: self
                .sidebars
                .values()
                .map(|sidebar| (sidebar.id().to_owned(), SidebarView::from_resolved(sidebar)))
                .collect(),
            navbar: &self.navbar,
            footer: &self.footer,
            features: &self.features,
        }
    }
}

/// Serializable projection of a [`SiteModel`].
#[derive(Debug, Serialize)]
pub struct SiteView<'a> {
    /// Global site metadata.
    pub site: &'a SiteConfig,
    /// Sidebar views keyed by id.
    pub sidebars: BTreeMap<String, SidebarView>,
    /// Navbar layout.
    pub navbar: &'a NavbarLayout,
    /// Footer groups.
    pub footer: &'a [ValidatedFooterGroup],
    /// Feature cards.
    pub features: &'a [ValidatedFeature],
}

/// Serializable view of one resolved sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    /// Tree id.
    pub id: String,
    /// Nested items in declaration order.
    pub items: Vec<NavItem>,
    /// Depth-first reading order with derived navigation data.
    pub sequence: Vec<SequenceEntry>,
}

/// Reading-order entry for one document, with previous/next pointers and
/// its breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SequenceEntry {
    /// Document id.
    pub doc: String,
    /// Document title.
    pub title: String,
    /// Site path.
    pub path: String,
    /// Previous document id in reading order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Next document id in reading order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Enclosing category labels, root to node.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trail: Vec<String>,
}

impl SidebarView {
    /// Project a resolved sidebar into its renderer view.
    #[must_use]
    pub fn from_resolved(sidebar: &ResolvedSidebar) -> Self {
        let docs: Vec<_> = sidebar.docs().collect();
        let sequence = docs
            .iter()
            .enumerate()
            .map(|(i, doc)| SequenceEntry {
                doc: doc.id.clone(),
                title: doc.title.clone(),
                path: doc.path.clone(),
                prev: i.checked_sub(1).map(|p| docs[p].id.clone()),
                next: docs.get(i + 1).map(|d| d.id.clone()),
                trail: sidebar
                    .breadcrumbs(&doc.id)
                    .map(|labels| labels.into_iter().map(ToOwned::to_owned).collect())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            id: sidebar.id().to_owned(),
            items: sidebar.items(),
            sequence,
        }
    }
}
