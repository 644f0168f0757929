//! Validated navigation model.
//!
//! Every type here is built once by [`load`](crate::load) and read-only
//! afterwards. The serde representation is the output contract handed to
//! renderers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::slug::{normalize_route, resolve_slug};

/// Default heading depth extracted into the sidebar.
pub const DEFAULT_SIDEBAR_DEPTH: u8 = 1;

/// Site title, description and analytics identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    /// Site title (never empty).
    pub title: String,
    /// Site description.
    pub description: String,
    /// Opaque analytics identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
}

/// Source repository settings used for edit links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoLinkInfo {
    /// Repository identifier, e.g. `owner/name`.
    pub repo: String,
    /// Directory holding the documentation sources.
    pub docs_dir: String,
    /// Branch holding the documentation sources.
    pub docs_branch: String,
    /// Whether edit links are shown.
    pub edit_links: bool,
    /// Label of the edit link.
    pub edit_link_text: String,
}

impl RepoLinkInfo {
    pub(crate) const DEFAULT_DOCS_BRANCH: &'static str = "master";
    pub(crate) const DEFAULT_EDIT_LINK_TEXT: &'static str = "Edit this page";
}

/// Top navigation bar item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavEntry {
    /// Link to a page of this site.
    Internal {
        /// Display label.
        label: String,
        /// Site-relative target.
        target: String,
    },
    /// Link to another site.
    External {
        /// Display label.
        label: String,
        /// Absolute URL.
        url: String,
    },
}

impl NavEntry {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Internal { label, .. } | Self::External { label, .. } => label,
        }
    }

    /// Link destination, whichever variant this is.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Internal { target, .. } => target,
            Self::External { url, .. } => url,
        }
    }

    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }
}

/// One entry of a sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SidebarSection {
    /// A single page without a heading (shorthand form).
    Flat {
        /// Page slug as written in the configuration.
        slug: String,
    },
    /// A titled, optionally collapsible list of pages.
    Section {
        /// Section heading.
        title: String,
        /// Whether the renderer may collapse this section.
        collapsible: bool,
        /// Page slugs in display order.
        children: Vec<String>,
    },
}

impl SidebarSection {
    /// Section heading, `None` for flat entries.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Flat { .. } => None,
            Self::Section { title, .. } => Some(title),
        }
    }

    /// Page slugs contributed by this entry, in display order.
    #[must_use]
    pub fn slugs(&self) -> &[String] {
        match self {
            Self::Flat { slug } => std::slice::from_ref(slug),
            Self::Section { children, .. } => children,
        }
    }
}

/// Sidebar group selected for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarMatch<'a> {
    /// Group key, e.g. `/guide/`.
    pub key: &'a str,
    /// Sections of the group in display order.
    pub sections: &'a [SidebarSection],
}

/// Previous and next pages around a route, in sidebar order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageNeighbors {
    /// Resolved path of the previous page.
    pub prev: Option<String>,
    /// Resolved path of the next page.
    pub next: Option<String>,
}

/// Validated site navigation configuration.
///
/// Built by [`load`](crate::load); immutable and safe to share between
/// threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub(crate) metadata: SiteMetadata,
    pub(crate) repo_link: Option<RepoLinkInfo>,
    pub(crate) nav: Vec<NavEntry>,
    pub(crate) sidebar: BTreeMap<String, Vec<SidebarSection>>,
    pub(crate) sidebar_depth: u8,
}

impl SiteConfig {
    #[must_use]
    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    /// Repository settings, present when the configuration names a repo.
    #[must_use]
    pub fn repo_link(&self) -> Option<&RepoLinkInfo> {
        self.repo_link.as_ref()
    }

    /// Nav bar entries in display order.
    #[must_use]
    pub fn nav(&self) -> &[NavEntry] {
        &self.nav
    }

    /// All sidebar groups keyed by path prefix.
    #[must_use]
    pub fn sidebar(&self) -> &BTreeMap<String, Vec<SidebarSection>> {
        &self.sidebar
    }

    #[must_use]
    pub fn sidebar_depth(&self) -> u8 {
        self.sidebar_depth
    }

    /// Find the sidebar group for a route.
    ///
    /// The group whose key is the longest prefix of the route wins, so
    /// `/guide/advanced/` shadows `/guide/` for pages below it. A directory
    /// route may omit its trailing slash: `/guide` selects `/guide/`.
    #[must_use]
    pub fn sidebar_for(&self, route: &str) -> Option<SidebarMatch<'_>> {
        let route = normalize_route(route);
        self.sidebar
            .iter()
            .filter(|(key, _)| {
                route.starts_with(key.as_str()) || key.strip_suffix('/') == Some(route.as_str())
            })
            .max_by_key(|(key, _)| key.len())
            .map(|(key, sections)| SidebarMatch { key, sections })
    }

    /// Resolved page paths of a sidebar group in display order.
    ///
    /// Returns an empty list for unknown groups.
    #[must_use]
    pub fn pages(&self, group_key: &str) -> Vec<String> {
        self.sidebar
            .get(group_key)
            .map(|sections| {
                sections
                    .iter()
                    .flat_map(SidebarSection::slugs)
                    .map(|slug| resolve_slug(group_key, slug))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Previous and next pages around `route` in its sidebar group.
    ///
    /// Returns empty neighbors when the route has no group or is not listed
    /// in it.
    #[must_use]
    pub fn neighbors(&self, route: &str) -> PageNeighbors {
        let Some(group) = self.sidebar_for(route) else {
            return PageNeighbors::default();
        };

        let route = normalize_route(route);
        let pages = self.pages(group.key);
        let Some(pos) = pages
            .iter()
            .position(|page| *page == route || page.strip_suffix('/') == Some(route.as_str()))
        else {
            return PageNeighbors::default();
        };

        PageNeighbors {
            prev: pos.checked_sub(1).map(|i| pages[i].clone()),
            next: pages.get(pos + 1).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::SiteConfig: Send, Sync);

    use pretty_assertions::assert_eq;

    use super::*;

    fn flat(slug: &str) -> SidebarSection {
        SidebarSection::Flat {
            slug: slug.to_owned(),
        }
    }

    fn section(title: &str, children: &[&str]) -> SidebarSection {
        SidebarSection::Section {
            title: title.to_owned(),
            collapsible: false,
            children: children.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    fn create_config() -> SiteConfig {
        let mut sidebar = BTreeMap::new();
        sidebar.insert(
            "/guide/".to_owned(),
            vec![
                section("Basics", &["/guide/installation", "/guide/usage"]),
                section("Development", &["/guide/api", "/guide/debugging"]),
            ],
        );
        sidebar.insert(
            "/guide/advanced/".to_owned(),
            vec![flat("threading"), flat("freezing")],
        );
        sidebar.insert("/examples/".to_owned(), vec![flat("cef"), flat("debug")]);

        SiteConfig {
            metadata: SiteMetadata {
                title: "pywebview".to_owned(),
                description: "Docs".to_owned(),
                analytics_id: None,
            },
            repo_link: None,
            nav: vec![
                NavEntry::Internal {
                    label: "Guide".to_owned(),
                    target: "/guide/".to_owned(),
                },
                NavEntry::External {
                    label: "Changelog".to_owned(),
                    url: "https://example.com/CHANGELOG.md".to_owned(),
                },
            ],
            sidebar,
            sidebar_depth: DEFAULT_SIDEBAR_DEPTH,
        }
    }

    #[test]
    fn test_nav_entry_accessors() {
        let config = create_config();
        let nav = config.nav();

        assert_eq!(nav[0].label(), "Guide");
        assert_eq!(nav[0].href(), "/guide/");
        assert!(!nav[0].is_external());
        assert_eq!(nav[1].href(), "https://example.com/CHANGELOG.md");
        assert!(nav[1].is_external());
    }

    #[test]
    fn test_section_slugs_and_title() {
        let entry = flat("cef");
        assert_eq!(entry.slugs(), ["cef".to_owned()]);
        assert!(entry.title().is_none());

        let entry = section("Basics", &["a", "b"]);
        assert_eq!(entry.slugs(), ["a".to_owned(), "b".to_owned()]);
        assert_eq!(entry.title(), Some("Basics"));
    }

    #[test]
    fn test_sidebar_for_picks_longest_prefix() {
        let config = create_config();

        let group = config.sidebar_for("/guide/advanced/threading").unwrap();
        assert_eq!(group.key, "/guide/advanced/");

        let group = config.sidebar_for("/guide/usage.html").unwrap();
        assert_eq!(group.key, "/guide/");
        assert_eq!(group.sections.len(), 2);
    }

    #[test]
    fn test_sidebar_for_directory_without_trailing_slash() {
        let config = create_config();

        assert_eq!(config.sidebar_for("/guide").unwrap().key, "/guide/");
        assert_eq!(
            config.sidebar_for("/guide/advanced").unwrap().key,
            "/guide/advanced/"
        );
        assert!(config.sidebar_for("/guides").is_none());
    }

    #[test]
    fn test_sidebar_for_unknown_route() {
        let config = create_config();
        assert!(config.sidebar_for("/blog/").is_none());
    }

    #[test]
    fn test_pages_resolves_in_display_order() {
        let config = create_config();
        assert_eq!(
            config.pages("/guide/"),
            vec![
                "/guide/installation",
                "/guide/usage",
                "/guide/api",
                "/guide/debugging"
            ]
        );
        assert_eq!(
            config.pages("/examples/"),
            vec!["/examples/cef", "/examples/debug"]
        );
        assert!(config.pages("/missing/").is_empty());
    }

    #[test]
    fn test_neighbors_cross_section_boundaries() {
        let config = create_config();

        let neighbors = config.neighbors("/guide/usage");
        assert_eq!(neighbors.prev.as_deref(), Some("/guide/installation"));
        assert_eq!(neighbors.next.as_deref(), Some("/guide/api"));
    }

    #[test]
    fn test_neighbors_at_group_edges() {
        let config = create_config();

        let first = config.neighbors("/examples/cef");
        assert_eq!(first.prev, None);
        assert_eq!(first.next.as_deref(), Some("/examples/debug"));

        let last = config.neighbors("/examples/debug.html");
        assert_eq!(last.prev.as_deref(), Some("/examples/cef"));
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_neighbors_for_index_route() {
        let mut config = create_config();
        config
            .sidebar
            .insert("/api/".to_owned(), vec![flat(""), flat("usage")]);

        let expected = PageNeighbors {
            prev: None,
            next: Some("/api/usage".to_owned()),
        };
        for route in ["/api/", "/api", "/api/index.html", "/api/README.md"] {
            assert_eq!(config.neighbors(route), expected, "route {route}");
        }

        let last = config.neighbors("/api/usage.html");
        assert_eq!(last.prev.as_deref(), Some("/api/"));
    }

    #[test]
    fn test_neighbors_for_unlisted_route() {
        let config = create_config();
        let none = PageNeighbors::default();
        assert_eq!(config.neighbors("/guide/unknown"), none);
        assert_eq!(config.neighbors("/blog/post"), none);
    }

    #[test]
    fn test_serialize_output_contract() {
        let config = create_config();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["metadata"]["title"], "pywebview");
        assert!(json["metadata"].get("analyticsId").is_none());
        assert!(json["repoLink"].is_null());
        assert_eq!(json["nav"][0]["kind"], "internal");
        assert_eq!(json["nav"][1]["kind"], "external");
        assert_eq!(json["nav"][1]["url"], "https://example.com/CHANGELOG.md");
        assert_eq!(json["sidebar"]["/examples/"][0]["kind"], "flat");
        assert_eq!(json["sidebar"]["/examples/"][0]["slug"], "cef");
        assert_eq!(json["sidebar"]["/guide/"][0]["kind"], "section");
        assert_eq!(json["sidebar"]["/guide/"][0]["collapsible"], false);
        assert_eq!(json["sidebarDepth"], 1);
    }
}
