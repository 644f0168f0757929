//! Loads a complete real-world documentation site configuration.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use sitenav_config::source::load_file;
use sitenav_config::{NavEntry, SidebarSection, SiteConfig};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("pywebview.yaml")
}

fn load_fixture() -> SiteConfig {
    load_file(&fixture()).unwrap()
}

#[test]
fn test_metadata_and_repo_link() {
    let config = load_fixture();

    assert_eq!(config.metadata().title, "pywebview");
    assert_eq!(
        config.metadata().analytics_id.as_deref(),
        Some("UA-12494025-18")
    );

    let repo = config.repo_link().unwrap();
    assert_eq!(repo.repo, "r0x0r/pywebview");
    assert_eq!(repo.docs_dir, "docs");
    assert_eq!(repo.docs_branch, "docs");
    assert!(repo.edit_links);
    assert_eq!(repo.edit_link_text, "Help us improve this page!");
}

#[test]
fn test_nav_order_and_kinds() {
    let config = load_fixture();

    let labels: Vec<_> = config.nav().iter().map(NavEntry::label).collect();
    assert_eq!(
        labels,
        vec!["Guide", "Examples", "Contributing", "Blog", "Changelog"]
    );
    assert_eq!(
        config.nav()[4],
        NavEntry::External {
            label: "Changelog".to_owned(),
            url: "https://github.com/r0x0r/pywebview/blob/master/CHANGELOG.md".to_owned(),
        }
    );
    assert!(config.nav()[..4].iter().all(|entry| !entry.is_external()));
}

#[test]
fn test_guide_sections() {
    let config = load_fixture();
    let guide = &config.sidebar()["/guide/"];

    let titles: Vec<_> = guide.iter().filter_map(SidebarSection::title).collect();
    assert_eq!(titles, vec!["Basics", "Development"]);
    assert!(guide.iter().all(|section| matches!(
        section,
        SidebarSection::Section {
            collapsible: false,
            ..
        }
    )));
    assert_eq!(config.pages("/guide/").len(), 9);
}

#[test]
fn test_examples_are_flat_and_ordered() {
    let config = load_fixture();
    let examples = &config.sidebar()["/examples/"];

    assert_eq!(examples.len(), 27);
    assert!(examples.iter().all(|section| section.title().is_none()));
    assert_eq!(
        examples.first(),
        Some(&SidebarSection::Flat {
            slug: "cef".to_owned()
        })
    );
    assert_eq!(
        examples.last(),
        Some(&SidebarSection::Flat {
            slug: "window_title_change".to_owned()
        })
    );
}

#[test]
fn test_route_queries() {
    let config = load_fixture();

    let group = config.sidebar_for("/contributing/donating.html").unwrap();
    assert_eq!(group.key, "/contributing/");

    let neighbors = config.neighbors("/guide/usage");
    assert_eq!(neighbors.prev.as_deref(), Some("/guide/installation"));
    assert_eq!(neighbors.next.as_deref(), Some("/guide/api"));

    assert!(config.sidebar_for("/blog/").is_none());
}

#[test]
fn test_reload_is_structurally_equal() {
    assert_eq!(load_fixture(), load_fixture());
}
