//! Raw configuration validation and normalization.
//!
//! [`load`] walks a raw configuration value once, checks it against the
//! schema and expands shorthand sidebar entries. The first problem found in
//! document order is returned; no partial configuration is ever produced.

use std::collections::{BTreeMap, HashSet};

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::model::{
    DEFAULT_SIDEBAR_DEPTH, NavEntry, RepoLinkInfo, SidebarSection, SiteConfig, SiteMetadata,
};
use crate::slug::{is_external_link, is_valid_group_key, resolve_slug};

/// Deepest heading level the sidebar may extract.
const MAX_SIDEBAR_DEPTH: u64 = 2;

const TOP_LEVEL_KEYS: &[&str] = &["title", "description", "ga", "themeConfig"];

const THEME_KEYS: &[&str] = &[
    "repo",
    "docsDir",
    "docsBranch",
    "editLinks",
    "editLinkText",
    "sidebarDepth",
    "nav",
    "sidebar",
];

/// Load a site configuration from a raw value.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sitenav_config::{SidebarSection, load};
///
/// let raw = json!({
///     "title": "pywebview",
///     "description": "Build GUI for your Python program",
///     "themeConfig": {
///         "nav": [{ "text": "Guide", "link": "/guide/" }],
///         "sidebar": { "/guide/": ["installation", "usage"] }
///     }
/// });
///
/// let config = load(&raw).unwrap();
/// assert_eq!(config.nav()[0].label(), "Guide");
/// assert_eq!(
///     config.sidebar()["/guide/"][0],
///     SidebarSection::Flat { slug: "installation".to_owned() }
/// );
/// ```
///
/// # Errors
///
/// Returns the first [`ConfigError`] found while walking the value.
pub fn load(raw: &Value) -> Result<SiteConfig, ConfigError> {
    let root = as_object(raw, "configuration")?;
    log_unknown_keys(root, TOP_LEVEL_KEYS, "");

    let metadata = load_metadata(root)?;

    let theme = root
        .get("themeConfig")
        .ok_or_else(|| ConfigError::MissingField("themeConfig".to_owned()))?;
    let theme = as_object(theme, "themeConfig")?;
    log_unknown_keys(theme, THEME_KEYS, "themeConfig.");

    let repo_link = load_repo_link(theme)?;
    let sidebar_depth = load_sidebar_depth(theme)?;
    let nav = load_nav(theme)?;
    let sidebar = load_sidebar(theme)?;

    tracing::debug!(
        title = %metadata.title,
        nav_entries = nav.len(),
        sidebar_groups = sidebar.len(),
        "Loaded site configuration"
    );

    Ok(SiteConfig {
        metadata,
        repo_link,
        nav,
        sidebar,
        sidebar_depth,
    })
}

fn load_metadata(root: &Map<String, Value>) -> Result<SiteMetadata, ConfigError> {
    let title = required_str(root, "title", "title")?;
    if title.is_empty() {
        return Err(ConfigError::TypeMismatch("title".to_owned(), "non-empty string"));
    }
    let description = required_str(root, "description", "description")?;

    Ok(SiteMetadata {
        title: title.to_owned(),
        description: description.to_owned(),
        analytics_id: optional_str(root, "ga", "ga")?.map(str::to_owned),
    })
}

/// Repo settings are only meaningful with a repo, but the sibling keys are
/// type-checked either way.
fn load_repo_link(theme: &Map<String, Value>) -> Result<Option<RepoLinkInfo>, ConfigError> {
    let repo = optional_str(theme, "repo", "themeConfig.repo")?;
    let docs_dir = optional_str(theme, "docsDir", "themeConfig.docsDir")?;
    let docs_branch = optional_str(theme, "docsBranch", "themeConfig.docsBranch")?;
    let edit_links = optional_bool(theme, "editLinks", "themeConfig.editLinks")?;
    let edit_link_text = optional_str(theme, "editLinkText", "themeConfig.editLinkText")?;

    Ok(repo.map(|repo| RepoLinkInfo {
        repo: repo.to_owned(),
        docs_dir: docs_dir.unwrap_or_default().to_owned(),
        docs_branch: docs_branch
            .unwrap_or(RepoLinkInfo::DEFAULT_DOCS_BRANCH)
            .to_owned(),
        edit_links: edit_links.unwrap_or(false),
        edit_link_text: edit_link_text
            .unwrap_or(RepoLinkInfo::DEFAULT_EDIT_LINK_TEXT)
            .to_owned(),
    }))
}

fn load_sidebar_depth(theme: &Map<String, Value>) -> Result<u8, ConfigError> {
    const FIELD: &str = "themeConfig.sidebarDepth";
    const EXPECTED: &str = "integer from 0 to 2";

    let Some(value) = theme.get("sidebarDepth") else {
        return Ok(DEFAULT_SIDEBAR_DEPTH);
    };

    value
        .as_u64()
        .filter(|depth| *depth <= MAX_SIDEBAR_DEPTH)
        .and_then(|depth| u8::try_from(depth).ok())
        .ok_or_else(|| ConfigError::TypeMismatch(FIELD.to_owned(), EXPECTED))
}

fn load_nav(theme: &Map<String, Value>) -> Result<Vec<NavEntry>, ConfigError> {
    let Some(value) = theme.get("nav") else {
        return Ok(Vec::new());
    };

    as_array(value, "themeConfig.nav")?
        .iter()
        .enumerate()
        .map(|(index, entry)| load_nav_entry(index, entry))
        .collect()
}

fn load_nav_entry(index: usize, entry: &Value) -> Result<NavEntry, ConfigError> {
    let Some(entry) = entry.as_object() else {
        return Err(ConfigError::InvalidNavEntry(index));
    };
    let field = |key: &str| format!("themeConfig.nav[{index}].{key}");

    let label = required_str(entry, "text", &field("text"))?.to_owned();
    let link = optional_str(entry, "link", &field("link"))?
        .filter(|link| !link.is_empty())
        .ok_or(ConfigError::InvalidNavEntry(index))?;

    if is_external_link(link) {
        Ok(NavEntry::External {
            label,
            url: link.to_owned(),
        })
    } else {
        Ok(NavEntry::Internal {
            label,
            target: link.to_owned(),
        })
    }
}

fn load_sidebar(
    theme: &Map<String, Value>,
) -> Result<BTreeMap<String, Vec<SidebarSection>>, ConfigError> {
    let Some(value) = theme.get("sidebar") else {
        return Ok(BTreeMap::new());
    };

    let mut groups = BTreeMap::new();
    for (key, entries) in as_object(value, "themeConfig.sidebar")? {
        groups.insert(key.clone(), load_sidebar_group(key, entries)?);
    }
    Ok(groups)
}

fn load_sidebar_group(key: &str, entries: &Value) -> Result<Vec<SidebarSection>, ConfigError> {
    if !is_valid_group_key(key) {
        return Err(ConfigError::InvalidSidebarKey(key.to_owned()));
    }

    let path = format!("themeConfig.sidebar[{key:?}]");
    let sections = as_array(entries, &path)?
        .iter()
        .enumerate()
        .map(|(index, entry)| load_sidebar_section(entry, &format!("{path}[{index}]")))
        .collect::<Result<Vec<_>, _>>()?;

    check_unique_slugs(key, &sections)?;
    Ok(sections)
}

/// Expand one sidebar entry: bare strings are flat pages, objects are
/// titled sections.
fn load_sidebar_section(entry: &Value, path: &str) -> Result<SidebarSection, ConfigError> {
    match entry {
        Value::String(slug) => Ok(SidebarSection::Flat { slug: slug.clone() }),
        Value::Object(section) => {
            let field = |key: &str| format!("{path}.{key}");

            let title = required_str(section, "title", &field("title"))?;
            let collapsible = optional_bool(section, "collapsible", &field("collapsible"))?;
            let legacy = optional_bool(section, "collapsable", &field("collapsable"))?;
            let collapsible = collapsible.or(legacy).unwrap_or(true);

            let children_path = field("children");
            let Some(values) = section.get("children") else {
                return Err(ConfigError::MissingField(children_path));
            };

            let mut children = Vec::new();
            for (index, child) in as_array(values, &children_path)?.iter().enumerate() {
                let child_path = format!("{children_path}[{index}]");
                let child = child
                    .as_str()
                    .ok_or(ConfigError::TypeMismatch(child_path, "string"))?;
                children.push(child.to_owned());
            }

            Ok(SidebarSection::Section {
                title: title.to_owned(),
                collapsible,
                children,
            })
        }
        _ => Err(ConfigError::TypeMismatch(path.to_owned(), "string or object")),
    }
}

/// Reject two slugs in one group that resolve to the same page.
fn check_unique_slugs(key: &str, sections: &[SidebarSection]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for slug in sections.iter().flat_map(SidebarSection::slugs) {
        if !seen.insert(resolve_slug(key, slug)) {
            return Err(ConfigError::DuplicateSlug(key.to_owned(), slug.clone()));
        }
    }
    Ok(())
}

fn log_unknown_keys(object: &Map<String, Value>, known: &[&str], prefix: &str) {
    for key in object.keys().filter(|key| !known.contains(&key.as_str())) {
        tracing::debug!(key = %format!("{prefix}{key}"), "Ignoring unrecognized configuration key");
    }
}

fn as_object<'a>(value: &'a Value, field: &str) -> Result<&'a Map<String, Value>, ConfigError> {
    value
        .as_object()
        .ok_or_else(|| ConfigError::TypeMismatch(field.to_owned(), "object"))
}

fn as_array<'a>(value: &'a Value, field: &str) -> Result<&'a Vec<Value>, ConfigError> {
    value
        .as_array()
        .ok_or_else(|| ConfigError::TypeMismatch(field.to_owned(), "array"))
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    field: &str,
) -> Result<&'a str, ConfigError> {
    optional_str(object, key, field)?
        .ok_or_else(|| ConfigError::MissingField(field.to_owned()))
}

fn optional_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    field: &str,
) -> Result<Option<&'a str>, ConfigError> {
    object
        .get(key)
        .map(|value| {
            value
                .as_str()
                .ok_or_else(|| ConfigError::TypeMismatch(field.to_owned(), "string"))
        })
        .transpose()
}

fn optional_bool(
    object: &Map<String, Value>,
    key: &str,
    field: &str,
) -> Result<Option<bool>, ConfigError> {
    object
        .get(key)
        .map(|value| {
            value
                .as_bool()
                .ok_or_else(|| ConfigError::TypeMismatch(field.to_owned(), "boolean"))
        })
        .transpose()
}
