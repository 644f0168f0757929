//! Page slug and link helpers.
//!
//! Sidebar entries name pages either relative to their group (`cef` under
//! `/examples/`) or absolutely (`/guide/installation`). Both forms resolve to
//! a site-relative page path so that duplicates and neighbors can be compared.

/// Resolve a sidebar slug to a site-relative page path.
///
/// - Absolute slugs (starting with `/`) are kept as written.
/// - Relative slugs are joined onto the group key.
/// - A trailing `.md` is removed, and `README` / `index` pages resolve to
///   their directory.
///
/// # Example
///
/// ```
/// use sitenav_config::resolve_slug;
///
/// assert_eq!(resolve_slug("/examples/", "cef"), "/examples/cef");
/// assert_eq!(resolve_slug("/guide/", "/guide/usage.md"), "/guide/usage");
/// assert_eq!(resolve_slug("/guide/", ""), "/guide/");
/// ```
#[must_use]
pub fn resolve_slug(group_key: &str, slug: &str) -> String {
    let joined = if slug.starts_with('/') {
        slug.to_owned()
    } else {
        format!("{group_key}{slug}")
    };

    page_path(joined.strip_suffix(".md").unwrap_or(&joined))
}

/// Collapse `README` and `index` pages onto their directory.
fn page_path(path: &str) -> String {
    for index_name in ["README", "index"] {
        if let Some(dir) = path.strip_suffix(index_name)
            && dir.ends_with('/')
        {
            return dir.to_owned();
        }
    }

    path.to_owned()
}

/// Check whether a sidebar group key is a path prefix of the form `/.../`.
///
/// The bare root `/` is accepted.
#[must_use]
pub fn is_valid_group_key(key: &str) -> bool {
    key.starts_with('/') && key.ends_with('/')
}

/// Check whether a nav link points outside the site.
///
/// Links with a URL scheme (`https:`, `mailto:`, ...) and protocol-relative
/// links (`//host/path`) are external.
#[must_use]
pub fn is_external_link(link: &str) -> bool {
    if link.starts_with("//") {
        return true;
    }

    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Normalize a route for lookup.
///
/// Ensures a leading `/`, drops `.html`/`.md` and collapses index pages the
/// same way [`resolve_slug`] does, so `/guide/index.html` and
/// `/guide/README.md` both become `/guide/`.
pub(crate) fn normalize_route(route: &str) -> String {
    let trimmed = route
        .strip_suffix(".html")
        .or_else(|| route.strip_suffix(".md"))
        .unwrap_or(route);

    if trimmed.starts_with('/') {
        page_path(trimmed)
    } else {
        page_path(&format!("/{trimmed}"))
    }
}
