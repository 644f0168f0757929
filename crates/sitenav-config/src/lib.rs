//! Site navigation configuration for static documentation sites.
//!
//! Validates a raw site configuration (title, nav bar and sidebar taxonomy)
//! and turns it into an immutable [`SiteConfig`] that renderers query for
//! menus, sidebars and previous/next links.
//!
//! ## Raw schema
//!
//! ```text
//! title: string                 required, non-empty
//! description: string           required
//! ga: string                    optional analytics identifier
//! themeConfig:
//!   repo / docsDir / docsBranch / editLinkText: string
//!   editLinks: bool
//!   sidebarDepth: 0..=2
//!   nav: [{ text, link }]
//!   sidebar: { "/prefix/": [ "slug" | { title, collapsible, children } ] }
//! ```
//!
//! Bare sidebar strings are shorthand for a single untitled page. Loading is
//! all-or-nothing: the first problem is reported as a [`ConfigError`].
//!
//! Files are read through [`source`]: `sitenav.toml`, `sitenav.yaml`,
//! `sitenav.yml` or `sitenav.json`, discovered in the current directory and
//! its parents.

mod error;
mod loader;
mod model;
mod slug;
pub mod source;

pub use error::{ConfigError, LoadError};
pub use loader::load;
pub use model::{
    DEFAULT_SIDEBAR_DEPTH, NavEntry, PageNeighbors, RepoLinkInfo, SidebarMatch, SidebarSection,
    SiteConfig, SiteMetadata,
};
pub use slug::{is_external_link, is_valid_group_key, resolve_slug};
