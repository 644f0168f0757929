//! `sitenav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{NavEntry, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml/.yaml/.yml/.json).
    #[arg(short, long, env = "SITENAV_CONFIG")]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = SiteConfig::load(self.config.as_deref())?;

        for key in unlinked_groups(&config) {
            output.warning(&format!(
                "Warning: sidebar group {key} is not linked from the nav bar"
            ));
        }

        output.success(&summary(&config));
        Ok(())
    }
}

/// One-line description of a loaded configuration.
fn summary(config: &SiteConfig) -> String {
    let pages: usize = config
        .sidebar()
        .keys()
        .map(|key| config.pages(key).len())
        .sum();

    format!(
        "Configuration OK: \"{}\" with {} nav entries, {} sidebar groups, {} pages",
        config.metadata().title,
        config.nav().len(),
        config.sidebar().len(),
        pages
    )
}

/// Sidebar groups that no internal nav entry points into.
fn unlinked_groups(config: &SiteConfig) -> Vec<&str> {
    let targets: Vec<&str> = config
        .nav()
        .iter()
        .filter_map(|entry| match entry {
            NavEntry::Internal { target, .. } => Some(target.as_str()),
            NavEntry::External { .. } => None,
        })
        .collect();

    config
        .sidebar()
        .keys()
        .map(String::as_str)
        .filter(|key| !targets.iter().any(|target| target.starts_with(key)))
        .collect()
}
