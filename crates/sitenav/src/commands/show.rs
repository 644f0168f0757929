//! `sitenav show` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{SidebarSection, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml/.yaml/.yml/.json).
    #[arg(short, long, env = "SITENAV_CONFIG")]
    config: Option<PathBuf>,

    /// Show only the sidebar and prev/next links for this route.
    #[arg(short, long)]
    route: Option<String>,

    /// Print the full model as JSON.
    #[arg(long, conflicts_with = "route")]
    json: bool,
}

/// A rendered line, either a heading or plain text.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Heading(String),
    Text(String),
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or serialized.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = SiteConfig::load(self.config.as_deref())?;

        if self.json {
            output.line(&serde_json::to_string_pretty(&config)?);
            return Ok(());
        }

        let lines = match &self.route {
            Some(route) => render_route(&config, route),
            None => render_site(&config),
        };
        tracing::debug!(lines = lines.len(), "Rendered navigation");

        for line in lines {
            match line {
                Line::Heading(text) => output.heading(&text),
                Line::Text(text) => output.line(&text),
            }
        }
        Ok(())
    }
}

/// Render metadata, nav bar and every sidebar group.
fn render_site(config: &SiteConfig) -> Vec<Line> {
    let metadata = config.metadata();
    let mut lines = vec![
        Line::Heading(metadata.title.clone()),
        Line::Text(metadata.description.clone()),
    ];

    if let Some(repo) = config.repo_link() {
        lines.push(Line::Text(format!(
            "Repository: {} ({}:{})",
            repo.repo, repo.docs_branch, repo.docs_dir
        )));
    }

    lines.push(Line::Heading("Nav".to_owned()));
    for entry in config.nav() {
        let marker = if entry.is_external() {
            " (external)"
        } else {
            ""
        };
        lines.push(Line::Text(format!("  {} -> {}{marker}", entry.label(), entry.href())));
    }

    for (key, sections) in config.sidebar() {
        lines.push(Line::Heading(format!("Sidebar {key}")));
        render_sections(sections, &mut lines);
    }

    lines
}

/// Render the sidebar group and neighbors of a single route.
fn render_route(config: &SiteConfig, route: &str) -> Vec<Line> {
    let Some(group) = config.sidebar_for(route) else {
        return vec![Line::Text(format!("No sidebar for {route}"))];
    };

    let mut lines = vec![Line::Heading(format!("Sidebar {}", group.key))];
    render_sections(group.sections, &mut lines);

    let neighbors = config.neighbors(route);
    if let Some(prev) = neighbors.prev {
        lines.push(Line::Text(format!("Prev: {prev}")));
    }
    if let Some(next) = neighbors.next {
        lines.push(Line::Text(format!("Next: {next}")));
    }

    lines
}

fn render_sections(sections: &[SidebarSection], lines: &mut Vec<Line>) {
    for section in sections {
        match section {
            SidebarSection::Flat { slug } => lines.push(Line::Text(format!("  {slug}"))),
            SidebarSection::Section {
                title,
                collapsible,
                children,
            } => {
                let marker = if *collapsible { " [+]" } else { "" };
                lines.push(Line::Text(format!("  {title}{marker}")));
                for child in children {
                    lines.push(Line::Text(format!("    {child}")));
                }
            }
        }
    }
}
