//! `fd check` command implementation.
//!
//! Loads the configuration and content exactly as the server does, so
//! configuration errors surface before deploying.

use std::path::PathBuf;

use clap::Args;
use fd_config::{CliSettings, Config};
use fd_content::{ContentRegistry, Variant};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover fern-docs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or content is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = ContentRegistry::load(&config.content_resolved.dir)?;

        output.heading(&config.content_resolved.dir.display().to_string());
        for line in summary(&registry) {
            output.info(&line);
        }
        output.success("Content is valid");

        Ok(())
    }
}

/// Page, section and per-variant counts.
fn summary(registry: &ContentRegistry) -> Vec<String> {
    let mut lines = vec![
        format!("Pages: {}", registry.len()),
        format!("Navigation sections: {}", registry.navigation().len()),
    ];

    for variant in Variant::ALL {
        let sections = registry.visible_navigation(variant);
        let entries: usize = sections.iter().map(|s| s.items.len()).sum();
        let samples: usize = registry
            .pages()
            .iter()
            .map(|page| page.samples(variant).len())
            .sum();
        lines.push(format!(
            "{}: {} sections, {entries} entries, {samples} code samples",
            variant.label(),
            sections.len()
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use fd_content::ContentPage;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_summary() {
        let registry = ContentRegistry::from_parts(
            vec![ContentPage::from_markdown(
                "quick-start",
                "# Quick Start\n\n```c\nfern_init();\n```\n",
            )],
            Vec::new(),
            None,
        )
        .unwrap();

        assert_eq!(
            summary(&registry),
            vec![
                "Pages: 1",
                "Navigation sections: 0",
                "C: 0 sections, 0 entries, 1 code samples",
                "C++: 0 sections, 0 entries, 0 code samples",
            ]
        );
    }
}
