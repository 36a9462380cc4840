//! `fd serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use fd_config::{CliSettings, Config};
use fd_content::Variant;
use fd_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover fern-docs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Implementation variant selected at startup: c or cpp (overrides config).
    #[arg(long)]
    variant: Option<Variant>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable live reload.
    #[arg(long)]
    live_reload: Option<bool>,

    /// Disable live reload.
    #[arg(long, conflicts_with = "live_reload")]
    no_live_reload: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content is invalid, or the server
    /// fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let live_reload_enabled = self.resolve_live_reload_enabled();
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
            default_variant: self.variant.map(|v| v.to_string()),
            live_reload_enabled,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Content directory: {}",
            config.content_resolved.dir.display()
        ));
        output.info(&format!("Default variant: {}", config.site.default_variant));
        if config.live_reload.enabled {
            output.info("Live reload: enabled");
        } else {
            output.info("Live reload: disabled");
        }

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config).await?;

        Ok(())
    }

    /// Resolve `live_reload_enabled` from --live-reload/--no-live-reload flags.
    fn resolve_live_reload_enabled(&self) -> Option<bool> {
        self.no_live_reload.then_some(false).or(self.live_reload)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ServeArgs,
    }

    fn parse(args: &[&str]) -> ServeArgs {
        TestCli::try_parse_from(std::iter::once("serve").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_live_reload_unset() {
        assert_eq!(parse(&[]).resolve_live_reload_enabled(), None);
    }

    #[test]
    fn test_live_reload_explicit() {
        assert_eq!(
            parse(&["--live-reload", "true"]).resolve_live_reload_enabled(),
            Some(true)
        );
    }

    #[test]
    fn test_no_live_reload() {
        assert_eq!(
            parse(&["--no-live-reload"]).resolve_live_reload_enabled(),
            Some(false)
        );
    }

    #[test]
    fn test_overrides_parsed() {
        let args = parse(&["-p", "9000", "--variant", "c", "--content-dir", "site", "-v"]);

        assert_eq!(args.port, Some(9000));
        assert_eq!(args.variant, Some(Variant::C));
        assert_eq!(args.content_dir, Some(PathBuf::from("site")));
        assert!(args.verbose);
    }

    #[test]
    fn test_variant_spellings() {
        assert_eq!(parse(&["--variant", "c++"]).variant, Some(Variant::Cpp));
        assert_eq!(parse(&["--variant", "CPP"]).variant, Some(Variant::Cpp));
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = TestCli::try_parse_from(["serve", "--variant", "rust"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("rust"));
    }
}
