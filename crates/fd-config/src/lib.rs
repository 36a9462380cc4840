//! `fern-docs.toml` loading.
//!
//! The config file is looked up in the working directory and its parents
//! unless a path is given. Relative paths in it are resolved against the
//! directory holding the file. Command-line overrides ([`CliSettings`]) are
//! applied last and the merged result is validated again.
//!
//! `server.host` and `site.title` may reference environment variables as
//! `${VAR}` (must be set) or `${VAR:-fallback}`.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

const CONFIG_FILENAME: &str = "fern-docs.toml";

/// Accepted spellings of `site.default_variant`, compared lowercase.
const KNOWN_VARIANTS: &[&str] = &["c", "cpp", "c++"];

/// Values given on the command line. `None` keeps the file value.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Content directory, used as given (not relative to the config file).
    pub content_dir: Option<PathBuf>,
    pub default_variant: Option<String>,
    pub live_reload_enabled: Option<bool>,
}

impl CliSettings {
    fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.content_dir {
            config.content_resolved.dir.clone_from(dir);
        }
        if let Some(variant) = &self.default_variant {
            config.site.default_variant.clone_from(variant);
        }
        if let Some(enabled) = self.live_reload_enabled {
            config.live_reload.enabled = enabled;
        }
    }
}

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    /// `[content]` as written; see `content_resolved`.
    content: RawContentSection,
    pub site: SiteConfig,
    pub live_reload: LiveReloadConfig,

    /// `[content]` with paths made absolute.
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// `[server]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RawContentSection {
    dir: Option<String>,
}

/// `[content]` section after path resolution.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Root directory holding `navigation.yaml` and `pages/`.
    pub dir: PathBuf,
}

/// `[site]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title shown in the page header.
    pub title: String,
    /// Implementation variant every session starts with.
    pub default_variant: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Fern Documentation".to_owned(),
            default_variant: "cpp".to_owned(),
        }
    }
}

/// `[live_reload]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LiveReloadConfig {
    pub enabled: bool,
    /// Glob patterns relative to the content directory. `None` uses the
    /// server's defaults.
    pub watch_patterns: Option<Vec<String>>,
}

impl Default for LiveReloadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            watch_patterns: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly given config file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range or empty.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// `${VAR}` expansion failed.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Dotted field name, e.g. `server.host`.
        field: String,
        message: String,
    },
}

impl Config {
    /// Load the configuration and apply `cli_settings` on top.
    ///
    /// With no `config_path`, the nearest `fern-docs.toml` up from the working
    /// directory is used, or defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` is missing, the file
    /// cannot be read or parsed, or the merged values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Self::load_from_file(path)?,
            None => {
                let cwd = std::env::current_dir().unwrap_or_default();
                match find_config_file(&cwd) {
                    Some(found) => Self::load_from_file(&found)?,
                    None => Self::default_with_base(&cwd),
                }
            }
        };

        if let Some(settings) = cli_settings {
            settings.apply(&mut config);
            config.validate()?;
        }

        Ok(config)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            content: RawContentSection::default(),
            site: SiteConfig::default(),
            live_reload: LiveReloadConfig::default(),
            content_resolved: ContentConfig {
                dir: base.join("content"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&text)?;

        config.expand_env_vars()?;
        config.resolve_paths(path.parent().unwrap_or(Path::new(".")));
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        // Port 0 would bind a random port
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be between 1 and 65535".to_owned(),
            ));
        }

        require_non_empty(&self.site.title, "site.title")?;
        let variant = self.site.default_variant.to_ascii_lowercase();
        if !KNOWN_VARIANTS.contains(&variant.as_str()) {
            return Err(ConfigError::Validation(format!(
                "site.default_variant must be one of {}, got '{}'",
                KNOWN_VARIANTS.join(", "),
                self.site.default_variant
            )));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        let dir = self.content.dir.as_deref().unwrap_or("content");
        self.content_resolved = ContentConfig {
            dir: config_dir.join(dir),
        };
    }
}

/// Nearest `fern-docs.toml` in `start` or one of its ancestors.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
