//! Site configuration for Signpost.
//!
//! Parses `signpost.toml` with serde, discovers it in parent directories,
//! validates the flat site options and builds the sidebar through
//! [`signpost_nav::build`].
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `site`
//! - `social[].href`

mod expand;
mod options;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use signpost_nav::{NavError, NavigationEntrySpec, ValidatedNavigationTree};

pub use options::SiteOptions;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site title.
    pub title: Option<String>,
    /// Override deployed site URL.
    pub site: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "signpost.toml";

/// Site configuration as written in `signpost.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Site title shown in the header and page titles.
    pub title: String,
    /// Deployed base URL (e.g., `https://docs.example.com`).
    pub site: Option<String>,
    /// Favicon path, served from the public directory.
    pub favicon: Option<String>,
    /// Header logo.
    pub logo: Option<LogoConfig>,
    /// Extra stylesheets appended after the theme's own.
    pub custom_css: Vec<String>,
    /// Social links shown in the header.
    pub social: Vec<SocialLink>,
    /// Theme and documentation plugins, by package name.
    pub plugins: Vec<String>,
    /// Framework extensions (e.g., diagram rendering), by package name.
    pub integrations: Vec<String>,
    /// Sidebar entries as written by the author.
    pub sidebar: Vec<NavigationEntrySpec>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Header logo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogoConfig {
    /// Image path relative to the project.
    pub src: String,
}

/// Social link shown in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Icon name understood by the theme (e.g., "github", "twitter").
    pub icon: String,
    /// Accessible label.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`social[0].href`").
        field: String,
        /// Error message (e.g., "${`DOCS_DOMAIN`} not set").
        message: String,
    },
    /// Invalid sidebar entry.
    #[error("{0}")]
    Navigation(#[from] NavError),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `signpost.toml` in the current directory and
    /// its parents.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values. The result is validated once the
    /// overrides are in place.
    ///
    /// # Errors
    ///
    /// Returns error if no config file is found, parsing fails, or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => Self::discover_config()
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?,
        };

        let mut config = Self::load_from_file(&path)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML content.
    ///
    /// Expands environment variables but does not validate, so callers can
    /// inspect or override values first.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is malformed or an environment variable
    /// without a default is unset.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.title.clone_from(title);
        }
        if let Some(site) = &settings.site {
            self.site = Some(site.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading site configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate the flat site options.
    ///
    /// The sidebar is validated separately by [`Config::navigation`], which
    /// also produces the tree.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;

        if let Some(site) = &self.site {
            require_non_empty(site, "site")?;
            require_http_url(site, "site")?;
        }
        if let Some(favicon) = &self.favicon {
            require_non_empty(favicon, "favicon")?;
        }
        if let Some(logo) = &self.logo {
            require_non_empty(&logo.src, "logo.src")?;
        }

        self.validate_social()?;

        for (i, path) in self.custom_css.iter().enumerate() {
            require_non_empty(path, &format!("custom_css[{i}]"))?;
        }
        for (i, plugin) in self.plugins.iter().enumerate() {
            require_non_empty(plugin, &format!("plugins[{i}]"))?;
        }
        for (i, integration) in self.integrations.iter().enumerate() {
            require_non_empty(integration, &format!("integrations[{i}]"))?;
        }

        Ok(())
    }

    /// Validate social links.
    fn validate_social(&self) -> Result<(), ConfigError> {
        for (i, link) in self.social.iter().enumerate() {
            require_non_empty(&link.icon, &format!("social[{i}].icon"))?;
            require_non_empty(&link.label, &format!("social[{i}].label"))?;
            let href = format!("social[{i}].href");
            require_non_empty(&link.href, &href)?;
            require_http_url(&link.href, &href)?;
        }
        Ok(())
    }

    /// Build the validated sidebar tree.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Navigation` for the first invalid entry.
    pub fn navigation(&self) -> Result<ValidatedNavigationTree, ConfigError> {
        Ok(signpost_nav::build(&self.sidebar)?)
    }

    /// Assemble the configuration object handed to the site builder.
    ///
    /// # Errors
    ///
    /// Returns error if the site options or the sidebar are invalid.
    pub fn site_options(&self) -> Result<SiteOptions, ConfigError> {
        self.validate()?;
        let sidebar = self.navigation()?;
        Ok(SiteOptions::new(self, sidebar))
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.title = expand::expand_env(&self.title, "title")?;

        if let Some(ref site) = self.site {
            self.site = Some(expand::expand_env(site, "site")?);
        }

        for (i, link) in self.social.iter_mut().enumerate() {
            link.href = expand::expand_env(&link.href, &format!("social[{i}].href"))?;
        }

        Ok(())
    }
}
