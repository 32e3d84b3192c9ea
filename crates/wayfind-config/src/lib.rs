//! Configuration management for wayfind.
//!
//! Parses `site.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The file carries both the global site metadata and the full set of
//! navigation declarations (sidebars, navbar, footer, features). Required
//! fields are checked during load, before any sidebar or link resolution
//! runs; every optional field has a documented default.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wayfind_sidebar::SidebarTree;
use wayfind_surface::{FeatureItem, FooterGroup, NavbarItem};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "site.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Site configuration and navigation declarations.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Global site metadata (raw; strings from TOML).
    #[serde(default)]
    site: SiteRaw,
    /// Docs source configuration (raw; paths are relative strings).
    #[serde(default)]
    docs: DocsRaw,
    /// Named sidebar trees, id to ordered nodes.
    #[serde(default)]
    pub sidebars: BTreeMap<String, SidebarTree>,
    /// Navbar items in declaration order.
    #[serde(default)]
    pub navbar: Vec<NavbarItem>,
    /// Footer groups in declaration order.
    #[serde(default)]
    pub footer: Vec<FooterGroup>,
    /// Landing-page feature cards in declaration order.
    #[serde(default)]
    pub features: Vec<FeatureItem>,

    /// Resolved site metadata (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw site metadata as parsed from TOML.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct SiteRaw {
    title: Option<String>,
    tagline: Option<String>,
    url: Option<String>,
    base_url: Option<String>,
    copyright: Option<String>,
    locale: Option<LocaleRaw>,
    theme: Option<toml::Table>,
}

/// Raw locale section.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct LocaleRaw {
    default: Option<String>,
    supported: Option<Vec<String>>,
}

/// Raw docs section.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct DocsRaw {
    source_dir: Option<String>,
    route_base: Option<String>,
}

/// Resolved global site metadata.
///
/// Constructed once during load; immutable for the rest of the build.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Optional tagline shown next to the title.
    pub tagline: Option<String>,
    /// Production URL of the site, if known.
    pub url: Option<String>,
    /// Absolute path prefix the site is served under (e.g. `/`).
    pub base_url: String,
    /// Footer copyright line.
    pub copyright: Option<String>,
    /// Locale configuration.
    pub locale: LocaleConfig,
    /// Free-form theme options, passed opaquely to the renderer.
    pub theme: toml::Table,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: None,
            url: None,
            base_url: "/".to_owned(),
            copyright: None,
            locale: LocaleConfig::default(),
            theme: toml::Table::new(),
        }
    }
}

/// Locale configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleConfig {
    /// Default locale. Always a member of `supported`.
    pub default: String,
    /// Supported locales.
    pub supported: Vec<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: "en".to_owned(),
            supported: vec!["en".to_owned()],
        }
    }
}

/// Resolved docs source configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsConfig {
    /// Directory scanned for markdown documents.
    pub source_dir: PathBuf,
    /// Route segment documents are served under.
    pub route_base: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("docs"),
            route_base: "docs".to_owned(),
        }
    }
}

impl DocsConfig {
    /// Site path prefix for documents: base url joined with the route base.
    #[must_use]
    pub fn route_prefix(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.route_base)
    }
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
    /// A required field is absent.
    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
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
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `site.toml` in the current directory and parents.
    /// The declarations are the input of the whole build, so finding no
    /// file at all is an error rather than a silent default.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if no config file is found, parsing fails, a
    /// required field is absent or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            return Err(ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)));
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse and resolve a configuration from TOML text.
    ///
    /// Relative paths resolve against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, a required field is absent or
    /// validation fails.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.resolve(base_dir)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
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

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Resolve raw sections into their final values and validate.
    ///
    /// Required fields are checked here, before any sidebar or link
    /// resolution can run: downstream validation assumes a usable base
    /// path.
    fn resolve(&mut self, base_dir: &Path) -> Result<(), ConfigError> {
        self.site_resolved = self.site.resolve()?;
        self.docs_resolved = DocsConfig {
            source_dir: base_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
            route_base: self
                .docs
                .route_base
                .clone()
                .unwrap_or_else(|| "docs".to_owned()),
        };
        self.validate()?;
        Ok(())
    }

    /// Validate resolved configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let site = &self.site_resolved;

        require_non_empty(&site.title, "site.title")?;
        if !site.base_url.starts_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must be an absolute path starting with `/`".to_owned(),
            ));
        }
        if let Some(url) = &site.url {
            require_http_url(url, "site.url")?;
        }
        if !site.locale.supported.contains(&site.locale.default) {
            return Err(ConfigError::Validation(format!(
                "site.locale.supported must include the default locale `{}`",
                site.locale.default
            )));
        }

        require_non_empty(&self.docs_resolved.route_base, "docs.route_base")?;

        Ok(())
    }
}

impl SiteRaw {
    /// Resolve the raw site section, applying documented defaults.
    fn resolve(&self) -> Result<SiteConfig, ConfigError> {
        let title = self
            .title
            .clone()
            .ok_or(ConfigError::MissingRequiredField("title"))?;
        let base_url = self
            .base_url
            .clone()
            .ok_or(ConfigError::MissingRequiredField("base_url"))?;

        let locale = self.locale.clone().unwrap_or_default();
        let default = locale.default.unwrap_or_else(|| "en".to_owned());
        let supported = locale.supported.unwrap_or_else(|| vec![default.clone()]);

        Ok(SiteConfig {
            title,
            tagline: self.tagline.clone(),
            url: self.url.clone(),
            base_url,
            copyright: self.copyright.clone(),
            locale: LocaleConfig { default, supported },
            theme: self.theme.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn load(toml: &str) -> Result<Config, ConfigError> {
        Config::from_toml_str(toml, Path::new("/project"))
    }

    const MINIMAL: &str = r#"
[site]
title = "Docs"
base_url = "/"
"#;

    #[test]
    fn test_minimal_config_applies_defaults() {
        let config = load(MINIMAL).unwrap();

        let site = &config.site_resolved;
        assert_eq!(site.title, "Docs");
        assert_eq!(site.base_url, "/");
        assert_eq!(site.tagline, None);
        assert_eq!(site.url, None);
        assert_eq!(site.locale.default, "en");
        assert_eq!(site.locale.supported, vec!["en".to_owned()]);
        assert!(site.theme.is_empty());

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/project/docs"));
        assert_eq!(config.docs_resolved.route_base, "docs");
        assert!(config.sidebars.is_empty());
        assert!(config.navbar.is_empty());
        assert!(config.footer.is_empty());
        assert!(config.features.is_empty());
    }

    #[test]
    fn test_missing_title_is_required_field_error() {
        let result = load(
            r#"
[site]
base_url = "/"
"#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField("title"))
        ));
    }

    #[test]
    fn test_missing_base_url_is_required_field_error() {
        let result = load(
            r#"
[site]
title = "Docs"
"#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField("base_url"))
        ));
    }

    #[test]
    fn test_empty_title_fails_validation() {
        let result = load(
            r#"
[site]
title = ""
base_url = "/"
"#,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_relative_base_url_fails_validation() {
        let result = load(
            r#"
[site]
title = "Docs"
base_url = "docs/"
"#,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_site_url_must_be_http() {
        let result = load(
            r#"
[site]
title = "Docs"
base_url = "/"
url = "ftp://docs.example.com"
"#,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.url"));
    }

    #[test]
    fn test_default_locale_must_be_supported() {
        let result = load(
            r#"
[site]
title = "Docs"
base_url = "/"

[site.locale]
default = "de"
supported = ["en", "fr"]
"#,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("de"));
    }

    #[test]
    fn test_locale_supported_defaults_to_default_locale() {
        let config = load(
            r#"
[site]
title = "Docs"
base_url = "/"

[site.locale]
default = "de"
"#,
        )
        .unwrap();

        assert_eq!(config.site_resolved.locale.supported, vec!["de".to_owned()]);
    }

    #[test]
    fn test_theme_table_is_opaque() {
        let config = load(
            r#"
[site]
title = "Docs"
base_url = "/"

[site.theme]
color_mode = "dark"
respect_prefers_color_scheme = true
"#,
        )
        .unwrap();

        let theme = &config.site_resolved.theme;
        assert_eq!(
            theme.get("color_mode").and_then(|v| v.as_str()),
            Some("dark")
        );
        assert_eq!(
            theme
                .get("respect_prefers_color_scheme")
                .and_then(toml::Value::as_bool),
            Some(true)
        );
    }

    #[test]
    fn test_full_site_metadata_is_parsed() {
        let config = load(
            r#"
[site]
title = "Anudha Mart Docs"
tagline = "Comprehensive e-commerce documentation"
url = "https://docs.example.com"
base_url = "/handbook/"
copyright = "Copyright © Anudha Mart"
"#,
        )
        .unwrap();

        let site = &config.site_resolved;
        assert_eq!(site.tagline.as_deref(), Some("Comprehensive e-commerce documentation"));
        assert_eq!(site.url.as_deref(), Some("https://docs.example.com"));
        assert_eq!(site.base_url, "/handbook/");
        assert_eq!(site.copyright.as_deref(), Some("Copyright © Anudha Mart"));
    }

    #[test]
    fn test_docs_paths_resolve_relative_to_config_dir() {
        let config = load(
            r#"
[site]
title = "Docs"
base_url = "/"

[docs]
source_dir = "documentation"
route_base = "handbook"
"#,
        )
        .unwrap();

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/documentation")
        );
        assert_eq!(config.docs_resolved.route_base, "handbook");
    }

    #[test]
    fn test_route_prefix_joins_base_url_and_route_base() {
        let docs = DocsConfig::default();

        assert_eq!(docs.route_prefix("/"), "/docs");
        assert_eq!(docs.route_prefix("/handbook/"), "/handbook/docs");
    }

    #[test]
    fn test_declarations_are_parsed() {
        let config = load(
            r#"
[site]
title = "Docs"
base_url = "/"

[sidebars]
docs = ["intro", { label = "Getting Started", items = ["setup"] }]

[[navbar]]
sidebar = "docs"
label = "Documentation"

[[footer]]
title = "Documentation"
links = [{ label = "Intro", to = "/docs/intro" }]

[[features]]
title = "Guide"
icon = "🚀"
description = "Start here."
link = "/docs/intro"
"#,
        )
        .unwrap();

        assert_eq!(config.sidebars["docs"].len(), 2);
        assert_eq!(config.navbar.len(), 1);
        assert_eq!(config.footer.len(), 1);
        assert_eq!(config.features.len(), 1);
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = load(MINIMAL).unwrap();
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/custom/docs"));
    }

    #[test]
    fn test_apply_cli_settings_empty_changes_nothing() {
        let mut config = load(MINIMAL).unwrap();

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/project/docs"));
    }

    #[test]
    fn test_load_explicit_missing_path_is_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("absent.toml");

        let result = Config::load(Some(&missing), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_resolves_against_file_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, MINIMAL).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(
            config.docs_resolved.source_dir,
            temp_dir.path().join("docs")
        );
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = load("[site\ntitle = ");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
