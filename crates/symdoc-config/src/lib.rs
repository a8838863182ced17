//! Configuration management for symdoc.
//!
//! Parses `symdoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`]; they take
//! precedence over file values. The core pipeline never reads this config —
//! the CLI passes the fields each component needs down explicitly, and the
//! module/author metadata flows opaque into the manifest.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "symdoc.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override module name.
    pub module: Option<String>,
    /// Override module version.
    pub module_version: Option<String>,
    /// Override output directory.
    pub output: Option<PathBuf>,
    /// Override the clean-before-writing flag.
    pub clean: Option<bool>,
    /// Override the root URL where docs will be hosted.
    pub root_url: Option<String>,
    /// Override author name.
    pub author: Option<String>,
    /// Override author URL.
    pub author_url: Option<String>,
    /// Override GitHub project URL.
    pub github_url: Option<String>,
    /// Override GitHub file prefix for source links.
    pub github_file_prefix: Option<String>,
    /// Override Dash docset feed URL.
    pub dash_url: Option<String>,
    /// Override arguments passed through to xcodebuild.
    pub xcodebuild_arguments: Option<Vec<String>>,
    /// Override pre-captured indexer output path.
    pub sourcefile: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Module metadata (pass-through context for the manifest).
    pub module: ModuleConfig,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Author metadata.
    pub author: AuthorConfig,
    /// External link configuration.
    pub links: LinksConfig,
    /// Indexer invocation configuration (paths are relative strings from TOML).
    indexer: IndexerConfigRaw,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Resolved indexer configuration (set after loading).
    #[serde(skip)]
    pub indexer_resolved: IndexerConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Module metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Module name shown on every page.
    pub name: String,
    /// Module version string.
    pub version: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: "1.0".to_owned(),
        }
    }
}

/// Raw output configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    clean: Option<bool>,
    root_url: Option<String>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory the manifest is written to.
    pub dir: PathBuf,
    /// Whether to remove and recreate the output directory first.
    pub clean: bool,
    /// Absolute URL where the docs will be hosted.
    pub root_url: Option<String>,
}

/// Author metadata.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AuthorConfig {
    /// Author name shown in page footers.
    pub name: String,
    /// Author homepage URL.
    pub url: String,
}

/// External link configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LinksConfig {
    /// GitHub project URL.
    pub github_url: Option<String>,
    /// Prefix for per-file GitHub source links.
    pub github_file_prefix: Option<String>,
    /// Dash docset feed URL. Derived from `output.root_url` when unset.
    pub dash_url: Option<String>,
}

/// Raw indexer configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct IndexerConfigRaw {
    xcodebuild_arguments: Option<Vec<String>>,
    sourcefile: Option<String>,
    docset_platform: Option<String>,
}

/// Resolved indexer configuration with absolute paths.
#[derive(Debug)]
pub struct IndexerConfig {
    /// Arguments passed through to xcodebuild after `--`.
    pub xcodebuild_arguments: Vec<String>,
    /// Pre-captured indexer output file, used instead of a live invocation.
    pub sourcefile: Option<PathBuf>,
    /// Platform identifier written into the docset feed.
    pub docset_platform: String,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            xcodebuild_arguments: Vec::new(),
            sourcefile: None,
            docset_platform: "symdoc".to_owned(),
        }
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
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
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
    /// Otherwise, searches for `symdoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values. The derived
    /// `dash_url` default is filled in last, so overrides feed into it.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or a URL field is invalid.
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
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.derive_dash_url();
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(module) = &settings.module {
            self.module.name.clone_from(module);
        }
        if let Some(version) = &settings.module_version {
            self.module.version.clone_from(version);
        }
        if let Some(output) = &settings.output {
            self.output_resolved.dir.clone_from(output);
        }
        if let Some(clean) = settings.clean {
            self.output_resolved.clean = clean;
        }
        if let Some(root_url) = &settings.root_url {
            self.output_resolved.root_url = Some(root_url.clone());
        }
        if let Some(author) = &settings.author {
            self.author.name.clone_from(author);
        }
        if let Some(author_url) = &settings.author_url {
            self.author.url.clone_from(author_url);
        }
        if let Some(github_url) = &settings.github_url {
            self.links.github_url = Some(github_url.clone());
        }
        if let Some(prefix) = &settings.github_file_prefix {
            self.links.github_file_prefix = Some(prefix.clone());
        }
        if let Some(dash_url) = &settings.dash_url {
            self.links.dash_url = Some(dash_url.clone());
        }
        if let Some(args) = &settings.xcodebuild_arguments {
            self.indexer_resolved.xcodebuild_arguments.clone_from(args);
        }
        if let Some(sourcefile) = &settings.sourcefile {
            self.indexer_resolved.sourcefile = Some(sourcefile.clone());
        }
    }

    /// Default the Dash feed URL from the hosting root when unset.
    fn derive_dash_url(&mut self) {
        if self.links.dash_url.is_some() || self.module.name.is_empty() {
            return;
        }
        if let Some(root_url) = &self.output_resolved.root_url {
            self.links.dash_url = Some(format!(
                "{}/docsets/{}.xml",
                root_url.trim_end_matches('/'),
                self.module.name
            ));
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            module: ModuleConfig::default(),
            output: OutputConfigRaw::default(),
            author: AuthorConfig::default(),
            links: LinksConfig::default(),
            indexer: IndexerConfigRaw::default(),
            output_resolved: OutputConfig {
                dir: base.join("docs"),
                clean: false,
                root_url: None,
            },
            indexer_resolved: IndexerConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// URL-typed fields must use an http(s) scheme when set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.author.url.is_empty() {
            require_http_url(&self.author.url, "author.url")?;
        }
        if let Some(root_url) = &self.output_resolved.root_url {
            require_http_url(root_url, "output.root_url")?;
        }
        if let Some(github_url) = &self.links.github_url {
            require_http_url(github_url, "links.github_url")?;
        }
        if let Some(dash_url) = &self.links.dash_url {
            require_http_url(dash_url, "links.dash_url")?;
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_resolved = OutputConfig {
            dir: config_dir.join(self.output.dir.as_deref().unwrap_or("docs")),
            clean: self.output.clean.unwrap_or(false),
            root_url: self.output.root_url.clone(),
        };
        self.indexer_resolved = IndexerConfig {
            xcodebuild_arguments: self.indexer.xcodebuild_arguments.clone().unwrap_or_default(),
            sourcefile: self
                .indexer
                .sourcefile
                .as_deref()
                .map(|file| config_dir.join(file)),
            docset_platform: self
                .indexer
                .docset_platform
                .clone()
                .unwrap_or_else(|| "symdoc".to_owned()),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.module.name, "");
        assert_eq!(config.module.version, "1.0");
        assert_eq!(config.output_resolved.dir, PathBuf::from("/test/docs"));
        assert!(!config.output_resolved.clean);
        assert!(config.output_resolved.root_url.is_none());
        assert_eq!(config.indexer_resolved.docset_platform, "symdoc");
        assert!(config.indexer_resolved.xcodebuild_arguments.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.module.version, "1.0");
        assert_eq!(config.author.name, "");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[module]
name = "Musician"
version = "2.3"

[output]
dir = "generated"
clean = true
root_url = "https://example.com/docs"

[author]
name = "The Band"
url = "https://example.com"

[links]
github_url = "https://github.com/band/musician"
github_file_prefix = "https://github.com/band/musician/tree/v2.3"

[indexer]
xcodebuild_arguments = ["-scheme", "Musician"]
sourcefile = "capture.json"
docset_platform = "musician"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.module.name, "Musician");
        assert_eq!(config.module.version, "2.3");
        assert_eq!(
            config.output_resolved.dir,
            PathBuf::from("/project/generated")
        );
        assert!(config.output_resolved.clean);
        assert_eq!(config.author.name, "The Band");
        assert_eq!(
            config.links.github_url.as_deref(),
            Some("https://github.com/band/musician")
        );
        assert_eq!(
            config.indexer_resolved.xcodebuild_arguments,
            vec!["-scheme".to_owned(), "Musician".to_owned()]
        );
        assert_eq!(
            config.indexer_resolved.sourcefile,
            Some(PathBuf::from("/project/capture.json"))
        );
        assert_eq!(config.indexer_resolved.docset_platform, "musician");
    }

    #[test]
    fn test_load_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = Config::load(Some(&missing), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_resolves_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[output]\ndir = \"site\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.output_resolved.dir, dir.path().join("site"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[output\n").unwrap();
        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_apply_cli_settings_overrides_file_values() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            module: Some("Musician".to_owned()),
            output: Some(PathBuf::from("/custom/docs")),
            clean: Some(true),
            xcodebuild_arguments: Some(vec!["-scheme".to_owned(), "M".to_owned()]),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.module.name, "Musician");
        assert_eq!(config.output_resolved.dir, PathBuf::from("/custom/docs"));
        assert!(config.output_resolved.clean);
        assert_eq!(config.indexer_resolved.xcodebuild_arguments.len(), 2);
        assert_eq!(config.module.version, "1.0"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty_changes_nothing() {
        let before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.module.name, before.module.name);
        assert_eq!(config.output_resolved.dir, before.output_resolved.dir);
    }

    #[test]
    fn test_dash_url_derived_from_root_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.module.name = "Musician".to_owned();
        config.output_resolved.root_url = Some("https://example.com/docs/".to_owned());

        config.derive_dash_url();

        assert_eq!(
            config.links.dash_url.as_deref(),
            Some("https://example.com/docs/docsets/Musician.xml")
        );
    }

    #[test]
    fn test_dash_url_not_derived_without_root_url_or_name() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.module.name = "Musician".to_owned();
        config.derive_dash_url();
        assert!(config.links.dash_url.is_none());

        let mut config = Config::default_with_base(Path::new("/test"));
        config.output_resolved.root_url = Some("https://example.com".to_owned());
        config.derive_dash_url();
        assert!(config.links.dash_url.is_none());
    }

    #[test]
    fn test_explicit_dash_url_wins_over_derivation() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.module.name = "Musician".to_owned();
        config.output_resolved.root_url = Some("https://example.com".to_owned());
        config.links.dash_url = Some("https://feeds.example.com/m.xml".to_owned());

        config.derive_dash_url();

        assert_eq!(
            config.links.dash_url.as_deref(),
            Some("https://feeds.example.com/m.xml")
        );
    }

    #[test]
    fn test_validate_rejects_non_http_urls() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.links.github_url = Some("git@github.com:band/musician.git".to_owned());

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("links.github_url"));
    }

    #[test]
    fn test_validate_accepts_empty_author_url() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_author_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.author.url = "ftp://example.com".to_owned();
        assert!(config.validate().is_err());

        config.author.url = "https://example.com".to_owned();
        assert!(config.validate().is_ok());
    }
}
