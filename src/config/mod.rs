//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── contact    # [contact]
//! │   ├── seo        # [seo]
//! │   ├── serve      # [serve]
//! │   ├── site       # [site]
//! │   └── spy        # [spy]
//! ├── types/         # FieldPath, ConfigError, ConfigDiagnostics
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | `[site]`         | Site metadata (title, author, url)             |
//! | `[spy]`          | Tracked sections and activation geometry       |
//! | `[seo]`          | Metadata per section, JSON-LD person           |
//! | `[contact]`      | Contact relay (endpoint, addresses, outbox)    |
//! | `[serve]`        | Local server (port, interface, root)           |
//! | `[[projects]]`   | Project catalog                                |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use section::{ContactConfig, SeoConfig, ServeConfig, SiteInfoConfig, SpyConfig};

use crate::{
    cli::{Cli, Commands, SpyArgs},
    log,
    project::Project,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site information
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Section tracking
    #[serde(default)]
    pub spy: SpyConfig,

    /// Section metadata and structured data
    #[serde(default)]
    pub seo: SeoConfig,

    /// Contact form relay
    #[serde(default)]
    pub contact: ContactConfig,

    /// Local server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Project catalog
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// the config file's parent directory. `init` gets a default config rooted
    /// at the target directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if cli.is_init() {
            let mut config = Self::default();
            config.root = config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            config.config_path = config_path;
            return Ok(config);
        }

        if !exists {
            return Err(ConfigError::NotFound(cli.config.clone()).into());
        }

        let mut config = Self::from_path(&config_path)?;
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.normalize_paths(&root);
        config.apply_command_options(cli);
        config.validate()?;

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let path = match &cli.command {
            Commands::Init { name: Some(name), .. } => cwd.join(name).join(&cli.config),
            Commands::Init { name: None, .. } => cwd.join(&cli.config),
            _ => match find_config_file(&cli.config) {
                Some(path) => return Ok((path, true)),
                None => cwd.join(&cli.config),
            },
        };
        let exists = path.exists();
        Ok((path, exists))
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        match &cli.command {
            Commands::Serve {
                interface,
                port,
                dry_run,
            } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                self.contact.dry_run |= *dry_run;
            }
            Commands::Spy { args } => self.apply_spy_args(args),
            Commands::Init { .. } | Commands::Head { .. } | Commands::Projects { .. } => {}
        }
    }

    /// Apply spy overrides from CLI.
    fn apply_spy_args(&mut self, args: &SpyArgs) {
        Self::update_option(&mut self.spy.offset, args.offset.as_ref());
        Self::update_option(&mut self.spy.threshold, args.threshold.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve relative paths against the root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = crate::utils::path::normalize_path(root);
        self.serve.root = crate::utils::path::normalize_path(&root.join(&self.serve.root));
        self.contact.outbox = crate::utils::path::normalize_path(&root.join(&self.contact.outbox));
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Run every section check without printing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.spy.validate(&mut diag);
        self.seo.validate(&self.spy.sections, &mut diag);
        self.contact.validate(&mut diag);
        self.serve.validate(&mut diag);
        crate::project::validate_catalog(&self.projects, &mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\ndescription = \"Test site\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"Jane\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.spy.sections.len(), 5);
        assert_eq!(config.serve.port, 5277);
        assert!(config.projects.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_default_config_validates() {
        let config = test_parse_config("");
        let diag = config.diagnostics();
        assert!(!diag.has_errors(), "{diag}");
    }

    #[test]
    fn test_diagnostics_collects_all_sections() {
        let mut config = test_parse_config("[spy]\nthreshold = 2.0\n[serve]\nworkers = 0");
        config.site.url = Some("nope".into());
        let diag = config.diagnostics();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.url", "spy.threshold", "serve.workers"]);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = test_parse_config("[serve]\nport = 3000");
        let cli = Cli::parse_from(["folio", "serve", "-p", "8080", "--dry-run"]);
        config.apply_command_options(&cli);
        assert_eq!(config.serve.port, 8080);
        assert!(config.contact.dry_run);

        let cli = Cli::parse_from(["folio", "spy", "--offset", "0", "--threshold", "0.5"]);
        config.apply_command_options(&cli);
        assert_eq!(config.spy.options().offset, 0.0);
        assert_eq!(config.spy.options().threshold, 0.5);
    }

    #[test]
    fn test_paths_resolved_against_root() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[serve]\nroot = \"public\"\n").unwrap();

        let mut config = SiteConfig::from_path(&path).unwrap();
        config.normalize_paths(temp.path());
        assert!(config.serve.root.is_absolute());
        assert!(config.serve.root.ends_with("public"));
        assert!(config.contact.outbox.ends_with("outbox"));
    }
}
