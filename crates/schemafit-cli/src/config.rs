//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (TODO: implement)
//! 3. Config file (TODO: implement file reading)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for adaptation runs.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Fixture settings.
    pub fixtures: FixtureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub project_dir: Option<PathBuf>,
    pub skip_install: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureConfig {
    pub local_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                project_dir: None,
                skip_install: false,
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
            fixtures: FixtureConfig { local_path: None },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via `--config`
    /// (or `None` to use the default location).  File reading is not yet
    /// implemented; this always returns the built-in defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        // The `config_file` parameter is intentionally unused until file-
        // reading is implemented.  Prefix with `_` to avoid an unused-variable
        // warning while making the intent clear.
        let _config_file = config_file;
        // TODO: read from TOML file, merge env vars, merge CLI overrides.
        Ok(Self::default())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.schemafit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "schemafit", "schemafit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".schemafit.toml"))
    }

    /// Root directory the fixture catalog resolves against.
    ///
    /// `fixtures.local_path` overrides; otherwise the current working
    /// directory.
    pub fn fixture_root(&self) -> PathBuf {
        self.fixtures.local_path.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }
}
