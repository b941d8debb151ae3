//! Harness settings
//!
//! Resolved once before any parsing: CLI flags win over a suite-local
//! `fixtest.toml`, which wins over the `FIXTEST_BIN` environment variable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable naming the program under test
pub const PROGRAM_ENV: &str = "FIXTEST_BIN";

/// Suite-local settings file
pub const CONFIG_FILE: &str = "fixtest.toml";

const DEFAULT_EXTENSION: &str = "test";

/// Contents of a suite's `fixtest.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Program under test, used to build the default run command
    pub program: Option<String>,
    /// Fixture file extension (without the dot)
    pub extension: Option<String>,
}

impl FileConfig {
    /// Load `fixtest.toml` from a suite directory, if present
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;

        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        Ok(Some(config))
    }
}

/// Fully resolved harness settings, immutable once built
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub program: Option<String>,
    pub extension: String,
}

impl HarnessConfig {
    /// Resolve settings for a suite directory.
    ///
    /// Precedence: explicit flags, then the suite's `fixtest.toml`, then
    /// `FIXTEST_BIN` for the program. The extension falls back to `test`.
    pub fn resolve(
        suite_dir: &Path,
        program_flag: Option<String>,
        extension_flag: Option<String>,
    ) -> Result<Self> {
        let file = FileConfig::load_from_dir(suite_dir)?.unwrap_or_default();

        let program = program_flag
            .or(file.program)
            .or_else(|| env::var(PROGRAM_ENV).ok());

        let extension = extension_flag
            .or(file.extension)
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        Ok(HarnessConfig { program, extension })
    }

    /// Run-command template for `RUN: DEFAULT` fixtures.
    ///
    /// The fixture path is single-quoted so paths with spaces survive the
    /// shell.
    pub fn default_run_command(&self) -> Option<String> {
        self.program.as_ref().map(|p| format!("{} '%s'", p))
    }
}
