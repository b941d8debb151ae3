//! Fixture discovery
//!
//! Walks a suite directory tree and parses every file carrying the fixture
//! extension into a [`TestConfig`].

use crate::config::HarnessConfig;
use crate::fixture::TestConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Load every fixture under `root`.
///
/// Returns two order-parallel vectors: the parsed configs and each fixture's
/// path relative to `root`. Traversal follows `read_dir` order, which is not
/// guaranteed sorted; callers needing determinism must sort themselves.
pub fn load_configs(
    root: &Path,
    settings: &HarnessConfig,
) -> Result<(Vec<TestConfig>, Vec<String>)> {
    let mut paths = Vec::new();
    collect_fixtures(root, &settings.extension, &mut paths)
        .with_context(|| format!("failed to scan fixture directory: {}", root.display()))?;

    let default_run = settings.default_run_command();

    let mut configurations = Vec::with_capacity(paths.len());
    let mut names = Vec::with_capacity(paths.len());

    for path in paths {
        let config = TestConfig::parse(&path, default_run.as_deref())?;
        let name = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .into_owned();
        configurations.push(config);
        names.push(name);
    }

    Ok((configurations, names))
}

/// Recursively collect files matching the fixture extension
fn collect_fixtures(dir: &Path, extension: &str, found: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            collect_fixtures(&path, extension, found)?;
        } else if path.extension().is_some_and(|e| e == extension) {
            found.push(path);
        }
    }

    Ok(())
}
