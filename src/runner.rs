//! Test execution
//!
//! Two executors share the same spawn-and-capture front half:
//! [`run_test`] expects a clean exit and enforces every expectation the
//! fixture declares; [`run_failing_test`] expects a non-zero exit and treats
//! the output comparison as advisory.

use crate::fixture::TestConfig;
use crate::util::ui;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Output};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error("fixture \"{0}\" has no RUN directive")]
    MissingRun(PathBuf),

    #[error("failed to spawn run command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("run command exited with status {code}:\n{stderr}")]
    Execution { code: i32, stderr: String },

    #[error("output mismatch:\n  expected: {expected:?}\n  actual:   {actual:?}")]
    OutputMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("failed to read \"{path}\" for comparison: {source}")]
    CompareRead {
        path: String,
        source: std::io::Error,
    },

    #[error("files \"{a}\" and \"{b}\" differ")]
    FileMismatch { a: String, b: String },

    #[error("cleanup target \"{0}\" is already absent")]
    CleanupMissing(String),

    #[error("failed to remove \"{path}\": {source}")]
    Cleanup {
        path: String,
        source: std::io::Error,
    },

    #[error("run command succeeded where failure was expected")]
    UnexpectedSuccess,
}

/// Run a fixture whose command is expected to exit 0.
///
/// Verifies stdout line-by-line against `out`, compares every `file_eq` pair
/// byte-for-byte, then deletes every `remove` path. Any deviation is fatal.
pub fn run_test(config: &TestConfig) -> Result<(), TestError> {
    let output = spawn(config)?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let actual = split_output(&stdout);

    if !output.status.success() {
        return Err(TestError::Execution {
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    // Positional comparison: same length, same order, same content
    if actual != config.out {
        return Err(TestError::OutputMismatch {
            expected: config.out.clone(),
            actual,
        });
    }

    for (a, b) in &config.file_eq {
        let left = fs::read(a).map_err(|source| TestError::CompareRead {
            path: a.clone(),
            source,
        })?;
        let right = fs::read(b).map_err(|source| TestError::CompareRead {
            path: b.clone(),
            source,
        })?;
        if left != right {
            return Err(TestError::FileMismatch {
                a: a.clone(),
                b: b.clone(),
            });
        }
    }

    // No existence guard: a missing target is a test failure in its own right
    for path in &config.remove {
        fs::remove_file(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                TestError::CleanupMissing(path.clone())
            } else {
                TestError::Cleanup {
                    path: path.clone(),
                    source,
                }
            }
        })?;
    }

    Ok(())
}

/// Run a fixture whose command is expected to exit non-zero.
///
/// A zero exit is the only fatal outcome here. The output comparison is
/// informational, and `file_eq`/`remove` are deliberately not evaluated.
pub fn run_failing_test(config: &TestConfig) -> Result<(), TestError> {
    let output = spawn(config)?;

    if output.status.success() {
        return Err(TestError::UnexpectedSuccess);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let actual = split_output(&stdout);

    if actual == config.out {
        ui::dim("output matches expectations");
    } else {
        ui::warn(&format!(
            "output differs from expectations (informational): expected {:?}, got {:?}",
            config.out, actual
        ));
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        ui::dim(&format!("stderr: {}", stderr.trim_end()));
    }

    Ok(())
}

/// Spawn the fixture's run command through the shell, blocking until exit
fn spawn(config: &TestConfig) -> Result<Output, TestError> {
    let command = config
        .run
        .as_deref()
        .ok_or_else(|| TestError::MissingRun(config.filepath.clone()))?;

    Ok(Command::new("sh").arg("-c").arg(command).output()?)
}

/// Split captured stdout into comparison lines.
///
/// Trailing whitespace is trimmed first; the split always yields at least one
/// element, so a silent program produces `[""]`, not an empty vector.
fn split_output(stdout: &str) -> Vec<String> {
    stdout.trim_end().split('\n').map(str::to_string).collect()
}
