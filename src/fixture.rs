//! Fixture files and the directive parser
//!
//! A fixture is a test input for the program under test that carries its own
//! expectations as `//`-marked directive lines:
//!
//! ```text
//! // RUN: DEFAULT
//! // CHECK-OUT: hello
//! // CHECK-FILE-EQ: expected.txt actual.txt
//! // REMOVE: actual.txt
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder replaced with the fixture's own path at parse time
pub const PATH_PLACEHOLDER: &str = "%s";

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("failed to read fixture \"{path}\": {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("fixture \"{0}\" is empty")]
    Empty(PathBuf),

    #[error("RUN directive found multiple times in \"{0}\"")]
    DuplicateRun(PathBuf),

    #[error("{directive} in \"{path}\" expects {expected} argument(s), found {found}")]
    MissingArgs {
        directive: &'static str,
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("\"{0}\" uses RUN: DEFAULT but no program under test is configured")]
    NoDefaultCommand(PathBuf),
}

/// Everything a fixture declares about its own test.
///
/// Built by a parse-local accumulator and immutable afterwards; consumed by
/// exactly one executor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfig {
    /// Path the fixture was parsed from (absolute or relative as given)
    pub filepath: PathBuf,
    /// Resolved run command, set by at most one RUN: directive
    pub run: Option<String>,
    /// Expected stdout lines, compared positionally
    pub out: Vec<String>,
    /// Pairs of paths to compare byte-for-byte after a clean run
    pub file_eq: Vec<(String, String)>,
    /// Paths to delete after a clean run, in declaration order
    pub remove: Vec<String>,
}

impl TestConfig {
    /// Parse one fixture file.
    ///
    /// `default_run` is the run-command template used for `RUN: DEFAULT`
    /// (with `%s` standing for the fixture path). It is resolved by the
    /// caller once, before any parsing starts.
    pub fn parse(path: &Path, default_run: Option<&str>) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if content.lines().next().is_none() {
            return Err(FixtureError::Empty(path.to_path_buf()));
        }

        let filepath = path.to_string_lossy().into_owned();

        let mut run: Option<String> = None;
        let mut out: Vec<String> = Vec::new();
        let mut file_eq: Vec<(String, String)> = Vec::new();
        let mut remove: Vec<String> = Vec::new();

        for line in content.lines() {
            // Single-space tokenization; the placeholder is substituted
            // before keyword dispatch so directives can refer to the
            // fixture itself.
            let tokens: Vec<String> = line
                .trim()
                .split(' ')
                .map(|token| {
                    if token == PATH_PLACEHOLDER {
                        filepath.clone()
                    } else {
                        token.to_string()
                    }
                })
                .collect();

            // Only comment lines carry directives
            if tokens[0] != "//" {
                continue;
            }

            // A bare "//" is an ordinary comment
            let Some(keyword) = tokens.get(1) else {
                continue;
            };

            match keyword.as_str() {
                "RUN:" => {
                    if run.is_some() {
                        return Err(FixtureError::DuplicateRun(path.to_path_buf()));
                    }
                    let args = &tokens[2..];
                    match args.first().map(String::as_str) {
                        None => {
                            return Err(FixtureError::MissingArgs {
                                directive: "RUN:",
                                path: path.to_path_buf(),
                                expected: 1,
                                found: 0,
                            })
                        }
                        Some("DEFAULT") => {
                            let template = default_run
                                .ok_or_else(|| FixtureError::NoDefaultCommand(path.to_path_buf()))?;
                            run = Some(template.replace(PATH_PLACEHOLDER, &filepath));
                        }
                        Some(_) => run = Some(args.join(" ")),
                    }
                }
                "CHECK-OUT:" => out.push(tokens[2..].join(" ")),
                "CHECK-FILE-EQ:" => {
                    if tokens.len() < 4 {
                        return Err(FixtureError::MissingArgs {
                            directive: "CHECK-FILE-EQ:",
                            path: path.to_path_buf(),
                            expected: 2,
                            found: tokens.len() - 2,
                        });
                    }
                    file_eq.push((tokens[2].clone(), tokens[3].clone()));
                }
                "REMOVE:" => {
                    if tokens.len() < 3 {
                        return Err(FixtureError::MissingArgs {
                            directive: "REMOVE:",
                            path: path.to_path_buf(),
                            expected: 1,
                            found: 0,
                        });
                    }
                    remove.push(tokens[2].clone());
                }
                // Unknown keywords are ignored for forward compatibility
                _ => {}
            }
        }

        Ok(TestConfig {
            filepath: path.to_path_buf(),
            run,
            out,
            file_eq,
            remove,
        })
    }
}
