//! `fixtest run` — execute a fixture suite
//!
//! All aggregation and continue-past-failure logic lives here; the executors
//! themselves only ever report a single test's outcome.

use crate::config::HarnessConfig;
use crate::loader;
use crate::runner;
use crate::util::ui;
use anyhow::{bail, Result};
use serde::Serialize;
use std::path::Path;

/// Machine-readable run summary for `--json`
#[derive(Debug, Serialize)]
struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
    failures: Vec<Failure>,
}

#[derive(Debug, Serialize)]
struct Failure {
    name: String,
    error: String,
}

pub fn run(
    dir: &Path,
    program: Option<String>,
    ext: Option<String>,
    expect_fail: bool,
    json: bool,
) -> Result<()> {
    let settings = HarnessConfig::resolve(dir, program, ext)?;

    // A bare program name must be resolvable before any fixture runs
    if let Some(program) = &settings.program {
        if !program.contains('/') && which::which(program).is_err() {
            bail!("program under test '{}' not found in PATH", program);
        }
    }

    let (configs, names) = loader::load_configs(dir, &settings)?;

    if configs.is_empty() {
        ui::warn(&format!(
            "no .{} fixtures found under {}",
            settings.extension,
            dir.display()
        ));
    }

    let total = configs.len();
    let mut failures = Vec::new();

    for (config, name) in configs.iter().zip(&names) {
        let result = if expect_fail {
            runner::run_failing_test(config)
        } else {
            runner::run_test(config)
        };

        match result {
            Ok(()) => ui::success(name),
            Err(e) => {
                ui::error(&format!("{}: {}", name, e));
                failures.push(Failure {
                    name: name.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    let summary = Summary {
        total,
        passed: total - failures.len(),
        failed: failures.len(),
        failures,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        ui::info(&format!(
            "{} passed, {} failed ({} total)",
            summary.passed, summary.failed, summary.total
        ));
    }

    if summary.failed > 0 {
        bail!("{} of {} test(s) failed", summary.failed, summary.total);
    }

    Ok(())
}
