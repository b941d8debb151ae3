//! Binary execution for integration tests

use super::Suite;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Result of running the fixtest binary
#[derive(Debug)]
pub struct RunResult {
    /// Exit code (0 = success)
    pub exit_code: i32,
    /// Standard output as string
    pub stdout: String,
    /// Standard error as string
    pub stderr: String,
}

impl RunResult {
    /// Check if command succeeded (exit code 0)
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Check if stdout contains a substring
    pub fn stdout_contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }

    /// Combined output (stdout + stderr)
    pub fn output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Check if combined output contains a substring
    pub fn output_contains(&self, needle: &str) -> bool {
        self.output().contains(needle)
    }
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Run the fixtest binary inside a suite directory
pub fn fixtest(suite: &Suite, args: &[&str]) -> RunResult {
    fixtest_with_env(suite, args, HashMap::new())
}

/// Run fixtest with custom environment variables
pub fn fixtest_with_env(
    suite: &Suite,
    args: &[&str],
    env: HashMap<String, String>,
) -> RunResult {
    let binary = PathBuf::from(env!("CARGO_BIN_EXE_fixtest"));

    let mut cmd = Command::new(&binary);
    cmd.current_dir(&suite.path);
    cmd.args(args);

    // Keep the ambient program-under-test out of the tests
    cmd.env_remove("FIXTEST_BIN");

    for (key, value) in env {
        cmd.env(&key, &value);
    }

    let output = cmd.output().expect("Failed to execute fixtest");
    RunResult::from(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_result_success() {
        let result = RunResult {
            exit_code: 0,
            stdout: "output".to_string(),
            stderr: "".to_string(),
        };
        assert!(result.success());
    }

    #[test]
    fn run_result_failure() {
        let result = RunResult {
            exit_code: 1,
            stdout: "".to_string(),
            stderr: "error".to_string(),
        };
        assert!(!result.success());
    }

    #[test]
    fn run_result_contains() {
        let result = RunResult {
            exit_code: 0,
            stdout: "hello world".to_string(),
            stderr: "warning message".to_string(),
        };
        assert!(result.stdout_contains("hello"));
        assert!(result.output_contains("warning"));
    }
}
