use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fixtest")]
#[command(about = "Directive-driven test harness for external programs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every fixture in a suite directory
    Run {
        /// Suite directory to scan for fixtures
        dir: PathBuf,

        /// Program under test (overrides fixtest.toml and FIXTEST_BIN)
        #[arg(long)]
        program: Option<String>,

        /// Fixture file extension (default: test)
        #[arg(long)]
        ext: Option<String>,

        /// Expect every fixture's command to exit non-zero
        #[arg(long)]
        expect_fail: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List discovered fixtures without running them
    List {
        /// Suite directory to scan for fixtures
        dir: PathBuf,

        /// Fixture file extension (default: test)
        #[arg(long)]
        ext: Option<String>,
    },
}

pub mod list;
pub mod run;
