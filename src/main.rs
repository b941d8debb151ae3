mod cli;
mod config;
mod fixture;
mod loader;
mod runner;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        util::ui::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            dir,
            program,
            ext,
            expect_fail,
            json,
        } => cli::run::run(&dir, program, ext, expect_fail, json),
        Commands::List { dir, ext } => cli::list::run(&dir, ext),
    }
}
