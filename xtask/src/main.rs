mod cmd;
mod fs;
mod repo;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy).
    Preflight,
    /// Fail when any Rust file under src/ exceeds the line ceiling.
    LocGuard {
        /// Repository root to check (defaults to the enclosing repository)
        #[arg(long, value_name = "PATH")]
        root: Option<PathBuf>,
        /// Maximum lines allowed per file
        #[arg(long, default_value_t = cmd::loc_guard::DEFAULT_MAX_LINES)]
        max: usize,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => {
            cmd::preflight::run()?;
        }
        Command::LocGuard { root, max } => {
            let root = match root {
                Some(root) => root,
                None => repo::repo_root()?,
            };
            cmd::loc_guard::run(&root, max)?;
        }
    }
    Ok(())
}
