use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use split_confirm::data::StackFile;
use split_confirm::{util, Config, SplitGuard, SplitOutcome, TerminalModalHost};

/// Ask about unsaved commit message edits before splitting a stack.
///
/// Prints `proceed` and exits 0 when the split may go ahead, prints `abort`
/// and exits 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "split-confirm", version)]
struct Cli {
    /// JSON file listing the commits to split and their edit state
    #[arg(long, short = 's')]
    state: PathBuf,

    /// Config file to use instead of ~/.split-confirm/config.toml
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Directory for logs and the default config
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Log to file so the modal owns the terminal
    fs::create_dir_all(util::logs_dir())?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(util::env_filter())
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    split_confirm::ui::install_panic_hook();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let stack = StackFile::load(&cli.state)
        .with_context(|| format!("Could not load stack from {}", cli.state.display()))?;

    let guard = SplitGuard::new(stack.edit_state, TerminalModalHost::new()).with_config(config);
    let outcome = guard.confirm(&stack.commits).await;
    tracing::info!(outcome = ?outcome, "Split confirmation finished");

    if let SplitOutcome::Aborted(e) = &outcome {
        eprintln!("split-confirm: {e}");
    }
    if outcome.proceeds() {
        println!("proceed");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("abort");
        Ok(ExitCode::FAILURE)
    }
}
