mod cli_modes;
mod logging;
mod render;

use anyhow::Result;
use auroralog_core::{Config, Journal, dates::parse_timestamp};
use chrono::{Local, NaiveDateTime, Timelike};
use clap::Parser;
use cli_modes::{CliModeResult, months_mode, path_mode, review_mode, write_mode};
use render::{ColorMode, Renderer};
use std::{path::PathBuf, process::ExitCode};

/// auroralog — Lightweight CLI for capturing daily reflections
#[derive(Parser, Debug)]
#[command(name = "auroralog", version, about)]
pub struct Cli {
    /// ISO date or date-time for the entry (defaults to now), e.g. `2024-03-05` or `2024-03-05T08:00`
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDateTime>,
    /// Comma-separated tags to describe the entry mood or topic (e.g. `--tags "calm, outside"`)
    #[arg(long)]
    pub tags: Option<String>,
    /// Try to align the auto prompt to this mood descriptor
    #[arg(long)]
    pub prompt_mood: Option<String>,
    /// Direct text for the entry; falls back to $EDITOR with `--editor`, or STDIN
    #[arg(long)]
    pub content: Option<String>,
    /// Write the entry in $EDITOR instead of reading STDIN
    #[arg(long, short, conflicts_with = "content")]
    pub editor: bool,
    /// Print the entries for the targeted month instead of writing a new one
    #[arg(long, conflicts_with_all = ["tags", "prompt_mood", "content", "editor"])]
    pub review: bool,
    /// List the months that have journal files
    #[arg(long, conflicts_with_all = ["date", "tags", "prompt_mood", "content", "editor", "review"])]
    pub months: bool,
    /// Prints the journal root directory
    #[arg(long, short, conflicts_with_all = ["date", "tags", "prompt_mood", "content", "editor", "review", "months"])]
    pub path: bool,
    /// Journal root directory, overriding the config file
    #[arg(long, env = "AURORALOG_DIR")]
    pub root: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Log what the journal is doing to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Timestamp targeted by this invocation: `--date`, or now to the second.
    pub fn target_timestamp(&self) -> NaiveDateTime {
        self.date.unwrap_or_else(|| {
            let now = Local::now().naive_local();
            now.with_nanosecond(0).unwrap_or(now)
        })
    }
}

fn parse_date_arg(s: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(s).ok_or_else(|| format!("'{s}' is not an ISO date (YYYY-MM-DD[THH:MM[:SS]])"))
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("auroralog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let mut config = Config::load()?;
    if let Some(root) = &cli.root {
        config = config.with_journal_dir(root.clone());
    }
    let journal = Journal::with_config(config)?;
    let renderer = Renderer::new(cli.color.enabled());

    for mode in [path_mode, months_mode, review_mode, write_mode] {
        if let CliModeResult::Finish = mode(&cli, &renderer, &journal)? {
            break;
        }
    }
    Ok(())
}
