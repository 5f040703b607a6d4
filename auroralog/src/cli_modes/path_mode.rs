use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use auroralog_core::Journal;

pub fn path_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if !cli.path {
        return Ok(CliModeResult::NothingToDo);
    }
    renderer.print_plain(&journal.config.journal_dir.display().to_string());
    Ok(CliModeResult::Finish)
}
