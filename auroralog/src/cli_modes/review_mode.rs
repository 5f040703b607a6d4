use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use auroralog_core::Journal;

pub fn review_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if !cli.review {
        return Ok(CliModeResult::NothingToDo);
    }
    let entries = journal.load(&cli.target_timestamp())?;
    if entries.is_empty() {
        renderer.print_info("No entries for the selected month.");
    } else {
        renderer.print_entries(&entries);
    }
    Ok(CliModeResult::Finish)
}
