use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use auroralog_core::Journal;

pub fn months_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if !cli.months {
        return Ok(CliModeResult::NothingToDo);
    }
    let months = journal.months()?;
    if months.is_empty() {
        renderer.print_info("No journal files yet.");
    } else {
        renderer.print_months(&months);
    }
    Ok(CliModeResult::Finish)
}
