use super::{
    CliModeResult,
    editor_utils::{create_editor_buffer, resolve_editor},
};
use crate::{Cli, render::Renderer};
use anyhow::{Context, Result};
use auroralog_core::{Entry, Journal, entry::parse_tags, prompts::starter};
use std::io::{self, IsTerminal, Read};

pub fn write_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    let input = match cli.content.as_deref().filter(|c| !c.is_empty()) {
        Some(content) => content.to_string(),
        None if cli.editor => {
            let editor = resolve_editor(journal.config.editor.as_deref());
            create_editor_buffer(&editor)?
        }
        None => read_stdin()?,
    };

    let body = match input.trim() {
        "" => starter(
            &mut rand::thread_rng(),
            cli.prompt_mood.as_deref(),
            journal.config.prompt_suggestions,
        ),
        text => text.to_string(),
    };
    let tags = cli.tags.as_deref().map(parse_tags).unwrap_or_default();
    let entry = Entry::new(cli.target_timestamp(), body, tags);

    let path = journal.append(&entry)?;
    renderer.print_info(&format!("Saved entry to {}", path.display()));
    Ok(CliModeResult::Finish)
}

fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Write your entry, then press Ctrl-D to save.");
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("reading entry from standard input")?;
    Ok(buf)
}
