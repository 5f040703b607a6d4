use super::theme::Aurora;
use auroralog_core::{
    Entry,
    render::{TAGS_MARKER, format_entry_block, format_header, format_tags_line},
};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

pub struct Renderer {
    skin: MadSkin,
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        Self {
            skin: Aurora::default_skin(),
            use_color,
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    /// Untouched text, for output meant to be piped.
    pub fn print_plain(&self, text: &str) {
        println!("{text}");
    }

    pub fn print_info(&self, message: &str) {
        if self.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_months(&self, months: &[String]) {
        for month in months {
            if self.use_color {
                println!("{}", month.clone().with(Color::Cyan));
            } else {
                println!("{month}");
            }
        }
    }

    /// Prints each entry as its stored block followed by a blank line.
    pub fn print_entries(&self, entries: &[Entry]) {
        for entry in entries {
            if self.use_color {
                self.print_md(&colored_block(entry));
            } else {
                println!("{}", format_entry_block(entry));
            }
        }
    }
}

fn colored_block(entry: &Entry) -> String {
    let header = format_header(entry);
    let tags = format_tags_line(&entry.tags);
    let tags = tags.strip_prefix(TAGS_MARKER).unwrap_or(&tags).trim();
    format!("{header}\n**{TAGS_MARKER}** `{tags}`\n{}\n\n", entry.body.trim())
}
