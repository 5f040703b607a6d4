use clap::ValueEnum;
use std::io::{self, IsTerminal};

/// `--color` setting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `Auto` turns color off under `NO_COLOR` or when stdout is redirected.
    pub fn enabled(self) -> bool {
        self.resolve(std::env::var_os("NO_COLOR").is_some(), io::stdout().is_terminal())
    }

    fn resolve(self, no_color: bool, stdout_is_tty: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !no_color && stdout_is_tty,
        }
    }
}
