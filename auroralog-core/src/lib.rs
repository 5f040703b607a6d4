pub mod config;
pub mod dates;
pub mod entry;
pub mod error;
pub mod journal;
pub mod parse_entries;
pub mod paths;
pub mod prompts;
pub mod render;

pub use config::Config;
pub use entry::Entry;
pub use error::JournalError;
pub use journal::Journal;
