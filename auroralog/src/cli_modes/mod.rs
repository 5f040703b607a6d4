mod cli_mode;
mod editor_utils;
mod months_mode;
mod path_mode;
mod review_mode;
mod write_mode;

pub use cli_mode::CliModeResult;
pub use months_mode::months_mode;
pub use path_mode::path_mode;
pub use review_mode::review_mode;
pub use write_mode::write_mode;
