// tsconv-cli/src/lib.rs
//
// Library portion of the tsconv CLI application.
// Contains argument definitions, command logic and the interactive menu.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, EdlArgs, InputKind, ListArgs, YoutubeArgs};
pub use commands::edl::run_edl;
pub use commands::list::run_list;
pub use commands::youtube::run_youtube;
pub use error::{CliResult, FileAction, FileContext};
