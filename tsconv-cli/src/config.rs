// tsconv-cli/src/config.rs
//
// Defines default configuration constants for the `tsconv-cli` application,
// primarily related to the interactive prompts.

/// Number of color names printed per line in the color picker.
pub const COLORS_PER_LINE: usize = 4;

/// Answer that cancels any prompt offering it.
pub const CANCEL_KEY: &str = "Q";
