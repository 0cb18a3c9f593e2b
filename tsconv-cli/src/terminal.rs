// ============================================================================
// tsconv-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Styling for Menus, Listings and Status Lines
//
// Helpers here return strings instead of printing so that the interactive
// menu can write them to any `Write` sink. Color is applied only when the
// terminal supports it (console decides, honouring NO_COLOR/CLICOLOR).
//
// AI-ASSISTANT-INFO: Terminal UI styling helpers for the CLI

use owo_colors::OwoColorize;
use tsconv_core::{MarkerColor, Timestamp};

/// Styling constants for terminal output
pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const ERROR_SYMBOL: &str = "✗";

    // Section formatting
    pub const SECTION_PREFIX: &str = "=== ";
    pub const SECTION_SUFFIX: &str = " ===";
    pub const MENU_SEPARATOR: &str = "========";

    // Indentation
    pub const ITEM_INDENT: &str = "  ";
}

fn colors() -> bool {
    console::colors_enabled()
}

/// Section heading, e.g. `=== InfoWriter log to EDL converter ===`.
pub fn heading(text: &str) -> String {
    let line = format!("{}{}{}", styling::SECTION_PREFIX, text, styling::SECTION_SUFFIX);
    if colors() {
        line.bold().cyan().to_string()
    } else {
        line
    }
}

pub fn success(text: &str) -> String {
    let line = format!("{} {}", styling::SUCCESS_SYMBOL, text);
    if colors() {
        line.green().to_string()
    } else {
        line
    }
}

pub fn error(text: &str) -> String {
    let line = format!("{} {}", styling::ERROR_SYMBOL, text);
    if colors() {
        line.bright_red().bold().to_string()
    } else {
        line
    }
}

/// Emphasised inline value such as a path or a count.
pub fn emphasis(text: &str) -> String {
    if colors() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// Numbered listing entry, `  3. <text>`.
pub fn numbered(ordinal: usize, text: &str) -> String {
    format!("{}{}. {}", styling::ITEM_INDENT, ordinal, text)
}

/// Listing line for the EDL workflow, which shows colors.
pub fn marker_with_color(ordinal: usize, timestamp: &Timestamp) -> String {
    numbered(ordinal, &timestamp.describe_with_color())
}

/// Listing line for the chapter workflow.
pub fn marker(ordinal: usize, timestamp: &Timestamp) -> String {
    numbered(ordinal, &timestamp.to_string())
}

/// The palette laid out `per_line` names to a row.
pub fn palette_rows(per_line: usize) -> Vec<String> {
    MarkerColor::ALL
        .chunks(per_line.max(1))
        .map(|row| {
            let names: Vec<&str> = row.iter().map(|c| c.name()).collect();
            format!("{}{}", styling::ITEM_INDENT, names.join(", "))
        })
        .collect()
}
