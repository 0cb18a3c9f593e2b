// tsconv-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tsconv_core::SourceFormat;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "tsconv: Video marker conversion tool",
    long_about = "Converts InfoWriter event logs to DaVinci Resolve marker EDLs, \
                  and Resolve marker EDLs to YouTube chapter lists."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Converts an InfoWriter log to a Resolve marker EDL, with an interactive
    /// editing menu unless --yes is given
    Edl(EdlArgs),
    /// Converts a Resolve marker EDL to a YouTube chapter list
    Youtube(YoutubeArgs),
    /// Prints the markers found in an InfoWriter log or EDL
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct EdlArgs {
    /// InfoWriter log file
    #[arg(required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Optional: EDL to write (defaults to INPUT_PATH with an .edl extension)
    #[arg(short, long = "output", value_name = "OUTPUT_PATH")]
    pub output_path: Option<PathBuf>,

    /// Use stream markers instead of record markers
    #[arg(short, long)]
    pub stream: bool,

    /// Append each event's date and time to the marker name
    #[arg(short, long)]
    pub full: bool,

    /// Optional: Title written on top of the EDL (asked for when omitted)
    #[arg(short, long, value_name = "TITLE", env = "TSCONV_TITLE")]
    pub title: Option<String>,

    /// Convert straight away without the menu, overwriting any existing output
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Parser, Debug)]
pub struct YoutubeArgs {
    /// EDL marker file
    #[arg(required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Optional: Chapter list to write (defaults to INPUT_PATH with a .txt extension)
    #[arg(short, long = "output", value_name = "OUTPUT_PATH")]
    pub output_path: Option<PathBuf>,

    /// Skip confirmations, overwriting any existing output
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// InfoWriter log or EDL file
    #[arg(required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Optional: Input format (guessed from the extension when omitted)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub from: Option<InputKind>,

    /// Use stream markers instead of record markers (InfoWriter only)
    #[arg(short, long)]
    pub stream: bool,

    /// Append each event's date and time to the marker name (InfoWriter only)
    #[arg(short, long)]
    pub full: bool,

    /// Print the markers as JSON
    #[arg(long)]
    pub json: bool,
}

/// Input formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputKind {
    Infowriter,
    Edl,
}

impl InputKind {
    /// Files ending in `.edl` are EDLs, anything else is an InfoWriter log.
    pub fn guess(path: &Path) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(tsconv_core::config::EDL_EXTENSION))
        {
            InputKind::Edl
        } else {
            InputKind::Infowriter
        }
    }
}

impl From<InputKind> for SourceFormat {
    fn from(kind: InputKind) -> Self {
        match kind {
            InputKind::Infowriter => SourceFormat::InfoWriter,
            InputKind::Edl => SourceFormat::Edl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edl_basic_args() {
        let cli = Cli::parse_from(["tsconv", "edl", "session.txt"]);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Edl(args) => {
                assert_eq!(args.input_path, PathBuf::from("session.txt"));
                assert!(args.output_path.is_none());
                assert!(!args.stream);
                assert!(!args.full);
                assert!(!args.yes);
            }
            other => panic!("Expected Edl command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_edl_all_flags() {
        let cli = Cli::parse_from([
            "tsconv", "-v", "edl", "in.txt", "-o", "out.edl", "-s", "-f", "-t", "My Stream", "-y",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Edl(args) => {
                assert_eq!(args.output_path, Some(PathBuf::from("out.edl")));
                assert!(args.stream);
                assert!(args.full);
                assert_eq!(args.title.as_deref(), Some("My Stream"));
                assert!(args.yes);
            }
            other => panic!("Expected Edl command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_youtube_and_list() {
        let cli = Cli::parse_from(["tsconv", "youtube", "markers.edl", "--yes"]);
        assert!(matches!(cli.command, Commands::Youtube(ref a) if a.yes));

        let cli = Cli::parse_from(["tsconv", "list", "markers.log", "--from", "edl", "--json"]);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.from, Some(InputKind::Edl));
                assert!(args.json);
            }
            other => panic!("Expected List command, got {:?}", other),
        }
    }

    #[test]
    fn test_guess_input_kind() {
        assert_eq!(InputKind::guess(Path::new("a.EDL")), InputKind::Edl);
        assert_eq!(InputKind::guess(Path::new("a.txt")), InputKind::Infowriter);
        assert_eq!(InputKind::guess(Path::new("noext")), InputKind::Infowriter);
    }
}
