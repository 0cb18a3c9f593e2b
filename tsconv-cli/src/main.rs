// tsconv-cli/src/main.rs
//
// Entry point for the tsconv command-line tool.
//
// Responsibilities include:
// - Parsing user-provided arguments.
// - Setting up console logging.
// - Dispatching to the 'edl', 'youtube' and 'list' commands.
// - Managing process exit codes based on success or failure.

use clap::Parser;
use log::debug;
use std::io;
use std::process;
use tsconv_cli::{Cli, Commands, CliResult, logging, run_edl, run_list, run_youtube, terminal};

fn run(cli: Cli) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match cli.command {
        Commands::Edl(args) => run_edl(args, stdin.lock(), stdout.lock()),
        Commands::Youtube(args) => run_youtube(args, stdin.lock(), stdout.lock()),
        Commands::List(args) => run_list(args, stdout.lock()),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!("Parsed arguments: {:?}", cli);

    if let Err(e) = run(cli) {
        eprintln!("{}", terminal::error(&format!("Error: {}", e)));
        process::exit(1);
    }
}
