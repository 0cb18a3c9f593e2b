//! Implementation of the 'edl' subcommand.
//!
//! Reads an InfoWriter log, then either opens the interactive editing menu or,
//! with `--yes`, writes the EDL straight away.

use crate::cli::EdlArgs;
use crate::error::{CliResult, FileAction, FileContext};
use crate::menu::EdlSession;
use crate::prompt::Prompt;
use crate::terminal;

use std::io::{BufRead, Write};
use std::path::Path;

use log::info;
use tsconv_core::{ReadConfigBuilder, SourceFormat, TargetFormat, WriteOptions};

/// Title used in batch mode when none is given.
fn default_title(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Runs the edl command, reading answers from `input` and writing to `output`.
pub fn run_edl<R: BufRead, W: Write>(args: EdlArgs, input: R, output: W) -> CliResult<()> {
    let mut prompt = Prompt::new(input, output);
    prompt.say(&terminal::heading("InfoWriter log to EDL converter"))?;

    let config = ReadConfigBuilder::new()
        .source(SourceFormat::InfoWriter)
        .use_stream_markers(args.stream)
        .include_date_time(args.full)
        .build();
    let markers = tsconv_core::read(&args.input_path, &config)
        .for_file(FileAction::Read, &args.input_path)?;
    prompt.say(&format!(
        "Timestamp file {} parsed successfully.",
        args.input_path.display()
    ))?;

    let output_path =
        super::output_path_for(&args.input_path, args.output_path.clone(), TargetFormat::Edl)?;

    if args.yes {
        let title = args.title.unwrap_or_else(|| default_title(&args.input_path));
        info!("Batch conversion of {} timestamps", markers.len());
        let options = WriteOptions::edl(title).overwrite(true);
        tsconv_core::write(&markers, &output_path, &options)
            .for_file(FileAction::Write, &output_path)?;
        prompt.say(&terminal::success(&format!(
            "Generated EDL file {} ({} timestamps)",
            output_path.display(),
            markers.len()
        )))?;
        prompt.say("\nCheers, enjoy your day\n")
    } else {
        EdlSession::new(markers, output_path, args.title, prompt).run()
    }
}
