//! Implementation of the 'youtube' subcommand.
//!
//! Reads a Resolve marker EDL, shows the markers found and writes them as a
//! YouTube chapter list after confirmation.

use crate::cli::YoutubeArgs;
use crate::error::{CliResult, FileAction, FileContext};
use crate::prompt::Prompt;
use crate::terminal;

use std::io::{BufRead, Write};

use tsconv_core::{CoreError, ReadConfig, TargetFormat, WriteOptions};

/// Runs the youtube command, reading answers from `input` and writing to `output`.
pub fn run_youtube<R: BufRead, W: Write>(args: YoutubeArgs, input: R, output: W) -> CliResult<()> {
    let mut prompt = Prompt::new(input, output);
    prompt.say(&terminal::heading("EDL to YouTube timestamps converter"))?;

    let markers = tsconv_core::read(&args.input_path, &ReadConfig::edl())
        .for_file(FileAction::Read, &args.input_path)?;
    prompt.say(&format!(
        "Timestamp file {} parsed successfully.",
        args.input_path.display()
    ))?;

    prompt.say(&format!("\nTimestamp file has {} timestamps\n", markers.len()))?;
    prompt.say("Available Timestamps:")?;
    for (i, timestamp) in markers.iter().enumerate() {
        prompt.say(&terminal::marker(i + 1, timestamp))?;
    }

    let output_path =
        super::output_path_for(&args.input_path, args.output_path.clone(), TargetFormat::YouTube)?;

    let aborted = || CoreError::OperationFailed("Conversion aborted".to_string());
    if !args.yes {
        prompt.say(&format!(
            "Will convert to file {}",
            terminal::emphasis(&output_path.display().to_string())
        ))?;
        if !prompt.confirm("Is that okay?")? {
            return Err(aborted());
        }
        if output_path.exists()
            && !prompt.confirm(&format!(
                "File {} already exists, overwrite?",
                output_path.display()
            ))?
        {
            return Err(aborted());
        }
    }

    // Any existing file has been confirmed for replacement by now.
    let options = WriteOptions::youtube().overwrite(true);
    tsconv_core::write(&markers, &output_path, &options)
        .for_file(FileAction::Write, &output_path)?;

    prompt.say(&terminal::success(&format!(
        "Generated YouTube Timestamp file {}",
        output_path.display()
    )))?;
    prompt.say("\nCheers, enjoy your day\n")?;
    Ok(())
}
