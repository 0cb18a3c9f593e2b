//! Implementation of the 'list' subcommand.

use crate::cli::{InputKind, ListArgs};
use crate::error::{CliResult, FileAction, FileContext};
use crate::terminal;

use std::io::Write;

use tsconv_core::{CoreError, ReadConfigBuilder, SourceFormat, Timestamp};

/// Reads the input file and prints its markers to `output`.
pub fn run_list<W: Write>(args: ListArgs, mut output: W) -> CliResult<()> {
    let kind = args
        .from
        .unwrap_or_else(|| InputKind::guess(&args.input_path));
    let source = SourceFormat::from(kind);
    let config = ReadConfigBuilder::new()
        .source(source)
        .use_stream_markers(args.stream)
        .include_date_time(args.full)
        .build();
    let markers = tsconv_core::read(&args.input_path, &config)
        .for_file(FileAction::Read, &args.input_path)?;

    if args.json {
        let list: Vec<&Timestamp> = markers.iter().collect();
        let json = serde_json::to_string_pretty(&list).map_err(|e| {
            CoreError::OperationFailed(format!("Failed to serialise timestamps: {}", e))
        })?;
        writeln!(output, "{}", json)?;
        return Ok(());
    }

    for (i, timestamp) in markers.iter().enumerate() {
        let line = match source {
            SourceFormat::InfoWriter => terminal::marker_with_color(i + 1, timestamp),
            SourceFormat::Edl => terminal::marker(i + 1, timestamp),
        };
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
