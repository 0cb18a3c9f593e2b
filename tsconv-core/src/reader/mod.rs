//! Stateful readers turning classified lines into a timestamp collection.
//!
//! Each reader consumes lines one at a time and carries only the state its
//! format needs between lines. The shared driver strips trailing whitespace,
//! numbers lines from 1 and stops at the first error, so a failed read never
//! hands back a partially filled collection.

pub mod edl;
pub mod infowriter;

pub use edl::EdlReader;
pub use infowriter::InfoWriterReader;

use crate::collection::TimestampCollection;
use crate::error::CoreResult;
use crate::timestamp::Timestamp;
use log::debug;
use std::io::BufRead;

/// A line-by-line marker reader for one input format.
pub trait MarkerLineReader {
    /// Consumes one line (trailing whitespace removed) and returns the marker
    /// it completes, if any.
    fn feed(&mut self, line_number: usize, line: &str) -> CoreResult<Option<Timestamp>>;

    /// Called once after the last line.
    fn finish(&mut self) -> CoreResult<()> {
        Ok(())
    }
}

/// Runs `reader` over every line of `input`.
pub fn read_markers<R, L>(input: R, mut reader: L) -> CoreResult<TimestampCollection>
where
    R: BufRead,
    L: MarkerLineReader,
{
    let mut collection = TimestampCollection::new();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let mut text = line.trim_end();
        if index == 0 {
            text = text.strip_prefix('\u{feff}').unwrap_or(text);
        }
        if let Some(timestamp) = reader.feed(index + 1, text)? {
            collection.push(timestamp);
        }
    }
    reader.finish()?;
    debug!("Read {} timestamps", collection.len());
    Ok(collection)
}
