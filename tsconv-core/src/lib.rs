//! Core library for converting video marker logs between text formats.
//!
//! This crate reads InfoWriter event logs and Resolve marker EDLs into a
//! [`TimestampCollection`], offers the mutations an editor needs before export
//! (rename, recolor, group recolor, time shift, insert, delete), and writes the
//! collection back out as an EDL or a YouTube chapter list.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use tsconv_core::{ReadConfig, WriteOptions, MarkerColor};
//! use std::path::Path;
//!
//! let input = Path::new("/path/to/infowriter.txt");
//! let mut markers = tsconv_core::read(input, &ReadConfig::infowriter()).unwrap();
//! markers.set_group_color("Goal", MarkerColor::Green).unwrap();
//! markers.shift_all(30).unwrap();
//!
//! let output = input.with_extension("edl");
//! tsconv_core::write(&markers, &output, &WriteOptions::edl("My Stream")).unwrap();
//! ```

pub mod classify;
pub mod collection;
pub mod config;
pub mod error;
pub mod reader;
pub mod timecode;
pub mod timestamp;
pub mod writer;

// Re-exports for public API
pub use collection::TimestampCollection;
pub use config::{ReadConfig, ReadConfigBuilder, SourceFormat, TargetFormat, WriteOptions};
pub use error::{CoreError, CoreResult};
pub use timecode::{format_clock, format_clock_padded, format_timecode, parse_clock, parse_signed_clock};
pub use timestamp::{MarkerColor, Timestamp};

use log::{info, warn};
use reader::{EdlReader, InfoWriterReader, read_markers};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

/// Reads the marker file at `path` according to `config`.
pub fn read(path: &Path, config: &ReadConfig) -> CoreResult<TimestampCollection> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CoreError::InputNotFound(path.to_path_buf()),
        _ => CoreError::Io(e),
    })?;
    let input = BufReader::new(file);

    let collection = match config.source {
        SourceFormat::InfoWriter => read_markers(input, InfoWriterReader::new(config))?,
        SourceFormat::Edl => read_markers(input, EdlReader::new())?,
    };
    info!(
        "Parsed {} timestamps ({} names) from {}",
        collection.len(),
        collection.group_count(),
        path.display()
    );
    Ok(collection)
}

/// Writes `collection` to `path` according to `options`.
///
/// Without `options.overwrite` an existing destination is left untouched and
/// [`CoreError::OutputExists`] is returned.
pub fn write(collection: &TimestampCollection, path: &Path, options: &WriteOptions) -> CoreResult<()> {
    let mut open = OpenOptions::new();
    open.write(true);
    if options.overwrite {
        if path.exists() {
            warn!("Replacing existing file {}", path.display());
        }
        open.create(true).truncate(true);
    } else {
        open.create_new(true);
    }

    let file = open.open(path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => CoreError::OutputExists(path.to_path_buf()),
        _ => CoreError::Io(e),
    })?;

    let mut out = BufWriter::new(file);
    writer::write_to(&mut out, collection, options)?;
    info!("Wrote {} timestamps to {}", collection.len(), path.display());
    Ok(())
}
