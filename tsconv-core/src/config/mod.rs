//! Configuration structures for reading and writing marker files.
//!
//! This module provides the options a caller passes to [`crate::read`] and
//! [`crate::write`]: which format to read and how to interpret it, and which
//! format to produce and whether an existing file may be replaced.

mod builder;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use builder::ReadConfigBuilder;

/// Literal frame-count mode written on the second line of every EDL.
pub const EDL_FCM: &str = "NON-DROP FRAME";

/// Extension given to EDL exports when no output path is supplied.
pub const EDL_EXTENSION: &str = "edl";

/// Extension given to YouTube chapter exports when no output path is supplied.
pub const YOUTUBE_EXTENSION: &str = "txt";

/// Input formats the readers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceFormat {
    /// InfoWriter event log.
    #[default]
    InfoWriter,
    /// Resolve marker EDL.
    Edl,
}

/// Output formats the writers produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetFormat {
    /// Resolve marker EDL.
    Edl,
    /// YouTube chapter list.
    YouTube,
}

impl TargetFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Edl => EDL_EXTENSION,
            TargetFormat::YouTube => YOUTUBE_EXTENSION,
        }
    }

    /// Output path next to `input`, with the extension of this format.
    #[must_use]
    pub fn default_output_path(self, input: &Path) -> PathBuf {
        input.with_extension(self.extension())
    }
}

/// Options controlling how an input file is read.
///
/// # Examples
///
/// ```rust
/// use tsconv_core::config::{ReadConfigBuilder, SourceFormat};
///
/// let config = ReadConfigBuilder::new()
///     .source(SourceFormat::InfoWriter)
///     .use_stream_markers(true)
///     .include_date_time(false)
///     .build();
/// assert!(config.use_stream_markers);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadConfig {
    /// Format of the input file
    pub source: SourceFormat,

    /// InfoWriter only: take `Stream Time` lines instead of `Record Time` lines
    pub use_stream_markers: bool,

    /// InfoWriter only: append ` @ <date time>` of the event to marker names
    pub include_date_time: bool,
}

impl ReadConfig {
    /// Configuration for reading an InfoWriter log with default options.
    #[must_use]
    pub fn infowriter() -> Self {
        Self::default()
    }

    /// Configuration for reading an EDL marker list.
    #[must_use]
    pub fn edl() -> Self {
        Self {
            source: SourceFormat::Edl,
            ..Self::default()
        }
    }
}

/// Options controlling how a collection is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Format of the output file
    pub target: TargetFormat,

    /// EDL only: text written after `TITLE:`
    pub title: String,

    /// Replace the output file if it already exists
    pub overwrite: bool,
}

impl WriteOptions {
    #[must_use]
    pub fn edl(title: impl Into<String>) -> Self {
        Self {
            target: TargetFormat::Edl,
            title: title.into(),
            overwrite: false,
        }
    }

    #[must_use]
    pub fn youtube() -> Self {
        Self {
            target: TargetFormat::YouTube,
            title: String::new(),
            overwrite: false,
        }
    }

    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}
