//! Serializers rendering a timestamp collection as EDL or YouTube chapters.

pub mod edl;
pub mod youtube;

pub use edl::render_edl;
pub use youtube::render_youtube;

use crate::collection::TimestampCollection;
use crate::config::{TargetFormat, WriteOptions};
use crate::error::CoreResult;
use std::io::Write;

/// Renders `collection` in the format selected by `options`.
#[must_use]
pub fn render(collection: &TimestampCollection, options: &WriteOptions) -> String {
    match options.target {
        TargetFormat::Edl => render_edl(collection, &options.title),
        TargetFormat::YouTube => render_youtube(collection),
    }
}

/// Renders `collection` and writes it to `out`.
pub fn write_to<W: Write>(
    out: &mut W,
    collection: &TimestampCollection,
    options: &WriteOptions,
) -> CoreResult<()> {
    out.write_all(render(collection, options).as_bytes())?;
    out.flush()?;
    Ok(())
}
