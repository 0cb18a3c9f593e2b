//! YouTube chapter list writer: one `<clock> <name>` line per marker.

use crate::collection::TimestampCollection;
use crate::timecode::format_clock;

/// Renders the chapter list, hour omitted when zero. No header or footer.
#[must_use]
pub fn render_youtube(collection: &TimestampCollection) -> String {
    let mut out = String::new();
    for timestamp in collection.iter() {
        out.push_str(&format_clock(timestamp.time_seconds));
        out.push(' ');
        out.push_str(&timestamp.name);
        out.push('\n');
    }
    out
}
