// ============================================================================
// tsconv-core/src/writer/edl.rs
// ============================================================================
//
// EDL WRITER: Markers to a Resolve-Importable Edit Decision List
//
// Each marker becomes a one-frame video event (in at frame 0, out at frame 1)
// followed by its detail line. Field widths and literal tokens must match
// what Resolve expects byte for byte.
//
// AI-ASSISTANT-INFO: EDL marker list serializer

use crate::classify::{EdlLine, classify_edl_line};
use crate::collection::TimestampCollection;
use crate::config::EDL_FCM;
use crate::timecode::format_timecode;
use crate::timestamp::{RESOLVE_COLOR_PREFIX, Timestamp};
use log::warn;

fn event_line(ordinal: usize, timestamp: &Timestamp) -> String {
    let start = format_timecode(timestamp.time_seconds, 0);
    let end = format_timecode(timestamp.time_seconds, 1);
    format!("{ordinal:03}  001      V     C         {start} {end} {start} {end}")
}

fn detail_line(timestamp: &Timestamp) -> String {
    format!(
        " |C:{}{} |M:{} |D:1",
        RESOLVE_COLOR_PREFIX, timestamp.color, timestamp.name
    )
}

/// Renders the EDL document for `collection` under `title`.
#[must_use]
pub fn render_edl(collection: &TimestampCollection, title: &str) -> String {
    let mut out = format!("TITLE: {title}\nFCM: {EDL_FCM}\n\n");

    for (index, timestamp) in collection.iter().enumerate() {
        let details = detail_line(timestamp);
        if !matches!(classify_edl_line(&details), EdlLine::Detail { .. }) {
            warn!(
                "Marker name '{}' contains characters that cannot be read back from an EDL",
                timestamp.name
            );
        }
        out.push_str(&event_line(index + 1, timestamp));
        out.push('\n');
        out.push_str(&details);
        out.push_str("\n\n");
    }
    out
}
