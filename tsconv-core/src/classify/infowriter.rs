// ============================================================================
// tsconv-core/src/classify/infowriter.rs
// ============================================================================
//
// INFOWRITER CLASSIFIER: Line Roles in an InfoWriter Event Log
//
// An InfoWriter log interleaves event lines (`EVENT:` / `HOTKEY:`) with the
// clock lines that locate the event in the recording and in the stream:
//
//   EVENT:Big Save @ 2024-01-01 10:00:00
//   0:15:30 Record Time Marker
//   0:16:02 Stream Time Marker
//
// Rules are checked in order and the first match wins.
//
// AI-ASSISTANT-INFO: Pure classifier for InfoWriter log lines

use once_cell::sync::Lazy;
use regex::Regex;

static EVENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^EVENT:(.+) @ (.+)$").expect("valid EVENT pattern"));

static HOTKEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^HOTKEY:(.+) @ (.+)$").expect("valid HOTKEY pattern"));

static MARKER_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d:\d\d:\d\d (.*) Time.*$").expect("valid marker time pattern"));

/// Name and wall-clock capture of an `EVENT:` or `HOTKEY:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLabel<'a> {
    pub name: &'a str,
    pub date_time: &'a str,
}

/// Structural role of one InfoWriter log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoWriterLine<'a> {
    Empty,
    /// `EVENT:` line; `None` when the payload lacks the ` @ ` separator.
    Event(Option<EventLabel<'a>>),
    /// `HOTKEY:` line; `None` when the payload lacks the ` @ ` separator.
    Hotkey(Option<EventLabel<'a>>),
    /// Clock line measured from the start of the recording.
    RecordTime { clock: &'a str },
    /// Clock line measured from the start of the stream.
    StreamTime { clock: &'a str },
    Unknown,
}

fn event_label<'a>(re: &Regex, line: &'a str) -> Option<EventLabel<'a>> {
    let caps = re.captures(line)?;
    Some(EventLabel {
        name: caps.get(1)?.as_str(),
        date_time: caps.get(2)?.as_str(),
    })
}

/// Classifies a single InfoWriter log line.
#[must_use]
pub fn classify_infowriter_line(line: &str) -> InfoWriterLine<'_> {
    if line.is_empty() {
        return InfoWriterLine::Empty;
    }
    if line.starts_with("EVENT:") {
        return InfoWriterLine::Event(event_label(&EVENT_RE, line));
    }
    if line.starts_with("HOTKEY:") {
        return InfoWriterLine::Hotkey(event_label(&HOTKEY_RE, line));
    }

    let Some(caps) = MARKER_TIME_RE.captures(line) else {
        return InfoWriterLine::Unknown;
    };
    // The pattern guarantees a space after the clock.
    let clock = line.split(' ').next().unwrap_or(line);
    match caps.get(1).map(|m| m.as_str()) {
        Some("Record") => InfoWriterLine::RecordTime { clock },
        Some("Stream") => InfoWriterLine::StreamTime { clock },
        _ => InfoWriterLine::Unknown,
    }
}
