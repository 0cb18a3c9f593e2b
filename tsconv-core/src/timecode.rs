//! Conversion between whole seconds and the clock strings used by the
//! supported file formats.
//!
//! Three renderings exist: the chapter clock (`MM:SS` or `H:MM:SS`), the
//! padded clock (`HH:MM:SS`) and the EDL timecode (`HH:MM:SS:FF`). Parsing
//! accepts the leading `H:MM:SS` of any string, and the hour-less `MM:SS`
//! form written for YouTube chapters.

use crate::error::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use regex::Regex;

static CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d\d):(\d\d)").expect("valid clock pattern"));

static SHORT_CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d\d)(?:\s|$)").expect("valid short clock pattern"));

fn split_seconds(total_seconds: u64) -> (u64, u64, u64) {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    (hours, minutes, secs)
}

/// Formats seconds as a chapter clock, omitting the hour when it is zero
/// (e.g., 930 -> "15:30", 3725 -> "1:02:05").
#[must_use]
pub fn format_clock(total_seconds: u64) -> String {
    let (hours, minutes, secs) = split_seconds(total_seconds);
    if hours == 0 {
        format!("{minutes:02}:{secs:02}")
    } else {
        format!("{hours}:{minutes:02}:{secs:02}")
    }
}

/// Formats seconds as HH:MM:SS (e.g., 3725 -> "01:02:05").
#[must_use]
pub fn format_clock_padded(total_seconds: u64) -> String {
    let (hours, minutes, secs) = split_seconds(total_seconds);
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats seconds plus a frame offset as an EDL timecode (HH:MM:SS:FF).
#[must_use]
pub fn format_timecode(total_seconds: u64, frame: u8) -> String {
    let (hours, minutes, secs) = split_seconds(total_seconds);
    format!("{hours:02}:{minutes:02}:{secs:02}:{frame:02}")
}

/// Parses the leading clock of `text` into seconds.
///
/// The `H:MM:SS` form is tried first; anything after the seconds (a frame
/// field, a marker description) is ignored. Failing that, a bare `MM:SS`
/// token is accepted.
pub fn parse_clock(text: &str) -> CoreResult<u64> {
    let invalid = || CoreError::InvalidClock(text.to_string());

    if let Some(caps) = CLOCK_RE.captures(text) {
        let hours: u64 = caps[1].parse().map_err(|_| invalid())?;
        let minutes: u64 = caps[2].parse().map_err(|_| invalid())?;
        let secs: u64 = caps[3].parse().map_err(|_| invalid())?;
        return hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60 + secs))
            .ok_or_else(invalid);
    }

    if let Some(caps) = SHORT_CLOCK_RE.captures(text) {
        let minutes: u64 = caps[1].parse().map_err(|_| invalid())?;
        let secs: u64 = caps[2].parse().map_err(|_| invalid())?;
        return minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(secs))
            .ok_or_else(invalid);
    }

    Err(invalid())
}

/// Parses a clock that may carry a leading `-`, returning a signed offset.
pub fn parse_signed_clock(text: &str) -> CoreResult<i64> {
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let seconds = i64::try_from(parse_clock(body)?)
        .map_err(|_| CoreError::InvalidClock(text.to_string()))?;
    Ok(if negative { -seconds } else { seconds })
}
