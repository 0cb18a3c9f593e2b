// ============================================================================
// tsconv-core/src/classify/edl.rs
// ============================================================================
//
// EDL CLASSIFIER: Line Roles in a Resolve Marker EDL
//
// Every marker in the EDL is an event line carrying four timecodes followed
// by a detail line carrying the color, name and duration:
//
//   001  001      V     C         00:01:05:00 00:01:05:01 00:01:05:00 00:01:05:01
//    |C:ResolveColorBlue |M:Intro |D:1
//
// AI-ASSISTANT-INFO: Pure classifier for EDL marker lines

use once_cell::sync::Lazy;
use regex::Regex;

static EVENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s+(\d+)[\sVC]+([\d:]+) ([\d:]+) ([\d:]+) ([\d:]+)\s*$")
        .expect("valid EDL event pattern")
});

static DETAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*\|C:([A-Za-z]+)\s*\|M:([\w\s\-'"!@#$%^&*()]+)\s*\|D:(\d+)*\s*$"#)
        .expect("valid EDL detail pattern")
});

/// Structural role of one EDL line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdlLine<'a> {
    Empty,
    Title,
    Fcm,
    /// Event line; `in_time` is the source-in timecode.
    Timestamp { in_time: &'a str },
    /// Detail line following an event line.
    Detail {
        color: &'a str,
        name: &'a str,
        duration: Option<&'a str>,
    },
    Unknown,
}

/// Classifies a single EDL line.
#[must_use]
pub fn classify_edl_line(line: &str) -> EdlLine<'_> {
    if line.is_empty() {
        return EdlLine::Empty;
    }
    if line.starts_with("TITLE:") {
        return EdlLine::Title;
    }
    if line.starts_with("FCM:") {
        return EdlLine::Fcm;
    }

    if let Some(in_time) = EVENT_RE
        .captures(line)
        .and_then(|caps| caps.get(3))
        .map(|m| m.as_str())
    {
        return EdlLine::Timestamp { in_time };
    }

    if let Some(caps) = DETAIL_RE.captures(line) {
        if let (Some(color), Some(name)) = (caps.get(1), caps.get(2)) {
            return EdlLine::Detail {
                color: color.as_str(),
                // The name pattern also swallows the padding before `|D:`.
                name: name.as_str().trim_end(),
                duration: caps.get(3).map(|m| m.as_str()),
            };
        }
    }

    EdlLine::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boilerplate_lines() {
        assert_eq!(classify_edl_line(""), EdlLine::Empty);
        assert_eq!(classify_edl_line("TITLE: My Stream"), EdlLine::Title);
        assert_eq!(classify_edl_line("FCM: NON-DROP FRAME"), EdlLine::Fcm);
    }

    #[test]
    fn test_event_line() {
        let line = "001  001      V     C         00:01:05:00 00:01:05:01 00:01:05:00 00:01:05:01";
        assert_eq!(
            classify_edl_line(line),
            EdlLine::Timestamp { in_time: "00:01:05:00" }
        );
    }

    #[test]
    fn test_detail_line() {
        assert_eq!(
            classify_edl_line(" |C:ResolveColorBlue |M:Intro |D:1"),
            EdlLine::Detail {
                color: "ResolveColorBlue",
                name: "Intro",
                duration: Some("1"),
            }
        );
    }

    #[test]
    fn test_detail_line_with_punctuation_and_no_duration() {
        assert_eq!(
            classify_edl_line(" |C:ResolveColorRed |M:Boss fight! (part 2) |D:"),
            EdlLine::Detail {
                color: "ResolveColorRed",
                name: "Boss fight! (part 2)",
                duration: None,
            }
        );
    }

    #[test]
    fn test_malformed_lines_are_unknown() {
        // Empty color capture.
        assert_eq!(classify_edl_line(" |C: |M:Intro |D:1"), EdlLine::Unknown);
        assert_eq!(classify_edl_line(" |C:ResolveColorBlue |M:Intro"), EdlLine::Unknown);
        assert_eq!(classify_edl_line("001 garbage"), EdlLine::Unknown);
        assert_eq!(classify_edl_line("* FROM CLIP NAME: x"), EdlLine::Unknown);
    }

    #[test]
    fn test_blank_marker_name_is_still_a_detail_line() {
        // Rejected later by the reader.
        assert_eq!(
            classify_edl_line(" |C:ResolveColorBlue |M: |D:1"),
            EdlLine::Detail {
                color: "ResolveColorBlue",
                name: "",
                duration: Some("1"),
            }
        );
    }
}
