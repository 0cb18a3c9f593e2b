//! EDL reader: pairs every event line with the detail line that follows it.

use super::MarkerLineReader;
use crate::classify::{EdlLine, classify_edl_line};
use crate::error::{CoreError, CoreResult};
use crate::timecode::parse_clock;
use crate::timestamp::{MarkerColor, Timestamp};
use log::{debug, warn};

/// Reader state for one EDL file.
#[derive(Debug, Clone, Default)]
pub struct EdlReader {
    // (line number, in-time) of an event line still waiting for its details
    pending: Option<(usize, u64)>,
}

impl EdlReader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkerLineReader for EdlReader {
    fn feed(&mut self, line_number: usize, line: &str) -> CoreResult<Option<Timestamp>> {
        match classify_edl_line(line) {
            EdlLine::Empty | EdlLine::Title | EdlLine::Fcm => Ok(None),
            EdlLine::Timestamp { in_time } => {
                let seconds = parse_clock(in_time).map_err(|e| {
                    CoreError::parse(line_number, line, format!("bad event in-time ({})", e))
                })?;
                if let Some((previous, _)) = self.pending {
                    warn!("Line {}: event on line {} has no details, dropping it", line_number, previous);
                }
                self.pending = Some((line_number, seconds));
                Ok(None)
            }
            EdlLine::Detail { color, name, .. } => {
                let Some((_, seconds)) = self.pending else {
                    return Err(CoreError::state(
                        line_number,
                        line,
                        "details without a preceding timestamp",
                    ));
                };
                if name.is_empty() {
                    return Err(CoreError::parse(line_number, line, "empty marker name"));
                }
                let color = MarkerColor::from_resolve_token(color).unwrap_or_else(|_| {
                    debug!("Line {}: unknown color '{}', using default", line_number, color);
                    MarkerColor::default()
                });
                self.pending = None;
                Ok(Some(Timestamp::new(name, seconds).with_color(color)))
            }
            EdlLine::Unknown => Err(CoreError::parse(line_number, line, "unrecognized line")),
        }
    }

    fn finish(&mut self) -> CoreResult<()> {
        if let Some((line_number, _)) = self.pending.take() {
            warn!("Event on line {} has no details, dropping it", line_number);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_markers;
    use std::io::Cursor;

    fn read(text: &str) -> CoreResult<Vec<Timestamp>> {
        let c = read_markers(Cursor::new(text), EdlReader::new())?;
        Ok(c.iter().cloned().collect())
    }

    #[test]
    fn test_single_marker() {
        let edl = "\
001  001      V     C         00:01:05:00 00:01:05:01 00:01:05:00 00:01:05:01
 |C:ResolveColorBlue |M:Intro |D:1
";
        assert_eq!(read(edl).unwrap(), vec![Timestamp::new("Intro", 65)]);
    }

    #[test]
    fn test_full_file_keeps_color() {
        let edl = "\
TITLE: Stream
FCM: NON-DROP FRAME

001  001      V     C         00:00:10:00 00:00:10:01 00:00:10:00 00:00:10:01
 |C:ResolveColorRed |M:Start |D:1

002  001      V     C         01:00:00:00 01:00:00:01 01:00:00:00 01:00:00:01
 |C:ResolveColorMint |M:Late |D:1
";
        let markers = read(edl).unwrap();
        assert_eq!(
            markers,
            vec![
                Timestamp::new("Start", 10).with_color(MarkerColor::Red),
                Timestamp::new("Late", 3600).with_color(MarkerColor::Mint),
            ]
        );
    }

    #[test]
    fn test_malformed_in_time_is_parse_error() {
        let edl = "\
001  001      V     C         00:1:05:00 00:01:05:01 00:01:05:00 00:01:05:01
 |C:ResolveColorBlue |M:Intro |D:1
";
        match read(edl) {
            Err(CoreError::Parse { line_number, reason, .. }) => {
                assert_eq!(line_number, 1);
                assert!(reason.contains("bad event in-time"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_details_without_timestamp_is_state_error() {
        let edl = " |C:ResolveColorBlue |M:Intro |D:1\n";
        assert!(matches!(
            read(edl),
            Err(CoreError::State { line_number: 1, .. })
        ));
    }

    #[test]
    fn test_details_consume_pending_timestamp() {
        let edl = "\
001  001      V     C         00:01:05:00 00:01:05:01 00:01:05:00 00:01:05:01
 |C:ResolveColorBlue |M:Intro |D:1
 |C:ResolveColorBlue |M:Again |D:1
";
        assert!(matches!(
            read(edl),
            Err(CoreError::State { line_number: 3, .. })
        ));
    }

    #[test]
    fn test_empty_color_is_parse_error() {
        let edl = "\
001  001      V     C         00:01:05:00 00:01:05:01 00:01:05:00 00:01:05:01
 |C: |M:Intro |D:1
";
        assert!(matches!(
            read(edl),
            Err(CoreError::Parse { line_number: 2, .. })
        ));
    }

    #[test]
    fn test_empty_name_is_parse_error() {
        let edl = "\
001  001      V     C         00:01:05:00 00:01:05:01 00:01:05:00 00:01:05:01
 |C:ResolveColorBlue |M: |D:1
";
        assert!(matches!(read(edl), Err(CoreError::Parse { .. })));
    }

    #[test]
    fn test_unknown_color_falls_back_to_default() {
        let edl = "\
001  001      V     C         00:01:05:00 00:01:05:01 00:01:05:00 00:01:05:01
 |C:ResolveColorPing |M:Intro |D:1
";
        assert_eq!(read(edl).unwrap()[0].color, MarkerColor::Blue);
    }

    #[test]
    fn test_trailing_event_without_details_is_dropped() {
        let edl = "\
001  001      V     C         00:01:05:00 00:01:05:01 00:01:05:00 00:01:05:01
 |C:ResolveColorBlue |M:Intro |D:1
002  001      V     C         00:02:00:00 00:02:00:01 00:02:00:00 00:02:00:01
";
        assert_eq!(read(edl).unwrap().len(), 1);
    }
}
