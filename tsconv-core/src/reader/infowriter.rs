// ============================================================================
// tsconv-core/src/reader/infowriter.rs
// ============================================================================
//
// INFOWRITER READER: Event Log to Markers
//
// The reader remembers the name of the most recent EVENT/HOTKEY line and emits
// a marker for every clock line of the selected kind (record or stream). Event
// lines never emit on their own; a newer event simply replaces the pending
// name.
//
// AI-ASSISTANT-INFO: Stateful InfoWriter log reader

use super::MarkerLineReader;
use crate::classify::{EventLabel, InfoWriterLine, classify_infowriter_line};
use crate::config::ReadConfig;
use crate::error::{CoreError, CoreResult};
use crate::timecode::parse_clock;
use crate::timestamp::Timestamp;
use log::{debug, warn};

/// Reader state for one InfoWriter log.
#[derive(Debug, Clone, Default)]
pub struct InfoWriterReader {
    use_stream_markers: bool,
    include_date_time: bool,
    pending_name: Option<String>,
}

impl InfoWriterReader {
    pub fn new(config: &ReadConfig) -> Self {
        Self {
            use_stream_markers: config.use_stream_markers,
            include_date_time: config.include_date_time,
            pending_name: None,
        }
    }

    fn remember_event(
        &mut self,
        line_number: usize,
        line: &str,
        kind: &str,
        label: Option<EventLabel<'_>>,
    ) -> CoreResult<()> {
        let label = label.ok_or_else(|| {
            CoreError::parse(line_number, line, format!("malformed {} line", kind))
        })?;
        let name = if self.include_date_time {
            format!("{} @ {}", label.name, label.date_time)
        } else {
            label.name.to_string()
        };
        self.pending_name = Some(name);
        Ok(())
    }

    fn emit(&self, line_number: usize, line: &str, clock: &str) -> CoreResult<Timestamp> {
        let seconds = parse_clock(clock).map_err(|e| {
            CoreError::parse(line_number, line, format!("bad marker time ({})", e))
        })?;
        let name = match &self.pending_name {
            Some(name) => name.clone(),
            None => {
                warn!("Line {}: marker time with no preceding event, using empty name", line_number);
                String::new()
            }
        };
        debug!("Line {}: marker '{}' at {} s", line_number, name, seconds);
        Ok(Timestamp::new(name, seconds))
    }
}

impl MarkerLineReader for InfoWriterReader {
    fn feed(&mut self, line_number: usize, line: &str) -> CoreResult<Option<Timestamp>> {
        match classify_infowriter_line(line) {
            InfoWriterLine::Empty => Ok(None),
            InfoWriterLine::Event(label) => {
                self.remember_event(line_number, line, "EVENT", label)?;
                Ok(None)
            }
            InfoWriterLine::Hotkey(label) => {
                self.remember_event(line_number, line, "HOTKEY", label)?;
                Ok(None)
            }
            InfoWriterLine::RecordTime { clock } if !self.use_stream_markers => {
                self.emit(line_number, line, clock).map(Some)
            }
            InfoWriterLine::StreamTime { clock } if self.use_stream_markers => {
                self.emit(line_number, line, clock).map(Some)
            }
            InfoWriterLine::RecordTime { clock } | InfoWriterLine::StreamTime { clock } => {
                debug!(
                    "Line {}: skipping {} marker at {}",
                    line_number,
                    if self.use_stream_markers { "record" } else { "stream" },
                    clock
                );
                Ok(None)
            }
            InfoWriterLine::Unknown => Err(CoreError::parse(
                line_number,
                line,
                match &self.pending_name {
                    Some(name) => format!("unrecognized line (after event '{}')", name),
                    None => "unrecognized line".to_string(),
                },
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_markers;
    use std::io::Cursor;

    const LOG: &str = "\
EVENT:Big Save @ 2024-01-01 10:00:00
0:15:30 Record Time Marker
0:16:00 Stream Time Marker

HOTKEY:Clip @ 2024-01-01 10:05:00
0:20:00 Record Time Marker
0:20:30 Stream Time Marker
";

    fn read(config: &ReadConfig, text: &str) -> CoreResult<Vec<Timestamp>> {
        let c = read_markers(Cursor::new(text), InfoWriterReader::new(config))?;
        Ok(c.iter().cloned().collect())
    }

    #[test]
    fn test_record_markers() {
        let markers = read(&ReadConfig::default(), LOG).unwrap();
        assert_eq!(
            markers,
            vec![Timestamp::new("Big Save", 930), Timestamp::new("Clip", 1200)]
        );
    }

    #[test]
    fn test_stream_markers() {
        let config = ReadConfig {
            use_stream_markers: true,
            ..ReadConfig::default()
        };
        let markers = read(&config, LOG).unwrap();
        assert_eq!(
            markers,
            vec![Timestamp::new("Big Save", 960), Timestamp::new("Clip", 1230)]
        );
    }

    #[test]
    fn test_include_date_time() {
        let config = ReadConfig {
            include_date_time: true,
            ..ReadConfig::default()
        };
        let markers = read(&config, LOG).unwrap();
        assert_eq!(markers[0].name, "Big Save @ 2024-01-01 10:00:00");
    }

    #[test]
    fn test_unselected_marker_lines_are_skipped() {
        let mut reader = InfoWriterReader::new(&ReadConfig::default());
        assert_eq!(reader.feed(1, "EVENT:Clip @ a").unwrap(), None);
        assert_eq!(reader.feed(2, "0:00:30 Stream Time Marker").unwrap(), None);
        assert_eq!(
            reader.feed(3, "0:00:20 Record Time Marker").unwrap(),
            Some(Timestamp::new("Clip", 20))
        );

        let only_stream = "EVENT:Clip @ a\n0:00:30 Stream Time Marker\n";
        assert!(read(&ReadConfig::default(), only_stream).unwrap().is_empty());
    }

    #[test]
    fn test_later_event_replaces_pending_name() {
        let log = "EVENT:First @ a\nEVENT:Second @ b\n0:00:05 Record Time Marker\n";
        let markers = read(&ReadConfig::default(), log).unwrap();
        assert_eq!(markers, vec![Timestamp::new("Second", 5)]);
    }

    #[test]
    fn test_unknown_line_is_fatal() {
        let log = "EVENT:First @ a\n0:00:05 Record Time Marker\nnot a marker line\n";
        match read(&ReadConfig::default(), log) {
            Err(CoreError::Parse { line_number, line, .. }) => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "not a marker line");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_event_is_fatal() {
        let log = "EVENT:no separator\n";
        assert!(matches!(
            read(&ReadConfig::default(), log),
            Err(CoreError::Parse { line_number: 1, .. })
        ));
    }

    #[test]
    fn test_trailing_whitespace_and_crlf() {
        let log = "EVENT:Goal @ x  \r\n0:01:00 Record Time Marker\r\n\r\n";
        let markers = read(&ReadConfig::default(), log).unwrap();
        assert_eq!(markers, vec![Timestamp::new("Goal", 60)]);
    }
}
