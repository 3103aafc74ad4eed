//! Streaming event reader.
//!
//! Reads a line-delimited JSON log one line at a time and yields decoded
//! [`Event`]s lazily through [`EventReader`], a plain pull-based
//! [`Iterator`]. Nothing beyond the current line is buffered, so a consumer
//! that stops early never reads the rest of the file, and dropping the
//! reader closes the file handle.
//!
//! Per line, in order:
//! 1. blank lines are skipped;
//! 2. the line is decoded as a JSON object. Failures are skipped in lenient
//!    mode and end the stream with `MalformedInput` in strict mode;
//! 3. the object is coerced into an [`Event`];
//! 4. the [`TimeRange`] is applied;
//! 5. the surviving event is handed to the consumer.
//!
//! After the first `Err` the reader is finished and yields `None`. A
//! consumer that has already folded earlier events may hold partial state
//! at that point; the aggregators in [`crate::core::stats`] discard it and
//! return only the error.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::FusedIterator;
use std::path::Path;

use serde_json::Value;

use crate::core::event_record::Event;
use crate::core::filter::TimeRange;
use crate::util::error::{open_err, LogkitError, Result};

/// Open `path` and stream its events.
///
/// `since`/`until` are parsed here, before the file is opened, so a bad
/// bound fails without touching the input.
///
/// # Errors
/// - `InvalidTimestamp` if `since` or `until` does not parse.
/// - `FileNotFound` if `path` does not exist, `Io` for other open failures.
///
/// Per-line failures (`MalformedInput` in strict mode, `InvalidTimestamp`
/// for an event's own `ts`, `Io` for read errors) arrive as `Err` items.
pub fn iter_events(
    path: impl AsRef<Path>,
    strict: bool,
    since: Option<&str>,
    until: Option<&str>,
) -> Result<EventReader<BufReader<File>>> {
    let range = TimeRange::parse(since, until)?;
    EventReader::open(path.as_ref(), strict, range)
}

/// Lazy, single-pass, non-restartable stream of events from a buffered reader.
///
/// Restarting means opening a new reader; there is no rewind.
#[derive(Debug)]
pub struct EventReader<R> {
    /// `None` once the stream is exhausted or has failed, which also drops
    /// (and so closes) the underlying reader.
    lines: Option<Lines<R>>,
    /// 1-based number of the last physical line read.
    line_no: usize,
    strict: bool,
    range: TimeRange,
}

impl EventReader<BufReader<File>> {
    /// Open a file for streaming.
    ///
    /// # Errors
    /// `FileNotFound` if the path does not exist, `Io` otherwise.
    pub fn open(path: &Path, strict: bool, range: TimeRange) -> Result<Self> {
        let file = File::open(path).map_err(|e| open_err(e, path))?;
        Ok(Self::from_reader(BufReader::new(file), strict, range))
    }
}

impl<R: BufRead> EventReader<R> {
    /// Stream events from any buffered reader.
    pub fn from_reader(reader: R, strict: bool, range: TimeRange) -> Self {
        Self {
            lines: Some(reader.lines()),
            line_no: 0,
            strict,
            range,
        }
    }

    /// Number of physical lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    /// End the stream with `err`.
    fn fail(&mut self, err: LogkitError) -> Option<Result<Event>> {
        self.lines = None;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.as_mut()?.next() {
                None => {
                    self.lines = None;
                    return None;
                }
                Some(Err(e)) => return self.fail(e.into()),
                Some(Ok(line)) => line,
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let event = match decode_line(trimmed) {
                Ok(event) => event,
                Err(message) if self.strict => {
                    let line = self.line_no;
                    return self.fail(LogkitError::MalformedInput { line, message });
                }
                Err(_) => continue,
            };

            match self.range.admits(&event) {
                Ok(true) => return Some(Ok(event)),
                Ok(false) => continue,
                Err(e) => return self.fail(e),
            }
        }
    }
}

impl<R: BufRead> FusedIterator for EventReader<R> {}

/// Decode one trimmed, non-empty line. The error string is the decoder's
/// message.
fn decode_line(line: &str) -> std::result::Result<Event, String> {
    match serde_json::from_str::<Value>(line) {
        Ok(Value::Object(obj)) => Ok(Event::from_json_object(&obj)),
        Ok(other) => Err(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        )),
        Err(e) => Err(e.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
