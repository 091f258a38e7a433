use crate::error::{ClockParseError, LogFileNotFound};
use crate::logfile::row::ClockRecord;
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const START_TAG: &str = "<Clocks>";
const END_TAG: &str = "</Clocks>";

/// Read a dataset log file as text.
///
/// A missing file is reported as [`LogFileNotFound`]; other I/O failures keep
/// their `io::Error` with the path as context.
pub fn read_log_file(path: &Path) -> anyhow::Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(LogFileNotFound {
            path: path.to_path_buf(),
        }
        .into()),
        Err(e) => Err(e).with_context(|| format!("read log file {}", path.display())),
    }
}

/// Parse the span between the first `<Clocks>` and the first `</Clocks>` of a
/// line as comma-separated floats.
///
/// Example:
/// Clock sample <Clocks>12,0,4,1830,22,51,60</Clocks>
///
/// An empty span yields an empty record. Tokens are trimmed before parsing.
pub fn extract_clock_record(line: &str) -> Result<ClockRecord, ClockParseError> {
    let start = line.find(START_TAG).ok_or(ClockParseError::MissingStartTag)? + START_TAG.len();
    let end = line.find(END_TAG).ok_or(ClockParseError::MissingEndTag)?;
    if end < start {
        return Err(ClockParseError::EndBeforeStart);
    }

    let span = &line[start..end];
    if span.trim().is_empty() {
        return Ok(ClockRecord::new(vec![]));
    }

    let mut values = Vec::new();
    for (index, token) in span.split(',').enumerate() {
        let value = token
            .trim()
            .parse::<f64>()
            .map_err(|source| ClockParseError::BadNumber {
                index,
                token: token.to_string(),
                source,
            })?;
        values.push(value);
    }
    Ok(ClockRecord::new(values))
}

/// Parse every marked line of one dataset, in order.
///
/// The first malformed line aborts the whole dataset.
pub fn parse_clock_records(origin: &Path, lines: &[&str]) -> anyhow::Result<Vec<ClockRecord>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            extract_clock_record(line).with_context(|| {
                format!(
                    "clock parse error in {} at marked line {}: {:?}",
                    origin.display(),
                    i + 1,
                    line.trim_end()
                )
            })
        })
        .collect()
}
