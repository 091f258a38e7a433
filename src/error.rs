//! Typed failures of the clock log pipeline.
//!
//! These travel inside `anyhow::Error` and can be recovered with
//! `downcast_ref` where a caller cares about the kind.

use std::num::ParseFloatError;
use std::path::PathBuf;

/// A dataset's log file does not exist.
#[derive(Debug, thiserror::Error)]
#[error("log file not found: {}", .path.display())]
pub struct LogFileNotFound {
    pub path: PathBuf,
}

/// A marked line whose `<Clocks>...</Clocks>` span cannot be turned into numbers.
#[derive(Debug, thiserror::Error)]
pub enum ClockParseError {
    #[error("missing <Clocks> start tag")]
    MissingStartTag,
    #[error("missing </Clocks> end tag")]
    MissingEndTag,
    #[error("</Clocks> end tag appears before the <Clocks> start tag")]
    EndBeforeStart,
    #[error("value #{index} is not a number: {token:?}")]
    BadNumber {
        index: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Clock records of one file disagree on their field count.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clock record #{row} has {found} fields, expected {expected} (taken from the first record)")]
pub struct ShapeError {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}
