//! Clock log files: marker filtering and `<Clocks>` span parsing.

pub mod filter;
pub mod parse;
pub mod row;

pub use filter::filter_lines;
pub use parse::{parse_clock_records, read_log_file};
pub use row::ClockRecord;
