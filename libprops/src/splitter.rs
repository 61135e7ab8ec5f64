//! Phase 1: Line Splitter
//!
//! Cuts a raw line at every `=`. Segments are returned as written: no
//! trimming and no limit on the number of pieces. Deciding whether the
//! segment count is acceptable is the line parser's job.

/// The property delimiter.
pub const DELIMITER: char = '=';

/// Split a raw line on every delimiter occurrence.
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}
