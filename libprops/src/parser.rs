//! Phase 2: Line Parser
//!
//! Turns one line of text into a `(name, value)` pair. The line must contain
//! exactly one `=`; the left side must be a valid property name; the right
//! side is trimmed and handed to the type coercer. Parsing has no side
//! effects and never recovers from a bad line.

use crate::coerce::{coerce_with, BoolLiterals};
use crate::error::{ParseError, Result};
use crate::key::is_valid_property_name;
use crate::splitter::split_line;
use crate::Value;

/// A line must split into exactly this many segments.
const EXPECTED_SEGMENTS: usize = 2;

/// Options that affect how values are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accepted boolean spellings.
    pub bool_literals: BoolLiterals,
}

impl ParseOptions {
    /// Options accepting `t`/`f`/`T`/`F` as booleans.
    pub fn with_bool_shorthand() -> Self {
        Self {
            bool_literals: BoolLiterals::Shorthand,
        }
    }
}

/// Parse one line with default options. `line_number` is 1-based.
pub fn parse_line(line: &str, line_number: usize) -> Result<(String, Value)> {
    parse_line_with(line, line_number, &ParseOptions::default())
}

/// Parse one line. `line_number` is 1-based and only used in errors.
pub fn parse_line_with(
    line: &str,
    line_number: usize,
    options: &ParseOptions,
) -> Result<(String, Value)> {
    let segments = split_line(line);
    if segments.len() != EXPECTED_SEGMENTS {
        return Err(ParseError::wrong_equals_count(line_number));
    }

    let name = segments[0];
    if !is_valid_property_name(name) {
        return Err(ParseError::invalid_property_name(line_number));
    }

    let value = coerce_with(segments[1].trim(), options.bool_literals);
    Ok((name.to_string(), value))
}
