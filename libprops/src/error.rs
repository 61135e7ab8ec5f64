//! Error types for properties loading.

use std::io;
use thiserror::Error;

/// Result type for properties parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying filename for error reporting.
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
    pub filename: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
        }
    }

    /// Format a location suffix for error messages.
    pub fn loc_suffix(&self) -> String {
        match &self.filename {
            Some(name) => format!(" of <{}>", name),
            None => String::new(),
        }
    }

    /// Name used for the source in I/O errors.
    pub fn source_name(&self) -> String {
        self.filename
            .clone()
            .unwrap_or_else(|| "<input>".to_string())
    }
}

/// Error type for properties loading.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A line has zero or more than one equal sign.
    #[error(
        "syntax error in line {line}{location}: unexpected amount of equal signs, should be exactly one"
    )]
    WrongEqualsCount { line: usize, location: String },

    /// The key segment is not a dotted identifier.
    #[error("syntax error in line {line}{location}: invalid property name")]
    InvalidPropertyName { line: usize, location: String },

    /// The source could not be opened or read.
    #[error("Error reading {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    pub(crate) fn wrong_equals_count(line: usize) -> Self {
        ParseError::WrongEqualsCount {
            line,
            location: String::new(),
        }
    }

    pub(crate) fn invalid_property_name(line: usize) -> Self {
        ParseError::InvalidPropertyName {
            line,
            location: String::new(),
        }
    }

    pub(crate) fn io(ctx: &ParseContext, source: io::Error) -> Self {
        ParseError::Io {
            source_name: ctx.source_name(),
            source,
        }
    }

    /// Attach the source name from `ctx` to a syntax error.
    pub fn with_location(self, ctx: &ParseContext) -> Self {
        let location = ctx.loc_suffix();
        match self {
            ParseError::WrongEqualsCount { line, .. } => {
                ParseError::WrongEqualsCount { line, location }
            }
            ParseError::InvalidPropertyName { line, .. } => {
                ParseError::InvalidPropertyName { line, location }
            }
            ParseError::Io { .. } => self,
        }
    }

    /// The 1-based line number for syntax errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::WrongEqualsCount { line, .. }
            | ParseError::InvalidPropertyName { line, .. } => Some(*line),
            ParseError::Io { .. } => None,
        }
    }
}
