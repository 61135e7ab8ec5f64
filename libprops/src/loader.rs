//! File Loader
//!
//! Feeds a source to the line parser one line at a time and collects the
//! results. Lines are numbered from 1. The first bad line aborts the whole
//! load and nothing collected so far is returned.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ParseContext, ParseError, Result};
use crate::parser::{parse_line_with, ParseOptions};
use crate::Value;

/// Property names mapped to their typed values.
pub type PropertyMap = HashMap<String, Value>;

/// Loads properties from strings, readers or files.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    ctx: ParseContext,
    options: ParseOptions,
}

impl Loader {
    /// Create a loader with default options and no source name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the source in error messages.
    pub fn with_filename(mut self, filename: &str) -> Self {
        self.ctx = ParseContext::new(Some(filename));
        self
    }

    /// Set the value parsing options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Load properties from a string.
    pub fn load_str(&self, input: &str) -> Result<PropertyMap> {
        self.load_reader(input.as_bytes())
    }

    /// Load properties from a buffered reader.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped; a terminator at the
    /// end of the input does not start another line. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD, so they end up in a string value or
    /// fail the property name check on their own line.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<PropertyMap> {
        let mut properties = PropertyMap::new();

        for (index, raw) in reader.split(b'\n').enumerate() {
            let raw = raw.map_err(|e| ParseError::io(&self.ctx, e))?;
            let raw = raw.strip_suffix(b"\r").unwrap_or(&raw);
            let line = String::from_utf8_lossy(raw);
            let line_number = index + 1;

            let (name, value) = parse_line_with(&line, line_number, &self.options)
                .map_err(|e| e.with_location(&self.ctx))?;

            if let Some(previous) = properties.insert(name.clone(), value) {
                debug!(
                    line = line_number,
                    name = %name,
                    previous = ?previous,
                    "Property redefined, keeping the later value"
                );
            }
        }

        Ok(properties)
    }

    /// Load properties from a file.
    ///
    /// Without an explicit filename, errors name the file by its final path
    /// component.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<PropertyMap> {
        let path = path.as_ref();
        let loader = match self.ctx.filename {
            Some(_) => self.clone(),
            None => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                self.clone().with_filename(&name)
            }
        };

        info!("Loading properties from {}", path.display());
        let file = File::open(path).map_err(|e| ParseError::io(&loader.ctx, e))?;
        let properties = loader.load_reader(BufReader::new(file))?;
        info!(
            count = properties.len(),
            "Loaded properties from {}",
            path.display()
        );
        Ok(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    #[test]
    fn test_load_basic() {
        let props = Loader::new().load_str("a=1\nb=two\n").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props["a"], Value::Integer(1));
        assert_eq!(props["b"], Value::String("two".into()));
    }

    #[test]
    fn test_empty_input() {
        let props = Loader::new().load_str("").unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let props = Loader::new().load_str("a=x\r\nb=2\r\n").unwrap();
        assert_eq!(props["a"], Value::String("x".into()));
        assert_eq!(props["b"], Value::Integer(2));
    }

    #[test]
    fn test_last_write_wins() {
        let props = Loader::new().load_str("a=1\nb=0\na=2").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props["a"], Value::Integer(2));
    }

    #[test]
    fn test_blank_line_is_an_error() {
        let err = Loader::new().load_str("a=1\n\nb=2\n").unwrap_err();
        assert!(matches!(err, ParseError::WrongEqualsCount { line: 2, .. }));
    }

    #[test]
    fn test_first_error_wins() {
        let err = Loader::new().load_str("a=1\n9=2\nc==3\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidPropertyName { line: 2, .. }));
    }

    #[test]
    fn test_filename_in_errors() {
        let err = Loader::new()
            .with_filename("my.properties")
            .load_str("ok=1\nbad")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error in line 2 of <my.properties>: unexpected amount of equal signs, should be exactly one"
        );
    }

    #[test]
    fn test_options_are_applied() {
        let props = Loader::new()
            .with_options(ParseOptions::with_bool_shorthand())
            .load_str("on=t\noff=F")
            .unwrap();
        assert_eq!(props["on"], Value::Bool(true));
        assert_eq!(props["off"], Value::Bool(false));
    }

    #[test]
    fn test_invalid_utf8_value_becomes_string() {
        let props = Loader::new()
            .with_filename("latin1.properties")
            .load_reader(&b"a=1\nname=caf\xe9\n"[..])
            .unwrap();
        assert_eq!(props["a"], Value::Integer(1));
        assert_eq!(props["name"], Value::String("caf\u{FFFD}".into()));
    }

    #[test]
    fn test_invalid_utf8_name_reports_line() {
        let err = Loader::new()
            .with_filename("latin1.properties")
            .load_reader(&b"a=1\ncaf\xe9=2\n"[..])
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidPropertyName { line: 2, .. }));
        assert_eq!(
            err.to_string(),
            "syntax error in line 2 of <latin1.properties>: invalid property name"
        );
    }

    #[test]
    fn test_redefinition_keeps_later_value_across_crlf() {
        let props = Loader::new().load_reader(&b"k=old\r\nk=new\r\n"[..]).unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props["k"], Value::String("new".into()));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_error() {
        let err = Loader::new()
            .load_reader(BufReader::new(FailingReader))
            .unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_missing_file() {
        let err = Loader::new()
            .load_path("definitely/not/here.properties")
            .unwrap_err();
        match err {
            ParseError::Io { source_name, .. } => assert_eq!(source_name, "here.properties"),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }
}
