//! Typed properties parser.
//!
//! Reads line-oriented `key=value` text into a map from property names to
//! values typed as integer, float, boolean, or string, whichever is the most
//! specific reading of the value text.
//!
//! # Parsing Pipeline
//!
//! Each line goes through three phases:
//!
//! 1. **Splitter**: Cuts the line at every `=`.
//!
//! 2. **Line Parser**: Requires exactly two segments and a dotted identifier
//!    as the property name.
//!
//! 3. **Coercer**: Converts the trimmed value text into a typed value.
//!
//! The loader runs every line through the pipeline in order. Later
//! definitions of a property replace earlier ones, and the first bad line
//! fails the whole load.

mod coerce;
mod encode;
mod error;
mod key;
mod loader;
mod parser;
mod splitter;
mod value;

pub use coerce::{coerce, coerce_with, BoolLiterals};
pub use encode::{encode, sorted_keys, Format};
pub use error::{ParseContext, ParseError, Result};
pub use key::{is_valid_property_name, PROPERTY_NAME_PATTERN};
pub use loader::{Loader, PropertyMap};
pub use parser::{parse_line, parse_line_with, ParseOptions};
pub use splitter::split_line;
pub use value::Value;

use std::path::Path;

/// Parse properties from a string.
///
/// # Example
///
/// ```
/// use libprops::{parse, Value};
///
/// let props = parse("app.port=8080").unwrap();
/// assert_eq!(props["app.port"], Value::Integer(8080));
/// ```
pub fn parse(input: &str) -> Result<PropertyMap> {
    parse_with_filename(input, None)
}

/// Parse properties from a string with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<PropertyMap> {
    let loader = match filename {
        Some(name) => Loader::new().with_filename(name),
        None => Loader::new(),
    };
    loader.load_str(input)
}

/// Load properties from a file.
pub fn load(path: impl AsRef<Path>) -> Result<PropertyMap> {
    Loader::new().load_path(path)
}
