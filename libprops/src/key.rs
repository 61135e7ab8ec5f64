//! Property name grammar.
//!
//! A property name is a dotted identifier path: one or more segments joined
//! by `.`, where each segment starts with a letter, `_` or `$` and continues
//! with letters, digits, `_` or `$`.

use regex::Regex;
use std::sync::OnceLock;

/// Anchored pattern for a dotted identifier path.
pub const PROPERTY_NAME_PATTERN: &str =
    r"^([a-zA-Z_$][a-zA-Z_$0-9]*)(\.[a-zA-Z_$][a-zA-Z_$0-9]*)*$";

static PROPERTY_NAME_LOCK: OnceLock<Regex> = OnceLock::new();

fn property_name_regex() -> &'static Regex {
    PROPERTY_NAME_LOCK.get_or_init(|| Regex::new(PROPERTY_NAME_PATTERN).unwrap())
}

/// Check whether `name` is a valid property name.
pub fn is_valid_property_name(name: &str) -> bool {
    property_name_regex().is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["a", "app.name", "a.b1.c_d", "_private", "$ref", "x$.y_", "A9.B8"] {
            assert!(is_valid_property_name(name), "{} should be valid", name);
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in [
            "",
            "1abc",
            "a.",
            ".a",
            "a..b",
            "a.1b",
            "a b",
            " a",
            "a ",
            "a-b",
            "app.name\n",
            "ä",
        ] {
            assert!(!is_valid_property_name(name), "{:?} should be invalid", name);
        }
    }
}
