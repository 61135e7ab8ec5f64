//! Phase 3: Type Coercer
//!
//! Turns a trimmed value string into the most specific [`Value`] it can
//! represent. Candidates are tried in a fixed order, and the first one that
//! accepts the whole string wins:
//!
//! 1. 64-bit signed integer (base 10)
//! 2. 64-bit float (decimal, exponent, `inf`, `nan`)
//! 3. boolean
//! 4. the string itself
//!
//! Coercion cannot fail. Text that no typed reading accepts stays a string.

use crate::Value;

/// Which spellings count as boolean literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoolLiterals {
    /// `true` and `false`, in any letter case.
    #[default]
    Portable,
    /// Also the single letters `t`, `f`, `T` and `F`.
    Shorthand,
}

/// Coerce a trimmed value string with the portable boolean spelling.
pub fn coerce(raw: &str) -> Value {
    coerce_with(raw, BoolLiterals::Portable)
}

/// Coerce a trimmed value string.
pub fn coerce_with(raw: &str, bool_literals: BoolLiterals) -> Value {
    if let Some(n) = parse_integer(raw) {
        return Value::Integer(n);
    }
    if let Some(f) = parse_float(raw) {
        return Value::Float(f);
    }
    if let Some(b) = parse_bool(raw, bool_literals) {
        return Value::Bool(b);
    }
    Value::String(raw.to_string())
}

/// Whole-string base 10 integer. Out-of-range values yield `None`.
fn parse_integer(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

/// Whole-string float. A finite literal too large for `f64` yields `None`
/// rather than rounding to infinity; only spelled-out infinities do that.
fn parse_float(s: &str) -> Option<f64> {
    let f = s.parse::<f64>().ok()?;
    if f.is_infinite() && !is_infinity_literal(s) {
        return None;
    }
    if f.is_nan() && is_signed_nan_literal(s) {
        return None;
    }
    Some(f)
}

/// `nan` takes no sign; `-nan` and `+NaN` are not floats.
fn is_signed_nan_literal(s: &str) -> bool {
    s.strip_prefix(['+', '-'])
        .is_some_and(|unsigned| unsigned.eq_ignore_ascii_case("nan"))
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_bool(s: &str, bool_literals: BoolLiterals) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Some(false);
    }
    match (bool_literals, s) {
        (BoolLiterals::Shorthand, "t" | "T") => Some(true),
        (BoolLiterals::Shorthand, "f" | "F") => Some(false),
        _ => None,
    }
}
