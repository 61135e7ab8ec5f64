//! Encode property maps to text output formats.
//!
//! Every encoder writes keys in sorted order so the output does not depend
//! on hash map iteration order.

use crate::{PropertyMap, Value};

/// Output format for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Canonical `key=value` lines
    Properties,
    /// JSON object
    Json,
    /// One diagnostic line per property, with value kinds
    Listing,
    /// YAML
    Yaml,
    /// TOML
    Toml,
    /// CBOR (binary)
    Cbor,
}

/// Encode a property map to a string in the specified format.
///
/// Note: YAML, TOML, and CBOR formats are handled externally by the CLI tool
/// (binprops) using dedicated libraries. Calling this function with those
/// formats will panic.
pub fn encode(properties: &PropertyMap, format: Format) -> String {
    match format {
        Format::Properties => encode_properties(properties),
        Format::Json => encode_json(properties),
        Format::Listing => encode_listing(properties),
        Format::Yaml | Format::Toml | Format::Cbor => {
            panic!(
                "Format {:?} must be handled by the CLI tool, not libprops::encode",
                format
            )
        }
    }
}

/// Property names in sorted order.
pub fn sorted_keys(properties: &PropertyMap) -> Vec<&String> {
    let mut keys: Vec<&String> = properties.keys().collect();
    keys.sort();
    keys
}

// =============================================================================
// Properties Encoder
// =============================================================================

fn encode_properties(properties: &PropertyMap) -> String {
    sorted_keys(properties)
        .iter()
        .map(|k| format!("{}={}\n", k, encode_properties_value(&properties[*k])))
        .collect()
}

/// Value text that reads back as the same kind of value.
fn encode_properties_value(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Float(f) => encode_float(*f),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
    }
}

fn encode_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else {
        let s = format!("{}", f);
        if s.contains('.') || s.contains('e') {
            s
        } else {
            format!("{}.0", s)
        }
    }
}

// =============================================================================
// JSON Encoder
// =============================================================================

fn encode_json(properties: &PropertyMap) -> String {
    if properties.is_empty() {
        return "{}".to_string();
    }
    let items: Vec<String> = sorted_keys(properties)
        .iter()
        .map(|k| {
            format!(
                "  {}: {}",
                encode_json_string(k),
                encode_json_value(&properties[*k])
            )
        })
        .collect();
    format!("{{\n{}\n}}", items.join(",\n"))
}

fn encode_json_value(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Float(f) => {
            if f.is_nan() || f.is_infinite() {
                "null".to_string() // JSON doesn't support NaN/Infinity
            } else {
                encode_float(*f)
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::String(s) => encode_json_string(s),
    }
}

fn encode_json_string(s: &str) -> String {
    let mut result = String::from("\"");
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0c' => result.push_str("\\f"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

// =============================================================================
// Listing Encoder
// =============================================================================

fn encode_listing(properties: &PropertyMap) -> String {
    sorted_keys(properties)
        .iter()
        .map(|k| {
            let v = &properties[*k];
            format!("key: {} (string) :: value: {} ({})\n", k, v, v.kind())
        })
        .collect()
}
