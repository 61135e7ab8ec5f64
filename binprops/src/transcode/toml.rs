//! TOML transcoding: convert property maps to TOML text.
//!
//! Mapping from properties to TOML:
//!   - Value::Integer -> TOML integer
//!   - Value::Float   -> TOML float (nan, inf, -inf allowed)
//!   - Value::Bool    -> TOML boolean
//!   - Value::String  -> TOML string
//!
//! Dotted property names are written as quoted keys (`"app.port" = 8080`)
//! so the document stays a single flat table.

use libprops::{sorted_keys, PropertyMap, Value};
use toml_edit::DocumentMut;

/// Encode a property map as a TOML string.
pub fn encode(properties: &PropertyMap) -> Result<String, String> {
    let mut doc = DocumentMut::new();
    for k in sorted_keys(properties) {
        doc.insert(k, toml_edit::Item::Value(value_to_toml(&properties[k])));
    }
    Ok(doc.to_string())
}

fn value_to_toml(value: &Value) -> toml_edit::Value {
    match value {
        Value::Integer(n) => toml_edit::Value::Integer(toml_edit::Formatted::new(*n)),
        Value::Float(f) => toml_edit::Value::Float(toml_edit::Formatted::new(*f)),
        Value::Bool(b) => toml_edit::Value::Boolean(toml_edit::Formatted::new(*b)),
        Value::String(s) => toml_edit::Value::String(toml_edit::Formatted::new(s.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_names_stay_flat() {
        let props = PropertyMap::from([
            ("app.port".to_string(), Value::Integer(8080)),
            ("app.name".to_string(), Value::from("MyService")),
        ]);
        let text = encode(&props).unwrap();
        let doc: DocumentMut = text.parse().unwrap();
        assert_eq!(doc.as_table().len(), 2);
        assert_eq!(doc["app.port"].as_integer(), Some(8080));
        assert_eq!(doc["app.name"].as_str(), Some("MyService"));
        assert!(doc.get("app").is_none());
    }

    #[test]
    fn test_scalar_kinds() {
        let props = PropertyMap::from([
            ("ratio".to_string(), Value::Float(0.5)),
            ("debug".to_string(), Value::Bool(false)),
        ]);
        let doc: DocumentMut = encode(&props).unwrap().parse().unwrap();
        assert_eq!(doc["ratio"].as_float(), Some(0.5));
        assert_eq!(doc["debug"].as_bool(), Some(false));
    }
}
