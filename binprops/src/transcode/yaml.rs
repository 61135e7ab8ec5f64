//! YAML transcoding: convert property maps to YAML text.
//!
//! Mapping from properties to YAML:
//!   - Value::Integer -> YAML integer
//!   - Value::Float   -> YAML float (including .nan, .inf, -.inf)
//!   - Value::Bool    -> YAML bool
//!   - Value::String  -> YAML string (quoted by the emitter when it would
//!     otherwise read back as another type)
//!
//! Property names stay flat: `app.port` becomes the single key `app.port`,
//! not a nested `app` mapping.

use libprops::{sorted_keys, PropertyMap, Value};

/// Encode a property map as a YAML string.
pub fn encode(properties: &PropertyMap) -> Result<String, String> {
    let mut map = serde_yaml::Mapping::new();
    for k in sorted_keys(properties) {
        map.insert(
            serde_yaml::Value::String(k.clone()),
            value_to_yaml(&properties[k]),
        );
    }
    serde_yaml::to_string(&serde_yaml::Value::Mapping(map))
        .map_err(|e| format!("YAML encode error: {}", e))
}

fn value_to_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Integer(n) => serde_yaml::Value::Number(serde_yaml::Number::from(*n)),
        Value::Float(f) => serde_yaml::Value::Number(serde_yaml::Number::from(*f)),
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::String(s) => serde_yaml::Value::String(s.clone()),
    }
}
