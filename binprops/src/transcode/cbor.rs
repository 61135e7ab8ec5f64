//! CBOR transcoding: convert property maps to CBOR binary data.
//!
//! Mapping from properties to CBOR:
//!   - PropertyMap    -> CBOR map (determinate length, text string keys,
//!                       sorted by property name)
//!   - Value::Integer -> CBOR integer (smallest encoding that fits)
//!   - Value::Float   -> CBOR float (ciborium picks the shortest lossless width)
//!   - Value::Bool    -> CBOR bool (simple values 20/21)
//!   - Value::String  -> CBOR text string

use ciborium::value::Value as CborValue;
use libprops::{sorted_keys, PropertyMap, Value};

/// Encode a property map as CBOR bytes.
pub fn encode(properties: &PropertyMap) -> Result<Vec<u8>, String> {
    let pairs: Vec<(CborValue, CborValue)> = sorted_keys(properties)
        .into_iter()
        .map(|k| (CborValue::Text(k.clone()), value_to_cbor(&properties[k])))
        .collect();

    let mut buf = Vec::new();
    ciborium::ser::into_writer(&CborValue::Map(pairs), &mut buf)
        .map_err(|e| format!("CBOR encode error: {}", e))?;
    Ok(buf)
}

fn value_to_cbor(value: &Value) -> CborValue {
    match value {
        Value::Integer(n) => CborValue::Integer((*n).into()),
        Value::Float(f) => CborValue::Float(*f),
        Value::Bool(b) => CborValue::Bool(*b),
        Value::String(s) => CborValue::Text(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_map_bytes() {
        let props = PropertyMap::from([
            ("b".to_string(), Value::Bool(true)),
            ("a".to_string(), Value::Integer(1)),
        ]);
        // map(2), "a", 1, "b", true
        assert_eq!(
            encode(&props).unwrap(),
            vec![0xa2, 0x61, b'a', 0x01, 0x61, b'b', 0xf5]
        );
    }

    #[test]
    fn test_decodes_back() {
        let props = PropertyMap::from([
            ("app.port".to_string(), Value::Integer(-8080)),
            ("app.ratio".to_string(), Value::Float(0.1)),
            ("app.name".to_string(), Value::from("MyService")),
        ]);
        let bytes = encode(&props).unwrap();
        let decoded: CborValue = ciborium::de::from_reader(bytes.as_slice()).unwrap();
        let pairs = decoded.as_map().unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].0, CborValue::Text("app.name".into()));
        assert_eq!(pairs[1].1, CborValue::Integer((-8080i64).into()));
        assert_eq!(pairs[2].1, CborValue::Float(0.1));
    }
}
