//! JSON <-> Firestore value mapping.
//!
//! Firestore's REST API wraps every field in a typed envelope
//! (`{"integerValue": "42"}`, `{"mapValue": {"fields": ...}}`). These helpers
//! translate between plain `serde_json::Value` records and that envelope.

use serde_json::{json, Map, Value};

use crate::ports::StorageError;

/// Wraps a plain JSON value in Firestore's typed envelope.
pub fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                // Integers travel as strings in the REST API.
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": {
                "values": items.iter().map(to_firestore_value).collect::<Vec<_>>()
            }
        }),
        Value::Object(map) => json!({
            "mapValue": { "fields": to_firestore_fields(map) }
        }),
    }
}

/// Wraps a plain JSON object into a Firestore `fields` map.
pub fn to_firestore_fields(map: &Map<String, Value>) -> Value {
    let fields: Map<String, Value> = map
        .iter()
        .map(|(k, v)| (k.clone(), to_firestore_value(v)))
        .collect();
    Value::Object(fields)
}

/// Unwraps a Firestore typed value back to plain JSON.
pub fn from_firestore_value(value: &Value) -> Result<Value, StorageError> {
    let object = value
        .as_object()
        .ok_or_else(|| malformed("value is not an object"))?;

    let (kind, inner) = object
        .iter()
        .next()
        .ok_or_else(|| malformed("empty value envelope"))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => Ok(inner.clone()),
        "integerValue" => {
            let raw = inner
                .as_str()
                .map(str::to_string)
                .or_else(|| inner.as_i64().map(|i| i.to_string()))
                .ok_or_else(|| malformed("integerValue is neither string nor number"))?;
            let parsed: i64 = raw
                .parse()
                .map_err(|_| malformed(format!("bad integerValue '{raw}'")))?;
            Ok(json!(parsed))
        }
        "doubleValue" => Ok(inner.clone()),
        "stringValue" | "timestampValue" | "referenceValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            let items: Result<Vec<Value>, StorageError> =
                values.iter().map(from_firestore_value).collect();
            Ok(Value::Array(items?))
        }
        "mapValue" => {
            let fields = inner
                .get("fields")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            from_firestore_fields(&fields)
        }
        other => Err(malformed(format!("unsupported value kind '{other}'"))),
    }
}

/// Unwraps a Firestore `fields` map back to a plain JSON object.
pub fn from_firestore_fields(fields: &Map<String, Value>) -> Result<Value, StorageError> {
    let mut map = Map::new();
    for (key, value) in fields {
        map.insert(key.clone(), from_firestore_value(value)?);
    }
    Ok(Value::Object(map))
}

fn malformed(reason: impl std::fmt::Display) -> StorageError {
    StorageError::DeserializationFailed(format!("malformed Firestore value: {reason}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_round_trip() {
        for value in [json!(null), json!(true), json!(42), json!("hub"), json!(2.5)] {
            let wrapped = to_firestore_value(&value);
            assert_eq!(from_firestore_value(&wrapped).unwrap(), value);
        }
    }

    #[test]
    fn test_integers_travel_as_strings() {
        let wrapped = to_firestore_value(&json!(120));
        assert_eq!(wrapped, json!({ "integerValue": "120" }));
    }

    #[test]
    fn test_nested_record_round_trips() {
        let record = json!({
            "teamName": "Rover Rats",
            "budget": 60,
            "cart": [
                { "id": "small_motor", "price": 10, "quantity": 2 }
            ],
            "ownedItems": []
        });

        let wrapped = to_firestore_fields(record.as_object().unwrap());
        let back = from_firestore_fields(wrapped.as_object().unwrap()).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_integer_value_accepts_number_form() {
        let wrapped = json!({ "integerValue": 7 });
        assert_eq!(from_firestore_value(&wrapped).unwrap(), json!(7));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let wrapped = json!({ "geoPointValue": {} });
        assert!(from_firestore_value(&wrapped).is_err());
    }
}
