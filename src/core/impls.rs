//! Purpose: Bridge `JsonValue` to serde so serde_json does all grammar work.
//! Exports: `Serialize`/`Deserialize` impls, `Display`, and `serde_json::Value` conversions.
//! Role: The only place that knows how the value model maps onto serde's data model.
//! Invariants: Non-finite numbers never serialize; they fail instead of degrading to `null`.
//! Invariants: Integral numbers below 1e21 serialize without a fractional part.
//! Invariants: Duplicate object keys keep their first position and their last value.

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

use crate::core::error::{Error, ErrorKind};
use crate::core::value::{JsonObject, JsonValue};

// Integral magnitudes at or above this are written in exponent form.
const INTEGER_TEXT_LIMIT: f64 = 1e21;

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(val) => serializer.serialize_bool(*val),
            JsonValue::Number(num) => serialize_number(*num, serializer),
            JsonValue::String(text) => serializer.serialize_str(text),
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn serialize_number<S: Serializer>(num: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !num.is_finite() {
        return Err(ser::Error::custom(format_args!(
            "number {num} cannot be represented as JSON"
        )));
    }
    if num.fract() == 0.0 && num.abs() < INTEGER_TEXT_LIMIT {
        return serializer.serialize_i128(num as i128);
    }
    serializer.serialize_f64(num)
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any valid JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<JsonValue, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<JsonValue, E> {
        Ok(JsonValue::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<JsonValue, E> {
        Ok(JsonValue::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<JsonValue, E> {
        Ok(JsonValue::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<JsonValue, E> {
        Ok(JsonValue::Number(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<JsonValue, E> {
        Ok(JsonValue::String(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<JsonValue, E> {
        Ok(JsonValue::String(value))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<JsonValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(JsonValue::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<JsonValue, A::Error> {
        let mut map: JsonObject = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, JsonValue>()? {
            map.insert(key, value);
        }
        Ok(JsonValue::Object(map))
    }
}

/// Writes compact JSON text.
///
/// Fails with `fmt::Error` when the value holds a NaN or infinite number, so
/// `to_string()` panics on such values; use `stringify` to get an `Error` instead.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(val) => JsonValue::Bool(val),
            serde_json::Value::Number(num) => JsonValue::Number(num.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(text) => JsonValue::String(text),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, JsonValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<JsonValue> for serde_json::Value {
    type Error = Error;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(value: JsonValue) -> Result<Self, Error> {
        Ok(match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(val) => serde_json::Value::Bool(val),
            JsonValue::Number(num) => {
                if num.fract() == 0.0 && num >= i64::MIN as f64 && num < i64::MAX as f64 {
                    serde_json::Value::from(num as i64)
                } else {
                    let number = serde_json::Number::from_f64(num).ok_or_else(|| {
                        Error::new(ErrorKind::Encode)
                            .with_message(format!("number {num} cannot be represented as JSON"))
                    })?;
                    serde_json::Value::Number(number)
                }
            }
            JsonValue::String(text) => serde_json::Value::String(text),
            JsonValue::Array(items) => serde_json::Value::Array(
                items
                    .into_iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            JsonValue::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (key, value) in map {
                    out.insert(key, serde_json::Value::try_from(value)?);
                }
                serde_json::Value::Object(out)
            }
        })
    }
}
