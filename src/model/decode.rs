use std::fmt;

use serde::de::{Deserialize, Deserializer, Error, IgnoredAny, MapAccess, SeqAccess, Visitor};

/// A parsed JSON value that keeps object keys in document order, duplicates included.
///
/// Only strings and objects carry data for a person, every other value collapses into `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNode {
    Null,
    String(String),
    Object(Vec<(String, JsonNode)>),
    Other,
}

impl JsonNode {
    /// Overwrites `target` when this is a string. `null` and mistyped values leave it as it was.
    pub fn store_string(self, target: &mut String) {
        if let JsonNode::String(value) = self {
            *target = value;
        }
    }

    /// Key/value pairs of an object, nothing for any other value
    pub fn into_fields(self) -> Vec<(String, JsonNode)> {
        match self {
            JsonNode::Object(fields) => fields,
            _ => Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for JsonNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonNodeVisitor)
    }
}

struct JsonNodeVisitor;

impl<'de> Visitor<'de> for JsonNodeVisitor {
    type Value = JsonNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_bool<E: Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(JsonNode::Other)
    }

    fn visit_i64<E: Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(JsonNode::Other)
    }

    fn visit_u64<E: Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(JsonNode::Other)
    }

    fn visit_f64<E: Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(JsonNode::Other)
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(JsonNode::String(value.to_string()))
    }

    fn visit_string<E: Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(JsonNode::String(value))
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(JsonNode::Null)
    }

    fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
        Ok(JsonNode::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(JsonNode::Other)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields = Vec::new();

        while let Some(field) = map.next_entry::<String, JsonNode>()? {
            fields.push(field);
        }

        Ok(JsonNode::Object(fields))
    }
}
