//! Raw, pre-validation aggregate input.
//!
//! The SGML/XML parser (out of scope here) hands the validator a map from
//! lower-case field name to either a raw string or a nested raw aggregate.
//! The same shape deserializes directly from YAML or JSON documents.
//! Unquoted numbers and booleans are taken as their textual form; quote
//! decimals whose trailing zeros matter.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A raw field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Scalar text as read from the document.
    Text(String),
    /// Nested aggregate.
    Aggregate(RawAggregate),
}

impl RawValue {
    /// The scalar text, if this is a scalar.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Aggregate(_) => None,
        }
    }

    /// The nested aggregate, if this is one.
    pub fn as_aggregate(&self) -> Option<&RawAggregate> {
        match self {
            Self::Aggregate(a) => Some(a),
            Self::Text(_) => None,
        }
    }

    /// Whether this value counts as populated for required and mutex checks.
    ///
    /// Empty text is unset. A nested aggregate is populated even when it
    /// carries no fields.
    pub fn is_populated(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Aggregate(_) => true,
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a scalar or a map of fields")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::Text(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::Text(if v { "Y" } else { "N" }.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::Text(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(RawValue::Text(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::Text(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Text(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<RawValue, E> {
        self.visit_unit()
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawValue, A::Error> {
        let mut raw = RawAggregate::new();
        while let Some((name, value)) = map.next_entry::<String, RawValue>()? {
            raw.insert(name, value);
        }
        Ok(RawValue::Aggregate(raw))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<RawAggregate> for RawValue {
    fn from(a: RawAggregate) -> Self {
        Self::Aggregate(a)
    }
}

/// Field-name to raw-value map for one aggregate instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAggregate {
    fields: BTreeMap<String, RawValue>,
}

impl RawAggregate {
    /// An aggregate with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Look up a field.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name)
    }

    /// Whether the field is present and populated.
    pub fn is_populated(&self, name: &str) -> bool {
        self.get(name).is_some_and(RawValue::is_populated)
    }

    /// Field names present in the input, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawAggregate {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = Self::new();
        for (k, v) in iter {
            raw.insert(k, v);
        }
        raw
    }
}
