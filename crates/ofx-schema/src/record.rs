//! # Validated Records
//!
//! A [`Record`] is the output of a validation pass: the typed values of the
//! fields that validated, in schema declaration order. Unset optional
//! fields have no entry. Records are only produced by the validator, so
//! every value matches the kind its descriptor declares.
//!
//! Typed extraction goes through [`FromScalar`]:
//!
//! ```ignore
//! let amount: Decimal = record.require_as("trnamt")?;
//! let memo: Option<String> = record.get_as("memo")?;
//! ```

use ofx_core::{CurrencyCode, Decimal, OfxDateTime, ScalarValue, ValidationError};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::raw::{RawAggregate, RawValue};

/// A validated field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Scalar value.
    Scalar(ScalarValue),
    /// Nested aggregate.
    Aggregate(Box<Record>),
}

impl FieldValue {
    fn to_raw(&self) -> RawValue {
        match self {
            Self::Scalar(v) => RawValue::Text(v.to_raw()),
            Self::Aggregate(r) => RawValue::Aggregate(r.to_raw()),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(v) => v.serialize(serializer),
            Self::Aggregate(r) => r.serialize(serializer),
        }
    }
}

/// Validated field values of one aggregate instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    aggregate: &'static str,
    values: Vec<(&'static str, FieldValue)>,
}

impl Record {
    pub(crate) fn new(aggregate: &'static str) -> Self {
        Self {
            aggregate,
            values: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: FieldValue) {
        self.values.push((name, value));
    }

    /// Name of the aggregate this record was validated against.
    pub fn aggregate(&self) -> &'static str {
        self.aggregate
    }

    /// Look up a field value.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Whether the field holds a value.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.values.iter().map(|(n, v)| (*n, v))
    }

    /// Number of set fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The scalar value of a field, if set and scalar.
    pub fn scalar(&self, name: &str) -> Option<&ScalarValue> {
        match self.get(name)? {
            FieldValue::Scalar(v) => Some(v),
            FieldValue::Aggregate(_) => None,
        }
    }

    /// The nested record of a field, if set and an aggregate.
    pub fn record(&self, name: &str) -> Option<&Record> {
        match self.get(name)? {
            FieldValue::Aggregate(r) => Some(r),
            FieldValue::Scalar(_) => None,
        }
    }

    /// Convert an optional scalar field.
    ///
    /// # Errors
    ///
    /// `UnexpectedValueShape` if the field holds a value of another kind.
    pub fn get_as<T: FromScalar>(&self, name: &str) -> Result<Option<T>, ValidationError> {
        match self.get(name) {
            None => Ok(None),
            Some(FieldValue::Scalar(v)) => T::from_scalar(name, v).map(Some),
            Some(FieldValue::Aggregate(_)) => Err(T::mismatch(name)),
        }
    }

    /// Convert a required scalar field.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` if unset, or as [`Record::get_as`].
    pub fn require_as<T: FromScalar>(&self, name: &str) -> Result<T, ValidationError> {
        self.get_as(name)?
            .ok_or_else(|| ValidationError::MissingRequiredField {
                field: name.to_string(),
            })
    }

    /// Render back to raw input that validates to an equal record.
    pub fn to_raw(&self) -> RawAggregate {
        self.values
            .iter()
            .map(|(n, v)| (*n, v.to_raw()))
            .collect()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Typed extraction from a validated scalar.
pub trait FromScalar: Sized {
    /// What the field was expected to hold, for shape errors.
    const EXPECTED: &'static str;

    /// Convert the scalar at `field`.
    ///
    /// # Errors
    ///
    /// `UnexpectedValueShape` when the scalar is of another kind.
    fn from_scalar(field: &str, value: &ScalarValue) -> Result<Self, ValidationError>;

    /// The shape error for `field`.
    fn mismatch(field: &str) -> ValidationError {
        ValidationError::UnexpectedValueShape {
            field: field.to_string(),
            expected: Self::EXPECTED.to_string(),
        }
    }
}

impl FromScalar for Decimal {
    const EXPECTED: &'static str = "a decimal value";

    fn from_scalar(field: &str, value: &ScalarValue) -> Result<Self, ValidationError> {
        match value {
            ScalarValue::Decimal(d) => Ok(*d),
            _ => Err(Self::mismatch(field)),
        }
    }
}

impl FromScalar for String {
    const EXPECTED: &'static str = "a text value";

    fn from_scalar(field: &str, value: &ScalarValue) -> Result<Self, ValidationError> {
        match value {
            ScalarValue::Code(s) | ScalarValue::Text(s) => Ok(s.clone()),
            _ => Err(Self::mismatch(field)),
        }
    }
}

impl FromScalar for OfxDateTime {
    const EXPECTED: &'static str = "a date-time value";

    fn from_scalar(field: &str, value: &ScalarValue) -> Result<Self, ValidationError> {
        match value {
            ScalarValue::DateTime(dt) => Ok(*dt),
            _ => Err(Self::mismatch(field)),
        }
    }
}

impl FromScalar for CurrencyCode {
    const EXPECTED: &'static str = "a currency code";

    fn from_scalar(field: &str, value: &ScalarValue) -> Result<Self, ValidationError> {
        match value {
            ScalarValue::Code(s) => CurrencyCode::new(s.as_str()),
            _ => Err(Self::mismatch(field)),
        }
    }
}
