//! # Typed Aggregates
//!
//! [`Aggregate`] ties a Rust type to its static [`AggregateSchema`]. Typed
//! values are only built from a [`Record`] that passed validation, and can
//! be rendered back to raw input for re-validation.
//!
//! [`Validated<T>`] marks a value that a validation pass accepted. It can
//! only be obtained through validation and gives out shared references
//! only; [`Validated::into_inner`] hands the value back for rebuilding,
//! after which it must be validated again.

use std::fmt;
use std::ops::Deref;

use ofx_core::ValidationError;

use crate::error::SchemaError;
use crate::raw::RawAggregate;
use crate::record::{FieldValue, Record};
use crate::schema::AggregateSchema;
use crate::validator::Validator;

/// A Rust type backed by a static aggregate schema.
pub trait Aggregate: Sized {
    /// The schema every instance is validated against.
    const SCHEMA: &'static AggregateSchema;

    /// Build from a record produced by validating against [`Self::SCHEMA`].
    ///
    /// # Errors
    ///
    /// Returns the first field that is missing or of the wrong kind. This
    /// cannot happen for records that passed validation against `SCHEMA`.
    fn from_record(record: &Record) -> Result<Self, ValidationError>;

    /// Render to raw input that validates back to an equal value.
    fn to_raw(&self) -> RawAggregate;

    /// Validate raw input in strict mode and build the typed value.
    ///
    /// # Errors
    ///
    /// `SchemaError::ValidationFailed` with the first violation.
    fn from_raw(raw: &RawAggregate) -> Result<Self, SchemaError> {
        Validator::strict().build(raw)
    }

    /// Re-run validation over this value's raw form.
    ///
    /// # Errors
    ///
    /// `SchemaError::ValidationFailed` if the value no longer satisfies
    /// its schema.
    fn validate(&self) -> Result<(), SchemaError> {
        Self::from_raw(&self.to_raw()).map(|_| ())
    }
}

impl Record {
    /// Convert a nested aggregate field into its typed form.
    ///
    /// # Errors
    ///
    /// `UnexpectedValueShape` if the field holds a scalar, or any error
    /// from `T::from_record`.
    pub fn nested<T: Aggregate>(&self, name: &str) -> Result<Option<T>, ValidationError> {
        match self.get(name) {
            None => Ok(None),
            Some(FieldValue::Aggregate(record)) => T::from_record(record).map(Some),
            Some(FieldValue::Scalar(_)) => Err(ValidationError::UnexpectedValueShape {
                field: name.to_string(),
                expected: "an aggregate".to_string(),
            }),
        }
    }
}

/// A value that passed validation against its schema.
#[derive(Clone, PartialEq)]
pub struct Validated<T: Aggregate>(T);

impl<T: Aggregate> Validated<T> {
    /// Validate an already-built value.
    ///
    /// # Errors
    ///
    /// `SchemaError::ValidationFailed` if `value` violates its schema.
    pub fn new(value: T) -> Result<Self, SchemaError> {
        value.validate()?;
        Ok(Self(value))
    }

    /// Validate raw input in strict mode.
    ///
    /// # Errors
    ///
    /// `SchemaError::ValidationFailed` with the first violation.
    pub fn from_raw(raw: &RawAggregate) -> Result<Self, SchemaError> {
        T::from_raw(raw).map(Self)
    }

    /// Validate raw input with the given validator.
    ///
    /// # Errors
    ///
    /// `SchemaError::ValidationFailed` with the violations the validator
    /// collected.
    pub fn with_validator(validator: &Validator, raw: &RawAggregate) -> Result<Self, SchemaError> {
        validator.build(raw).map(Self)
    }

    /// Give up the validity marker.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Aggregate> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Aggregate> AsRef<T> for Validated<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: Aggregate + fmt::Debug> fmt::Debug for Validated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validated").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, MutexGroup};
    use ofx_core::Decimal;

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        a: Option<Decimal>,
        b: Option<Decimal>,
    }

    const PAIR: AggregateSchema = AggregateSchema::new(
        "PAIR",
        &[FieldDescriptor::decimal("a"), FieldDescriptor::decimal("b")],
        &[MutexGroup::new("ab", &["a", "b"])],
    );

    impl Aggregate for Pair {
        const SCHEMA: &'static AggregateSchema = &PAIR;

        fn from_record(record: &Record) -> Result<Self, ValidationError> {
            Ok(Self {
                a: record.get_as("a")?,
                b: record.get_as("b")?,
            })
        }

        fn to_raw(&self) -> RawAggregate {
            let mut raw = RawAggregate::new();
            if let Some(a) = self.a {
                raw.insert("a", a.to_string());
            }
            if let Some(b) = self.b {
                raw.insert("b", b.to_string());
            }
            raw
        }
    }

    #[test]
    fn from_raw_builds_typed_value() {
        let pair = Pair::from_raw(&RawAggregate::new().with("a", "1.50")).unwrap();
        assert_eq!(pair.a.map(|d| d.to_string()), Some("1.50".to_string()));
        assert!(pair.b.is_none());
    }

    #[test]
    fn hand_built_value_is_checked() {
        let bad = Pair {
            a: Some(Decimal::ONE),
            b: Some(Decimal::TWO),
        };
        let err = Validated::new(bad).unwrap_err();
        assert!(matches!(err, SchemaError::ValidationFailed { .. }));
    }

    #[test]
    fn validated_derefs_and_releases() {
        let v = Validated::<Pair>::from_raw(&RawAggregate::new().with("b", "2")).unwrap();
        assert_eq!(v.b, Some(Decimal::TWO));
        let inner = v.into_inner();
        assert!(Validated::new(inner).is_ok());
    }

    #[test]
    fn nested_rejects_scalar() {
        let record = Validator::strict()
            .check(&PAIR, &RawAggregate::new().with("a", "1"))
            .record;
        let err = record.nested::<Pair>("a").unwrap_err();
        assert_eq!(err.kind(), "unexpected_value_shape");
        assert!(record.nested::<Pair>("missing").unwrap().is_none());
    }
}
