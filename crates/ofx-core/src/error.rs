//! # Error Types: Validation Error Taxonomy
//!
//! Defines the error types shared by every crate in the workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - A [`ValidationError`] describes exactly one violated constraint and names
//!   the field (or mutex group) it concerns, as a dotted path for nested
//!   aggregates (`currency.cursym`).
//! - [`Violations`] is the ordered list of every error found in one aggregate
//!   instance. Strict validation yields at most one entry.
//! - [`OfxError`] is the crate-level error for everything that is not a
//!   per-field violation (domain set construction, code-set lookup).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Top-level error type for the OFX core types.
#[derive(Error, Debug)]
pub enum OfxError {
    /// A value violated a field or aggregate constraint.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A domain set could not be constructed.
    #[error("domain set error: {0}")]
    DomainSet(#[from] DomainSetError),

    /// A code-set identifier did not name a known set.
    #[error("unknown code set: {0:?}")]
    UnknownCodeSet(String),

    /// An OFX date-time string could not be parsed.
    #[error("invalid OFX date-time {raw:?}: {reason}")]
    DateTime {
        /// The rejected input.
        raw: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// A single violated constraint.
///
/// Field names are dotted paths relative to the aggregate being validated.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required field had no value.
    #[error("missing required field '{field}'")]
    MissingRequiredField {
        /// Path of the missing field.
        field: String,
    },

    /// A value is outside the domain set its field is restricted to.
    #[error("invalid value {value:?} for field '{field}': not a member of {allowed}")]
    InvalidEnumValue {
        /// Path of the offending field.
        field: String,
        /// The rejected value.
        value: String,
        /// Name of the domain set the value was checked against.
        allowed: String,
    },

    /// A decimal field's raw input is not a base-10 number.
    #[error("invalid decimal {raw:?} for field '{field}'")]
    InvalidNumericFormat {
        /// Path of the offending field.
        field: String,
        /// The rejected input.
        raw: String,
    },

    /// A date-time field's raw input is not an OFX date-time.
    #[error("invalid date-time {raw:?} for field '{field}'")]
    InvalidDateTimeFormat {
        /// Path of the offending field.
        field: String,
        /// The rejected input.
        raw: String,
    },

    /// A text value exceeds its declared maximum length.
    #[error("value for field '{field}' is {actual} characters long; maximum is {max}")]
    ValueTooLong {
        /// Path of the offending field.
        field: String,
        /// Declared maximum, in characters.
        max: usize,
        /// Actual length, in characters.
        actual: usize,
    },

    /// A scalar was supplied where a nested aggregate is declared, or the
    /// other way round.
    #[error("field '{field}' expects {expected}")]
    UnexpectedValueShape {
        /// Path of the offending field.
        field: String,
        /// What the schema declares for this slot.
        expected: String,
    },

    /// Members of a mutex group are populated in a disallowed combination.
    #[error("mutex group '{group}' {}", describe_mutex(.populated, .required))]
    MutexViolation {
        /// Path of the mutex group.
        group: String,
        /// Paths of the populated members, in declaration order.
        populated: Vec<String>,
        /// Whether the group demands exactly one populated member.
        required: bool,
    },

    /// A field was supplied that the aggregate does not declare.
    #[error("undeclared field '{field}'")]
    UnknownField {
        /// Path of the undeclared field.
        field: String,
    },
}

fn describe_mutex(populated: &[String], required: &bool) -> String {
    if populated.is_empty() {
        "requires exactly one member; none populated".to_string()
    } else if *required {
        format!("requires exactly one member; populated: {}", populated.join(", "))
    } else {
        format!("allows at most one member; populated: {}", populated.join(", "))
    }
}

impl ValidationError {
    /// Stable snake_case name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { .. } => "missing_required_field",
            Self::InvalidEnumValue { .. } => "invalid_enum_value",
            Self::InvalidNumericFormat { .. } => "invalid_numeric_format",
            Self::InvalidDateTimeFormat { .. } => "invalid_date_time_format",
            Self::ValueTooLong { .. } => "value_too_long",
            Self::UnexpectedValueShape { .. } => "unexpected_value_shape",
            Self::MutexViolation { .. } => "mutex_violation",
            Self::UnknownField { .. } => "unknown_field",
        }
    }

    /// The field or group path this error concerns.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingRequiredField { field }
            | Self::InvalidEnumValue { field, .. }
            | Self::InvalidNumericFormat { field, .. }
            | Self::InvalidDateTimeFormat { field, .. }
            | Self::ValueTooLong { field, .. }
            | Self::UnexpectedValueShape { field, .. }
            | Self::UnknownField { field } => field,
            Self::MutexViolation { group, .. } => group,
        }
    }
}

/// Ordered collection of validation errors for one aggregate instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations {
    errors: Vec<ValidationError>,
}

impl Violations {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The first error recorded, which is the one strict mode reports.
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Iterate over the errors in the order they were found.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<ValidationError> for Violations {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for Violations {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {e}")?;
        }
        Ok(())
    }
}

/// Error building a domain set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainSetError {
    /// The same code appears more than once in a table.
    #[error("duplicate code {code:?} in domain set {set}")]
    DuplicateCode {
        /// Name of the set being built.
        set: String,
        /// The repeated code.
        code: String,
    },
}
