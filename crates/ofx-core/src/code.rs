//! # Validated Code Newtypes
//!
//! A `CurrencyCode` can only hold a member of the ISO 4217 domain set, so a
//! currency symbol read from a validated aggregate never needs re-checking
//! and cannot be confused with an arbitrary string.

use serde::{Deserialize, Serialize};

use crate::domain::CodeSet;
use crate::error::ValidationError;

/// An ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Validate `code` against the currency domain set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEnumValue` (reported against the `cursym` field) if
    /// the code is not an exact member of ISO 4217.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if CodeSet::Currency.contains(&code) {
            Ok(Self(code))
        } else {
            Err(ValidationError::InvalidEnumValue {
                field: "cursym".to_string(),
                value: code,
                allowed: CodeSet::Currency.as_str().to_string(),
            })
        }
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
