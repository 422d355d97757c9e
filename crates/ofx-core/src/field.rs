//! # Scalar Field Validation
//!
//! A scalar field slot is described by a [`ScalarKind`] and a required flag.
//! [`ScalarKind::validate`] is the single place where a raw string from the
//! parser becomes a typed [`ScalarValue`]:
//!
//! | Kind | Accepts | Rejects with |
//! |------|---------|--------------|
//! | `Decimal` | base-10 decimals, scale preserved | `InvalidNumericFormat` |
//! | `OneOf(set)` | exact members of `set` | `InvalidEnumValue` |
//! | `Text { max_length }` | any string within `max_length` chars | `ValueTooLong` |
//! | `DateTime` | OFX date-times | `InvalidDateTimeFormat` |
//!
//! An absent value (no value, or the empty string) is legal for optional
//! fields and reads as unset; for required fields it is
//! `MissingRequiredField`. No value is ever rounded or trimmed.
//!
//! Decimals are held in a 96-bit mantissa with at most 28 fractional
//! digits. A well-formed number that does not fit exactly (magnitude above
//! `79228162514264337593543950335`, or more fractional digits than the
//! remaining precision) is rejected as `InvalidNumericFormat`.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::CodeSet;
use crate::error::ValidationError;
use crate::temporal::OfxDateTime;

/// Semantic type of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Base-10 decimal number.
    Decimal,
    /// String restricted to a domain set.
    OneOf(CodeSet),
    /// Free text, optionally bounded in characters.
    Text {
        /// Maximum length in characters, if any.
        max_length: Option<usize>,
    },
    /// OFX date-time.
    DateTime,
}

/// A validated scalar value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Decimal with the scale of its input.
    Decimal(Decimal),
    /// Member of a domain set.
    Code(String),
    /// Free text.
    Text(String),
    /// UTC instant.
    DateTime(OfxDateTime),
}

impl ScalarKind {
    /// Short description used in shape-mismatch errors.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Decimal => "a decimal value",
            Self::OneOf(_) => "a code value",
            Self::Text { .. } => "a text value",
            Self::DateTime => "a date-time value",
        }
    }

    /// Validate one raw value for the field at `field`.
    ///
    /// Returns `Ok(None)` for an absent optional value.
    ///
    /// # Errors
    ///
    /// See the module table; an absent required value is
    /// `MissingRequiredField`.
    pub fn validate(
        &self,
        field: &str,
        required: bool,
        raw: Option<&str>,
    ) -> Result<Option<ScalarValue>, ValidationError> {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ if required => {
                return Err(ValidationError::MissingRequiredField {
                    field: field.to_string(),
                })
            }
            _ => return Ok(None),
        };

        let value = match self {
            Self::Decimal => ScalarValue::Decimal(parse_decimal(field, raw)?),
            Self::OneOf(set) => {
                if !set.contains(raw) {
                    return Err(ValidationError::InvalidEnumValue {
                        field: field.to_string(),
                        value: raw.to_string(),
                        allowed: set.as_str().to_string(),
                    });
                }
                ScalarValue::Code(raw.to_string())
            }
            Self::Text { max_length } => {
                let actual = raw.chars().count();
                if let Some(max) = *max_length {
                    if actual > max {
                        return Err(ValidationError::ValueTooLong {
                            field: field.to_string(),
                            max,
                            actual,
                        });
                    }
                }
                ScalarValue::Text(raw.to_string())
            }
            Self::DateTime => ScalarValue::DateTime(OfxDateTime::parse(raw).map_err(|_| {
                ValidationError::InvalidDateTimeFormat {
                    field: field.to_string(),
                    raw: raw.to_string(),
                }
            })?),
        };
        Ok(Some(value))
    }
}

impl ScalarValue {
    /// Render back to the raw string form that validates to this value.
    pub fn to_raw(&self) -> String {
        match self {
            Self::Decimal(d) => d.to_string(),
            Self::Code(s) | Self::Text(s) => s.clone(),
            Self::DateTime(dt) => dt.to_ofx(),
        }
    }
}

/// Parse a base-10 decimal without rounding.
///
/// Accepts an optional sign, digits and at most one decimal point. Exponent
/// notation and inputs that would need rounding to fit are rejected.
fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, ValidationError> {
    let invalid = || ValidationError::InvalidNumericFormat {
        field: field.to_string(),
        raw: raw.to_string(),
    };
    let unsigned = raw
        .strip_prefix('-')
        .or_else(|| raw.strip_prefix('+'))
        .unwrap_or(raw);
    let mut digits = 0usize;
    let mut points = 0usize;
    for b in unsigned.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => points += 1,
            _ => return Err(invalid()),
        }
    }
    if digits == 0 || points > 1 {
        return Err(invalid());
    }
    Decimal::from_str_exact(raw).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency() -> ScalarKind {
        ScalarKind::OneOf(CodeSet::Currency)
    }

    #[test]
    fn required_absent_is_missing() {
        for raw in [None, Some("")] {
            let err = ScalarKind::Decimal.validate("currate", true, raw).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingRequiredField {
                    field: "currate".to_string()
                }
            );
        }
    }

    #[test]
    fn optional_absent_is_unset() {
        assert_eq!(currency().validate("cursym", false, None).unwrap(), None);
        assert_eq!(currency().validate("cursym", false, Some("")).unwrap(), None);
    }

    #[test]
    fn one_of_accepts_member() {
        let v = currency().validate("cursym", true, Some("USD")).unwrap();
        assert_eq!(v, Some(ScalarValue::Code("USD".to_string())));
    }

    #[test]
    fn one_of_rejects_non_member() {
        let err = currency().validate("cursym", true, Some("ZZZ")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidEnumValue {
                field: "cursym".to_string(),
                value: "ZZZ".to_string(),
                allowed: "currency".to_string(),
            }
        );
    }

    #[test]
    fn one_of_is_case_sensitive_and_untrimmed() {
        assert!(currency().validate("cursym", true, Some("usd")).is_err());
        assert!(currency().validate("cursym", true, Some("USD ")).is_err());
    }

    #[test]
    fn decimal_preserves_scale() {
        let v = ScalarKind::Decimal.validate("currate", true, Some("0.80")).unwrap();
        match v {
            Some(ScalarValue::Decimal(d)) => {
                assert_eq!(d.scale(), 2);
                assert_eq!(d.to_string(), "0.80");
            }
            other => panic!("expected decimal, got {other:?}"),
        }
    }

    #[test]
    fn decimal_accepts_signed_values() {
        for raw in ["1.25", "-3", "+7.0", "0", "-0.000001", "1000000"] {
            assert!(
                ScalarKind::Decimal.validate("trnamt", true, Some(raw)).is_ok(),
                "{raw:?} should parse"
            );
        }
    }

    #[test]
    fn decimal_rejects_non_numeric() {
        for raw in ["abc", "1,25", "1.2.3", "1e5", " 1", "1 ", "-", ".", "--1", "0x10", "NaN"] {
            let err = ScalarKind::Decimal.validate("trnamt", true, Some(raw)).unwrap_err();
            assert_eq!(err.kind(), "invalid_numeric_format", "{raw:?}");
        }
    }

    #[test]
    fn decimal_rejects_input_needing_rounding() {
        let raw = "0.12345678901234567890123456789012";
        assert!(ScalarKind::Decimal.validate("currate", true, Some(raw)).is_err());
    }

    #[test]
    fn decimal_capacity_limit() {
        let max = "79228162514264337593543950335";
        assert!(ScalarKind::Decimal.validate("trnamt", true, Some(max)).is_ok());
        let min = "-79228162514264337593543950335";
        assert!(ScalarKind::Decimal.validate("trnamt", true, Some(min)).is_ok());
        let err = ScalarKind::Decimal
            .validate("trnamt", true, Some("100000000000000000000000000000"))
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_numeric_format");
    }

    #[test]
    fn text_length_is_counted_in_chars() {
        let kind = ScalarKind::Text { max_length: Some(3) };
        assert!(kind.validate("name", false, Some("héé")).is_ok());
        let err = kind.validate("name", false, Some("abcd")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ValueTooLong {
                field: "name".to_string(),
                max: 3,
                actual: 4
            }
        );
    }

    #[test]
    fn datetime_invalid() {
        let err = ScalarKind::DateTime
            .validate("dtposted", true, Some("2024-01-15"))
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_date_time_format");
    }

    #[test]
    fn datetime_oversized_offset_is_an_error() {
        for raw in ["20240115[999999999:XYZ]", "20240115120000[+2147483647]"] {
            let err = ScalarKind::DateTime.validate("dtposted", true, Some(raw)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidDateTimeFormat {
                    field: "dtposted".to_string(),
                    raw: raw.to_string(),
                }
            );
        }
    }

    #[test]
    fn to_raw_revalidates_to_same_value() {
        let cases = [
            (ScalarKind::Decimal, "1.250"),
            (currency(), "EUR"),
            (ScalarKind::Text { max_length: None }, "memo text"),
            (ScalarKind::DateTime, "20240115093000.000[-5:EST]"),
        ];
        for (kind, raw) in cases {
            let first = kind.validate("f", true, Some(raw)).unwrap().unwrap();
            let second = kind.validate("f", true, Some(&first.to_raw())).unwrap().unwrap();
            assert_eq!(first, second);
        }
    }
}
