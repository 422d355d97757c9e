//! # Aggregate Validation Pass
//!
//! Validates a [`RawAggregate`] against an [`AggregateSchema`] in a fixed
//! order:
//!
//! 1. each field descriptor in declaration order, recursing into nested
//!    aggregates (errors carry dotted paths such as `currency.cursym`);
//! 2. each mutex group, counting members populated in the raw input;
//! 3. optionally, raw fields the schema does not declare.
//!
//! In [`ValidationMode::Strict`] the pass stops at the first violation. In
//! [`ValidationMode::Lenient`] it records every violation, leaves the
//! offending fields unset, and keeps going.

use std::fmt;
use std::str::FromStr;

use ofx_core::{ValidationError, Violations};
use serde::{Deserialize, Serialize};

use crate::raw::{RawAggregate, RawValue};
use crate::record::{FieldValue, Record};
use crate::schema::{AggregateSchema, FieldDescriptor, FieldKind};

/// How a validation pass reacts to a violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Stop at the first violation.
    #[default]
    Strict,
    /// Collect every violation and keep the fields that validated.
    Lenient,
}

impl ValidationMode {
    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown validation mode: {other:?}")),
        }
    }
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Fields that validated. In strict mode this is only meaningful when
    /// `violations` is empty.
    pub record: Record,
    /// Violations in the order they were found.
    pub violations: Violations,
}

impl ValidationReport {
    /// Whether the input satisfied every constraint.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The record if valid, otherwise the violations.
    ///
    /// # Errors
    ///
    /// Returns the collected violations when any were found.
    pub fn into_result(self) -> Result<Record, Violations> {
        if self.violations.is_empty() {
            Ok(self.record)
        } else {
            Err(self.violations)
        }
    }
}

/// Run a validation pass.
pub(crate) fn run(
    schema: &'static AggregateSchema,
    raw: &RawAggregate,
    mode: ValidationMode,
    reject_unknown_fields: bool,
) -> ValidationReport {
    let mut pass = Pass {
        mode,
        reject_unknown_fields,
        violations: Violations::new(),
    };
    let record = pass
        .visit(schema, raw, "")
        .unwrap_or_else(|Halted(partial)| partial);
    ValidationReport {
        record,
        violations: pass.violations,
    }
}

/// The pass stopped early; carries the record built so far.
struct Halted(Record);

struct Pass {
    mode: ValidationMode,
    reject_unknown_fields: bool,
    violations: Violations,
}

impl Pass {
    /// Record a violation. Returns `false` when the pass must stop.
    fn report(&mut self, error: ValidationError) -> bool {
        match self.mode {
            ValidationMode::Strict => {
                tracing::debug!(
                    path = error.path(),
                    kind = error.kind(),
                    "strict validation stopped"
                );
                self.violations.push(error);
                false
            }
            ValidationMode::Lenient => {
                tracing::warn!(path = error.path(), kind = error.kind(), "{error}");
                self.violations.push(error);
                true
            }
        }
    }

    fn visit(
        &mut self,
        schema: &'static AggregateSchema,
        raw: &RawAggregate,
        prefix: &str,
    ) -> Result<Record, Halted> {
        tracing::debug!(aggregate = schema.name, path = prefix, "validating aggregate");
        let mut record = Record::new(schema.name);

        for field in schema.fields {
            let path = join(prefix, field.name);
            match self.visit_field(field, raw.get(field.name), &path) {
                Ok(Some(value)) => record.push(field.name, value),
                Ok(None) => {}
                Err(Stop::Here) => return Err(Halted(record)),
                Err(Stop::Nested(value)) => {
                    record.push(field.name, value);
                    return Err(Halted(record));
                }
            }
        }

        for group in schema.mutexes {
            let populated: Vec<String> = group
                .members
                .iter()
                .filter(|m| raw.is_populated(m))
                .map(|m| (*m).to_string())
                .collect();
            let satisfied = if group.required {
                populated.len() == 1
            } else {
                populated.len() <= 1
            };
            if !satisfied {
                let error = ValidationError::MutexViolation {
                    group: join(prefix, group.name),
                    populated,
                    required: group.required,
                };
                if !self.report(error) {
                    return Err(Halted(record));
                }
            }
        }

        if self.reject_unknown_fields {
            for name in raw.names() {
                if schema.field(name).is_none() {
                    let error = ValidationError::UnknownField {
                        field: join(prefix, name),
                    };
                    if !self.report(error) {
                        return Err(Halted(record));
                    }
                }
            }
        }

        Ok(record)
    }

    fn visit_field(
        &mut self,
        field: &'static FieldDescriptor,
        raw: Option<&RawValue>,
        path: &str,
    ) -> Result<Option<FieldValue>, Stop> {
        let outcome = match (field.kind, raw) {
            (FieldKind::Scalar(kind), None) => kind.validate(path, field.required, None),
            (FieldKind::Scalar(kind), Some(RawValue::Text(text))) => {
                kind.validate(path, field.required, Some(text))
            }
            (FieldKind::Scalar(kind), Some(RawValue::Aggregate(_))) => {
                Err(ValidationError::UnexpectedValueShape {
                    field: path.to_string(),
                    expected: kind.describe().to_string(),
                })
            }
            (FieldKind::Aggregate(nested), Some(RawValue::Aggregate(inner))) => {
                return match self.visit(nested, inner, path) {
                    Ok(r) => Ok(Some(FieldValue::Aggregate(Box::new(r)))),
                    Err(Halted(r)) => Err(Stop::Nested(FieldValue::Aggregate(Box::new(r)))),
                };
            }
            (FieldKind::Aggregate(_), Some(RawValue::Text(text))) if !text.is_empty() => {
                Err(ValidationError::UnexpectedValueShape {
                    field: path.to_string(),
                    expected: "an aggregate".to_string(),
                })
            }
            (FieldKind::Aggregate(_), _) if field.required => {
                Err(ValidationError::MissingRequiredField {
                    field: path.to_string(),
                })
            }
            (FieldKind::Aggregate(_), _) => Ok(None),
        };

        match outcome {
            Ok(value) => Ok(value.map(FieldValue::Scalar)),
            Err(error) => {
                if self.report(error) {
                    Ok(None)
                } else {
                    Err(Stop::Here)
                }
            }
        }
    }
}

enum Stop {
    /// Stopped on this field.
    Here,
    /// Stopped inside a nested aggregate; carries its partial record.
    Nested(FieldValue),
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::MutexGroup;
    use ofx_core::CodeSet;

    const INNER: AggregateSchema = AggregateSchema::new(
        "INNER",
        &[
            FieldDescriptor::decimal("rate").required(),
            FieldDescriptor::one_of("sym", CodeSet::Currency).required(),
        ],
        &[],
    );

    const OUTER: AggregateSchema = AggregateSchema::new(
        "OUTER",
        &[
            FieldDescriptor::decimal("amount").required(),
            FieldDescriptor::text("memo", 5),
            FieldDescriptor::aggregate("left", &INNER),
            FieldDescriptor::aggregate("right", &INNER),
        ],
        &[MutexGroup::new("side", &["left", "right"])],
    );

    const PICK: AggregateSchema = AggregateSchema::new(
        "PICK",
        &[FieldDescriptor::decimal("a"), FieldDescriptor::decimal("b")],
        &[MutexGroup::new("choice", &["a", "b"]).required()],
    );

    fn inner(rate: &str, sym: &str) -> RawAggregate {
        RawAggregate::new().with("rate", rate).with("sym", sym)
    }

    #[test]
    fn valid_input_produces_record() {
        let raw = RawAggregate::new()
            .with("amount", "12.50")
            .with("left", inner("1.25", "USD"));
        let report = run(&OUTER, &raw, ValidationMode::Strict, true);
        assert!(report.is_valid());
        let record = report.into_result().unwrap();
        assert!(record.is_set("left"));
        assert!(!record.is_set("right"));
        assert_eq!(record.record("left").unwrap().aggregate(), "INNER");
    }

    #[test]
    fn strict_stops_at_first_violation() {
        let raw = RawAggregate::new()
            .with("memo", "far too long")
            .with("left", inner("x", "ZZZ"));
        let report = run(&OUTER, &raw, ValidationMode::Strict, true);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(
            report.violations.first().unwrap(),
            &ValidationError::MissingRequiredField {
                field: "amount".to_string()
            }
        );
    }

    #[test]
    fn lenient_collects_everything_in_order() {
        let raw = RawAggregate::new()
            .with("memo", "far too long")
            .with("left", inner("x", "ZZZ"))
            .with("right", inner("1", "EUR"))
            .with("extra", "1");
        let report = run(&OUTER, &raw, ValidationMode::Lenient, true);
        let kinds: Vec<_> = report
            .violations
            .iter()
            .map(|e| (e.kind(), e.path().to_string()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("missing_required_field", "amount".to_string()),
                ("value_too_long", "memo".to_string()),
                ("invalid_numeric_format", "left.rate".to_string()),
                ("invalid_enum_value", "left.sym".to_string()),
                ("mutex_violation", "side".to_string()),
                ("unknown_field", "extra".to_string()),
            ]
        );
        // Both slots survive; invalid scalars inside them do not.
        assert!(report.record.is_set("right"));
        let left = report.record.record("left").unwrap();
        assert!(left.is_empty());
    }

    #[test]
    fn strict_nested_failure_keeps_partial_record() {
        let raw = RawAggregate::new()
            .with("amount", "1")
            .with("left", RawAggregate::new().with("rate", "1.00"));
        let report = run(&OUTER, &raw, ValidationMode::Strict, true);
        assert_eq!(report.violations.first().unwrap().path(), "left.sym");
        let left = report.record.record("left").unwrap();
        assert!(left.is_set("rate"));
    }

    #[test]
    fn mutex_lists_populated_members() {
        let raw = RawAggregate::new()
            .with("amount", "1")
            .with("left", inner("1", "USD"))
            .with("right", inner("2", "EUR"));
        let report = run(&OUTER, &raw, ValidationMode::Strict, true);
        assert_eq!(
            report.violations.first().unwrap(),
            &ValidationError::MutexViolation {
                group: "side".to_string(),
                populated: vec!["left".to_string(), "right".to_string()],
                required: false,
            }
        );
    }

    #[test]
    fn required_mutex_needs_exactly_one() {
        let none = run(&PICK, &RawAggregate::new(), ValidationMode::Strict, true);
        assert!(matches!(
            none.violations.first(),
            Some(ValidationError::MutexViolation { required: true, populated, .. }) if populated.is_empty()
        ));
        let one = run(&PICK, &RawAggregate::new().with("b", "2"), ValidationMode::Strict, true);
        assert!(one.is_valid());
        let both = RawAggregate::new().with("a", "1").with("b", "2");
        assert!(!run(&PICK, &both, ValidationMode::Strict, true).is_valid());
    }

    #[test]
    fn empty_strings_read_as_unset() {
        let raw = RawAggregate::new()
            .with("amount", "3")
            .with("memo", "")
            .with("right", "");
        let report = run(&OUTER, &raw, ValidationMode::Strict, true);
        assert!(report.is_valid());
        assert!(!report.record.is_set("memo"));
    }

    #[test]
    fn shape_mismatches_are_reported() {
        let raw = RawAggregate::new()
            .with("amount", RawAggregate::new())
            .with("left", "USD");
        let report = run(&OUTER, &raw, ValidationMode::Lenient, true);
        let kinds: Vec<_> = report.violations.iter().map(ValidationError::kind).collect();
        assert_eq!(kinds, vec!["unexpected_value_shape", "unexpected_value_shape"]);
    }

    #[test]
    fn unknown_fields_can_be_allowed() {
        let raw = RawAggregate::new().with("amount", "1").with("bogus", "x");
        assert!(!run(&OUTER, &raw, ValidationMode::Strict, true).is_valid());
        assert!(run(&OUTER, &raw, ValidationMode::Strict, false).is_valid());
    }

    #[test]
    fn nested_unknown_field_uses_dotted_path() {
        let raw = RawAggregate::new()
            .with("amount", "1")
            .with("left", inner("1", "USD").with("bogus", "x"));
        let report = run(&OUTER, &raw, ValidationMode::Strict, true);
        assert_eq!(report.violations.first().unwrap().path(), "left.bogus");
    }

    #[test]
    fn mode_parses_and_displays() {
        assert_eq!("lenient".parse::<ValidationMode>().unwrap(), ValidationMode::Lenient);
        assert_eq!(ValidationMode::Strict.to_string(), "strict");
        assert!("loose".parse::<ValidationMode>().is_err());
        assert_eq!(ValidationMode::default(), ValidationMode::Strict);
    }
}
