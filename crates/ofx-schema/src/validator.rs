//! # Validator
//!
//! Entry point for validating raw aggregates. A [`Validator`] is a small
//! `Copy` value carrying a [`ValidatorConfig`]; it holds no schema state,
//! since schemas are static.

use crate::aggregate::Aggregate;
use crate::config::ValidatorConfig;
use crate::error::SchemaError;
use crate::raw::RawAggregate;
use crate::schema::AggregateSchema;
use crate::validate::{self, ValidationMode, ValidationReport};

/// Validates raw aggregates under a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// A validator with the given configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Strict mode, unknown fields rejected.
    pub fn strict() -> Self {
        Self::new(ValidatorConfig::strict())
    }

    /// Lenient mode, unknown fields rejected.
    pub fn lenient() -> Self {
        Self::new(ValidatorConfig::lenient())
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The active mode.
    pub fn mode(&self) -> ValidationMode {
        self.config.mode
    }

    /// Run a validation pass and return the record with every violation
    /// found (at most one in strict mode).
    pub fn check(&self, schema: &'static AggregateSchema, raw: &RawAggregate) -> ValidationReport {
        let report = validate::run(
            schema,
            raw,
            self.config.mode,
            self.config.reject_unknown_fields,
        );
        tracing::debug!(
            aggregate = schema.name,
            mode = %self.config.mode,
            violations = report.violations.len(),
            "aggregate validated"
        );
        report
    }

    /// Validate and build a typed aggregate.
    ///
    /// # Errors
    ///
    /// `SchemaError::ValidationFailed` carrying the first violation in
    /// strict mode, or every violation in lenient mode.
    pub fn build<T: Aggregate>(&self, raw: &RawAggregate) -> Result<T, SchemaError> {
        let failed = |violations| SchemaError::ValidationFailed {
            aggregate: T::SCHEMA.name.to_string(),
            violations,
        };
        let record = self.check(T::SCHEMA, raw).into_result().map_err(failed)?;
        T::from_record(&record).map_err(|e| failed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, MutexGroup};
    use ofx_core::{CodeSet, ValidationError};

    const ACCT: AggregateSchema = AggregateSchema::new(
        "ACCT",
        &[
            FieldDescriptor::one_of("cursym", CodeSet::Currency).required(),
            FieldDescriptor::decimal("bal").required(),
            FieldDescriptor::one_of("country", CodeSet::CountryAlpha3),
            FieldDescriptor::one_of("lang", CodeSet::Language),
        ],
        &[MutexGroup::new("locale", &["country", "lang"])],
    );

    #[test]
    fn strict_reports_one() {
        let raw = RawAggregate::new().with("cursym", "XXX1");
        let report = Validator::strict().check(&ACCT, &raw);
        assert_eq!(report.violations.len(), 1);
    }

    #[test]
    fn lenient_reports_all() {
        let raw = RawAggregate::new()
            .with("cursym", "XXX1")
            .with("country", "USA")
            .with("lang", "ENG");
        let report = Validator::lenient().check(&ACCT, &raw);
        let kinds: Vec<_> = report.violations.iter().map(ValidationError::kind).collect();
        assert_eq!(
            kinds,
            vec!["invalid_enum_value", "missing_required_field", "mutex_violation"]
        );
        assert!(report.record.is_set("country"));
        assert!(!report.record.is_set("cursym"));
    }

    #[test]
    fn unknown_fields_follow_config() {
        let raw = RawAggregate::new()
            .with("cursym", "USD")
            .with("bal", "1")
            .with("nickname", "x");
        assert!(!Validator::strict().check(&ACCT, &raw).is_valid());
        let open = Validator::new(ValidatorConfig {
            reject_unknown_fields: false,
            ..ValidatorConfig::strict()
        });
        assert!(open.check(&ACCT, &raw).is_valid());
        assert_eq!(open.mode(), ValidationMode::Strict);
    }
}
