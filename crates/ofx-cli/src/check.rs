//! # Check Subcommand
//!
//! Validates every record in the given input files against the schema its
//! `aggregate` tag names, and prints one line per record plus the
//! violations of failing records.
//!
//! Exit codes: strict mode stops at the first failing record and exits 1;
//! lenient mode reports every violation of every record and exits 0.
//! Unreadable input is an operational error (exit 1 via `anyhow`).

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use ofx_core::{Decimal, ValidationError};
use ofx_models::{AggregateKind, CurrencyKind};
use ofx_schema::{Record, ValidationMode, Validator, ValidatorConfig};
use serde::Serialize;

use crate::input::{load_records, InputRecord};

/// Arguments for `ofxcheck check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input files (YAML or JSON) holding aggregate records.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Stop at the first violation (overrides the config file).
    #[arg(long, conflicts_with = "lenient")]
    pub strict: bool,

    /// Collect every violation (overrides the config file).
    #[arg(long)]
    pub lenient: bool,

    /// Accept fields the schema does not declare.
    #[arg(long)]
    pub allow_unknown_fields: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per record.
    Text,
    /// A JSON array of outcomes.
    Json,
}

impl CheckArgs {
    /// Apply command-line overrides to a loaded configuration.
    pub fn apply(&self, mut config: ValidatorConfig) -> ValidatorConfig {
        if self.strict {
            config.mode = ValidationMode::Strict;
        }
        if self.lenient {
            config.mode = ValidationMode::Lenient;
        }
        if self.allow_unknown_fields {
            config.reject_unknown_fields = false;
        }
        config
    }
}

/// Currency properties of a valid currency-bearing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencySummary {
    /// `local` or `original`.
    pub kind: CurrencyKind,
    /// ISO 4217 code.
    pub code: String,
    /// Exchange rate.
    pub rate: Decimal,
}

/// Result of checking one input record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutcome {
    /// Source file.
    pub file: String,
    /// Position of the record in its file.
    pub index: usize,
    /// Aggregate tag as written in the input.
    pub aggregate: String,
    /// Whether the record satisfied its schema.
    pub valid: bool,
    /// Violations found, in validation order.
    pub violations: Vec<ValidationError>,
    /// Set when the record could not be checked at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The fields that validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,
    /// Derived currency properties, when the record is valid and has any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencySummary>,
}

/// One status line, followed by indented errors and violations.
impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.valid { "OK" } else { "FAIL" };
        write!(f, "  {status}: {}[{}] {}", self.file, self.index, self.aggregate)?;
        if let Some(cur) = &self.currency {
            write!(f, " ({} {} @ {})", cur.kind, cur.code, cur.rate)?;
        }
        if let Some(error) = &self.error {
            write!(f, "\n    {error}")?;
        }
        for violation in &self.violations {
            write!(f, "\n    {violation}")?;
        }
        Ok(())
    }
}

/// Check one record.
///
/// # Errors
///
/// Fails only if a record that passed validation cannot be built into its
/// typed form.
pub fn check_record(
    validator: &Validator,
    file: &str,
    index: usize,
    input: &InputRecord,
) -> Result<RecordOutcome> {
    let mut outcome = RecordOutcome {
        file: file.to_string(),
        index,
        aggregate: input.aggregate.clone(),
        valid: false,
        violations: Vec::new(),
        error: None,
        record: None,
        currency: None,
    };

    let kind = match input.aggregate.parse::<AggregateKind>() {
        Ok(kind) => kind,
        Err(e) => {
            outcome.error = Some(e.to_string());
            return Ok(outcome);
        }
    };

    let report = kind.check(validator, &input.fields);
    outcome.valid = report.is_valid();
    if outcome.valid {
        let built = kind
            .build(validator, &input.fields)
            .with_context(|| format!("{file}[{index}]: cannot build {kind}"))?;
        outcome.currency = built.resolved_currency().map(|r| CurrencySummary {
            kind: r.kind,
            code: r.code.to_string(),
            rate: r.rate,
        });
    }
    outcome.violations = report.violations.into_inner();
    outcome.record = Some(report.record);
    Ok(outcome)
}

/// Check every record of one file, stopping early in strict mode.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed.
pub fn check_file(validator: &Validator, path: &Path) -> Result<Vec<RecordOutcome>> {
    let records = load_records(path)?;
    let file = path.display().to_string();
    let mut outcomes = Vec::with_capacity(records.len());
    for (index, input) in records.iter().enumerate() {
        let outcome = check_record(validator, &file, index, input)?;
        let stop = !outcome.valid && validator.mode() == ValidationMode::Strict;
        outcomes.push(outcome);
        if stop {
            break;
        }
    }
    Ok(outcomes)
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every record passed or in lenient mode, 1
/// when strict validation failed.
pub fn run_check(args: &CheckArgs, config: ValidatorConfig) -> Result<u8> {
    let validator = Validator::new(args.apply(config));
    tracing::info!(
        mode = %validator.mode(),
        reject_unknown_fields = validator.config().reject_unknown_fields,
        files = args.files.len(),
        "checking aggregate records"
    );

    let mut outcomes = Vec::new();
    for path in &args.files {
        let file_outcomes = check_file(&validator, path)?;
        let failed = file_outcomes.iter().any(|o| !o.valid);
        outcomes.extend(file_outcomes);
        if failed && validator.mode() == ValidationMode::Strict {
            break;
        }
    }

    let total = outcomes.len();
    let passed = outcomes.iter().filter(|o| o.valid).count();
    let violations: usize = outcomes.iter().map(|o| o.violations.len()).sum();
    tracing::info!(total, passed, violations, "check complete");

    match args.format {
        OutputFormat::Text => {
            for outcome in &outcomes {
                println!("{outcome}");
            }
            println!("Records: {passed}/{total} passed");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        }
    }

    if passed < total && validator.mode() == ValidationMode::Strict {
        Ok(1)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_records;

    const RECORDS: &str = r#"
- aggregate: STMTTRN
  fields:
    trntype: DEBIT
    dtposted: "20240115"
    trnamt: "-10.00"
    fitid: "1"
    currency: { currate: "1.25", cursym: USD }
- aggregate: STMTTRN
  fields:
    trntype: CREDIT
    dtposted: "20240116"
    trnamt: "5.00"
    fitid: "2"
    currency: { currate: "1.25", cursym: USD }
    origcurrency: { currate: "0.80", cursym: EUR }
- aggregate: INVBUY
- aggregate: ORIGCURRENCY
  fields: { currate: "0.80", cursym: EUR }
"#;

    fn args(lenient: bool) -> CheckArgs {
        CheckArgs {
            files: Vec::new(),
            strict: false,
            lenient,
            allow_unknown_fields: false,
            format: OutputFormat::Text,
        }
    }

    fn write_records(dir: &Path) -> PathBuf {
        let path = dir.join("records.yaml");
        std::fs::write(&path, RECORDS).unwrap();
        path
    }

    #[test]
    fn valid_record_reports_currency() {
        let records = parse_records(RECORDS, true).unwrap();
        let outcome = check_record(&Validator::strict(), "t.yaml", 0, &records[0]).unwrap();
        assert!(outcome.valid);
        let currency = outcome.currency.clone().unwrap();
        assert_eq!(currency.kind, CurrencyKind::Local);
        assert_eq!(currency.code, "USD");
        assert_eq!(outcome.to_string(), "  OK: t.yaml[0] STMTTRN (local USD @ 1.25)");
    }

    #[test]
    fn mutex_violation_is_reported() {
        let records = parse_records(RECORDS, true).unwrap();
        let outcome = check_record(&Validator::strict(), "t.yaml", 1, &records[1]).unwrap();
        assert!(!outcome.valid);
        assert_eq!(outcome.violations[0].kind(), "mutex_violation");
        assert!(outcome.currency.is_none());
        let text = outcome.to_string();
        assert!(text.starts_with("  FAIL: t.yaml[1] STMTTRN\n    mutex group 'curtype'"));
    }

    #[test]
    fn unknown_tag_is_a_failed_outcome() {
        let records = parse_records(RECORDS, true).unwrap();
        let outcome = check_record(&Validator::lenient(), "t.yaml", 2, &records[2]).unwrap();
        assert!(!outcome.valid);
        assert!(outcome.error.as_deref().unwrap().contains("INVBUY"));
        assert_eq!(
            outcome.to_string(),
            "  FAIL: t.yaml[2] INVBUY\n    unknown aggregate tag: \"INVBUY\""
        );
    }

    #[test]
    fn strict_file_check_stops_early() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_records(dir.path());
        let outcomes = check_file(&Validator::strict(), &path).unwrap();
        assert_eq!(outcomes.len(), 2);
        let outcomes = check_file(&Validator::lenient(), &path).unwrap();
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[3].valid);
    }

    #[test]
    fn flags_override_config() {
        let lenient = args(true).apply(ValidatorConfig::strict());
        assert_eq!(lenient.mode, ValidationMode::Lenient);
        let mut a = args(false);
        a.strict = true;
        a.allow_unknown_fields = true;
        let strict = a.apply(ValidatorConfig::lenient());
        assert_eq!(strict.mode, ValidationMode::Strict);
        assert!(!strict.reject_unknown_fields);
    }

    #[test]
    fn exit_codes_follow_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_records(dir.path());
        let mut strict = args(false);
        strict.files = vec![path.clone()];
        assert_eq!(run_check(&strict, ValidatorConfig::default()).unwrap(), 1);
        let mut lenient = args(true);
        lenient.files = vec![path];
        lenient.format = OutputFormat::Json;
        assert_eq!(run_check(&lenient, ValidatorConfig::default()).unwrap(), 0);
    }

    #[test]
    fn outcomes_serialize_to_json() {
        let records = parse_records(RECORDS, true).unwrap();
        let outcome = check_record(&Validator::lenient(), "t.yaml", 1, &records[1]).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["violations"][0]["kind"], "mutex_violation");
        assert_eq!(json["record"]["origcurrency"]["cursym"], "EUR");
        assert!(json.get("currency").is_none());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(true);
        a.files = vec![dir.path().join("absent.yaml")];
        assert!(run_check(&a, ValidatorConfig::default()).is_err());
    }
}
