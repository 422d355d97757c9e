//! Input documents for `ofxcheck check`.
//!
//! A document holds one record or a list of records:
//!
//! ```yaml
//! - aggregate: STMTTRN
//!   fields:
//!     trntype: DEBIT
//!     dtposted: "20240115"
//!     trnamt: "-10.00"
//!     fitid: "1"
//!     currency: { currate: "1.25", cursym: USD }
//! ```
//!
//! `.yaml`/`.yml` files are read as YAML, everything else as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use ofx_schema::RawAggregate;
use serde::Deserialize;

/// One aggregate instance to validate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputRecord {
    /// OFX tag of the aggregate, e.g. `STMTTRN`.
    pub aggregate: String,
    /// Raw field values.
    #[serde(default)]
    pub fields: RawAggregate,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Many(Vec<InputRecord>),
    One(InputRecord),
}

impl From<InputDocument> for Vec<InputRecord> {
    fn from(doc: InputDocument) -> Self {
        match doc {
            InputDocument::Many(records) => records,
            InputDocument::One(record) => vec![record],
        }
    }
}

/// Whether `path` names a YAML file.
pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"))
}

/// Parse records from document text.
///
/// # Errors
///
/// Fails if the text is not a record or a list of records.
pub fn parse_records(text: &str, yaml: bool) -> Result<Vec<InputRecord>> {
    let doc: InputDocument = if yaml {
        serde_yaml::from_str(text).context("invalid YAML input")?
    } else {
        serde_json::from_str(text).context("invalid JSON input")?
    };
    Ok(doc.into())
}

/// Load every record from a file.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed.
pub fn load_records(path: &Path) -> Result<Vec<InputRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let records = parse_records(&text, is_yaml(path))
        .with_context(|| format!("cannot parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded input");
    Ok(records)
}
