//! # ofx-cli: the `ofxcheck` Tool
//!
//! Command-line front end for the OFX aggregate validator.
//!
//! ## Subcommands
//!
//! - `ofxcheck check FILE...`: validate aggregate records from YAML/JSON.
//! - `ofxcheck codes [SET]`: list or query the ISO and OFX code tables.
//!
//! ```bash
//! ofxcheck -v check --lenient statements.yaml
//! ofxcheck --config validator.yaml check --format json trades.json
//! ofxcheck codes currency --contains CNH
//! ```

pub mod check;
pub mod codes;
pub mod input;

use std::path::Path;

use anyhow::{Context, Result};
use ofx_schema::ValidatorConfig;

/// Load the validator configuration, or the defaults when no file is given.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a valid configuration.
pub fn load_config(path: Option<&Path>) -> Result<ValidatorConfig> {
    match path {
        Some(path) => ValidatorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ValidatorConfig::default()),
    }
}
