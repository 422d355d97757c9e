//! Errors raised by the schema layer.

use ofx_core::Violations;
use thiserror::Error;

/// Error from validating, building, or configuring aggregates.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The input did not conform to the aggregate schema.
    #[error("validation failed for aggregate '{aggregate}':\n{violations}")]
    ValidationFailed {
        /// Name of the aggregate that was validated.
        aggregate: String,
        /// Every violation collected by the pass (exactly one in strict mode).
        violations: Violations,
    },

    /// A validator configuration file could not be loaded.
    #[error("config load error for '{path}': {reason}")]
    ConfigLoad {
        /// Path or identifier of the config source.
        path: String,
        /// Reason the config could not be loaded.
        reason: String,
    },

    /// A schema declaration is malformed.
    #[error("invalid schema definition for '{aggregate}': {reason}")]
    Definition {
        /// Name of the offending aggregate schema.
        aggregate: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl SchemaError {
    /// The violations carried by a `ValidationFailed` error.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::ValidationFailed { violations, .. } => Some(violations),
            _ => None,
        }
    }
}
