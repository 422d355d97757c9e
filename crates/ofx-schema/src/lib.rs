//! # ofx-schema: Declarative OFX Aggregate Schemas
//!
//! Declares OFX aggregates as static data and validates raw parser output
//! against them.
//!
//! - [`AggregateSchema`], [`FieldDescriptor`], [`MutexGroup`]: `const`
//!   schema declarations.
//! - [`RawAggregate`]: unvalidated field-name to value map.
//! - [`Validator`]: runs a strict or lenient pass and returns a
//!   [`ValidationReport`] holding a [`Record`] and the [`Violations`].
//! - [`Aggregate`] and [`Validated<T>`]: typed aggregates and the marker
//!   for values that passed validation.
//!
//! [`Violations`]: ofx_core::Violations

pub mod aggregate;
pub mod config;
pub mod error;
pub mod raw;
pub mod record;
pub mod schema;
pub mod validate;
pub mod validator;

pub use aggregate::{Aggregate, Validated};
pub use config::ValidatorConfig;
pub use error::SchemaError;
pub use raw::{RawAggregate, RawValue};
pub use record::{FieldValue, FromScalar, Record};
pub use schema::{AggregateSchema, FieldDescriptor, FieldKind, MutexGroup};
pub use validate::{ValidationMode, ValidationReport};
pub use validator::Validator;
