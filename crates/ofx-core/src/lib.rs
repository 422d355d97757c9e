//! # ofx-core: Foundational Types for OFX Aggregates
//!
//! This crate is the leaf of the workspace. It defines the value-level
//! building blocks that the aggregate schema engine (`ofx-schema`) and the
//! concrete OFX models (`ofx-models`) are assembled from.
//!
//! ## Key Design Principles
//!
//! 1. **Domain sets are process-wide constants.** Language, currency and
//!    country tables (plus the OFX enumerations) are built once into
//!    hashed [`DomainSet`]s and never mutated. Schemas address them through
//!    the `Copy` identifier [`CodeSet`].
//!
//! 2. **One validation entry point per scalar.** [`ScalarKind::validate`]
//!    turns a raw parser string into a typed [`ScalarValue`] or a single
//!    [`ValidationError`]. Decimals keep the scale they were written with.
//!
//! 3. **A closed error taxonomy.** Every violated constraint is one
//!    `ValidationError` variant naming the field path it concerns.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ofx-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod code;
pub mod codes;
pub mod domain;
pub mod error;
pub mod field;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use code::CurrencyCode;
pub use domain::{
    country_codes_alpha2, country_codes_alpha3, currency_codes, language_codes, CodeSet,
    DomainSet,
};
pub use error::{DomainSetError, OfxError, ValidationError, Violations};
pub use field::{ScalarKind, ScalarValue};
pub use rust_decimal::Decimal;
pub use temporal::OfxDateTime;
