//! # Aggregate Registry
//!
//! Maps OFX tag names to the aggregate types this crate models, so callers
//! holding only a tag (a parser, the `ofxcheck` binary) can validate and
//! build the right type.

use std::fmt;
use std::str::FromStr;

use ofx_schema::{
    Aggregate, AggregateSchema, RawAggregate, SchemaError, ValidationReport, Validator,
};
use serde::Serialize;
use thiserror::Error;

use crate::banking::StmtTrn;
use crate::currency::{Currency, HasCurrencyMutex, OrigCurrency, ResolvedCurrency};
use crate::investment::{Income, InvTran};

/// Error resolving an aggregate tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown aggregate tag: {0:?}")]
pub struct UnknownAggregate(pub String);

/// Every aggregate type known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateKind {
    /// `CURRENCY`
    Currency,
    /// `ORIGCURRENCY`
    OrigCurrency,
    /// `STMTTRN`
    StmtTrn,
    /// `INVTRAN`
    InvTran,
    /// `INCOME`
    Income,
}

impl AggregateKind {
    /// All registered kinds.
    pub fn all() -> &'static [AggregateKind] {
        &[
            Self::Currency,
            Self::OrigCurrency,
            Self::StmtTrn,
            Self::InvTran,
            Self::Income,
        ]
    }

    /// The static schema of this kind.
    pub fn schema(&self) -> &'static AggregateSchema {
        match self {
            Self::Currency => Currency::SCHEMA,
            Self::OrigCurrency => OrigCurrency::SCHEMA,
            Self::StmtTrn => StmtTrn::SCHEMA,
            Self::InvTran => InvTran::SCHEMA,
            Self::Income => Income::SCHEMA,
        }
    }

    /// The OFX tag, e.g. `STMTTRN`.
    pub fn tag(&self) -> &'static str {
        self.schema().name
    }

    /// Run a validation pass for this kind.
    pub fn check(&self, validator: &Validator, raw: &RawAggregate) -> ValidationReport {
        validator.check(self.schema(), raw)
    }

    /// Validate and build the typed aggregate.
    ///
    /// # Errors
    ///
    /// `SchemaError::ValidationFailed` as for [`Validator::build`].
    pub fn build(
        &self,
        validator: &Validator,
        raw: &RawAggregate,
    ) -> Result<AnyAggregate, SchemaError> {
        Ok(match self {
            Self::Currency => AnyAggregate::Currency(validator.build(raw)?),
            Self::OrigCurrency => AnyAggregate::OrigCurrency(validator.build(raw)?),
            Self::StmtTrn => AnyAggregate::StmtTrn(Box::new(validator.build(raw)?)),
            Self::InvTran => AnyAggregate::InvTran(validator.build(raw)?),
            Self::Income => AnyAggregate::Income(Box::new(validator.build(raw)?)),
        })
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AggregateKind {
    type Err = UnknownAggregate;

    /// Tags match case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAggregate(s.to_string()))
    }
}

/// A built aggregate of any registered kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyAggregate {
    /// `CURRENCY`
    Currency(Currency),
    /// `ORIGCURRENCY`
    OrigCurrency(OrigCurrency),
    /// `STMTTRN`
    StmtTrn(Box<StmtTrn>),
    /// `INVTRAN`
    InvTran(InvTran),
    /// `INCOME`
    Income(Box<Income>),
}

impl AnyAggregate {
    /// Which kind this is.
    pub fn kind(&self) -> AggregateKind {
        match self {
            Self::Currency(_) => AggregateKind::Currency,
            Self::OrigCurrency(_) => AggregateKind::OrigCurrency,
            Self::StmtTrn(_) => AggregateKind::StmtTrn,
            Self::InvTran(_) => AggregateKind::InvTran,
            Self::Income(_) => AggregateKind::Income,
        }
    }

    /// Derived currency properties, for kinds that own a currency pair.
    pub fn resolved_currency(&self) -> Option<ResolvedCurrency<'_>> {
        match self {
            Self::StmtTrn(trn) => trn.resolved_currency(),
            Self::Income(inc) => inc.resolved_currency(),
            Self::Currency(_) | Self::OrigCurrency(_) | Self::InvTran(_) => None,
        }
    }

    /// Render back to raw input.
    pub fn to_raw(&self) -> RawAggregate {
        match self {
            Self::Currency(a) => a.to_raw(),
            Self::OrigCurrency(a) => a.to_raw(),
            Self::StmtTrn(a) => a.to_raw(),
            Self::InvTran(a) => a.to_raw(),
            Self::Income(a) => a.to_raw(),
        }
    }
}
