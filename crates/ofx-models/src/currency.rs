//! # Currency Aggregates
//!
//! `CURRENCY` and `ORIGCURRENCY` are structurally identical: an exchange
//! rate and an ISO 4217 code. They differ only in the slot they occupy in
//! an owning aggregate. `currency` holds amounts already in the local
//! currency of the statement; `origcurrency` holds amounts in the original
//! (foreign) currency. An owner may populate at most one of them.
//!
//! [`HasCurrencyMutex`] reads through whichever slot is populated:
//!
//! | Populated | `currency_kind` | `currency_code` | `exchange_rate` |
//! |-----------|-----------------|-----------------|-----------------|
//! | `currency` | `Local` | its `cursym` | its `currate` |
//! | `origcurrency` | `Original` | its `cursym` | its `currate` |
//! | neither | `None` | `None` | `None` |

use std::fmt;

use ofx_core::{CodeSet, CurrencyCode, Decimal, ValidationError};
use ofx_schema::{Aggregate, AggregateSchema, FieldDescriptor, MutexGroup, RawAggregate, Record};
use serde::{Deserialize, Serialize};

const CURRENCY_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::decimal("currate").required(),
    FieldDescriptor::one_of("cursym", CodeSet::Currency).required(),
];

/// Schema of the `CURRENCY` aggregate.
pub const CURRENCY_SCHEMA: AggregateSchema =
    AggregateSchema::new("CURRENCY", CURRENCY_FIELDS, &[]);

/// Schema of the `ORIGCURRENCY` aggregate.
pub const ORIGCURRENCY_SCHEMA: AggregateSchema =
    AggregateSchema::new("ORIGCURRENCY", CURRENCY_FIELDS, &[]);

/// The `currency` / `origcurrency` mutex group every currency-bearing
/// owner declares.
pub const CURRENCY_MUTEX: MutexGroup =
    MutexGroup::new("curtype", &["currency", "origcurrency"]);

/// Field descriptor for the `currency` slot of an owner.
pub const CURRENCY_SLOT: FieldDescriptor =
    FieldDescriptor::aggregate("currency", &CURRENCY_SCHEMA);

/// Field descriptor for the `origcurrency` slot of an owner.
pub const ORIGCURRENCY_SLOT: FieldDescriptor =
    FieldDescriptor::aggregate("origcurrency", &ORIGCURRENCY_SCHEMA);

/// Which currency slot of an owner is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyKind {
    /// The `currency` slot.
    Local,
    /// The `origcurrency` slot.
    Original,
}

impl CurrencyKind {
    /// `"local"` or `"original"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Original => "original",
        }
    }
}

impl fmt::Display for CurrencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `CURRENCY`: amounts are in this currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// Rate to the statement's default currency.
    pub currate: Decimal,
    /// ISO 4217 code.
    pub cursym: CurrencyCode,
}

/// `ORIGCURRENCY`: amounts were converted from this currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrigCurrency {
    /// Rate to the statement's default currency.
    pub currate: Decimal,
    /// ISO 4217 code.
    pub cursym: CurrencyCode,
}

fn currency_raw(currate: Decimal, cursym: &CurrencyCode) -> RawAggregate {
    RawAggregate::new()
        .with("currate", currate.to_string())
        .with("cursym", cursym.as_str())
}

impl Aggregate for Currency {
    const SCHEMA: &'static AggregateSchema = &CURRENCY_SCHEMA;

    fn from_record(record: &Record) -> Result<Self, ValidationError> {
        Ok(Self {
            currate: record.require_as("currate")?,
            cursym: record.require_as("cursym")?,
        })
    }

    fn to_raw(&self) -> RawAggregate {
        currency_raw(self.currate, &self.cursym)
    }
}

impl Aggregate for OrigCurrency {
    const SCHEMA: &'static AggregateSchema = &ORIGCURRENCY_SCHEMA;

    fn from_record(record: &Record) -> Result<Self, ValidationError> {
        Ok(Self {
            currate: record.require_as("currate")?,
            cursym: record.require_as("cursym")?,
        })
    }

    fn to_raw(&self) -> RawAggregate {
        currency_raw(self.currate, &self.cursym)
    }
}

/// The three derived currency properties, resolved together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedCurrency<'a> {
    /// Which slot they were read from.
    pub kind: CurrencyKind,
    /// Currency code of that slot.
    pub code: &'a CurrencyCode,
    /// Exchange rate of that slot.
    pub rate: Decimal,
}

/// Read-through access to an owner's `currency` / `origcurrency` pair.
///
/// Implementors expose the two slots; the provided methods resolve them,
/// local slot first.
pub trait HasCurrencyMutex {
    /// The `currency` slot.
    fn currency(&self) -> Option<&Currency>;

    /// The `origcurrency` slot.
    fn origcurrency(&self) -> Option<&OrigCurrency>;

    /// All three derived properties, or `None` if neither slot is set.
    fn resolved_currency(&self) -> Option<ResolvedCurrency<'_>> {
        if let Some(local) = self.currency() {
            return Some(ResolvedCurrency {
                kind: CurrencyKind::Local,
                code: &local.cursym,
                rate: local.currate,
            });
        }
        self.origcurrency().map(|orig| ResolvedCurrency {
            kind: CurrencyKind::Original,
            code: &orig.cursym,
            rate: orig.currate,
        })
    }

    /// Which slot is populated.
    fn currency_kind(&self) -> Option<CurrencyKind> {
        self.resolved_currency().map(|r| r.kind)
    }

    /// Currency code of the populated slot.
    fn currency_code(&self) -> Option<&CurrencyCode> {
        self.resolved_currency().map(|r| r.code)
    }

    /// Exchange rate of the populated slot.
    fn exchange_rate(&self) -> Option<Decimal> {
        self.resolved_currency().map(|r| r.rate)
    }
}

/// Insert the populated currency slot of `owner` into `raw`.
pub(crate) fn insert_currency_slots<T: HasCurrencyMutex>(owner: &T, raw: &mut RawAggregate) {
    if let Some(currency) = owner.currency() {
        raw.insert("currency", currency.to_raw());
    }
    if let Some(orig) = owner.origcurrency() {
        raw.insert("origcurrency", orig.to_raw());
    }
}
