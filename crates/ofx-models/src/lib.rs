//! # ofx-models: Concrete OFX Aggregates
//!
//! Typed OFX aggregates declared on top of `ofx-schema`:
//!
//! - **currency**: `CURRENCY`, `ORIGCURRENCY` and the [`HasCurrencyMutex`]
//!   accessor that resolves whichever of the two an owner carries.
//! - **banking**: `STMTTRN`.
//! - **investment**: `INVTRAN` and `INCOME`.
//! - **registry**: tag-based dispatch over all of the above.
//!
//! Every owner of a currency pair declares [`CURRENCY_MUTEX`] in its
//! schema, so validation and the accessor always agree on which slot is
//! in use.

pub mod banking;
pub mod currency;
pub mod investment;
pub mod registry;

pub use banking::{StmtTrn, STMTTRN_SCHEMA};
pub use currency::{
    Currency, CurrencyKind, HasCurrencyMutex, OrigCurrency, ResolvedCurrency, CURRENCY_MUTEX,
    CURRENCY_SCHEMA, ORIGCURRENCY_SCHEMA,
};
pub use investment::{Income, InvTran, INCOME_SCHEMA, INVTRAN_SCHEMA};
pub use registry::{AggregateKind, AnyAggregate, UnknownAggregate};
