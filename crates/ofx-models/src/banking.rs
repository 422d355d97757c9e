//! # Banking Transactions
//!
//! `STMTTRN`, the statement transaction of bank and credit-card statement
//! responses. Amounts may carry either a `CURRENCY` or an `ORIGCURRENCY`
//! aggregate, never both.

use ofx_core::{CodeSet, CurrencyCode, Decimal, OfxDateTime, ValidationError};
use ofx_schema::{Aggregate, AggregateSchema, FieldDescriptor, RawAggregate, Record};
use serde::Serialize;

use crate::currency::{
    insert_currency_slots, Currency, HasCurrencyMutex, OrigCurrency, CURRENCY_MUTEX,
    CURRENCY_SLOT, ORIGCURRENCY_SLOT,
};

/// Schema of the `STMTTRN` aggregate.
pub const STMTTRN_SCHEMA: AggregateSchema = AggregateSchema::new(
    "STMTTRN",
    &[
        FieldDescriptor::one_of("trntype", CodeSet::TransactionType).required(),
        FieldDescriptor::datetime("dtposted").required(),
        FieldDescriptor::datetime("dtuser"),
        FieldDescriptor::datetime("dtavail"),
        FieldDescriptor::decimal("trnamt").required(),
        FieldDescriptor::text("fitid", 255).required(),
        FieldDescriptor::text("correctfitid", 255),
        FieldDescriptor::text("srvrtid", 10),
        FieldDescriptor::text("checknum", 12),
        FieldDescriptor::text("refnum", 32),
        FieldDescriptor::text("sic", 6),
        FieldDescriptor::text("payeeid", 12),
        FieldDescriptor::text("name", 32),
        FieldDescriptor::text("memo", 255),
        FieldDescriptor::text("inv401ksource", 32),
        CURRENCY_SLOT,
        ORIGCURRENCY_SLOT,
    ],
    &[CURRENCY_MUTEX],
);

/// `STMTTRN`: one posted bank transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StmtTrn {
    /// Transaction type (`TRNTYPE` code).
    pub trntype: String,
    /// Date posted.
    pub dtposted: OfxDateTime,
    /// Date initiated by the user.
    pub dtuser: Option<OfxDateTime>,
    /// Date funds become available.
    pub dtavail: Option<OfxDateTime>,
    /// Signed amount.
    pub trnamt: Decimal,
    /// Financial institution transaction id.
    pub fitid: String,
    /// FITID of a transaction this one corrects.
    pub correctfitid: Option<String>,
    /// Server transaction id.
    pub srvrtid: Option<String>,
    /// Check number.
    pub checknum: Option<String>,
    /// Reference number.
    pub refnum: Option<String>,
    /// Standard Industrial Code.
    pub sic: Option<String>,
    /// Payee identifier.
    pub payeeid: Option<String>,
    /// Payee name.
    pub name: Option<String>,
    /// Free-form memo.
    pub memo: Option<String>,
    /// 401(k) source.
    pub inv401ksource: Option<String>,
    /// Amounts are in this currency.
    pub currency: Option<Currency>,
    /// Amounts were converted from this currency.
    pub origcurrency: Option<OrigCurrency>,
}

impl Aggregate for StmtTrn {
    const SCHEMA: &'static AggregateSchema = &STMTTRN_SCHEMA;

    fn from_record(record: &Record) -> Result<Self, ValidationError> {
        Ok(Self {
            trntype: record.require_as("trntype")?,
            dtposted: record.require_as("dtposted")?,
            dtuser: record.get_as("dtuser")?,
            dtavail: record.get_as("dtavail")?,
            trnamt: record.require_as("trnamt")?,
            fitid: record.require_as("fitid")?,
            correctfitid: record.get_as("correctfitid")?,
            srvrtid: record.get_as("srvrtid")?,
            checknum: record.get_as("checknum")?,
            refnum: record.get_as("refnum")?,
            sic: record.get_as("sic")?,
            payeeid: record.get_as("payeeid")?,
            name: record.get_as("name")?,
            memo: record.get_as("memo")?,
            inv401ksource: record.get_as("inv401ksource")?,
            currency: record.nested("currency")?,
            origcurrency: record.nested("origcurrency")?,
        })
    }

    fn to_raw(&self) -> RawAggregate {
        let mut raw = RawAggregate::new()
            .with("trntype", self.trntype.as_str())
            .with("dtposted", self.dtposted.to_ofx())
            .with("trnamt", self.trnamt.to_string())
            .with("fitid", self.fitid.as_str());
        let dates = [("dtuser", &self.dtuser), ("dtavail", &self.dtavail)];
        for (name, value) in dates {
            if let Some(dt) = value {
                raw.insert(name, dt.to_ofx());
            }
        }
        let texts = [
            ("correctfitid", &self.correctfitid),
            ("srvrtid", &self.srvrtid),
            ("checknum", &self.checknum),
            ("refnum", &self.refnum),
            ("sic", &self.sic),
            ("payeeid", &self.payeeid),
            ("name", &self.name),
            ("memo", &self.memo),
            ("inv401ksource", &self.inv401ksource),
        ];
        for (name, value) in texts {
            if let Some(text) = value {
                raw.insert(name, text.as_str());
            }
        }
        insert_currency_slots(self, &mut raw);
        raw
    }
}

impl HasCurrencyMutex for StmtTrn {
    fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }

    fn origcurrency(&self) -> Option<&OrigCurrency> {
        self.origcurrency.as_ref()
    }
}

impl StmtTrn {
    /// Amount expressed in the statement's default currency: `trnamt`
    /// times the original currency's rate when amounts were converted,
    /// otherwise `trnamt` unchanged.
    ///
    /// Returns `None` when the product overflows the decimal range.
    pub fn default_currency_amount(&self) -> Option<Decimal> {
        match &self.origcurrency {
            Some(orig) if self.currency.is_none() => self.trnamt.checked_mul(orig.currate),
            _ => Some(self.trnamt),
        }
    }

    /// The currency code amounts are expressed in, if declared.
    pub fn amount_currency(&self) -> Option<&CurrencyCode> {
        self.currency_code()
    }
}
