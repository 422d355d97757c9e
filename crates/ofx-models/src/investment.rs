//! # Investment Transactions
//!
//! `INVTRAN` carries the identifiers and dates shared by every investment
//! transaction; `INCOME` is the income transaction (dividends, interest,
//! capital gains) built around it. `INCOME` amounts may carry a currency
//! slot just like banking transactions.

use ofx_core::{CodeSet, Decimal, OfxDateTime, ValidationError};
use ofx_schema::{Aggregate, AggregateSchema, FieldDescriptor, RawAggregate, Record};
use serde::Serialize;

use crate::currency::{
    insert_currency_slots, Currency, HasCurrencyMutex, OrigCurrency, CURRENCY_MUTEX,
    CURRENCY_SLOT, ORIGCURRENCY_SLOT,
};

/// Schema of the `INVTRAN` aggregate.
pub const INVTRAN_SCHEMA: AggregateSchema = AggregateSchema::new(
    "INVTRAN",
    &[
        FieldDescriptor::text("fitid", 255).required(),
        FieldDescriptor::text("srvrtid", 10),
        FieldDescriptor::datetime("dttrade").required(),
        FieldDescriptor::datetime("dtsettle"),
        FieldDescriptor::text("reversalfitid", 255),
        FieldDescriptor::text("memo", 255),
    ],
    &[],
);

/// Schema of the `INCOME` aggregate.
pub const INCOME_SCHEMA: AggregateSchema = AggregateSchema::new(
    "INCOME",
    &[
        FieldDescriptor::aggregate("invtran", &INVTRAN_SCHEMA).required(),
        FieldDescriptor::one_of("incometype", CodeSet::IncomeType).required(),
        FieldDescriptor::decimal("total").required(),
        FieldDescriptor::one_of("subacctsec", CodeSet::SubAccount).required(),
        FieldDescriptor::one_of("subacctfund", CodeSet::SubAccount).required(),
        FieldDescriptor::text("taxexempt", 1),
        FieldDescriptor::decimal("withholding"),
        CURRENCY_SLOT,
        ORIGCURRENCY_SLOT,
        FieldDescriptor::text("inv401ksource", 32),
    ],
    &[CURRENCY_MUTEX],
);

/// `INVTRAN`: common investment transaction data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvTran {
    /// Financial institution transaction id.
    pub fitid: String,
    /// Server transaction id.
    pub srvrtid: Option<String>,
    /// Trade date.
    pub dttrade: OfxDateTime,
    /// Settlement date.
    pub dtsettle: Option<OfxDateTime>,
    /// FITID of the transaction this one reverses.
    pub reversalfitid: Option<String>,
    /// Free-form memo.
    pub memo: Option<String>,
}

impl Aggregate for InvTran {
    const SCHEMA: &'static AggregateSchema = &INVTRAN_SCHEMA;

    fn from_record(record: &Record) -> Result<Self, ValidationError> {
        Ok(Self {
            fitid: record.require_as("fitid")?,
            srvrtid: record.get_as("srvrtid")?,
            dttrade: record.require_as("dttrade")?,
            dtsettle: record.get_as("dtsettle")?,
            reversalfitid: record.get_as("reversalfitid")?,
            memo: record.get_as("memo")?,
        })
    }

    fn to_raw(&self) -> RawAggregate {
        let mut raw = RawAggregate::new()
            .with("fitid", self.fitid.as_str())
            .with("dttrade", self.dttrade.to_ofx());
        if let Some(dt) = &self.dtsettle {
            raw.insert("dtsettle", dt.to_ofx());
        }
        for (name, value) in [
            ("srvrtid", &self.srvrtid),
            ("reversalfitid", &self.reversalfitid),
            ("memo", &self.memo),
        ] {
            if let Some(text) = value {
                raw.insert(name, text.as_str());
            }
        }
        raw
    }
}

/// `INCOME`: investment income received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Income {
    /// Transaction identifiers and dates.
    pub invtran: InvTran,
    /// Income type (`INCOMETYPE` code).
    pub incometype: String,
    /// Total income received.
    pub total: Decimal,
    /// Sub-account holding the security.
    pub subacctsec: String,
    /// Sub-account the income went to.
    pub subacctfund: String,
    /// `Y` if tax-exempt.
    pub taxexempt: Option<String>,
    /// Federal tax withheld.
    pub withholding: Option<Decimal>,
    /// Amounts are in this currency.
    pub currency: Option<Currency>,
    /// Amounts were converted from this currency.
    pub origcurrency: Option<OrigCurrency>,
    /// 401(k) source.
    pub inv401ksource: Option<String>,
}

impl Aggregate for Income {
    const SCHEMA: &'static AggregateSchema = &INCOME_SCHEMA;

    fn from_record(record: &Record) -> Result<Self, ValidationError> {
        let invtran = record
            .nested::<InvTran>("invtran")?
            .ok_or_else(|| ValidationError::MissingRequiredField {
                field: "invtran".to_string(),
            })?;
        Ok(Self {
            invtran,
            incometype: record.require_as("incometype")?,
            total: record.require_as("total")?,
            subacctsec: record.require_as("subacctsec")?,
            subacctfund: record.require_as("subacctfund")?,
            taxexempt: record.get_as("taxexempt")?,
            withholding: record.get_as("withholding")?,
            currency: record.nested("currency")?,
            origcurrency: record.nested("origcurrency")?,
            inv401ksource: record.get_as("inv401ksource")?,
        })
    }

    fn to_raw(&self) -> RawAggregate {
        let mut raw = RawAggregate::new()
            .with("invtran", self.invtran.to_raw())
            .with("incometype", self.incometype.as_str())
            .with("total", self.total.to_string())
            .with("subacctsec", self.subacctsec.as_str())
            .with("subacctfund", self.subacctfund.as_str());
        if let Some(flag) = &self.taxexempt {
            raw.insert("taxexempt", flag.as_str());
        }
        if let Some(withholding) = self.withholding {
            raw.insert("withholding", withholding.to_string());
        }
        if let Some(source) = &self.inv401ksource {
            raw.insert("inv401ksource", source.as_str());
        }
        insert_currency_slots(self, &mut raw);
        raw
    }
}

impl HasCurrencyMutex for Income {
    fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }

    fn origcurrency(&self) -> Option<&OrigCurrency> {
        self.origcurrency.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyKind;
    use ofx_schema::Validator;

    fn invtran() -> RawAggregate {
        RawAggregate::new()
            .with("fitid", "T-1")
            .with("dttrade", "20240301")
    }

    fn income() -> RawAggregate {
        RawAggregate::new()
            .with("invtran", invtran())
            .with("incometype", "DIV")
            .with("total", "12.34")
            .with("subacctsec", "CASH")
            .with("subacctfund", "CASH")
    }

    #[test]
    fn schemas_are_well_formed() {
        INVTRAN_SCHEMA.check_definition().unwrap();
        INCOME_SCHEMA.check_definition().unwrap();
    }

    #[test]
    fn income_builds_with_nested_invtran() {
        let inc = Income::from_raw(&income()).unwrap();
        assert_eq!(inc.invtran.fitid, "T-1");
        assert_eq!(inc.total.to_string(), "12.34");
        assert!(inc.currency_kind().is_none());
    }

    #[test]
    fn missing_invtran_is_required() {
        let mut raw = income();
        raw.insert("invtran", "");
        let err = Income::from_raw(&raw).unwrap_err();
        assert_eq!(
            err.violations().and_then(|v| v.first()).map(ValidationError::path),
            Some("invtran")
        );
    }

    #[test]
    fn nested_invtran_errors_have_dotted_paths() {
        let raw = income().with("invtran", RawAggregate::new().with("fitid", "T-1"));
        let err = Income::from_raw(&raw).unwrap_err();
        assert_eq!(
            err.violations().and_then(|v| v.first()),
            Some(&ValidationError::MissingRequiredField {
                field: "invtran.dttrade".to_string()
            })
        );
    }

    #[test]
    fn bad_income_type_and_subaccount() {
        let raw = income()
            .with("incometype", "BONUS")
            .with("subacctfund", "cash");
        let report = Validator::lenient().check(&INCOME_SCHEMA, &raw);
        let paths: Vec<_> = report.violations.iter().map(ValidationError::path).collect();
        assert_eq!(paths, vec!["incometype", "subacctfund"]);
        assert!(report.record.is_set("invtran"));
    }

    #[test]
    fn original_currency_on_income() {
        let raw = income().with(
            "origcurrency",
            RawAggregate::new().with("currate", "0.80").with("cursym", "EUR"),
        );
        let inc = Income::from_raw(&raw).unwrap();
        assert_eq!(inc.currency_kind(), Some(CurrencyKind::Original));
        assert_eq!(inc.currency_code().unwrap(), "EUR");
    }

    #[test]
    fn round_trip_is_stable() {
        let raw = income()
            .with("withholding", "1.00")
            .with("taxexempt", "N");
        let inc = Income::from_raw(&raw).unwrap();
        let rendered = inc.to_raw();
        assert_eq!(Income::from_raw(&rendered).unwrap(), inc);
        assert_eq!(rendered.get("withholding"), raw.get("withholding"));
    }
}
