//! # Domain Sets
//!
//! Immutable, ordered sets of valid short codes that restrict the values of
//! enumerated fields. The standard sets (languages, currencies, countries and
//! the OFX enumerations) are built once on first use and shared process-wide.
//!
//! ## Invariants
//!
//! - A set never contains the same code twice. Caller-defined sets are
//!   checked by [`DomainSet::try_new`]; the built-in tables are checked by
//!   the tests in this module.
//! - Membership is an exact, case-sensitive match: `"usd"` is not `"USD"`.
//! - Nothing mutates a set after construction, so `&'static DomainSet` is
//!   freely shared across threads.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::codes;
use crate::error::{DomainSetError, OfxError};

/// An immutable, ordered collection of unique codes.
#[derive(Debug, Clone)]
pub struct DomainSet {
    name: &'static str,
    codes: &'static [&'static str],
    index: HashSet<&'static str>,
}

impl DomainSet {
    /// Build a set from a code table, rejecting duplicate entries.
    pub fn try_new(
        name: &'static str,
        codes: &'static [&'static str],
    ) -> Result<Self, DomainSetError> {
        let mut index = HashSet::with_capacity(codes.len());
        for code in codes {
            if !index.insert(*code) {
                return Err(DomainSetError::DuplicateCode {
                    set: name.to_string(),
                    code: (*code).to_string(),
                });
            }
        }
        Ok(Self { name, codes, index })
    }

    /// Build a set from one of the built-in tables.
    fn from_table(name: &'static str, codes: &'static [&'static str]) -> Self {
        Self {
            name,
            codes,
            index: codes.iter().copied().collect(),
        }
    }

    /// Exact-match membership test.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains(code)
    }

    /// Name of the set, used in error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of codes in the set.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the set has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over the codes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codes.iter().copied()
    }
}

/// Identifier for one of the built-in domain sets.
///
/// Schemas refer to sets by `CodeSet` rather than by reference so that
/// field descriptors stay plain `const` data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeSet {
    /// ISO 639-2 language codes.
    Language,
    /// ISO 4217 currency codes.
    Currency,
    /// ISO 3166-1 alpha-2 country codes.
    CountryAlpha2,
    /// ISO 3166-1 alpha-3 country codes.
    CountryAlpha3,
    /// OFX banking transaction types.
    TransactionType,
    /// OFX investment income types.
    IncomeType,
    /// OFX investment sub-account types.
    SubAccount,
}

impl CodeSet {
    /// Returns every built-in code set.
    pub fn all() -> &'static [CodeSet] {
        &[
            Self::Language,
            Self::Currency,
            Self::CountryAlpha2,
            Self::CountryAlpha3,
            Self::TransactionType,
            Self::IncomeType,
            Self::SubAccount,
        ]
    }

    /// Returns the snake_case identifier for this set.
    ///
    /// This matches the serde format and is the name reported in
    /// `InvalidEnumValue` errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Currency => "currency",
            Self::CountryAlpha2 => "country_alpha2",
            Self::CountryAlpha3 => "country_alpha3",
            Self::TransactionType => "trntype",
            Self::IncomeType => "incometype",
            Self::SubAccount => "subacct",
        }
    }

    /// The shared domain set for this identifier.
    pub fn domain(&self) -> &'static DomainSet {
        static LANGUAGE: OnceLock<DomainSet> = OnceLock::new();
        static CURRENCY: OnceLock<DomainSet> = OnceLock::new();
        static COUNTRY_ALPHA2: OnceLock<DomainSet> = OnceLock::new();
        static COUNTRY_ALPHA3: OnceLock<DomainSet> = OnceLock::new();
        static TRANSACTION_TYPE: OnceLock<DomainSet> = OnceLock::new();
        static INCOME_TYPE: OnceLock<DomainSet> = OnceLock::new();
        static SUB_ACCOUNT: OnceLock<DomainSet> = OnceLock::new();

        let (cell, table) = match self {
            Self::Language => (&LANGUAGE, codes::ISO_639_2),
            Self::Currency => (&CURRENCY, codes::ISO_4217),
            Self::CountryAlpha2 => (&COUNTRY_ALPHA2, codes::ISO_3166_1_ALPHA2),
            Self::CountryAlpha3 => (&COUNTRY_ALPHA3, codes::ISO_3166_1_ALPHA3),
            Self::TransactionType => (&TRANSACTION_TYPE, codes::OFX_TRNTYPE),
            Self::IncomeType => (&INCOME_TYPE, codes::OFX_INCOMETYPE),
            Self::SubAccount => (&SUB_ACCOUNT, codes::OFX_SUBACCT),
        };
        cell.get_or_init(|| DomainSet::from_table(self.as_str(), table))
    }

    /// Shorthand for `self.domain().contains(code)`.
    pub fn contains(&self, code: &str) -> bool {
        self.domain().contains(code)
    }
}

impl std::fmt::Display for CodeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeSet {
    type Err = OfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|set| set.as_str() == s)
            .ok_or_else(|| OfxError::UnknownCodeSet(s.to_string()))
    }
}

/// ISO 639-2 language codes.
pub fn language_codes() -> &'static DomainSet {
    CodeSet::Language.domain()
}

/// ISO 4217 currency codes.
pub fn currency_codes() -> &'static DomainSet {
    CodeSet::Currency.domain()
}

/// ISO 3166-1 alpha-2 country codes.
pub fn country_codes_alpha2() -> &'static DomainSet {
    CodeSet::CountryAlpha2.domain()
}

/// ISO 3166-1 alpha-3 country codes.
pub fn country_codes_alpha3() -> &'static DomainSet {
    CodeSet::CountryAlpha3.domain()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_have_no_duplicates() {
        for set in CodeSet::all() {
            let table: Vec<&str> = set.domain().iter().collect();
            let mut seen = HashSet::new();
            for code in &table {
                assert!(seen.insert(*code), "Duplicate code {code} in {set}");
            }
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(language_codes().len(), 472);
        assert_eq!(currency_codes().len(), 180);
        assert_eq!(country_codes_alpha2().len(), 249);
        assert_eq!(country_codes_alpha3().len(), 246);
    }

    #[test]
    fn test_contains_every_table_entry() {
        for set in CodeSet::all() {
            let domain = set.domain();
            for code in domain.iter() {
                assert!(domain.contains(code), "{set} should contain {code}");
            }
        }
    }

    #[test]
    fn test_currency_membership() {
        assert!(currency_codes().contains("USD"));
        assert!(currency_codes().contains("EUR"));
        assert!(currency_codes().contains("CNH"));
        assert!(!currency_codes().contains("ZZZ"));
        assert!(!currency_codes().contains("usd")); // case-sensitive
        assert!(!currency_codes().contains(""));
        assert!(!currency_codes().contains(" USD"));
    }

    #[test]
    fn test_country_sets_are_distinct() {
        assert!(country_codes_alpha2().contains("US"));
        assert!(!country_codes_alpha2().contains("USA"));
        assert!(country_codes_alpha3().contains("USA"));
        assert!(!country_codes_alpha3().contains("US"));
    }

    #[test]
    fn test_alpha3_table_kept_verbatim() {
        // The published alpha-3 table carries some two-letter entries.
        assert!(country_codes_alpha3().contains("DE"));
        assert!(country_codes_alpha3().contains("BM"));
        assert!(!country_codes_alpha3().contains("DEU"));
    }

    #[test]
    fn test_language_membership() {
        assert!(language_codes().contains("ENG"));
        assert!(language_codes().contains("ZZA"));
        assert!(!language_codes().contains("EN"));
    }

    #[test]
    fn test_iter_preserves_table_order() {
        let first: Vec<&str> = currency_codes().iter().take(3).collect();
        assert_eq!(first, vec!["AED", "AFN", "ALL"]);
        assert_eq!(currency_codes().iter().last(), Some("CNH"));
    }

    #[test]
    fn test_domain_is_shared() {
        let a = CodeSet::Currency.domain() as *const DomainSet;
        let b = currency_codes() as *const DomainSet;
        assert_eq!(a, b);
    }

    #[test]
    fn test_try_new_rejects_duplicates() {
        static TABLE: &[&str] = &["A", "B", "A"];
        let err = DomainSet::try_new("dupes", TABLE).unwrap_err();
        assert_eq!(
            err,
            DomainSetError::DuplicateCode {
                set: "dupes".to_string(),
                code: "A".to_string(),
            }
        );
    }

    #[test]
    fn test_try_new_accepts_unique() {
        static TABLE: &[&str] = &["Y", "N"];
        let set = DomainSet::try_new("yes_no", TABLE).unwrap();
        assert_eq!(set.name(), "yes_no");
        assert_eq!(set.len(), 2);
        assert!(set.contains("Y"));
        assert!(!set.contains("y"));
    }

    #[test]
    fn test_code_set_roundtrip() {
        for set in CodeSet::all() {
            let parsed: CodeSet = set.as_str().parse().unwrap();
            assert_eq!(*set, parsed);
            assert_eq!(set.domain().name(), set.as_str());
        }
    }

    #[test]
    fn test_code_set_serde_matches_as_str() {
        for set in CodeSet::all() {
            let json = serde_json::to_string(set).unwrap();
            assert_eq!(json, format!("\"{}\"", set.as_str()));
        }
    }

    #[test]
    fn test_code_set_from_str_invalid() {
        assert!("iso4217".parse::<CodeSet>().is_err());
        assert!("Currency".parse::<CodeSet>().is_err());
        assert!("".parse::<CodeSet>().is_err());
    }
}
