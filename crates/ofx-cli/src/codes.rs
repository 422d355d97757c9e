//! # Codes Subcommand
//!
//! Inspects the built-in code tables:
//!
//! ```bash
//! ofxcheck codes                         # list sets and their sizes
//! ofxcheck codes currency                # list every currency code
//! ofxcheck codes currency --contains USD --contains ZZZ
//! ```

use anyhow::Result;
use clap::Args;
use ofx_core::CodeSet;

/// Arguments for `ofxcheck codes`.
#[derive(Args, Debug)]
pub struct CodesArgs {
    /// Code set to inspect (language, currency, country_alpha2,
    /// country_alpha3, trntype, incometype, subacct).
    #[arg(value_name = "SET")]
    pub set: Option<String>,

    /// Test membership of a code instead of listing. Repeatable.
    #[arg(long = "contains", value_name = "CODE", requires = "set")]
    pub contains: Vec<String>,
}

/// Membership of each code in `set`, in argument order.
pub fn membership(set: CodeSet, codes: &[String]) -> Vec<(String, bool)> {
    codes
        .iter()
        .map(|code| (code.clone(), set.contains(code)))
        .collect()
}

/// One line per set: name and size.
pub fn summary_lines() -> Vec<String> {
    CodeSet::all()
        .iter()
        .map(|set| format!("{:<16}{:>5}", set.as_str(), set.domain().len()))
        .collect()
}

/// Execute the codes subcommand.
///
/// Returns exit code: 1 if any `--contains` code is not a member, else 0.
pub fn run_codes(args: &CodesArgs) -> Result<u8> {
    let Some(name) = &args.set else {
        for line in summary_lines() {
            println!("{line}");
        }
        return Ok(0);
    };

    let set: CodeSet = name.parse()?;
    if args.contains.is_empty() {
        for code in set.domain().iter() {
            println!("{code}");
        }
        return Ok(0);
    }

    let results = membership(set, &args.contains);
    for (code, member) in &results {
        println!("{code}: {}", if *member { "yes" } else { "no" });
    }
    let missing = results.iter().filter(|(_, member)| !member).count();
    tracing::info!(set = %set, checked = results.len(), missing, "membership checked");
    Ok(u8::from(missing > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_covers_every_set() {
        let lines = summary_lines();
        assert_eq!(lines.len(), CodeSet::all().len());
        assert!(lines.iter().any(|l| l.starts_with("currency") && l.ends_with("180")));
    }

    #[test]
    fn membership_in_argument_order() {
        let codes = vec!["USD".to_string(), "ZZZ".to_string(), "usd".to_string()];
        assert_eq!(
            membership(CodeSet::Currency, &codes),
            vec![
                ("USD".to_string(), true),
                ("ZZZ".to_string(), false),
                ("usd".to_string(), false),
            ]
        );
    }

    #[test]
    fn run_codes_exit_codes() {
        let all_known = CodesArgs {
            set: Some("country_alpha2".to_string()),
            contains: vec!["US".to_string(), "DE".to_string()],
        };
        assert_eq!(run_codes(&all_known).unwrap(), 0);
        let one_missing = CodesArgs {
            set: Some("trntype".to_string()),
            contains: vec!["DEBIT".to_string(), "WIRE".to_string()],
        };
        assert_eq!(run_codes(&one_missing).unwrap(), 1);
    }

    #[test]
    fn unknown_set_is_an_error() {
        let args = CodesArgs {
            set: Some("planets".to_string()),
            contains: Vec::new(),
        };
        assert!(run_codes(&args).is_err());
    }
}
