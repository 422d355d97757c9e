//! # ofxcheck entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ofx_cli::check::{run_check, CheckArgs};
use ofx_cli::codes::{run_codes, CodesArgs};

/// Validate OFX aggregates against their schemas and inspect the ISO/OFX
/// code tables.
#[derive(Parser, Debug)]
#[command(name = "ofxcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a validator configuration file (YAML or JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate aggregate records from YAML or JSON files.
    Check(CheckArgs),

    /// List code sets, their members, or test membership.
    Codes(CodesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "ofxcheck starting");

    let result = match cli.command {
        Commands::Check(args) => {
            ofx_cli::load_config(cli.config.as_deref()).and_then(|config| run_check(&args, config))
        }
        Commands::Codes(args) => run_codes(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_global_flags() {
        let cli = Cli::try_parse_from([
            "ofxcheck", "-vv", "--config", "v.yaml", "check", "--lenient", "a.yaml", "b.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("v.yaml")));
        match cli.command {
            Commands::Check(args) => {
                assert!(args.lenient);
                assert_eq!(args.files.len(), 2);
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn strict_and_lenient_conflict() {
        let err = Cli::try_parse_from(["ofxcheck", "check", "--strict", "--lenient", "a.yaml"]);
        assert!(err.is_err());
    }

    #[test]
    fn check_requires_files() {
        assert!(Cli::try_parse_from(["ofxcheck", "check"]).is_err());
    }

    #[test]
    fn contains_requires_a_set() {
        assert!(Cli::try_parse_from(["ofxcheck", "codes", "--contains", "USD"]).is_err());
        assert!(Cli::try_parse_from(["ofxcheck", "codes", "currency", "--contains", "USD"]).is_ok());
    }
}
