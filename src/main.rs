//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `osint_lookup` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - JSON output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process;

use osint_lookup::initialization::init_logger_with;
use osint_lookup::{
    build_catalog, check_email_breaches, lookup_tax_id, validate_process_number, validate_tax_id,
    Config, IdentifierKind, LogFormat, LogLevel,
};

#[derive(Parser)]
#[command(
    name = "osint_lookup",
    about = "OSINT aggregation helper: lookup links, breach checks, tax-registry lookups",
    version
)]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the lookup-link catalog for an identifier
    Links {
        /// Kind of identifier
        #[arg(value_enum)]
        kind: IdentifierKind,
        /// The identifier itself
        input: String,
        /// Image URL enabling reverse search (photo kind only)
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Check an email against the breach-intelligence sources
    Breaches {
        /// Email address to check
        email: String,
    },
    /// Look up a tax ID against the registry APIs
    TaxId {
        /// Tax ID, with or without formatting
        id: String,
    },
    /// Validate a tax-ID checksum without any network access
    ValidateTaxId {
        /// Tax ID, with or without formatting
        id: String,
    },
    /// Validate a judicial process number
    ValidateProcess {
        /// Process number, with or without formatting
        number: String,
    },
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    input: &'a str,
    valid: bool,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("Failed to serialize result to JSON")?;
    println!("{rendered}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env (API keys are read from there)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config::from_env();

    let result = match cli.command {
        Command::Links {
            kind,
            input,
            image_url,
        } => {
            let report = match (kind, image_url.as_deref()) {
                (IdentifierKind::Photo, Some(url)) => {
                    osint_lookup::catalog::builders::photo(&input, Some(url))
                }
                _ => build_catalog(kind, &input),
            };
            print_json(&report)
        }
        Command::Breaches { email } => {
            let verdict = check_email_breaches(&email, &config).await;
            print_json(&verdict)
        }
        Command::TaxId { id } => {
            let report = lookup_tax_id(&id, &config).await;
            print_json(&report)
        }
        Command::ValidateTaxId { id } => print_json(&ValidationOutput {
            input: &id,
            valid: validate_tax_id(&id),
        }),
        Command::ValidateProcess { number } => print_json(&ValidationOutput {
            input: &number,
            valid: validate_process_number(&number),
        }),
    };

    if let Err(e) = result {
        eprintln!("osint_lookup error: {e:#}");
        process::exit(1);
    }
    Ok(())
}
