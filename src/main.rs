use cartcsv::{CartError, CartParser};

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cartcsv", about = "Validate a shopping cart CSV and print it as JSON")]
struct Cli {
    /// Path to the cart CSV file
    #[arg(default_value = "cart.csv")]
    path: PathBuf,

    /// Only check the file and print the validation errors as JSON
    #[arg(long)]
    validate_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    validate_csv_file(&cli.path)?;

    let parser = CartParser::new();
    info!("Processing cart from: {}", cli.path.display());

    if cli.validate_only {
        let errors = parser.validate_file(&cli.path)?;
        print_json(&errors, cli.pretty)?;
        return Ok(if errors.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    match parser.parse(&cli.path) {
        Ok(cart) => {
            print_json(&cart, cli.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(CartError::Validation(errors)) => {
            eprintln!("Error: '{}' is not a valid cart:", cli.path.display());
            for error in &errors {
                eprintln!("  {}", error);
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to parse {}", cli.path.display())),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn validate_csv_file(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        bail!("File '{}' does not exist", path.display());
    }

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        bail!("File '{}' is not a CSV file", path.display());
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
