//! ke-phone - check Kenyan phone numbers from the command line.
//!
//! Usage: `ke-phone [safaricom|airtel|kenyan] [NUMBER...]`
//!
//! Numbers come from the arguments, or one per line on stdin when none are
//! given. One JSON object is printed per number.

use anyhow::{bail, Result};
use kenyan_phone_fields::{Carrier, Config, PhoneField, PhoneNumberField};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: ke-phone [safaricom|airtel|kenyan] [NUMBER...]";

#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a str,
    valid: bool,
    logical: Option<String>,
    storage: Option<String>,
    carrier: Option<Carrier>,
    errors: Vec<String>,
}

/// Clean `input`, then derive the stored value and carrier from the cleaned value.
fn check<'a>(field: &PhoneNumberField, input: &'a str) -> Report<'a> {
    let (valid, logical, errors) = match field.clean(Some(input)) {
        Ok(logical) => (true, logical, Vec::new()),
        Err(errors) => (
            false,
            field.to_logical(Some(input)),
            errors.iter().map(ToString::to_string).collect(),
        ),
    };

    let storage = field.to_storage(logical.as_deref());
    let carrier = logical.as_deref().and_then(Carrier::detect);

    Report {
        input,
        valid,
        logical,
        storage,
        carrier,
        errors,
    }
}

fn field_for(kind: &str) -> Option<PhoneNumberField> {
    match kind {
        "safaricom" => Some(PhoneNumberField::safaricom("number")),
        "airtel" => Some(PhoneNumberField::airtel("number")),
        "kenyan" => Some(PhoneNumberField::kenyan("number")),
        _ => None,
    }
}

/// Split arguments into the field kind (default `kenyan`) and the numbers.
fn parse_args(args: Vec<String>) -> Result<(String, Vec<String>)> {
    let mut args = args.into_iter().peekable();
    let first = args.peek().cloned();

    let kind = match first.as_deref() {
        Some(k) if field_for(k).is_some() => {
            args.next();
            k.to_string()
        }
        Some(k) if k.starts_with('-') => {
            error!("Unknown option: {}", k);
            bail!(USAGE);
        }
        _ => "kenyan".to_string(),
    };

    Ok((kind, args.collect()))
}

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout stays machine-readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let (kind, numbers) = parse_args(std::env::args().skip(1).collect())?;

    let field = match field_for(&kind) {
        Some(field) => field.with_options(config.normalize_options()),
        None => bail!("unknown field kind: {}", kind),
    };

    info!(
        "Checking numbers as {} (fallback: {:?}, storage: {:?})",
        kind, config.fallback, config.storage
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if numbers.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            serde_json::to_writer(&mut out, &check(&field, input))?;
            writeln!(out)?;
        }
    } else {
        for input in &numbers {
            serde_json::to_writer(&mut out, &check(&field, input))?;
            writeln!(out)?;
        }
    }

    Ok(())
}
