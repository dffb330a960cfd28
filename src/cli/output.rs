//! Output helpers shared by the commands

use anyhow::Result;
use colored::Colorize;
use serde_json::{json, Value};

use super::OutputFormat;
use crate::rpc::{Encoded, Exception, ExceptionKind};

/// Print an encoded request (used by `--dry-run`)
pub fn print_encoded(encoded: &Encoded, format: OutputFormat) -> Result<()> {
    let body = serde_json::to_string_pretty(encoded)?;

    match format {
        OutputFormat::Json => println!("{}", body),
        OutputFormat::Pretty => {
            let shape = if encoded.is_batch() { "batch" } else { "single" };
            println!(
                "{} {} request(s), {} form",
                "→".cyan(),
                encoded.requests().len(),
                shape
            );
            println!("{}", body);
        }
    }

    Ok(())
}

/// Print decoded payloads and the exceptions reported alongside them
pub fn print_decoded(payloads: &[Value], exceptions: &[Exception], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let report = json!({
                "payloads": payloads,
                "exceptions": exceptions,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Pretty => {
            print_payloads(payloads)?;
            print_exceptions(exceptions);
        }
    }

    Ok(())
}

fn print_payloads(payloads: &[Value]) -> Result<()> {
    if payloads.is_empty() {
        println!("{}", "No payloads.".dimmed());
        return Ok(());
    }

    for (index, payload) in payloads.iter().enumerate() {
        println!(
            "{} {}",
            format!("[{}]", index).dimmed(),
            serde_json::to_string_pretty(payload)?
        );
    }

    Ok(())
}

fn print_exceptions(exceptions: &[Exception]) {
    if exceptions.is_empty() {
        return;
    }

    println!();
    for exception in exceptions {
        let label = match exception.kind() {
            ExceptionKind::Protocol => "protocol".red(),
            ExceptionKind::Application => "application".yellow(),
        };

        let meaning = exception
            .standard_meaning()
            .map(|m| format!(" ({})", m).dimmed().to_string())
            .unwrap_or_default();

        println!(
            "{} {} error {}: {}{}",
            "✗".red(),
            label,
            exception.code(),
            exception.message(),
            meaning
        );

        if let Some(data) = exception.data() {
            println!("   {} {}", "data:".dimmed(), data);
        }
    }
}
