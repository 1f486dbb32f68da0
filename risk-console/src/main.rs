//! Interactive fraud-risk console
//!
//! Terminal front-end for the SafeTransfer risk engine: collects the
//! attributes of one transfer, evaluates it, and renders the result card.

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use risk_engine::{JurisdictionList, RiskLevel, RiskResult, RiskScorer, ScoringConfig, Transfer};
use std::io::{self, BufRead, Write};
use uuid::Uuid;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let json_output = std::env::args().any(|arg| arg == "--json");

    let scorer = load_scorer()?;

    println!("\n=== SafeTransfer - Fraud risk simulator for bank transfers ===\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let amount_text = prompt(&mut input, "Transfer amount (COP)")?;
    let country = prompt(&mut input, "Destination country (e.g. CO, US, MX)")?;
    let channel = prompt(&mut input, "Channel (e.g. mobile app, web, ATM)")?;

    let is_new_beneficiary = prompt_flag(&mut input, "New beneficiary account", true)?;
    let is_international = prompt_flag(&mut input, "International transfer", false)?;
    let is_unusual_hour = prompt_flag(&mut input, "Unusual hour", false)?;
    let is_new_device = prompt_flag(&mut input, "Unrecognized device", false)?;

    let transfer = Transfer::from_raw(
        &amount_text,
        &country,
        &channel,
        is_new_beneficiary,
        is_international,
        is_unusual_hour,
        is_new_device,
    );

    let result = scorer.evaluate(&transfer);

    let evaluation_id = Uuid::new_v4();
    tracing::info!(
        "Evaluation {} at {}: score {} ({})",
        evaluation_id,
        Utc::now(),
        result.score.score(),
        result.level
    );

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_card(&result);
    }

    Ok(())
}

/// Build the scorer, honoring a config file path from the environment
fn load_scorer() -> Result<RiskScorer> {
    match std::env::var("SAFETRANSFER_RISK_CONFIG") {
        Ok(path) => {
            let config = ScoringConfig::from_file(&path)
                .with_context(|| format!("Failed to load scoring config from {}", path))?;
            tracing::info!("Loaded scoring config from {}", path);
            Ok(RiskScorer::new(config, JurisdictionList::default()))
        }
        Err(_) => Ok(RiskScorer::default()),
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_flag(input: &mut impl BufRead, label: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", label, hint);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_flag(&line, default))
}

fn parse_flag(line: &str, default: bool) -> bool {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn render_card(result: &RiskResult) {
    let level = match result.level {
        RiskLevel::Low => result.level.as_str().green().bold(),
        RiskLevel::Medium => result.level.as_str().yellow().bold(),
        RiskLevel::High => result.level.as_str().red().bold(),
    };

    println!();
    println!("=============================================");
    println!("Risk: {}", level);
    println!("Estimated score: {} / 100", result.score.score());
    println!("---------------------------------------------");
    println!("Detected factors:");
    for reason in &result.reasons {
        println!("  - {}", reason);
    }
    println!();
    println!("Recommendations:");
    for recommendation in &result.recommendations {
        println!("  - {}", recommendation);
    }
    println!("=============================================");
}
