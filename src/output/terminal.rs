// Colored terminal output for prices, weights and validation results.
//
// main.rs does the work and hands results here for display.

use colored::Colorize;

use super::format_weight;
use crate::edition::Edition;
use crate::error::Error;
use crate::mind::WeightedNeuron;
use crate::reactions::prices::PriceTable;
use crate::reactions::validator::ValidatedReaction;
use crate::scoring::absorption::{BASE_WEIGHT, UNIQUE_MULTIPLIER};

/// Display the active reaction price table.
pub fn display_price_table(prices: &PriceTable) {
    println!("\n{}", "=== Reaction Prices ===".bold());
    println!();
    println!(
        "  {:<10} {:>24}  {:>10}",
        "Kind".dimmed(),
        "Wei".dimmed(),
        "ETH".dimmed()
    );
    println!("  {}", "-".repeat(48).dimmed());
    for (kind, price) in prices.entries() {
        println!(
            "  {:<10} {:>24}  {:>10}",
            kind.as_str(),
            price.to_string(),
            price.to_eth_string()
        );
    }
    println!();
}

/// Display the absorption weight of a single edition.
pub fn display_weight(edition: &Edition, weight: f64, total_supply: u64) {
    println!("\n{}", "=== Absorption Weight ===".bold());
    println!("  Edition:      {}", edition.edition_type);
    match edition.supply {
        Some(n) => println!("  Supply:       {n}"),
        None => println!("  Supply:       {}", "(none)".dimmed()),
    }
    println!("  Total supply: {total_supply}");
    println!("  Weight:       {}", colorize_weight(weight));
    println!();
}

/// Display a reaction that cleared the price table.
pub fn display_accepted(reaction: &ValidatedReaction) {
    println!(
        "{} {} reaction accepted: offered {} wei ({} ETH), minimum {} wei",
        "OK".green().bold(),
        reaction.kind,
        reaction.offered,
        reaction.offered.to_eth_string(),
        reaction.required,
    );
}

/// Display why a reaction was rejected.
pub fn display_rejected(err: &Error) {
    match err {
        Error::InsufficientPayment {
            kind,
            required,
            offered,
        } => {
            println!(
                "{} Insufficient payment for {kind} reaction",
                "REJECTED".red().bold()
            );
            println!(
                "  Offered:  {offered} wei ({} ETH)",
                offered.to_eth_string()
            );
            println!(
                "  Required: {required} wei ({} ETH)",
                required.to_eth_string()
            );
        }
        other => println!("{} {other}", "REJECTED".red().bold()),
    }
}

/// Display the per-item weights a collection hands to the mind aggregator.
pub fn display_collection(weighted: &[WeightedNeuron]) {
    if weighted.is_empty() {
        println!("Collection is empty: nothing to absorb.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Absorption ({} collected) ===", weighted.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<10} {:>8}  {:>8}",
        "#".dimmed(),
        "Edition".dimmed(),
        "Supply".dimmed(),
        "Weight".dimmed()
    );
    println!("  {}", "-".repeat(36).dimmed());

    for (i, item) in weighted.iter().enumerate() {
        let supply = item
            .edition
            .supply
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>4}. {:<10} {:>8}  {:>8}",
            i + 1,
            item.edition.edition_type.as_str(),
            supply,
            colorize_weight(item.weight)
        );
    }
    println!();
}

/// Color a weight by how it compares to the baseline.
fn colorize_weight(weight: f64) -> colored::ColoredString {
    let text = format_weight(weight);
    if weight >= BASE_WEIGHT * UNIQUE_MULTIPLIER {
        text.magenta().bold()
    } else if weight > BASE_WEIGHT {
        text.green()
    } else if weight < BASE_WEIGHT {
        text.yellow()
    } else {
        text.normal()
    }
}
