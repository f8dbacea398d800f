use std::env;

use anyhow::{Context, Result};

use crate::edition::DEFAULT_OPEN_EDITION_SUPPLY;
use crate::reactions::amount::Wei;
use crate::reactions::prices::PriceTable;
use crate::scoring::absorption::UnknownEditionPolicy;

/// Central configuration loaded from environment variables.
///
/// Everything has a default, so an empty environment yields the stock
/// price table and strict edition handling. The .env file is loaded
/// automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum payment per reaction kind
    pub prices: PriceTable,
    /// How weight lookups treat unrecognized edition types
    pub unknown_edition: UnknownEditionPolicy,
    /// Total supply displayed for open editions minted without a count
    pub open_edition_supply: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            unknown_edition: UnknownEditionPolicy::default(),
            open_edition_supply: DEFAULT_OPEN_EDITION_SUPPLY,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `load()` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PriceTable::default();
        let prices = PriceTable {
            like: price_override(&lookup, "THREADMINT_PRICE_LIKE_WEI", defaults.like)?,
            comment: price_override(&lookup, "THREADMINT_PRICE_COMMENT_WEI", defaults.comment)?,
            quote: price_override(&lookup, "THREADMINT_PRICE_QUOTE_WEI", defaults.quote)?,
        };

        let unknown_edition = match lookup("THREADMINT_UNKNOWN_EDITION").as_deref() {
            Some("base") => UnknownEditionPolicy::FallbackToBase,
            // "reject" or unset both default to hard failure
            None | Some("reject") | Some("") => UnknownEditionPolicy::Reject,
            Some(other) => anyhow::bail!(
                "THREADMINT_UNKNOWN_EDITION must be 'reject' or 'base', got '{other}'"
            ),
        };

        let open_edition_supply = match lookup("THREADMINT_OPEN_SUPPLY") {
            Some(raw) if !raw.trim().is_empty() => {
                let n: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("THREADMINT_OPEN_SUPPLY is not a number: '{raw}'"))?;
                if n == 0 {
                    anyhow::bail!("THREADMINT_OPEN_SUPPLY must be positive");
                }
                n
            }
            _ => DEFAULT_OPEN_EDITION_SUPPLY,
        };

        tracing::debug!(
            like = %prices.like,
            comment = %prices.comment,
            quote = %prices.quote,
            ?unknown_edition,
            open_edition_supply,
            "Configuration loaded"
        );

        Ok(Self {
            prices,
            unknown_edition,
            open_edition_supply,
        })
    }
}

fn price_override<F>(lookup: &F, key: &str, default: Wei) -> Result<Wei>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse::<Wei>()
            .with_context(|| format!("{key} must be a wei amount (base-10 integer)")),
        _ => Ok(default),
    }
}
