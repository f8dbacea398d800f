// Absorption weight: how strongly a collected post pulls on the
// collector's mind.
//
// Scarcer editions weigh more. A 1of1 gets a flat 1.35x bonus, open
// editions sit at the 1.0 baseline, and limited/allowlist editions decay
// with supply:
//
//   weight = BASE * 1 / log10(supply + 5)
//
// The +5 offset keeps log10 well above zero for tiny supplies, so the
// curve stays finite and strictly decreasing for every positive count.
// Open editions ignore their supply on purpose: it's effectively
// unbounded and would drive the weight toward zero.

use crate::edition::{classify_edition, EditionType};
use crate::error::{Error, Result};

/// Baseline weight; open editions and unweighted fallbacks return this.
pub const BASE_WEIGHT: f64 = 1.0;

/// Multiplier applied to 1of1 editions.
pub const UNIQUE_MULTIPLIER: f64 = 1.35;

/// Offset added to the supply before taking log10.
pub const SUPPLY_LOG_OFFSET: f64 = 5.0;

/// What to do when an edition type string isn't recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownEditionPolicy {
    /// Fail with `InvalidEdition` (default).
    #[default]
    Reject,
    /// Silently return the base weight, like the original web app did.
    FallbackToBase,
}

/// Compute the absorption weight for a classified edition type.
///
/// Pure and deterministic: identical inputs produce bit-identical output,
/// so aggregates can be recomputed from scratch at any time.
pub fn absorption_weight(edition_type: EditionType, supply: Option<u64>) -> f64 {
    match edition_type {
        EditionType::Unique => BASE_WEIGHT * UNIQUE_MULTIPLIER,
        EditionType::Open => BASE_WEIGHT,
        EditionType::Limited | EditionType::Allowlist => match supply {
            Some(n) if n > 0 => BASE_WEIGHT * (1.0 / (n as f64 + SUPPLY_LOG_OFFSET).log10()),
            _ => BASE_WEIGHT,
        },
    }
}

/// Compute the weight straight from stored string fields.
///
/// This is the entry point for rows read back from storage, where the
/// edition type is free text. Unrecognized types follow `policy`; a
/// malformed supply for a limited edition is always an error.
pub fn absorption_weight_for(
    edition_type: &str,
    supply: Option<i64>,
    policy: UnknownEditionPolicy,
) -> Result<f64> {
    match classify_edition(edition_type, supply) {
        Ok(edition) => Ok(edition.absorption_weight()),
        Err(Error::InvalidEdition(msg)) => {
            let recognized = edition_type.parse::<EditionType>().is_ok();
            match policy {
                UnknownEditionPolicy::FallbackToBase if !recognized => Ok(BASE_WEIGHT),
                _ => Err(Error::InvalidEdition(msg)),
            }
        }
        Err(e) => Err(e),
    }
}
