// Edition / scarcity model: how many copies of a minted post can exist.
//
// The edition type is fixed at mint time. Re-minting creates a new post,
// so there are no transitions between types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Informational total supply shown for open editions when the minter
/// didn't provide one. Never used for weighting.
pub const DEFAULT_OPEN_EDITION_SUPPLY: u64 = 1000;

/// Supply classification of a minted post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditionType {
    /// Exactly one copy ("1of1").
    #[serde(rename = "1of1", alias = "unique")]
    Unique,
    /// Fixed finite supply.
    Limited,
    /// Effectively unbounded supply within a time window.
    Open,
    /// Restricted audience; weighted exactly like `Limited`.
    Allowlist,
}

impl EditionType {
    /// Wire name, matching what the mint endpoint stores.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditionType::Unique => "1of1",
            EditionType::Limited => "limited",
            EditionType::Open => "open",
            EditionType::Allowlist => "allowlist",
        }
    }
}

impl fmt::Display for EditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EditionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1of1" | "unique" => Ok(EditionType::Unique),
            "limited" => Ok(EditionType::Limited),
            "open" => Ok(EditionType::Open),
            "allowlist" => Ok(EditionType::Allowlist),
            other => Err(Error::InvalidEdition(format!(
                "unrecognized edition type '{other}'"
            ))),
        }
    }
}

/// A classified edition: its type plus the validated supply count.
///
/// Invariants established by [`classify_edition`]:
/// - `Unique` never carries a supply.
/// - `Limited`/`Allowlist` supply, when present, is at least 1.
/// - `Open` supply, when present, is at least 1.
///
/// Deserializing goes through [`classify_edition`] as well, so a
/// deserialized `Edition` holds the same invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEdition")]
pub struct Edition {
    pub edition_type: EditionType,
    pub supply: Option<u64>,
}

/// Unvalidated wire form of an [`Edition`].
#[derive(Deserialize)]
struct RawEdition {
    edition_type: String,
    supply: Option<i64>,
}

impl TryFrom<RawEdition> for Edition {
    type Error = Error;

    fn try_from(raw: RawEdition) -> Result<Self> {
        classify_edition(&raw.edition_type, raw.supply)
    }
}

impl Edition {
    /// Total supply for display purposes.
    ///
    /// Limited editions without a count display as a single copy; open
    /// editions fall back to `open_default`.
    pub fn total_supply(&self, open_default: u64) -> u64 {
        match self.edition_type {
            EditionType::Unique => 1,
            EditionType::Limited | EditionType::Allowlist => self.supply.unwrap_or(1),
            EditionType::Open => self.supply.unwrap_or(open_default),
        }
    }

    /// Absorption weight this edition contributes when collected.
    pub fn absorption_weight(&self) -> f64 {
        crate::scoring::absorption::absorption_weight(self.edition_type, self.supply)
    }
}

/// Classify raw mint input into an [`Edition`].
///
/// `supply` is signed because it arrives from untrusted JSON; negative and
/// zero counts are rejected for supply-weighted editions.
pub fn classify_edition(edition_type: &str, supply: Option<i64>) -> Result<Edition> {
    let edition_type: EditionType = edition_type.parse()?;

    let supply = match edition_type {
        // A 1of1 has no meaningful count, so drop whatever was sent.
        EditionType::Unique => None,
        EditionType::Limited | EditionType::Allowlist => match supply {
            None => None,
            Some(n) if n >= 1 => Some(n as u64),
            Some(n) => {
                return Err(Error::InvalidEdition(format!(
                    "{edition_type} edition supply must be positive, got {n}"
                )))
            }
        },
        // Open supply is informational only.
        EditionType::Open => supply.filter(|n| *n >= 1).map(|n| n as u64),
    };

    Ok(Edition {
        edition_type,
        supply,
    })
}
