// Reaction price table: minimum payment per reaction kind, in wei.

use serde::{Deserialize, Serialize};

use super::amount::Wei;
use super::ReactionKind;

/// 0.002 ETH
pub const DEFAULT_LIKE_PRICE: Wei = Wei::new(2_000_000_000_000_000);
/// 0.01 ETH
pub const DEFAULT_COMMENT_PRICE: Wei = Wei::new(10_000_000_000_000_000);
/// 0.02 ETH
pub const DEFAULT_QUOTE_PRICE: Wei = Wei::new(20_000_000_000_000_000);

/// Minimum payment for each reaction kind.
///
/// Built once at startup (defaults, optionally overridden from config)
/// and passed by reference to whatever validates reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub like: Wei,
    pub comment: Wei,
    pub quote: Wei,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            like: DEFAULT_LIKE_PRICE,
            comment: DEFAULT_COMMENT_PRICE,
            quote: DEFAULT_QUOTE_PRICE,
        }
    }
}

impl PriceTable {
    /// Required payment for `kind`.
    pub fn required(&self, kind: ReactionKind) -> Wei {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Comment => self.comment,
            ReactionKind::Quote => self.quote,
        }
    }

    /// All (kind, price) pairs in display order.
    pub fn entries(&self) -> [(ReactionKind, Wei); 3] {
        ReactionKind::ALL.map(|kind| (kind, self.required(kind)))
    }
}
