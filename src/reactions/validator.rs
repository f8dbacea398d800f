// Reaction validator: the payment gate in front of reaction creation.
//
// Nothing is mutated before or during the check, so a rejection leaves no
// partial state behind.

use serde::Serialize;

use super::amount::Wei;
use super::prices::PriceTable;
use super::ReactionKind;
use crate::error::{Error, Result};

/// A proposed reaction, built from request input before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionAttempt {
    pub kind: ReactionKind,
    pub offered: Wei,
}

/// A reaction whose payment cleared the price table. Ready to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidatedReaction {
    pub kind: ReactionKind,
    pub offered: Wei,
    pub required: Wei,
}

impl ReactionAttempt {
    pub fn new(kind: ReactionKind, offered: Wei) -> Self {
        Self { kind, offered }
    }

    /// Check the offered amount against `prices`.
    ///
    /// Paying exactly the minimum is accepted; overpaying is allowed.
    pub fn validate(&self, prices: &PriceTable) -> Result<ValidatedReaction> {
        let required = prices.required(self.kind);
        if self.offered < required {
            return Err(Error::InsufficientPayment {
                kind: self.kind,
                required,
                offered: self.offered,
            });
        }
        Ok(ValidatedReaction {
            kind: self.kind,
            offered: self.offered,
            required,
        })
    }
}

/// Validate a reaction given the raw kind string from the caller.
///
/// An unknown kind fails before the amount is looked at.
pub fn validate_reaction(prices: &PriceTable, kind: &str, offered: Wei) -> Result<ValidatedReaction> {
    let kind: ReactionKind = kind.parse()?;
    ReactionAttempt::new(kind, offered).validate(prices)
}

/// Validate raw caller input: kind string plus amount string.
///
/// The kind is resolved first, so an unknown kind wins over a malformed
/// amount. An empty amount means nothing was offered.
pub fn validate_reaction_input(
    prices: &PriceTable,
    kind: &str,
    amount: &str,
) -> Result<ValidatedReaction> {
    let kind: ReactionKind = kind.parse()?;
    let offered = if amount.trim().is_empty() {
        Wei::ZERO
    } else {
        amount.parse()?
    };
    ReactionAttempt::new(kind, offered).validate(prices)
}
