// ThreadMint: reaction pricing and absorption weighting.
//
// This is the library root. Each module is one piece of the marketplace
// economy: edition scarcity, weights, paid reactions, and the seam to the
// mind aggregator.

pub mod config;
pub mod edition;
pub mod error;
pub mod mind;
pub mod output;
pub mod reactions;
pub mod scoring;

#[cfg(feature = "web")]
pub mod web;

pub use edition::{classify_edition, Edition, EditionType};
pub use error::{Error, Result};
pub use reactions::amount::Wei;
pub use reactions::prices::PriceTable;
pub use reactions::validator::{
    validate_reaction, validate_reaction_input, ReactionAttempt, ValidatedReaction,
};
pub use reactions::ReactionKind;
pub use scoring::absorption::{absorption_weight, absorption_weight_for, UnknownEditionPolicy};
