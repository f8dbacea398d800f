// Paid reactions: likes, comments and quotes each cost a fixed minimum.
//
// The price table is plain data injected into the validator. Funds never
// move here: the caller supplies a transaction hash elsewhere and this
// module only decides whether the offered amount is enough.

pub mod amount;
pub mod prices;
pub mod validator;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A paid engagement action on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Comment,
    Quote,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 3] = [ReactionKind::Like, ReactionKind::Comment, ReactionKind::Quote];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Comment => "comment",
            ReactionKind::Quote => "quote",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "like" => Ok(ReactionKind::Like),
            "comment" => Ok(ReactionKind::Comment),
            "quote" => Ok(ReactionKind::Quote),
            _ => Err(Error::UnknownReactionKind(s.to_string())),
        }
    }
}
