// Wei: integer amounts in the settlement currency's smallest unit.
//
// Payments are compared as integers, never floats. On the wire amounts are
// base-10 strings ("2000000000000000") because JSON numbers can't hold
// them safely; small amounts sent as JSON integers are accepted too.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Wei per whole ETH.
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Decimal places shown by [`Wei::to_eth_string`].
const ETH_DISPLAY_DECIMALS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wei(pub u128);

impl Wei {
    pub const ZERO: Wei = Wei(0);

    pub const fn new(amount: u128) -> Self {
        Wei(amount)
    }

    /// Format as ETH with four decimals, rounding half up.
    ///
    /// `Wei(2_000_000_000_000_000)` → `"0.0020"`.
    pub fn to_eth_string(&self) -> String {
        let unit = WEI_PER_ETH / 10u128.pow(ETH_DISPLAY_DECIMALS);
        let mut scaled = self.0 / unit;
        if self.0 % unit >= unit / 2 {
            scaled += 1;
        }
        let denom = 10u128.pow(ETH_DISPLAY_DECIMALS);
        format!(
            "{}.{:0width$}",
            scaled / denom,
            scaled % denom,
            width = ETH_DISPLAY_DECIMALS as usize
        )
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Wei {
    type Err = Error;

    /// Parse a base-10 unsigned integer. Signs, decimals, exponents and
    /// separators are all rejected.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAmount(format!(
                "'{s}' is not a base-10 integer"
            )));
        }
        s.parse::<u128>()
            .map(Wei)
            .map_err(|_| Error::InvalidAmount(format!("'{s}' is out of range")))
    }
}

impl From<u128> for Wei {
    fn from(amount: u128) -> Self {
        Wei(amount)
    }
}

impl Serialize for Wei {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Wei {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(u64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Repr::Number(n) => Ok(Wei(u128::from(n))),
        }
    }
}
