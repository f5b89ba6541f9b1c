use std::fmt;
use std::str::FromStr;

use super::RSPayoutError;

/// The family of payout tables to use.
///
/// The default is `Ranked`, which is also the only family that can end
/// up paying a single winner from a table rather than the fallback.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PayoutType {
    /// Every place is paid a different amount. No ties.
    #[default]
    Ranked,
    /// Double elimination bracket. Places knocked out in the same round
    /// tie, starting at 5th/6th.
    #[cfg_attr(feature = "serde", serde(alias = "double-elim"))]
    DoubleElim,
}

impl PayoutType {
    /// All payout types in tag order.
    pub const ALL: [PayoutType; 2] = [PayoutType::Ranked, PayoutType::DoubleElim];

    /// Convert the numeric tag used by forms (1 = ranked, 2 = double
    /// elimination). Anything else has no payout type.
    ///
    /// ```
    /// use rs_payouts::core::PayoutType;
    ///
    /// assert_eq!(Some(PayoutType::DoubleElim), PayoutType::from_tag(2));
    /// assert_eq!(None, PayoutType::from_tag(7));
    /// ```
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(PayoutType::Ranked),
            2 => Some(PayoutType::DoubleElim),
            _ => None,
        }
    }

    /// The numeric tag for this payout type.
    pub fn tag(self) -> u8 {
        match self {
            PayoutType::Ranked => 1,
            PayoutType::DoubleElim => 2,
        }
    }

    /// Can tables of this type contain tied places.
    pub fn allows_ties(self) -> bool {
        matches!(self, PayoutType::DoubleElim)
    }
}

impl fmt::Display for PayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayoutType::Ranked => "ranked",
            PayoutType::DoubleElim => "double_elim",
        };
        f.write_str(name)
    }
}

impl FromStr for PayoutType {
    type Err = RSPayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ranked" => Ok(PayoutType::Ranked),
            "double_elim" | "double-elim" => Ok(PayoutType::DoubleElim),
            _ => Err(RSPayoutError::UnknownPayoutType(s.to_string())),
        }
    }
}
