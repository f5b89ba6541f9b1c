/// A single line of a payout schedule.
///
/// Places that are tied share the same `place` label and `amount`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Payout {
    /// 1st, 2nd, 5th/6th, etc.
    pub place: String,
    /// The table fraction this place was paid from, e.g. 0.5.
    pub fraction: f64,
    /// Whole currency units paid to this place.
    pub amount: i64,
}

impl Payout {
    pub fn new(place: impl Into<String>, fraction: f64, amount: i64) -> Self {
        Self {
            place: place.into(),
            fraction,
            amount,
        }
    }
}
