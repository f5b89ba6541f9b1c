/// The smallest increment payouts are rounded to.
///
/// Pools that are a multiple of five are paid in multiples of five,
/// everything else is paid in whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundFactor {
    One,
    Five,
}

impl RoundFactor {
    /// Pick the round factor for a pool.
    ///
    /// ```
    /// use rs_payouts::engine::RoundFactor;
    ///
    /// assert_eq!(RoundFactor::Five, RoundFactor::for_pool(160));
    /// assert_eq!(RoundFactor::One, RoundFactor::for_pool(161));
    /// ```
    pub fn for_pool(pool: i64) -> Self {
        if pool % 5 == 0 {
            RoundFactor::Five
        } else {
            RoundFactor::One
        }
    }

    /// The increment in currency units.
    pub fn unit(self) -> i64 {
        match self {
            RoundFactor::One => 1,
            RoundFactor::Five => 5,
        }
    }

    /// Round `amount` to the nearest multiple of the unit, halves away from
    /// zero.
    ///
    /// ```
    /// use rs_payouts::engine::RoundFactor;
    ///
    /// assert_eq!(50, RoundFactor::Five.round(48.0));
    /// assert_eq!(45, RoundFactor::Five.round(47.4));
    /// assert_eq!(13, RoundFactor::One.round(12.5));
    /// ```
    pub fn round(self, amount: f64) -> i64 {
        let unit = self.unit();
        (amount / unit as f64).round() as i64 * unit
    }
}
