//! Choosing which payout table to use.
//!
//! Tables are tried from the one paying the most places down to the one
//! paying the fewest, and the first the engine can pay wins. Bad input is
//! not an error here, it just means there's nothing to pay.
use tracing::{debug, instrument};

use crate::core::{ordinal, Payout, PayoutType, RSPayoutError};
use crate::engine::{attempt, RoundFactor};
use crate::table::{standard_catalog, Catalog};

/// The largest pool that can be represented exactly.
pub const MAX_POOL: f64 = 9_007_199_254_740_991.0;

/// A validated request for payouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoutRequest {
    payout_type: PayoutType,
    pool: i64,
    minimum: f64,
}

impl PayoutRequest {
    /// Validate the raw inputs.
    ///
    /// The pool has to be a positive whole number and the minimum has to be
    /// positive. NaN is neither.
    ///
    /// ```
    /// use rs_payouts::core::{PayoutType, RSPayoutError};
    /// use rs_payouts::resolve::PayoutRequest;
    ///
    /// let request = PayoutRequest::new(PayoutType::Ranked, 160.0, 20.0).unwrap();
    /// assert_eq!(160, request.pool());
    ///
    /// assert_eq!(
    ///     Err(RSPayoutError::InvalidMinimum(0.0)),
    ///     PayoutRequest::new(PayoutType::Ranked, 160.0, 0.0)
    /// );
    /// ```
    pub fn new(payout_type: PayoutType, pool: f64, minimum: f64) -> Result<Self, RSPayoutError> {
        if !(pool > 0.0 && pool <= MAX_POOL) || pool.fract() != 0.0 {
            return Err(RSPayoutError::InvalidPool(pool));
        }
        if !(minimum > 0.0) {
            return Err(RSPayoutError::InvalidMinimum(minimum));
        }
        Ok(Self {
            payout_type,
            pool: pool as i64,
            minimum,
        })
    }

    pub fn payout_type(&self) -> PayoutType {
        self.payout_type
    }

    pub fn pool(&self) -> i64 {
        self.pool
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn round_factor(&self) -> RoundFactor {
        RoundFactor::for_pool(self.pool)
    }

    /// Payouts using the standard tables.
    pub fn resolve(&self) -> Vec<Payout> {
        self.resolve_with(standard_catalog())
    }

    /// Payouts using the tables in `catalog`.
    ///
    /// Never empty. If no table works the whole pool goes to first place.
    #[instrument(level = "debug", skip(catalog))]
    pub fn resolve_with(&self, catalog: &Catalog) -> Vec<Payout> {
        let round = self.round_factor();
        for table in catalog.tables(self.payout_type) {
            match attempt(table, self.pool, self.minimum, round) {
                Ok(payouts) => {
                    debug!(places = table.num_places(), "Found payout table");
                    return payouts;
                }
                Err(reason) => {
                    debug!(places = table.num_places(), %reason, "Payout table rejected");
                }
            }
        }
        debug!("No payout table fits, paying first place everything");
        single_winner(self.pool)
    }
}

/// Pay the entire pool to first place.
pub fn single_winner(pool: i64) -> Vec<Payout> {
    vec![Payout::new(ordinal(1), 1.0, pool)]
}

/// Compute payouts from the raw form values using the standard tables.
///
/// Returns an empty list when there's nothing to pay: the pool isn't a
/// positive whole number, the minimum isn't positive, or there's no payout
/// type.
///
/// # Examples
///
/// ```
/// use rs_payouts::core::PayoutType;
/// use rs_payouts::resolve::resolve;
///
/// let payouts = resolve(Some(PayoutType::Ranked), 40.0, 10.0);
/// let amounts: Vec<i64> = payouts.iter().map(|p| p.amount).collect();
/// assert_eq!(vec![30, 10], amounts);
///
/// assert!(resolve(Some(PayoutType::Ranked), 0.0, 10.0).is_empty());
/// assert!(resolve(Some(PayoutType::Ranked), 10.0, f64::NAN).is_empty());
/// assert!(resolve(None, 160.0, 20.0).is_empty());
/// ```
pub fn resolve(payout_type: Option<PayoutType>, pool: f64, minimum: f64) -> Vec<Payout> {
    resolve_with_catalog(standard_catalog(), payout_type, pool, minimum)
}

/// Same as [`resolve`] with a custom catalog.
pub fn resolve_with_catalog(
    catalog: &Catalog,
    payout_type: Option<PayoutType>,
    pool: f64,
    minimum: f64,
) -> Vec<Payout> {
    let Some(payout_type) = payout_type else {
        debug!("No payout type, nothing to pay");
        return vec![];
    };
    match PayoutRequest::new(payout_type, pool, minimum) {
        Ok(request) => request.resolve_with(catalog),
        Err(err) => {
            debug!(%err, "Invalid payout request, nothing to pay");
            vec![]
        }
    }
}
