mod catalog;
mod tie_groups;

pub use catalog::{standard_catalog, Catalog};
pub use tie_groups::TieGroups;

use crate::core::RSPayoutError;

/// How far the fractions of a table may sum from 1.0.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// A payout table. Each entry is the fraction of the pool paid to that
/// place, best place first.
///
/// Fractions are validated on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    fractions: Vec<f64>,
    ties: TieGroups,
}

impl Table {
    /// Create a table from its fractions.
    ///
    /// The fractions must be in (0, 1], never increase, and sum to 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_payouts::table::Table;
    ///
    /// let table = Table::new(vec![0.5, 0.3, 0.2]).unwrap();
    /// assert_eq!(3, table.num_places());
    ///
    /// assert!(Table::new(vec![0.3, 0.5, 0.2]).is_err());
    /// assert!(Table::new(vec![0.5, 0.3]).is_err());
    /// ```
    pub fn new(fractions: Vec<f64>) -> Result<Self, RSPayoutError> {
        if fractions.is_empty() {
            return Err(RSPayoutError::EmptyTable);
        }
        for (idx, &fraction) in fractions.iter().enumerate() {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(RSPayoutError::FractionOutOfRange {
                    place: idx + 1,
                    fraction,
                });
            }
        }
        if let Some(idx) = fractions.windows(2).position(|w| w[1] > w[0]) {
            return Err(RSPayoutError::FractionsNotDescending { place: idx + 2 });
        }
        let sum: f64 = fractions.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(RSPayoutError::FractionsDontSumToOne(sum));
        }

        let ties = TieGroups::from_fractions(&fractions);
        Ok(Self { fractions, ties })
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn ties(&self) -> &TieGroups {
        &self.ties
    }

    /// How many places get paid.
    pub fn num_places(&self) -> usize {
        self.fractions.len()
    }

    /// Number of places tied with `place` (0-based), at least 1.
    pub fn group_size(&self, place: usize) -> usize {
        self.ties.group_size(place)
    }

    pub fn has_ties(&self) -> bool {
        self.ties.has_ties()
    }
}

impl TryFrom<&[f64]> for Table {
    type Error = RSPayoutError;

    fn try_from(fractions: &[f64]) -> Result<Self, Self::Error> {
        Table::new(fractions.to_vec())
    }
}
