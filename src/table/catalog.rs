use std::sync::OnceLock;

use tracing::debug;

use super::Table;
use crate::core::{PayoutType, RSPayoutError};

const RANKED_FRACTIONS: &[&[f64]] = &[
    &[0.30, 0.24, 0.19, 0.14, 0.09, 0.04],
    &[0.40, 0.24, 0.16, 0.12, 0.08],
    &[0.50, 0.25, 0.15, 0.10],
    &[0.50, 0.30, 0.20],
    &[0.70, 0.30],
    &[1.0],
];

/// Fifth and sixth are knocked out in the same round so they tie.
const DOUBLE_ELIM_FRACTIONS: &[&[f64]] = &[
    &[0.40, 0.25, 0.15, 0.10, 0.05, 0.05],
    &[0.50, 0.25, 0.15, 0.10],
    &[0.50, 0.30, 0.20],
    &[0.70, 0.30],
    &[1.0],
];

/// The candidate tables for every payout type.
///
/// Tables for a type are kept in the order they should be tried: most
/// places paid first.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    ranked: Vec<Table>,
    double_elim: Vec<Table>,
}

impl Catalog {
    /// Create a catalog from already built tables.
    ///
    /// Every payout type needs at least one table, tables have to be in
    /// strictly decreasing order of places paid, and ranked tables can't
    /// have ties.
    pub fn new(ranked: Vec<Table>, double_elim: Vec<Table>) -> Result<Self, RSPayoutError> {
        validate_tables(PayoutType::Ranked, &ranked)?;
        validate_tables(PayoutType::DoubleElim, &double_elim)?;
        Ok(Self {
            ranked,
            double_elim,
        })
    }

    /// Create a catalog straight from lists of fractions.
    ///
    /// ```
    /// use rs_payouts::core::PayoutType;
    /// use rs_payouts::table::Catalog;
    ///
    /// let catalog = Catalog::from_fractions(
    ///     &[&[0.7, 0.3], &[1.0]],
    ///     &[&[0.5, 0.25, 0.25], &[1.0]],
    /// )
    /// .unwrap();
    /// assert_eq!(2, catalog.tables(PayoutType::DoubleElim).len());
    /// ```
    pub fn from_fractions(
        ranked: &[&[f64]],
        double_elim: &[&[f64]],
    ) -> Result<Self, RSPayoutError> {
        Self::new(build_tables(ranked)?, build_tables(double_elim)?)
    }

    /// The standard payout tables.
    pub fn standard() -> Self {
        Self::from_fractions(RANKED_FRACTIONS, DOUBLE_ELIM_FRACTIONS)
            .expect("The standard payout tables should always be valid")
    }

    /// The tables to try for `payout_type`, most places first.
    pub fn tables(&self, payout_type: PayoutType) -> &[Table] {
        match payout_type {
            PayoutType::Ranked => &self.ranked,
            PayoutType::DoubleElim => &self.double_elim,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// The standard catalog, built the first time it's needed and shared by
/// every caller after that.
pub fn standard_catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        debug!("Building standard payout catalog");
        Catalog::standard()
    })
}

fn build_tables(lists: &[&[f64]]) -> Result<Vec<Table>, RSPayoutError> {
    lists
        .iter()
        .map(|&fractions| Table::try_from(fractions))
        .collect()
}

fn validate_tables(payout_type: PayoutType, tables: &[Table]) -> Result<(), RSPayoutError> {
    if tables.is_empty() {
        return Err(RSPayoutError::NoTables(payout_type));
    }
    if tables
        .windows(2)
        .any(|w| w[1].num_places() >= w[0].num_places())
    {
        return Err(RSPayoutError::TablesNotOrderedByPlaces(payout_type));
    }
    if !payout_type.allows_ties() {
        for table in tables {
            if let Some(idx) = table.ties().as_slice().iter().position(|&size| size > 1) {
                return Err(RSPayoutError::TieInRankedTable { place: idx + 1 });
            }
        }
    }
    Ok(())
}
