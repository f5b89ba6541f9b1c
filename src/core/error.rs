use thiserror::Error;

use super::PayoutType;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum RSPayoutError {
    #[error("Payout table has no places")]
    EmptyTable,
    #[error("Fraction {fraction} for place {place} is outside of (0, 1]")]
    FractionOutOfRange { place: usize, fraction: f64 },
    #[error("Fraction for place {place} is larger than the place before it")]
    FractionsNotDescending { place: usize },
    #[error("Fractions sum to {0} rather than 1.0")]
    FractionsDontSumToOne(f64),
    #[error("Ranked payout tables can't have ties (place {place})")]
    TieInRankedTable { place: usize },
    #[error("{0} tables must be ordered by strictly decreasing number of places")]
    TablesNotOrderedByPlaces(PayoutType),
    #[error("No payout tables for {0}")]
    NoTables(PayoutType),
    #[error("Unknown payout type: {0}")]
    UnknownPayoutType(String),
    #[error("Pool must be a positive whole number, got {0}")]
    InvalidPool(f64),
    #[error("Minimum payout must be positive, got {0}")]
    InvalidMinimum(f64),
}
