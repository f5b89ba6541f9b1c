//! Turning a payout table into whole currency amounts.
//!
//! Multiplying the pool by each fraction and rounding almost never sums
//! back to the pool. The engine rounds first, then pushes the leftover
//! (the excess) back into the payouts a unit at a time, always moving tied
//! places together. That's more restrictive than it needs to be, so some
//! tables can't be paid exactly for some pools. Those are reported as
//! [`Infeasible`] so that a smaller table can be tried.
mod distribute;
mod round;

use std::cmp::Ordering;

use thiserror::Error;
use tracing::{instrument, trace};

pub use distribute::Direction;
use distribute::{distribute, make_decreasing};
pub use round::RoundFactor;

use crate::core::{place_label, Payout};
use crate::table::Table;

/// Why a table can't be used for a pool.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Infeasible {
    #[error("Payouts miss the pool by {excess}")]
    InexactSum { excess: i64 },
    #[error("Place {place} would only be paid {amount}")]
    BelowMinimum { place: usize, amount: i64 },
    #[error("Place {place} would be paid at least as much as the place before it")]
    NotDecreasing { place: usize },
}

/// Try to pay `pool` using `table`.
///
/// On success every place gets a multiple of the round factor's unit, tied
/// places get the same amount, amounts strictly decrease from one group to
/// the next, every amount is at least `minimum`, and the amounts sum to
/// exactly `pool`.
///
/// # Examples
///
/// ```
/// use rs_payouts::engine::{attempt, Infeasible, RoundFactor};
/// use rs_payouts::table::Table;
///
/// let table = Table::new(vec![0.5, 0.3, 0.2]).unwrap();
/// let payouts = attempt(&table, 160, 20.0, RoundFactor::Five).unwrap();
/// let amounts: Vec<i64> = payouts.iter().map(|p| p.amount).collect();
/// assert_eq!(vec![80, 50, 30], amounts);
///
/// assert_eq!(
///     Err(Infeasible::BelowMinimum { place: 3, amount: 30 }),
///     attempt(&table, 160, 40.0, RoundFactor::Five)
/// );
/// ```
#[instrument(level = "trace", skip(table), fields(places = table.num_places()))]
pub fn attempt(
    table: &Table,
    pool: i64,
    minimum: f64,
    round: RoundFactor,
) -> Result<Vec<Payout>, Infeasible> {
    let ties = table.ties();
    let unit = round.unit();

    // Start by rounding payouts.
    let mut planned: Vec<i64> = table
        .fractions()
        .iter()
        .map(|&fraction| round.round(pool as f64 * fraction))
        .collect();
    trace!(?planned, "Rounded payouts");

    make_decreasing(ties, &mut planned, round);

    let excess = pool - planned.iter().sum::<i64>();
    match excess.cmp(&0) {
        Ordering::Greater => {
            // Rounded down too much, the low end gets the extra.
            distribute(ties, &mut planned, excess, unit, Direction::Backward);
            make_decreasing(ties, &mut planned, round);
            let excess = pool - planned.iter().sum::<i64>();
            distribute(ties, &mut planned, excess, unit, Direction::Forward);
        }
        Ordering::Less => {
            // Rounded up too much, take it back from the top.
            distribute(ties, &mut planned, excess, -unit, Direction::Forward);
            make_decreasing(ties, &mut planned, round);
            let excess = pool - planned.iter().sum::<i64>();
            distribute(ties, &mut planned, excess, unit, Direction::Forward);
        }
        Ordering::Equal => {}
    }
    trace!(?planned, "Redistributed payouts");

    let excess = pool - planned.iter().sum::<i64>();
    if excess != 0 {
        return Err(Infeasible::InexactSum { excess });
    }

    if let Some((idx, &amount)) = planned
        .iter()
        .enumerate()
        .find(|(_, &amount)| (amount as f64) < minimum)
    {
        return Err(Infeasible::BelowMinimum {
            place: idx + 1,
            amount,
        });
    }

    // Collisions between groups that make_decreasing couldn't fix.
    if let Some(group) = ties
        .groups()
        .skip(1)
        .find(|group| planned[group.start] >= planned[group.start - 1])
    {
        return Err(Infeasible::NotDecreasing {
            place: group.start + 1,
        });
    }

    Ok(label(table, &planned))
}

fn label(table: &Table, planned: &[i64]) -> Vec<Payout> {
    let mut payouts = Vec::with_capacity(planned.len());
    for group in table.ties().groups() {
        let place = place_label(group.start + 1, group.end);
        for idx in group {
            payouts.push(Payout::new(
                place.clone(),
                table.fractions()[idx],
                planned[idx],
            ));
        }
    }
    payouts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(payouts: &[Payout]) -> Vec<i64> {
        payouts.iter().map(|p| p.amount).collect()
    }

    fn table(fractions: &[f64]) -> Table {
        Table::try_from(fractions).unwrap()
    }

    #[test]
    fn test_exact_rounding() {
        let t = table(&[0.5, 0.3, 0.2]);
        let payouts = attempt(&t, 160, 20.0, RoundFactor::Five).unwrap();
        assert_eq!(vec![80, 50, 30], amounts(&payouts));
        let places: Vec<&str> = payouts.iter().map(|p| p.place.as_str()).collect();
        assert_eq!(vec!["1st", "2nd", "3rd"], places);
        assert_eq!(0.3, payouts[1].fraction);
    }

    #[test]
    fn test_rounded_down_fills_from_bottom() {
        let t = table(&[0.30, 0.24, 0.19, 0.14, 0.09, 0.04]);
        let payouts = attempt(&t, 300, 5.0, RoundFactor::Five).unwrap();
        assert_eq!(vec![90, 70, 55, 40, 30, 15], amounts(&payouts));
    }

    #[test]
    fn test_rounded_up_takes_from_top() {
        // 65, 40, 25, 20, 15 rounds to 165.
        let t = table(&[0.40, 0.24, 0.16, 0.12, 0.08]);
        let payouts = attempt(&t, 160, 15.0, RoundFactor::Five).unwrap();
        assert_eq!(vec![60, 40, 25, 20, 15], amounts(&payouts));
    }

    #[test]
    fn test_double_elim_ties() {
        let t = table(&[0.40, 0.25, 0.15, 0.10, 0.05, 0.05]);
        let payouts = attempt(&t, 100, 5.0, RoundFactor::Five).unwrap();
        assert_eq!(vec![40, 25, 15, 10, 5, 5], amounts(&payouts));
        let places: Vec<&str> = payouts.iter().map(|p| p.place.as_str()).collect();
        assert_eq!(
            vec!["1st", "2nd", "3rd", "4th", "5th/6th", "5th/6th"],
            places
        );
    }

    #[test]
    fn test_below_minimum() {
        let t = table(&[0.5, 0.25, 0.15, 0.10]);
        assert_eq!(
            Err(Infeasible::BelowMinimum {
                place: 4,
                amount: 15
            }),
            attempt(&t, 160, 20.0, RoundFactor::Five)
        );
    }

    #[test]
    fn test_collision_leaves_place_below_minimum() {
        // 20, 10, 10 collides, the last place drops to 5.
        let t = table(&[0.5, 0.3, 0.2]);
        assert_eq!(
            Err(Infeasible::BelowMinimum { place: 3, amount: 5 }),
            attempt(&t, 40, 10.0, RoundFactor::Five)
        );
    }

    #[test]
    fn test_inexact_sum() {
        // 3, 2, 2 overshoots. Taking one from the top collides with the
        // tie group, and the tie group can't absorb the single unit left.
        let t = table(&[0.5, 0.25, 0.25]);
        let result = attempt(&t, 6, 1.0, RoundFactor::One);
        assert_eq!(Err(Infeasible::InexactSum { excess: 1 }), result);
    }

    #[test]
    fn test_not_decreasing() {
        // Everything rounds to 10, breaking the collision leaves 10, 5, 10
        // and the bottom gets the leftover.
        let t = table(&[0.36, 0.35, 0.29]);
        assert_eq!(
            Err(Infeasible::NotDecreasing { place: 3 }),
            attempt(&t, 30, 1.0, RoundFactor::Five)
        );
    }

    #[test]
    fn test_single_place() {
        let t = table(&[1.0]);
        let payouts = attempt(&t, 20, 20.0, RoundFactor::Five).unwrap();
        assert_eq!(vec![Payout::new("1st", 1.0, 20)], payouts);
    }

    #[test]
    fn test_round_by_one() {
        let t = table(&[0.7, 0.3]);
        let payouts = attempt(&t, 41, 1.0, RoundFactor::One).unwrap();
        assert_eq!(vec![29, 12], amounts(&payouts));
    }
}
