use tracing::trace;

use super::RoundFactor;
use crate::table::TieGroups;

/// Which end of the payouts distribution starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Start at first place and move towards last, wrapping around.
    Forward,
    /// Start at last place and move towards first, wrapping around.
    Backward,
}

impl Direction {
    fn start(self, len: usize) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Backward => len - 1,
        }
    }

    fn advance(self, idx: usize, len: usize) -> usize {
        match self {
            Direction::Forward => (idx + 1) % len,
            Direction::Backward => idx.checked_sub(1).unwrap_or(len - 1),
        }
    }
}

/// Lower every tie group that ended up with the same amount as the group
/// before it by one unit, so different places get different amounts.
///
/// Places inside a tie group are always moved together.
pub(crate) fn make_decreasing(ties: &TieGroups, planned: &mut [i64], round: RoundFactor) {
    let unit = round.unit();
    for group in ties.groups().skip(1) {
        if planned[group.start] == planned[group.start - 1] {
            trace!(place = group.start + 1, unit, "Breaking rounding collision");
            for amount in &mut planned[group] {
                *amount -= unit;
            }
        }
    }
}

/// Move `excess` into (or out of) the planned payouts one `step` at a time.
///
/// Whole tie groups are changed together. When what's left of the excess
/// can't cover the next group, or has the other sign from `step`,
/// distribution stops. Returns the excess that couldn't be handed out.
///
/// # Panics
///
/// If `excess` isn't a multiple of `step`. That can only happen when the
/// planned payouts weren't rounded to the same unit as `step`.
pub(crate) fn distribute(
    ties: &TieGroups,
    planned: &mut [i64],
    mut excess: i64,
    step: i64,
    direction: Direction,
) -> i64 {
    assert!(step != 0, "Distribution step can't be zero");
    assert!(
        excess % step == 0,
        "excess {excess} must be a multiple of {step}"
    );
    debug_assert_eq!(ties.len(), planned.len());

    let len = planned.len();
    if len == 0 {
        return excess;
    }

    let mut next = direction.start(len);
    while excess != 0 {
        if excess.signum() != step.signum() {
            break;
        }
        let num_ties = ties.group_size(next) as i64;
        // Can't give every tied place its share, give up.
        if excess.abs() < num_ties * step.abs() {
            break;
        }
        trace!(place = next + 1, num_ties, step, excess, "Distributing");
        for _ in 0..num_ties {
            planned[next] += step;
            excess -= step;
            next = direction.advance(next, len);
        }
    }
    excess
}
