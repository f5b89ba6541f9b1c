//! RS-Payouts is a library for splitting a tournament prize pool among the
//! players who finished in the money.
//!
//! The pool is split using one of a handful of canonical percentage tables.
//! Every payout is a whole number of currency units, payouts never increase
//! as the place gets worse, the payouts sum to exactly the pool, and no
//! payout is below a requested minimum. When the largest table can't satisfy
//! all of that, smaller tables are tried until one can. If none can, the
//! whole pool goes to first place.
//!
//! # Examples
//!
//! ```
//! use rs_payouts::core::PayoutType;
//! use rs_payouts::resolve::resolve;
//!
//! let payouts = resolve(Some(PayoutType::Ranked), 160.0, 20.0);
//! let amounts: Vec<i64> = payouts.iter().map(|p| p.amount).collect();
//! assert_eq!(vec![80, 50, 30], amounts);
//! assert_eq!("1st", payouts[0].place);
//! ```
//!
//! Double elimination brackets pay the two teams knocked out in the same
//! round the same amount.
//!
//! ```
//! use rs_payouts::core::PayoutType;
//! use rs_payouts::resolve::resolve;
//!
//! let payouts = resolve(Some(PayoutType::DoubleElim), 100.0, 5.0);
//! assert_eq!("5th/6th", payouts[4].place);
//! assert_eq!(payouts[4].amount, payouts[5].amount);
//! ```

/// Ordinals, payout entries, payout types and the shared error type.
pub mod core;

/// Payout tables, tie groups and the catalog of standard tables.
pub mod table;

/// The rounding and redistribution engine that turns a table into amounts.
pub mod engine;

/// Picking the first feasible table and the single winner fallback.
pub mod resolve;

/// JSON configuration of a payout request.
#[cfg(feature = "serde")]
pub mod config;
