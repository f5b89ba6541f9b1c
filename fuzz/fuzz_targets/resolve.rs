#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate rs_payouts;

use rs_payouts::core::PayoutType;
use rs_payouts::engine::RoundFactor;
use rs_payouts::resolve::resolve;

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct ResolveInput {
    pub payout_type: Option<PayoutType>,
    pub pool: f64,
    pub minimum: f64,
}

fuzz_target!(|input: ResolveInput| {
    let payouts = resolve(input.payout_type, input.pool, input.minimum);

    let valid = input.payout_type.is_some()
        && input.pool > 0.0
        && input.pool.fract() == 0.0
        && input.pool <= rs_payouts::resolve::MAX_POOL
        && input.minimum > 0.0;
    if !valid {
        assert!(payouts.is_empty());
        return;
    }

    let pool = input.pool as i64;
    assert!(!payouts.is_empty());
    let total: i64 = payouts.iter().map(|p| p.amount).sum();
    assert_eq!(pool, total);

    for pair in payouts.windows(2) {
        if pair[0].place == pair[1].place {
            assert_eq!(pair[0].amount, pair[1].amount);
        } else {
            assert!(pair[0].amount > pair[1].amount);
        }
    }

    if payouts.len() > 1 {
        for payout in &payouts {
            assert!(payout.amount as f64 >= input.minimum);
        }
    }

    let unit = RoundFactor::for_pool(pool).unit();
    for payout in &payouts {
        assert_eq!(0, payout.amount % unit);
    }
});
