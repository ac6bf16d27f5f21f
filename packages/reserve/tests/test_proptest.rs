// Property-Based Testing with Proptest
// Run with: cargo test -p fixswap-reserve --test test_proptest

use fixswap_reserve::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: a swap A -> B moves exactly amount_a * rate out of reserve B
    #[test]
    fn prop_swap_a_for_b_accounting(
        reserve_a in 0u128..(u64::MAX as u128),
        reserve_b in 0u128..(u64::MAX as u128),
        amount_a in 0u128..1_000_000,
        rate in 0u128..1_000_000,
    ) {
        let mut ledger = ReserveLedger::new(rate);
        ledger.apply_deposit(reserve_a, reserve_b).unwrap();

        let amount_b = quote_a_for_b(amount_a, rate).unwrap();
        let result = ledger.apply_swap_a_for_b(amount_a, amount_b);

        if reserve_b < amount_b {
            prop_assert_eq!(result, Err(ReserveError::InsufficientReserve));
            prop_assert_eq!(ledger.snapshot(), (reserve_a, reserve_b));
        } else {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(ledger.snapshot(), (reserve_a + amount_a, reserve_b - amount_b));
        }
    }

    /// Property: B -> A pays floor(amount_b / rate)
    #[test]
    fn prop_swap_b_for_a_floor(
        amount_b in 0u128..u128::MAX,
        rate in 1u128..u128::MAX,
    ) {
        let amount_a = quote_b_for_a(amount_b, rate).unwrap();
        prop_assert!(amount_a * rate <= amount_b);
        prop_assert!(amount_b - amount_a * rate < rate);
    }

    /// Property: A -> B -> A returns the original amount
    #[test]
    fn prop_round_trip_no_drift(
        amount_a in 0u128..(u64::MAX as u128),
        rate in 1u128..(u64::MAX as u128),
    ) {
        let amount_b = quote_a_for_b(amount_a, rate).unwrap();
        let back = quote_b_for_a(amount_b, rate).unwrap();
        prop_assert_eq!(back, amount_a);
    }

    /// Property: deposit then withdrawal of the same amounts restores reserves
    #[test]
    fn prop_deposit_withdraw_restores(
        start_a in 0u128..(u64::MAX as u128),
        start_b in 0u128..(u64::MAX as u128),
        amount_a in 0u128..(u64::MAX as u128),
        amount_b in 0u128..(u64::MAX as u128),
    ) {
        let mut ledger = ReserveLedger::new(1);
        ledger.apply_deposit(start_a, start_b).unwrap();
        let before = ledger.snapshot();

        ledger.apply_deposit(amount_a, amount_b).unwrap();
        ledger.apply_withdrawal(amount_a, amount_b).unwrap();

        prop_assert_eq!(ledger.snapshot(), before);
    }

    /// Property: a rejected withdrawal never changes reserves
    #[test]
    fn prop_overdrawn_withdrawal_is_noop(
        reserve_a in 0u128..1_000_000,
        reserve_b in 0u128..1_000_000,
        excess in 1u128..1_000,
    ) {
        let mut ledger = ReserveLedger::new(1);
        ledger.apply_deposit(reserve_a, reserve_b).unwrap();

        let result = ledger.apply_withdrawal(reserve_a + excess, reserve_b);
        prop_assert_eq!(result, Err(ReserveError::InsufficientReserve));
        prop_assert_eq!(ledger.snapshot(), (reserve_a, reserve_b));
    }
}
