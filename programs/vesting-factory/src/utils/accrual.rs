//! Interval-accrual arithmetic for vesting schedules.
//! - elapsed_ticks = floor((now - start) / interval), clamped to [0, total]
//! - vested = floor(total_amount * elapsed_ticks / total_intervals)
//! - truncated remainders stay pending; the final tick makes the ratio exactly
//!   1, so full maturity pays out `total_amount` to the base unit

use crate::error::VestingError;

/// Whole accrual ticks elapsed since `start_ts`, clamped to `[0, total_intervals]`.
/// The admin may move `start_ts` arbitrarily far back, so the span is checked.
pub fn elapsed_ticks(
    now: i64,
    start_ts: i64,
    interval_secs: i64,
    total_intervals: u64,
) -> Result<u64, VestingError> {
    if now < start_ts || interval_secs <= 0 {
        return Ok(0);
    }
    let elapsed = now
        .checked_sub(start_ts)
        .ok_or(VestingError::MathOverflow)?;
    let ticks = (elapsed / interval_secs) as u64;
    Ok(ticks.min(total_intervals))
}

/// Quantity vested after `ticks` intervals, truncating division in `u128`.
pub fn vested_amount(
    total_amount: u64,
    total_intervals: u64,
    ticks: u64,
) -> Result<u64, VestingError> {
    if total_intervals == 0 {
        return Err(VestingError::InvalidIntervalCount);
    }
    let vested = (total_amount as u128)
        .checked_mul(ticks as u128)
        .ok_or(VestingError::MathOverflow)?
        / (total_intervals as u128);
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

/// Vested minus already released, floored at zero. The floor covers the case
/// where the admin shrank `total_amount` below what has already been paid out.
pub fn releasable_amount(
    total_amount: u64,
    total_intervals: u64,
    released_amount: u64,
    ticks: u64,
) -> Result<u64, VestingError> {
    Ok(vested_amount(total_amount, total_intervals, ticks)?.saturating_sub(released_amount))
}

/// Quantity the admin may pull out of the vault. With beneficiary consent the
/// whole balance is in scope; without it, only the surplus above the
/// outstanding obligation (`total_amount - released_amount`) may leave.
pub fn emergency_withdrawable(
    vault_balance: u64,
    consent: bool,
    total_amount: u64,
    released_amount: u64,
) -> Result<u64, VestingError> {
    if consent {
        if vault_balance == 0 {
            return Err(VestingError::NothingToWithdraw);
        }
        return Ok(vault_balance);
    }
    let obligation = total_amount.saturating_sub(released_amount);
    let surplus = vault_balance.saturating_sub(obligation);
    if surplus == 0 {
        return Err(VestingError::NoExcessBalance);
    }
    Ok(surplus)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    const MONTH: i64 = 30 * DAY;
    const START: i64 = 1_700_000_000;

    #[test]
    fn nothing_elapses_before_start() {
        assert_eq!(elapsed_ticks(START - 1, START, MONTH, 10).unwrap(), 0);
        assert_eq!(elapsed_ticks(START - 400 * DAY, START, MONTH, 10).unwrap(), 0);
        let ticks = elapsed_ticks(START - 1, START, MONTH, 10).unwrap();
        assert_eq!(releasable_amount(1000, 10, 0, ticks).unwrap(), 0);
    }

    #[test]
    fn tick_boundaries_are_inclusive() {
        assert_eq!(elapsed_ticks(START, START, MONTH, 10).unwrap(), 0);
        assert_eq!(elapsed_ticks(START + MONTH - 1, START, MONTH, 10).unwrap(), 0);
        assert_eq!(elapsed_ticks(START + MONTH, START, MONTH, 10).unwrap(), 1);
        assert_eq!(elapsed_ticks(START + 3 * MONTH, START, MONTH, 10).unwrap(), 3);
    }

    #[test]
    fn ticks_clamp_at_total_intervals() {
        assert_eq!(elapsed_ticks(START + 100 * MONTH, START, MONTH, 10).unwrap(), 10);
        assert_eq!(elapsed_ticks(i64::MAX, START, MONTH, 10).unwrap(), 10);
    }

    #[test]
    fn unrepresentable_elapsed_span_is_rejected() {
        // start_ts moved to the far past makes now - start_ts exceed i64.
        assert!(matches!(
            elapsed_ticks(0, i64::MIN, 2 * DAY, 10),
            Err(VestingError::MathOverflow)
        ));
        assert!(matches!(
            elapsed_ticks(i64::MAX, i64::MIN, MONTH, 10),
            Err(VestingError::MathOverflow)
        ));
    }

    #[test]
    fn vesting_truncates_toward_zero() {
        // 1000 over 7 ticks: 142.857... per tick, floored each time.
        assert_eq!(vested_amount(1000, 7, 1).unwrap(), 142);
        assert_eq!(vested_amount(1000, 7, 3).unwrap(), 428);
        assert_eq!(vested_amount(1000, 7, 6).unwrap(), 857);
    }

    #[test]
    fn final_tick_recovers_the_remainder() {
        assert_eq!(vested_amount(1000, 7, 7).unwrap(), 1000);
        assert_eq!(vested_amount(u64::MAX, 365, 365).unwrap(), u64::MAX);
    }

    #[test]
    fn zero_intervals_is_rejected() {
        assert!(matches!(
            vested_amount(1000, 0, 0),
            Err(VestingError::InvalidIntervalCount)
        ));
    }

    #[test]
    fn releasable_subtracts_released() {
        assert_eq!(releasable_amount(1000, 10, 100, 3).unwrap(), 200);
        assert_eq!(releasable_amount(1000, 10, 300, 3).unwrap(), 0);
    }

    #[test]
    fn releasable_floors_at_zero_after_total_shrank() {
        // Admin cut total_amount to 200 after 300 had already been released.
        assert_eq!(releasable_amount(200, 10, 300, 10).unwrap(), 0);
    }

    #[test]
    fn releasable_jumps_after_total_grew() {
        // 300 released out of 1000 at tick 3; total raised to 2000.
        assert_eq!(releasable_amount(2000, 10, 300, 3).unwrap(), 300);
    }

    #[test]
    fn entitlement_never_decreases_as_time_passes() {
        let released = 300;
        let mut last = 0;
        for ticks in 0..=12 {
            let ticks = ticks.min(10);
            let entitlement = released + releasable_amount(1000, 10, released, ticks).unwrap();
            assert!(entitlement >= last);
            last = entitlement;
        }
    }

    #[test]
    fn thirty_day_grant_releases_in_tenths() {
        // 1000 over ten 30-day ticks, exercised at tick 3 and at maturity.
        let t3 = START + 3 * MONTH;
        let ticks = elapsed_ticks(t3, START, MONTH, 10).unwrap();
        assert_eq!(ticks, 3);
        assert_eq!(releasable_amount(1000, 10, 0, ticks).unwrap(), 300);

        // Right after a 300 release nothing more is due until the next tick.
        assert_eq!(releasable_amount(1000, 10, 300, ticks).unwrap(), 0);

        let t10 = START + 10 * MONTH;
        let ticks = elapsed_ticks(t10, START, MONTH, 10).unwrap();
        assert_eq!(ticks, 10);
        assert_eq!(releasable_amount(1000, 10, 300, ticks).unwrap(), 700);

        // Well past maturity the remainder owed stays exact.
        let late = elapsed_ticks(t10 + 17 * MONTH, START, MONTH, 10).unwrap();
        assert_eq!(releasable_amount(1000, 10, 300, late).unwrap(), 700);
    }

    #[test]
    fn repeated_reads_return_the_same_amount() {
        // Quoting releasable twice with no state change must not move the number.
        let ticks = elapsed_ticks(START + 3 * MONTH, START, MONTH, 10).unwrap();
        assert_eq!(
            releasable_amount(1000, 10, 100, ticks).unwrap(),
            releasable_amount(1000, 10, 100, ticks).unwrap()
        );
    }

    // Emergency scope policy: full drain only with beneficiary consent;
    // without consent the outstanding obligation is untouchable.

    #[test]
    fn consent_widens_withdrawal_to_full_balance() {
        assert_eq!(emergency_withdrawable(1000, true, 800, 300).unwrap(), 1000);
    }

    #[test]
    fn consented_withdrawal_from_empty_vault_is_rejected() {
        assert!(matches!(
            emergency_withdrawable(0, true, 800, 300),
            Err(VestingError::NothingToWithdraw)
        ));
    }

    #[test]
    fn without_consent_only_the_surplus_moves() {
        // Obligation is 800 - 300 = 500, so 1000 held leaves 500 to take.
        assert_eq!(emergency_withdrawable(1000, false, 800, 300).unwrap(), 500);
    }

    #[test]
    fn without_consent_balance_at_or_below_obligation_is_rejected() {
        assert!(matches!(
            emergency_withdrawable(500, false, 800, 300),
            Err(VestingError::NoExcessBalance)
        ));
        assert!(matches!(
            emergency_withdrawable(499, false, 800, 300),
            Err(VestingError::NoExcessBalance)
        ));
    }

    #[test]
    fn without_consent_the_obligation_is_never_cut_into() {
        for balance in [0u64, 1, 499, 500, 501, 1000, 5000] {
            for released in [0u64, 300, 800] {
                let obligation = 800u64.saturating_sub(released);
                if let Ok(taken) = emergency_withdrawable(balance, false, 800, released) {
                    assert!(balance - taken >= obligation);
                }
            }
        }
    }

    #[test]
    fn overpaid_schedule_frees_the_whole_balance() {
        // total_amount shrunk below released: nothing is owed anymore.
        assert_eq!(emergency_withdrawable(1000, false, 200, 300).unwrap(), 1000);
    }
}
