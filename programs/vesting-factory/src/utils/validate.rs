//! Creation-parameter rules, checked before any account is written.

use anchor_lang::prelude::Pubkey;

use crate::constants::{MAX_START_DELAY_SECS, MAX_TOTAL_INTERVALS, MIN_INTERVAL_SECS};
use crate::error::VestingError;

/// Validates the full parameter set for a new schedule. Each rule carries its
/// own error so callers can tell exactly which parameter was off.
pub fn schedule_params(
    now: i64,
    beneficiary: &Pubkey,
    admin: &Pubkey,
    start_ts: i64,
    interval_secs: i64,
    total_intervals: u64,
    total_amount: u64,
    min_grant: u64,
) -> Result<(), VestingError> {
    if *beneficiary == Pubkey::default() {
        return Err(VestingError::InvalidBeneficiary);
    }
    if beneficiary == admin {
        return Err(VestingError::BeneficiaryIsAdmin);
    }
    if interval_secs <= MIN_INTERVAL_SECS {
        return Err(VestingError::IntervalTooShort);
    }
    if start_ts < now || start_ts > now.saturating_add(MAX_START_DELAY_SECS) {
        return Err(VestingError::StartTimeOutOfRange);
    }
    if total_intervals == 0 || total_intervals > MAX_TOTAL_INTERVALS {
        return Err(VestingError::InvalidIntervalCount);
    }
    if total_amount < min_grant {
        return Err(VestingError::GrantTooSmall);
    }
    Ok(())
}

/// One whole token in base units for the given mint decimals.
pub fn min_grant_amount(decimals: u8) -> Result<u64, VestingError> {
    10u64
        .checked_pow(decimals as u32)
        .ok_or(VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;
    const DAY: i64 = 86_400;
    const MIN_GRANT: u64 = 1_000_000; // a 6-decimal mint

    fn someone() -> Pubkey {
        Pubkey::new_from_array([7u8; 32])
    }

    fn admin() -> Pubkey {
        Pubkey::new_from_array([1u8; 32])
    }

    fn check(
        beneficiary: &Pubkey,
        start_ts: i64,
        interval_secs: i64,
        total_intervals: u64,
        total_amount: u64,
    ) -> Result<(), VestingError> {
        schedule_params(
            NOW,
            beneficiary,
            &admin(),
            start_ts,
            interval_secs,
            total_intervals,
            total_amount,
            MIN_GRANT,
        )
    }

    #[test]
    fn well_formed_params_pass() {
        assert!(check(&someone(), NOW, 2 * DAY, 10, 5_000_000).is_ok());
        assert!(check(&someone(), NOW + 365 * DAY, DAY + 1, 365, MIN_GRANT).is_ok());
    }

    #[test]
    fn null_beneficiary_is_rejected() {
        assert!(matches!(
            check(&Pubkey::default(), NOW, 2 * DAY, 10, 5_000_000),
            Err(VestingError::InvalidBeneficiary)
        ));
    }

    #[test]
    fn admin_cannot_vest_to_themselves() {
        // Self-vesting would let the admin consent to their own emergency drain.
        assert!(matches!(
            check(&admin(), NOW, 2 * DAY, 10, 5_000_000),
            Err(VestingError::BeneficiaryIsAdmin)
        ));
    }

    #[test]
    fn interval_must_exceed_one_day() {
        assert!(matches!(
            check(&someone(), NOW, DAY, 10, 5_000_000),
            Err(VestingError::IntervalTooShort)
        ));
        assert!(matches!(
            check(&someone(), NOW, 0, 10, 5_000_000),
            Err(VestingError::IntervalTooShort)
        ));
    }

    #[test]
    fn start_must_sit_within_the_next_year() {
        assert!(matches!(
            check(&someone(), NOW - 1, 2 * DAY, 10, 5_000_000),
            Err(VestingError::StartTimeOutOfRange)
        ));
        assert!(matches!(
            check(&someone(), NOW + 365 * DAY + 1, 2 * DAY, 10, 5_000_000),
            Err(VestingError::StartTimeOutOfRange)
        ));
    }

    #[test]
    fn interval_count_must_fit_the_cap() {
        assert!(matches!(
            check(&someone(), NOW, 2 * DAY, 0, 5_000_000),
            Err(VestingError::InvalidIntervalCount)
        ));
        assert!(matches!(
            check(&someone(), NOW, 2 * DAY, 366, 5_000_000),
            Err(VestingError::InvalidIntervalCount)
        ));
    }

    #[test]
    fn dust_grants_are_rejected() {
        assert!(matches!(
            check(&someone(), NOW, 2 * DAY, 10, MIN_GRANT - 1),
            Err(VestingError::GrantTooSmall)
        ));
        assert!(check(&someone(), NOW, 2 * DAY, 10, MIN_GRANT).is_ok());
    }

    #[test]
    fn min_grant_follows_mint_decimals() {
        assert_eq!(min_grant_amount(0).unwrap(), 1);
        assert_eq!(min_grant_amount(6).unwrap(), 1_000_000);
        assert_eq!(min_grant_amount(9).unwrap(), 1_000_000_000);
        assert!(matches!(
            min_grant_amount(20),
            Err(VestingError::MathOverflow)
        ));
    }
}
