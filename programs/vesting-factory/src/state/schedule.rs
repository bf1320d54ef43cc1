use anchor_lang::prelude::*;

/// Single vesting schedule state PDA.
#[account]
pub struct VestingSchedule {
    /// Token mint of the vested asset.
    pub mint: Pubkey,
    /// Admin authority over this schedule (handed to the creator, not
    /// retained by the factory).
    pub admin: Pubkey,
    /// Recipient of releases. Admin-mutable, never self-service.
    pub beneficiary: Pubkey,
    /// Accrual start timestamp (Unix seconds, UTC).
    pub start_ts: i64,
    /// Length of one accrual tick in seconds. Immutable after creation.
    pub interval_secs: i64,
    /// Ticks over which `total_amount` fully vests.
    pub total_intervals: u64,
    /// Total quantity this schedule will ever release, in base units.
    pub total_amount: u64,
    /// Cumulative quantity already transferred to the beneficiary.
    pub released_amount: u64,
    /// Ticks consumed by releases so far. Resynced to elapsed time on each
    /// release, never incremented blindly.
    pub released_ticks: u64,
    /// Beneficiary opt-in widening emergency withdrawal to the full vault.
    pub beneficiary_consent: bool,
    /// Creation ordinal; doubles as this account's PDA seed.
    pub index: u64,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        32 + // beneficiary
        8 +  // start_ts
        8 +  // interval_secs
        8 +  // total_intervals
        8 +  // total_amount
        8 +  // released_amount
        8 +  // released_ticks
        1 +  // beneficiary_consent
        8;   // index
}
