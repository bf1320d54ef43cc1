//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Floor for one accrual interval. Creation requires a strictly longer
/// interval, so the shortest accepted tick is one day plus one second.
pub const MIN_INTERVAL_SECS: i64 = SECONDS_PER_DAY;

/// How far into the future a schedule may start (one year).
pub const MAX_START_DELAY_SECS: i64 = 365 * SECONDS_PER_DAY;

/// Upper bound on intervals accepted at creation (daily ticks for a year).
pub const MAX_TOTAL_INTERVALS: u64 = 365;

/// Max schedule keys stored in the global registry PDA.
pub const MAX_SCHEDULES: usize = 64;

/// Max schedule keys stored in one beneficiary index PDA.
pub const MAX_SCHEDULES_PER_BENEFICIARY: usize = 16;
