use anchor_lang::prelude::*;

/// Factory control state PDA.
#[account]
pub struct Factory {
    /// Only identity allowed to create schedules.
    pub admin: Pubkey,
    /// Number of schedules created so far; the next schedule takes this
    /// value as its index and PDA seed.
    pub schedule_count: u64,
}

impl Factory {
    pub const SIZE: usize =
        32 + // admin
        8;   // schedule_count
}
