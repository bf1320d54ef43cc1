use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingSchedule;

pub fn set_total_intervals(ctx: Context<SetTotalIntervals>, new_total_intervals: u64) -> Result<()> {
    require!(new_total_intervals > 0, VestingError::InvalidIntervalCount);

    let st = &mut ctx.accounts.schedule;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, VestingError::UnauthorizedAdmin);

    let old = st.total_intervals;
    st.total_intervals = new_total_intervals;

    emit!(IntervalCountUpdated {
        schedule: st.key(),
        old_total_intervals: old,
        new_total_intervals,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetTotalIntervals<'info> {
    #[account(mut, seeds = [b"schedule", schedule.index.to_le_bytes().as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,
    pub admin: Signer<'info>,
}

#[event]
pub struct IntervalCountUpdated {
    pub schedule: Pubkey,
    pub old_total_intervals: u64,
    pub new_total_intervals: u64,
}
