use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingSchedule;

pub fn set_start_time(ctx: Context<SetStartTime>, new_start_ts: i64) -> Result<()> {
    let st = &mut ctx.accounts.schedule;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, VestingError::UnauthorizedAdmin);

    let old = st.start_ts;
    st.start_ts = new_start_ts;

    emit!(StartTimeUpdated {
        schedule: st.key(),
        old_start_ts: old,
        new_start_ts,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetStartTime<'info> {
    #[account(mut, seeds = [b"schedule", schedule.index.to_le_bytes().as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,
    pub admin: Signer<'info>,
}

#[event]
pub struct StartTimeUpdated {
    pub schedule: Pubkey,
    pub old_start_ts: i64,
    pub new_start_ts: i64,
}
