use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingSchedule;

pub fn set_total_amount(ctx: Context<SetTotalAmount>, new_total_amount: u64) -> Result<()> {
    let st = &mut ctx.accounts.schedule;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, VestingError::UnauthorizedAdmin);

    // released_amount and released_ticks are left alone; the next release
    // re-derives entitlement from the new total.
    let old = st.total_amount;
    st.total_amount = new_total_amount;

    emit!(TotalAmountUpdated {
        schedule: st.key(),
        old_total_amount: old,
        new_total_amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetTotalAmount<'info> {
    #[account(mut, seeds = [b"schedule", schedule.index.to_le_bytes().as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,
    pub admin: Signer<'info>,
}

#[event]
pub struct TotalAmountUpdated {
    pub schedule: Pubkey,
    pub old_total_amount: u64,
    pub new_total_amount: u64,
}
