use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingSchedule;

pub fn set_beneficiary(ctx: Context<SetBeneficiary>, new_beneficiary: Pubkey) -> Result<()> {
    require!(
        new_beneficiary != Pubkey::default(),
        VestingError::InvalidBeneficiary
    );

    let st = &mut ctx.accounts.schedule;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, VestingError::UnauthorizedAdmin);
    // The consent gate stays meaningful only while the two roles differ.
    require!(
        new_beneficiary != st.admin,
        VestingError::BeneficiaryIsAdmin
    );

    // The registry entry for this schedule is not rewritten; lookups by the
    // old beneficiary keep returning it as a historical record.
    let old = st.beneficiary;
    st.beneficiary = new_beneficiary;

    emit!(BeneficiaryUpdated {
        schedule: st.key(),
        old_beneficiary: old,
        new_beneficiary,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetBeneficiary<'info> {
    #[account(mut, seeds = [b"schedule", schedule.index.to_le_bytes().as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,
    pub admin: Signer<'info>,
}

#[event]
pub struct BeneficiaryUpdated {
    pub schedule: Pubkey,
    pub old_beneficiary: Pubkey,
    pub new_beneficiary: Pubkey,
}
