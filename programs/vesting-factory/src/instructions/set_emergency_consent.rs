use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingSchedule;

pub fn set_emergency_consent(ctx: Context<SetEmergencyConsent>, consent: bool) -> Result<()> {
    let st = &mut ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        st.beneficiary,
        VestingError::UnauthorizedBeneficiary
    );
    st.beneficiary_consent = consent;
    emit!(ConsentChanged {
        schedule: st.key(),
        beneficiary: st.beneficiary,
        consent,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetEmergencyConsent<'info> {
    #[account(mut, seeds = [b"schedule", schedule.index.to_le_bytes().as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,
    pub beneficiary: Signer<'info>,
}

#[event]
pub struct ConsentChanged {
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    pub consent: bool,
}
