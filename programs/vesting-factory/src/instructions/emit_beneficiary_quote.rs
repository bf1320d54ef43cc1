use anchor_lang::prelude::*;

use crate::state::BeneficiaryIndex;

pub fn emit_beneficiary_quote(ctx: Context<EmitBeneficiaryQuote>, beneficiary: Pubkey) -> Result<()> {
    let index = &ctx.accounts.beneficiary_index;

    emit!(BeneficiaryQuote {
        beneficiary,
        total: index.schedules.len() as u64,
        schedules: index.schedules.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct EmitBeneficiaryQuote<'info> {
    #[account(seeds = [b"beneficiary", beneficiary.as_ref()], bump)]
    pub beneficiary_index: Box<Account<'info, BeneficiaryIndex>>,
}

#[event]
pub struct BeneficiaryQuote {
    pub beneficiary: Pubkey,
    pub total: u64,
    pub schedules: Vec<Pubkey>,
}
