use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingSchedule;
use crate::utils::accrual;

pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    let st = &ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );
    require!(
        ctx.accounts.destination.key() != Pubkey::default(),
        VestingError::InvalidDestination
    );

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.destination.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );

    let amount = accrual::emergency_withdrawable(
        ctx.accounts.vault.amount,
        st.beneficiary_consent,
        st.total_amount,
        st.released_amount,
    )?;

    // Accrual bookkeeping is untouched: released_amount and released_ticks
    // keep their values even when the vault is drained.
    let index_bytes = st.index.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[b"schedule", index_bytes.as_ref(), &[ctx.bumps.schedule]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.schedule.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(EmergencyWithdrawn {
        schedule: st.key(),
        admin: st.admin,
        destination: ctx.accounts.destination.key(),
        amount,
        full_drain: st.beneficiary_consent,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    #[account(seeds = [b"schedule", schedule.index.to_le_bytes().as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"vault", schedule.key().as_ref()],
        bump,
        constraint = vault.mint == schedule.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub destination: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct EmergencyWithdrawn {
    pub schedule: Pubkey,
    pub admin: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub full_drain: bool,
}
