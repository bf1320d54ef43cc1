use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingSchedule;
use crate::utils::accrual;

pub fn release(ctx: Context<Release>) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/bumps before taking mutable borrows.
    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let schedule_bump = ctx.bumps.schedule;

    let st = &mut ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        st.beneficiary,
        VestingError::UnauthorizedBeneficiary
    );

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        st.beneficiary,
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let ticks = accrual::elapsed_ticks(now, st.start_ts, st.interval_secs, st.total_intervals)?;
    let releasable =
        accrual::releasable_amount(st.total_amount, st.total_intervals, st.released_amount, ticks)?;
    require!(releasable > 0, VestingError::InsufficientReleasable);

    // The vault can hold less than the ledger owes after an emergency drain.
    require!(
        ctx.accounts.vault.amount >= releasable,
        VestingError::InsufficientVaultBalance
    );

    // CPI transfer from vault to the beneficiary, signed by the schedule PDA.
    let index_bytes = st.index.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[b"schedule", index_bytes.as_ref(), &[schedule_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: schedule_ai,
            },
            signer_seeds,
        ),
        releasable,
    )?;

    st.released_amount = st
        .released_amount
        .checked_add(releasable)
        .ok_or(VestingError::MathOverflow)?;
    // Tick progress is resynced to elapsed time, never incremented.
    st.released_ticks = ticks;

    emit!(TokensReleased {
        schedule: st.key(),
        beneficiary: st.beneficiary,
        amount: releasable,
    });
    emit!(ReleaseProgress {
        schedule: st.key(),
        released_ticks: st.released_ticks,
        released_amount: st.released_amount,
        amount: releasable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(mut, seeds = [b"schedule", schedule.index.to_le_bytes().as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"vault", schedule.key().as_ref()],
        bump,
        constraint = vault.mint == schedule.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ReleaseProgress {
    pub schedule: Pubkey,
    pub released_ticks: u64,
    pub released_amount: u64,
    pub amount: u64,
}
