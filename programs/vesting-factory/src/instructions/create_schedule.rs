use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::VestingError;
use crate::state::{BeneficiaryIndex, Factory, Registry, VestingSchedule};
use crate::utils::validate;

pub fn create_schedule(
    ctx: Context<CreateSchedule>,
    beneficiary: Pubkey,
    start_ts: i64,
    interval_secs: i64,
    total_intervals: u64,
    total_amount: u64,
) -> Result<()> {
    let admin_key = ctx.accounts.admin.key();
    let factory = &mut ctx.accounts.factory;
    require_keys_eq!(admin_key, factory.admin, VestingError::UnauthorizedAdmin);

    let now = Clock::get()?.unix_timestamp;
    let min_grant = validate::min_grant_amount(ctx.accounts.mint.decimals)?;
    validate::schedule_params(
        now,
        &beneficiary,
        &admin_key,
        start_ts,
        interval_secs,
        total_intervals,
        total_amount,
        min_grant,
    )?;

    let index = factory.schedule_count;

    let schedule = &mut ctx.accounts.schedule;
    schedule.mint = ctx.accounts.mint.key();
    // Control over the new schedule goes to the caller, not the factory.
    schedule.admin = admin_key;
    schedule.beneficiary = beneficiary;
    schedule.start_ts = start_ts;
    schedule.interval_secs = interval_secs;
    schedule.total_intervals = total_intervals;
    schedule.total_amount = total_amount;
    schedule.released_amount = 0;
    schedule.released_ticks = 0;
    schedule.beneficiary_consent = false;
    schedule.index = index;

    // Registry append and beneficiary index update land in the same
    // instruction, so they either both persist or neither does.
    ctx.accounts.registry.record(schedule.key())?;
    let beneficiary_index = &mut ctx.accounts.beneficiary_index;
    beneficiary_index.beneficiary = beneficiary;
    beneficiary_index.record(schedule.key())?;

    factory.schedule_count = factory
        .schedule_count
        .checked_add(1)
        .ok_or(VestingError::MathOverflow)?;

    emit!(ScheduleCreated {
        schedule: schedule.key(),
        index,
        mint: schedule.mint,
        admin: schedule.admin,
        beneficiary,
        start_ts,
        interval_secs,
        total_intervals,
        total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct CreateSchedule<'info> {
    #[account(mut, seeds = [b"factory"], bump)]
    pub factory: Account<'info, Factory>,

    #[account(mut, seeds = [b"registry"], bump)]
    pub registry: Box<Account<'info, Registry>>,

    #[account(
        init,
        payer = admin,
        space = 8 + VestingSchedule::SIZE,
        seeds = [b"schedule", factory.schedule_count.to_le_bytes().as_ref()],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        init_if_needed,
        payer = admin,
        space = BeneficiaryIndex::space(),
        seeds = [b"beneficiary", beneficiary.as_ref()],
        bump
    )]
    pub beneficiary_index: Box<Account<'info, BeneficiaryIndex>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = schedule,
        seeds = [b"vault", schedule.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ScheduleCreated {
    pub schedule: Pubkey,
    pub index: u64,
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub beneficiary: Pubkey,
    pub start_ts: i64,
    pub interval_secs: i64,
    pub total_intervals: u64,
    pub total_amount: u64,
}
