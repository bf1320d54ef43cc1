use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Registry, VestingSchedule};
use crate::utils::accrual;

pub fn emit_schedule_quote(ctx: Context<EmitScheduleQuote>) -> Result<()> {
    let st = &ctx.accounts.schedule;
    require!(
        ctx.accounts.registry.schedules.contains(&st.key()),
        VestingError::ScheduleNotRegistered
    );

    let now = Clock::get()?.unix_timestamp;
    let ticks = accrual::elapsed_ticks(now, st.start_ts, st.interval_secs, st.total_intervals)?;
    let vested = accrual::vested_amount(st.total_amount, st.total_intervals, ticks)?;
    let releasable = vested.saturating_sub(st.released_amount);

    emit!(ScheduleQuote {
        schedule: st.key(),
        beneficiary: st.beneficiary,
        start_ts: st.start_ts,
        interval_secs: st.interval_secs,
        total_intervals: st.total_intervals,
        total_amount: st.total_amount,
        elapsed_ticks: ticks,
        released_ticks: st.released_ticks,
        released_amount: st.released_amount,
        vested_amount: vested,
        releasable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitScheduleQuote<'info> {
    #[account(seeds = [b"registry"], bump)]
    pub registry: Box<Account<'info, Registry>>,

    #[account(seeds = [b"schedule", schedule.index.to_le_bytes().as_ref()], bump)]
    pub schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct ScheduleQuote {
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    pub start_ts: i64,
    pub interval_secs: i64,
    pub total_intervals: u64,
    pub total_amount: u64,
    pub elapsed_ticks: u64,
    pub released_ticks: u64,
    pub released_amount: u64,
    pub vested_amount: u64,
    pub releasable: u64,
}
