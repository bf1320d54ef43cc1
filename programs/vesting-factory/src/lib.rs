use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("5VnvWmEZKJpEHx6ozGLsnC9P4xzp9ECefxLZttMgsyFn");

#[program]
pub mod vesting_factory {
    use super::*;

    pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
        instructions::initialize_factory(ctx)
    }

    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        beneficiary: Pubkey,
        start_ts: i64,
        interval_secs: i64,
        total_intervals: u64,
        total_amount: u64,
    ) -> Result<()> {
        instructions::create_schedule(
            ctx,
            beneficiary,
            start_ts,
            interval_secs,
            total_intervals,
            total_amount,
        )
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release(ctx)
    }

    pub fn set_emergency_consent(ctx: Context<SetEmergencyConsent>, consent: bool) -> Result<()> {
        instructions::set_emergency_consent(ctx, consent)
    }

    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        instructions::emergency_withdraw(ctx)
    }

    pub fn set_total_amount(ctx: Context<SetTotalAmount>, new_total_amount: u64) -> Result<()> {
        instructions::set_total_amount(ctx, new_total_amount)
    }

    pub fn set_start_time(ctx: Context<SetStartTime>, new_start_ts: i64) -> Result<()> {
        instructions::set_start_time(ctx, new_start_ts)
    }

    pub fn set_total_intervals(
        ctx: Context<SetTotalIntervals>,
        new_total_intervals: u64,
    ) -> Result<()> {
        instructions::set_total_intervals(ctx, new_total_intervals)
    }

    pub fn set_beneficiary(ctx: Context<SetBeneficiary>, new_beneficiary: Pubkey) -> Result<()> {
        instructions::set_beneficiary(ctx, new_beneficiary)
    }

    pub fn transfer_factory_admin(
        ctx: Context<TransferFactoryAdmin>,
        new_admin: Pubkey,
    ) -> Result<()> {
        instructions::transfer_factory_admin(ctx, new_admin)
    }

    pub fn emit_schedule_quote(ctx: Context<EmitScheduleQuote>) -> Result<()> {
        instructions::emit_schedule_quote(ctx)
    }

    pub fn emit_registry_quote(ctx: Context<EmitRegistryQuote>) -> Result<()> {
        instructions::emit_registry_quote(ctx)
    }

    pub fn emit_beneficiary_quote(
        ctx: Context<EmitBeneficiaryQuote>,
        beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::emit_beneficiary_quote(ctx, beneficiary)
    }
}
