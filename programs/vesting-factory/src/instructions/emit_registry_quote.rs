use anchor_lang::prelude::*;

use crate::state::Registry;

pub fn emit_registry_quote(ctx: Context<EmitRegistryQuote>) -> Result<()> {
    let registry = &ctx.accounts.registry;

    emit!(RegistryQuote {
        total: registry.schedules.len() as u64,
        schedules: registry.schedules.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitRegistryQuote<'info> {
    #[account(seeds = [b"registry"], bump)]
    pub registry: Box<Account<'info, Registry>>,
}

#[event]
pub struct RegistryQuote {
    pub total: u64,
    pub schedules: Vec<Pubkey>,
}
