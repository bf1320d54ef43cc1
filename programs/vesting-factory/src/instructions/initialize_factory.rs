use anchor_lang::prelude::*;

use crate::state::{Factory, Registry};

pub fn initialize_factory(ctx: Context<InitializeFactory>) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    factory.admin = ctx.accounts.admin.key();
    factory.schedule_count = 0;

    let registry = &mut ctx.accounts.registry;
    registry.schedules = Vec::new();

    emit!(FactoryInitialized {
        factory: factory.key(),
        admin: factory.admin,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Factory::SIZE,
        seeds = [b"factory"],
        bump
    )]
    pub factory: Account<'info, Factory>,

    #[account(
        init,
        payer = admin,
        space = Registry::space(),
        seeds = [b"registry"],
        bump
    )]
    pub registry: Box<Account<'info, Registry>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct FactoryInitialized {
    pub factory: Pubkey,
    pub admin: Pubkey,
}
