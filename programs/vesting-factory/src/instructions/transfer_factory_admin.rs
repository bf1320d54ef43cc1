use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::Factory;

pub fn transfer_factory_admin(ctx: Context<TransferFactoryAdmin>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), VestingError::InvalidPubkey);

    let factory = &mut ctx.accounts.factory;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        factory.admin,
        VestingError::UnauthorizedAdmin
    );

    let old = factory.admin;
    factory.admin = new_admin;

    emit!(FactoryAdminTransferred {
        old_admin: old,
        new_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferFactoryAdmin<'info> {
    #[account(mut, seeds = [b"factory"], bump)]
    pub factory: Account<'info, Factory>,
    pub admin: Signer<'info>,
}

#[event]
pub struct FactoryAdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
