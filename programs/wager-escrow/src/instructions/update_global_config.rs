use anchor_lang::prelude::*;

use crate::errors::WagerError;
use crate::events::AuthorityUpdated;
use crate::state::config::GlobalConfig;

// ──────────────────────────────────────────────────────
// Update Global Config, current authority only
//
// Hands the server role to a new key. The old key loses every
// server privilege as soon as this lands.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct UpdateGlobalConfig<'info> {
    /// The current server authority
    #[account(
        constraint = global_config.is_authority(&authority.key()) @ WagerError::InvalidAuthority,
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
}

pub fn handler(ctx: Context<UpdateGlobalConfig>, new_authority: Pubkey) -> Result<()> {
    require!(new_authority != Pubkey::default(), WagerError::InvalidAuthority);

    let global_config = &mut ctx.accounts.global_config;
    let previous_authority = global_config.authority;
    global_config.authority = new_authority;

    msg!(
        "Server authority transferred from {} to {}",
        previous_authority,
        new_authority
    );

    emit!(AuthorityUpdated {
        config: global_config.key(),
        previous_authority,
        new_authority,
        updated_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
