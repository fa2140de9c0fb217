use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::INITIALIZER;
use crate::errors::WagerError;
use crate::events::GlobalConfigCreated;
use crate::state::config::GlobalConfig;

// ──────────────────────────────────────────────────────
// Create Global Config, called once by the bootstrap key
//
// Creates the singleton GlobalConfig PDA that stores the server
// authority and the wager mint. `init` makes a second call fail,
// and only INITIALIZER may sign, so the deployment cannot be
// front-run by another wallet.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct CreateGlobalConfig<'info> {
    /// Funds the config account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The hardcoded bootstrap key
    #[account(
        address = INITIALIZER @ WagerError::InvalidInitializer,
    )]
    pub initializer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = GlobalConfig::LEN,
        seeds = [GlobalConfig::SEED],
        bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// The SPL mint every session will be wagered in
    pub mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateGlobalConfig>, server: Pubkey) -> Result<()> {
    require!(server != Pubkey::default(), WagerError::InvalidAuthority);

    let global_config = &mut ctx.accounts.global_config;
    global_config.authority = server;
    global_config.mint = ctx.accounts.mint.key();
    global_config.bump = ctx.bumps.global_config;

    msg!(
        "Global config initialized: authority={}, mint={}",
        global_config.authority,
        global_config.mint,
    );

    emit!(GlobalConfigCreated {
        config: global_config.key(),
        authority: global_config.authority,
        mint: global_config.mint,
        created_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
