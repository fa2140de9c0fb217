use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::SPAWNS_PER_DEPOSIT;
use crate::errors::WagerError;
use crate::events::SpawnsPurchased;
use crate::instructions::vault;
use crate::state::enums::*;
use crate::state::session::GameSession;

// ──────────────────────────────────────────────────────
// Pay To Spawn, the seated player buys another deposit of spawns
//
// No server cosignature. Pay-to-spawn sessions only, while the
// match is running.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct PayToSpawn<'info> {
    /// The player occupying the slot being topped up
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [GameSession::SEED, game_session.session_id.as_bytes()],
        bump = game_session.bump,
    )]
    pub game_session: Box<Account<'info, GameSession>>,

    /// CHECK: PDA authority over the vault, no data
    #[account(
        seeds = [GameSession::VAULT_SEED, game_session.session_id.as_bytes()],
        bump = game_session.vault_bump,
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = game_session.mint,
        associated_token::authority = vault,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = user_token_account.owner == user.key() @ WagerError::InvalidPlayerTokenAccount,
        constraint = user_token_account.mint == game_session.mint @ WagerError::InvalidTokenMint,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<PayToSpawn>, team: TeamSide, index: u8) -> Result<()> {
    let player = ctx.accounts.user.key();

    let game_session = &mut ctx.accounts.game_session;
    game_session.add_spawns(team, usize::from(index), &player)?;
    let spawns_remaining = game_session.roster(team).slots[usize::from(index)].spawns_remaining;
    let wager_per_player = game_session.wager_per_player;

    vault::deposit(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.user_token_account.to_account_info(),
        ctx.accounts.vault_token_account.to_account_info(),
        ctx.accounts.user.to_account_info(),
        wager_per_player,
    )?;

    msg!(
        "Player {} bought {} spawns for {}",
        player,
        SPAWNS_PER_DEPOSIT,
        wager_per_player
    );

    emit!(SpawnsPurchased {
        session: ctx.accounts.game_session.key(),
        player,
        team,
        amount_paid: wager_per_player,
        spawns_remaining,
        purchased_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
