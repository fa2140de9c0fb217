use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::WagerError;
use crate::events::{GameStarted, PlayerJoined};
use crate::instructions::vault;
use crate::state::config::GlobalConfig;
use crate::state::enums::*;
use crate::state::session::GameSession;

// ──────────────────────────────────────────────────────
// Join User, player and server cosign
//
// The last join that fills both rosters starts the match.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct JoinUser<'info> {
    /// The joining player
    #[account(mut)]
    pub user: Signer<'info>,

    /// The server authority cosigning the join
    #[account(
        constraint = global_config.is_authority(&server.key()) @ WagerError::InvalidAuthority,
    )]
    pub server: Signer<'info>,

    #[account(
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [GameSession::SEED, game_session.session_id.as_bytes()],
        bump = game_session.bump,
        constraint = game_session.status == GameStatus::WaitingForPlayers @ WagerError::GameInProgress,
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

    /// The player's token account (source of the wager)
    #[account(
        mut,
        constraint = user_token_account.owner == user.key() @ WagerError::InvalidPlayerTokenAccount,
        constraint = user_token_account.mint == game_session.mint @ WagerError::InvalidTokenMint,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<JoinUser>, team: TeamSide) -> Result<()> {
    let clock = Clock::get()?;
    let player = ctx.accounts.user.key();

    // Seat first so a full roster or a repeat join fails before any transfer
    let game_session = &mut ctx.accounts.game_session;
    let started = game_session.join(team, player)?;
    let slot = game_session.roster(team).player_count - 1;
    let wager_per_player = game_session.wager_per_player;

    vault::deposit(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.user_token_account.to_account_info(),
        ctx.accounts.vault_token_account.to_account_info(),
        ctx.accounts.user.to_account_info(),
        wager_per_player,
    )?;

    let game_session = &ctx.accounts.game_session;
    msg!(
        "Player {} joined session {} on {:?} slot {}",
        player,
        game_session.session_id,
        team,
        slot
    );

    emit!(PlayerJoined {
        session: game_session.key(),
        player,
        team,
        slot,
        joined_at: clock.unix_timestamp,
    });

    if started {
        msg!("Session {} is full, match started", game_session.session_id);
        emit!(GameStarted {
            session: game_session.key(),
            total_pot: game_session.total_pot()?,
            started_at: clock.unix_timestamp,
        });
    }

    Ok(())
}
