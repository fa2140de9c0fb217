use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::errors::WagerError;
use crate::events::{GameSessionCreated, PlayerJoined};
use crate::instructions::vault;
use crate::state::config::GlobalConfig;
use crate::state::enums::*;
use crate::state::session::{round_wager, validate_session_id, GameSession};

// ──────────────────────────────────────────────────────
// Create Game Session, the creator funds the vault and takes
// slot 0 of their chosen team
//
// The session id seeds both the session PDA and the vault PDA,
// so a duplicate id fails at `init`.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(session_id: String)]
pub struct CreateGameSession<'info> {
    /// The creator, also the first player
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        init,
        payer = creator,
        space = GameSession::LEN,
        seeds = [GameSession::SEED, session_id.as_bytes()],
        bump,
    )]
    pub game_session: Box<Account<'info, GameSession>>,

    /// CHECK: PDA authority over the vault, no data
    #[account(
        seeds = [GameSession::VAULT_SEED, session_id.as_bytes()],
        bump,
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = vault,
    )]
    pub vault_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        address = global_config.mint @ WagerError::InvalidMint,
    )]
    pub mint: Box<Account<'info, Mint>>,

    /// The creator's token account (source of the wager)
    #[account(
        mut,
        constraint = creator_token_account.owner == creator.key() @ WagerError::InvalidPlayerTokenAccount,
        constraint = creator_token_account.mint == mint.key() @ WagerError::InvalidTokenMint,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateGameSession>,
    session_id: String,
    wager_amount: u64,
    game_mode: GameMode,
    creator_team: TeamSide,
) -> Result<()> {
    // ── Validate inputs ──
    validate_session_id(&session_id)?;
    let wager_per_player = round_wager(wager_amount)?;

    let clock = Clock::get()?;
    let creator = ctx.accounts.creator.key();

    // ── Transfer the creator's wager into the vault ──
    vault::deposit(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.creator_token_account.to_account_info(),
        ctx.accounts.vault_token_account.to_account_info(),
        ctx.accounts.creator.to_account_info(),
        wager_per_player,
    )?;

    // ── Initialize the session and seat the creator ──
    let game_session = &mut ctx.accounts.game_session;
    game_session.set_inner(GameSession::new(
        session_id,
        ctx.accounts.mint.key(),
        wager_per_player,
        game_mode,
        creator_team,
        clock.unix_timestamp,
        ctx.bumps.game_session,
        ctx.bumps.vault,
    ));
    game_session.join(creator_team, creator)?;

    msg!(
        "Session {} created: creator={}, wager={}, mode={:?}",
        game_session.session_id,
        creator,
        wager_per_player,
        game_mode,
    );

    // ── Emit events ──
    emit!(GameSessionCreated {
        session: game_session.key(),
        session_id: game_session.session_id.clone(),
        creator,
        mint: game_session.mint,
        wager_per_player,
        game_mode,
        creator_team,
        created_at: clock.unix_timestamp,
    });

    emit!(PlayerJoined {
        session: game_session.key(),
        player: creator,
        team: creator_team,
        slot: 0,
        joined_at: clock.unix_timestamp,
    });

    Ok(())
}
