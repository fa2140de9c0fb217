use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::WagerError;
use crate::events::WagersRefunded;
use crate::instructions::vault::{self, VaultPayer};
use crate::state::config::GlobalConfig;
use crate::state::enums::*;
use crate::state::session::GameSession;

// ──────────────────────────────────────────────────────
// Refund Wager, server only, abort path for a match that
// will never finish
//
// Allowed while waiting for players or in progress. Every joined
// player gets back what they deposited, kills never change it.
// Remaining accounts are the players' token accounts, team A
// seats first, then team B. Tokens sent straight to the vault are
// swept to the creator so the vault always drains.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RefundWager<'info> {
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
        close = creator,
        seeds = [GameSession::SEED, game_session.session_id.as_bytes()],
        bump = game_session.bump,
        constraint = game_session.status != GameStatus::Completed @ WagerError::InvalidGameState,
    )]
    pub game_session: Box<Account<'info, GameSession>>,

    /// CHECK: The session creator, receives all rent
    #[account(
        mut,
        constraint = creator.key() == *game_session.creator() @ WagerError::InvalidCreatorAccount,
    )]
    pub creator: UncheckedAccount<'info>,

    /// Required whenever the vault holds more than the deposits
    #[account(mut)]
    pub creator_token_account: Option<Account<'info, TokenAccount>>,

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

    pub token_program: Program<'info, Token>,
}

pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, RefundWager<'info>>) -> Result<()> {
    let game_session = &ctx.accounts.game_session;
    msg!("Refunding session {}", game_session.session_id);

    let plan = game_session.refund_settlement(ctx.accounts.vault_token_account.amount)?;

    // ── Validate every destination before moving anything ──
    let destinations = vault::load_destinations(
        ctx.remaining_accounts,
        &plan.payouts,
        &game_session.mint,
        WagerError::InvalidPlayerTokenAccount,
    )?;
    let creator_token_account = ctx.accounts.creator_token_account.as_ref();
    vault::check_creator_destination(
        creator_token_account,
        &ctx.accounts.creator.key(),
        &game_session.mint,
    )?;
    vault::require_creator_destination(creator_token_account.is_some(), plan.creator_amount)?;

    let session_id = game_session.session_id.clone();
    let seeds = &[
        GameSession::VAULT_SEED,
        session_id.as_bytes(),
        &[game_session.vault_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let payer = VaultPayer {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault_token_account: ctx.accounts.vault_token_account.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
    };
    payer.pay_all(
        &destinations,
        &plan.payouts,
        creator_token_account,
        plan.creator_amount,
        signer_seeds,
    )?;

    ctx.accounts.vault_token_account.reload()?;
    require!(
        ctx.accounts.vault_token_account.amount == 0,
        WagerError::IncompleteDistribution
    );
    payer.close(ctx.accounts.creator.to_account_info(), signer_seeds)?;

    let game_session = &mut ctx.accounts.game_session;
    game_session.status = GameStatus::Completed;

    emit!(WagersRefunded {
        session: game_session.key(),
        players_refunded: plan.payouts.len() as u8,
        total_refunded: plan.total,
        creator_sweep: plan.creator_amount,
        refunded_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
