use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::enums::*;

declare_id!("EYrJZEG8SzwYEeG44oqDeTNubXfFYMJRidK9m9mC1axX");

#[program]
pub mod wager_escrow {
    use super::*;

    // ──────────────────────────────────────────────────────
    // ADMIN
    // ──────────────────────────────────────────────────────

    /// Create the global config. Only the bootstrap key can call this,
    /// and only once. Records the server authority and the wager mint.
    pub fn create_global_config(ctx: Context<CreateGlobalConfig>, server: Pubkey) -> Result<()> {
        instructions::create_global_config::handler(ctx, server)
    }

    /// Hand the server role to a new key. Current authority only.
    pub fn update_global_config(
        ctx: Context<UpdateGlobalConfig>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::update_global_config::handler(ctx, new_authority)
    }

    // ──────────────────────────────────────────────────────
    // SESSION LIFECYCLE
    // ──────────────────────────────────────────────────────

    /// Create a session and deposit the creator's wager.
    /// The wager is rounded down to a multiple of 10 base units.
    pub fn create_game_session(
        ctx: Context<CreateGameSession>,
        session_id: String,
        wager_amount: u64,
        game_mode: GameMode,
        creator_team: TeamSide,
    ) -> Result<()> {
        instructions::create_session::handler(ctx, session_id, wager_amount, game_mode, creator_team)
    }

    /// Player joins a team, cosigned by the server.
    /// Filling both rosters starts the match.
    pub fn join_user(ctx: Context<JoinUser>, team: TeamSide) -> Result<()> {
        instructions::join::handler(ctx, team)
    }

    // ──────────────────────────────────────────────────────
    // SPAWN ECONOMY
    // ──────────────────────────────────────────────────────

    /// Server reports a kill. Same-team kills cost the victim a spawn
    /// but score nothing.
    pub fn record_kill(ctx: Context<RecordKill>, report: KillReport) -> Result<()> {
        instructions::record_kill::handler(ctx, report)
    }

    /// Player buys 10 more spawns for one more wager deposit.
    pub fn pay_to_spawn(ctx: Context<PayToSpawn>, team: TeamSide, index: u8) -> Result<()> {
        instructions::pay_to_spawn::handler(ctx, team, index)
    }

    // ──────────────────────────────────────────────────────
    // SETTLEMENT
    // ──────────────────────────────────────────────────────

    /// Winner-takes-all payout. Remaining accounts: the winning team's
    /// token accounts in slot order.
    pub fn distribute_winnings<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeWinnings<'info>>,
        winning_team: TeamSide,
    ) -> Result<()> {
        instructions::distribute::winner_takes_all_handler(ctx, winning_team)
    }

    /// Pay-to-spawn payout, weighted by kills plus spawns left.
    /// Remaining accounts: token accounts of every seat with a non-zero
    /// weight, team A first.
    pub fn distribute_pay_to_spawn_winnings<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeWinnings<'info>>,
    ) -> Result<()> {
        instructions::distribute::pay_to_spawn_handler(ctx)
    }

    /// Abort a session and return every deposit.
    /// Remaining accounts: every joined player's token account, team A first.
    /// Anything beyond the deposits is swept to the creator's token account.
    pub fn refund_wager<'info>(
        ctx: Context<'_, '_, 'info, 'info, RefundWager<'info>>,
    ) -> Result<()> {
        instructions::refund::handler(ctx)
    }
}
