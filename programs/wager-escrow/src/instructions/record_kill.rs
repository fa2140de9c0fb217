use anchor_lang::prelude::*;

use crate::errors::WagerError;
use crate::events::KillRecorded;
use crate::state::config::GlobalConfig;
use crate::state::enums::*;
use crate::state::session::GameSession;

// ──────────────────────────────────────────────────────
// Record Kill, server only
//
// The victim always loses a spawn. The killer scores only
// when the victim sits on the other team.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RecordKill<'info> {
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
    )]
    pub game_session: Box<Account<'info, GameSession>>,
}

/// Both seats are addressed by team and slot index and must hold the
/// named players.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct KillReport {
    pub killer_team: TeamSide,
    pub killer_index: u8,
    pub killer: Pubkey,
    pub victim_team: TeamSide,
    pub victim_index: u8,
    pub victim: Pubkey,
}

pub fn handler(ctx: Context<RecordKill>, report: KillReport) -> Result<()> {
    let game_session = &mut ctx.accounts.game_session;

    game_session.record_kill(
        report.killer_team,
        usize::from(report.killer_index),
        &report.killer,
        report.victim_team,
        usize::from(report.victim_index),
        &report.victim,
    )?;

    let victim_spawns_remaining = game_session.roster(report.victim_team).slots
        [usize::from(report.victim_index)]
    .spawns_remaining;

    emit!(KillRecorded {
        session: game_session.key(),
        killer: report.killer,
        killer_team: report.killer_team,
        victim: report.victim,
        victim_team: report.victim_team,
        victim_spawns_remaining,
        recorded_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
