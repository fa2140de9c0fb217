use anchor_lang::prelude::*;
use crate::state::enums::*;

// ──────────────────────────────────────────────────────
// Events, emitted for off-chain indexing
// ──────────────────────────────────────────────────────

#[event]
pub struct GlobalConfigCreated {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub created_at: i64,
}

#[event]
pub struct AuthorityUpdated {
    pub config: Pubkey,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
    pub updated_at: i64,
}

#[event]
pub struct GameSessionCreated {
    pub session: Pubkey,
    pub session_id: String,
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub wager_per_player: u64,
    pub game_mode: GameMode,
    pub creator_team: TeamSide,
    pub created_at: i64,
}

#[event]
pub struct PlayerJoined {
    pub session: Pubkey,
    pub player: Pubkey,
    pub team: TeamSide,
    pub slot: u8,
    pub joined_at: i64,
}

#[event]
pub struct GameStarted {
    pub session: Pubkey,
    pub total_pot: u64,
    pub started_at: i64,
}

#[event]
pub struct KillRecorded {
    pub session: Pubkey,
    pub killer: Pubkey,
    pub killer_team: TeamSide,
    pub victim: Pubkey,
    pub victim_team: TeamSide,
    pub victim_spawns_remaining: u16,
    pub recorded_at: i64,
}

#[event]
pub struct SpawnsPurchased {
    pub session: Pubkey,
    pub player: Pubkey,
    pub team: TeamSide,
    pub amount_paid: u64,
    pub spawns_remaining: u16,
    pub purchased_at: i64,
}

#[event]
pub struct WinningsDistributed {
    pub session: Pubkey,
    pub winning_team: TeamSide,
    pub total_pot: u64,
    pub per_winner: u64,
    pub remainder: u64,
    pub distributed_at: i64,
}

#[event]
pub struct PayToSpawnWinningsDistributed {
    pub session: Pubkey,
    pub total_payable: u64,
    pub leftover: u64,
    pub creator_sweep: u64,
    pub recipients: u8,
    pub distributed_at: i64,
}

#[event]
pub struct WagersRefunded {
    pub session: Pubkey,
    pub players_refunded: u8,
    pub total_refunded: u64,
    pub creator_sweep: u64,
    pub refunded_at: i64,
}
