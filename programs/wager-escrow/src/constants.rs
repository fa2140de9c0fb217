use anchor_lang::prelude::*;

/// The only key allowed to create the global config.
pub const INITIALIZER: Pubkey = pubkey!("6EM1wvaU91S4m4rFtEV4XgUqbxkXZk3UWcqWr1ho8u3j");

/// Session ids are PDA seeds, so they are capped at the 32-byte seed limit
pub const MAX_SESSION_ID_LENGTH: usize = 32;

/// Slots stored per roster; the mode decides how many are usable
pub const MAX_PLAYERS_PER_TEAM: usize = 5;

/// Spawns granted by each deposit in pay-to-spawn modes
pub const SPAWNS_PER_DEPOSIT: u16 = 10;

/// Wagers are rounded down to a multiple of this many base units
pub const WAGER_UNIT: u64 = 10;
