use anchor_lang::prelude::*;

#[error_code]
pub enum WagerError {
    // ── Roster errors ──
    #[msg("Invalid kill record")]
    InvalidKillRecord,

    #[msg("Player is already in the game")]
    PlayerAlreadyInGame,

    // ── Authorization errors ──
    #[msg("Signer is not the configured server authority")]
    InvalidAuthority,

    #[msg("Signer is not the bootstrap initializer")]
    InvalidInitializer,

    // ── Status errors ──
    #[msg("Game session is not in the correct state")]
    InvalidGameState,

    #[msg("Invalid team selection. Team must be 0 or 1")]
    InvalidTeamSelection,

    #[msg("Team is already full")]
    TeamIsFull,

    #[msg("Insufficient funds to join the game")]
    InsufficientFunds,

    #[msg("Invalid number of players for this game mode")]
    InvalidPlayerCount,

    #[msg("Not all players have joined")]
    NotAllPlayersJoined,

    #[msg("Game is not in completed state")]
    GameNotCompleted,

    // ── Settlement errors ──
    #[msg("Only the server authority can distribute winnings")]
    UnauthorizedDistribution,

    #[msg("Invalid winning team selection")]
    InvalidWinningTeam,

    #[msg("Failed to calculate total pot due to arithmetic overflow")]
    TotalPotCalculationError,

    #[msg("No winners found in the winning team")]
    NoWinnersFound,

    #[msg("Failed to calculate per-player winnings")]
    WinningsCalculationError,

    #[msg("Failed to distribute all funds from the vault")]
    IncompleteDistribution,

    #[msg("Invalid team")]
    InvalidTeam,

    #[msg("Player account not found in winners")]
    PlayerAccountNotFound,

    #[msg("Invalid winner")]
    InvalidWinner,

    // ── Arithmetic errors ──
    #[msg("Arithmetic error")]
    ArithmeticError,

    // ── Token account errors ──
    #[msg("Mint does not match the configured wager mint")]
    InvalidMint,

    #[msg("Invalid remaining accounts provided")]
    InvalidRemainingAccounts,

    #[msg("Winner token account is not owned by the winner")]
    InvalidWinnerTokenAccount,

    #[msg("Invalid winner account")]
    InvalidWinnerAccount,

    #[msg("Token account holds a different mint than the session")]
    InvalidTokenMint,

    // ── Spawn economy errors ──
    #[msg("Invalid spawns")]
    InvalidSpawns,

    #[msg("Unauthorized kill")]
    UnauthorizedKill,

    #[msg("Unauthorized pay to spawn")]
    UnauthorizedPayToSpawn,

    #[msg("Player not found")]
    PlayerNotFound,

    #[msg("Player token account is not owned by the player")]
    InvalidPlayerTokenAccount,

    #[msg("Invalid player")]
    InvalidPlayer,

    #[msg("Player has no spawns")]
    PlayerHasNoSpawns,

    #[msg("Game is not in progress")]
    GameNotInProgress,

    // ── Session errors ──
    #[msg("Session id must be between 1 and 32 bytes")]
    InvalidSessionIdLength,

    #[msg("Creator account does not match the session creator")]
    InvalidCreatorAccount,

    #[msg("Creator token account is not owned by the creator")]
    InvalidCreatorTokenAccount,

    #[msg("The creator token account was not provided")]
    CreatorTokenAccountNotProvided,

    #[msg("The game is in progress, all players have joined")]
    GameInProgress,

    #[msg("Players not sorted")]
    PlayersNotSorted,

    #[msg("Players not distinct")]
    PlayersNotDistinct,

    #[msg("Wager must be at least 10 base units of the token")]
    InvalidWagerAmount,
}
