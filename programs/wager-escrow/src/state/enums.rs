use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Game Status, tracks session lifecycle, only ever moves forward
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    WaitingForPlayers, // Created, rosters still filling
    InProgress,        // Both rosters full, kills and spawns being recorded
    Completed,         // Settled or refunded, vault drained
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::WaitingForPlayers
    }
}

// ──────────────────────────────────────────────────────
// Game Mode, payout rule × team size
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameMode {
    WinnerTakesAllOneVsOne,
    WinnerTakesAllThreeVsThree,
    WinnerTakesAllFiveVsFive,
    PayToSpawnOneVsOne,
    PayToSpawnThreeVsThree,
    PayToSpawnFiveVsFive,
}

impl GameMode {
    /// Roster capacity N for this mode
    pub fn players_per_team(&self) -> usize {
        match self {
            GameMode::WinnerTakesAllOneVsOne | GameMode::PayToSpawnOneVsOne => 1,
            GameMode::WinnerTakesAllThreeVsThree | GameMode::PayToSpawnThreeVsThree => 3,
            GameMode::WinnerTakesAllFiveVsFive | GameMode::PayToSpawnFiveVsFive => 5,
        }
    }

    pub fn is_pay_to_spawn(&self) -> bool {
        matches!(
            self,
            GameMode::PayToSpawnOneVsOne
                | GameMode::PayToSpawnThreeVsThree
                | GameMode::PayToSpawnFiveVsFive
        )
    }
}

// ──────────────────────────────────────────────────────
// Team Side, which roster an instruction targets
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TeamSide {
    TeamA,
    TeamB,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_PLAYERS_PER_TEAM;

    #[test]
    fn capacity_never_exceeds_stored_slots() {
        let modes = [
            GameMode::WinnerTakesAllOneVsOne,
            GameMode::WinnerTakesAllThreeVsThree,
            GameMode::WinnerTakesAllFiveVsFive,
            GameMode::PayToSpawnOneVsOne,
            GameMode::PayToSpawnThreeVsThree,
            GameMode::PayToSpawnFiveVsFive,
        ];
        for mode in modes {
            assert!(mode.players_per_team() <= MAX_PLAYERS_PER_TEAM);
        }
        assert_eq!(GameMode::PayToSpawnThreeVsThree.players_per_team(), 3);
        assert!(!GameMode::WinnerTakesAllFiveVsFive.is_pay_to_spawn());
    }
}
