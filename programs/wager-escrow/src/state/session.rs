use anchor_lang::prelude::*;

use crate::constants::{MAX_SESSION_ID_LENGTH, SPAWNS_PER_DEPOSIT, WAGER_UNIT};
use crate::errors::WagerError;
use crate::state::enums::*;
use crate::state::roster::{PlayerSlot, TeamRoster};

// ──────────────────────────────────────────────────────
// Game Session, one per match, keyed by session id
//
// The creator always sits in slot 0 of `creator_team`.
// The vault is the ATA of the ["vault", session_id] PDA.
// ──────────────────────────────────────────────────────

#[account]
pub struct GameSession {
    // ── Identity ──
    pub session_id: String,          // Unique id, also the PDA seed

    // ── Funds ──
    pub mint: Pubkey,                // Wager mint, copied from the global config
    pub wager_per_player: u64,       // Deposit size, fixed at creation

    // ── Match ──
    pub game_mode: GameMode,
    pub team_a: TeamRoster,
    pub team_b: TeamRoster,
    pub creator_team: TeamSide,

    // ── State ──
    pub status: GameStatus,
    pub created_at: i64,             // Unix timestamp

    // ── PDA ──
    pub bump: u8,
    pub vault_bump: u8,
}

impl GameSession {
    pub const LEN: usize = 8              // discriminator
        + 4 + MAX_SESSION_ID_LENGTH       // session_id (String prefix + bytes)
        + 32                              // mint
        + 8                               // wager_per_player
        + 1                               // game_mode
        + TeamRoster::LEN * 2             // team_a, team_b
        + 1                               // creator_team
        + 1                               // status
        + 8                               // created_at
        + 1                               // bump
        + 1;                              // vault_bump

    pub const SEED: &'static [u8] = b"game_session";
    pub const VAULT_SEED: &'static [u8] = b"vault";

    pub fn new(
        session_id: String,
        mint: Pubkey,
        wager_per_player: u64,
        game_mode: GameMode,
        creator_team: TeamSide,
        created_at: i64,
        bump: u8,
        vault_bump: u8,
    ) -> Self {
        Self {
            session_id,
            mint,
            wager_per_player,
            game_mode,
            team_a: TeamRoster::default(),
            team_b: TeamRoster::default(),
            creator_team,
            status: GameStatus::WaitingForPlayers,
            created_at,
            bump,
            vault_bump,
        }
    }

    pub fn roster(&self, side: TeamSide) -> &TeamRoster {
        match side {
            TeamSide::TeamA => &self.team_a,
            TeamSide::TeamB => &self.team_b,
        }
    }

    pub fn roster_mut(&mut self, side: TeamSide) -> &mut TeamRoster {
        match side {
            TeamSide::TeamA => &mut self.team_a,
            TeamSide::TeamB => &mut self.team_b,
        }
    }

    /// The creator is always the first player on their team
    pub fn creator(&self) -> &Pubkey {
        &self.roster(self.creator_team).slots[0].player
    }

    pub fn is_pay_to_spawn(&self) -> bool {
        self.game_mode.is_pay_to_spawn()
    }

    pub fn has_player(&self, player: &Pubkey) -> bool {
        self.team_a.has_player(player) || self.team_b.has_player(player)
    }

    pub fn is_all_filled(&self) -> bool {
        let capacity = self.game_mode.players_per_team();
        self.team_a.is_full(capacity) && self.team_b.is_full(capacity)
    }

    /// Every occupied slot, team A seats first then team B
    pub fn joined_slots(&self) -> impl Iterator<Item = &PlayerSlot> {
        self.team_a.occupied().iter().chain(self.team_b.occupied().iter())
    }

    /// Deposits a slot has paid into the vault. Winner-takes-all seats
    /// only ever pay the join deposit.
    pub fn deposits(&self, slot: &PlayerSlot) -> u16 {
        if self.is_pay_to_spawn() {
            slot.spawn_purchases
        } else {
            1
        }
    }

    /// Join deposits held for both rosters
    pub fn total_pot(&self) -> Result<u64> {
        let players = u64::from(self.team_a.player_count) + u64::from(self.team_b.player_count);
        players
            .checked_mul(self.wager_per_player)
            .ok_or(WagerError::TotalPotCalculationError.into())
    }

    /// Seats a player and starts the match once both rosters are full.
    /// Returns true when this join started the match.
    pub fn join(&mut self, side: TeamSide, player: Pubkey) -> Result<bool> {
        require!(
            self.status == GameStatus::WaitingForPlayers,
            WagerError::GameInProgress
        );

        let capacity = self.game_mode.players_per_team();
        let pay_to_spawn = self.is_pay_to_spawn();

        require!(!self.roster(side).is_full(capacity), WagerError::TeamIsFull);
        require!(!self.has_player(&player), WagerError::PlayerAlreadyInGame);

        self.roster_mut(side).push(player, capacity, pay_to_spawn)?;

        if self.is_all_filled() {
            self.status = GameStatus::InProgress;
            return Ok(true);
        }

        Ok(false)
    }

    /// Debits one spawn from the victim and, for cross-team kills only,
    /// credits the killer. Both seats are validated before either changes.
    pub fn record_kill(
        &mut self,
        killer_team: TeamSide,
        killer_index: usize,
        killer: &Pubkey,
        victim_team: TeamSide,
        victim_index: usize,
        victim: &Pubkey,
    ) -> Result<()> {
        require!(
            self.status == GameStatus::InProgress,
            WagerError::GameNotInProgress
        );

        self.roster(killer_team)
            .slot_for(killer_index, killer, WagerError::InvalidKillRecord)?;
        let victim_slot = self
            .roster(victim_team)
            .slot_for(victim_index, victim, WagerError::InvalidKillRecord)?;
        require!(victim_slot.spawns_remaining > 0, WagerError::PlayerHasNoSpawns);

        let victim_slot = self.roster_mut(victim_team).slot_for_mut(
            victim_index,
            victim,
            WagerError::InvalidKillRecord,
        )?;
        victim_slot.spawns_remaining -= 1;

        // Friendly fire and suicides cost a spawn but score nothing
        if killer_team != victim_team {
            let killer_slot = self.roster_mut(killer_team).slot_for_mut(
                killer_index,
                killer,
                WagerError::InvalidKillRecord,
            )?;
            killer_slot.kill_count = killer_slot
                .kill_count
                .checked_add(1)
                .ok_or(WagerError::ArithmeticError)?;
        }

        Ok(())
    }

    /// Credits one deposit worth of spawns to the player seated at `index`
    pub fn add_spawns(&mut self, side: TeamSide, index: usize, player: &Pubkey) -> Result<()> {
        require!(
            self.status == GameStatus::InProgress && self.is_pay_to_spawn(),
            WagerError::InvalidGameState
        );

        let slot = self
            .roster_mut(side)
            .slot_for_mut(index, player, WagerError::PlayerNotFound)?;

        slot.spawns_remaining = slot
            .spawns_remaining
            .checked_add(SPAWNS_PER_DEPOSIT)
            .ok_or(WagerError::ArithmeticError)?;
        slot.spawn_purchases = slot
            .spawn_purchases
            .checked_add(1)
            .ok_or(WagerError::ArithmeticError)?;

        Ok(())
    }
}

/// Validates the session id bound
pub fn validate_session_id(session_id: &str) -> Result<()> {
    require!(
        !session_id.is_empty() && session_id.len() <= MAX_SESSION_ID_LENGTH,
        WagerError::InvalidSessionIdLength
    );
    Ok(())
}

/// Rounds a requested wager down to a whole number of wager units
pub fn round_wager(wager_amount: u64) -> Result<u64> {
    let rounded = wager_amount - wager_amount % WAGER_UNIT;
    require!(rounded > 0, WagerError::InvalidWagerAmount);
    Ok(rounded)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    pub fn session(mode: GameMode, creator_team: TeamSide) -> GameSession {
        let mut session = GameSession::new(
            "match-1".to_string(),
            key(200),
            100,
            mode,
            creator_team,
            1_700_000_000,
            254,
            253,
        );
        session.join(creator_team, key(1)).unwrap();
        session
    }

    /// Fills both rosters; team A gets keys 1..=N, team B gets 11..=10+N
    pub fn full_session(mode: GameMode) -> GameSession {
        let mut session = session(mode, TeamSide::TeamA);
        let n = mode.players_per_team() as u8;
        for i in 2..=n {
            session.join(TeamSide::TeamA, key(i)).unwrap();
        }
        for i in 1..=n {
            session.join(TeamSide::TeamB, key(10 + i)).unwrap();
        }
        assert_eq!(session.status, GameStatus::InProgress);
        session
    }

    #[test]
    fn wager_rounds_down_to_unit() {
        assert_eq!(round_wager(123_456_789).unwrap(), 123_456_780);
        assert_eq!(round_wager(10).unwrap(), 10);
        assert_eq!(round_wager(u64::MAX).unwrap(), u64::MAX - 5);
    }

    #[test]
    fn wager_below_unit_is_rejected() {
        assert_eq!(round_wager(9).unwrap_err(), WagerError::InvalidWagerAmount.into());
        assert_eq!(round_wager(0).unwrap_err(), WagerError::InvalidWagerAmount.into());
    }

    #[test]
    fn session_id_bounds() {
        assert!(validate_session_id("a").is_ok());
        assert!(validate_session_id(&"x".repeat(MAX_SESSION_ID_LENGTH)).is_ok());
        assert_eq!(
            validate_session_id("").unwrap_err(),
            WagerError::InvalidSessionIdLength.into()
        );
        assert_eq!(
            validate_session_id(&"x".repeat(MAX_SESSION_ID_LENGTH + 1)).unwrap_err(),
            WagerError::InvalidSessionIdLength.into()
        );
    }

    #[test]
    fn session_fits_declared_len() {
        let mut session = full_session(GameMode::PayToSpawnFiveVsFive);
        session.session_id = "s".repeat(MAX_SESSION_ID_LENGTH);

        let mut bytes = Vec::new();
        session.serialize(&mut bytes).unwrap();

        assert_eq!(8 + bytes.len(), GameSession::LEN);
    }

    #[test]
    fn creator_sits_first_on_their_team() {
        let session = session(GameMode::WinnerTakesAllThreeVsThree, TeamSide::TeamB);
        assert_eq!(*session.creator(), key(1));
        assert_eq!(session.team_b.player_count, 1);
        assert_eq!(session.team_a.player_count, 0);
        assert_eq!(session.status, GameStatus::WaitingForPlayers);
    }

    #[test]
    fn join_starts_match_when_both_rosters_fill() {
        let mut session = session(GameMode::WinnerTakesAllOneVsOne, TeamSide::TeamA);
        assert!(session.join(TeamSide::TeamB, key(2)).unwrap());
        assert_eq!(session.status, GameStatus::InProgress);
        assert_eq!(session.total_pot().unwrap(), 200);
    }

    #[test]
    fn join_rejects_full_team() {
        let mut session = session(GameMode::WinnerTakesAllThreeVsThree, TeamSide::TeamA);
        session.join(TeamSide::TeamA, key(2)).unwrap();
        session.join(TeamSide::TeamA, key(3)).unwrap();

        let err = session.join(TeamSide::TeamA, key(4)).unwrap_err();
        assert_eq!(err, WagerError::TeamIsFull.into());
    }

    #[test]
    fn join_rejects_player_on_either_team() {
        let mut session = session(GameMode::WinnerTakesAllThreeVsThree, TeamSide::TeamA);

        let err = session.join(TeamSide::TeamA, key(1)).unwrap_err();
        assert_eq!(err, WagerError::PlayerAlreadyInGame.into());

        let err = session.join(TeamSide::TeamB, key(1)).unwrap_err();
        assert_eq!(err, WagerError::PlayerAlreadyInGame.into());
    }

    #[test]
    fn join_rejected_once_match_started() {
        let mut session = full_session(GameMode::WinnerTakesAllOneVsOne);
        let err = session.join(TeamSide::TeamA, key(99)).unwrap_err();
        assert_eq!(err, WagerError::GameInProgress.into());
    }

    #[test]
    fn cross_team_kill_scores_for_killer() {
        let mut session = full_session(GameMode::PayToSpawnThreeVsThree);
        session
            .record_kill(TeamSide::TeamA, 0, &key(1), TeamSide::TeamB, 2, &key(13))
            .unwrap();

        assert_eq!(session.team_a.slots[0].kill_count, 1);
        assert_eq!(session.team_b.slots[2].spawns_remaining, SPAWNS_PER_DEPOSIT - 1);
    }

    #[test]
    fn same_team_kill_only_costs_a_spawn() {
        let mut session = full_session(GameMode::PayToSpawnThreeVsThree);
        session
            .record_kill(TeamSide::TeamA, 0, &key(1), TeamSide::TeamA, 1, &key(2))
            .unwrap();
        session
            .record_kill(TeamSide::TeamB, 0, &key(11), TeamSide::TeamB, 0, &key(11))
            .unwrap();

        assert_eq!(session.team_a.slots[0].kill_count, 0);
        assert_eq!(session.team_a.slots[1].spawns_remaining, SPAWNS_PER_DEPOSIT - 1);
        assert_eq!(session.team_b.slots[0].kill_count, 0);
        assert_eq!(session.team_b.slots[0].spawns_remaining, SPAWNS_PER_DEPOSIT - 1);
    }

    #[test]
    fn kill_on_empty_victim_fails() {
        let mut session = full_session(GameMode::PayToSpawnOneVsOne);
        for _ in 0..SPAWNS_PER_DEPOSIT {
            session
                .record_kill(TeamSide::TeamA, 0, &key(1), TeamSide::TeamB, 0, &key(11))
                .unwrap();
        }

        let err = session
            .record_kill(TeamSide::TeamA, 0, &key(1), TeamSide::TeamB, 0, &key(11))
            .unwrap_err();
        assert_eq!(err, WagerError::PlayerHasNoSpawns.into());
        assert_eq!(session.team_a.slots[0].kill_count, SPAWNS_PER_DEPOSIT);
    }

    #[test]
    fn kill_validates_both_seats_before_mutating() {
        let mut session = full_session(GameMode::PayToSpawnThreeVsThree);
        let before = session.team_b;

        let err = session
            .record_kill(TeamSide::TeamA, 0, &key(2), TeamSide::TeamB, 0, &key(11))
            .unwrap_err();
        assert_eq!(err, WagerError::PlayerNotFound.into());

        let err = session
            .record_kill(TeamSide::TeamA, 0, &key(1), TeamSide::TeamB, 4, &Pubkey::default())
            .unwrap_err();
        assert_eq!(err, WagerError::InvalidKillRecord.into());

        assert_eq!(session.team_b, before);
        assert_eq!(session.team_a.slots[0].kill_count, 0);
    }

    #[test]
    fn kill_requires_match_in_progress() {
        let mut session = session(GameMode::PayToSpawnOneVsOne, TeamSide::TeamA);
        let err = session
            .record_kill(TeamSide::TeamA, 0, &key(1), TeamSide::TeamA, 0, &key(1))
            .unwrap_err();
        assert_eq!(err, WagerError::GameNotInProgress.into());
    }

    #[test]
    fn winner_takes_all_has_no_spawn_economy() {
        let mut session = full_session(GameMode::WinnerTakesAllOneVsOne);
        let err = session
            .record_kill(TeamSide::TeamA, 0, &key(1), TeamSide::TeamB, 0, &key(11))
            .unwrap_err();
        assert_eq!(err, WagerError::PlayerHasNoSpawns.into());

        let err = session.add_spawns(TeamSide::TeamA, 0, &key(1)).unwrap_err();
        assert_eq!(err, WagerError::InvalidGameState.into());
    }

    #[test]
    fn add_spawns_tops_up_the_callers_seat() {
        let mut session = full_session(GameMode::PayToSpawnThreeVsThree);
        session.add_spawns(TeamSide::TeamB, 1, &key(12)).unwrap();

        let slot = session.team_b.slots[1];
        assert_eq!(slot.spawns_remaining, 2 * SPAWNS_PER_DEPOSIT);
        assert_eq!(slot.spawn_purchases, 2);
        assert_eq!(session.deposits(&slot), 2);
    }

    #[test]
    fn add_spawns_rejects_wrong_seat() {
        let mut session = full_session(GameMode::PayToSpawnThreeVsThree);
        let err = session.add_spawns(TeamSide::TeamB, 1, &key(13)).unwrap_err();
        assert_eq!(err, WagerError::PlayerNotFound.into());

        let err = session.add_spawns(TeamSide::TeamB, 5, &key(13)).unwrap_err();
        assert_eq!(err, WagerError::PlayerNotFound.into());
    }

    #[test]
    fn joined_slots_iterate_team_a_then_team_b() {
        let session = full_session(GameMode::WinnerTakesAllThreeVsThree);
        let order: Vec<Pubkey> = session.joined_slots().map(|slot| slot.player).collect();
        assert_eq!(order, vec![key(1), key(2), key(3), key(11), key(12), key(13)]);
    }
}
