use anchor_lang::prelude::*;

use crate::constants::{MAX_PLAYERS_PER_TEAM, SPAWNS_PER_DEPOSIT};
use crate::errors::WagerError;

// ──────────────────────────────────────────────────────
// Player Slot, bookkeeping for one seat on a team
//
// An empty seat holds Pubkey::default() and zeroed counters.
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct PlayerSlot {
    pub player: Pubkey,
    pub spawns_remaining: u16,
    pub kill_count: u16,
    /// Deposits made by this player, the join deposit included
    pub spawn_purchases: u16,
}

impl PlayerSlot {
    pub const LEN: usize = 32 // player
        + 2                   // spawns_remaining
        + 2                   // kill_count
        + 2;                  // spawn_purchases

    /// Pay-to-spawn settlement weight
    pub fn weight(&self) -> u32 {
        u32::from(self.kill_count) + u32::from(self.spawns_remaining)
    }
}

// ──────────────────────────────────────────────────────
// Team Roster, fixed slot array plus occupancy count
//
// Slots [0, player_count) are occupied, the rest are empty.
// Capacity is decided by the game mode, not by the array length.
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct TeamRoster {
    pub slots: [PlayerSlot; MAX_PLAYERS_PER_TEAM],
    pub player_count: u8,
}

impl TeamRoster {
    pub const LEN: usize = PlayerSlot::LEN * MAX_PLAYERS_PER_TEAM // slots
        + 1;                                                      // player_count

    /// Occupied slots in seat order
    pub fn occupied(&self) -> &[PlayerSlot] {
        &self.slots[..usize::from(self.player_count)]
    }

    pub fn has_player(&self, player: &Pubkey) -> bool {
        self.occupied().iter().any(|slot| slot.player == *player)
    }

    pub fn is_full(&self, capacity: usize) -> bool {
        usize::from(self.player_count) >= capacity
    }

    /// Seats a player at the next free slot. Pay-to-spawn players start
    /// with one deposit worth of spawns; winner-takes-all seats keep
    /// their spawn counters at zero.
    pub fn push(&mut self, player: Pubkey, capacity: usize, pay_to_spawn: bool) -> Result<()> {
        require!(!self.is_full(capacity), WagerError::TeamIsFull);

        let (spawns_remaining, spawn_purchases) = if pay_to_spawn {
            (SPAWNS_PER_DEPOSIT, 1)
        } else {
            (0, 0)
        };

        self.slots[usize::from(self.player_count)] = PlayerSlot {
            player,
            spawns_remaining,
            kill_count: 0,
            spawn_purchases,
        };
        self.player_count = self
            .player_count
            .checked_add(1)
            .ok_or(WagerError::ArithmeticError)?;

        Ok(())
    }

    /// Looks up an occupied slot and checks who sits in it
    pub fn slot_for(&self, index: usize, player: &Pubkey, out_of_range: WagerError) -> Result<&PlayerSlot> {
        let slot = self.occupied().get(index).ok_or(out_of_range)?;
        require_keys_eq!(slot.player, *player, WagerError::PlayerNotFound);
        Ok(slot)
    }

    pub fn slot_for_mut(
        &mut self,
        index: usize,
        player: &Pubkey,
        out_of_range: WagerError,
    ) -> Result<&mut PlayerSlot> {
        self.slot_for(index, player, out_of_range)?;
        Ok(&mut self.slots[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn push_fills_slots_in_order() {
        let mut roster = TeamRoster::default();
        roster.push(key(1), 3, true).unwrap();
        roster.push(key(2), 3, true).unwrap();

        assert_eq!(roster.player_count, 2);
        assert_eq!(roster.occupied().len(), 2);
        assert_eq!(roster.slots[1].player, key(2));
        assert_eq!(roster.slots[1].spawns_remaining, SPAWNS_PER_DEPOSIT);
        assert_eq!(roster.slots[1].spawn_purchases, 1);
        assert_eq!(roster.slots[2], PlayerSlot::default());
    }

    #[test]
    fn winner_takes_all_seats_have_no_spawns() {
        let mut roster = TeamRoster::default();
        roster.push(key(1), 1, false).unwrap();

        assert_eq!(roster.slots[0].spawns_remaining, 0);
        assert_eq!(roster.slots[0].spawn_purchases, 0);
    }

    #[test]
    fn push_rejects_full_roster() {
        let mut roster = TeamRoster::default();
        roster.push(key(1), 1, false).unwrap();

        let err = roster.push(key(2), 1, false).unwrap_err();
        assert_eq!(err, WagerError::TeamIsFull.into());
        assert_eq!(roster.player_count, 1);
    }

    #[test]
    fn slot_lookup_checks_range_and_identity() {
        let mut roster = TeamRoster::default();
        roster.push(key(1), 3, true).unwrap();

        assert!(roster.slot_for(0, &key(1), WagerError::InvalidKillRecord).is_ok());

        let err = roster.slot_for(0, &key(9), WagerError::InvalidKillRecord).unwrap_err();
        assert_eq!(err, WagerError::PlayerNotFound.into());

        // Seat 1 is inside the array but not occupied
        let err = roster.slot_for(1, &Pubkey::default(), WagerError::InvalidKillRecord).unwrap_err();
        assert_eq!(err, WagerError::InvalidKillRecord.into());
    }

    #[test]
    fn weight_adds_kills_and_spawns() {
        let slot = PlayerSlot {
            player: key(1),
            spawns_remaining: u16::MAX,
            kill_count: u16::MAX,
            spawn_purchases: 1,
        };
        assert_eq!(slot.weight(), 2 * u32::from(u16::MAX));
    }
}
