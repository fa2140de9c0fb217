use anchor_lang::prelude::*;

use crate::constants::SPAWNS_PER_DEPOSIT;
use crate::errors::WagerError;
use crate::state::enums::TeamSide;
use crate::state::session::GameSession;

// ──────────────────────────────────────────────────────
// Settlement plans, computed before any token moves
//
// `payouts` are matched positionally against the caller's remaining
// accounts. `creator_amount` goes to the creator's token account on
// top of whatever the creator receives through `payouts`.
// ──────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Payout {
    pub recipient: Pubkey,
    pub amount: u64,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SettlementPlan {
    pub payouts: Vec<Payout>,
    pub creator_amount: u64,
    /// Pot the shares were cut from
    pub total: u64,
    /// Rounding residue of the share division
    pub leftover: u64,
}

impl SettlementPlan {
    pub fn paid_to_recipients(&self) -> Result<u64> {
        self.payouts
            .iter()
            .try_fold(0u64, |sum, payout| sum.checked_add(payout.amount))
            .ok_or(WagerError::WinningsCalculationError.into())
    }
}

impl GameSession {
    /// Splits the whole pot evenly across the winning roster in seat
    /// order; the division remainder goes to the creator.
    pub fn winner_takes_all_plan(&self, winning_team: TeamSide) -> Result<SettlementPlan> {
        let total_pot = self.total_pot()?;

        let winners = self.roster(winning_team).occupied();
        require!(!winners.is_empty(), WagerError::NoWinnersFound);

        let winner_count = winners.len() as u64;
        let per_share = total_pot
            .checked_div(winner_count)
            .ok_or(WagerError::WinningsCalculationError)?;
        let remainder = per_share
            .checked_mul(winner_count)
            .and_then(|paid| total_pot.checked_sub(paid))
            .ok_or(WagerError::WinningsCalculationError)?;

        Ok(SettlementPlan {
            payouts: winners
                .iter()
                .map(|slot| Payout {
                    recipient: slot.player,
                    amount: per_share,
                })
                .collect(),
            creator_amount: remainder,
            total: total_pot,
            leftover: remainder,
        })
    }

    /// Pays every seat with kills or spawns left in proportion to
    /// `kills + spawns`. The pool is quantized to whole deposits of
    /// activity; whatever the vault holds beyond the shares (leftover and
    /// quantization slack) is swept to the creator.
    pub fn pay_to_spawn_plan(&self, vault_balance: u64) -> Result<SettlementPlan> {
        let weight_sum: u64 = self.joined_slots().map(|slot| u64::from(slot.weight())).sum();

        let total_payable = (weight_sum / u64::from(SPAWNS_PER_DEPOSIT))
            .checked_mul(self.wager_per_player)
            .ok_or(WagerError::TotalPotCalculationError)?;

        let mut payouts = Vec::new();
        for slot in self.joined_slots().filter(|slot| slot.weight() > 0) {
            let share = u128::from(slot.weight())
                .checked_mul(u128::from(total_payable))
                .and_then(|n| n.checked_div(u128::from(weight_sum)))
                .and_then(|n| u64::try_from(n).ok())
                .ok_or(WagerError::WinningsCalculationError)?;

            payouts.push(Payout {
                recipient: slot.player,
                amount: share,
            });
        }

        let mut plan = SettlementPlan {
            payouts,
            creator_amount: 0,
            total: total_payable,
            leftover: 0,
        };

        let paid = plan.paid_to_recipients()?;
        plan.leftover = total_payable
            .checked_sub(paid)
            .ok_or(WagerError::WinningsCalculationError)?;
        plan.creator_amount = vault_balance
            .checked_sub(paid)
            .ok_or(WagerError::WinningsCalculationError)?;

        Ok(plan)
    }

    /// Returns every joined player's deposits, seat order, team A first
    pub fn refund_plan(&self) -> Result<Vec<Payout>> {
        self.joined_slots()
            .map(|slot| -> Result<Payout> {
                let amount = self
                    .wager_per_player
                    .checked_mul(u64::from(self.deposits(slot)))
                    .ok_or(WagerError::ArithmeticError)?;
                Ok(Payout {
                    recipient: slot.player,
                    amount,
                })
            })
            .collect()
    }

    /// Refunds every deposit; anything else the vault holds goes to the
    /// creator so the vault always drains to zero.
    pub fn refund_settlement(&self, vault_balance: u64) -> Result<SettlementPlan> {
        let payouts = self.refund_plan()?;
        let total = self.total_deposits()?;
        let creator_amount = vault_balance
            .checked_sub(total)
            .ok_or(WagerError::IncompleteDistribution)?;

        Ok(SettlementPlan {
            payouts,
            creator_amount,
            total,
            leftover: 0,
        })
    }

    /// Everything deposited into the vault so far
    pub fn total_deposits(&self) -> Result<u64> {
        self.refund_plan()?
            .iter()
            .try_fold(0u64, |sum, payout| sum.checked_add(payout.amount))
            .ok_or(WagerError::ArithmeticError.into())
    }
}
