use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::WagerError;
use crate::events::{PayToSpawnWinningsDistributed, WinningsDistributed};
use crate::instructions::vault::{self, VaultPayer};
use crate::state::config::GlobalConfig;
use crate::state::enums::*;
use crate::state::session::GameSession;
use crate::state::settlement::SettlementPlan;

// ──────────────────────────────────────────────────────
// Distribute Winnings, server only, match must be running
//
// Remaining accounts are the payout token accounts, in the order
// the plan lists recipients. The creator's token account is passed
// separately and receives the remainder. The vault must end at zero;
// it is then closed, and the session is closed, rent to the creator.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct DistributeWinnings<'info> {
    #[account(
        constraint = global_config.is_authority(&server.key()) @ WagerError::UnauthorizedDistribution,
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
        constraint = game_session.status == GameStatus::InProgress @ WagerError::GameNotInProgress,
    )]
    pub game_session: Box<Account<'info, GameSession>>,

    /// CHECK: The session creator, receives the remainder and all rent
    #[account(
        mut,
        constraint = creator.key() == *game_session.creator() @ WagerError::InvalidCreatorAccount,
    )]
    pub creator: UncheckedAccount<'info>,

    /// Required whenever the creator is owed a remainder
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

impl<'info> DistributeWinnings<'info> {
    fn vault_payer(&self) -> VaultPayer<'info> {
        VaultPayer {
            token_program: self.token_program.to_account_info(),
            vault_token_account: self.vault_token_account.to_account_info(),
            vault: self.vault.to_account_info(),
        }
    }

    /// Pays out `plan`, checks the vault is empty and closes it
    fn settle(
        &mut self,
        remaining_accounts: &'info [AccountInfo<'info>],
        plan: &SettlementPlan,
    ) -> Result<()> {
        let mint = self.game_session.mint;
        let creator = self.creator.key();

        // ── Validate every destination before moving anything ──
        let destinations = vault::load_destinations(
            remaining_accounts,
            &plan.payouts,
            &mint,
            WagerError::InvalidWinnerTokenAccount,
        )?;
        vault::check_creator_destination(self.creator_token_account.as_ref(), &creator, &mint)?;
        vault::require_creator_destination(
            self.creator_token_account.is_some(),
            plan.creator_amount,
        )?;

        let session_id = self.game_session.session_id.clone();
        let seeds = &[
            GameSession::VAULT_SEED,
            session_id.as_bytes(),
            &[self.game_session.vault_bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let payer = self.vault_payer();
        payer.pay_all(
            &destinations,
            &plan.payouts,
            self.creator_token_account.as_ref(),
            plan.creator_amount,
            signer_seeds,
        )?;

        self.vault_token_account.reload()?;
        require!(
            self.vault_token_account.amount == 0,
            WagerError::IncompleteDistribution
        );
        payer.close(self.creator.to_account_info(), signer_seeds)?;

        self.game_session.status = GameStatus::Completed;
        Ok(())
    }
}

pub fn winner_takes_all_handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeWinnings<'info>>,
    winning_team: TeamSide,
) -> Result<()> {
    let game_session = &ctx.accounts.game_session;
    require!(!game_session.is_pay_to_spawn(), WagerError::InvalidGameState);

    msg!(
        "Distributing session {} to {:?}",
        game_session.session_id,
        winning_team
    );

    let plan = game_session.winner_takes_all_plan(winning_team)?;
    let per_winner = plan.payouts.first().map_or(0, |payout| payout.amount);

    ctx.accounts.settle(ctx.remaining_accounts, &plan)?;

    emit!(WinningsDistributed {
        session: ctx.accounts.game_session.key(),
        winning_team,
        total_pot: plan.total,
        per_winner,
        remainder: plan.leftover,
        distributed_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn pay_to_spawn_handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeWinnings<'info>>,
) -> Result<()> {
    let game_session = &ctx.accounts.game_session;
    require!(game_session.is_pay_to_spawn(), WagerError::InvalidGameState);

    msg!("Starting pay-to-spawn distribution for session {}", game_session.session_id);

    let plan = game_session.pay_to_spawn_plan(ctx.accounts.vault_token_account.amount)?;

    msg!(
        "Total payable: {}, leftover: {}, creator sweep: {}",
        plan.total,
        plan.leftover,
        plan.creator_amount
    );

    ctx.accounts.settle(ctx.remaining_accounts, &plan)?;

    emit!(PayToSpawnWinningsDistributed {
        session: ctx.accounts.game_session.key(),
        total_payable: plan.total,
        leftover: plan.leftover,
        creator_sweep: plan.creator_amount,
        recipients: plan.payouts.len() as u8,
        distributed_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
