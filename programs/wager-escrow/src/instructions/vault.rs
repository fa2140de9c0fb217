use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, TokenAccount, Transfer};

use crate::errors::WagerError;
use crate::state::settlement::Payout;

// ──────────────────────────────────────────────────────
// Vault plumbing shared by every instruction that moves tokens
//
// Deposits are signed by the player. Payouts and the final close are
// signed by the ["vault", session_id] PDA that owns the vault ATA.
// ──────────────────────────────────────────────────────

/// Moves `amount` from a player's token account into the session vault
pub fn deposit<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    vault_token_account: AccountInfo<'info>,
    player: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let transfer_ctx = CpiContext::new(
        token_program,
        Transfer {
            from,
            to: vault_token_account,
            authority: player,
        },
    );
    token::transfer(transfer_ctx, amount)
}

pub struct VaultPayer<'info> {
    pub token_program: AccountInfo<'info>,
    pub vault_token_account: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
}

impl<'info> VaultPayer<'info> {
    pub fn pay(&self, to: AccountInfo<'info>, amount: u64, signer_seeds: &[&[&[u8]]]) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        let transfer_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            Transfer {
                from: self.vault_token_account.clone(),
                to,
                authority: self.vault.clone(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, amount)
    }

    /// Closes the drained vault ATA, rent goes to `destination`
    pub fn close(&self, destination: AccountInfo<'info>, signer_seeds: &[&[&[u8]]]) -> Result<()> {
        let close_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            CloseAccount {
                account: self.vault_token_account.clone(),
                destination,
                authority: self.vault.clone(),
            },
            signer_seeds,
        );
        token::close_account(close_ctx)
    }

    /// Pays every planned recipient, then the creator's cut
    pub fn pay_all(
        &self,
        destinations: &[Account<'info, TokenAccount>],
        payouts: &[Payout],
        creator_destination: Option<&Account<'info, TokenAccount>>,
        creator_amount: u64,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        for (destination, payout) in destinations.iter().zip(payouts) {
            msg!("Paying {} to {}", payout.amount, payout.recipient);
            self.pay(destination.to_account_info(), payout.amount, signer_seeds)?;
        }

        require_creator_destination(creator_destination.is_some(), creator_amount)?;
        if let Some(creator_destination) = creator_destination.filter(|_| creator_amount > 0) {
            msg!("Sweeping {} to creator", creator_amount);
            self.pay(creator_destination.to_account_info(), creator_amount, signer_seeds)?;
        }

        Ok(())
    }
}

/// Checks a destination token account against the wallet it should pay
pub fn check_destination(
    owner: &Pubkey,
    mint: &Pubkey,
    expected_owner: &Pubkey,
    expected_mint: &Pubkey,
    wrong_owner: WagerError,
) -> Result<()> {
    require_keys_eq!(*owner, *expected_owner, wrong_owner);
    require_keys_eq!(*mint, *expected_mint, WagerError::InvalidTokenMint);
    Ok(())
}

/// Deserializes the remaining accounts and matches them 1:1, in order,
/// against `payouts`. Everything is checked before the first transfer.
pub fn load_destinations<'info>(
    remaining_accounts: &'info [AccountInfo<'info>],
    payouts: &[Payout],
    mint: &Pubkey,
    wrong_owner: WagerError,
) -> Result<Vec<Account<'info, TokenAccount>>> {
    require_eq!(
        remaining_accounts.len(),
        payouts.len(),
        WagerError::InvalidRemainingAccounts
    );

    remaining_accounts
        .iter()
        .zip(payouts)
        .map(|(info, payout)| -> Result<Account<'info, TokenAccount>> {
            let destination: Account<'info, TokenAccount> = Account::try_from(info)?;
            check_destination(
                &destination.owner,
                &destination.mint,
                &payout.recipient,
                mint,
                wrong_owner,
            )?;
            Ok(destination)
        })
        .collect()
}

/// Validates the optional creator token account passed to a settlement
pub fn check_creator_destination(
    creator_token_account: Option<&Account<'_, TokenAccount>>,
    creator: &Pubkey,
    mint: &Pubkey,
) -> Result<()> {
    if let Some(account) = creator_token_account {
        check_destination(
            &account.owner,
            &account.mint,
            creator,
            mint,
            WagerError::InvalidCreatorTokenAccount,
        )?;
    }
    Ok(())
}

/// The creator's token account may be omitted only when nothing is owed
pub fn require_creator_destination(provided: bool, creator_amount: u64) -> Result<()> {
    require!(
        provided || creator_amount == 0,
        WagerError::CreatorTokenAccountNotProvided
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn destination_must_belong_to_recipient() {
        let err = check_destination(&key(2), &key(9), &key(1), &key(9), WagerError::InvalidWinnerTokenAccount)
            .unwrap_err();
        assert_eq!(err, WagerError::InvalidWinnerTokenAccount.into());

        let err = check_destination(&key(2), &key(9), &key(1), &key(9), WagerError::InvalidPlayerTokenAccount)
            .unwrap_err();
        assert_eq!(err, WagerError::InvalidPlayerTokenAccount.into());
    }

    #[test]
    fn destination_must_hold_session_mint() {
        let err = check_destination(&key(1), &key(8), &key(1), &key(9), WagerError::InvalidWinnerTokenAccount)
            .unwrap_err();
        assert_eq!(err, WagerError::InvalidTokenMint.into());

        assert!(check_destination(&key(1), &key(9), &key(1), &key(9), WagerError::InvalidWinnerTokenAccount).is_ok());
    }

    #[test]
    fn missing_creator_destination_is_allowed_until_needed() {
        assert!(check_creator_destination(None, &key(1), &key(9)).is_ok());
        assert!(require_creator_destination(false, 0).is_ok());
        assert!(require_creator_destination(true, 5).is_ok());

        let err = require_creator_destination(false, 1).unwrap_err();
        assert_eq!(err, WagerError::CreatorTokenAccountNotProvided.into());
    }

    #[test]
    fn omitted_destination_fails_before_any_transfer() {
        let payouts = [
            Payout { recipient: key(1), amount: 100 },
            Payout { recipient: key(2), amount: 100 },
        ];

        let err = load_destinations(&[], &payouts, &key(9), WagerError::InvalidPlayerTokenAccount)
            .unwrap_err();
        assert_eq!(err, WagerError::InvalidRemainingAccounts.into());
    }

    #[test]
    fn nothing_owed_needs_no_destinations() {
        let destinations = load_destinations(&[], &[], &key(9), WagerError::InvalidWinnerTokenAccount).unwrap();
        assert!(destinations.is_empty());
    }
}
