use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Global Config, a singleton PDA, initialized once by the bootstrap key
//
// Holds the server authority that cosigns joins and reports kills,
// settlements and refunds, plus the mint every wager is paid in.
// Every server-gated instruction re-derives this account from its seed.
// ──────────────────────────────────────────────────────

#[account]
pub struct GlobalConfig {
    /// The server authority, the only key trusted to report match results
    pub authority: Pubkey,

    /// The SPL mint all wagers are denominated in
    pub mint: Pubkey,

    /// PDA bump
    pub bump: u8,
}

impl GlobalConfig {
    pub const LEN: usize = 8   // discriminator
        + 32                    // authority
        + 32                    // mint
        + 1                     // bump
        + 32;                   // padding for future fields

    /// The PDA seed, only one config account per program
    pub const SEED: &'static [u8] = b"global_config";

    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.authority == *key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_fits_declared_len() {
        let config = GlobalConfig {
            authority: Pubkey::new_from_array([1; 32]),
            mint: Pubkey::new_from_array([2; 32]),
            bump: 255,
        };

        let mut bytes = Vec::new();
        config.serialize(&mut bytes).unwrap();

        assert!(8 + bytes.len() <= GlobalConfig::LEN);
    }

    #[test]
    fn only_current_authority_matches() {
        let server = Pubkey::new_from_array([7; 32]);
        let mut config = GlobalConfig {
            authority: server,
            mint: Pubkey::default(),
            bump: 0,
        };
        assert!(config.is_authority(&server));

        config.authority = Pubkey::new_from_array([8; 32]);
        assert!(!config.is_authority(&server));
    }
}
