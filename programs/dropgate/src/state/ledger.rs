use anchor_lang::prelude::*;

use crate::state::message::EthAddress;

/// Ledger configuration for a signature-authorized drop. One instance per
/// scheme, each at its own fixed seed; the deployer that initializes an
/// instance becomes its governance authority.
#[account]
pub struct SignerLedger {
    /// Governance role allowed to rotate the backend signer
    pub authority: Pubkey,
    /// Address the trusted backend signing key recovers to
    pub backend_signer: EthAddress,
    /// Domain identifier bound into every signed message for this deployment
    pub domain: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl SignerLedger {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // authority
        20 +                     // backend_signer
        8 +                      // domain
        1;                       // bump
    // Total: 69 bytes

    /// Fixed-key signed points instance
    pub const POINTS_SEED: &'static [u8] = b"points_drop";
    /// Flat-reward activity instance
    pub const ACTIVITY_SEED: &'static [u8] = b"activity_drop";
    /// Rolling-nonce soft currency instance
    pub const CURRENCY_SEED: &'static [u8] = b"currency_drop";
}

/// Ledger configuration for the merkle allowlist drop. The committed root is
/// the trust anchor; rotating it never touches settled receipts.
#[account]
pub struct AllowlistLedger {
    /// Governance role allowed to rotate the merkle root
    pub authority: Pubkey,
    /// Merkle root of the committed (account, allocation) tree
    pub merkle_root: [u8; 32],
    /// PDA bump seed
    pub bump: u8,
}

impl AllowlistLedger {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // authority
        32 +                     // merkle_root
        1;                       // bump
    // Total: 73 bytes

    pub const SEED: &'static [u8] = b"allowlist_drop";
}
