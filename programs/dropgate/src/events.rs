use anchor_lang::prelude::*;

/// Settlement event for the fixed-key signed points scheme.
#[event]
pub struct PointsClaimed {
    pub account: Pubkey,
    pub amount: u64,
}

/// Settlement event for the flat-reward activity drop.
#[event]
pub struct ActivityPointsClaimed {
    pub account: Pubkey,
    pub amount: u64,
}

/// Settlement event for the rolling-nonce soft currency scheme.
#[event]
pub struct CurrencyClaimed {
    pub account: Pubkey,
    pub points: u64,
    pub coins: u64,
}

/// Settlement event for the merkle allowlist scheme.
#[event]
pub struct AllocationClaimed {
    pub account: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BackendSignerChanged {
    pub ledger: Pubkey,
    pub signer: [u8; 20],
}

#[event]
pub struct MerkleRootUpdated {
    pub ledger: Pubkey,
    pub root: [u8; 32],
}

#[event]
pub struct AuthorityTransferred {
    pub ledger: Pubkey,
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
}
