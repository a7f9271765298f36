use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use instructions::*;

declare_id!("4nj7urFf8EAAd3ufKQvKHpHLQ9oft2jBM1G56TAqCKkh");

#[program]
pub mod dropgate {
    use super::*;

    /// Create the fixed-key signed points ledger
    pub fn initialize_points_drop(
        ctx: Context<InitializePointsDrop>,
        backend_signer: [u8; 20],
        domain: u64,
    ) -> Result<()> {
        instructions::points::initialize(ctx, backend_signer, domain)
    }

    /// Claim a backend-authorized points grant; each signed message settles once
    pub fn claim_signed_points(
        ctx: Context<ClaimSignedPoints>,
        amount: u64,
        nonce: u64,
        domain: u64,
        signature: [u8; 64],
        recovery_id: u8,
    ) -> Result<()> {
        instructions::points::claim(ctx, amount, nonce, domain, signature, recovery_id)
    }

    /// Create the flat-reward activity drop ledger
    pub fn initialize_activity_drop(
        ctx: Context<InitializeActivityDrop>,
        backend_signer: [u8; 20],
        domain: u64,
    ) -> Result<()> {
        instructions::activity::initialize(ctx, backend_signer, domain)
    }

    /// Claim the fixed activity reward; each signed message settles once
    pub fn claim_activity_points(
        ctx: Context<ClaimActivityPoints>,
        nonce: u64,
        domain: u64,
        signature: [u8; 64],
        recovery_id: u8,
    ) -> Result<()> {
        instructions::activity::claim(ctx, nonce, domain, signature, recovery_id)
    }

    /// Create the rolling-nonce soft currency ledger
    pub fn initialize_currency_drop(
        ctx: Context<InitializeCurrencyDrop>,
        backend_signer: [u8; 20],
        domain: u64,
    ) -> Result<()> {
        instructions::currency::initialize(ctx, backend_signer, domain)
    }

    /// Claim soft currency signed over the account's current claim counter
    pub fn claim_currency(
        ctx: Context<ClaimCurrency>,
        points: u64,
        coins: u64,
        signature: [u8; 64],
        recovery_id: u8,
    ) -> Result<()> {
        instructions::currency::claim(ctx, points, coins, signature, recovery_id)
    }

    /// Create the merkle allowlist ledger with its committed root
    pub fn initialize_allowlist_drop(
        ctx: Context<InitializeAllowlistDrop>,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        instructions::allowlist::initialize(ctx, merkle_root)
    }

    /// Claim a committed allocation; one claim per account forever
    pub fn claim_allocation(
        ctx: Context<ClaimAllocation>,
        allocation: u64,
        proof: Vec<[u8; 32]>,
        leaf_index: u32,
    ) -> Result<()> {
        instructions::allowlist::claim(ctx, allocation, proof, leaf_index)
    }

    /// Check allowlist membership against the current root (read-only)
    pub fn is_participating(
        ctx: Context<IsParticipating>,
        account: Pubkey,
        allocation: u64,
        proof: Vec<[u8; 32]>,
        leaf_index: u32,
    ) -> Result<bool> {
        instructions::allowlist::is_participating(ctx, account, allocation, proof, leaf_index)
    }

    /// Rotate the backend signer of a signature ledger (authority only)
    pub fn set_backend_signer(ctx: Context<SetBackendSigner>, new_signer: [u8; 20]) -> Result<()> {
        instructions::governance::set_backend_signer(ctx, new_signer)
    }

    /// Rotate the allowlist merkle root (authority only)
    pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, new_root: [u8; 32]) -> Result<()> {
        instructions::governance::set_merkle_root(ctx, new_root)
    }

    /// Hand the signature ledger governance role to a new holder
    pub fn transfer_ledger_authority(
        ctx: Context<TransferLedgerAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::governance::transfer_ledger_authority(ctx, new_authority)
    }

    /// Hand the allowlist governance role to a new holder
    pub fn transfer_allowlist_authority(
        ctx: Context<TransferAllowlistAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::governance::transfer_allowlist_authority(ctx, new_authority)
    }
}
