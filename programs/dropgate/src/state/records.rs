use anchor_lang::prelude::*;

/// Member of the executed-message set for the fixed-key schemes.
/// Seeded by the message's diversifying fields under its ledger, so one
/// record exists per distinct authorized message. Settlement is monotonic:
/// `settled` is never cleared and the record is never closed.
#[account]
pub struct ExecutedMessage {
    /// Digest of the settled claim message
    pub message_hash: [u8; 32],
    /// Set at first settlement; a second claim against this record fails
    pub settled: bool,
    /// PDA bump seed
    pub bump: u8,
}

impl ExecutedMessage {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // message_hash
        1 +                      // settled
        1;                       // bump
    // Total: 42 bytes

    pub const SEED_PREFIX: &'static [u8] = b"executed";
}

/// Cumulative points credited to one account by a signed points scheme.
/// Seeds: [b"points_balance", ledger, account]
#[account]
pub struct PointsBalance {
    /// Account the points were credited to
    pub account: Pubkey,
    /// Cumulative points over all settled claims
    pub total: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl PointsBalance {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // account
        8 +                      // total
        1;                       // bump
    // Total: 49 bytes

    pub const SEED_PREFIX: &'static [u8] = b"points_balance";
}

/// Rolling claim counter plus cumulative totals for the soft currency
/// scheme. The counter is the replay record: it only ever increments, and
/// every signature verifies against its current value.
#[account]
pub struct CurrencyBalance {
    /// Account the currency was credited to
    pub account: Pubkey,
    /// Current claim counter; the next signature must be built over this
    pub nonce: u64,
    /// Cumulative points over all settled claims
    pub points: u64,
    /// Cumulative coins over all settled claims
    pub coins: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl CurrencyBalance {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // account
        8 +                      // nonce
        8 +                      // points
        8 +                      // coins
        1;                       // bump
    // Total: 65 bytes

    pub const SEED_PREFIX: &'static [u8] = b"currency_balance";
}

/// One-shot claim receipt for the allowlist drop. A zero amount means
/// unclaimed; committed allocations are always positive, so the stored
/// amount doubles as the claimed flag.
#[account]
pub struct AllocationReceipt {
    /// Account the allocation was claimed by
    pub account: Pubkey,
    /// Claimed allocation, zero until settlement
    pub amount: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl AllocationReceipt {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // account
        8 +                      // amount
        1;                       // bump
    // Total: 49 bytes

    pub const SEED_PREFIX: &'static [u8] = b"receipt";
}
