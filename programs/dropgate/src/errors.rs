use anchor_lang::prelude::*;

#[error_code]
pub enum DropGateError {
    #[msg("Signature does not recover to the backend signer")]
    InvalidSignature,
    #[msg("Signer does not match the backend signer")]
    InvalidSigner,
    #[msg("Invalid merkle proof")]
    InvalidProof,
    #[msg("Message domain does not match this deployment")]
    DomainMismatch,
    #[msg("Message already executed")]
    AlreadyExecuted,
    #[msg("Points already claimed")]
    PointsAlreadyClaimed,
    #[msg("Claim amount must be positive")]
    InvalidAmount,
    #[msg("Points amount must be positive")]
    InvalidPoints,
    #[msg("Coins amount must be positive")]
    InvalidCoins,
    #[msg("Caller is not the ledger authority")]
    Unauthorized,
    #[msg("Arithmetic overflow")]
    Overflow,
}
