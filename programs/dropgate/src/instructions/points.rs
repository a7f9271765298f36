use anchor_lang::prelude::*;

use crate::errors::DropGateError;
use crate::events::PointsClaimed;
use crate::state::message::{recover_signer, SignedPointsMessage};
use crate::state::{ExecutedMessage, PointsBalance, SignerLedger};

#[derive(Accounts)]
pub struct InitializePointsDrop<'info> {
    #[account(
        init,
        payer = authority,
        space = SignerLedger::SIZE,
        seeds = [SignerLedger::POINTS_SEED],
        bump,
    )]
    pub ledger: Account<'info, SignerLedger>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(
    ctx: Context<InitializePointsDrop>,
    backend_signer: [u8; 20],
    domain: u64,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    ledger.authority = ctx.accounts.authority.key();
    ledger.backend_signer = backend_signer;
    ledger.domain = domain;
    ledger.bump = ctx.bumps.ledger;

    msg!("DROPGATE: points drop initialized, domain {}", domain);

    Ok(())
}

#[derive(Accounts)]
#[instruction(amount: u64, nonce: u64)]
pub struct ClaimSignedPoints<'info> {
    #[account(seeds = [SignerLedger::POINTS_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, SignerLedger>,

    /// Executed-message set entry for this exact grant. Existence with
    /// `settled` set means the message can never settle again.
    #[account(
        init_if_needed,
        payer = claimer,
        space = ExecutedMessage::SIZE,
        seeds = [
            ExecutedMessage::SEED_PREFIX,
            ledger.key().as_ref(),
            claimer.key().as_ref(),
            amount.to_le_bytes().as_ref(),
            nonce.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub executed: Account<'info, ExecutedMessage>,

    #[account(
        init_if_needed,
        payer = claimer,
        space = PointsBalance::SIZE,
        seeds = [
            PointsBalance::SEED_PREFIX,
            ledger.key().as_ref(),
            claimer.key().as_ref(),
        ],
        bump,
    )]
    pub balance: Account<'info, PointsBalance>,

    #[account(mut)]
    pub claimer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn claim(
    ctx: Context<ClaimSignedPoints>,
    amount: u64,
    nonce: u64,
    domain: u64,
    signature: [u8; 64],
    recovery_id: u8,
) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    let claimer = ctx.accounts.claimer.key();

    let digest =
        verify_points_claim(ledger, &claimer, amount, nonce, domain, &signature, recovery_id)?;

    let executed = &mut ctx.accounts.executed;
    require!(!executed.settled, DropGateError::AlreadyExecuted);
    executed.message_hash = digest;
    executed.settled = true;
    executed.bump = ctx.bumps.executed;

    let balance = &mut ctx.accounts.balance;
    balance.account = claimer;
    balance.bump = ctx.bumps.balance;
    balance.total = balance
        .total
        .checked_add(amount)
        .ok_or(DropGateError::Overflow)?;

    emit!(PointsClaimed { account: claimer, amount });

    Ok(())
}

/// Stateless verification for a signed points claim: recompute the canonical
/// digest and require it to recover to the active backend signer. Returns
/// the digest recorded on settlement.
pub(crate) fn verify_points_claim(
    ledger: &SignerLedger,
    claimer: &Pubkey,
    amount: u64,
    nonce: u64,
    domain: u64,
    signature: &[u8; 64],
    recovery_id: u8,
) -> Result<[u8; 32]> {
    require!(amount > 0, DropGateError::InvalidAmount);
    require!(domain == ledger.domain, DropGateError::DomainMismatch);

    let digest = SignedPointsMessage {
        account: *claimer,
        amount,
        nonce,
        domain,
    }
    .digest()?;
    let recovered =
        recover_signer(&digest, signature, recovery_id).ok_or(DropGateError::InvalidSignature)?;
    require!(
        recovered == ledger.backend_signer,
        DropGateError::InvalidSignature
    );

    Ok(digest)
}
