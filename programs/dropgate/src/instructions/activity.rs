use anchor_lang::prelude::*;

use crate::errors::DropGateError;
use crate::events::ActivityPointsClaimed;
use crate::state::message::{recover_signer, ActivityMessage};
use crate::state::{ExecutedMessage, PointsBalance, SignerLedger};

/// Flat per-claim reward for the activity drop.
#[constant]
pub const ACTIVITY_POINTS_PER_CLAIM: u64 = 10;

#[derive(Accounts)]
pub struct InitializeActivityDrop<'info> {
    #[account(
        init,
        payer = authority,
        space = SignerLedger::SIZE,
        seeds = [SignerLedger::ACTIVITY_SEED],
        bump,
    )]
    pub ledger: Account<'info, SignerLedger>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(
    ctx: Context<InitializeActivityDrop>,
    backend_signer: [u8; 20],
    domain: u64,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    ledger.authority = ctx.accounts.authority.key();
    ledger.backend_signer = backend_signer;
    ledger.domain = domain;
    ledger.bump = ctx.bumps.ledger;

    msg!("DROPGATE: activity drop initialized, domain {}", domain);

    Ok(())
}

#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct ClaimActivityPoints<'info> {
    #[account(seeds = [SignerLedger::ACTIVITY_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, SignerLedger>,

    #[account(
        init_if_needed,
        payer = claimer,
        space = ExecutedMessage::SIZE,
        seeds = [
            ExecutedMessage::SEED_PREFIX,
            ledger.key().as_ref(),
            claimer.key().as_ref(),
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
    ctx: Context<ClaimActivityPoints>,
    nonce: u64,
    domain: u64,
    signature: [u8; 64],
    recovery_id: u8,
) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    let claimer = ctx.accounts.claimer.key();

    let digest = verify_activity_claim(ledger, &claimer, nonce, domain, &signature, recovery_id)?;

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
        .checked_add(ACTIVITY_POINTS_PER_CLAIM)
        .ok_or(DropGateError::Overflow)?;

    emit!(ActivityPointsClaimed {
        account: claimer,
        amount: ACTIVITY_POINTS_PER_CLAIM,
    });

    Ok(())
}

/// Stateless verification for a flat-reward claim. The message carries no
/// amount; the reward is the program constant.
pub(crate) fn verify_activity_claim(
    ledger: &SignerLedger,
    claimer: &Pubkey,
    nonce: u64,
    domain: u64,
    signature: &[u8; 64],
    recovery_id: u8,
) -> Result<[u8; 32]> {
    require!(domain == ledger.domain, DropGateError::DomainMismatch);

    let digest = ActivityMessage {
        account: *claimer,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::message::testing::{keypair, sign};

    fn ledger_with(signer: [u8; 20]) -> SignerLedger {
        SignerLedger {
            authority: Pubkey::new_unique(),
            backend_signer: signer,
            domain: 31337,
            bump: 255,
        }
    }

    #[test]
    fn test_valid_claim_verifies() {
        let (sk, signer) = keypair(3);
        let ledger = ledger_with(signer);
        let claimer = Pubkey::new_unique();

        let digest = ActivityMessage { account: claimer, nonce: 1, domain: 31337 }
            .digest()
            .unwrap();
        let (signature, recovery_id) = sign(&sk, &digest);

        let verified =
            verify_activity_claim(&ledger, &claimer, 1, 31337, &signature, recovery_id).unwrap();
        assert_eq!(verified, digest);
    }

    #[test]
    fn test_rejects_signature_from_other_key() {
        let (_, signer) = keypair(3);
        let (other_sk, _) = keypair(4);
        let ledger = ledger_with(signer);
        let claimer = Pubkey::new_unique();

        let digest = ActivityMessage { account: claimer, nonce: 1, domain: 31337 }
            .digest()
            .unwrap();
        let (signature, recovery_id) = sign(&other_sk, &digest);

        let err = verify_activity_claim(&ledger, &claimer, 1, 31337, &signature, recovery_id)
            .unwrap_err();
        assert_eq!(err, DropGateError::InvalidSignature.into());
    }

    #[test]
    fn test_rejects_foreign_domain() {
        let (sk, signer) = keypair(3);
        let ledger = ledger_with(signer);
        let claimer = Pubkey::new_unique();

        let digest = ActivityMessage { account: claimer, nonce: 1, domain: 1 }
            .digest()
            .unwrap();
        let (signature, recovery_id) = sign(&sk, &digest);

        let err =
            verify_activity_claim(&ledger, &claimer, 1, 1, &signature, recovery_id).unwrap_err();
        assert_eq!(err, DropGateError::DomainMismatch.into());
    }

    #[test]
    fn test_grant_is_not_transferable_between_accounts() {
        // A signature issued for one account must not verify for another.
        let (sk, signer) = keypair(3);
        let ledger = ledger_with(signer);
        let claimer = Pubkey::new_unique();
        let thief = Pubkey::new_unique();

        let digest = ActivityMessage { account: claimer, nonce: 1, domain: 31337 }
            .digest()
            .unwrap();
        let (signature, recovery_id) = sign(&sk, &digest);

        let err = verify_activity_claim(&ledger, &thief, 1, 31337, &signature, recovery_id)
            .unwrap_err();
        assert_eq!(err, DropGateError::InvalidSignature.into());
    }
}
