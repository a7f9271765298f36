use anchor_lang::prelude::*;

use crate::errors::DropGateError;
use crate::events::CurrencyClaimed;
use crate::state::message::{recover_signer, CurrencyMessage};
use crate::state::{CurrencyBalance, SignerLedger};

#[derive(Accounts)]
pub struct InitializeCurrencyDrop<'info> {
    #[account(
        init,
        payer = authority,
        space = SignerLedger::SIZE,
        seeds = [SignerLedger::CURRENCY_SEED],
        bump,
    )]
    pub ledger: Account<'info, SignerLedger>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(
    ctx: Context<InitializeCurrencyDrop>,
    backend_signer: [u8; 20],
    domain: u64,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    ledger.authority = ctx.accounts.authority.key();
    ledger.backend_signer = backend_signer;
    ledger.domain = domain;
    ledger.bump = ctx.bumps.ledger;

    msg!("DROPGATE: currency drop initialized, domain {}", domain);

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimCurrency<'info> {
    #[account(seeds = [SignerLedger::CURRENCY_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, SignerLedger>,

    #[account(
        init_if_needed,
        payer = claimer,
        space = CurrencyBalance::SIZE,
        seeds = [
            CurrencyBalance::SEED_PREFIX,
            ledger.key().as_ref(),
            claimer.key().as_ref(),
        ],
        bump,
    )]
    pub balance: Account<'info, CurrencyBalance>,

    #[account(mut)]
    pub claimer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn claim(
    ctx: Context<ClaimCurrency>,
    points: u64,
    coins: u64,
    signature: [u8; 64],
    recovery_id: u8,
) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    let claimer = ctx.accounts.claimer.key();
    let balance = &mut ctx.accounts.balance;

    verify_currency_claim(
        ledger,
        &claimer,
        points,
        coins,
        balance.nonce,
        &signature,
        recovery_id,
    )?;

    // The counter advances in the same transition that credits the claim;
    // the signature just consumed can never verify again.
    balance.account = claimer;
    balance.bump = ctx.bumps.balance;
    balance.nonce = balance.nonce.checked_add(1).ok_or(DropGateError::Overflow)?;
    balance.points = balance
        .points
        .checked_add(points)
        .ok_or(DropGateError::Overflow)?;
    balance.coins = balance
        .coins
        .checked_add(coins)
        .ok_or(DropGateError::Overflow)?;

    emit!(CurrencyClaimed {
        account: claimer,
        points,
        coins,
    });

    Ok(())
}

/// Stateless verification for a soft currency claim against the account's
/// current claim counter. A replayed signature fails here as
/// `InvalidSigner`: it was built over the previous counter value, so it no
/// longer recovers to the backend signer.
pub(crate) fn verify_currency_claim(
    ledger: &SignerLedger,
    claimer: &Pubkey,
    points: u64,
    coins: u64,
    nonce: u64,
    signature: &[u8; 64],
    recovery_id: u8,
) -> Result<[u8; 32]> {
    require!(points > 0, DropGateError::InvalidPoints);
    require!(coins > 0, DropGateError::InvalidCoins);

    let digest = CurrencyMessage {
        account: *claimer,
        points,
        coins,
        nonce,
        domain: ledger.domain,
    }
    .digest()?;
    let recovered =
        recover_signer(&digest, signature, recovery_id).ok_or(DropGateError::InvalidSigner)?;
    require!(
        recovered == ledger.backend_signer,
        DropGateError::InvalidSigner
    );

    Ok(digest)
}
