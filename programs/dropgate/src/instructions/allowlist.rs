use anchor_lang::prelude::*;

use crate::errors::DropGateError;
use crate::events::AllocationClaimed;
use crate::state::merkle::{verify_proof, AllocationLeaf};
use crate::state::{AllocationReceipt, AllowlistLedger};

#[derive(Accounts)]
pub struct InitializeAllowlistDrop<'info> {
    #[account(
        init,
        payer = authority,
        space = AllowlistLedger::SIZE,
        seeds = [AllowlistLedger::SEED],
        bump,
    )]
    pub ledger: Account<'info, AllowlistLedger>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<InitializeAllowlistDrop>, merkle_root: [u8; 32]) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    ledger.authority = ctx.accounts.authority.key();
    ledger.merkle_root = merkle_root;
    ledger.bump = ctx.bumps.ledger;

    msg!("DROPGATE: allowlist drop initialized");

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimAllocation<'info> {
    #[account(seeds = [AllowlistLedger::SEED], bump = ledger.bump)]
    pub ledger: Account<'info, AllowlistLedger>,

    #[account(
        init_if_needed,
        payer = claimer,
        space = AllocationReceipt::SIZE,
        seeds = [
            AllocationReceipt::SEED_PREFIX,
            ledger.key().as_ref(),
            claimer.key().as_ref(),
        ],
        bump,
    )]
    pub receipt: Account<'info, AllocationReceipt>,

    #[account(mut)]
    pub claimer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn claim(
    ctx: Context<ClaimAllocation>,
    allocation: u64,
    proof: Vec<[u8; 32]>,
    leaf_index: u32,
) -> Result<()> {
    let ledger = &ctx.accounts.ledger;
    let claimer = ctx.accounts.claimer.key();

    require!(allocation > 0, DropGateError::InvalidAmount);

    let receipt = &mut ctx.accounts.receipt;
    require!(receipt.amount == 0, DropGateError::PointsAlreadyClaimed);

    let leaf = AllocationLeaf {
        account: claimer,
        amount: allocation,
    }
    .digest()?;
    require!(
        verify_proof(&proof, &ledger.merkle_root, &leaf, leaf_index),
        DropGateError::InvalidProof
    );

    receipt.account = claimer;
    receipt.amount = allocation;
    receipt.bump = ctx.bumps.receipt;

    emit!(AllocationClaimed {
        account: claimer,
        amount: allocation,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct IsParticipating<'info> {
    #[account(seeds = [AllowlistLedger::SEED], bump = ledger.bump)]
    pub ledger: Account<'info, AllowlistLedger>,
}

/// Pure query: would a claim with these parameters validate against the
/// current root? Ignores whether the account has already claimed.
pub fn is_participating(
    ctx: Context<IsParticipating>,
    account: Pubkey,
    allocation: u64,
    proof: Vec<[u8; 32]>,
    leaf_index: u32,
) -> Result<bool> {
    let leaf = AllocationLeaf {
        account,
        amount: allocation,
    }
    .digest()?;
    Ok(verify_proof(
        &proof,
        &ctx.accounts.ledger.merkle_root,
        &leaf,
        leaf_index,
    ))
}
