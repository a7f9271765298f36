use anchor_lang::prelude::*;

use crate::errors::DropGateError;
use crate::events::{AuthorityTransferred, BackendSignerChanged, MerkleRootUpdated};
use crate::state::{AllowlistLedger, SignerLedger};

/// Single-holder governance gate shared by every ledger variant.
pub(crate) fn require_authority(authority: &Pubkey, caller: &Pubkey) -> Result<()> {
    if authority != caller {
        msg!("DROPGATE: unauthorized governance call from {}", caller);
        return err!(DropGateError::Unauthorized);
    }
    Ok(())
}

#[derive(Accounts)]
pub struct SetBackendSigner<'info> {
    #[account(mut)]
    pub ledger: Account<'info, SignerLedger>,

    pub authority: Signer<'info>,
}

/// Rotate the backend signer of any signature ledger instance. Effective
/// immediately for every subsequent verification; settled replay records
/// are untouched.
pub fn set_backend_signer(ctx: Context<SetBackendSigner>, new_signer: [u8; 20]) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_authority(&ledger.authority, &ctx.accounts.authority.key())?;

    ledger.backend_signer = new_signer;

    emit!(BackendSignerChanged {
        ledger: ledger.key(),
        signer: new_signer,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetMerkleRoot<'info> {
    #[account(mut)]
    pub ledger: Account<'info, AllowlistLedger>,

    pub authority: Signer<'info>,
}

/// Rotate the allowlist root. The new value is trusted as-is.
pub fn set_merkle_root(ctx: Context<SetMerkleRoot>, new_root: [u8; 32]) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_authority(&ledger.authority, &ctx.accounts.authority.key())?;

    ledger.merkle_root = new_root;

    emit!(MerkleRootUpdated {
        ledger: ledger.key(),
        root: new_root,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferLedgerAuthority<'info> {
    #[account(mut)]
    pub ledger: Account<'info, SignerLedger>,

    pub authority: Signer<'info>,
}

pub fn transfer_ledger_authority(
    ctx: Context<TransferLedgerAuthority>,
    new_authority: Pubkey,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_authority(&ledger.authority, &ctx.accounts.authority.key())?;

    let previous_authority = ledger.authority;
    ledger.authority = new_authority;

    emit!(AuthorityTransferred {
        ledger: ledger.key(),
        previous_authority,
        new_authority,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferAllowlistAuthority<'info> {
    #[account(mut)]
    pub ledger: Account<'info, AllowlistLedger>,

    pub authority: Signer<'info>,
}

pub fn transfer_allowlist_authority(
    ctx: Context<TransferAllowlistAuthority>,
    new_authority: Pubkey,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    require_authority(&ledger.authority, &ctx.accounts.authority.key())?;

    let previous_authority = ledger.authority;
    ledger.authority = new_authority;

    emit!(AuthorityTransferred {
        ledger: ledger.key(),
        previous_authority,
        new_authority,
    });

    Ok(())
}
