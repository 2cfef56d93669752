//! Identity checks for privileged instructions and funds-moving accounts.
//!
//! Signatures are verified by the runtime through `Signer<'info>`; these
//! helpers only compare the claimed key with the one stored on the record.

use anchor_lang::prelude::*;

use crate::error::PresaleError;
use crate::state::Presale;

pub fn require_admin(presale: &Presale, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(presale.admin, *caller, PresaleError::Unauthorized);
    Ok(())
}

pub fn require_treasury(presale: &Presale, account: &Pubkey) -> Result<()> {
    require_keys_eq!(presale.treasury, *account, PresaleError::Unauthorized);
    Ok(())
}

pub fn require_escrow(presale: &Presale, account: &Pubkey) -> Result<()> {
    require_keys_eq!(
        presale.presale_token_account,
        *account,
        PresaleError::Unauthorized
    );
    Ok(())
}

pub fn require_mint(presale: &Presale, mint: &Pubkey) -> Result<()> {
    require_keys_eq!(presale.token_mint, *mint, PresaleError::InvalidTokenAccount);
    Ok(())
}

/// The escrow may only be spent by the presale record's own derived address,
/// never by a personal key.
pub fn require_record_authority(token_authority: &Pubkey, record: &Pubkey) -> Result<()> {
    require_keys_eq!(*token_authority, *record, PresaleError::Unauthorized);
    Ok(())
}

/// A destination token account must hold the sale mint and belong to `owner`.
pub fn require_token_destination(
    account_mint: &Pubkey,
    account_owner: &Pubkey,
    presale: &Presale,
    owner: &Pubkey,
) -> Result<()> {
    require_keys_eq!(*account_mint, presale.token_mint, PresaleError::InvalidTokenAccount);
    require_keys_eq!(*account_owner, *owner, PresaleError::InvalidTokenAccount);
    Ok(())
}
