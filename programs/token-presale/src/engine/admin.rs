use anchor_lang::prelude::*;

use crate::error::PresaleError;
use crate::state::Presale;

/// Sale parameters supplied by the admin at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresaleConfig {
    pub rate: u64,
    pub presale_start: i64,
    pub presale_end: i64,
    pub min_purchase: u64,
    pub max_purchase: u64,
}

impl PresaleConfig {
    /// `rent_floor` is the rent-exempt minimum of the lamport-only treasury.
    /// Every accepted payment must be able to bring an empty treasury up to it.
    pub fn validate(&self, rent_floor: u64) -> Result<()> {
        require!(
            self.presale_start < self.presale_end,
            PresaleError::InvalidWindow
        );
        require!(
            self.min_purchase > 0 && self.min_purchase <= self.max_purchase,
            PresaleError::InvalidBounds
        );
        require!(self.rate > 0, PresaleError::InvalidRate);
        require!(
            self.min_purchase >= rent_floor,
            PresaleError::MinPurchaseBelowRentExemption
        );
        Ok(())
    }
}

/// Accounts the record is bound to for its whole life.
#[derive(Clone, Copy, Debug)]
pub struct PresaleBindings {
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    pub treasury: Pubkey,
    pub presale_token_account: Pubkey,
    pub bump: u8,
    pub treasury_bump: u8,
}

pub fn initialize(
    presale: &mut Presale,
    config: PresaleConfig,
    bindings: PresaleBindings,
    rent_floor: u64,
) -> Result<()> {
    config.validate(rent_floor)?;

    presale.admin = bindings.admin;
    presale.token_mint = bindings.token_mint;
    presale.treasury = bindings.treasury;
    presale.presale_token_account = bindings.presale_token_account;
    presale.rate = config.rate;
    presale.presale_start = config.presale_start;
    presale.presale_end = config.presale_end;
    presale.min_purchase = config.min_purchase;
    presale.max_purchase = config.max_purchase;
    presale.total_sold = 0;
    presale.total_raised = 0;
    presale.is_active = true;
    presale.bump = bindings.bump;
    presale.treasury_bump = bindings.treasury_bump;
    Ok(())
}

/// Sets the activation flag and returns the previous value. The sale window is
/// not consulted; `buy` still checks it on its own.
pub fn set_active(presale: &mut Presale, is_active: bool) -> bool {
    let previous = presale.is_active;
    presale.is_active = is_active;
    previous
}
