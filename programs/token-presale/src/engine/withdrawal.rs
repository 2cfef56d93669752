use anchor_lang::prelude::*;

use crate::error::PresaleError;
use crate::state::Presale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolWithdrawal {
    pub amount: u64,
    pub remaining: u64,
}

/// Resolves how many lamports leave the treasury. `None` takes the whole
/// balance. A partial withdrawal may not leave a non-zero balance under
/// `rent_floor`.
pub fn plan_sol(requested: Option<u64>, balance: u64, rent_floor: u64) -> Result<SolWithdrawal> {
    let amount = match requested {
        Some(amount) => {
            require!(amount <= balance, PresaleError::InsufficientTreasuryBalance);
            amount
        }
        None => balance,
    };

    let remaining = balance
        .checked_sub(amount)
        .ok_or(PresaleError::ArithmeticOverflow)?;
    require!(
        remaining == 0 || remaining >= rent_floor,
        PresaleError::TreasuryBelowRentExemption
    );

    Ok(SolWithdrawal { amount, remaining })
}

/// Unsold inventory can be reclaimed only once the window has closed. The
/// whole escrow balance moves; `total_sold` is left as is.
pub fn plan_unsold(presale: &Presale, now: i64, escrow_balance: u64) -> Result<u64> {
    require!(presale.has_ended(now), PresaleError::PresaleNotEnded);
    Ok(escrow_balance)
}
