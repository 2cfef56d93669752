use anchor_lang::prelude::*;

use crate::error::PresaleError;
use crate::state::{Presale, SalePhase};

/// Everything a buy will do, computed from one snapshot of the record and the
/// escrow balance. Committing applies exactly these numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseQuote {
    pub lamports_in: u64,
    pub tokens_out: u64,
    pub new_total_sold: u64,
    pub new_total_raised: u64,
}

/// Validates a buy and prices it. Does not touch the record.
pub fn quote(
    presale: &Presale,
    payment_amount: u64,
    now: i64,
    escrow_balance: u64,
) -> Result<PurchaseQuote> {
    match presale.phase(now) {
        SalePhase::Open => {}
        SalePhase::Paused => return err!(PresaleError::NotActive),
        SalePhase::Pending => return err!(PresaleError::NotStarted),
        SalePhase::Closed => return err!(PresaleError::Ended),
    }

    require!(
        payment_amount >= presale.min_purchase,
        PresaleError::BelowMinimum
    );
    require!(
        payment_amount <= presale.max_purchase,
        PresaleError::AboveMaximum
    );

    let tokens_out = allocation(payment_amount, presale.rate)?;
    require!(
        tokens_out <= escrow_balance,
        PresaleError::InsufficientInventory
    );

    let new_total_sold = presale
        .total_sold
        .checked_add(tokens_out)
        .ok_or(PresaleError::ArithmeticOverflow)?;
    let new_total_raised = presale
        .total_raised
        .checked_add(payment_amount)
        .ok_or(PresaleError::ArithmeticOverflow)?;

    Ok(PurchaseQuote {
        lamports_in: payment_amount,
        tokens_out,
        new_total_sold,
        new_total_raised,
    })
}

/// Token base units owed for `payment_amount` lamports.
pub fn allocation(payment_amount: u64, rate: u64) -> Result<u64> {
    payment_amount
        .checked_mul(rate)
        .ok_or_else(|| error!(PresaleError::ArithmeticOverflow))
}

pub fn commit(presale: &mut Presale, quote: &PurchaseQuote) {
    presale.total_sold = quote.new_total_sold;
    presale.total_raised = quote.new_total_raised;
}
