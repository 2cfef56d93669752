use anchor_lang::prelude::*;

use crate::constants::{PRESALE_SEED, TREASURY_SEED};

#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Presale {
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    pub treasury: Pubkey,              // Lamport vault PDA receiving payments
    pub presale_token_account: Pubkey, // Escrow whose token authority is this record
    pub rate: u64,                     // Base token units per lamport
    pub presale_start: i64,
    pub presale_end: i64,
    pub min_purchase: u64,
    pub max_purchase: u64,
    pub total_sold: u64,
    pub total_raised: u64,
    pub is_active: bool,
    pub bump: u8,
    pub treasury_bump: u8,
}

impl Presale {
    pub const LEN: usize = 32 + 32 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 8 + 8 + 1 + 1 + 1;
    // admin + mint + treasury + escrow + rate + start + end + min + max + sold + raised + is_active + bump + treasury_bump

    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[PRESALE_SEED], &crate::ID)
    }

    pub fn treasury_pda(presale: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[TREASURY_SEED, presale.as_ref()], &crate::ID)
    }

    /// Where `now` falls relative to the sale window, ignoring the activation flag.
    pub fn window_status(&self, now: i64) -> WindowStatus {
        if now < self.presale_start {
            WindowStatus::BeforeStart
        } else if now > self.presale_end {
            WindowStatus::AfterEnd
        } else {
            WindowStatus::Within
        }
    }

    /// Combined purchasing phase. The activation flag is checked first, so a
    /// paused sale reports `Paused` even outside its window.
    pub fn phase(&self, now: i64) -> SalePhase {
        if !self.is_active {
            return SalePhase::Paused;
        }
        match self.window_status(now) {
            WindowStatus::BeforeStart => SalePhase::Pending,
            WindowStatus::Within => SalePhase::Open,
            WindowStatus::AfterEnd => SalePhase::Closed,
        }
    }

    pub fn has_ended(&self, now: i64) -> bool {
        now > self.presale_end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowStatus {
    BeforeStart,
    Within,
    AfterEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalePhase {
    Pending,
    Open,
    Paused,
    Closed,
}
