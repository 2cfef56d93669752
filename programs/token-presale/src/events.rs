use anchor_lang::prelude::*;

#[event]
pub struct PresaleInitialized {
    pub presale: Pubkey,
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    pub rate: u64,
    pub presale_start: i64,
    pub presale_end: i64,
}

#[event]
pub struct TokensPurchased {
    pub buyer: Pubkey,
    pub lamports_paid: u64,
    pub tokens_out: u64,
    pub total_sold: u64,
    pub timestamp: i64,
}

#[event]
pub struct PresaleToggled {
    pub is_active: bool,
    pub timestamp: i64,
}

#[event]
pub struct SolWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
    pub remaining: u64,
    pub timestamp: i64,
}

#[event]
pub struct UnsoldTokensWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
