use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod guard;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use engine::PresaleConfig;
pub use error::PresaleError;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("3gRbrfhqsNnXG7QpbEDPuQBbRr59D733DfhCXVxSWanp");

#[program]
pub mod token_presale {
    use super::*;

    // Create the presale record bound to its mint, treasury and escrow
    pub fn initialize(
        ctx: Context<Initialize>,
        rate: u64,
        presale_start: i64,
        presale_end: i64,
        min_purchase: u64,
        max_purchase: u64,
    ) -> Result<()> {
        let config = PresaleConfig {
            rate,
            presale_start,
            presale_end,
            min_purchase,
            max_purchase,
        };
        instructions::initialize::handler(ctx, config)
    }

    // Pay `amount_sol` lamports into the treasury for `amount_sol * rate` tokens
    pub fn buy_tokens(ctx: Context<BuyTokens>, amount_sol: u64) -> Result<()> {
        instructions::buy_tokens::handler(ctx, amount_sol)
    }

    // Pause or resume purchasing without touching the sale window
    pub fn toggle_presale(ctx: Context<TogglePresale>, is_active: bool) -> Result<()> {
        instructions::toggle_presale::handler(ctx, is_active)
    }

    // Move treasury lamports to the admin, everything when `amount` is None
    pub fn withdraw_sol(ctx: Context<WithdrawSol>, amount: Option<u64>) -> Result<()> {
        instructions::withdraw_sol::handler(ctx, amount)
    }

    // Reclaim the remaining escrow inventory once the sale window has closed
    pub fn withdraw_unsold_tokens(ctx: Context<WithdrawUnsold>) -> Result<()> {
        instructions::withdraw_unsold_tokens::handler(ctx)
    }
}
