use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{PRESALE_SEED, TREASURY_SEED};
use crate::engine::{admin, PresaleBindings, PresaleConfig};
use crate::error::PresaleError;
use crate::events::PresaleInitialized;
use crate::guard;
use crate::state::Presale;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Presale::LEN,
        seeds = [PRESALE_SEED],
        bump
    )]
    pub presale: Account<'info, Presale>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mint::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: lamport-only vault, address pinned by seeds
    #[account(
        seeds = [TREASURY_SEED, presale.key().as_ref()],
        bump
    )]
    pub treasury: UncheckedAccount<'info>,

    #[account(
        constraint = presale_token_account.mint == token_mint.key() @ PresaleError::InvalidTokenAccount,
        token::token_program = token_program,
    )]
    pub presale_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, config: PresaleConfig) -> Result<()> {
    let presale_key = ctx.accounts.presale.key();
    guard::require_record_authority(&ctx.accounts.presale_token_account.owner, &presale_key)?;

    let bindings = PresaleBindings {
        admin: ctx.accounts.admin.key(),
        token_mint: ctx.accounts.token_mint.key(),
        treasury: ctx.accounts.treasury.key(),
        presale_token_account: ctx.accounts.presale_token_account.key(),
        bump: ctx.bumps.presale,
        treasury_bump: ctx.bumps.treasury,
    };
    let rent_floor = Rent::get()?.minimum_balance(0);
    admin::initialize(&mut ctx.accounts.presale, config, bindings, rent_floor)?;

    msg!(
        "Presale initialized by {}: rate {}, window {}..{}, bounds {}..={}",
        bindings.admin,
        config.rate,
        config.presale_start,
        config.presale_end,
        config.min_purchase,
        config.max_purchase
    );
    emit!(PresaleInitialized {
        presale: presale_key,
        admin: bindings.admin,
        token_mint: bindings.token_mint,
        rate: config.rate,
        presale_start: config.presale_start,
        presale_end: config.presale_end,
    });
    Ok(())
}
