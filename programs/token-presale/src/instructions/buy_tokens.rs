use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::PRESALE_SEED;
use crate::engine::purchase;
use crate::events::TokensPurchased;
use crate::guard;
use crate::state::Presale;

#[derive(Accounts)]
pub struct BuyTokens<'info> {
    #[account(
        mut,
        seeds = [PRESALE_SEED],
        bump = presale.bump,
    )]
    pub presale: Account<'info, Presale>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    /// CHECK: compared against presale.treasury in the handler
    #[account(mut)]
    pub treasury: UncheckedAccount<'info>,

    #[account(mut)]
    pub presale_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub buyer_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<BuyTokens>, amount_sol: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let presale = &ctx.accounts.presale;

    guard::require_treasury(presale, &ctx.accounts.treasury.key())?;
    guard::require_escrow(presale, &ctx.accounts.presale_token_account.key())?;
    guard::require_mint(presale, &ctx.accounts.token_mint.key())?;
    guard::require_token_destination(
        &ctx.accounts.buyer_token_account.mint,
        &ctx.accounts.buyer_token_account.owner,
        presale,
        &ctx.accounts.buyer.key(),
    )?;

    let quote = purchase::quote(
        presale,
        amount_sol,
        now,
        ctx.accounts.presale_token_account.amount,
    )?;

    // Payment: buyer -> treasury
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        quote.lamports_in,
    )?;

    // Allocation: escrow -> buyer, signed by the presale record
    let bump = presale.bump;
    let seeds = &[PRESALE_SEED, &[bump]];
    let signer = &[&seeds[..]];

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.presale_token_account.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.buyer_token_account.to_account_info(),
        authority: ctx.accounts.presale.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
    token_interface::transfer_checked(cpi_ctx, quote.tokens_out, ctx.accounts.token_mint.decimals)?;

    let presale = &mut ctx.accounts.presale;
    purchase::commit(presale, &quote);

    msg!(
        "Buy successful: {} tokens for {} lamports, total sold {}",
        quote.tokens_out,
        quote.lamports_in,
        presale.total_sold
    );
    emit!(TokensPurchased {
        buyer: ctx.accounts.buyer.key(),
        lamports_paid: quote.lamports_in,
        tokens_out: quote.tokens_out,
        total_sold: presale.total_sold,
        timestamp: now,
    });
    Ok(())
}
