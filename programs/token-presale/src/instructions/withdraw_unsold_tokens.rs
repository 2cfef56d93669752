use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::PRESALE_SEED;
use crate::engine::withdrawal;
use crate::events::UnsoldTokensWithdrawn;
use crate::guard;
use crate::state::Presale;

#[derive(Accounts)]
pub struct WithdrawUnsold<'info> {
    #[account(
        seeds = [PRESALE_SEED],
        bump = presale.bump,
    )]
    pub presale: Account<'info, Presale>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut)]
    pub presale_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<WithdrawUnsold>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let presale = &ctx.accounts.presale;

    // Window first: before the end this fails the same way for every caller.
    let amount = withdrawal::plan_unsold(presale, now, ctx.accounts.presale_token_account.amount)?;

    guard::require_admin(presale, &ctx.accounts.admin.key())?;
    guard::require_escrow(presale, &ctx.accounts.presale_token_account.key())?;
    guard::require_mint(presale, &ctx.accounts.token_mint.key())?;
    guard::require_token_destination(
        &ctx.accounts.admin_token_account.mint,
        &ctx.accounts.admin_token_account.owner,
        presale,
        &ctx.accounts.admin.key(),
    )?;

    if amount > 0 {
        let seeds = &[PRESALE_SEED, &[presale.bump]];
        let signer = &[&seeds[..]];

        let cpi_accounts = TransferChecked {
            from: ctx.accounts.presale_token_account.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            to: ctx.accounts.admin_token_account.to_account_info(),
            authority: presale.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);
        token_interface::transfer_checked(cpi_ctx, amount, ctx.accounts.token_mint.decimals)?;
    }

    msg!(
        "Withdrew {} unsold tokens to {}, total sold stays {}",
        amount,
        ctx.accounts.admin_token_account.key(),
        presale.total_sold
    );
    emit!(UnsoldTokensWithdrawn {
        admin: ctx.accounts.admin.key(),
        amount,
        timestamp: now,
    });
    Ok(())
}
