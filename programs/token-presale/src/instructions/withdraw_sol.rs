use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{PRESALE_SEED, TREASURY_SEED};
use crate::engine::withdrawal;
use crate::events::SolWithdrawn;
use crate::guard;
use crate::state::Presale;

#[derive(Accounts)]
pub struct WithdrawSol<'info> {
    #[account(
        seeds = [PRESALE_SEED],
        bump = presale.bump,
    )]
    pub presale: Account<'info, Presale>,

    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: compared against presale.treasury in the handler
    #[account(mut)]
    pub treasury: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawSol>, amount: Option<u64>) -> Result<()> {
    let presale = &ctx.accounts.presale;
    guard::require_admin(presale, &ctx.accounts.admin.key())?;
    guard::require_treasury(presale, &ctx.accounts.treasury.key())?;

    let treasury = &ctx.accounts.treasury;
    let rent_floor = Rent::get()?.minimum_balance(0);
    let plan = withdrawal::plan_sol(amount, treasury.to_account_info().lamports(), rent_floor)?;

    if plan.amount > 0 {
        let presale_key = presale.key();
        let seeds = &[
            TREASURY_SEED,
            presale_key.as_ref(),
            &[presale.treasury_bump],
        ];
        let signer = &[&seeds[..]];

        system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: treasury.to_account_info(),
                    to: ctx.accounts.admin.to_account_info(),
                },
                signer,
            ),
            plan.amount,
        )?;
    }

    msg!(
        "Withdrew {} lamports to {}, {} left in treasury",
        plan.amount,
        ctx.accounts.admin.key(),
        plan.remaining
    );
    emit!(SolWithdrawn {
        admin: ctx.accounts.admin.key(),
        amount: plan.amount,
        remaining: plan.remaining,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
