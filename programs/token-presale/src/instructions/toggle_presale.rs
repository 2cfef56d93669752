use anchor_lang::prelude::*;

use crate::constants::PRESALE_SEED;
use crate::engine::admin;
use crate::events::PresaleToggled;
use crate::guard;
use crate::state::Presale;

#[derive(Accounts)]
pub struct TogglePresale<'info> {
    #[account(
        mut,
        seeds = [PRESALE_SEED],
        bump = presale.bump,
    )]
    pub presale: Account<'info, Presale>,

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<TogglePresale>, is_active: bool) -> Result<()> {
    let presale = &mut ctx.accounts.presale;
    guard::require_admin(presale, &ctx.accounts.admin.key())?;

    let previous = admin::set_active(presale, is_active);

    msg!("Presale active flag: {} -> {}", previous, is_active);
    emit!(PresaleToggled {
        is_active,
        timestamp: Clock::get()?.unix_timestamp,
    });
    Ok(())
}
