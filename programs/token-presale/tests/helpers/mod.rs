//! In-memory stand-in for the System and token programs. It applies the
//! transfers a handler would issue for an engine plan, so scenarios can check
//! balances and the record together.

#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use token_presale::engine::{admin, purchase, withdrawal, PresaleBindings, PresaleConfig};
use token_presale::{guard, Presale};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const RENT_FLOOR: u64 = 890_880;
pub const INVENTORY: u64 = 1_000_000 * LAMPORTS_PER_SOL; // 1M tokens at 9 decimals
pub const START: i64 = 1_700_000_000;
pub const END: i64 = START + 86_400;

pub fn default_config() -> PresaleConfig {
    PresaleConfig {
        rate: 1_000,
        presale_start: START,
        presale_end: END,
        min_purchase: LAMPORTS_PER_SOL / 10,
        max_purchase: LAMPORTS_PER_SOL * 10,
    }
}

pub struct Harness {
    pub presale_key: Pubkey,
    pub presale: Option<Presale>,
    pub admin: Pubkey,
    pub buyer: Pubkey,
    pub token_mint: Pubkey,
    pub treasury: Pubkey,
    pub escrow: Pubkey,
    pub escrow_authority: Pubkey,
    pub lamports: HashMap<Pubkey, u64>,
    pub tokens: HashMap<Pubkey, u64>,
    pub now: i64,
}

impl Harness {
    pub fn new() -> Self {
        let (presale_key, _) = Presale::pda();
        let (treasury, _) = Presale::treasury_pda(&presale_key);
        let admin = Pubkey::new_unique();
        let buyer = Pubkey::new_unique();
        let escrow = Pubkey::new_unique();

        let mut lamports = HashMap::new();
        lamports.insert(admin, 100 * LAMPORTS_PER_SOL);
        lamports.insert(buyer, 100 * LAMPORTS_PER_SOL);
        let mut tokens = HashMap::new();
        tokens.insert(escrow, INVENTORY);

        Self {
            presale_key,
            presale: None,
            admin,
            buyer,
            token_mint: Pubkey::new_unique(),
            treasury,
            escrow,
            escrow_authority: presale_key,
            lamports,
            tokens,
            now: START,
        }
    }

    pub fn initialized() -> Self {
        let mut h = Self::new();
        h.initialize(default_config()).unwrap();
        h
    }

    pub fn record(&self) -> &Presale {
        self.presale.as_ref().expect("presale not initialized")
    }

    pub fn lamports_of(&self, key: &Pubkey) -> u64 {
        self.lamports.get(key).copied().unwrap_or(0)
    }

    pub fn tokens_of(&self, key: &Pubkey) -> u64 {
        self.tokens.get(key).copied().unwrap_or(0)
    }

    /// The runtime rejects a transaction that leaves any account holding a
    /// non-zero balance below the rent-exempt minimum.
    fn move_lamports(&mut self, from: Pubkey, to: Pubkey, amount: u64) {
        *self.lamports.entry(from).or_default() -= amount;
        *self.lamports.entry(to).or_default() += amount;
        for key in [from, to] {
            let balance = self.lamports_of(&key);
            assert!(
                balance == 0 || balance >= RENT_FLOOR,
                "{key} left with {balance} lamports, below rent exemption"
            );
        }
    }

    fn move_tokens(&mut self, from: Pubkey, to: Pubkey, amount: u64) {
        *self.tokens.entry(from).or_default() -= amount;
        *self.tokens.entry(to).or_default() += amount;
    }

    /// Only writes the record when every check passes, like a failed `init`.
    pub fn initialize(&mut self, config: PresaleConfig) -> Result<()> {
        guard::require_record_authority(&self.escrow_authority, &self.presale_key)?;
        let (_, bump) = Presale::pda();
        let (_, treasury_bump) = Presale::treasury_pda(&self.presale_key);
        let mut record = Presale::default();
        admin::initialize(
            &mut record,
            config,
            PresaleBindings {
                admin: self.admin,
                token_mint: self.token_mint,
                treasury: self.treasury,
                presale_token_account: self.escrow,
                bump,
                treasury_bump,
            },
            RENT_FLOOR,
        )?;
        self.presale = Some(record);
        Ok(())
    }

    pub fn buy(&mut self, buyer: Pubkey, amount: u64) -> Result<u64> {
        let escrow_balance = self.tokens_of(&self.escrow);
        let record = self.record();
        guard::require_treasury(record, &self.treasury)?;
        guard::require_escrow(record, &self.escrow)?;
        guard::require_mint(record, &self.token_mint)?;
        guard::require_token_destination(&self.token_mint, &buyer, record, &buyer)?;
        let quote = purchase::quote(record, amount, self.now, escrow_balance)?;

        self.move_lamports(buyer, self.treasury, quote.lamports_in);
        self.move_tokens(self.escrow, buyer, quote.tokens_out);
        let record = self.presale.as_mut().expect("presale not initialized");
        purchase::commit(record, &quote);
        Ok(quote.tokens_out)
    }

    pub fn toggle(&mut self, caller: Pubkey, is_active: bool) -> Result<()> {
        let record = self.presale.as_mut().expect("presale not initialized");
        guard::require_admin(record, &caller)?;
        admin::set_active(record, is_active);
        Ok(())
    }

    pub fn withdraw_sol(&mut self, caller: Pubkey, amount: Option<u64>) -> Result<u64> {
        let record = self.record();
        guard::require_admin(record, &caller)?;
        guard::require_treasury(record, &self.treasury)?;
        let plan = withdrawal::plan_sol(amount, self.lamports_of(&self.treasury), RENT_FLOOR)?;
        self.move_lamports(self.treasury, caller, plan.amount);
        Ok(plan.amount)
    }

    pub fn withdraw_unsold(&mut self, caller: Pubkey) -> Result<u64> {
        let record = self.record();
        let amount = withdrawal::plan_unsold(record, self.now, self.tokens_of(&self.escrow))?;
        guard::require_admin(record, &caller)?;
        guard::require_escrow(record, &self.escrow)?;
        guard::require_mint(record, &self.token_mint)?;
        guard::require_token_destination(&self.token_mint, &caller, record, &caller)?;
        self.move_tokens(self.escrow, caller, amount);
        Ok(amount)
    }
}
