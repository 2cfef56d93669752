//! Decision logic behind every instruction. Nothing here performs a transfer:
//! each function validates a snapshot and returns the amounts the handler
//! should move, so the rules can be exercised without a runtime.

pub mod admin;
pub mod purchase;
pub mod withdrawal;

pub use admin::{PresaleBindings, PresaleConfig};
pub use purchase::PurchaseQuote;
pub use withdrawal::SolWithdrawal;
