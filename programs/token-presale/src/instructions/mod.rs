pub mod buy_tokens;
pub mod initialize;
pub mod toggle_presale;
pub mod withdraw_sol;
pub mod withdraw_unsold_tokens;

pub use buy_tokens::*;
pub use initialize::*;
pub use toggle_presale::*;
pub use withdraw_sol::*;
pub use withdraw_unsold_tokens::*;
