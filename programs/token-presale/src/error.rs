use anchor_lang::prelude::*;

#[error_code]
pub enum PresaleError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Presale has not started yet")]
    NotStarted,
    #[msg("Presale is not active")]
    NotActive,
    #[msg("Presale has already ended")]
    Ended,
    #[msg("Purchase amount is below minimum")]
    BelowMinimum,
    #[msg("Purchase amount is above maximum")]
    AboveMaximum,
    #[msg("Not enough tokens left in the presale vault")]
    InsufficientInventory,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Presale start must be before presale end")]
    InvalidWindow,
    #[msg("Purchase bounds must satisfy 0 < min <= max")]
    InvalidBounds,
    #[msg("Rate must be greater than zero")]
    InvalidRate,
    #[msg("Insufficient treasury balance")]
    InsufficientTreasuryBalance,
    #[msg("Presale has not ended yet")]
    PresaleNotEnded,
    #[msg("Token account has the wrong mint or owner")]
    InvalidTokenAccount,
    #[msg("Withdrawal would leave the treasury below the rent-exempt minimum")]
    TreasuryBelowRentExemption,
    #[msg("Minimum purchase must cover the treasury rent-exempt minimum")]
    MinPurchaseBelowRentExemption,
}
