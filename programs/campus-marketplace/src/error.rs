use anchor_lang::prelude::*;

#[error_code]
pub enum MarketplaceError {
    #[msg("Only the seller can list items")]
    Unauthorized,
    #[msg("Price must be greater than zero")]
    InvalidPrice,
    #[msg("Item is not available")]
    ItemUnavailable,
    #[msg("Payment must go to the seller")]
    WrongRecipient,
    #[msg("Payment amount does not match the listed price")]
    AmountMismatch,
    #[msg("Linked payment is not a system transfer in this transaction")]
    InvalidPayment,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
