use anchor_lang::prelude::*;

#[constant]
pub const MARKETPLACE_SEED: &[u8] = b"marketplace";

#[constant]
pub const ITEM_SEED: &[u8] = b"item";

/// `SystemInstruction::Transfer` discriminant (bincode encodes the variant as a u32).
pub const SYSTEM_TRANSFER_TAG: u32 = 2;

/// Discriminant plus lamports.
pub const SYSTEM_TRANSFER_DATA_LEN: usize = 4 + 8;
