use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::system_program;
use anchor_lang::solana_program::sysvar::instructions as sys_ix;

use crate::constants::{SYSTEM_TRANSFER_DATA_LEN, SYSTEM_TRANSFER_TAG};
use crate::error::MarketplaceError;

/// A lamport transfer that travels in the same transaction as a purchase.
/// The runtime commits both or neither, so the contract never holds funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkedPayment {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
}

impl LinkedPayment {
    /// Decodes a System Program `Transfer`. Any other instruction is rejected.
    pub fn from_instruction(ix: &Instruction) -> Result<Self> {
        require_keys_eq!(ix.program_id, system_program::ID, MarketplaceError::InvalidPayment);
        require!(
            ix.data.len() == SYSTEM_TRANSFER_DATA_LEN && ix.accounts.len() >= 2,
            MarketplaceError::InvalidPayment
        );

        let (tag, lamports) = ix.data.split_at(4);
        let tag = u32::from_le_bytes(
            tag.try_into()
                .map_err(|_| error!(MarketplaceError::InvalidPayment))?,
        );
        require!(tag == SYSTEM_TRANSFER_TAG, MarketplaceError::InvalidPayment);

        let amount = u64::from_le_bytes(
            lamports
                .try_into()
                .map_err(|_| error!(MarketplaceError::InvalidPayment))?,
        );

        Ok(Self {
            sender: ix.accounts[0].pubkey,
            receiver: ix.accounts[1].pubkey,
            amount,
        })
    }

    /// Loads the transfer placed directly before the current instruction.
    /// The current instruction must be a top-level call into this program so
    /// one transfer can never be claimed by more than one purchase.
    pub fn load(ix_sysvar: &AccountInfo) -> Result<Self> {
        let current = sys_ix::load_current_index_checked(ix_sysvar)? as usize;
        let purchase = sys_ix::load_instruction_at_checked(current, ix_sysvar)?;
        require_keys_eq!(purchase.program_id, crate::ID, MarketplaceError::InvalidPayment);

        let index = current
            .checked_sub(1)
            .ok_or(error!(MarketplaceError::InvalidPayment))?;
        let ix = sys_ix::load_instruction_at_checked(index, ix_sysvar)?;
        Self::from_instruction(&ix)
    }

    /// Receiver first, then the exact amount.
    pub fn verify(&self, creator: &Pubkey, price: u64) -> Result<()> {
        require_keys_eq!(self.receiver, *creator, MarketplaceError::WrongRecipient);
        require_eq!(self.amount, price, MarketplaceError::AmountMismatch);
        Ok(())
    }
}
