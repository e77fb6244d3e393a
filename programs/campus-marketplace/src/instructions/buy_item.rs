// This file defines the 'BuyItem' instruction.
// A buyer purchases a listed item by placing a System Program transfer to the
// seller directly before this instruction in the same transaction.
//
// Key roles:
// - 'buyer': the caller.
// - 'item': the store entry. It may not exist if the id was never listed.
// - 'instructions_sysvar': used to read the sibling transfer.
//
// The purchase flow:
// - The item must have a non-zero price.
// - The transfer must pay the creator exactly that price.
// - The item's price is overwritten with 0. The account is never closed.
//
// Funds never pass through the program. If any check fails the runtime drops
// the whole transaction, transfer included.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as sys_ix;

use crate::{
    constants::{ITEM_SEED, MARKETPLACE_SEED},
    error::MarketplaceError,
    payment::LinkedPayment,
    state::{item_key, Item, Marketplace},
};

#[derive(Accounts)]
#[instruction(item_id: u64)]
pub struct BuyItem<'info> {
    pub buyer: Signer<'info>,
    #[account(
        seeds = [MARKETPLACE_SEED, marketplace.creator.as_ref()],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,
    /// CHECK: address pinned by seeds; contents read with `Item::load` since
    /// a never-listed id has no account.
    #[account(
        mut,
        seeds = [ITEM_SEED, marketplace.key().as_ref(), item_key(item_id).as_ref()],
        bump,
    )]
    pub item: UncheckedAccount<'info>,
    /// CHECK: address constraint
    #[account(address = sys_ix::ID)]
    pub instructions_sysvar: AccountInfo<'info>,
}

impl<'info> BuyItem<'info> {
    pub fn buy_item(&mut self, item_id: u64) -> Result<()> {
        let info = self.item.to_account_info();
        let mut item = match Item::load(&info)? {
            Some(item) => item,
            None => {
                msg!("item {} was never listed", item_id);
                return err!(MarketplaceError::ItemUnavailable);
            }
        };

        let payment = item.settle(&self.marketplace.creator, || {
            LinkedPayment::load(&self.instructions_sysvar)
        })?;
        item.store(&info)?;

        msg!(
            "item {} sold to {} for {} lamports",
            item_id,
            self.buyer.key(),
            payment.amount
        );
        emit!(ItemSold {
            marketplace: self.marketplace.key(),
            item_id,
            buyer: self.buyer.key(),
            payer: payment.sender,
            price: payment.amount,
        });
        Ok(())
    }
}

#[event]
pub struct ItemSold {
    pub marketplace: Pubkey,
    pub item_id: u64,
    pub buyer: Pubkey,
    pub payer: Pubkey,
    pub price: u64,
}
