use anchor_lang::prelude::*;

use crate::{
    constants::{ITEM_SEED, MARKETPLACE_SEED},
    state::{item_key, Item, Marketplace},
};

#[derive(Accounts)]
#[instruction(item_id: u64)]
pub struct GetPrice<'info> {
    #[account(
        seeds = [MARKETPLACE_SEED, marketplace.creator.as_ref()],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,
    /// CHECK: address pinned by seeds; may be uninitialized.
    #[account(
        seeds = [ITEM_SEED, marketplace.key().as_ref(), item_key(item_id).as_ref()],
        bump,
    )]
    pub item: UncheckedAccount<'info>,
}

impl<'info> GetPrice<'info> {
    /// 0 for both sold and never-listed ids.
    pub fn get_price(&self, item_id: u64) -> Result<u64> {
        let price = Item::stored_price(&self.item.to_account_info())?;
        msg!("item {} price {}", item_id, price);
        Ok(price)
    }
}
