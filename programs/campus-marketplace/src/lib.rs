#![allow(deprecated)]
#![allow(unexpected_cfgs)]

pub mod constants;
pub mod error;
pub mod instructions;
pub mod payment;
pub mod state;

#[cfg(test)]
mod test_utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use payment::*;
pub use state::*;


declare_id!("9qsHZ3VPkR5ZyWQJbU3vE2sQbU8m5v8bqH1YtWc6JkMx");

#[program]
pub mod campus_marketplace {
    use super::*;

    /// Creates the marketplace with the signer as its only seller.
    pub fn create(ctx: Context<Create>) -> Result<()> {
        ctx.accounts.create(ctx.bumps)
    }

    /// Lists a new item at `price` lamports and returns its id.
    pub fn list_item(ctx: Context<ListItem>, price: u64) -> Result<u64> {
        ctx.accounts.list_item(price, ctx.bumps)
    }

    /// Buys `item_id`. The preceding instruction must transfer exactly the
    /// listed price to the seller.
    pub fn buy_item(ctx: Context<BuyItem>, item_id: u64) -> Result<()> {
        ctx.accounts.buy_item(item_id)
    }

    pub fn get_price(ctx: Context<GetPrice>, item_id: u64) -> Result<u64> {
        ctx.accounts.get_price(item_id)
    }

    pub fn get_item_count(ctx: Context<GetItemCount>) -> Result<u64> {
        ctx.accounts.get_item_count()
    }
}
