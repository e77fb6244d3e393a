use anchor_lang::prelude::*;

use crate::{ constants::MARKETPLACE_SEED, state::Marketplace };

#[derive(Accounts)]
pub struct GetItemCount<'info> {
    #[account(
        seeds = [MARKETPLACE_SEED, marketplace.creator.as_ref()],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,
}

impl<'info> GetItemCount<'info> {
    pub fn get_item_count(&self) -> Result<u64> {
        Ok(self.marketplace.item_count)
    }
}
