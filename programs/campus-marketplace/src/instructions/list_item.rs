// This file defines the 'ListItem' instruction.
// The seller puts a new item up for sale at a fixed lamport price.
//
// Key roles:
// - 'creator': must be the marketplace creator; pays rent for the item account.
// - 'marketplace': holds the item counter.
// - 'item': the store entry for the next id, keyed by its big-endian encoding.
//
// The item account is created by the handler rather than through `init`, so
// the caller and the price are checked before any lamports move.
//
// Ids come from the counter, so an id is never assigned twice and a retired
// item can never be relisted: its PDA already exists.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::{
    constants::{ITEM_SEED, MARKETPLACE_SEED},
    error::MarketplaceError,
    state::{item_key, Item, Marketplace},
};

#[derive(Accounts)]
pub struct ListItem<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,
    #[account(
        mut,
        has_one = creator @ MarketplaceError::Unauthorized,
        seeds = [MARKETPLACE_SEED, marketplace.creator.as_ref()],
        bump = marketplace.bump,
    )]
    pub marketplace: Account<'info, Marketplace>,
    /// CHECK: address pinned by seeds; created and written in `list_item`.
    #[account(
        mut,
        seeds = [
            ITEM_SEED,
            marketplace.key().as_ref(),
            item_key(marketplace.next_item_id()?).as_ref(),
        ],
        bump,
    )]
    pub item: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

impl<'info> ListItem<'info> {
    /// Bumps the counter and writes the price under the new id.
    pub fn list_item(&mut self, price: u64, bumps: ListItemBumps) -> Result<u64> {
        let item_id = self
            .marketplace
            .register_listing(&self.creator.key(), price)?;

        self.create_item_account(item_id, bumps.item)?;
        Item::listed(item_id, price, bumps.item).store(&self.item.to_account_info())?;

        msg!("listed item {} at {} lamports", item_id, price);
        emit!(ItemListed {
            marketplace: self.marketplace.key(),
            item_id,
            price,
        });
        Ok(item_id)
    }

    /// Allocates the item PDA owned by this program, rent paid by the creator.
    /// An address that already holds lamports is topped up, allocated and
    /// assigned instead of created.
    fn create_item_account(&self, item_id: u64, bump: u8) -> Result<()> {
        let marketplace = self.marketplace.key();
        let key = item_key(item_id);
        let seeds = &[ITEM_SEED, marketplace.as_ref(), key.as_ref(), &[bump]];
        let signer_seeds = &[&seeds[..]];

        let space = 8 + Item::INIT_SPACE;
        let rent = Rent::get()?.minimum_balance(space);
        let cpi_program = self.system_program.to_account_info();
        let current = self.item.lamports();

        if current == 0 {
            let cpi_accounts = CreateAccount {
                from: self.creator.to_account_info(),
                to: self.item.to_account_info(),
            };
            let ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
            return create_account(ctx, rent, space as u64, &crate::ID);
        }

        let top_up = rent.saturating_sub(current);
        if top_up > 0 {
            let cpi_accounts = Transfer {
                from: self.creator.to_account_info(),
                to: self.item.to_account_info(),
            };
            transfer(CpiContext::new(cpi_program.clone(), cpi_accounts), top_up)?;
        }

        let cpi_accounts = Allocate {
            account_to_allocate: self.item.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(cpi_program.clone(), cpi_accounts, signer_seeds);
        allocate(ctx, space as u64)?;

        let cpi_accounts = Assign {
            account_to_assign: self.item.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        assign(ctx, &crate::ID)
    }
}

#[event]
pub struct ItemListed {
    pub marketplace: Pubkey,
    pub item_id: u64,
    pub price: u64,
}
