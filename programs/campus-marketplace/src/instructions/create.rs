// Deploys a marketplace instance for the signing seller.
//
// The marketplace PDA is seeded by the creator, so each seller gets exactly
// one instance and `init` refuses a second create.

use anchor_lang::prelude::*;

use crate::{ constants::MARKETPLACE_SEED, state::Marketplace };

#[derive(Accounts)]
pub struct Create<'info> {
    /// The seller. Fixed for the lifetime of the marketplace.
    #[account(mut)]
    pub creator: Signer<'info>,
    #[account(
        init,
        payer = creator,
        space = 8 + Marketplace::INIT_SPACE,
        seeds = [MARKETPLACE_SEED, creator.key().as_ref()],
        bump,
    )]
    pub marketplace: Account<'info, Marketplace>,
    pub system_program: Program<'info, System>,
}

impl<'info> Create<'info> {
    pub fn create(&mut self, bumps: CreateBumps) -> Result<()> {
        self.marketplace
            .set_inner(Marketplace::new(self.creator.key(), bumps.marketplace));

        msg!("marketplace created for seller {}", self.creator.key());
        emit!(MarketplaceCreated {
            marketplace: self.marketplace.key(),
            creator: self.creator.key(),
        });
        Ok(())
    }
}

#[event]
pub struct MarketplaceCreated {
    pub marketplace: Pubkey,
    pub creator: Pubkey,
}
