use anchor_lang::prelude::*;

use crate::error::MarketplaceError;

/// One seller's marketplace instance. The creator is fixed at creation and
/// `item_count` only ever moves forward, one step per successful listing.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Marketplace {
    pub creator: Pubkey,
    pub item_count: u64,
    pub bump: u8,
}

impl Marketplace {
    pub fn new(creator: Pubkey, bump: u8) -> Self {
        Self {
            creator,
            item_count: 0,
            bump,
        }
    }

    pub fn authorize_lister(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.creator, MarketplaceError::Unauthorized);
        Ok(())
    }

    /// Id the next successful listing will receive. Also the id the item
    /// address is derived from in `ListItem`.
    pub fn next_item_id(&self) -> Result<u64> {
        self.item_count
            .checked_add(1)
            .ok_or(error!(MarketplaceError::MathOverflow))
    }

    /// Validates a listing request and, only if every check passes, bumps the
    /// counter. Returns the assigned item id.
    pub fn register_listing(&mut self, caller: &Pubkey, price: u64) -> Result<u64> {
        self.authorize_lister(caller)?;
        require!(price > 0, MarketplaceError::InvalidPrice);

        let item_id = self.next_item_id()?;
        self.item_count = item_id;
        Ok(item_id)
    }
}
