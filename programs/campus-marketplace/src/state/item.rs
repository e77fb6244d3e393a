use anchor_lang::prelude::*;

use crate::error::MarketplaceError;
use crate::payment::LinkedPayment;

/// A store entry. `price == 0` means the item is not available: it was
/// either never listed or already sold, and the two cannot be told apart.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Item {
    pub item_id: u64,
    pub price: u64,
    pub bump: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Listed(u64),
    /// Never listed or sold.
    Retired,
}

/// Store key for an item: the big-endian encoding of its id.
pub fn item_key(item_id: u64) -> [u8; 8] {
    item_id.to_be_bytes()
}

impl Item {
    pub fn listed(item_id: u64, price: u64, bump: u8) -> Self {
        Self {
            item_id,
            price,
            bump,
        }
    }

    pub fn status(&self) -> ItemStatus {
        match self.price {
            0 => ItemStatus::Retired,
            price => ItemStatus::Listed(price),
        }
    }

    /// Buy-side transition. Checks availability first, only then reads and
    /// verifies the linked payment, and retires the item last. Returns the
    /// verified payment.
    pub fn settle<F>(&mut self, creator: &Pubkey, load_payment: F) -> Result<LinkedPayment>
    where
        F: FnOnce() -> Result<LinkedPayment>,
    {
        let price = match self.status() {
            ItemStatus::Listed(price) => price,
            ItemStatus::Retired => {
                msg!("item {} is not available", self.item_id);
                return err!(MarketplaceError::ItemUnavailable);
            }
        };

        let payment = load_payment()?;
        if let Err(e) = payment.verify(creator, price) {
            msg!(
                "rejected payment of {} lamports to {} for item {}",
                payment.amount,
                payment.receiver,
                self.item_id
            );
            return Err(e);
        }

        self.price = 0;
        Ok(payment)
    }

    /// Reads an item account that may never have been written. An empty
    /// account is a key that was never listed.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.data_is_empty() {
            return Ok(None);
        }
        require_keys_eq!(
            *info.owner,
            crate::ID,
            anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
        );

        let data = info.try_borrow_data()?;
        let item = Item::try_deserialize(&mut &data[..])?;
        Ok(Some(item))
    }

    pub fn stored_price(info: &AccountInfo) -> Result<u64> {
        Ok(Item::load(info)?.map_or(0, |item| item.price))
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}
