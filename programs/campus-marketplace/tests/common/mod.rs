//! Host-side stand-in for the runtime: every call works on a copy of the
//! state and commits only on success, the way a failed transaction is
//! rolled back on chain.

#![allow(dead_code)]

use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use campus_marketplace::error::MarketplaceError;
use campus_marketplace::{item_key, Item, LinkedPayment, Marketplace};

pub struct TestLedger {
    pub marketplace: Marketplace,
    /// Keyed by the big-endian item key, like the PDA seeds.
    pub items: BTreeMap<[u8; 8], Item>,
}

impl TestLedger {
    pub fn create(creator: Pubkey) -> Self {
        Self {
            marketplace: Marketplace::new(creator, 255),
            items: BTreeMap::new(),
        }
    }

    pub fn creator(&self) -> Pubkey {
        self.marketplace.creator
    }

    pub fn list_item(&mut self, caller: &Pubkey, price: u64) -> Result<u64> {
        let mut marketplace = self.marketplace.clone();
        let item_id = marketplace.register_listing(caller, price)?;

        let key = item_key(item_id);
        assert!(!self.items.contains_key(&key), "item {item_id} listed twice");

        self.items.insert(key, Item::listed(item_id, price, 255));
        self.marketplace = marketplace;
        Ok(item_id)
    }

    pub fn buy_item(&mut self, item_id: u64, payment: &LinkedPayment) -> Result<u64> {
        let mut item = self
            .items
            .get(&item_key(item_id))
            .cloned()
            .ok_or(error!(MarketplaceError::ItemUnavailable))?;

        let paid = item.settle(&self.marketplace.creator, || Ok(*payment))?;
        self.items.insert(item_key(item_id), item);
        Ok(paid.amount)
    }

    pub fn get_price(&self, item_id: u64) -> u64 {
        self.items
            .get(&item_key(item_id))
            .map_or(0, |item| item.price)
    }

    pub fn get_item_count(&self) -> u64 {
        self.marketplace.item_count
    }
}

pub fn pay(receiver: Pubkey, amount: u64) -> LinkedPayment {
    LinkedPayment {
        sender: Pubkey::new_unique(),
        receiver,
        amount,
    }
}
