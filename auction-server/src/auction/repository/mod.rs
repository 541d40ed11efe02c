use {
    super::entities,
    std::{
        collections::HashMap,
        sync::Arc,
    },
    tokio::sync::{
        Mutex,
        RwLock,
    },
};

mod add_auction;
mod add_bid;
mod conclude_auction;
mod get_bids;
mod get_highest_bid;
mod get_leading_bid;
mod get_or_create_auction_lock;
mod get_or_load_auction;
mod list_expired_auctions;
mod models;
mod remove_auction_lock;
mod restore_leading_bid;
mod set_leading_bid;

pub use models::*;

/// In-process admission state, keyed by auction id.
///
/// `auctions` caches auction records (status is authoritative in-process:
/// there is a single lifecycle manager instance per auction). `leading_bids`
/// holds the current highest admitted bid per auction. `auction_locks` is
/// the per-auction critical-section arena shared by bid admission and the
/// expiry sweep.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub auctions:      RwLock<HashMap<entities::AuctionId, entities::Auction>>,
    pub leading_bids:  RwLock<HashMap<entities::AuctionId, entities::Bid>>,
    pub auction_locks: Mutex<HashMap<entities::AuctionId, entities::AuctionLock>>,
}

#[derive(Debug)]
pub struct Repository {
    pub in_memory_store: InMemoryStore,
    pub db:              Arc<dyn Database>,
}

impl Repository {
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self {
            in_memory_store: InMemoryStore::default(),
            db,
        }
    }
}
