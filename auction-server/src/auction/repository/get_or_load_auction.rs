use {
    super::Repository,
    crate::auction::entities::{
        self,
        AuctionError,
    },
};

impl Repository {
    /// Auction lookup through the in-memory cache, falling back to the
    /// durable store and repopulating the cache (including the leading bid)
    /// on a miss.
    pub async fn get_or_load_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Option<entities::Auction>, AuctionError> {
        if let Some(auction) = self.in_memory_store.auctions.read().await.get(&auction_id) {
            return Ok(Some(auction.clone()));
        }

        let Some(row) = self.db.get_auction(auction_id).await? else {
            return Ok(None);
        };
        let auction = row.get_auction_entity();

        if let Some(row) = self.db.get_highest_bid(auction_id).await? {
            // or_insert keeps a concurrently admitted (newer) leader intact.
            self.in_memory_store
                .leading_bids
                .write()
                .await
                .entry(auction_id)
                .or_insert(row.get_bid_entity());
        }
        self.in_memory_store
            .auctions
            .write()
            .await
            .entry(auction_id)
            .or_insert(auction.clone());
        Ok(Some(auction))
    }
}
