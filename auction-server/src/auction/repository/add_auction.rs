use {
    super::Repository,
    crate::auction::entities::{
        self,
        AuctionError,
    },
};

impl Repository {
    async fn add_in_memory_auction(&self, auction: entities::Auction) {
        self.in_memory_store
            .auctions
            .write()
            .await
            .insert(auction.id, auction);
    }

    // NOTE: Do not call this function directly. Instead call `create_auction` from `Service`.
    pub async fn add_auction(
        &self,
        auction: entities::Auction,
    ) -> Result<entities::Auction, AuctionError> {
        self.db.add_auction(&auction).await?;
        self.add_in_memory_auction(auction.clone()).await;
        Ok(auction)
    }
}
