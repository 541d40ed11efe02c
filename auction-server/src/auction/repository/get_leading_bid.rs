use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    pub async fn get_leading_bid(
        &self,
        auction_id: entities::AuctionId,
    ) -> Option<entities::Bid> {
        self.in_memory_store
            .leading_bids
            .read()
            .await
            .get(&auction_id)
            .cloned()
    }
}
