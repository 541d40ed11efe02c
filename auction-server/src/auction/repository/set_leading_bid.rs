use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Installs a newly admitted bid as the auction's leader. Returns the
    /// bid that was previously leading, which the caller keeps for rollback
    /// if the durable write fails.
    pub async fn set_leading_bid(&self, bid: entities::Bid) -> Option<entities::Bid> {
        self.in_memory_store
            .leading_bids
            .write()
            .await
            .insert(bid.auction_id, bid)
    }
}
