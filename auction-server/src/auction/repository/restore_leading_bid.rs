use {
    super::Repository,
    crate::auction::entities,
};

impl Repository {
    /// Compensating update after a failed durable bid write: reinstate the
    /// previous leader, unless another bid has already overtaken the failed
    /// one, in which case the newer admission stands.
    pub async fn restore_leading_bid(
        &self,
        failed: &entities::Bid,
        previous: Option<entities::Bid>,
    ) {
        let mut leading_bids = self.in_memory_store.leading_bids.write().await;
        if leading_bids.get(&failed.auction_id).map(|bid| bid.id) != Some(failed.id) {
            return;
        }
        match previous {
            Some(previous) => {
                leading_bids.insert(failed.auction_id, previous);
            }
            None => {
                leading_bids.remove(&failed.auction_id);
            }
        }
    }
}
