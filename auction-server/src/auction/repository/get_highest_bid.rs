use {
    super::Repository,
    crate::auction::entities::{
        self,
        AuctionError,
    },
};

impl Repository {
    /// Highest admitted bid according to the durable bid log. Used when the
    /// in-memory admission state is cold, e.g. after a restart.
    pub async fn get_highest_bid(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Option<entities::Bid>, AuctionError> {
        let bid = self.db.get_highest_bid(auction_id).await?;
        Ok(bid.map(|bid| bid.get_bid_entity()))
    }
}
