use {
    super::Repository,
    crate::auction::entities::{
        self,
        AuctionError,
    },
};

impl Repository {
    /// Admitted bid history for an auction, oldest first.
    pub async fn get_bids(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Vec<entities::Bid>, AuctionError> {
        let bids = self.db.get_bids(auction_id).await?;
        Ok(bids.iter().map(|bid| bid.get_bid_entity()).collect())
    }
}
