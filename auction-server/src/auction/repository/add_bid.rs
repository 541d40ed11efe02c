use {
    super::Repository,
    crate::auction::entities::{
        self,
        AuctionError,
    },
};

impl Repository {
    /// Durable append of an admitted bid. The in-memory admission state is
    /// updated separately, under the auction lock.
    pub async fn add_bid(&self, bid: &entities::Bid) -> Result<(), AuctionError> {
        self.db.add_bid(bid).await
    }
}
