use {
    super::Repository,
    crate::auction::entities::{
        self,
        AuctionError,
    },
    time::OffsetDateTime,
};

impl Repository {
    /// Open auctions whose expiry has passed, straight from the durable
    /// store so a restarted process resumes closing auctions it no longer
    /// has cached.
    pub async fn list_expired_auctions(
        &self,
        now: OffsetDateTime,
    ) -> Result<Vec<entities::Auction>, AuctionError> {
        let auctions = self.db.list_open_auctions_with_expiry_before(now).await?;
        Ok(auctions
            .iter()
            .map(|auction| auction.get_auction_entity())
            .collect())
    }
}
