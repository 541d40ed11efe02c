use {
    super::Repository,
    crate::auction::entities::{
        self,
        AuctionError,
        AuctionStatus,
    },
    time::OffsetDateTime,
};

impl Repository {
    /// Durably marks an auction closed and flips the cached status. Returns
    /// whether this call performed the transition; `false` means an earlier
    /// pass already closed it, which is not an error.
    #[tracing::instrument(skip_all, name = "conclude_auction_repo", fields(auction_id = %auction_id))]
    pub async fn conclude_auction(
        &self,
        auction_id: entities::AuctionId,
        conclusion_time: OffsetDateTime,
    ) -> Result<bool, AuctionError> {
        let transitioned = self.db.conclude_auction(auction_id, conclusion_time).await?;
        if let Some(auction) = self
            .in_memory_store
            .auctions
            .write()
            .await
            .get_mut(&auction_id)
        {
            auction.status = AuctionStatus::Closed;
        }
        Ok(transitioned)
    }
}
