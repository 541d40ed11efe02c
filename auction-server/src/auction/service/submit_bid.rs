use {
    super::Service,
    crate::{
        auction::entities::{
            self,
            AuctionError,
            AuctionStatus,
        },
        kernel::entities::UserId,
    },
    uuid::Uuid,
};

pub struct SubmitBidInput {
    pub auction_id: entities::AuctionId,
    pub user_id:    UserId,
    pub amount:     entities::BidAmount,
}

impl Service {
    /// Admits or rejects a bid. The status check and the leading-bid
    /// compare-and-set run under the per-auction lock, so admission can
    /// never interleave with the sweep closing the same auction. The
    /// durable write runs after the lock is released, with a compensating
    /// rollback if it fails.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id, amount = input.amount))]
    pub async fn submit_bid(&self, input: SubmitBidInput) -> Result<entities::BidId, AuctionError> {
        let auction_lock = self.repo.get_or_create_auction_lock(input.auction_id).await;
        let result = self.submit_bid_for_lock(&input, auction_lock).await;
        self.repo.remove_auction_lock(&input.auction_id).await;
        result
    }

    async fn submit_bid_for_lock(
        &self,
        input: &SubmitBidInput,
        auction_lock: entities::AuctionLock,
    ) -> Result<entities::BidId, AuctionError> {
        let acquired_lock = auction_lock.lock().await;

        let auction = self
            .repo
            .get_or_load_auction(input.auction_id)
            .await?
            .ok_or(AuctionError::AuctionNotFound)?;
        if auction.status == AuctionStatus::Closed {
            return Err(AuctionError::AuctionClosed);
        }

        let previous = self.repo.get_leading_bid(input.auction_id).await;
        // An auction without bids has a floor of zero, which under the
        // strict comparison also rejects non-positive first bids.
        let floor = previous.as_ref().map(|bid| bid.amount).unwrap_or_default();
        if input.amount <= floor {
            return Err(AuctionError::BidTooLow { floor });
        }

        let bid = entities::Bid {
            id:              Uuid::new_v4(),
            auction_id:      input.auction_id,
            user_id:         input.user_id,
            amount:          input.amount,
            submission_time: self.time_source.now(),
        };
        self.repo.set_leading_bid(bid.clone()).await;
        drop(acquired_lock);

        if let Err(err) = self.repo.add_bid(&bid).await {
            // The floor must not stay raised by a bid that never became
            // durable.
            self.repo.restore_leading_bid(&bid, previous).await;
            return Err(err);
        }
        tracing::debug!(bid_id = %bid.id, "Bid admitted");
        Ok(bid.id)
    }
}
