use {
    super::{
        close_auction::CloseAuctionInput,
        Service,
    },
    futures::future::join_all,
};

impl Service {
    /// One sweep pass: close every open auction whose expiry has passed.
    /// Per-auction failures are logged and retried by the next pass.
    pub async fn close_expired_auctions(&self) {
        let now = self.time_source.now();
        let expired = match self.repo.list_expired_auctions(now).await {
            Ok(expired) => expired,
            Err(err) => {
                tracing::error!(error = ?err, "Failed to list expired auctions");
                return;
            }
        };
        if expired.is_empty() {
            return;
        }

        tracing::info!(count = expired.len(), "Closing expired auctions...");
        join_all(expired.into_iter().map(|auction| {
            let service = self.clone();
            async move {
                if let Err(err) = service
                    .close_auction(CloseAuctionInput {
                        auction_id: auction.id,
                    })
                    .await
                {
                    tracing::error!(
                        error = ?err,
                        auction_id = %auction.id,
                        "Failed to close auction",
                    );
                }
            }
        }))
        .await;
    }
}
