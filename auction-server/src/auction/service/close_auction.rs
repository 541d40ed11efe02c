use {
    super::Service,
    crate::auction::entities::{
        self,
        AuctionError,
        AuctionStatus,
    },
};

pub struct CloseAuctionInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Transitions one expired auction from open to closed, under the same
    /// per-auction lock bid admission takes. Safe to call repeatedly and
    /// concurrently; only the first call performs the transition.
    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id))]
    pub async fn close_auction(&self, input: CloseAuctionInput) -> Result<(), AuctionError> {
        let auction_lock = self.repo.get_or_create_auction_lock(input.auction_id).await;
        let result = self.close_auction_for_lock(&input, auction_lock).await;
        self.repo.remove_auction_lock(&input.auction_id).await;
        result
    }

    async fn close_auction_for_lock(
        &self,
        input: &CloseAuctionInput,
        auction_lock: entities::AuctionLock,
    ) -> Result<(), AuctionError> {
        let _acquired_lock = auction_lock.lock().await;

        let auction = self
            .repo
            .get_or_load_auction(input.auction_id)
            .await?
            .ok_or(AuctionError::AuctionNotFound)?;
        if auction.status == AuctionStatus::Closed {
            return Ok(());
        }
        let now = self.time_source.now();
        if !auction.is_expired(now) {
            return Ok(());
        }

        let transitioned = self.repo.conclude_auction(input.auction_id, now).await?;
        if transitioned {
            let winning_amount = self
                .repo
                .get_leading_bid(input.auction_id)
                .await
                .map(|bid| bid.amount);
            tracing::info!(winning_amount, "Auction closed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::CloseAuctionInput,
        crate::{
            auction::{
                entities::AuctionStatus,
                service::{
                    create_auction::CreateAuctionInput,
                    get_auction_status::GetAuctionStatusInput,
                    tests::{
                        new_stateful_service,
                        AUCTION_DURATION,
                    },
                },
            },
            kernel::entities::ProductCondition,
        },
        std::time::Duration,
    };

    #[tokio::test]
    async fn test_close_auction_before_expiry_is_a_no_op() {
        let (service, state, _time_source) = new_stateful_service();
        let auction = service
            .create_auction(CreateAuctionInput {
                product_name: "Film camera".to_string(),
                category:     "photography".to_string(),
                description:  "35mm rangefinder".to_string(),
                condition:    ProductCondition::New,
            })
            .await
            .unwrap();

        service
            .close_auction(CloseAuctionInput {
                auction_id: auction.id,
            })
            .await
            .unwrap();

        assert_eq!(
            service
                .get_auction_status(GetAuctionStatusInput {
                    auction_id: auction.id,
                })
                .await
                .unwrap(),
            AuctionStatus::Open
        );
        assert_eq!(state.lock().unwrap().transitions, 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_closes_transition_exactly_once() {
        let (service, state, time_source) = new_stateful_service();
        let auction = service
            .create_auction(CreateAuctionInput {
                product_name: "Film camera".to_string(),
                category:     "photography".to_string(),
                description:  "35mm rangefinder".to_string(),
                condition:    ProductCondition::New,
            })
            .await
            .unwrap();
        time_source.advance(AUCTION_DURATION + Duration::from_secs(1));

        let closes: Vec<_> = (0..4)
            .map(|_| {
                tokio::spawn({
                    let service = service.clone();
                    let auction_id = auction.id;
                    async move { service.close_auction(CloseAuctionInput { auction_id }).await }
                })
            })
            .collect();
        for close in closes {
            close.await.unwrap().unwrap();
        }

        assert_eq!(state.lock().unwrap().transitions, 1);
        assert_eq!(
            service
                .get_auction_status(GetAuctionStatusInput {
                    auction_id: auction.id,
                })
                .await
                .unwrap(),
            AuctionStatus::Closed
        );
    }
}
