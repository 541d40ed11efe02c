use {
    super::{
        get_auction::GetAuctionInput,
        Service,
    },
    crate::auction::entities::{
        self,
        AuctionError,
        AuctionStatus,
    },
};

pub struct GetWinningBidInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Resolves the outcome of a closed auction. Admitted amounts are
    /// strictly increasing, so the leading bid is the unique maximum and no
    /// tie-break on time is ever needed. A leading bid before closure is
    /// provisional, not a winner.
    pub async fn get_winning_bid(
        &self,
        input: GetWinningBidInput,
    ) -> Result<entities::Bid, AuctionError> {
        let auction = self
            .get_auction(GetAuctionInput {
                auction_id: input.auction_id,
            })
            .await?;
        if auction.status == AuctionStatus::Open {
            return Err(AuctionError::NotYetClosed);
        }

        if let Some(bid) = self.repo.get_leading_bid(input.auction_id).await {
            return Ok(bid);
        }
        // The cache may be cold after a restart; the durable bid log
        // decides.
        self.repo
            .get_highest_bid(input.auction_id)
            .await?
            .ok_or(AuctionError::NoBids)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::GetWinningBidInput,
        crate::{
            auction::{
                entities::AuctionError,
                service::{
                    create_auction::CreateAuctionInput,
                    submit_bid::SubmitBidInput,
                    tests::{
                        new_service_with_mock_db,
                        new_stateful_service,
                        stateful_mock_db_with,
                        AUCTION_DURATION,
                    },
                },
            },
            kernel::entities::ProductCondition,
        },
        std::time::Duration,
        uuid::Uuid,
    };

    fn input() -> CreateAuctionInput {
        CreateAuctionInput {
            product_name: "Vintage atlas".to_string(),
            category:     "books".to_string(),
            description:  "1950s world atlas".to_string(),
            condition:    ProductCondition::Used,
        }
    }

    #[tokio::test]
    async fn test_winner_is_unresolved_while_open() {
        let (service, _state, _time_source) = new_stateful_service();
        let auction = service.create_auction(input()).await.unwrap();
        service
            .submit_bid(SubmitBidInput {
                auction_id: auction.id,
                user_id: Uuid::new_v4(),
                amount: 100,
            })
            .await
            .unwrap();

        assert_eq!(
            service
                .get_winning_bid(GetWinningBidInput {
                    auction_id: auction.id,
                })
                .await
                .unwrap_err(),
            AuctionError::NotYetClosed
        );
    }

    #[tokio::test]
    async fn test_closed_auction_without_bids_has_no_winner() {
        let (service, _state, time_source) = new_stateful_service();
        let auction = service.create_auction(input()).await.unwrap();

        time_source.advance(AUCTION_DURATION + Duration::from_secs(1));
        service.close_expired_auctions().await;

        assert_eq!(
            service
                .get_winning_bid(GetWinningBidInput {
                    auction_id: auction.id,
                })
                .await
                .unwrap_err(),
            AuctionError::NoBids
        );
    }

    #[tokio::test]
    async fn test_winner_is_the_last_admitted_bid() {
        let (service, _state, time_source) = new_stateful_service();
        let auction = service.create_auction(input()).await.unwrap();
        let last_user = Uuid::new_v4();
        for (user_id, amount) in [
            (Uuid::new_v4(), 100),
            (Uuid::new_v4(), 130),
            (last_user, 175),
        ] {
            service
                .submit_bid(SubmitBidInput {
                    auction_id: auction.id,
                    user_id,
                    amount,
                })
                .await
                .unwrap();
        }

        time_source.advance(AUCTION_DURATION + Duration::from_secs(1));
        service.close_expired_auctions().await;

        let winner = service
            .get_winning_bid(GetWinningBidInput {
                auction_id: auction.id,
            })
            .await
            .unwrap();
        assert_eq!(winner.amount, 175);
        assert_eq!(winner.user_id, last_user);
    }

    #[tokio::test]
    async fn test_winner_resolution_with_a_cold_cache() {
        let (service, state, time_source) = new_stateful_service();

        let auction = service.create_auction(input()).await.unwrap();
        service
            .submit_bid(SubmitBidInput {
                auction_id: auction.id,
                user_id: Uuid::new_v4(),
                amount: 260,
            })
            .await
            .unwrap();
        time_source.advance(AUCTION_DURATION + Duration::from_secs(1));
        service.close_expired_auctions().await;

        // A freshly started process shares the durable store but none of
        // the in-memory admission state; resolution falls back to the
        // highest-bid query.
        let restarted =
            new_service_with_mock_db(stateful_mock_db_with(state), time_source.clone());
        let winner = restarted
            .get_winning_bid(GetWinningBidInput {
                auction_id: auction.id,
            })
            .await
            .unwrap();
        assert_eq!(winner.amount, 260);
    }
}
