use {
    super::{
        get_auction::GetAuctionInput,
        Service,
    },
    crate::auction::entities::{
        self,
        AuctionError,
    },
};

pub struct GetBidsInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Full admitted-bid history for an auction, oldest first. The bid log
    /// is append-only, so this reads without taking the auction lock.
    pub async fn get_bids(&self, input: GetBidsInput) -> Result<Vec<entities::Bid>, AuctionError> {
        self.get_auction(GetAuctionInput {
            auction_id: input.auction_id,
        })
        .await?;
        self.repo.get_bids(input.auction_id).await
    }
}

#[cfg(test)]
mod tests {
    use {
        super::GetBidsInput,
        crate::{
            auction::service::{
                create_auction::CreateAuctionInput,
                submit_bid::SubmitBidInput,
                tests::new_stateful_service,
            },
            kernel::entities::ProductCondition,
        },
        uuid::Uuid,
    };

    #[tokio::test]
    async fn test_get_bids_returns_admissions_in_order() {
        let (service, _state, _time_source) = new_stateful_service();
        let auction = service
            .create_auction(CreateAuctionInput {
                product_name: "Tube amplifier".to_string(),
                category:     "audio".to_string(),
                description:  "Working order".to_string(),
                condition:    ProductCondition::Refurbished,
            })
            .await
            .unwrap();

        for amount in [100, 150, 225] {
            service
                .submit_bid(SubmitBidInput {
                    auction_id: auction.id,
                    user_id: Uuid::new_v4(),
                    amount,
                })
                .await
                .unwrap();
        }

        let bids = service
            .get_bids(GetBidsInput {
                auction_id: auction.id,
            })
            .await
            .unwrap();
        let amounts: Vec<_> = bids.iter().map(|bid| bid.amount).collect();
        assert_eq!(amounts, vec![100, 150, 225]);
    }
}
