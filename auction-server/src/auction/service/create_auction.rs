use {
    super::Service,
    crate::{
        auction::entities::{
            self,
            AuctionError,
            AuctionStatus,
        },
        kernel::entities::ProductCondition,
    },
    uuid::Uuid,
};

pub struct CreateAuctionInput {
    pub product_name: String,
    pub category:     String,
    pub description:  String,
    pub condition:    ProductCondition,
}

impl Service {
    /// Opens a new auction. The bidding window starts now and spans the
    /// configured auction duration.
    #[tracing::instrument(skip_all, fields(auction_id))]
    pub async fn create_auction(
        &self,
        input: CreateAuctionInput,
    ) -> Result<entities::Auction, AuctionError> {
        let created_at = self.time_source.now();
        let auction = entities::Auction {
            id: Uuid::new_v4(),
            product_name: input.product_name,
            category: input.category,
            description: input.description,
            condition: input.condition,
            status: AuctionStatus::Open,
            created_at,
            expires_at: created_at + self.config.auction_duration,
        };
        tracing::Span::current().record("auction_id", auction.id.to_string());

        // The durable write happens before the auction becomes visible in
        // memory; a failed write leaves no live auction behind.
        let auction = self.repo.add_auction(auction).await.inspect_err(|err| {
            tracing::error!(error = ?err, "Failed to create auction");
        })?;
        tracing::info!(expires_at = %auction.expires_at, "Auction created");
        Ok(auction)
    }
}
