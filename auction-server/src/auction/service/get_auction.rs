use {
    super::Service,
    crate::auction::entities::{
        self,
        AuctionError,
    },
};

pub struct GetAuctionInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    pub async fn get_auction(
        &self,
        input: GetAuctionInput,
    ) -> Result<entities::Auction, AuctionError> {
        self.repo
            .get_or_load_auction(input.auction_id)
            .await?
            .ok_or(AuctionError::AuctionNotFound)
    }
}
