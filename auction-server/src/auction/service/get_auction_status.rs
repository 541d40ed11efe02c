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

pub struct GetAuctionStatusInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    pub async fn get_auction_status(
        &self,
        input: GetAuctionStatusInput,
    ) -> Result<AuctionStatus, AuctionError> {
        let auction = self
            .get_auction(GetAuctionInput {
                auction_id: input.auction_id,
            })
            .await?;
        Ok(auction.status)
    }
}
