use {
    super::auction::AuctionId,
    crate::kernel::entities::UserId,
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type BidId = Uuid;

/// Bid amounts are integral minor currency units. Admission only ever
/// accepts amounts strictly above the current floor, so anything at or
/// below zero can never be admitted.
pub type BidAmount = i64;

/// An admitted bid. Immutable once created; the bid log is append-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub id:              BidId,
    pub auction_id:      AuctionId,
    pub user_id:         UserId,
    pub amount:          BidAmount,
    pub submission_time: OffsetDateTime,
}
