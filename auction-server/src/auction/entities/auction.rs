use {
    crate::kernel::entities::ProductCondition,
    std::sync::Arc,
    time::OffsetDateTime,
    tokio::sync::Mutex,
    uuid::Uuid,
};

pub type AuctionId = Uuid;
pub type AuctionLock = Arc<Mutex<()>>;

/// Status of the bidding window. `Open` is the initial state; `Closed` is
/// terminal and entered exactly once, by the expiry sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "auction_status", rename_all = "snake_case")]
pub enum AuctionStatus {
    Open,
    Closed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub id:           AuctionId,
    pub product_name: String,
    pub category:     String,
    pub description:  String,
    pub condition:    ProductCondition,
    pub status:       AuctionStatus,
    pub created_at:   OffsetDateTime,
    pub expires_at:   OffsetDateTime,
}

impl Auction {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at <= now
    }
}
