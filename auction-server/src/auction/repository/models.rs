#[cfg(test)]
use mockall::automock;
use {
    super::entities,
    crate::kernel::{
        db::DB,
        entities::{
            ProductCondition,
            UserId,
        },
    },
    async_trait::async_trait,
    sqlx::FromRow,
    std::fmt::Debug,
    time::{
        OffsetDateTime,
        PrimitiveDateTime,
        UtcOffset,
    },
};

fn primitive(timestamp: OffsetDateTime) -> PrimitiveDateTime {
    PrimitiveDateTime::new(timestamp.date(), timestamp.time())
}

#[derive(Clone, Debug, FromRow)]
pub struct Auction {
    pub id:              entities::AuctionId,
    pub product_name:    String,
    pub category:        String,
    pub description:     String,
    pub condition:       ProductCondition,
    pub status:          entities::AuctionStatus,
    pub creation_time:   PrimitiveDateTime,
    pub expiration_time: PrimitiveDateTime,
    pub conclusion_time: Option<PrimitiveDateTime>,
}

impl Auction {
    pub fn get_auction_entity(&self) -> entities::Auction {
        entities::Auction {
            id:           self.id,
            product_name: self.product_name.clone(),
            category:     self.category.clone(),
            description:  self.description.clone(),
            condition:    self.condition,
            status:       self.status,
            created_at:   self.creation_time.assume_offset(UtcOffset::UTC),
            expires_at:   self.expiration_time.assume_offset(UtcOffset::UTC),
        }
    }
}

#[derive(Clone, Debug, FromRow)]
pub struct Bid {
    pub id:              entities::BidId,
    pub auction_id:      entities::AuctionId,
    pub user_id:         UserId,
    pub amount:          entities::BidAmount,
    pub submission_time: PrimitiveDateTime,
}

impl Bid {
    pub fn get_bid_entity(&self) -> entities::Bid {
        entities::Bid {
            id:              self.id,
            auction_id:      self.auction_id,
            user_id:         self.user_id,
            amount:          self.amount,
            submission_time: self.submission_time.assume_offset(UtcOffset::UTC),
        }
    }
}

/// Durable storage collaborator. The engine owns all decision logic; this
/// trait is only asked to persist and report records.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_auction(&self, auction: &entities::Auction)
        -> Result<(), entities::AuctionError>;
    async fn add_bid(&self, bid: &entities::Bid) -> Result<(), entities::AuctionError>;
    async fn get_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Option<Auction>, entities::AuctionError>;
    async fn get_highest_bid(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Option<Bid>, entities::AuctionError>;
    async fn get_bids(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Vec<Bid>, entities::AuctionError>;
    async fn list_open_auctions_with_expiry_before(
        &self,
        cutoff: OffsetDateTime,
    ) -> Result<Vec<Auction>, entities::AuctionError>;
    /// Marks an auction closed. Returns whether this call performed the
    /// transition; `false` means it was already closed.
    async fn conclude_auction(
        &self,
        auction_id: entities::AuctionId,
        conclusion_time: OffsetDateTime,
    ) -> Result<bool, entities::AuctionError>;
}

#[async_trait]
impl Database for DB {
    async fn add_auction(
        &self,
        auction: &entities::Auction,
    ) -> Result<(), entities::AuctionError> {
        sqlx::query(
            "INSERT INTO auction (id, product_name, category, description, condition, status, creation_time, expiration_time) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(auction.id)
        .bind(&auction.product_name)
        .bind(&auction.category)
        .bind(&auction.description)
        .bind(auction.condition)
        .bind(auction.status)
        .bind(primitive(auction.created_at))
        .bind(primitive(auction.expires_at))
        .execute(self)
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), auction_id = %auction.id, "DB: Failed to insert auction");
            entities::AuctionError::PersistenceFailure
        })?;
        Ok(())
    }

    async fn add_bid(&self, bid: &entities::Bid) -> Result<(), entities::AuctionError> {
        sqlx::query(
            "INSERT INTO bid (id, auction_id, user_id, amount, submission_time) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(bid.id)
        .bind(bid.auction_id)
        .bind(bid.user_id)
        .bind(bid.amount)
        .bind(primitive(bid.submission_time))
        .execute(self)
        .await
        .map_err(|e| {
            tracing::error!(error = e.to_string(), bid_id = %bid.id, "DB: Failed to insert bid");
            entities::AuctionError::PersistenceFailure
        })?;
        Ok(())
    }

    async fn get_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Option<Auction>, entities::AuctionError> {
        sqlx::query_as("SELECT * FROM auction WHERE id = $1")
            .bind(auction_id)
            .fetch_optional(self)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction_id = %auction_id,
                    "DB: Failed to get auction"
                );
                entities::AuctionError::PersistenceFailure
            })
    }

    async fn get_highest_bid(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Option<Bid>, entities::AuctionError> {
        sqlx::query_as("SELECT * FROM bid WHERE auction_id = $1 ORDER BY amount DESC LIMIT 1")
            .bind(auction_id)
            .fetch_optional(self)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction_id = %auction_id,
                    "DB: Failed to get highest bid"
                );
                entities::AuctionError::PersistenceFailure
            })
    }

    async fn get_bids(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Vec<Bid>, entities::AuctionError> {
        sqlx::query_as("SELECT * FROM bid WHERE auction_id = $1 ORDER BY submission_time ASC")
            .bind(auction_id)
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = e.to_string(),
                    auction_id = %auction_id,
                    "DB: Failed to fetch bids"
                );
                entities::AuctionError::PersistenceFailure
            })
    }

    async fn list_open_auctions_with_expiry_before(
        &self,
        cutoff: OffsetDateTime,
    ) -> Result<Vec<Auction>, entities::AuctionError> {
        sqlx::query_as("SELECT * FROM auction WHERE status = $1 AND expiration_time <= $2")
            .bind(entities::AuctionStatus::Open)
            .bind(primitive(cutoff))
            .fetch_all(self)
            .await
            .map_err(|e| {
                tracing::error!(error = e.to_string(), "DB: Failed to list open auctions");
                entities::AuctionError::PersistenceFailure
            })
    }

    async fn conclude_auction(
        &self,
        auction_id: entities::AuctionId,
        conclusion_time: OffsetDateTime,
    ) -> Result<bool, entities::AuctionError> {
        let result = sqlx::query(
            "UPDATE auction SET status = $1, conclusion_time = $2 WHERE id = $3 AND status = $4",
        )
        .bind(entities::AuctionStatus::Closed)
        .bind(primitive(conclusion_time))
        .bind(auction_id)
        .bind(entities::AuctionStatus::Open)
        .execute(self)
        .await
        .map_err(|e| {
            tracing::error!(
                error = e.to_string(),
                auction_id = %auction_id,
                "DB: Failed to conclude auction"
            );
            entities::AuctionError::PersistenceFailure
        })?;
        Ok(result.rows_affected() > 0)
    }
}
