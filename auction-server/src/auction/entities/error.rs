use {
    super::bid::BidAmount,
    thiserror::Error,
};

/// Typed outcomes of the lifecycle and admission operations.
///
/// `AuctionClosed`, `BidTooLow`, `NotYetClosed` and `NoBids` are business
/// rejections: deterministic and repeatable given the same state.
/// `PersistenceFailure` is transient; admission state is rolled back before
/// it is surfaced, so callers may safely retry the same request.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AuctionError {
    /// The referenced auction does not exist.
    #[error("auction not found")]
    AuctionNotFound,
    /// The bidding window has already closed.
    #[error("auction is closed for bidding")]
    AuctionClosed,
    /// The amount does not strictly exceed the current leading bid.
    #[error("bid must exceed the current floor of {floor}")]
    BidTooLow { floor: BidAmount },
    /// The auction is still open; no winner can be resolved yet.
    #[error("auction has not closed yet")]
    NotYetClosed,
    /// The auction closed without a single admitted bid.
    #[error("auction received no bids")]
    NoBids,
    /// The durable store rejected a read or write.
    #[error("persistent storage is temporarily unavailable")]
    PersistenceFailure,
}
