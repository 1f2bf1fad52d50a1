//! Error types for Gridlands.
//!
//! All errors use the `GL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Registry errors
//! - 2xx: Funds errors
//! - 3xx: Ledger / authorization errors
//! - 4xx: Auction errors
//! - 5xx: Purchase errors
//! - 9xx: General / internal errors
//!
//! Every failure is a synchronous, non-retryable rejection of the
//! triggering operation with zero side effects.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{AuctionId, ChunkCoord, PurchaseId, TokenId};

/// Central error enum for all Gridlands operations.
#[derive(Debug, Error)]
pub enum GridlandsError {
    // =================================================================
    // Registry Errors (1xx)
    // =================================================================
    /// No token has been minted at this coordinate.
    #[error("GL_ERR_100: No parcel minted at {0}")]
    ChunkNotFound(ChunkCoord),

    /// The token id does not correspond to a minted parcel.
    #[error("GL_ERR_101: Token not found: {0}")]
    TokenNotFound(TokenId),

    /// The coordinate already has a token.
    #[error("GL_ERR_102: Parcel already minted at {0}")]
    AlreadyMinted(ChunkCoord),

    /// The coordinate lies beyond the inclusive world bound.
    #[error("GL_ERR_103: Coordinate {coord} is beyond world size {world_size}")]
    OutOfBounds { coord: ChunkCoord, world_size: u64 },

    /// Parallel input arrays differ in length.
    #[error("GL_ERR_104: Array length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A public claim requested more coordinates than the batch cap.
    #[error("GL_ERR_105: Cannot claim {requested} chunks at a time (max {max})")]
    TooManyChunks { requested: usize, max: usize },

    /// No price tier covers this distance.
    #[error("GL_ERR_106: No price tier for distance {distance}")]
    NoPriceTier { distance: u64 },

    /// Public claiming is currently disabled.
    #[error("GL_ERR_107: Claiming is currently disabled")]
    ClaimingDisabled,

    // =================================================================
    // Funds Errors (2xx)
    // =================================================================
    /// The funds sent with a payable call do not cover the cost.
    #[error("GL_ERR_200: Insufficient payment: sent {sent}, required {required}")]
    InsufficientPayment { sent: Decimal, required: Decimal },

    /// Not enough balance to perform the transfer.
    #[error("GL_ERR_201: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    // =================================================================
    // Ledger / Authorization Errors (3xx)
    // =================================================================
    /// Caller is neither the owner nor the approved delegate of the token.
    #[error("GL_ERR_300: Caller is not owner nor approved for {token}")]
    NotAuthorized { token: TokenId },

    /// Caller does not hold the administrative role.
    #[error("GL_ERR_301: Caller is not the registry admin")]
    NotAdmin,

    /// The asset ledger passed to the call is not the one the record was
    /// opened on.
    #[error("GL_ERR_302: Asset ledger mismatch: expected {expected}, got {got}")]
    LedgerMismatch {
        expected: crate::LedgerId,
        got: crate::LedgerId,
    },

    // =================================================================
    // Auction Errors (4xx)
    // =================================================================
    /// No auction exists with this id.
    #[error("GL_ERR_400: Invalid auction id: {0}")]
    InvalidAuctionId(AuctionId),

    /// The auction is past its end height or already closed.
    #[error("GL_ERR_401: Auction finished: {0}")]
    AuctionFinished(AuctionId),

    /// The auction has not reached its end height yet.
    #[error("GL_ERR_402: Auction not finished: {0}")]
    AuctionNotFinished(AuctionId),

    /// The bid does not exceed the current high bid.
    #[error("GL_ERR_403: Bid {bid} is not above current high bid {high_bid}")]
    BidTooLow { bid: Decimal, high_bid: Decimal },

    /// Caller is not the auction creator.
    #[error("GL_ERR_404: Caller is not the auction creator")]
    NotCreator,

    /// Caller is not the recorded high bidder.
    #[error("GL_ERR_405: Caller is not the auction winner")]
    NotWinner,

    /// A multi-asset auction was created with no assets.
    #[error("GL_ERR_406: Empty token id list")]
    EmptyAssetList,

    // =================================================================
    // Purchase Errors (5xx)
    // =================================================================
    /// No purchase offer exists with this id.
    #[error("GL_ERR_500: Invalid purchase id: {0}")]
    InvalidPurchaseId(PurchaseId),

    /// The purchase is already cancelled or accepted.
    #[error("GL_ERR_501: Purchase finished: {0}")]
    PurchaseFinished(PurchaseId),

    /// The purchase offer has expired.
    #[error("GL_ERR_502: Purchase expired: {0}")]
    PurchaseExpired(PurchaseId),

    /// Caller is not the purchaser who opened the offer.
    #[error("GL_ERR_503: Caller is not the purchaser")]
    NotPurchaser,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error (invariant breach).
    #[error("GL_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GridlandsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = GridlandsError::ChunkNotFound(ChunkCoord::new(3, -4));
        let msg = format!("{err}");
        assert!(msg.starts_with("GL_ERR_100"), "Got: {msg}");
        assert!(msg.contains("(3, -4)"));
    }

    #[test]
    fn insufficient_payment_display() {
        let err = GridlandsError::InsufficientPayment {
            sent: Decimal::new(50, 0),
            required: Decimal::new(100, 0),
        };
        let msg = format!("{err}");
        assert!(msg.contains("GL_ERR_200"));
        assert!(msg.contains("50"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn out_of_bounds_display() {
        let err = GridlandsError::OutOfBounds {
            coord: ChunkCoord::new(-3000, 0),
            world_size: 2000,
        };
        let msg = format!("{err}");
        assert!(msg.contains("GL_ERR_103"));
        assert!(msg.contains("(-3000, 0)"));
        assert!(msg.contains("2000"));
    }

    #[test]
    fn all_errors_have_gl_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(GridlandsError::ClaimingDisabled),
            Box::new(GridlandsError::NotAdmin),
            Box::new(GridlandsError::NotCreator),
            Box::new(GridlandsError::NotWinner),
            Box::new(GridlandsError::NotPurchaser),
            Box::new(GridlandsError::EmptyAssetList),
            Box::new(GridlandsError::InvalidAuctionId(AuctionId(9))),
            Box::new(GridlandsError::PurchaseExpired(PurchaseId(1))),
            Box::new(GridlandsError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("GL_ERR_"),
                "Error missing GL_ERR_ prefix: {msg}"
            );
        }
    }
}
