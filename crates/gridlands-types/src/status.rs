//! Lifecycle statuses for marketplace records.
//!
//! `Finished` (auctions) and `Expired` (purchases) are *derived* statuses:
//! storage only ever holds Active / Cancelled / Claimed / Accepted, and the
//! derived value is computed against the chain clock at read time. The
//! numeric `code()` projections match the original on-ledger tuple encoding.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionStatus {
    /// Open for bids (stored).
    Active,
    /// Explicitly cancelled by the creator (stored, terminal).
    Cancelled,
    /// Past its end height but not yet claimed or cancelled (derived).
    Finished,
    /// Won and claimed (stored, terminal).
    Claimed,
}

impl AuctionStatus {
    /// Numeric projection: Active=0, Cancelled=1, Finished=2, Claimed=3.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Active => 0,
            Self::Cancelled => 1,
            Self::Finished => 2,
            Self::Claimed => 3,
        }
    }

    /// Whether this status permits no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Claimed)
    }
}

impl std::fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Finished => write!(f, "FINISHED"),
            Self::Claimed => write!(f, "CLAIMED"),
        }
    }
}

/// Lifecycle status of a purchase offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseStatus {
    /// Standing offer awaiting acceptance (stored).
    Active,
    /// Withdrawn by the purchaser (stored, terminal).
    Cancelled,
    /// Past its expiry but not yet formally closed (derived).
    Expired,
    /// Accepted by the asset owner (stored, terminal).
    Accepted,
}

impl PurchaseStatus {
    /// Numeric projection: Active=0, Cancelled=1, Expired=2, Accepted=3.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Active => 0,
            Self::Cancelled => 1,
            Self::Expired => 2,
            Self::Accepted => 3,
        }
    }

    /// Whether this status permits no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Accepted)
    }
}

impl std::fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Expired => write!(f, "EXPIRED"),
            Self::Accepted => write!(f, "ACCEPTED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auction_codes_match_ledger_encoding() {
        assert_eq!(AuctionStatus::Active.code(), 0);
        assert_eq!(AuctionStatus::Cancelled.code(), 1);
        assert_eq!(AuctionStatus::Finished.code(), 2);
        assert_eq!(AuctionStatus::Claimed.code(), 3);
    }

    #[test]
    fn purchase_codes_match_ledger_encoding() {
        assert_eq!(PurchaseStatus::Active.code(), 0);
        assert_eq!(PurchaseStatus::Cancelled.code(), 1);
        assert_eq!(PurchaseStatus::Expired.code(), 2);
        assert_eq!(PurchaseStatus::Accepted.code(), 3);
    }

    #[test]
    fn derived_statuses_are_not_terminal() {
        assert!(!AuctionStatus::Finished.is_terminal());
        assert!(!PurchaseStatus::Expired.is_terminal());
        assert!(AuctionStatus::Claimed.is_terminal());
        assert!(AuctionStatus::Cancelled.is_terminal());
        assert!(PurchaseStatus::Accepted.is_terminal());
        assert!(PurchaseStatus::Cancelled.is_terminal());
    }

    #[test]
    fn display_is_uppercase() {
        assert_eq!(AuctionStatus::Finished.to_string(), "FINISHED");
        assert_eq!(PurchaseStatus::Expired.to_string(), "EXPIRED");
    }
}
