//! Auction records.
//!
//! Storage only ever holds Active, Cancelled, or Claimed; `Finished` is
//! derived from the confirmation height at evaluation time. A record past
//! its end height therefore still reads Active in storage until a claim
//! or cancel mutates it.

use gridlands_types::{AccountId, AuctionId, AuctionStatus, LedgerId, TokenId};
use rust_decimal::Decimal;
use serde::Serialize;

/// One escrowed auction.
#[derive(Debug, Clone)]
pub struct Auction {
    pub(crate) creator: AccountId,
    pub(crate) asset_ledger: LedgerId,
    pub(crate) token_ids: Vec<TokenId>,
    pub(crate) end_height: u64,
    pub(crate) high_bidder: Option<AccountId>,
    pub(crate) high_bid: Decimal,
    /// Stored status: Active, Cancelled, or Claimed — never Finished.
    pub(crate) status: AuctionStatus,
}

impl Auction {
    pub(crate) fn new(
        creator: AccountId,
        asset_ledger: LedgerId,
        token_ids: Vec<TokenId>,
        end_height: u64,
    ) -> Self {
        Self {
            creator,
            asset_ledger,
            token_ids,
            end_height,
            high_bidder: None,
            high_bid: Decimal::ZERO,
            status: AuctionStatus::Active,
        }
    }

    /// Whether the end height has been reached at `height`.
    pub(crate) fn ended_at(&self, height: u64) -> bool {
        height >= self.end_height
    }

    /// Effective status at `height`: the stored status, except that a
    /// stored-Active auction past its end height reads Finished.
    #[must_use]
    pub fn status_at(&self, height: u64) -> AuctionStatus {
        if self.status == AuctionStatus::Active && self.ended_at(height) {
            AuctionStatus::Finished
        } else {
            self.status
        }
    }
}

/// Read-only projection of an auction record.
#[derive(Debug, Clone, Serialize)]
pub struct AuctionInfo {
    pub id: AuctionId,
    pub creator: AccountId,
    pub asset_ledger: LedgerId,
    pub token_ids: Vec<TokenId>,
    pub end_height: u64,
    /// `None` until the first bid lands.
    pub high_bidder: Option<AccountId>,
    pub high_bid: Decimal,
    /// Derived status (may report Finished).
    pub status: AuctionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_auction(end_height: u64) -> Auction {
        Auction::new(AccountId::new(), LedgerId::new(), vec![TokenId(1)], end_height)
    }

    #[test]
    fn fresh_auction_is_active() {
        let auction = active_auction(10);
        assert_eq!(auction.status_at(0), AuctionStatus::Active);
        assert_eq!(auction.high_bid, Decimal::ZERO);
        assert_eq!(auction.high_bidder, None);
    }

    #[test]
    fn finished_is_derived_at_end_height() {
        let auction = active_auction(10);
        assert_eq!(auction.status_at(9), AuctionStatus::Active);
        assert_eq!(auction.status_at(10), AuctionStatus::Finished);
        assert_eq!(auction.status_at(100), AuctionStatus::Finished);
        // Storage never changed
        assert_eq!(auction.status, AuctionStatus::Active);
    }

    #[test]
    fn stored_terminal_status_wins_over_height() {
        let mut auction = active_auction(10);
        auction.status = AuctionStatus::Cancelled;
        assert_eq!(auction.status_at(100), AuctionStatus::Cancelled);

        auction.status = AuctionStatus::Claimed;
        assert_eq!(auction.status_at(100), AuctionStatus::Claimed);
    }
}
