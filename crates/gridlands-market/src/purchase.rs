//! Purchase (offer) records.
//!
//! An offer escrows funds against a specific token until the purchaser
//! cancels or the asset owner accepts. `Expired` is derived from the
//! wall clock; an expired, un-accepted offer stays Active in storage and
//! can still only be formally closed through cancellation.

use chrono::{DateTime, Utc};
use gridlands_types::{AccountId, LedgerId, PurchaseId, PurchaseStatus, TokenId};
use rust_decimal::Decimal;
use serde::Serialize;

/// One escrowed purchase offer.
#[derive(Debug, Clone)]
pub struct Purchase {
    pub(crate) purchaser: AccountId,
    pub(crate) asset_ledger: LedgerId,
    pub(crate) token_id: TokenId,
    /// Escrowed offer amount.
    pub(crate) amount: Decimal,
    pub(crate) expiry: DateTime<Utc>,
    /// Stored status: Active, Cancelled, or Accepted — never Expired.
    pub(crate) status: PurchaseStatus,
}

impl Purchase {
    pub(crate) fn new(
        purchaser: AccountId,
        asset_ledger: LedgerId,
        token_id: TokenId,
        amount: Decimal,
        expiry: DateTime<Utc>,
    ) -> Self {
        Self {
            purchaser,
            asset_ledger,
            token_id,
            amount,
            expiry,
            status: PurchaseStatus::Active,
        }
    }

    /// Whether the offer's window has passed at `now`.
    pub(crate) fn expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiry
    }

    /// Effective status at `now`: the stored status, except that a
    /// stored-Active offer past its expiry reads Expired.
    #[must_use]
    pub fn status_at(&self, now: DateTime<Utc>) -> PurchaseStatus {
        if self.status == PurchaseStatus::Active && self.expired_at(now) {
            PurchaseStatus::Expired
        } else {
            self.status
        }
    }
}

/// Read-only projection of a purchase record.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseInfo {
    pub id: PurchaseId,
    pub purchaser: AccountId,
    pub asset_ledger: LedgerId,
    pub token_id: TokenId,
    pub amount: Decimal,
    pub expiry: DateTime<Utc>,
    /// Derived status (may report Expired).
    pub status: PurchaseStatus,
}
