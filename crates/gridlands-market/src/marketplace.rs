//! The escrow marketplace.
//!
//! Holds auctioned tokens and bid/offer funds on behalf of participants.
//! Every operation is one atomic `&mut self` call under the external
//! single-writer execution model; escrowed value is released only through
//! the transitions below.
//!
//! Check ordering inside each operation matches the original on-ledger
//! contract's observable error order and is covered by tests.

use chrono::{DateTime, Duration, Utc};
use gridlands_ledger::{AssetLedger, FundsLedger};
use gridlands_types::{
    AccountId, AuctionId, ChainClock, GridlandsError, PurchaseId, Result, TokenId,
};
use rust_decimal::Decimal;

use crate::auction::{Auction, AuctionInfo};
use crate::purchase::{Purchase, PurchaseInfo};

/// The escrow marketplace: auction engine plus purchase engine.
pub struct Marketplace {
    /// The marketplace's own identity — owner of escrowed tokens and
    /// holder of escrowed funds for the duration of Active records.
    account: AccountId,
    auctions: Vec<Auction>,
    purchases: Vec<Purchase>,
}

impl Marketplace {
    /// Create an empty marketplace with a fresh escrow account.
    #[must_use]
    pub fn new() -> Self {
        Self {
            account: AccountId::new(),
            auctions: Vec::new(),
            purchases: Vec::new(),
        }
    }

    /// The marketplace's escrow account.
    #[must_use]
    pub fn account(&self) -> AccountId {
        self.account
    }

    fn auction(&self, id: AuctionId) -> Result<&Auction> {
        self.auctions
            .get(id.0 as usize)
            .ok_or(GridlandsError::InvalidAuctionId(id))
    }

    fn purchase(&self, id: PurchaseId) -> Result<&Purchase> {
        self.purchases
            .get(id.0 as usize)
            .ok_or(GridlandsError::InvalidPurchaseId(id))
    }

    fn check_ledger(expected: gridlands_types::LedgerId, assets: &AssetLedger) -> Result<()> {
        if assets.id() == expected {
            Ok(())
        } else {
            Err(GridlandsError::LedgerMismatch {
                expected,
                got: assets.id(),
            })
        }
    }

    // =====================================================================
    // Auction engine
    // =====================================================================

    /// Open an auction over a single token. See [`Self::create_auction_multi`].
    pub fn create_auction(
        &mut self,
        caller: AccountId,
        assets: &mut AssetLedger,
        token: TokenId,
        duration_heights: u64,
        clock: &impl ChainClock,
    ) -> Result<AuctionId> {
        self.create_auction_multi(caller, assets, &[token], duration_heights, clock)
    }

    /// Open an auction over one or more tokens, pulling them all into
    /// escrow. The caller must be owner or approved delegate of every
    /// token; authorization is checked for the whole list before any
    /// token moves.
    ///
    /// # Errors
    /// `EmptyAssetList`, and the ledger's `TokenNotFound`/`NotAuthorized`.
    pub fn create_auction_multi(
        &mut self,
        caller: AccountId,
        assets: &mut AssetLedger,
        tokens: &[TokenId],
        duration_heights: u64,
        clock: &impl ChainClock,
    ) -> Result<AuctionId> {
        if tokens.is_empty() {
            return Err(GridlandsError::EmptyAssetList);
        }
        // Pre-check the whole list; a duplicate entry would no longer be
        // movable after its first escrow, so it fails the batch here.
        for (i, &token) in tokens.iter().enumerate() {
            if tokens[..i].contains(&token) {
                return Err(GridlandsError::NotAuthorized { token });
            }
            assets.require_authorized(caller, token)?;
        }
        for &token in tokens {
            assets.transfer(caller, self.account, token)?;
        }

        let id = AuctionId(self.auctions.len() as u64);
        // Saturate on absurd durations rather than wrapping to an
        // instantly-finished auction.
        let end_height = clock.height().saturating_add(duration_heights);
        self.auctions.push(Auction::new(
            caller,
            assets.id(),
            tokens.to_vec(),
            end_height,
        ));
        tracing::info!(%id, %caller, end_height, tokens = tokens.len(), "auction created");
        Ok(id)
    }

    /// Place a bid, escrowing the bid funds. The previous high bidder is
    /// refunded exactly their bid in the same atomic operation — there is
    /// no state where both bids sit unrefunded.
    ///
    /// # Errors
    /// `InvalidAuctionId`; `AuctionFinished` once the end height is
    /// reached or the record is closed; `BidTooLow` unless
    /// `amount > high_bid` (the first bid must exceed zero);
    /// `InsufficientBalance` if the caller cannot cover `amount`.
    pub fn bid(
        &mut self,
        caller: AccountId,
        id: AuctionId,
        amount: Decimal,
        clock: &impl ChainClock,
        funds: &mut FundsLedger,
    ) -> Result<()> {
        let market = self.account;
        let auction = self.auction(id)?;
        if auction.status.is_terminal() || auction.ended_at(clock.height()) {
            return Err(GridlandsError::AuctionFinished(id));
        }
        if amount <= auction.high_bid {
            return Err(GridlandsError::BidTooLow {
                bid: amount,
                high_bid: auction.high_bid,
            });
        }

        // Escrow the new bid before releasing the old one, so the refund
        // below can never leave the escrow account short.
        funds.transfer(caller, market, amount)?;

        let auction = &mut self.auctions[id.0 as usize];
        let previous = auction.high_bidder.replace(caller);
        let previous_bid = std::mem::replace(&mut auction.high_bid, amount);
        if let Some(outbid) = previous {
            funds.transfer(market, outbid, previous_bid)?;
            tracing::debug!(%id, %outbid, %previous_bid, "outbid refunded");
        }
        Ok(())
    }

    /// Cancel an auction, returning the escrowed tokens to the creator
    /// and any standing bid to its bidder.
    ///
    /// Permitted whenever the stored status is still Active — passing the
    /// end height does not block the creator, only an explicit close does.
    ///
    /// # Errors
    /// `InvalidAuctionId`, `NotCreator`, `AuctionFinished` (already
    /// cancelled or claimed), `LedgerMismatch`.
    pub fn cancel_auction(
        &mut self,
        caller: AccountId,
        id: AuctionId,
        assets: &mut AssetLedger,
        funds: &mut FundsLedger,
    ) -> Result<()> {
        let market = self.account;
        let auction = self.auction(id)?;
        if caller != auction.creator {
            return Err(GridlandsError::NotCreator);
        }
        if auction.status.is_terminal() {
            return Err(GridlandsError::AuctionFinished(id));
        }
        Self::check_ledger(auction.asset_ledger, assets)?;

        let auction = &mut self.auctions[id.0 as usize];
        for &token in &auction.token_ids {
            assets.transfer(market, auction.creator, token)?;
        }
        if let Some(bidder) = auction.high_bidder.take() {
            let refund = std::mem::take(&mut auction.high_bid);
            funds.transfer(market, bidder, refund)?;
        }
        auction.status = gridlands_types::AuctionStatus::Cancelled;
        tracing::info!(%id, "auction cancelled");
        Ok(())
    }

    /// Claim a finished auction: the winner takes the escrowed tokens and
    /// the creator is paid the winning bid. Exactly once.
    ///
    /// # Errors
    /// `InvalidAuctionId`; `AuctionNotFinished` before the end height;
    /// `AuctionFinished` if already claimed or cancelled; `NotWinner`
    /// unless the caller is the recorded high bidder (an auction with no
    /// bids has no winner); `LedgerMismatch`.
    pub fn claim(
        &mut self,
        caller: AccountId,
        id: AuctionId,
        clock: &impl ChainClock,
        assets: &mut AssetLedger,
        funds: &mut FundsLedger,
    ) -> Result<()> {
        let market = self.account;
        let auction = self.auction(id)?;
        if !auction.ended_at(clock.height()) {
            return Err(GridlandsError::AuctionNotFinished(id));
        }
        if auction.status.is_terminal() {
            return Err(GridlandsError::AuctionFinished(id));
        }
        if auction.high_bidder != Some(caller) {
            return Err(GridlandsError::NotWinner);
        }
        Self::check_ledger(auction.asset_ledger, assets)?;

        let auction = &mut self.auctions[id.0 as usize];
        funds.transfer(market, auction.creator, auction.high_bid)?;
        for &token in &auction.token_ids {
            assets.transfer(market, caller, token)?;
        }
        auction.status = gridlands_types::AuctionStatus::Claimed;
        tracing::info!(%id, winner = %caller, high_bid = %auction.high_bid, "auction claimed");
        Ok(())
    }

    /// Read-only projection of an auction, with the status derived
    /// against the current height.
    ///
    /// # Errors
    /// `InvalidAuctionId`.
    pub fn auction_info(&self, id: AuctionId, clock: &impl ChainClock) -> Result<AuctionInfo> {
        let auction = self.auction(id)?;
        Ok(AuctionInfo {
            id,
            creator: auction.creator,
            asset_ledger: auction.asset_ledger,
            token_ids: auction.token_ids.clone(),
            end_height: auction.end_height,
            high_bidder: auction.high_bidder,
            high_bid: auction.high_bid,
            status: auction.status_at(clock.height()),
        })
    }

    /// Number of auctions ever created.
    #[must_use]
    pub fn auction_count(&self) -> u64 {
        self.auctions.len() as u64
    }

    // =====================================================================
    // Purchase engine
    // =====================================================================

    /// Open a standing offer on a token, escrowing `sent` as the offer
    /// amount. Any caller may open an offer on any existing token,
    /// including one they do not own.
    ///
    /// # Errors
    /// `TokenNotFound` if the token was never minted;
    /// `InsufficientBalance` if the caller cannot cover `sent`.
    pub fn create_purchase(
        &mut self,
        caller: AccountId,
        assets: &AssetLedger,
        token: TokenId,
        duration: Duration,
        sent: Decimal,
        clock: &impl ChainClock,
        funds: &mut FundsLedger,
    ) -> Result<PurchaseId> {
        // Existence check only — ownership is irrelevant until acceptance.
        assets.owner_of(token)?;
        funds.transfer(caller, self.account, sent)?;

        let id = PurchaseId(self.purchases.len() as u64);
        let expiry = clock
            .now()
            .checked_add_signed(duration)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.purchases.push(Purchase::new(
            caller,
            assets.id(),
            token,
            sent,
            expiry,
        ));
        tracing::info!(%id, %caller, %token, amount = %sent, "purchase offer created");
        Ok(id)
    }

    /// Withdraw an offer and reclaim the escrowed funds. Permitted at any
    /// time the record is still stored-Active, expired or not.
    ///
    /// # Errors
    /// `InvalidPurchaseId`, `NotPurchaser`, `PurchaseFinished` (already
    /// cancelled or accepted).
    pub fn cancel_purchase(
        &mut self,
        caller: AccountId,
        id: PurchaseId,
        funds: &mut FundsLedger,
    ) -> Result<()> {
        let market = self.account;
        let purchase = self.purchase(id)?;
        if caller != purchase.purchaser {
            return Err(GridlandsError::NotPurchaser);
        }
        if purchase.status.is_terminal() {
            return Err(GridlandsError::PurchaseFinished(id));
        }

        let purchase = &mut self.purchases[id.0 as usize];
        funds.transfer(market, purchase.purchaser, purchase.amount)?;
        purchase.status = gridlands_types::PurchaseStatus::Cancelled;
        tracing::info!(%id, "purchase cancelled");
        Ok(())
    }

    /// Accept an offer as the token's current owner (or approved
    /// delegate): the token goes to the purchaser, the escrowed amount to
    /// the caller.
    ///
    /// # Errors
    /// `InvalidPurchaseId`; `PurchaseExpired` once `now >= expiry`
    /// (checked before the terminal check — a closed-and-expired record
    /// reports expiry); `PurchaseFinished` if already cancelled or
    /// accepted; `LedgerMismatch`; the ledger's `NotAuthorized` if the
    /// caller cannot move the token.
    pub fn accept(
        &mut self,
        caller: AccountId,
        id: PurchaseId,
        clock: &impl ChainClock,
        assets: &mut AssetLedger,
        funds: &mut FundsLedger,
    ) -> Result<()> {
        let market = self.account;
        let purchase = self.purchase(id)?;
        if purchase.expired_at(clock.now()) {
            return Err(GridlandsError::PurchaseExpired(id));
        }
        if purchase.status.is_terminal() {
            return Err(GridlandsError::PurchaseFinished(id));
        }
        Self::check_ledger(purchase.asset_ledger, assets)?;

        let purchase = &mut self.purchases[id.0 as usize];
        assets.transfer(caller, purchase.purchaser, purchase.token_id)?;
        funds.transfer(market, caller, purchase.amount)?;
        purchase.status = gridlands_types::PurchaseStatus::Accepted;
        tracing::info!(%id, seller = %caller, amount = %purchase.amount, "purchase accepted");
        Ok(())
    }

    /// Read-only projection of a purchase, with the status derived
    /// against the current wall clock.
    ///
    /// # Errors
    /// `InvalidPurchaseId`.
    pub fn purchase_info(&self, id: PurchaseId, clock: &impl ChainClock) -> Result<PurchaseInfo> {
        let purchase = self.purchase(id)?;
        Ok(PurchaseInfo {
            id,
            purchaser: purchase.purchaser,
            asset_ledger: purchase.asset_ledger,
            token_id: purchase.token_id,
            amount: purchase.amount,
            expiry: purchase.expiry,
            status: purchase.status_at(clock.now()),
        })
    }

    /// Number of purchase offers ever created.
    #[must_use]
    pub fn purchase_count(&self) -> u64 {
        self.purchases.len() as u64
    }
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::new()
    }
}
