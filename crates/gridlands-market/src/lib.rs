//! # gridlands-market
//!
//! **Escrow plane**: the marketplace holding third-party assets and funds
//! while auctions run and purchase offers stand.
//!
//! ## Architecture
//!
//! 1. **Auction engine**: height-clocked concurrent-bid auctions over one
//!    or many tokens; outbid funds are refunded atomically with the new
//!    deposit
//! 2. **Purchase engine**: time-boxed escrowed offers on a single token,
//!    closed only by the purchaser (cancel) or the asset owner (accept)
//!
//! The marketplace is asset-type-agnostic: it touches tokens only through
//! the generic `AssetLedger` surface and records which ledger instance
//! each auction or offer was opened on. Escrowed value is released solely
//! through the enumerated state-machine transitions.
//!
//! ## Clocking
//!
//! "Finished" and "Expired" are derived, never stored: every mutating
//! operation and every read projection evaluates the same comparison
//! against the injected [`gridlands_types::ChainClock`], so the two views
//! cannot diverge.

pub mod auction;
pub mod marketplace;
pub mod purchase;

pub use auction::AuctionInfo;
pub use marketplace::Marketplace;
pub use purchase::PurchaseInfo;
