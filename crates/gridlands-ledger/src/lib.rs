//! # gridlands-ledger
//!
//! **Asset plane**: the generic ownership and funds primitives the registry
//! and marketplace build on.
//!
//! ## Architecture
//!
//! 1. **AssetLedger**: per-token ownership with an owner-or-approved
//!    authorization model and approval-clearing transfers
//! 2. **FundsLedger**: native-currency balance book with atomic transfers
//!
//! Neither component knows anything about land, auctions, or offers — the
//! registry mints into an `AssetLedger`, and the marketplace moves tokens
//! and funds through these surfaces only. Payable operations are modeled
//! as explicit `FundsLedger` transfers so refund amounts are observable.

pub mod assets;
pub mod funds;

pub use assets::AssetLedger;
pub use funds::FundsLedger;
