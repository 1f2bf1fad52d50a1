//! # gridlands-registry
//!
//! **Registry plane**: the spatial land registry.
//!
//! ## Architecture
//!
//! 1. **PriceTable**: ordered (distance, price) tiers; first tier whose
//!    threshold covers the Chebyshev distance wins
//! 2. **LandRegistry**: the coordinate↔token bijection, world bound,
//!    claim gate, and minting — backed by an owned `AssetLedger`
//!
//! ## Invariants
//!
//! - Every minted token has exactly one coordinate and vice versa
//! - Token ids are 1-based, sequential, and never reused; id 0 is reserved
//! - Batch operations are all-or-nothing: one bad coordinate aborts all
//! - Minted count is monotonically non-decreasing

pub mod pricing;
pub mod registry;

pub use pricing::{PriceTable, PriceTier};
pub use registry::LandRegistry;
