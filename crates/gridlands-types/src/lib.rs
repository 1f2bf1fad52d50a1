//! # gridlands-types
//!
//! Shared types, errors, and constants for the **Gridlands** land registry
//! and escrow marketplace.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`LedgerId`], [`TokenId`], [`AuctionId`], [`PurchaseId`]
//! - **Coordinates**: [`ChunkCoord`] with Chebyshev distance and world bound
//! - **Lifecycle statuses**: [`AuctionStatus`], [`PurchaseStatus`]
//! - **Clock interface**: [`ChainClock`] (external height/time signal), [`SimClock`]
//! - **Errors**: [`GridlandsError`] with `GL_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod clock;
pub mod constants;
pub mod coord;
pub mod error;
pub mod ids;
pub mod status;

// Re-export all primary types at crate root for ergonomic imports:
//   use gridlands_types::{AccountId, ChunkCoord, AuctionStatus, ...};

pub use clock::*;
pub use coord::*;
pub use error::*;
pub use ids::*;
pub use status::*;

// Constants are accessed via `gridlands_types::constants::FOO`
// (not re-exported to avoid name collisions).
