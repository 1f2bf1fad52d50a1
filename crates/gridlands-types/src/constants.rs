//! System-wide constants for Gridlands.

/// Maximum coordinates accepted by a single public claim.
pub const MAX_CHUNKS_PER_CLAIM: usize = 128;

/// Default inclusive world bound (`max(|x|,|z|) <= world_size`).
pub const DEFAULT_WORLD_SIZE: u64 = 2000;

/// Token id 0 is reserved and never assigned.
pub const RESERVED_TOKEN_ID: u64 = 0;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Gridlands";
