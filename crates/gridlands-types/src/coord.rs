//! Parcel coordinates.
//!
//! The world is a square grid of discrete (x, z) cells centered on the
//! origin. A coordinate is inside the world iff its Chebyshev distance
//! from the origin is at most the registry's world size (inclusive).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A signed (x, z) grid cell — the identifier of one land parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub x: i64,
    pub z: i64,
}

impl ChunkCoord {
    #[must_use]
    pub fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }

    /// Chebyshev distance from the origin: `max(|x|, |z|)`.
    #[must_use]
    pub fn chebyshev(&self) -> u64 {
        self.x.unsigned_abs().max(self.z.unsigned_abs())
    }

    /// Whether the coordinate lies within the inclusive world bound.
    #[must_use]
    pub fn in_world(&self, world_size: u64) -> bool {
        self.chebyshev() <= world_size
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i64, i64)> for ChunkCoord {
    fn from((x, z): (i64, i64)) -> Self {
        Self { x, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_is_max_of_abs() {
        assert_eq!(ChunkCoord::new(0, 0).chebyshev(), 0);
        assert_eq!(ChunkCoord::new(3, -5).chebyshev(), 5);
        assert_eq!(ChunkCoord::new(-120, 100).chebyshev(), 120);
        assert_eq!(ChunkCoord::new(i64::MIN, 0).chebyshev(), 1 << 63);
    }

    #[test]
    fn world_bound_is_inclusive() {
        let edge = ChunkCoord::new(2000, -2000);
        assert!(edge.in_world(2000));
        assert!(!edge.in_world(1999));
        assert!(!ChunkCoord::new(-2001, 0).in_world(2000));
    }

    #[test]
    fn display_format() {
        assert_eq!(ChunkCoord::new(-3, 4).to_string(), "(-3, 4)");
    }

    #[test]
    fn serde_roundtrip() {
        let coord = ChunkCoord::new(-120, 150);
        let json = serde_json::to_string(&coord).unwrap();
        let back: ChunkCoord = serde_json::from_str(&json).unwrap();
        assert_eq!(coord, back);
    }
}
