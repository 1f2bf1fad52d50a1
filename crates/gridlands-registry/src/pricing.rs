//! Distance-tiered land pricing.
//!
//! The price of a parcel is a piecewise-constant function of its Chebyshev
//! distance from the origin: the table is scanned in array order and the
//! **first** tier whose threshold is `>= distance` supplies the price.
//! The table is stored exactly as supplied — ascending thresholds are the
//! caller's obligation, and an unsorted table is undefined caller error.

use gridlands_types::{GridlandsError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One pricing tier: all parcels up to `distance` (that earlier tiers did
/// not already cover) cost `price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    pub distance: u64,
    pub price: Decimal,
}

/// The ordered tier table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable(Vec<PriceTier>);

impl PriceTable {
    /// An empty table — every lookup fails until prices are set.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a table from the parallel `prices` / `distances` arrays of
    /// the administrative interface.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the arrays differ in length.
    pub fn from_parallel(prices: &[Decimal], distances: &[u64]) -> Result<Self> {
        if prices.len() != distances.len() {
            return Err(GridlandsError::LengthMismatch {
                left: prices.len(),
                right: distances.len(),
            });
        }
        Ok(Self(
            distances
                .iter()
                .zip(prices)
                .map(|(&distance, &price)| PriceTier { distance, price })
                .collect(),
        ))
    }

    /// Price for a parcel at `distance`: the first tier in array order
    /// with `tier.distance >= distance`, or `None` if no tier covers it.
    #[must_use]
    pub fn price_for(&self, distance: u64) -> Option<Decimal> {
        self.0
            .iter()
            .find(|tier| tier.distance >= distance)
            .map(|tier| tier.price)
    }

    #[must_use]
    pub fn tiers(&self) -> &[PriceTier] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The production tier table exercised throughout the test suite.
    fn standard_table() -> PriceTable {
        let prices: Vec<Decimal> = [1_000_000_000_000_000_000_i64, 1_000_000, 10_000, 100, 10, 1]
            .iter()
            .map(|&p| Decimal::from(p))
            .collect();
        let distances = [10, 100, 500, 1000, 2000, 5000];
        PriceTable::from_parallel(&prices, &distances).unwrap()
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = PriceTable::from_parallel(&[Decimal::ONE], &[10, 20]).unwrap_err();
        assert!(matches!(err, GridlandsError::LengthMismatch { left: 1, right: 2 }));
    }

    #[test]
    fn first_covering_tier_wins() {
        let table = standard_table();
        // Distance 0 hits the first tier
        assert_eq!(
            table.price_for(0).unwrap(),
            Decimal::from(1_000_000_000_000_000_000_i64)
        );
        // Distance 120: first threshold >= 120 is 500
        assert_eq!(table.price_for(120).unwrap(), Decimal::from(10_000));
        // Distance 1200: first threshold >= 1200 is 2000
        assert_eq!(table.price_for(1200).unwrap(), Decimal::from(10));
        // Threshold boundary is inclusive
        assert_eq!(table.price_for(10).unwrap(), Decimal::from(1_000_000_000_000_000_000_i64));
        assert_eq!(table.price_for(11).unwrap(), Decimal::from(1_000_000));
    }

    #[test]
    fn beyond_last_tier_is_unpriced() {
        let table = standard_table();
        assert_eq!(table.price_for(5000).unwrap(), Decimal::ONE);
        assert_eq!(table.price_for(5001), None);
    }

    #[test]
    fn empty_table_prices_nothing() {
        assert_eq!(PriceTable::empty().price_for(0), None);
        assert!(PriceTable::empty().is_empty());
    }

    #[test]
    fn ascending_table_prices_are_non_increasing_in_distance() {
        let table = standard_table();
        let samples = [0u64, 5, 10, 50, 100, 300, 500, 900, 1000, 1500, 2000, 4999, 5000];
        let mut last = table.price_for(0).unwrap();
        for d in samples {
            let p = table.price_for(d).unwrap();
            assert!(p <= last, "price rose from {last} to {p} at distance {d}");
            last = p;
        }
    }

    #[test]
    fn serde_roundtrip() {
        let table = standard_table();
        let json = serde_json::to_string(&table).unwrap();
        let back: PriceTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
