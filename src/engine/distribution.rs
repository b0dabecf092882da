//! Size-bucket distributions and single-pass aggregation.

use std::collections::BTreeMap;

use crate::core::types::{Quantity, SalesRecord, SizeCode};
use crate::selection::FilterSelection;

/// Quantity accumulated for one size, with its provenance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bucket {
    pub quantity: Quantity,
    /// Set when any part of `quantity` was estimated rather than observed.
    pub simulated: bool,
}

/// Quantities keyed by size code, iterated in ascending size order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeDistribution {
    buckets: BTreeMap<SizeCode, Bucket>,
}

impl SizeDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observed quantity to a size.
    #[inline]
    pub fn add(&mut self, size: SizeCode, quantity: Quantity) {
        self.buckets.entry(size).or_default().quantity += quantity;
    }

    /// Add a quantity carrying the given provenance flag.
    #[inline]
    pub fn add_bucket(&mut self, size: SizeCode, quantity: Quantity, simulated: bool) {
        let bucket = self.buckets.entry(size).or_default();
        bucket.quantity += quantity;
        bucket.simulated |= simulated;
    }

    /// Replace a size with an estimated quantity.
    pub fn insert_simulated(&mut self, size: SizeCode, quantity: Quantity) {
        self.buckets.insert(
            size,
            Bucket {
                quantity,
                simulated: true,
            },
        );
    }

    /// Quantity for a size, zero when absent.
    #[inline]
    pub fn quantity(&self, size: SizeCode) -> Quantity {
        self.buckets.get(&size).map_or(0.0, |b| b.quantity)
    }

    /// Bucket for a size.
    #[inline]
    pub fn get(&self, size: SizeCode) -> Option<&Bucket> {
        self.buckets.get(&size)
    }

    /// Sum of all quantities.
    pub fn total(&self) -> Quantity {
        self.buckets.values().map(|b| b.quantity).sum()
    }

    /// Number of size buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate buckets in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (SizeCode, &Bucket)> + '_ {
        self.buckets.iter().map(|(size, bucket)| (*size, bucket))
    }

    /// Ascending size codes.
    pub fn sizes(&self) -> Vec<SizeCode> {
        self.buckets.keys().copied().collect()
    }

    /// Drop every bucket outside `[min_size, max_size]`.
    pub fn retain_range(&mut self, min_size: SizeCode, max_size: SizeCode) {
        self.buckets
            .retain(|size, _| *size >= min_size && *size <= max_size);
    }
}

impl FromIterator<(SizeCode, Quantity)> for SizeDistribution {
    fn from_iter<I: IntoIterator<Item = (SizeCode, Quantity)>>(iter: I) -> Self {
        let mut dist = SizeDistribution::new();
        for (size, quantity) in iter {
            dist.add(size, quantity);
        }
        dist
    }
}

/// Reference and color-filtered distributions for one filter selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Sales by size over records matching category and sub-category.
    pub reference: SizeDistribution,
    /// Sales by size over records that also match the color group.
    pub actual: SizeDistribution,
    /// Number of records contributing to `reference`.
    pub reference_records: usize,
    /// Number of records contributing to `actual`.
    pub actual_records: usize,
}

impl Aggregation {
    /// Build both distributions in a single pass over `records`.
    pub fn from_records(records: &[SalesRecord], filter: &FilterSelection) -> Self {
        let mut agg = Self::default();

        for record in records {
            if !filter.matches_product(record) {
                continue;
            }
            agg.reference.add(record.size_code, record.quantity_sold);
            agg.reference_records += 1;

            if filter.matches_color(record) {
                agg.actual.add(record.size_code, record.quantity_sold);
                agg.actual_records += 1;
            }
        }

        agg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<SalesRecord> {
        vec![
            SalesRecord::new("Shoes", "Sneakers", "Black", 240, 100.0),
            SalesRecord::new("Shoes", "Sneakers", "Black", 240, 50.0),
            SalesRecord::new("Shoes", "Sneakers", "White", 230, 40.0),
            SalesRecord::new("Shoes", "Sneakers", "White", 240, 10.0),
            SalesRecord::new("Shoes", "Boots", "Black", 240, 999.0),
        ]
    }

    #[test]
    fn test_duplicate_keys_are_summed() {
        let filter = FilterSelection::new("Shoes", "Sneakers", "Black");
        let agg = Aggregation::from_records(&records(), &filter);
        assert!((agg.actual.quantity(240) - 150.0).abs() < 1e-10);
        assert_eq!(agg.actual_records, 2);
    }

    #[test]
    fn test_reference_ignores_color_filter() {
        let filter = FilterSelection::new("Shoes", "Sneakers", "Black");
        let agg = Aggregation::from_records(&records(), &filter);

        assert!((agg.reference.quantity(230) - 40.0).abs() < 1e-10);
        assert!((agg.reference.quantity(240) - 160.0).abs() < 1e-10);
        assert!((agg.reference.total() - 200.0).abs() < 1e-10);
        assert_eq!(agg.reference_records, 4);
        assert!(agg.actual.get(230).is_none());
    }

    #[test]
    fn test_retain_range() {
        let mut dist: SizeDistribution = vec![(220, 1.0), (230, 2.0), (240, 3.0), (250, 4.0)]
            .into_iter()
            .collect();
        dist.retain_range(230, 240);
        assert_eq!(dist.sizes(), vec![230, 240]);
        assert!((dist.total() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_add_bucket_keeps_simulated_flag() {
        let mut dist = SizeDistribution::new();
        dist.add_bucket(230, 10.0, false);
        dist.add_bucket(230, 5.0, true);
        dist.add_bucket(230, 1.0, false);
        let bucket = dist.get(230).unwrap();
        assert!((bucket.quantity - 16.0).abs() < 1e-10);
        assert!(bucket.simulated);
    }
}
