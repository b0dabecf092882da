//! Filter option enumeration.

use std::collections::BTreeSet;

use serde::Serialize;

use super::filter::{FilterSelection, Selector, ALL};
use crate::core::types::SalesRecord;

/// Values available for each filter dimension, "All" first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub sub_categories: Vec<String>,
    pub color_groups: Vec<String>,
}

impl FilterOptions {
    /// Distinct values among records with positive sales, sorted ascending,
    /// prefixed with the "All" sentinel.
    pub fn from_records(records: &[SalesRecord]) -> Self {
        let mut categories = BTreeSet::new();
        let mut sub_categories = BTreeSet::new();
        let mut color_groups = BTreeSet::new();

        for record in records.iter().filter(|r| r.quantity_sold > 0.0) {
            categories.insert(record.category.as_str());
            sub_categories.insert(record.sub_category.as_str());
            color_groups.insert(record.color_group.as_str());
        }

        Self {
            categories: with_all(categories),
            sub_categories: with_all(sub_categories),
            color_groups: with_all(color_groups),
        }
    }

    /// Whether every restricted dimension of `filter` is a listed option.
    pub fn contains(&self, filter: &FilterSelection) -> bool {
        listed(&self.categories, &filter.category)
            && listed(&self.sub_categories, &filter.sub_category)
            && listed(&self.color_groups, &filter.color_group)
    }
}

fn with_all(values: BTreeSet<&str>) -> Vec<String> {
    let mut out = Vec::with_capacity(values.len() + 1);
    out.push(ALL.to_string());
    // A literal "All" value would collide with the sentinel.
    out.extend(values.into_iter().filter(|v| *v != ALL).map(str::to_string));
    out
}

fn listed(options: &[String], selector: &Selector) -> bool {
    match selector {
        Selector::All => true,
        Selector::Only(value) => options.iter().skip(1).any(|o| o == value),
    }
}
