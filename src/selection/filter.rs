//! Product filter selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::SalesRecord;

/// Sentinel value meaning "no restriction".
pub const ALL: &str = "All";

/// Selection on one filter dimension: everything, or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    All,
    Only(String),
}

impl Default for Selector {
    fn default() -> Self {
        Selector::All
    }
}

impl Selector {
    /// Whether `value` passes this selector.
    #[inline]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }

    /// Whether this selector restricts anything.
    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        if value == ALL {
            Selector::All
        } else {
            Selector::Only(value.to_string())
        }
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        if value == ALL {
            Selector::All
        } else {
            Selector::Only(value)
        }
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        match selector {
            Selector::All => ALL.to_string(),
            Selector::Only(value) => value,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "{}", ALL),
            Selector::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Filter over the three product dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub category: Selector,
    #[serde(default)]
    pub sub_category: Selector,
    #[serde(default)]
    pub color_group: Selector,
}

impl FilterSelection {
    /// Selection with no restriction on any dimension.
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a selection from three values, where "All" lifts the restriction.
    pub fn new(
        category: impl Into<Selector>,
        sub_category: impl Into<Selector>,
        color_group: impl Into<Selector>,
    ) -> Self {
        Self {
            category: category.into(),
            sub_category: sub_category.into(),
            color_group: color_group.into(),
        }
    }

    /// Restrict the category.
    pub fn with_category(mut self, category: impl Into<Selector>) -> Self {
        self.category = category.into();
        self
    }

    /// Restrict the sub-category.
    pub fn with_sub_category(mut self, sub_category: impl Into<Selector>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    /// Restrict the color group.
    pub fn with_color_group(mut self, color_group: impl Into<Selector>) -> Self {
        self.color_group = color_group.into();
        self
    }

    /// Category and sub-category match. This is the scope of the reference
    /// distribution.
    #[inline]
    pub fn matches_product(&self, record: &SalesRecord) -> bool {
        self.category.matches(&record.category) && self.sub_category.matches(&record.sub_category)
    }

    /// Color group match alone.
    #[inline]
    pub fn matches_color(&self, record: &SalesRecord) -> bool {
        self.color_group.matches(&record.color_group)
    }

    /// All three dimensions match.
    #[inline]
    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.matches_product(record) && self.matches_color(record)
    }
}
