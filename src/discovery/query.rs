// src/discovery/query.rs

/// How the browse page orders its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog order, untouched.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    /// Parses the `sort` query parameter. Anything unrecognized falls
    /// back to `Featured` rather than erroring.
    pub fn from_param(value: &str) -> Self {
        match value {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            _ => SortKey::Featured,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
        }
    }
}

/// The active browse query. Owned by the caller (the page handler);
/// the engine only reads it.
///
/// Every combination of field values is valid. `price_range` keeps
/// `min <= max` by construction: the field is private and the setter
/// swaps reversed bounds instead of rejecting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseQuery {
    /// Case-insensitive substring match against name/category/location.
    pub search: String,
    /// Exact category match; empty = any category.
    pub category: String,
    /// Substring location match; empty = any location.
    pub location: String,
    pub sort: SortKey,
    price_range: (u64, u64),
}

impl Default for BrowseQuery {
    fn default() -> Self {
        BrowseQuery {
            search: String::new(),
            category: String::new(),
            location: String::new(),
            sort: SortKey::Featured,
            price_range: (0, u64::MAX),
        }
    }
}

impl BrowseQuery {
    /// Inclusive `(min, max)` price bounds, always `min <= max`.
    pub fn price_range(&self) -> (u64, u64) {
        self.price_range
    }

    /// Sets the price bounds. Reversed bounds are swapped, not
    /// rejected: both values the caller gave are kept.
    pub fn set_price_range(&mut self, min: u64, max: u64) {
        self.price_range = if min <= max { (min, max) } else { (max, min) };
    }

    /// Back to a fresh default query, discarding all edits.
    pub fn reset(&mut self) {
        *self = BrowseQuery::default();
    }
}
