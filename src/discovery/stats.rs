// src/discovery/stats.rs

use crate::catalog::models::Artist;
use crate::discovery::price;
use std::collections::HashSet;

/// Summary line shown above the browse results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseStats {
    pub count: usize,
    /// Number of distinct location strings. Artists with no location
    /// all share one "unknown" bucket.
    pub distinct_locations: usize,
    /// Cheapest lower-bound price in the result set; `None` when the
    /// set is empty.
    pub min_price: Option<u64>,
}

pub fn summarize(artists: &[&Artist]) -> BrowseStats {
    let mut locations: HashSet<&str> = HashSet::new();
    for artist in artists {
        locations.insert(artist.location.as_deref().unwrap_or(""));
    }

    BrowseStats {
        count: artists.len(),
        distinct_locations: locations.len(),
        min_price: artists
            .iter()
            .map(|a| price::lower_bound(a.price_range.as_deref()))
            .min(),
    }
}
