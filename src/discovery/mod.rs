// src/discovery/mod.rs
//
// The discovery engine: filter -> sort -> summarize over an immutable
// catalog snapshot. Pure and synchronous; malformed records degrade to
// defaults (price 0, empty strings, rating 0) instead of erroring, so
// nothing in here can take a page down.

pub mod matcher;
pub mod price;
pub mod query;
pub mod sorter;
pub mod stats;

pub use query::{BrowseQuery, SortKey};
pub use stats::BrowseStats;

use crate::catalog::models::Artist;

/// One evaluated browse query: the ordered results plus their summary.
#[derive(Debug)]
pub struct BrowseResult<'a> {
    pub artists: Vec<&'a Artist>,
    pub stats: BrowseStats,
}

/// Runs the full pipeline over the catalog. Filtering preserves
/// catalog order, which is what the `featured` sort then relies on.
pub fn evaluate<'a>(catalog: &'a [Artist], query: &BrowseQuery) -> BrowseResult<'a> {
    let filtered: Vec<&Artist> = catalog
        .iter()
        .filter(|artist| matcher::matches(artist, query))
        .collect();

    let artists = sorter::sort_artists(filtered, query.sort);
    let stats = stats::summarize(&artists);

    BrowseResult { artists, stats }
}
