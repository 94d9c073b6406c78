// src/discovery/matcher.rs

use crate::catalog::models::Artist;
use crate::discovery::price;
use crate::discovery::query::BrowseQuery;

/// Decides whether one artist satisfies the whole query: free-text
/// search AND category AND location AND price bounds.
///
/// An empty query field is a wildcard. A field missing on the artist
/// record counts as an empty string, so it satisfies wildcards but
/// never a concrete filter.
pub fn matches(artist: &Artist, query: &BrowseQuery) -> bool {
    let category = artist.category.as_deref().unwrap_or("");
    let location = artist.location.as_deref().unwrap_or("");
    let price = price::lower_bound(artist.price_range.as_deref());
    let (min_price, max_price) = query.price_range();

    let search_ok = query.search.is_empty()
        || contains_ci(&artist.name, &query.search)
        || contains_ci(category, &query.search)
        || contains_ci(location, &query.search);

    let category_ok = query.category.is_empty() || category.eq_ignore_ascii_case(&query.category);

    let location_ok = query.location.is_empty() || contains_ci(location, &query.location);

    let price_ok = price >= min_price && price <= max_price;

    search_ok && category_ok && location_ok && price_ok
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
