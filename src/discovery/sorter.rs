// src/discovery/sorter.rs

use crate::catalog::models::Artist;
use crate::discovery::price;
use crate::discovery::query::SortKey;

/// Orders the filtered results. `Featured` keeps catalog order;
/// price keys order by the parsed lower-bound price; `Rating` orders
/// by rating descending with missing ratings treated as 0.
///
/// Every branch uses the standard stable sort, so artists that
/// compare equal keep their relative catalog order and re-sorting an
/// already sorted list changes nothing.
pub fn sort_artists<'a>(mut artists: Vec<&'a Artist>, key: SortKey) -> Vec<&'a Artist> {
    match key {
        SortKey::Featured => {}
        SortKey::PriceLow => {
            artists.sort_by_key(|a| price::lower_bound(a.price_range.as_deref()));
        }
        SortKey::PriceHigh => {
            artists.sort_by(|a, b| {
                let pa = price::lower_bound(a.price_range.as_deref());
                let pb = price::lower_bound(b.price_range.as_deref());
                pb.cmp(&pa)
            });
        }
        SortKey::Rating => {
            artists.sort_by(|a, b| rating_or_zero(b).total_cmp(&rating_or_zero(a)));
        }
    }
    artists
}

fn rating_or_zero(artist: &Artist) -> f64 {
    artist.rating.unwrap_or(0.0)
}
