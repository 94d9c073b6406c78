// templates/pages/artists.rs

use crate::catalog::models::Category;
use crate::discovery::{BrowseQuery, BrowseResult};
use crate::templates::{
    components::{artist_card, filter_block},
    desktop_layout,
};
use maud::{html, Markup};

pub fn artists_page(
    query: &BrowseQuery,
    result: &BrowseResult,
    categories: &[Category],
) -> Markup {
    desktop_layout(
        "Browse Artists",
        html! {
            main class="container" {
                h1 { "Browse Artists" }

                (filter_block(query, categories))

                (stats_line(result))

                @if result.artists.is_empty() {
                    p { "No artists found." }
                } @else {
                    div class="grid" {
                        @for artist in &result.artists {
                            (artist_card(artist))
                        }
                    }
                }
            }
        },
    )
}

fn stats_line(result: &BrowseResult) -> Markup {
    let stats = &result.stats;
    html! {
        p class="stats-line" {
            (stats.count)
            @if stats.count == 1 { " artist" } @else { " artists" }
            " · "
            (stats.distinct_locations)
            @if stats.distinct_locations == 1 { " location" } @else { " locations" }
            @if let Some(min) = stats.min_price {
                " · from $" (min)
            }
        }
    }
}
