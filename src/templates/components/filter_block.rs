use crate::catalog::models::Category;
use crate::discovery::{BrowseQuery, SortKey};
use maud::{html, Markup};

/// The filter/sort controls above the artist grid. A plain GET form:
/// the whole query lives in the URL, so filtered views are linkable.
pub fn filter_block(query: &BrowseQuery, categories: &[Category]) -> Markup {
    let (min_price, max_price) = query.price_range();

    html! {
        form class="filter-block" action="/artists" method="get" {
            div {
                label for="search" { "Search" }
                input id="search" name="search" type="text"
                    value=(query.search) placeholder="Name, category or city";
            }
            div {
                label for="category" { "Category" }
                select id="category" name="category" {
                    option value="" selected[query.category.is_empty()] { "All" }
                    @for cat in categories {
                        option value=(cat.name)
                            selected[cat.name.eq_ignore_ascii_case(&query.category)] {
                            (cat.name)
                        }
                    }
                }
            }
            div {
                label for="location" { "Location" }
                input id="location" name="location" type="text"
                    value=(query.location) placeholder="Enter city";
            }
            div {
                label for="min_price" { "Min price" }
                input id="min_price" name="min_price" type="number" min="0"
                    value=(if min_price > 0 { min_price.to_string() } else { String::new() });
            }
            div {
                label for="max_price" { "Max price" }
                input id="max_price" name="max_price" type="number" min="0"
                    value=(if max_price < u64::MAX { max_price.to_string() } else { String::new() });
            }
            div {
                label for="sort" { "Sort by" }
                select id="sort" name="sort" {
                    @for (key, label) in [
                        (SortKey::Featured, "Featured"),
                        (SortKey::PriceLow, "Price: low to high"),
                        (SortKey::PriceHigh, "Price: high to low"),
                        (SortKey::Rating, "Rating"),
                    ] {
                        option value=(key.as_param()) selected[query.sort == key] { (label) }
                    }
                }
            }
            div {
                button type="submit" { "Apply" }
                " "
                a href="/artists" { "Reset" }
            }
        }
    }
}
