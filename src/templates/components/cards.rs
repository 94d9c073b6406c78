use crate::catalog::models::{Artist, Category};
use maud::{html, Markup};

pub fn artist_card(artist: &Artist) -> Markup {
    html! {
        div class="card" {
            h3 { (artist.name) }
            p class="muted" { "Category: " (artist.category.as_deref().unwrap_or("—")) }
            p class="muted" { "Price: " (artist.price_range.as_deref().unwrap_or("On request")) }
            p class="muted" { "Location: " (artist.location.as_deref().unwrap_or("—")) }
            @if let Some(rating) = artist.rating {
                p class="muted" { "★ " (format!("{rating:.1}")) }
            }
            button type="button" { "Ask for Quote" }
        }
    }
}

pub fn category_card(category: &Category) -> Markup {
    let href = format!(
        "/artists?{}",
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("category", &category.name)
            .finish()
    );

    html! {
        div class="card" {
            h3 { (category.name) }
            p class="muted" { (category.description) }
            a href=(href) { "View Artists →" }
        }
    }
}
