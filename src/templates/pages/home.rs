// templates/pages/home.rs

use crate::catalog::models::Category;
use crate::templates::{components::category_card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(categories: &[Category]) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Book Top Performing Artists for Your Events" }
                    p { "Connect with Singers, Dancers, DJs, and more on Artistly" }
                    a class="button" href="/artists" { "Explore Artists" }
                }

                section {
                    h2 { "Explore Categories" }
                    div class="grid" {
                        @for category in categories {
                            (category_card(category))
                        }
                    }
                }
            }
        },
    )
}
