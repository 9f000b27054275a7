use crate::templates::site_layout;
use maud::{html, Markup};

pub fn home_page(signed_in: bool) -> Markup {
    site_layout(
        "Welcome",
        signed_in,
        html! {
            main class="container hero" {
                h1 { "Welcome to paradise." }
                p class="lead" {
                    "Luxury cabins in the woods. Pick your dates, bring your people, "
                    "pay on arrival."
                }
                a href="/cabins" class="cta primary" { "Explore luxury cabins" }
            }
        },
    )
}
