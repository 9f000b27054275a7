use crate::store::models::Cabin;
use maud::{html, Markup};

pub fn cabin_card(cabin: &Cabin) -> Markup {
    let rate = cabin.regular_price - cabin.discount;

    html! {
        div class="cabin-card border" {
            @if let Some(image) = &cabin.image {
                img src=(image) alt=(format!("Cabin {}", cabin.name));
            }
            div class="cabin-card-body" {
                h3 { "Cabin " (cabin.name) }
                p { "Up to " strong { (cabin.max_capacity) } " guests" }
                p class="price" {
                    @if cabin.discount > 0 {
                        span class="text-2xl" { "$" (rate) }
                        " "
                        span class="line-through" { "$" (cabin.regular_price) }
                    } @else {
                        span class="text-2xl" { "$" (cabin.regular_price) }
                    }
                    span { " / night" }
                }
                a href=(format!("/cabins/{}", cabin.id)) class="details-link" {
                    "Details & reservation"
                }
            }
        }
    }
}
