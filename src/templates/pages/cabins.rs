use crate::domain::cabins::CapacityFilter;
use crate::store::models::Cabin;
use crate::templates::components::{cabin_card, filter_bar};
use crate::templates::site_layout;
use maud::{html, Markup};

pub fn cabins_page(cabins: &[Cabin], active: CapacityFilter, signed_in: bool) -> Markup {
    site_layout(
        "Cabins",
        signed_in,
        html! {
            main class="container" {
                h1 { "Our luxury cabins" }
                p class="lead" {
                    "Cozy yet luxurious cabins, located right in the heart of the forest."
                }

                div class="flex justify-end" { (filter_bar(active)) }

                @if cabins.is_empty() {
                    p { "No cabins match this filter." }
                } @else {
                    div class="cabin-grid grid" {
                        @for cabin in cabins {
                            (cabin_card(cabin))
                        }
                    }
                }
            }
        },
    )
}
