use crate::auth::sessions::Session;
use crate::domain::reservation::{CandidateRange, PriceQuote};
use crate::store::models::{Cabin, Settings};
use crate::templates::components::date_selector::date_selector;
use crate::templates::components::reservation_form::{price_panel, reservation_form};
use crate::templates::site_layout;
use chrono::NaiveDate;
use maud::{html, Markup};
use std::collections::HashSet;

/// Everything the cabin detail page needs, assembled by the router.
pub struct CabinVm {
    pub cabin: Cabin,
    pub settings: Settings,
    pub booked: HashSet<NaiveDate>,
    /// Selection after conflict-clearing; what the calendar shows.
    pub range: CandidateRange,
    pub price: Option<PriceQuote>,
    pub month: NaiveDate,
    pub today: NaiveDate,
    pub session: Option<Session>,
}

pub fn cabin_page(vm: &CabinVm) -> Markup {
    site_layout(
        &format!("Cabin {}", vm.cabin.name),
        vm.session.is_some(),
        html! {
            main class="container" {
                section class="cabin-detail flex" {
                    @if let Some(image) = &vm.cabin.image {
                        img src=(image) alt=(format!("Cabin {}", vm.cabin.name));
                    }
                    div {
                        h1 { "Cabin " (vm.cabin.name) }
                        @if let Some(description) = &vm.cabin.description {
                            p { (description) }
                        }
                        p { "For up to " strong { (vm.cabin.max_capacity) } " guests" }
                        p class="muted" {
                            "Stays of "
                            (vm.settings.min_booking_length)
                            "–"
                            (vm.settings.max_booking_length)
                            " nights. Pay on arrival."
                        }
                    }
                }

                h2 class="text-center" {
                    "Reserve Cabin " (vm.cabin.name) " today. Pay on arrival."
                }

                section class="reservation flex" {
                    div {
                        (date_selector(vm.cabin.id, vm.month, &vm.booked, &vm.range, vm.today))
                        (price_panel(&vm.cabin, vm.price.as_ref()))
                    }

                    @if let Some(session) = &vm.session {
                        (reservation_form(&vm.cabin, session, &vm.range, vm.price.as_ref()))
                    } @else {
                        div class="login-prompt" {
                            p { "Please sign in to reserve this cabin." }
                            a href="/login" class="primary" { "Sign in" }
                        }
                    }
                }
            }
        },
    )
}
