use crate::store::models::Booking;
use crate::templates::components::reservation_card;
use crate::templates::site_layout;
use maud::{html, Markup};

pub struct ReservationsVm {
    pub bookings: Vec<Booking>,
    /// E.g. "Reservation deleted." after a successful mutation.
    pub notice: Option<String>,
    /// Shown when a mutation failed and the authoritative list is
    /// rendered instead of the projected one.
    pub error: Option<String>,
}

pub fn reservations_page(vm: &ReservationsVm) -> Markup {
    site_layout(
        "Your reservations",
        true,
        html! {
            main class="container" {
                h1 { "Your reservations" }

                @if let Some(notice) = &vm.notice {
                    p class="notice" { (notice) }
                }
                @if let Some(error) = &vm.error {
                    p class="error" { (error) }
                }

                @if vm.bookings.is_empty() {
                    p {
                        "You have no reservations yet. Check out our "
                        a href="/cabins" { "luxury cabins" }
                        "."
                    }
                } @else {
                    ul class="reservation-list" {
                        @for booking in &vm.bookings {
                            (reservation_card(booking))
                        }
                    }
                }
            }
        },
    )
}
