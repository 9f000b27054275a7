use crate::store::models::{Booking, Cabin};
use crate::templates::site_layout;
use maud::{html, Markup};

pub fn edit_reservation_page(booking: &Booking, cabin: &Cabin) -> Markup {
    site_layout(
        "Edit reservation",
        true,
        html! {
            main class="container narrow" {
                h1 { "Edit reservation #" (booking.id) }
                p class="muted" {
                    (booking.start_date.format("%b %e, %Y"))
                    " → "
                    (booking.end_date.format("%b %e, %Y"))
                    " · Cabin " (cabin.name)
                }

                form method="post" action=(format!("/account/reservations/{}/edit", booking.id)) {
                    div class="field" {
                        label for="numGuests" { "How many guests?" }
                        select name="numGuests" id="numGuests" required {
                            @for n in 1..=cabin.max_capacity {
                                option value=(n) selected[n == booking.num_guests] {
                                    (n) " " (if n == 1 { "guest" } else { "guests" })
                                }
                            }
                        }
                    }

                    div class="field" {
                        label for="observations" { "Anything we should know about your stay?" }
                        textarea name="observations" id="observations" maxlength="1000" {
                            @if let Some(obs) = &booking.observations {
                                (obs)
                            }
                        }
                    }

                    div class="flex justify-end" {
                        button type="submit" class="primary" { "Update reservation" }
                    }
                }
            }
        },
    )
}
