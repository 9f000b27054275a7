use crate::store::models::{Booking, BookingStatus};
use maud::{html, Markup};

pub fn reservation_card(booking: &Booking) -> Markup {
    let cabin_name = booking
        .cabins
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("?");
    // Mutating a stay that has started makes no sense.
    let editable = booking.status == BookingStatus::Unconfirmed;

    html! {
        li class="reservation-card border flex justify-between" {
            div {
                h3 {
                    (booking.num_nights) " nights in Cabin " (cabin_name)
                    " "
                    span class=(format!("status status-{}", status_slug(booking.status))) {
                        (status_label(booking.status))
                    }
                }
                p {
                    (booking.start_date.format("%b %e, %Y"))
                    " → "
                    (booking.end_date.format("%b %e, %Y"))
                }
                p class="muted" {
                    "$" (booking.total_price) " · " (booking.num_guests)
                    " " (if booking.num_guests == 1 { "guest" } else { "guests" })
                }
            }
            @if editable {
                div class="actions flex" {
                    a href=(format!("/account/reservations/{}/edit", booking.id)) { "Edit" }
                    form
                        method="post"
                        action=(format!("/account/reservations/{}/delete", booking.id))
                    {
                        button type="submit" class="danger" { "Delete" }
                    }
                }
            }
        }
    }
}

fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Unconfirmed => "Unconfirmed",
        BookingStatus::CheckedIn => "Checked in",
        BookingStatus::CheckedOut => "Checked out",
        BookingStatus::Cancelled => "Cancelled",
    }
}

fn status_slug(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Unconfirmed => "unconfirmed",
        BookingStatus::CheckedIn => "checked-in",
        BookingStatus::CheckedOut => "checked-out",
        BookingStatus::Cancelled => "cancelled",
    }
}
