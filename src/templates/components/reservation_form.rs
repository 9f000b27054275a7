use crate::auth::sessions::Session;
use crate::domain::reservation::{CandidateRange, PriceQuote};
use crate::store::models::Cabin;
use maud::{html, Markup};

/// The reserve form under the calendar. Dates ride along as hidden
/// fields; until both are picked there is nothing to submit.
pub fn reservation_form(
    cabin: &Cabin,
    session: &Session,
    range: &CandidateRange,
    price: Option<&PriceQuote>,
) -> Markup {
    let submittable = matches!(price, Some(q) if q.nights > 0);

    html! {
        div class="reservation-form" {
            div class="form-header flex justify-between items-center" {
                p { "Logged in as" }
                p { strong { (session.full_name) } }
            }

            form method="post" action=(format!("/cabins/{}/reserve", cabin.id)) {
                @if let Some(from) = range.from {
                    input type="hidden" name="from" value=(from.format("%Y-%m-%d"));
                }
                @if let Some(to) = range.to {
                    input type="hidden" name="to" value=(to.format("%Y-%m-%d"));
                }

                div class="field" {
                    label for="numGuests" { "How many guests?" }
                    select name="numGuests" id="numGuests" required {
                        option value="" { "Select number of guests..." }
                        @for n in 1..=cabin.max_capacity {
                            option value=(n) {
                                (n) " " (if n == 1 { "guest" } else { "guests" })
                            }
                        }
                    }
                }

                div class="field" {
                    label for="observations" { "Anything we should know about your stay?" }
                    textarea
                        name="observations"
                        id="observations"
                        maxlength="1000"
                        placeholder="Any pets, allergies, special requirements, etc.?" {}
                }

                div class="flex justify-end items-center" {
                    @if submittable {
                        button type="submit" class="primary" { "Reserve now" }
                    } @else {
                        p class="muted" { "Start by selecting dates" }
                    }
                }
            }
        }
    }
}

/// Nightly rate, night count and total for the current selection.
pub fn price_panel(cabin: &Cabin, price: Option<&PriceQuote>) -> Markup {
    let rate = cabin.regular_price - cabin.discount;

    html! {
        div class="price-panel flex items-center justify-between" {
            p class="flex items-baseline" {
                @if cabin.discount > 0 {
                    span class="text-2xl" { "$" (rate) }
                    " "
                    span class="line-through font-semibold" { "$" (cabin.regular_price) }
                } @else {
                    span class="text-2xl" { "$" (cabin.regular_price) }
                }
                span { "/night" }
            }
            @if let Some(q) = price {
                @if q.nights > 0 {
                    p { "× " (q.nights) }
                    p {
                        span class="text-lg font-bold uppercase" { "Total " }
                        span class="text-2xl font-semibold" { "$" (q.total) }
                    }
                }
            }
        }
    }
}
