use crate::templates::site_layout;
use maud::{html, Markup};

pub fn thankyou_page(signed_in: bool) -> Markup {
    site_layout(
        "Thank you",
        signed_in,
        html! {
            main class="container narrow text-center" {
                h1 { "Thank you for your reservation!" }
                p { "We look forward to welcoming you." }
                a href="/account/reservations" { "Manage your reservations →" }
            }
        },
    )
}
