use crate::auth::sessions::Session;
use crate::templates::site_layout;
use maud::{html, Markup};

pub fn account_page(session: &Session) -> Markup {
    site_layout(
        "Guest area",
        true,
        html! {
            main class="container" {
                h1 { "Welcome, " (session.full_name) }

                section class="card" {
                    h3 { "Your reservations" }
                    p { "View, edit or cancel upcoming stays." }
                    a href="/account/reservations" { "Go to reservations" }
                }

                section class="card" {
                    h3 { "Guest profile" }
                    p { "Complete your profile to make check-in faster." }
                    a href="/account/profile" { "Update profile" }
                }
            }
        },
    )
}
