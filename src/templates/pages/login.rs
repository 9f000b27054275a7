use crate::templates::site_layout;
use maud::{html, Markup};

pub fn login_page() -> Markup {
    site_layout(
        "Sign in",
        false,
        html! {
            main class="container narrow" {
                h1 { "Sign in to access your guest area" }
                a href="/auth/google" class="provider-button border flex items-center" {
                    img src="https://authjs.dev/img/providers/google.svg" alt="" width="24" height="24";
                    span { "Continue with Google" }
                }
            }
        },
    )
}
