use maud::{html, Markup, DOCTYPE};

/// Site chrome shared by every page. `signed_in` flips the nav between
/// the login link and the account menu + logout form.
pub fn site_layout(title: &str, signed_in: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Pinehaven" }
                link rel="icon" href="/static/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#3f6212"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M12 3l8 7h-3v4h-10v-4h-3z" {}
                            path d="M9 21v-7h6v7" {}
                        }
                        h3 { "Pinehaven Cabins" }
                    }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/cabins" { "Cabins" } }
                            @if signed_in {
                                li { a href="/account" { "Account" } }
                                li { a href="/account/reservations" { "Reservations" } }
                            }
                        }
                    }

                    @if signed_in {
                        form method="post" action="/logout" class="inline" {
                            button type="submit" class="text-base font-medium hover:text-green-700" {
                                "Sign out"
                            }
                        }
                    } @else {
                        a href="/login" class="text-base font-medium hover:text-green-700" { "Login" }
                    }
                }
                (content)
            }
        }
    }
}
