use crate::store::countries::Country;
use crate::store::models::Guest;
use crate::templates::site_layout;
use maud::{html, Markup};

pub struct ProfileVm {
    pub guest: Guest,
    pub countries: Vec<Country>,
}

pub fn profile_page(vm: &ProfileVm) -> Markup {
    let current = vm.guest.nationality.as_deref().unwrap_or("");
    // The select encodes "Name%flag" so one field carries both columns.
    let current_value = vm
        .countries
        .iter()
        .find(|c| c.name == current)
        .map(|c| format!("{}%{}", c.name, c.flag))
        .unwrap_or_default();

    site_layout(
        "Guest profile",
        true,
        html! {
            main class="container narrow" {
                h1 { "Update your guest profile" }
                p class="lead" {
                    "Providing the following information will make your check-in "
                    "process faster and smoother."
                }

                form method="post" action="/account/profile" {
                    div class="field" {
                        label { "Full name" }
                        input value=(vm.guest.full_name) disabled;
                    }
                    div class="field" {
                        label { "Email address" }
                        input value=(vm.guest.email) disabled;
                    }

                    div class="field" {
                        label for="nationality" { "Where are you from?" }
                        select name="nationality" id="nationality" required {
                            option value="" { "Select country..." }
                            @for c in &vm.countries {
                                option
                                    value=(format!("{}%{}", c.name, c.flag))
                                    selected[format!("{}%{}", c.name, c.flag) == current_value]
                                {
                                    (c.name)
                                }
                            }
                        }
                    }

                    div class="field" {
                        label for="nationalID" { "National ID number" }
                        input
                            name="nationalID"
                            id="nationalID"
                            value=(vm.guest.national_id.as_deref().unwrap_or(""))
                            required;
                    }

                    div class="flex justify-end" {
                        button type="submit" class="primary" { "Update profile" }
                    }
                }
            }
        },
    )
}
