use crate::domain::cabins::CapacityFilter;
use maud::{html, Markup};

const FILTERS: [(CapacityFilter, &str); 4] = [
    (CapacityFilter::All, "All cabins"),
    (CapacityFilter::Small, "1–3 guests"),
    (CapacityFilter::Medium, "4–7 guests"),
    (CapacityFilter::Large, "8+ guests"),
];

pub fn filter_bar(active: CapacityFilter) -> Markup {
    html! {
        div class="filter-bar border flex" {
            @for (filter, label) in FILTERS {
                a
                    href=(format!("/cabins?capacity={}", filter.as_param()))
                    class=(if filter == active { "px-5 py-2 active" } else { "px-5 py-2" })
                {
                    (label)
                }
            }
        }
    }
}
