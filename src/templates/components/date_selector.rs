use crate::domain::availability::is_date_selectable;
use crate::domain::reservation::{select_day, CandidateRange};
use chrono::{Datelike, Days, Months, NaiveDate};
use maud::{html, Markup};
use std::collections::HashSet;

/// Query-string fragment for a selection, e.g. "from=2024-06-01&to=2024-06-04".
/// Empty for an empty range.
pub fn range_query(range: &CandidateRange) -> String {
    let mut parts = Vec::new();
    if let Some(from) = range.from {
        parts.push(format!("from={}", from.format("%Y-%m-%d")));
    }
    if let Some(to) = range.to {
        parts.push(format!("to={}", to.format("%Y-%m-%d")));
    }
    parts.join("&")
}

fn cabin_url(cabin_id: i64, range: &CandidateRange, month: NaiveDate) -> String {
    let range_part = range_query(range);
    let month_part = format!("month={}", month.format("%Y-%m"));
    if range_part.is_empty() {
        format!("/cabins/{cabin_id}?{month_part}")
    } else {
        format!("/cabins/{cabin_id}?{range_part}&{month_part}")
    }
}

/// Two months of selectable days. Each enabled day is a link back to
/// the cabin page carrying the updated range; booked and past days
/// render inert.
pub fn date_selector(
    cabin_id: i64,
    month: NaiveDate,
    booked: &HashSet<NaiveDate>,
    range: &CandidateRange,
    today: NaiveDate,
) -> Markup {
    let this_month = first_of_month(today);
    let prev = month.checked_sub_months(Months::new(1)).unwrap_or(month);
    let next = month.checked_add_months(Months::new(1)).unwrap_or(month);

    html! {
        div class="date-selector" {
            div class="month-nav flex justify-between" {
                @if month > this_month {
                    a href=(cabin_url(cabin_id, range, prev)) { "← earlier" }
                } @else {
                    span {}
                }
                a href=(cabin_url(cabin_id, range, next)) { "later →" }
            }
            div class="months flex" {
                (month_grid(cabin_id, month, booked, range, today))
                (month_grid(cabin_id, next, booked, range, today))
            }
            @if !range.is_empty() {
                a href=(format!("/cabins/{cabin_id}?month={}", month.format("%Y-%m")))
                    class="clear border py-2 px-4 text-sm font-semibold" { "Clear" }
            }
        }
    }
}

fn month_grid(
    cabin_id: i64,
    month: NaiveDate,
    booked: &HashSet<NaiveDate>,
    range: &CandidateRange,
    today: NaiveDate,
) -> Markup {
    let first = first_of_month(month);
    let leading_blanks = first.weekday().num_days_from_monday();

    html! {
        div class="month" {
            h4 { (first.format("%B %Y")) }
            div class="weekdays grid" {
                @for wd in ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"] {
                    span { (wd) }
                }
            }
            div class="days grid" {
                @for _ in 0..leading_blanks {
                    span class="day blank" {}
                }
                @for day in days_of_month(first) {
                    (day_cell(cabin_id, day, month, booked, range, today))
                }
            }
        }
    }
}

fn day_cell(
    cabin_id: i64,
    day: NaiveDate,
    month: NaiveDate,
    booked: &HashSet<NaiveDate>,
    range: &CandidateRange,
    today: NaiveDate,
) -> Markup {
    let selected = match (range.from, range.to) {
        (Some(from), Some(to)) => day >= from && day <= to,
        (Some(from), None) => day == from,
        _ => false,
    };
    let class = if selected { "day selected" } else { "day" };

    if is_date_selectable(day, booked, today) {
        let updated = select_day(range, day);
        html! {
            a href=(cabin_url(cabin_id, &updated, first_of_month(month))) class=(class) {
                (day.day())
            }
        }
    } else {
        html! {
            span class="day disabled" { (day.day()) }
        }
    }
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    // The first of any representable month exists.
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap_or(d)
}

fn days_of_month(first: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let month = first.month();
    std::iter::successors(Some(first), |d| d.checked_add_days(Days::new(1)))
        .take_while(move |d| d.month() == month)
}
