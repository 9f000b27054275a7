use crate::domain::reservation::CandidateRange;
use crate::store::models::{Booking, BookingStatus};
use chrono::{Days, NaiveDate};
use std::collections::HashSet;

/// Expand a cabin's bookings into the set of calendar days that cannot
/// be selected.
///
/// A booking blocks dates when its status still occupies the range
/// (anything but cancelled) AND it is either upcoming (starts today or
/// later) or the party is currently checked in. Old bookings that were
/// never checked in contribute nothing, so stale holds fall away.
///
/// Days are inclusive on both ends. Set semantics; no ordering.
pub fn expand_booked_dates(bookings: &[Booking], today: NaiveDate) -> HashSet<NaiveDate> {
    let mut booked = HashSet::new();

    for booking in bookings {
        if !booking.status.occupies() {
            continue;
        }
        let relevant =
            booking.start_date >= today || booking.status == BookingStatus::CheckedIn;
        if !relevant {
            continue;
        }

        let mut day = booking.start_date;
        while day <= booking.end_date {
            booked.insert(day);
            match day.checked_add_days(Days::new(1)) {
                Some(next) => day = next,
                None => break,
            }
        }
    }

    booked
}

/// The single predicate the calendar uses per rendered day: not in the
/// past (today itself is fine) and not already booked.
pub fn is_date_selectable(date: NaiveDate, booked: &HashSet<NaiveDate>, today: NaiveDate) -> bool {
    date >= today && !booked.contains(&date)
}

/// Whether a candidate range can be offered or submitted. An incomplete
/// or inverted range is never valid, and a booked day equal to either
/// endpoint counts as a conflict (the interval check is inclusive).
pub fn is_range_valid(range: &CandidateRange, booked: &HashSet<NaiveDate>) -> bool {
    let (Some(from), Some(to)) = (range.from, range.to) else {
        return false;
    };
    if from > to {
        return false;
    }

    !booked.iter().any(|d| *d >= from && *d <= to)
}
