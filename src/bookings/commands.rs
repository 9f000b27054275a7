// Thin orchestration over the hosted store: validate, re-derive anything
// money-shaped, check ownership, then make exactly one store call.

use crate::auth::sessions::Session;
use crate::domain::availability::{expand_booked_dates, is_range_valid};
use crate::domain::reservation::{quote, CandidateRange};
use crate::errors::ServerError;
use crate::store::countries::split_nationality;
use crate::store::models::{Booking, BookingStatus, BookingUpdate, GuestUpdate, NewBooking};
use crate::store::DataStore;
use chrono::NaiveDate;
use std::collections::HashMap;

pub const MAX_OBSERVATIONS_CHARS: usize = 1000;

/// Over-length observation text is truncated, on create and update
/// alike, so the two paths can't disagree.
pub fn truncate_observations(raw: &str) -> String {
    raw.chars().take(MAX_OBSERVATIONS_CHARS).collect()
}

fn parse_num_guests(form: &HashMap<String, String>) -> Result<Option<i64>, ServerError> {
    let Some(raw) = form.get("numGuests").map(|s| s.trim()).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let n: i64 = raw
        .parse()
        .map_err(|_| ServerError::BadRequest("number of guests must be a whole number".into()))?;
    if n <= 0 {
        return Err(ServerError::BadRequest(
            "number of guests must be a positive number".into(),
        ));
    }
    Ok(Some(n))
}

/// Create a reservation. Nights and price are always re-derived from
/// the cabin row and the submitted range; nothing price-shaped from the
/// form is trusted. The range is re-checked against a fresh fetch of
/// the cabin's booked dates, though two simultaneous submissions can
/// still race at the store (no locking token exists on this path).
pub fn create_booking(
    store: &dyn DataStore,
    session: &Session,
    cabin_id: i64,
    range: &CandidateRange,
    form: &HashMap<String, String>,
    today: NaiveDate,
) -> Result<Booking, ServerError> {
    if !range.is_complete() {
        return Err(ServerError::BadRequest(
            "start and end dates are required".into(),
        ));
    }

    let cabin = store.cabin(cabin_id)?;

    let num_guests = parse_num_guests(form)?
        .ok_or_else(|| ServerError::BadRequest("number of guests is required".into()))?;
    if num_guests > cabin.max_capacity {
        return Err(ServerError::BadRequest(format!(
            "{} sleeps at most {} guests",
            cabin.name, cabin.max_capacity
        )));
    }

    let observations = form
        .get("observations")
        .map(|s| truncate_observations(s))
        .filter(|s| !s.is_empty());

    let price = quote(&cabin, range)?
        .ok_or_else(|| ServerError::BadRequest("invalid date range".into()))?;
    if price.nights <= 0 {
        return Err(ServerError::BadRequest(
            "a stay must be at least one night".into(),
        ));
    }

    let settings = store.settings()?;
    if price.nights < settings.min_booking_length {
        return Err(ServerError::BadRequest(format!(
            "stays must be at least {} nights",
            settings.min_booking_length
        )));
    }
    if price.nights > settings.max_booking_length {
        return Err(ServerError::BadRequest(format!(
            "stays can be at most {} nights",
            settings.max_booking_length
        )));
    }

    // Fresh conflict check right before the write.
    let current = store.bookings_for_cabin(cabin_id, today)?;
    let booked = expand_booked_dates(&current, today);
    if !is_range_valid(range, &booked) {
        return Err(ServerError::BadRequest(
            "those dates are no longer available".into(),
        ));
    }

    let new = NewBooking {
        guest_id: session.guest_id,
        cabin_id,
        // is_complete() checked above.
        start_date: range.from.ok_or(ServerError::InternalError)?,
        end_date: range.to.ok_or(ServerError::InternalError)?,
        num_nights: price.nights,
        num_guests,
        cabin_price: price.total,
        extras_price: 0,
        total_price: price.total,
        observations,
        is_paid: false,
        has_breakfast: false,
        status: BookingStatus::Unconfirmed,
    };

    store.create_booking(&new)
}

/// Ownership is a set-membership check against a freshly fetched list
/// of the session guest's own bookings, never a trust-the-caller id.
fn owned_booking(
    store: &dyn DataStore,
    session: &Session,
    booking_id: i64,
    action: &str,
) -> Result<Booking, ServerError> {
    let mine = store.bookings_for_guest(session.guest_id)?;
    mine.into_iter()
        .find(|b| b.id == booking_id)
        .ok_or_else(|| {
            ServerError::Forbidden(format!("you are not allowed to {action} this booking"))
        })
}

/// Update guest count and/or observations on one of the caller's own
/// bookings.
pub fn update_booking(
    store: &dyn DataStore,
    session: &Session,
    booking_id: i64,
    form: &HashMap<String, String>,
) -> Result<(), ServerError> {
    let booking = owned_booking(store, session, booking_id, "update")?;

    let mut fields = BookingUpdate::default();

    if let Some(n) = parse_num_guests(form)? {
        let cabin = store.cabin(booking.cabin_id)?;
        if n > cabin.max_capacity {
            return Err(ServerError::BadRequest(format!(
                "{} sleeps at most {} guests",
                cabin.name, cabin.max_capacity
            )));
        }
        fields.num_guests = Some(n);
    }
    if let Some(obs) = form.get("observations") {
        fields.observations = Some(truncate_observations(obs));
    }

    if fields.num_guests.is_none() && fields.observations.is_none() {
        return Ok(());
    }

    store.update_booking(booking_id, &fields)
}

/// Cancel one of the caller's own bookings. On an ownership failure no
/// store delete call is issued at all.
pub fn delete_booking(
    store: &dyn DataStore,
    session: &Session,
    booking_id: i64,
) -> Result<(), ServerError> {
    owned_booking(store, session, booking_id, "delete")?;
    store.delete_booking(booking_id)
}

/// Update the signed-in guest's profile (national id + nationality).
pub fn update_profile(
    store: &dyn DataStore,
    session: &Session,
    form: &HashMap<String, String>,
) -> Result<(), ServerError> {
    let national_id = form
        .get("nationalID")
        .map(|s| s.trim())
        .unwrap_or_default();
    if !is_valid_national_id(national_id) {
        return Err(ServerError::BadRequest(
            "national ID must be 6-12 alphanumeric characters".into(),
        ));
    }

    let nationality_raw = form
        .get("nationality")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServerError::BadRequest("nationality is required".into()))?;
    let (nationality, country_flag) = split_nationality(nationality_raw);

    store.update_guest(
        session.guest_id,
        &GuestUpdate {
            national_id: national_id.to_string(),
            nationality,
            country_flag,
        },
    )
}

fn is_valid_national_id(value: &str) -> bool {
    (6..=12).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphanumeric())
}
