use crate::errors::ServerError;
use crate::router::handle;
use crate::store::models::BookingStatus;
use crate::tests::utils::{
    body_string, booking, cabin, get_authed, guest, make_app, post_form, sign_in, FakeStore,
};
use chrono::{Days, NaiveDate, Utc};

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn in_days(n: u64) -> NaiveDate {
    today().checked_add_days(Days::new(n)).unwrap()
}

fn store_with_cabin() -> FakeStore {
    let mut store = FakeStore::new();
    store.cabins = vec![cabin(1, "001", 4, 100, 20)];
    store
}

#[test]
fn create_booking_derives_nights_and_price() {
    let app = make_app(store_with_cabin());
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let form = format!(
        "from={}&to={}&numGuests=2&observations=quiet+please",
        in_days(10).format("%Y-%m-%d"),
        in_days(13).format("%Y-%m-%d"),
    );
    let resp = handle(post_form("/cabins/1/reserve", &token, &form), &app).unwrap();

    assert_eq!(resp.status(), 303);
    let location = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(location, "/cabins/thankyou");

    let bookings = app.store.bookings.lock().unwrap();
    assert_eq!(bookings.len(), 1);
    let b = &bookings[0];
    assert_eq!(b.guest_id, 7);
    assert_eq!(b.num_nights, 3);
    // 3 nights at (100 - 20)
    assert_eq!(b.total_price, 240);
    assert_eq!(b.num_guests, 2);
    assert_eq!(b.status, BookingStatus::Unconfirmed);
    assert_eq!(b.observations.as_deref(), Some("quiet please"));
}

#[test]
fn create_rejects_a_conflicting_range() {
    let store = store_with_cabin();
    store
        .bookings
        .lock()
        .unwrap()
        .push(booking(50, 99, 1, in_days(11), in_days(12), BookingStatus::Unconfirmed));
    let app = make_app(store);
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let form = format!(
        "from={}&to={}&numGuests=2",
        in_days(10).format("%Y-%m-%d"),
        in_days(13).format("%Y-%m-%d"),
    );
    match handle(post_form("/cabins/1/reserve", &token, &form), &app) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("no longer available")),
        other => panic!("expected BadRequest, got: {other:?}"),
    }
    assert!(app.store.bookings.lock().unwrap().len() == 1);
}

#[test]
fn create_rejects_too_many_guests() {
    let app = make_app(store_with_cabin());
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let form = format!(
        "from={}&to={}&numGuests=9",
        in_days(10).format("%Y-%m-%d"),
        in_days(12).format("%Y-%m-%d"),
    );
    match handle(post_form("/cabins/1/reserve", &token, &form), &app) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("at most")),
        other => panic!("expected BadRequest, got: {other:?}"),
    }
}

#[test]
fn create_rejects_a_zero_night_stay() {
    let app = make_app(store_with_cabin());
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let day = in_days(10).format("%Y-%m-%d");
    let form = format!("from={day}&to={day}&numGuests=2");
    match handle(post_form("/cabins/1/reserve", &token, &form), &app) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("at least one night")),
        other => panic!("expected BadRequest, got: {other:?}"),
    }
    assert!(app.store.bookings.lock().unwrap().is_empty());
}

#[test]
fn create_respects_minimum_stay_setting() {
    let mut store = store_with_cabin();
    store.settings.min_booking_length = 3;
    let app = make_app(store);
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let form = format!(
        "from={}&to={}&numGuests=2",
        in_days(10).format("%Y-%m-%d"),
        in_days(12).format("%Y-%m-%d"),
    );
    match handle(post_form("/cabins/1/reserve", &token, &form), &app) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("at least 3 nights")),
        other => panic!("expected BadRequest, got: {other:?}"),
    }
}

#[test]
fn create_requires_a_session() {
    let app = make_app(store_with_cabin());
    let form = format!(
        "from={}&to={}&numGuests=2",
        in_days(10).format("%Y-%m-%d"),
        in_days(12).format("%Y-%m-%d"),
    );
    match handle(post_form("/cabins/1/reserve", "bogus", &form), &app) {
        Err(ServerError::Unauthorized) => {}
        other => panic!("expected Unauthorized, got: {other:?}"),
    }
}

#[test]
fn deleting_someone_elses_booking_issues_no_store_call() {
    let store = store_with_cabin();
    store
        .bookings
        .lock()
        .unwrap()
        .push(booking(55, 99, 1, in_days(5), in_days(8), BookingStatus::Unconfirmed));
    let app = make_app(store);
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    match handle(
        post_form("/account/reservations/55/delete", &token, ""),
        &app,
    ) {
        Err(ServerError::Forbidden(_)) => {}
        other => panic!("expected Forbidden, got: {other:?}"),
    }

    assert!(app.store.deleted.lock().unwrap().is_empty());
    assert_eq!(app.store.bookings.lock().unwrap().len(), 1);
}

#[test]
fn deleting_own_booking_renders_the_projected_list() {
    let store = store_with_cabin();
    {
        let mut bookings = store.bookings.lock().unwrap();
        bookings.push(booking(60, 7, 1, in_days(5), in_days(8), BookingStatus::Unconfirmed));
        bookings.push(booking(61, 7, 1, in_days(20), in_days(22), BookingStatus::Unconfirmed));
    }
    let app = make_app(store);
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let resp = handle(
        post_form("/account/reservations/60/delete", &token, ""),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Reservation deleted."));
    // One card left.
    assert_eq!(body.matches("reservation-card").count(), 1);
    assert_eq!(app.store.deleted.lock().unwrap().as_slice(), &[60]);
}

#[test]
fn failed_delete_rolls_back_to_the_authoritative_list() {
    let mut store = store_with_cabin();
    store.fail_deletes = true;
    store
        .bookings
        .lock()
        .unwrap()
        .push(booking(60, 7, 1, in_days(5), in_days(8), BookingStatus::Unconfirmed));
    let app = make_app(store);
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let resp = handle(
        post_form("/account/reservations/60/delete", &token, ""),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Booking could not be deleted"));
    // The booking is still on the page.
    assert_eq!(body.matches("reservation-card").count(), 1);
    assert!(app.store.deleted.lock().unwrap().is_empty());
}

#[test]
fn update_truncates_oversized_observations() {
    let store = store_with_cabin();
    store
        .bookings
        .lock()
        .unwrap()
        .push(booking(60, 7, 1, in_days(5), in_days(8), BookingStatus::Unconfirmed));
    let app = make_app(store);
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let long = "a".repeat(1200);
    let form = format!("numGuests=3&observations={long}");
    let resp = handle(
        post_form("/account/reservations/60/edit", &token, &form),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let updates = app.store.booking_updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    let (id, fields) = &updates[0];
    assert_eq!(*id, 60);
    assert_eq!(fields.num_guests, Some(3));
    assert_eq!(fields.observations.as_ref().unwrap().chars().count(), 1000);
}

#[test]
fn updating_someone_elses_booking_is_forbidden() {
    let store = store_with_cabin();
    store
        .bookings
        .lock()
        .unwrap()
        .push(booking(55, 99, 1, in_days(5), in_days(8), BookingStatus::Unconfirmed));
    let app = make_app(store);
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    match handle(
        post_form("/account/reservations/55/edit", &token, "numGuests=2"),
        &app,
    ) {
        Err(ServerError::Forbidden(_)) => {}
        other => panic!("expected Forbidden, got: {other:?}"),
    }
    assert!(app.store.booking_updates.lock().unwrap().is_empty());
}

#[test]
fn edit_page_shows_the_booking() {
    let store = store_with_cabin();
    store
        .bookings
        .lock()
        .unwrap()
        .push(booking(60, 7, 1, in_days(5), in_days(8), BookingStatus::Unconfirmed));
    let app = make_app(store);
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let resp = handle(get_authed("/account/reservations/60/edit", &token), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Edit reservation #60"));
    assert!(body.contains("numGuests"));
}

#[test]
fn reservations_page_lists_own_bookings_only() {
    let store = store_with_cabin();
    {
        let mut bookings = store.bookings.lock().unwrap();
        bookings.push(booking(60, 7, 1, in_days(5), in_days(8), BookingStatus::Unconfirmed));
        bookings.push(booking(61, 99, 1, in_days(9), in_days(11), BookingStatus::Unconfirmed));
    }
    let app = make_app(store);
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let resp = handle(get_authed("/account/reservations", &token), &app).unwrap();
    let body = body_string(resp);
    assert_eq!(body.matches("reservation-card").count(), 1);
}

#[test]
fn profile_update_validates_and_splits_nationality() {
    let app = make_app(store_with_cabin());
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let form = "nationalID=AB12345&nationality=Portugal%25pt.svg";
    let resp = handle(post_form("/account/profile", &token, form), &app).unwrap();
    assert_eq!(resp.status(), 303);

    let updates = app.store.guest_updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    let (id, fields) = &updates[0];
    assert_eq!(*id, 7);
    assert_eq!(fields.national_id, "AB12345");
    assert_eq!(fields.nationality, "Portugal");
    assert_eq!(fields.country_flag, "pt.svg");
}

#[test]
fn profile_update_rejects_bad_national_id() {
    let app = make_app(store_with_cabin());
    let token = sign_in(&app, &guest(7, "g@example.com", "Grace"));

    let form = "nationalID=nope&nationality=Portugal%25pt.svg";
    match handle(post_form("/account/profile", &token, form), &app) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("alphanumeric")),
        other => panic!("expected BadRequest, got: {other:?}"),
    }
    assert!(app.store.guest_updates.lock().unwrap().is_empty());
}
