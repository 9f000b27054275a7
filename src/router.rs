use crate::app::App;
use crate::auth::sessions::Session;
use crate::bookings::commands;
use crate::domain::availability::{expand_booked_dates, is_range_valid};
use crate::domain::cabins::{filter_cabins, CapacityFilter};
use crate::domain::projection::without_booking;
use crate::domain::reservation::{quote, CandidateRange};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, redirect_response, redirect_with_cookie};
use crate::store::countries::fetch_countries;
use crate::store::models::NewGuest;
use crate::store::DataStore;
use crate::templates::pages;
use astra::Request;
use chrono::{Datelike, NaiveDate, Utc};
use std::collections::HashMap;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn handle<S: DataStore>(mut req: Request, app: &App<S>) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => {
            let signed_in = current_session(app, &req).is_some();
            html_response(pages::home_page(signed_in))
        }

        ("GET", ["cabins"]) => {
            let query = parse_query(&req);
            let filter = CapacityFilter::from_param(query.get("capacity").map(String::as_str));
            let cabins = filter_cabins(app.store.cabins()?, filter);
            let signed_in = current_session(app, &req).is_some();
            html_response(pages::cabins_page(&cabins, filter, signed_in))
        }

        ("GET", ["cabins", "thankyou"]) => {
            let signed_in = current_session(app, &req).is_some();
            html_response(pages::thankyou_page(signed_in))
        }

        ("GET", ["cabins", id]) => {
            let cabin_id = parse_id(id)?;
            cabin_detail(app, &req, cabin_id)
        }

        ("POST", ["cabins", id, "reserve"]) => {
            let cabin_id = parse_id(id)?;
            let session = require_session(app, &req)?;
            let form = parse_form(&mut req)?;
            let range = CandidateRange::from_params(
                form.get("from").map(String::as_str),
                form.get("to").map(String::as_str),
            );

            commands::create_booking(&app.store, &session, cabin_id, &range, &form, today())?;
            redirect_response("/cabins/thankyou")
        }

        ("GET", ["login"]) => html_response(pages::login_page()),

        ("GET", ["auth", "google"]) => {
            let state = app.sessions.issue_login_state(now_unix());
            let url = app.oauth.authorize_url(&state)?;
            redirect_response(&url)
        }

        ("GET", ["auth", "callback"]) => auth_callback(app, &req),

        ("POST", ["logout"]) => {
            if let Some(token) = session_token(&req) {
                app.sessions.revoke(&token);
            }
            redirect_with_cookie("/", "session=; Path=/; HttpOnly; Max-Age=0")
        }

        ("GET", ["account"]) => {
            let session = require_session(app, &req)?;
            html_response(pages::account_page(&session))
        }

        ("GET", ["account", "reservations"]) => {
            let session = require_session(app, &req)?;
            let bookings = app.store.bookings_for_guest(session.guest_id)?;
            html_response(pages::reservations_page(&pages::ReservationsVm {
                bookings,
                notice: None,
                error: None,
            }))
        }

        ("POST", ["account", "reservations", id, "delete"]) => {
            let booking_id = parse_id(id)?;
            let session = require_session(app, &req)?;
            delete_reservation(app, &session, booking_id)
        }

        ("GET", ["account", "reservations", id, "edit"]) => {
            let booking_id = parse_id(id)?;
            let session = require_session(app, &req)?;

            // Ownership by membership in the caller's own list.
            let mine = app.store.bookings_for_guest(session.guest_id)?;
            let booking = mine
                .into_iter()
                .find(|b| b.id == booking_id)
                .ok_or_else(|| {
                    ServerError::Forbidden("you are not allowed to edit this booking".into())
                })?;
            let cabin = app.store.cabin(booking.cabin_id)?;
            html_response(pages::edit_reservation_page(&booking, &cabin))
        }

        ("POST", ["account", "reservations", id, "edit"]) => {
            let booking_id = parse_id(id)?;
            let session = require_session(app, &req)?;
            let form = parse_form(&mut req)?;
            commands::update_booking(&app.store, &session, booking_id, &form)?;
            redirect_response("/account/reservations")
        }

        ("GET", ["account", "profile"]) => {
            let session = require_session(app, &req)?;
            let guest = app
                .store
                .guest_by_email(&session.email)?
                .ok_or_else(|| ServerError::StoreError("Guest could not be loaded".into()))?;
            let countries = fetch_countries(&app.countries_url)?;
            html_response(pages::profile_page(&pages::ProfileVm { guest, countries }))
        }

        ("POST", ["account", "profile"]) => {
            let session = require_session(app, &req)?;
            let form = parse_form(&mut req)?;
            commands::update_profile(&app.store, &session, &form)?;
            redirect_response("/account/profile")
        }

        _ => Err(ServerError::NotFound),
    }
}

fn cabin_detail<S: DataStore>(app: &App<S>, req: &Request, cabin_id: i64) -> ResultResp {
    let today = today();
    let query = parse_query(req);

    let cabin = app.store.cabin(cabin_id)?;
    let settings = app.store.settings()?;
    let bookings = app.store.bookings_for_cabin(cabin_id, today)?;
    let booked = expand_booked_dates(&bookings, today);

    let requested = CandidateRange::from_params(
        query.get("from").map(String::as_str),
        query.get("to").map(String::as_str),
    );
    // A completed selection that collides with existing bookings falls
    // back to "nothing selected", same as the original picker.
    let range = if requested.is_complete() && !is_range_valid(&requested, &booked) {
        CandidateRange::default()
    } else {
        requested
    };

    let price = quote(&cabin, &range)?;
    let month = parse_month(query.get("month").map(String::as_str), today);

    html_response(pages::cabin_page(&pages::CabinVm {
        cabin,
        settings,
        booked,
        range,
        price,
        month,
        today,
        session: current_session(app, req),
    }))
}

/// Delete with a local projection: on store success render the list
/// minus the booking without a refetch; on store failure roll back to
/// the authoritative list with an error banner.
fn delete_reservation<S: DataStore>(
    app: &App<S>,
    session: &Session,
    booking_id: i64,
) -> ResultResp {
    let bookings = app.store.bookings_for_guest(session.guest_id)?;

    match commands::delete_booking(&app.store, session, booking_id) {
        Ok(()) => html_response(pages::reservations_page(&pages::ReservationsVm {
            bookings: without_booking(&bookings, booking_id),
            notice: Some("Reservation deleted.".to_string()),
            error: None,
        })),
        Err(ServerError::StoreError(msg)) => {
            html_response(pages::reservations_page(&pages::ReservationsVm {
                bookings,
                notice: None,
                error: Some(msg),
            }))
        }
        Err(other) => Err(other),
    }
}

fn auth_callback<S: DataStore>(app: &App<S>, req: &Request) -> ResultResp {
    let query = parse_query(req);
    let now = now_unix();

    let state = query
        .get("state")
        .ok_or_else(|| ServerError::BadRequest("missing state".into()))?;
    if !app.sessions.consume_login_state(state, now) {
        return Err(ServerError::AuthError("sign-in expired, please retry".into()));
    }

    let code = query
        .get("code")
        .ok_or_else(|| ServerError::BadRequest("missing code".into()))?;
    let profile = app.oauth.exchange_code(code)?;

    // Guests are keyed by email; first sign-in creates the row.
    let guest = match app.store.guest_by_email(&profile.email)? {
        Some(g) => g,
        None => app.store.create_guest(&NewGuest {
            email: profile.email.clone(),
            full_name: profile.name.clone().unwrap_or_else(|| "Guest".to_string()),
        })?,
    };

    let token = app.sessions.create(&guest, now);
    redirect_with_cookie(
        "/account",
        &format!("session={token}; Path=/; HttpOnly; SameSite=Lax"),
    )
}

// ---- request plumbing ----

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

/// "YYYY-MM" month param, clamped so nobody pages back before the
/// current month.
fn parse_month(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    let this_month = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let requested = raw
        .and_then(|s| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok())
        .unwrap_or(this_month);
    requested.max(this_month)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;

    Ok(url::form_urlencoded::parse(&bytes).into_owned().collect())
}

fn session_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("session="))
        .map(str::to_string)
}

fn current_session<S: DataStore>(app: &App<S>, req: &Request) -> Option<Session> {
    let token = session_token(req)?;
    app.sessions.authenticate(&token, now_unix())
}

fn require_session<S: DataStore>(app: &App<S>, req: &Request) -> Result<Session, ServerError> {
    current_session(app, req).ok_or(ServerError::Unauthorized)
}
