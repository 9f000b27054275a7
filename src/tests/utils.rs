// Shared fixtures: an in-memory DataStore fake plus request builders.

use crate::app::App;
use crate::auth::oauth::{OAuthClient, OAuthConfig};
use crate::errors::ServerError;
use crate::router::now_unix;
use crate::store::models::{
    Booking, BookingStatus, BookingUpdate, Cabin, Guest, GuestUpdate, NewBooking, NewGuest,
    Settings,
};
use crate::store::DataStore;
use astra::{Body, Request};
use chrono::NaiveDate;
use std::sync::Mutex;

/// In-memory stand-in for the hosted store. Mutations are recorded so
/// tests can assert which calls were (or were not) issued.
pub struct FakeStore {
    pub cabins: Vec<Cabin>,
    pub bookings: Mutex<Vec<Booking>>,
    pub guests: Mutex<Vec<Guest>>,
    pub settings: Settings,
    pub deleted: Mutex<Vec<i64>>,
    pub booking_updates: Mutex<Vec<(i64, BookingUpdate)>>,
    pub guest_updates: Mutex<Vec<(i64, GuestUpdate)>>,
    /// When set, delete calls fail like a store outage would.
    pub fail_deletes: bool,
    next_id: Mutex<i64>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            cabins: Vec::new(),
            bookings: Mutex::new(Vec::new()),
            guests: Mutex::new(Vec::new()),
            settings: Settings {
                min_booking_length: 1,
                max_booking_length: 90,
                max_guests_per_booking: 12,
                breakfast_price: 15,
            },
            deleted: Mutex::new(Vec::new()),
            booking_updates: Mutex::new(Vec::new()),
            guest_updates: Mutex::new(Vec::new()),
            fail_deletes: false,
            next_id: Mutex::new(100),
        }
    }
}

impl DataStore for FakeStore {
    fn cabins(&self) -> Result<Vec<Cabin>, ServerError> {
        Ok(self.cabins.clone())
    }

    fn cabin(&self, id: i64) -> Result<Cabin, ServerError> {
        self.cabins
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ServerError::StoreError("Cabin could not be loaded".into()))
    }

    fn bookings_for_guest(&self, guest_id: i64) -> Result<Vec<Booking>, ServerError> {
        let mut rows: Vec<Booking> = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.guest_id == guest_id)
            .cloned()
            .collect();
        rows.sort_by_key(|b| b.start_date);
        Ok(rows)
    }

    fn bookings_for_cabin(
        &self,
        cabin_id: i64,
        today: NaiveDate,
    ) -> Result<Vec<Booking>, ServerError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| {
                b.cabin_id == cabin_id
                    && (b.start_date >= today || b.status == BookingStatus::CheckedIn)
            })
            .cloned()
            .collect())
    }

    fn create_booking(&self, new: &NewBooking) -> Result<Booking, ServerError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let booking = Booking {
            id: *next_id,
            guest_id: new.guest_id,
            cabin_id: new.cabin_id,
            start_date: new.start_date,
            end_date: new.end_date,
            num_nights: new.num_nights,
            num_guests: new.num_guests,
            total_price: new.total_price,
            status: new.status,
            observations: new.observations.clone(),
            cabins: None,
        };
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking)
    }

    fn update_booking(&self, id: i64, fields: &BookingUpdate) -> Result<(), ServerError> {
        self.booking_updates
            .lock()
            .unwrap()
            .push((id, fields.clone()));

        let mut bookings = self.bookings.lock().unwrap();
        if let Some(b) = bookings.iter_mut().find(|b| b.id == id) {
            if let Some(n) = fields.num_guests {
                b.num_guests = n;
            }
            if let Some(obs) = &fields.observations {
                b.observations = Some(obs.clone());
            }
        }
        Ok(())
    }

    fn delete_booking(&self, id: i64) -> Result<(), ServerError> {
        if self.fail_deletes {
            return Err(ServerError::StoreError(
                "Booking could not be deleted".into(),
            ));
        }
        self.deleted.lock().unwrap().push(id);
        self.bookings.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }

    fn guest_by_email(&self, email: &str) -> Result<Option<Guest>, ServerError> {
        Ok(self
            .guests
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.email == email)
            .cloned())
    }

    fn create_guest(&self, new: &NewGuest) -> Result<Guest, ServerError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let guest = Guest {
            id: *next_id,
            email: new.email.clone(),
            full_name: new.full_name.clone(),
            national_id: None,
            nationality: None,
            country_flag: None,
        };
        self.guests.lock().unwrap().push(guest.clone());
        Ok(guest)
    }

    fn update_guest(&self, id: i64, fields: &GuestUpdate) -> Result<(), ServerError> {
        self.guest_updates.lock().unwrap().push((id, fields.clone()));
        Ok(())
    }

    fn settings(&self) -> Result<Settings, ServerError> {
        Ok(self.settings.clone())
    }
}

// ---- fixture builders ----

pub fn cabin(id: i64, name: &str, max_capacity: i64, regular_price: i64, discount: i64) -> Cabin {
    Cabin {
        id,
        name: name.to_string(),
        description: None,
        max_capacity,
        regular_price,
        discount,
        image: None,
    }
}

pub fn booking(
    id: i64,
    guest_id: i64,
    cabin_id: i64,
    start: NaiveDate,
    end: NaiveDate,
    status: BookingStatus,
) -> Booking {
    Booking {
        id,
        guest_id,
        cabin_id,
        start_date: start,
        end_date: end,
        num_nights: (end - start).num_days(),
        num_guests: 2,
        total_price: 100,
        status,
        observations: None,
        cabins: None,
    }
}

pub fn guest(id: i64, email: &str, full_name: &str) -> Guest {
    Guest {
        id,
        email: email.to_string(),
        full_name: full_name.to_string(),
        national_id: None,
        nationality: None,
        country_flag: None,
    }
}

pub fn make_app(store: FakeStore) -> App<FakeStore> {
    App::new(
        store,
        OAuthClient::new(OAuthConfig {
            client_id: "test-client".into(),
            client_secret: "test-secret".into(),
            redirect_uri: "http://127.0.0.1:3000/auth/callback".into(),
            ..OAuthConfig::default()
        }),
    )
}

/// Register the guest in the session store; returns the cookie token.
pub fn sign_in(app: &App<FakeStore>, g: &Guest) -> String {
    app.store.guests.lock().unwrap().push(g.clone());
    app.sessions.create(g, now_unix())
}

// ---- request builders ----

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn get_authed(path: &str, token: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(path)
        .header("Cookie", format!("session={token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, token: &str, form: &str) -> Request {
    http::Request::builder()
        .method("POST")
        .uri(path)
        .header("Cookie", format!("session={token}"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn body_string(resp: astra::Response) -> String {
    use std::io::Read;
    let mut out = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut out)
        .unwrap();
    out
}
