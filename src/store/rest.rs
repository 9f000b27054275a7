use crate::errors::ServerError;
use crate::store::models::{
    Booking, BookingUpdate, Cabin, Guest, GuestUpdate, NewBooking, NewGuest, Settings,
};
use crate::store::DataStore;
use chrono::NaiveDate;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

// Columns selected when listing a guest's bookings; pulls the cabin
// name/image through the foreign key for card rendering.
const GUEST_BOOKING_COLUMNS: &str =
    "id,created_at,startDate,endDate,numNights,numGuests,totalPrice,status,observations,\
     guestId,cabinId,cabins(name,image)";

/// Client for the hosted relational store's REST dialect
/// (PostgREST-style: `?col=eq.v`, `or=(...)`, `select=`, `order=`).
pub struct RestStore {
    base_url: String,
    api_key: String,
    client: Client,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", &self.api_key))
    }

    /// Run a request, mapping any transport or non-2xx outcome to the
    /// same user-facing failure text.
    fn send(&self, req: RequestBuilder, failure: &str) -> Result<reqwest::blocking::Response, ServerError> {
        let resp = self
            .authed(req)
            .send()
            .map_err(|e| {
                eprintln!("store request failed: {e}");
                ServerError::StoreError(failure.to_string())
            })?;

        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status();
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            eprintln!("store returned {status}: {text}");
            Err(ServerError::StoreError(failure.to_string()))
        }
    }

    fn fetch_rows<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        failure: &str,
    ) -> Result<Vec<T>, ServerError> {
        let resp = self.send(req, failure)?;
        resp.json()
            .map_err(|e| {
                eprintln!("store response decode failed: {e}");
                ServerError::StoreError(failure.to_string())
            })
    }

    /// Fetch exactly one row as a bare object (`.single()` semantics).
    fn fetch_one<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        failure: &str,
    ) -> Result<T, ServerError> {
        let req = req.header("Accept", "application/vnd.pgrst.object+json");
        let resp = self.send(req, failure)?;
        resp.json()
            .map_err(|e| {
                eprintln!("store response decode failed: {e}");
                ServerError::StoreError(failure.to_string())
            })
    }
}

impl DataStore for RestStore {
    fn cabins(&self) -> Result<Vec<Cabin>, ServerError> {
        let req = self.client.get(self.table_url("cabins")).query(&[
            ("select", "id,name,maxCapacity,regularPrice,discount,image"),
            ("order", "name"),
        ]);
        self.fetch_rows(req, "Cabins could not be loaded")
    }

    fn cabin(&self, id: i64) -> Result<Cabin, ServerError> {
        let req = self
            .client
            .get(self.table_url("cabins"))
            .query(&[("id", format!("eq.{id}").as_str()), ("select", "*")]);
        self.fetch_one(req, "Cabin could not be loaded")
    }

    fn bookings_for_guest(&self, guest_id: i64) -> Result<Vec<Booking>, ServerError> {
        let req = self.client.get(self.table_url("bookings")).query(&[
            ("guestId", format!("eq.{guest_id}").as_str()),
            ("select", GUEST_BOOKING_COLUMNS),
            ("order", "startDate"),
        ]);
        self.fetch_rows(req, "Bookings could not be loaded")
    }

    fn bookings_for_cabin(
        &self,
        cabin_id: i64,
        today: NaiveDate,
    ) -> Result<Vec<Booking>, ServerError> {
        // Upcoming bookings plus current check-ins; anything older can
        // no longer block a date.
        let cutoff = format!("{}T00:00:00", today.format("%Y-%m-%d"));
        let req = self.client.get(self.table_url("bookings")).query(&[
            ("cabinId", format!("eq.{cabin_id}").as_str()),
            (
                "or",
                format!("(startDate.gte.{cutoff},status.eq.checked-in)").as_str(),
            ),
            ("select", "*"),
        ]);
        self.fetch_rows(req, "Bookings could not be loaded")
    }

    fn create_booking(&self, new: &NewBooking) -> Result<Booking, ServerError> {
        let req = self
            .client
            .post(self.table_url("bookings"))
            .header("Prefer", "return=representation")
            .json(new);
        self.fetch_one(req, "Booking could not be created")
    }

    fn update_booking(&self, id: i64, fields: &BookingUpdate) -> Result<(), ServerError> {
        let req = self
            .client
            .patch(self.table_url("bookings"))
            .query(&[("id", format!("eq.{id}"))])
            .json(fields);
        self.send(req, "Booking could not be updated")?;
        Ok(())
    }

    fn delete_booking(&self, id: i64) -> Result<(), ServerError> {
        let req = self
            .client
            .delete(self.table_url("bookings"))
            .query(&[("id", format!("eq.{id}"))]);
        self.send(req, "Booking could not be deleted")?;
        Ok(())
    }

    fn guest_by_email(&self, email: &str) -> Result<Option<Guest>, ServerError> {
        // Plain array fetch; zero rows means "no guest yet", which the
        // sign-in callback handles by creating one.
        let req = self
            .client
            .get(self.table_url("guests"))
            .query(&[("email", format!("eq.{email}").as_str()), ("select", "*")]);
        let mut rows: Vec<Guest> = self.fetch_rows(req, "Guest could not be loaded")?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    fn create_guest(&self, new: &NewGuest) -> Result<Guest, ServerError> {
        let req = self
            .client
            .post(self.table_url("guests"))
            .header("Prefer", "return=representation")
            .json(new);
        self.fetch_one(req, "Guest could not be created")
    }

    fn update_guest(&self, id: i64, fields: &GuestUpdate) -> Result<(), ServerError> {
        let req = self
            .client
            .patch(self.table_url("guests"))
            .query(&[("id", format!("eq.{id}"))])
            .json(fields);
        self.send(req, "Guest could not be updated")?;
        Ok(())
    }

    fn settings(&self) -> Result<Settings, ServerError> {
        let req = self
            .client
            .get(self.table_url("settings"))
            .query(&[("select", "*")]);
        self.fetch_one(req, "Settings could not be loaded")
    }
}
