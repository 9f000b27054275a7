pub mod countries;
pub mod models;
pub mod rest;

use crate::errors::ServerError;
use chrono::NaiveDate;
use models::{Booking, BookingUpdate, Cabin, Guest, GuestUpdate, NewBooking, NewGuest, Settings};

/// Contract with the hosted data store. Handlers and booking commands
/// only ever see this trait; production uses `rest::RestStore`, tests an
/// in-memory fake.
///
/// Every call is a single all-or-nothing round trip; failures come back
/// as `ServerError::StoreError` with user-facing "could not be" text and
/// are never retried here.
pub trait DataStore {
    fn cabins(&self) -> Result<Vec<Cabin>, ServerError>;
    fn cabin(&self, id: i64) -> Result<Cabin, ServerError>;

    /// A guest's bookings (with joined cabin name/image), ordered by
    /// start date.
    fn bookings_for_guest(&self, guest_id: i64) -> Result<Vec<Booking>, ServerError>;

    /// Bookings that can still block dates for a cabin: upcoming ones
    /// plus whatever is currently checked in. The store applies
    /// `startDate >= today OR status = checked-in`; status-based
    /// filtering beyond that belongs to the availability calculator.
    fn bookings_for_cabin(&self, cabin_id: i64, today: NaiveDate)
        -> Result<Vec<Booking>, ServerError>;

    fn create_booking(&self, new: &NewBooking) -> Result<Booking, ServerError>;
    fn update_booking(&self, id: i64, fields: &BookingUpdate) -> Result<(), ServerError>;
    fn delete_booking(&self, id: i64) -> Result<(), ServerError>;

    fn guest_by_email(&self, email: &str) -> Result<Option<Guest>, ServerError>;
    fn create_guest(&self, new: &NewGuest) -> Result<Guest, ServerError>;
    fn update_guest(&self, id: i64, fields: &GuestUpdate) -> Result<(), ServerError>;

    fn settings(&self) -> Result<Settings, ServerError>;
}
