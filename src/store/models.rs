// Wire structs for the hosted store. Column names are camelCase in the
// store schema, hence the rename attributes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabin {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub max_capacity: i64,
    pub regular_price: i64,
    pub discount: i64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Booking lifecycle tag as stored. Everything except `cancelled`
/// still occupies its date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Unconfirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub fn occupies(self) -> bool {
        self != BookingStatus::Cancelled
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub guest_id: i64,
    pub cabin_id: i64,
    #[serde(with = "iso_day")]
    pub start_date: NaiveDate,
    #[serde(with = "iso_day")]
    pub end_date: NaiveDate,
    pub num_nights: i64,
    pub num_guests: i64,
    pub total_price: i64,
    pub status: BookingStatus,
    #[serde(default)]
    pub observations: Option<String>,
    /// Joined cabin columns when the query selects them.
    #[serde(default)]
    pub cabins: Option<BookingCabin>,
}

/// The cabin columns joined onto a booking row for list rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingCabin {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub guest_id: i64,
    pub cabin_id: i64,
    #[serde(with = "iso_day")]
    pub start_date: NaiveDate,
    #[serde(with = "iso_day")]
    pub end_date: NaiveDate,
    pub num_nights: i64,
    pub num_guests: i64,
    pub cabin_price: i64,
    pub extras_price: i64,
    pub total_price: i64,
    pub observations: Option<String>,
    pub is_paid: bool,
    pub has_breakfast: bool,
    pub status: BookingStatus,
}

/// Partial update for a booking; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_guests: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    // The store column is literally "nationalID".
    #[serde(default, rename = "nationalID")]
    pub national_id: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub country_flag: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGuest {
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestUpdate {
    #[serde(rename = "nationalID")]
    pub national_id: String,
    pub nationality: String,
    pub country_flag: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub min_booking_length: i64,
    pub max_booking_length: i64,
    pub max_guests_per_booking: i64,
    pub breakfast_price: i64,
}

/// The store emits timestamps like "2024-06-01T00:00:00+00:00" for date
/// columns; only the calendar day is meaningful, so (de)serialize the
/// first ten characters.
pub mod iso_day {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&format!("{}T00:00:00", date.format("%Y-%m-%d")))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(de)?;
        let day = raw.get(..10).unwrap_or(&raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(serde::de::Error::custom)
    }
}
