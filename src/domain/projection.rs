use crate::store::models::Booking;

/// Local projection of "booking removed", applied before the store
/// confirms the delete. The caller keeps the original slice around; if
/// the store call fails it renders that authoritative list instead, so
/// the projection is trivially reversible.
pub fn without_booking(bookings: &[Booking], booking_id: i64) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.id != booking_id)
        .cloned()
        .collect()
}
