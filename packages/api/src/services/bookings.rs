//! Bookings: the guest flow plus the admin listing.

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Booking, NewBooking};
use crate::validate;

fn check(booking: &NewBooking) -> Result<(), ApiError> {
    validate::date_order(booking.check_in, booking.check_out)?;
    validate::guest_count(booking.guest_count)?;
    Ok(())
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Every booking on the platform; the endpoint is unpaged upstream.
    pub async fn get_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("/api/dat-phong").await
    }

    pub async fn get_booking(&self, booking_id: i64) -> Result<Booking, ApiError> {
        self.get(&format!("/api/dat-phong/{booking_id}")).await
    }

    /// Bookings placed by one user.
    pub async fn get_bookings_by_user(&self, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        self.get(&format!("/api/dat-phong/lay-theo-nguoi-dung/{user_id}"))
            .await
    }

    /// Place a booking. Date order and guest count are checked before any
    /// request is made.
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, ApiError> {
        check(booking)?;
        self.post("/api/dat-phong", booking).await
    }

    pub async fn update_booking(
        &self,
        booking_id: i64,
        booking: &NewBooking,
    ) -> Result<Booking, ApiError> {
        check(booking)?;
        self.put(&format!("/api/dat-phong/{booking_id}"), booking)
            .await
    }

    pub async fn delete_booking(&self, booking_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/dat-phong/{booking_id}")).await
    }
}
