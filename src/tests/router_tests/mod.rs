mod auth_tests;
mod booking_tests;
