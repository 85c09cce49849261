//! Domain services: one UI action, one HTTP call.
//!
//! Each method validates its input first, issues a single request through
//! the client wrapper, and returns `Result<T, ApiError>`. Besides the
//! network call, only the auth service has side effects (the session keys).

mod auth;
mod bookings;
mod comments;
mod locations;
mod rooms;
mod users;
