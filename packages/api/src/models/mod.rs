//! Data models mirroring the remote API's wire shapes.
//!
//! Rust fields are idiomatic snake_case; `#[serde(rename)]` maps them onto
//! the API's Vietnamese field names. The client does not own these records'
//! lifecycle — they are fetched, displayed, optionally mutated via a form,
//! and refetched.

mod booking;
mod comment;
mod location;
mod room;
mod user;

pub use booking::{Booking, NewBooking};
pub use comment::{Comment, NewComment, RoomComment};
pub use location::Location;
pub use room::Room;
pub use user::{Credentials, NewUser, Role, SignInResponse, User};
