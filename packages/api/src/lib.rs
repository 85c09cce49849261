//! # API crate — client layer for the remote booking platform
//!
//! Everything the frontends need to talk to the remote REST API lives here:
//! the HTTP wrapper, the domain services and the supporting modules.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`: base URL, credential headers, envelope decoding, central 401/403 interception |
//! | [`config`] | Base URL and platform key from environment variables |
//! | [`error`] | `ApiError`: the uniform failure value every service returns |
//! | [`models`] | Wire models (`Location`, `Room`, `Booking`, `Comment`, `User`, …) |
//! | [`paging`] | `PageQuery`/`Page` and the shared client-side slicing fallback |
//! | [`services`] | One async method per UI action: auth, users, rooms, locations, bookings, comments |
//!
//! ## Contract
//!
//! Every service method validates its input first, issues at most one
//! request (two on the pagination fallback path), and returns
//! `Result<T, ApiError>`. Nothing panics, and a 401/403 anywhere clears the
//! session keys before the error reaches the caller.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod paging;
pub mod services;
mod validate;

pub use client::{ApiClient, PlatformStore};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    Booking, Comment, Credentials, Location, NewBooking, NewComment, NewUser, Role, RoomComment,
    Room, SignInResponse, User,
};
pub use paging::{Page, PageQuery};

pub use store::{KeyValueStore, MemoryStore, Session, SessionUser};
pub use store::{AUTH_TOKEN_KEY, TOKEN_KEY, USER_KEY};
