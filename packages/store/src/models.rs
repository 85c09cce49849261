//! Session-cached model types.
//!
//! [`SessionUser`] is the client-safe projection of a signed-in account that
//! the api crate caches under the `user` key. It carries only what the UI
//! needs between page loads; the full account record always comes from the
//! remote API.

use serde::{Deserialize, Serialize};

/// The signed-in user as cached in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Role string as served by the API: `"USER"` or `"ADMIN"`.
    pub role: String,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}
