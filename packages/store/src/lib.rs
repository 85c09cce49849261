pub mod models;
pub mod session;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use models::SessionUser;
pub use session::{Session, AUTH_TOKEN_KEY, TOKEN_KEY, USER_KEY};
