pub mod config;
pub mod models;
pub mod session;
pub mod storage;

mod error;
pub use error::StoreError;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::DashboardConfig;
pub use models::{Role, SessionUser};
pub use session::{Session, SessionStore};
pub use storage::Storage;
