//! Client-side session gate.
//!
//! Holds the demo user directory, checks credentials after a configurable
//! delay, keeps the active session in memory and in persistent storage,
//! and answers role-based access questions for the router.

pub mod access;
pub mod config;
pub mod directory;
pub mod gate;
pub mod latency;
pub mod service;
pub mod session;
pub mod storage;

pub use access::{authorize, AccessDecision};
pub use config::{app_config, init_config, parse_config};
pub use directory::UserDirectory;
pub use gate::SessionGate;
pub use latency::{FixedDelay, Latency, NoDelay};
pub use service::AuthService;
pub use session::{Session, SessionStatus};
pub use storage::{platform_storage, MemoryStorage, PlatformStorage, SessionStorage, StorageError};

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
