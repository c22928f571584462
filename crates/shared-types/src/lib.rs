pub mod config;
pub mod error;
pub mod models;
pub mod role;

// Literal sample data behind the dashboards
pub mod fixtures;

pub use config::*;
pub use error::*;
pub use models::*;
pub use role::*;
