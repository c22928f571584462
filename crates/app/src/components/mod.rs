pub mod notify;
pub mod status_badge;

pub use notify::notify;
pub use status_badge::{AccountStatusBadge, RideStatusBadge};
