//! Component kit for the rideshare dashboards.
//!
//! Each component lives in its own directory with a co-located
//! `style.css` that it links on first render.

pub mod components;

pub use components::*;
