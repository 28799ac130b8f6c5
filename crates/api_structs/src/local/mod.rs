//! Django proxy in front of GoHighLevel.
mod api;

pub use api::*;
