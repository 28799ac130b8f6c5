//! GoHighLevel (`services.leadconnectorhq.com`) calendar endpoints.
mod api;

pub use api::*;

/// Value of the mandatory `Version` header
pub const API_VERSION: &str = "2021-07-28";
pub const BASE_URL: &str = "https://services.leadconnectorhq.com";
