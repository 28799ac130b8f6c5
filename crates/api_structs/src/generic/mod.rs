//! Plain REST backend exposing `api/appointments/`.
mod api;
pub mod dtos;

pub use api::*;

/// The generic backend has no notion of calendars, every appointment
/// lives in this one.
pub const IMPLICIT_CALENDAR_ID: &str = "default";
pub const IMPLICIT_CALENDAR_NAME: &str = "Appointments";
