//! Request and response bodies of the three calendar backends.
//!
//! The local proxy and GoHighLevel share the calendar and appointment
//! shapes, the generic REST backend has its own minimal appointment.

mod shared;

pub mod generic;
pub mod ghl;
pub mod local;

pub mod dtos {
    pub use crate::generic::dtos::*;
    pub use crate::shared::dtos::*;
}

pub use shared::api::{AppointmentRequestBody, ErrorBody, ErrorMessage};
