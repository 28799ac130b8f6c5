mod appointment;
mod calendar;
mod draft;
mod shared;

pub use appointment::{Appointment, AppointmentStatus};
pub use calendar::Calendar;
pub use draft::{AppointmentDraft, DraftDefaults, DraftField, UnknownDraftField};
pub use shared::entity::{InvalidIDError, ID};
