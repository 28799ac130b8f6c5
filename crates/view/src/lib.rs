mod appointment;
mod calendar;
mod error;
mod shared;
mod view;

pub use appointment::{
    CreateAppointmentUseCase, DeleteAppointmentUseCase, ListEventsUseCase,
};
pub use calendar::{GetCalendarUseCase, ListCalendarsUseCase};
pub use error::ViewError;
pub use shared::confirm::{Confirm, FixedAnswer};
pub use shared::usecase::{execute, UseCase};
pub use view::{CalendarView, Deletion, ViewStatus};
