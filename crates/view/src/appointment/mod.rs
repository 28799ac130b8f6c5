mod create_appointment;
mod delete_appointment;
mod list_events;

pub use create_appointment::CreateAppointmentUseCase;
pub use delete_appointment::DeleteAppointmentUseCase;
pub use list_events::ListEventsUseCase;
