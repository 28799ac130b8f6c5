mod get_calendar;
mod list_calendars;

pub use get_calendar::GetCalendarUseCase;
pub use list_calendars::ListCalendarsUseCase;
