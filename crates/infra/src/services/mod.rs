mod base;
mod generic_rest;
mod ghl;
mod local_rest;

pub use base::{APIError, APIResponse};
pub use generic_rest::GenericRestBackend;
pub use ghl::GoHighLevelBackend;
pub use local_rest::LocalRestBackend;

use crate::{config::BackendKind, ConfigError};
use crate::{system::ISys, Config};
use calendar_client_domain::{Appointment, AppointmentDraft, Calendar, DraftField, ID};
use std::sync::Arc;

/// Fields the local proxy and GoHighLevel refuse to create appointments without
pub const APPOINTMENT_REQUIRED_FIELDS: [DraftField; 7] = [
    DraftField::Title,
    DraftField::AssignedUserId,
    DraftField::CalendarId,
    DraftField::LocationId,
    DraftField::ContactId,
    DraftField::StartTime,
    DraftField::EndTime,
];

/// A remote calendar backend.
///
/// Each implementation maps one REST contract onto the client's
/// domain types. The server stays the source of truth, nothing is cached.
#[async_trait::async_trait]
pub trait ICalendarBackend: Send + Sync {
    /// Draft fields that must be non-empty before `create_appointment` is called
    fn required_fields(&self) -> &'static [DraftField];
    async fn list_calendars(&self) -> APIResponse<Vec<Calendar>>;
    async fn get_calendar(&self, calendar_id: &ID) -> APIResponse<Calendar>;
    async fn list_events(&self, calendar_id: &ID) -> APIResponse<Vec<Appointment>>;
    async fn create_appointment(&self, draft: &AppointmentDraft) -> APIResponse<Appointment>;
    async fn delete_appointment(&self, event_id: &ID) -> APIResponse<()>;
}

pub(crate) fn create_backend(
    config: &Config,
    sys: Arc<dyn ISys>,
) -> Result<Arc<dyn ICalendarBackend>, ConfigError> {
    let backend: Arc<dyn ICalendarBackend> = match config.backend {
        BackendKind::Local => Arc::new(LocalRestBackend::new(config)),
        BackendKind::GoHighLevel => Arc::new(GoHighLevelBackend::new(config, sys)?),
        BackendKind::Generic => Arc::new(GenericRestBackend::new(config)),
    };
    Ok(backend)
}
