use super::{base::BaseClient, APIError, APIResponse, ICalendarBackend, APPOINTMENT_REQUIRED_FIELDS};
use crate::Config;
use calendar_client_api_structs::local::*;
use calendar_client_domain::{Appointment, AppointmentDraft, Calendar, DraftField, ID};
use tracing::debug;

/// The Django proxy that forwards to GoHighLevel with its own credentials
pub struct LocalRestBackend {
    base: BaseClient,
}

impl LocalRestBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            base: BaseClient::new(config.base_url().as_str()),
        }
    }
}

#[async_trait::async_trait]
impl ICalendarBackend for LocalRestBackend {
    fn required_fields(&self) -> &'static [DraftField] {
        &APPOINTMENT_REQUIRED_FIELDS
    }

    #[tracing::instrument(name = "Local backend: list calendars", skip(self))]
    async fn list_calendars(&self) -> APIResponse<Vec<Calendar>> {
        let res: list_calendars::APIResponse =
            self.base.get(list_calendars::PATH.to_string()).await?;
        Ok(res.calendars.into_iter().map(Calendar::from).collect())
    }

    #[tracing::instrument(name = "Local backend: get calendar", skip(self))]
    async fn get_calendar(&self, calendar_id: &ID) -> APIResponse<Calendar> {
        let res: Option<get_calendar::APIResponse> =
            self.base.get(get_calendar::path(calendar_id)).await?;
        res.map(Calendar::from)
            .ok_or_else(|| APIError::MalformedResponse("Empty calendar response".into()))
    }

    async fn list_events(&self, calendar_id: &ID) -> APIResponse<Vec<Appointment>> {
        // The proxy has no events endpoint
        debug!(
            "Local backend can not list events, returning none for calendar: {}",
            calendar_id
        );
        Ok(Vec::new())
    }

    #[tracing::instrument(name = "Local backend: create appointment", skip(self, draft))]
    async fn create_appointment(&self, draft: &AppointmentDraft) -> APIResponse<Appointment> {
        let body = create_appointment::RequestBody::from(draft);
        let res: create_appointment::APIResponse = self
            .base
            .post(&body, create_appointment::PATH.to_string())
            .await?;
        Ok(res.into())
    }

    async fn delete_appointment(&self, _event_id: &ID) -> APIResponse<()> {
        Err(APIError::Unsupported("deleting appointments"))
    }
}
