use super::{base::BaseClient, APIError, APIResponse, ICalendarBackend};
use crate::Config;
use calendar_client_api_structs::generic::*;
use calendar_client_domain::{Appointment, AppointmentDraft, Calendar, DraftField, ID};
use reqwest::StatusCode;

const REQUIRED_FIELDS: [DraftField; 2] = [DraftField::Title, DraftField::StartTime];

/// Backend serving a bare `api/appointments/` resource. It has no
/// calendars so a single implicit one is presented.
pub struct GenericRestBackend {
    base: BaseClient,
}

impl GenericRestBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            base: BaseClient::new(config.base_url().as_str()),
        }
    }

    fn implicit_calendar() -> Calendar {
        Calendar::new(ID::from(IMPLICIT_CALENDAR_ID), IMPLICIT_CALENDAR_NAME)
    }
}

#[async_trait::async_trait]
impl ICalendarBackend for GenericRestBackend {
    fn required_fields(&self) -> &'static [DraftField] {
        &REQUIRED_FIELDS
    }

    async fn list_calendars(&self) -> APIResponse<Vec<Calendar>> {
        Ok(vec![Self::implicit_calendar()])
    }

    async fn get_calendar(&self, calendar_id: &ID) -> APIResponse<Calendar> {
        if calendar_id.as_str() == IMPLICIT_CALENDAR_ID {
            Ok(Self::implicit_calendar())
        } else {
            Err(APIError::UnexpectedStatusCode {
                status: StatusCode::NOT_FOUND,
                message: Some(format!("Calendar with ID {} not found", calendar_id)),
            })
        }
    }

    #[tracing::instrument(name = "Generic backend: list appointments", skip(self))]
    async fn list_events(&self, calendar_id: &ID) -> APIResponse<Vec<Appointment>> {
        let res: list_appointments::APIResponse =
            self.base.get(list_appointments::PATH.to_string()).await?;
        Ok(res
            .into_iter()
            .map(|appointment| appointment.into_appointment(calendar_id.as_str()))
            .collect())
    }

    #[tracing::instrument(name = "Generic backend: create appointment", skip(self, draft))]
    async fn create_appointment(&self, draft: &AppointmentDraft) -> APIResponse<Appointment> {
        let body = create_appointment::RequestBody::from(draft);
        let res: Option<create_appointment::APIResponse> = self
            .base
            .post(&body, create_appointment::PATH.to_string())
            .await?;
        res.map(|appointment| appointment.into_appointment(IMPLICIT_CALENDAR_ID))
            .ok_or_else(|| APIError::MalformedResponse("Empty appointment response".into()))
    }

    #[tracing::instrument(name = "Generic backend: delete appointment", skip(self))]
    async fn delete_appointment(&self, event_id: &ID) -> APIResponse<()> {
        let _: serde_json::Value = self
            .base
            .delete(delete_appointment::path(event_id))
            .await?;
        Ok(())
    }
}
