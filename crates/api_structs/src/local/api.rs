use crate::dtos::{AppointmentDTO, CalendarDTO};
use calendar_client_domain::ID;
use serde::{Deserialize, Serialize};

pub mod list_calendars {
    use super::*;

    pub const PATH: &str = "calendars/";

    #[derive(Debug, Deserialize, Serialize, Default)]
    pub struct APIResponse {
        #[serde(default)]
        pub calendars: Vec<CalendarDTO>,
    }
}

pub mod get_calendar {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub id: ID,
    }

    pub fn path(calendar_id: &ID) -> String {
        format!("calendars/{}/", calendar_id)
    }

    pub type APIResponse = CalendarDTO;
}

pub mod create_appointment {
    use super::*;

    pub const PATH: &str = "calendars/webhooks/calendars/appointments/api/";

    pub type RequestBody = crate::AppointmentRequestBody;

    pub type APIResponse = AppointmentDTO;
}
