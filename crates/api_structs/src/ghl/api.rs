use crate::dtos::{AppointmentDTO, CalendarDTO};
use calendar_client_domain::ID;
use serde::{Deserialize, Serialize};

pub mod list_calendars {
    use super::*;

    pub const PATH: &str = "calendars/";

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub location_id: String,
    }

    #[derive(Debug, Deserialize, Serialize, Default)]
    pub struct APIResponse {
        #[serde(default)]
        pub calendars: Vec<CalendarDTO>,
    }
}

pub mod get_calendar {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PathParams {
        pub calendar_id: ID,
    }

    pub fn path(calendar_id: &ID) -> String {
        format!("calendars/{}", calendar_id)
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub calendar: CalendarDTO,
    }
}

pub mod list_events {
    use super::*;

    pub const PATH: &str = "calendars/events";

    /// `start_time` and `end_time` are epoch millis
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub location_id: String,
        pub calendar_id: ID,
        pub start_time: i64,
        pub end_time: i64,
    }

    #[derive(Debug, Deserialize, Serialize, Default)]
    pub struct APIResponse {
        #[serde(default)]
        pub events: Vec<AppointmentDTO>,
    }
}

pub mod create_appointment {
    use super::*;

    pub const PATH: &str = "calendars/events/appointments";

    pub type RequestBody = crate::AppointmentRequestBody;

    pub type APIResponse = AppointmentDTO;
}

pub mod delete_event {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub fn path(event_id: &ID) -> String {
        format!("calendars/events/{}", event_id)
    }

    #[derive(Debug, Deserialize, Serialize, Default)]
    pub struct APIResponse {
        // GoHighLevel spells it `succeded`
        #[serde(default, alias = "succeded")]
        pub succeeded: bool,
    }
}
