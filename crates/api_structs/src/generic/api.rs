use crate::dtos::GenericAppointmentDTO;
use calendar_client_domain::{AppointmentDraft, ID};
use serde::{Deserialize, Serialize};

pub mod list_appointments {
    use super::*;

    pub const PATH: &str = "api/appointments/";

    pub type APIResponse = Vec<GenericAppointmentDTO>;
}

pub mod create_appointment {
    use super::*;

    pub const PATH: &str = "api/appointments/";

    #[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
    pub struct RequestBody {
        pub title: String,
        pub start: String,
    }

    impl From<&AppointmentDraft> for RequestBody {
        fn from(draft: &AppointmentDraft) -> Self {
            Self {
                title: draft.title.clone(),
                start: draft.start_time.clone(),
            }
        }
    }

    pub type APIResponse = GenericAppointmentDTO;
}

pub mod delete_appointment {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub id: ID,
    }

    pub fn path(id: &ID) -> String {
        format!("api/appointments/{}/", id)
    }
}
