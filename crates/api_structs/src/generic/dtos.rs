use crate::shared::null_as_default;
use calendar_client_domain::{Appointment, AppointmentStatus, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GenericAppointmentDTO {
    pub id: ID,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: String,
}

impl GenericAppointmentDTO {
    pub fn into_appointment(self, calendar_id: &str) -> Appointment {
        Appointment {
            id: self.id,
            title: self.title,
            status: AppointmentStatus::Confirmed,
            calendar_id: calendar_id.to_string(),
            start_time: self.start,
            ..Default::default()
        }
    }
}
