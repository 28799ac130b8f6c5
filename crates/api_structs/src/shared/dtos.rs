use calendar_client_domain::{Appointment, AppointmentStatus, Calendar, ID};
use super::null_as_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDTO {
    pub id: ID,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl From<CalendarDTO> for Calendar {
    fn from(dto: CalendarDTO) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            status: dto.status,
            description: dto.description,
        }
    }
}

/// Appointment as both the local proxy and GoHighLevel send it.
///
/// Some payloads carry the status as `status`, some as `appointmentStatus`
/// and some carry both. `appointmentStatus` wins.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDTO {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: ID,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub appointment_status: Option<AppointmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assigned_user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub calendar_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
}

impl From<AppointmentDTO> for Appointment {
    fn from(dto: AppointmentDTO) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            status: dto.appointment_status.or(dto.status).unwrap_or_default(),
            assigned_user_id: dto.assigned_user_id,
            calendar_id: dto.calendar_id,
            location_id: dto.location_id,
            contact_id: dto.contact_id,
            start_time: dto.start_time,
            end_time: dto.end_time,
        }
    }
}
