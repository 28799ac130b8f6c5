use crate::appointment::AppointmentStatus;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The editable fields of the create-appointment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Status,
    AssignedUserId,
    CalendarId,
    LocationId,
    ContactId,
    StartTime,
    EndTime,
}

impl DraftField {
    pub const ALL: [DraftField; 8] = [
        DraftField::Title,
        DraftField::Status,
        DraftField::AssignedUserId,
        DraftField::CalendarId,
        DraftField::LocationId,
        DraftField::ContactId,
        DraftField::StartTime,
        DraftField::EndTime,
    ];

    /// Name of the field on the wire and in validation messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Status => "appointmentStatus",
            Self::AssignedUserId => "assignedUserId",
            Self::CalendarId => "calendarId",
            Self::LocationId => "locationId",
            Self::ContactId => "contactId",
            Self::StartTime => "startTime",
            Self::EndTime => "endTime",
        }
    }
}

impl Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown appointment field: `{0}`")]
pub struct UnknownDraftField(pub String);

impl FromStr for DraftField {
    type Err = UnknownDraftField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
            .copied()
            .or(match name {
                "status" => Some(Self::Status),
                _ => None,
            })
            .ok_or_else(|| UnknownDraftField(name.to_string()))
    }
}

/// Values a fresh draft is seeded with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftDefaults {
    pub assigned_user_id: String,
    pub location_id: String,
    pub contact_id: String,
}

/// Form state for an appointment that has not been submitted yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppointmentDraft {
    pub title: String,
    pub status: AppointmentStatus,
    pub assigned_user_id: String,
    pub calendar_id: String,
    pub location_id: String,
    pub contact_id: String,
    pub start_time: String,
    pub end_time: String,
}

impl AppointmentDraft {
    pub fn new(defaults: &DraftDefaults, calendar_id: Option<&str>) -> Self {
        Self {
            title: String::new(),
            status: AppointmentStatus::Confirmed,
            assigned_user_id: defaults.assigned_user_id.clone(),
            calendar_id: calendar_id.unwrap_or_default().to_string(),
            location_id: defaults.location_id.clone(),
            contact_id: defaults.contact_id.clone(),
            start_time: String::new(),
            end_time: String::new(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Status => self.status.as_str(),
            DraftField::AssignedUserId => &self.assigned_user_id,
            DraftField::CalendarId => &self.calendar_id,
            DraftField::LocationId => &self.location_id,
            DraftField::ContactId => &self.contact_id,
            DraftField::StartTime => &self.start_time,
            DraftField::EndTime => &self.end_time,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Status => self.status = AppointmentStatus::from(value),
            DraftField::AssignedUserId => self.assigned_user_id = value,
            DraftField::CalendarId => self.calendar_id = value,
            DraftField::LocationId => self.location_id = value,
            DraftField::ContactId => self.contact_id = value,
            DraftField::StartTime => self.start_time = value,
            DraftField::EndTime => self.end_time = value,
        }
    }

    /// Returns the `required` fields that are empty or only whitespace,
    /// in the order they were asked for.
    pub fn missing_fields(&self, required: &[DraftField]) -> Vec<DraftField> {
        required
            .iter()
            .filter(|field| self.get(**field).trim().is_empty())
            .copied()
            .collect()
    }
}
