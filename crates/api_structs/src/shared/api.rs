use calendar_client_domain::AppointmentDraft;
use serde::{Deserialize, Serialize};

/// Appointment body accepted by both the local proxy and GoHighLevel.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequestBody {
    pub title: String,
    pub appointment_status: String,
    pub assigned_user_id: String,
    pub calendar_id: String,
    pub location_id: String,
    pub contact_id: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<&AppointmentDraft> for AppointmentRequestBody {
    fn from(draft: &AppointmentDraft) -> Self {
        Self {
            title: draft.title.clone(),
            appointment_status: draft.status.to_string(),
            assigned_user_id: draft.assigned_user_id.clone(),
            calendar_id: draft.calendar_id.clone(),
            location_id: draft.location_id.clone(),
            contact_id: draft.contact_id.clone(),
            start_time: draft.start_time.clone(),
            end_time: draft.end_time.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

/// Error payload returned on non 2xx responses.
///
/// The Django proxy answers `{"error": ..., "details": ...}`,
/// GoHighLevel answers `{"statusCode": ..., "message": ...}` where the
/// message is sometimes a list of validation messages.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<ErrorMessage>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// The human readable message of the payload, if there is one
    pub fn describe(&self) -> Option<String> {
        if let Some(error) = self.error.as_ref().filter(|e| !e.trim().is_empty()) {
            return Some(error.clone());
        }
        match &self.message {
            Some(ErrorMessage::Single(message)) if !message.trim().is_empty() => {
                Some(message.clone())
            }
            Some(ErrorMessage::Many(messages)) if !messages.is_empty() => {
                Some(messages.join(", "))
            }
            _ => None,
        }
    }
}
