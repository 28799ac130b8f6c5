use crate::shared::entity::ID;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt::Display, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
    /// Statuses the client has no special meaning for (`showed`, `noshow` ...)
    Other(String),
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
            Self::Other(status) => status,
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s.trim().to_lowercase().as_str() {
            "confirmed" => Self::Confirmed,
            "pending" => Self::Pending,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Other(s.trim().to_string()),
        };
        Ok(status)
    }
}

impl From<String> for AppointmentStatus {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl From<AppointmentStatus> for String {
    fn from(status: AppointmentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled, time bounded record tied to a calendar.
///
/// Times are kept exactly as the server sent them. Nothing checks that
/// `start_time` precedes `end_time`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Appointment {
    pub id: ID,
    pub title: String,
    pub status: AppointmentStatus,
    pub assigned_user_id: String,
    pub calendar_id: String,
    pub location_id: String,
    pub contact_id: String,
    pub start_time: String,
    pub end_time: String,
}

impl Appointment {
    pub fn start(&self) -> Option<DateTime<FixedOffset>> {
        parse_time(&self.start_time)
    }

    pub fn end(&self) -> Option<DateTime<FixedOffset>> {
        parse_time(&self.end_time)
    }
}

fn parse_time(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).ok()
}
