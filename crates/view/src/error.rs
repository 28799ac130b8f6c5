use calendar_client_domain::{DraftField, ID};
use calendar_client_infra::APIError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Please fill in the following fields: {}", join_fields(.missing))]
    Validation { missing: Vec<DraftField> },
    #[error("No calendar is selected")]
    NoCalendarSelected,
    #[error("Calendar with ID {0} not found")]
    CalendarNotFound(ID),
    #[error(transparent)]
    Backend(#[from] APIError),
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(DraftField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ViewError {
    /// Whether the error was raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::NoCalendarSelected)
    }
}
