use crate::shared::entity::ID;

/// A named container of appointments on the backend.
///
/// Every field is assigned by the server; the client never edits a calendar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Calendar {
    pub id: ID,
    pub name: String,
    pub status: String,
    pub description: String,
}

impl Calendar {
    pub fn new(id: ID, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: Default::default(),
            description: Default::default(),
        }
    }
}
