use calendar_client_domain::DraftField;
use calendar_client_view::CalendarView;

/// Fills every field the GoHighLevel shaped contracts require
pub fn fill_full_draft(view: &mut CalendarView, title: &str) {
    view.set_field(DraftField::Title, title);
    view.set_field(DraftField::AssignedUserId, "QwJxUVksqilzJUDZf7Ct");
    view.set_field(DraftField::LocationId, "ve9EPM428h8vShlRW1KT");
    view.set_field(DraftField::ContactId, "sx6wyHhbFdRXh302Lunr");
    view.set_field(DraftField::StartTime, "2024-01-15T10:00:00-05:00");
    view.set_field(DraftField::EndTime, "2024-01-15T11:00:00-05:00");
}

pub fn titles(view: &CalendarView) -> Vec<String> {
    view.events().iter().map(|e| e.title.clone()).collect()
}
