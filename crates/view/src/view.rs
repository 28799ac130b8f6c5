use crate::{
    appointment::{CreateAppointmentUseCase, DeleteAppointmentUseCase, ListEventsUseCase},
    calendar::{GetCalendarUseCase, ListCalendarsUseCase},
    error::ViewError,
    shared::{confirm::Confirm, usecase::execute},
};
use calendar_client_domain::{Appointment, AppointmentDraft, Calendar, DraftField, ID};
use calendar_client_infra::ClientContext;
use tracing::info;

/// Progress of the last action the view performed.
///
/// `Idle -> Loading -> (Succeeded | Failed) -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The user declined, nothing was sent
    Declined,
    Deleted,
}

/// Headless state of the calendar screen.
///
/// Every mutation is followed by a re-fetch, the backend is the only
/// source of truth. A failed request leaves the lists as they were and
/// only sets the `error` banner.
pub struct CalendarView {
    ctx: ClientContext,
    calendars: Vec<Calendar>,
    selected_calendar: Option<Calendar>,
    events: Vec<Appointment>,
    show_create_form: bool,
    draft: AppointmentDraft,
    status: ViewStatus,
    error: Option<String>,
    notice: Option<String>,
}

impl CalendarView {
    pub fn new(ctx: ClientContext) -> Self {
        let draft = AppointmentDraft::new(&ctx.config.draft_defaults, None);
        Self {
            ctx,
            calendars: Vec::new(),
            selected_calendar: None,
            events: Vec::new(),
            show_create_form: false,
            draft,
            status: ViewStatus::Idle,
            error: None,
            notice: None,
        }
    }

    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    pub fn selected_calendar(&self) -> Option<&Calendar> {
        self.selected_calendar.as_ref()
    }

    pub fn events(&self) -> &[Appointment] {
        &self.events
    }

    pub fn show_create_form(&self) -> bool {
        self.show_create_form
    }

    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    /// Message of the last failure, shown as a banner
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Message of the last successful mutation
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Draft fields the configured backend needs before submitting
    pub fn required_fields(&self) -> &'static [DraftField] {
        self.ctx.backend.required_fields()
    }

    fn begin(&mut self) {
        self.status = ViewStatus::Loading;
        self.error = None;
        self.notice = None;
    }

    fn succeed(&mut self) {
        self.status = ViewStatus::Succeeded;
    }

    /// Fails with `context` prefixed to backend errors
    fn fail(&mut self, context: &str, e: ViewError) -> ViewError {
        if e.is_validation() {
            return self.reject(e);
        }
        self.status = ViewStatus::Failed;
        self.error = Some(format!("{}: {}", context, e));
        e
    }

    /// Fails with the error's own message
    fn reject(&mut self, e: ViewError) -> ViewError {
        self.status = ViewStatus::Failed;
        self.error = Some(e.to_string());
        e
    }

    fn selected_calendar_id(&self) -> Option<ID> {
        self.selected_calendar.as_ref().map(|c| c.id.clone())
    }

    fn reset_draft(&mut self) {
        let calendar_id = self.selected_calendar_id();
        self.draft = AppointmentDraft::new(
            &self.ctx.config.draft_defaults,
            calendar_id.as_ref().map(ID::as_str),
        );
    }

    /// Clears the banner and the notice and goes back to `Idle`
    pub fn dismiss(&mut self) {
        self.status = ViewStatus::Idle;
        self.error = None;
        self.notice = None;
    }

    pub async fn list_calendars(&mut self) -> Result<(), ViewError> {
        self.begin();
        let res = execute(ListCalendarsUseCase, &self.ctx).await;
        match res {
            Ok(calendars) => {
                self.calendars = calendars;
                self.succeed();
                Ok(())
            }
            Err(e) => Err(self.fail("Error loading calendars", e.into())),
        }
    }

    /// Makes `calendar` the active one. The create form is closed and the
    /// draft now points at the new calendar.
    pub fn select_calendar(&mut self, calendar: Calendar) {
        let changed = self.selected_calendar_id().as_ref() != Some(&calendar.id);
        if changed {
            self.events.clear();
        }
        self.show_create_form = false;
        self.draft.calendar_id = calendar.id.to_string();
        self.selected_calendar = Some(calendar);
    }

    /// Selects a calendar from the loaded list, asking the backend for it
    /// when it is not there.
    pub async fn select_calendar_by_id(&mut self, calendar_id: &ID) -> Result<(), ViewError> {
        if let Some(calendar) = self.calendars.iter().find(|c| &c.id == calendar_id) {
            let calendar = calendar.clone();
            self.select_calendar(calendar);
            return Ok(());
        }

        self.begin();
        let usecase = GetCalendarUseCase {
            calendar_id: calendar_id.clone(),
        };
        let res = execute(usecase, &self.ctx).await;
        match res {
            Ok(calendar) => {
                self.select_calendar(calendar);
                self.succeed();
                Ok(())
            }
            Err(e) => Err(self.fail("Error loading calendar", e.into())),
        }
    }

    pub async fn list_events(&mut self, calendar_id: &ID) -> Result<(), ViewError> {
        self.begin();
        let usecase = ListEventsUseCase {
            calendar_id: calendar_id.clone(),
        };
        let res = execute(usecase, &self.ctx).await;
        match res {
            Ok(events) => {
                self.events = events;
                self.succeed();
                Ok(())
            }
            Err(e) => Err(self.fail("Error loading events", e.into())),
        }
    }

    /// Re-fetches the calendars and the events of the selected calendar
    pub async fn refresh(&mut self) -> Result<(), ViewError> {
        self.list_calendars().await?;
        self.refresh_events().await
    }

    async fn refresh_events(&mut self) -> Result<(), ViewError> {
        match self.selected_calendar_id() {
            Some(calendar_id) => self.list_events(&calendar_id).await,
            None => Ok(()),
        }
    }

    pub fn open_create_form(&mut self) -> Result<(), ViewError> {
        if self.selected_calendar.is_none() {
            return Err(self.reject(ViewError::NoCalendarSelected));
        }
        self.show_create_form = true;
        Ok(())
    }

    pub fn cancel_create_form(&mut self) {
        self.show_create_form = false;
        self.reset_draft();
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Submits the draft. On success the form is closed and reset and the
    /// events are fetched again.
    ///
    /// A failing refresh after a successful create is reported through
    /// `error` only, the returned appointment still exists on the server.
    pub async fn create_appointment(&mut self) -> Result<Appointment, ViewError> {
        self.begin();
        let usecase = CreateAppointmentUseCase {
            draft: self.draft.clone(),
        };
        let res = execute(usecase, &self.ctx).await;
        let appointment = match res {
            Ok(appointment) => appointment,
            Err(e) => return Err(self.fail("Error creating appointment", e.into())),
        };
        info!("Created appointment: {}", appointment.id);

        self.show_create_form = false;
        self.reset_draft();
        self.succeed();
        if self.refresh_events().await.is_ok() {
            self.notice = Some("Appointment created successfully!".into());
        }
        Ok(appointment)
    }

    /// Deletes an appointment once `confirm` agrees. Declining sends nothing.
    pub async fn delete_appointment(
        &mut self,
        event_id: &ID,
        confirm: &dyn Confirm,
    ) -> Result<Deletion, ViewError> {
        let prompt = match self.events.iter().find(|e| &e.id == event_id) {
            Some(event) if !event.title.is_empty() => {
                format!("Delete the appointment \"{}\"?", event.title)
            }
            _ => format!("Delete the appointment {}?", event_id),
        };
        if !confirm.confirm(&prompt) {
            return Ok(Deletion::Declined);
        }

        self.begin();
        let usecase = DeleteAppointmentUseCase {
            event_id: event_id.clone(),
        };
        let res = execute(usecase, &self.ctx).await;
        if let Err(e) = res {
            return Err(self.fail("Error deleting appointment", e.into()));
        }
        info!("Deleted appointment: {}", event_id);

        self.succeed();
        if self.refresh_events().await.is_ok() {
            self.notice = Some("Appointment deleted".into());
        }
        Ok(Deletion::Deleted)
    }
}
