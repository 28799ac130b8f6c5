use calendar_client_domain::{Appointment, AppointmentDraft, Calendar, DraftField, ID};
use calendar_client_infra::{
    APIError, APIResponse, BackendKind, ClientContext, Config, ICalendarBackend, StatusCode,
    APPOINTMENT_REQUIRED_FIELDS,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct State {
    calendars: Vec<Calendar>,
    events: Vec<Appointment>,
    next_id: usize,
    fail_with: Option<StatusCode>,
    requests: Vec<&'static str>,
}

/// Backend keeping everything in memory and recording every call it gets
#[derive(Default)]
pub struct InMemoryBackend {
    state: Mutex<State>,
}

impl InMemoryBackend {
    pub fn with_calendars(names: &[(&str, &str)]) -> Arc<Self> {
        let backend = Self::default();
        {
            let mut state = backend.state.lock().unwrap();
            state.calendars = names
                .iter()
                .map(|(id, name)| Calendar::new(ID::from(*id), *name))
                .collect();
        }
        Arc::new(backend)
    }

    pub fn insert_event(&self, calendar_id: &str, title: &str) -> ID {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = ID::from(format!("event-{}", state.next_id));
        state.events.push(Appointment {
            id: id.clone(),
            title: title.into(),
            calendar_id: calendar_id.into(),
            ..Default::default()
        });
        id
    }

    /// Every following request answers with `status` until `recover` is called
    pub fn fail_with(&self, status: StatusCode) {
        self.state.lock().unwrap().fail_with = Some(status);
    }

    pub fn recover(&self) {
        self.state.lock().unwrap().fail_with = None;
    }

    pub fn requests(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn context(self: &Arc<Self>) -> ClientContext {
        ClientContext {
            backend: self.clone(),
            config: Config::for_backend(BackendKind::Local),
        }
    }

    fn record(&self, request: &'static str) -> Result<std::sync::MutexGuard<'_, State>, APIError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        let fail_with = state.fail_with;
        match fail_with {
            Some(status) => Err(APIError::UnexpectedStatusCode {
                status,
                message: Some(format!("Backend answered {}", status.as_u16())),
            }),
            None => Ok(state),
        }
    }
}

#[async_trait::async_trait]
impl ICalendarBackend for InMemoryBackend {
    fn required_fields(&self) -> &'static [DraftField] {
        &APPOINTMENT_REQUIRED_FIELDS
    }

    async fn list_calendars(&self) -> APIResponse<Vec<Calendar>> {
        let state = self.record("list_calendars")?;
        Ok(state.calendars.clone())
    }

    async fn get_calendar(&self, calendar_id: &ID) -> APIResponse<Calendar> {
        let state = self.record("get_calendar")?;
        state
            .calendars
            .iter()
            .find(|c| &c.id == calendar_id)
            .cloned()
            .ok_or(APIError::UnexpectedStatusCode {
                status: StatusCode::NOT_FOUND,
                message: None,
            })
    }

    async fn list_events(&self, calendar_id: &ID) -> APIResponse<Vec<Appointment>> {
        let state = self.record("list_events")?;
        Ok(state
            .events
            .iter()
            .filter(|e| e.calendar_id == calendar_id.as_str())
            .cloned()
            .collect())
    }

    async fn create_appointment(&self, draft: &AppointmentDraft) -> APIResponse<Appointment> {
        let mut state = self.record("create_appointment")?;
        state.next_id += 1;
        let appointment = Appointment {
            id: ID::from(format!("event-{}", state.next_id)),
            title: draft.title.clone(),
            status: draft.status.clone(),
            assigned_user_id: draft.assigned_user_id.clone(),
            calendar_id: draft.calendar_id.clone(),
            location_id: draft.location_id.clone(),
            contact_id: draft.contact_id.clone(),
            start_time: draft.start_time.clone(),
            end_time: draft.end_time.clone(),
        };
        state.events.push(appointment.clone());
        Ok(appointment)
    }

    async fn delete_appointment(&self, event_id: &ID) -> APIResponse<()> {
        let mut state = self.record("delete_appointment")?;
        let before = state.events.len();
        state.events.retain(|e| &e.id != event_id);
        if state.events.len() == before {
            return Err(APIError::UnexpectedStatusCode {
                status: StatusCode::NOT_FOUND,
                message: None,
            });
        }
        Ok(())
    }
}
