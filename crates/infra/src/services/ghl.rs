use super::{base::BaseClient, APIResponse, ICalendarBackend, APPOINTMENT_REQUIRED_FIELDS};
use crate::{
    config::MAX_WINDOW_DAYS,
    system::ISys,
    Config, ConfigError,
};
use calendar_client_api_structs::ghl::*;
use calendar_client_domain::{Appointment, AppointmentDraft, Calendar, DraftField, ID};
use chrono::Duration;
use std::sync::Arc;

const VERSION_HEADER: &str = "version";

/// With a configured location the draft may leave `locationId` empty
const LOCATED_REQUIRED_FIELDS: [DraftField; 6] = [
    DraftField::Title,
    DraftField::AssignedUserId,
    DraftField::CalendarId,
    DraftField::ContactId,
    DraftField::StartTime,
    DraftField::EndTime,
];

/// GoHighLevel calendar API, called with a private integration token.
///
/// Every request carries the bearer token and the `Version` header.
pub struct GoHighLevelBackend {
    base: BaseClient,
    location_id: String,
    lookback: Duration,
    lookahead: Duration,
    sys: Arc<dyn ISys>,
}

impl GoHighLevelBackend {
    pub fn new(config: &Config, sys: Arc<dyn ISys>) -> Result<Self, ConfigError> {
        let token = config.ghl_token.clone().ok_or(ConfigError::MissingToken)?;
        let mut base = BaseClient::new(config.base_url().as_str());
        base.set_bearer_token(token);
        base.set_header(VERSION_HEADER, &config.ghl_api_version);

        Ok(Self {
            base,
            location_id: config.ghl_location_id.clone(),
            lookback: window_span(config.events_lookback_days),
            lookahead: window_span(config.events_lookahead_days),
            sys,
        })
    }

    /// Window of epoch millis events are queried for
    fn events_window(&self) -> (i64, i64) {
        let now = self.sys.get_timestamp_millis();
        (
            now.saturating_sub(self.lookback.num_milliseconds()),
            now.saturating_add(self.lookahead.num_milliseconds()),
        )
    }
}

fn window_span(days: i64) -> Duration {
    Duration::days(days.clamp(0, MAX_WINDOW_DAYS))
}

#[async_trait::async_trait]
impl ICalendarBackend for GoHighLevelBackend {
    fn required_fields(&self) -> &'static [DraftField] {
        if self.location_id.is_empty() {
            &APPOINTMENT_REQUIRED_FIELDS
        } else {
            &LOCATED_REQUIRED_FIELDS
        }
    }

    #[tracing::instrument(name = "GoHighLevel: list calendars", skip(self))]
    async fn list_calendars(&self) -> APIResponse<Vec<Calendar>> {
        let path = list_calendars::PATH.to_string();
        let res: list_calendars::APIResponse = if self.location_id.is_empty() {
            self.base.get(path).await?
        } else {
            let query = list_calendars::QueryParams {
                location_id: self.location_id.clone(),
            };
            self.base.get_with_query(path, &query).await?
        };
        Ok(res.calendars.into_iter().map(Calendar::from).collect())
    }

    #[tracing::instrument(name = "GoHighLevel: get calendar", skip(self))]
    async fn get_calendar(&self, calendar_id: &ID) -> APIResponse<Calendar> {
        let res: Option<get_calendar::APIResponse> =
            self.base.get(get_calendar::path(calendar_id)).await?;
        res.map(|res| res.calendar.into()).ok_or_else(|| {
            super::APIError::MalformedResponse("Empty calendar response".into())
        })
    }

    #[tracing::instrument(name = "GoHighLevel: list events", skip(self))]
    async fn list_events(&self, calendar_id: &ID) -> APIResponse<Vec<Appointment>> {
        let (start_time, end_time) = self.events_window();
        let query = list_events::QueryParams {
            location_id: self.location_id.clone(),
            calendar_id: calendar_id.clone(),
            start_time,
            end_time,
        };
        let res: list_events::APIResponse = self
            .base
            .get_with_query(list_events::PATH.to_string(), &query)
            .await?;
        Ok(res.events.into_iter().map(Appointment::from).collect())
    }

    #[tracing::instrument(name = "GoHighLevel: create appointment", skip(self, draft))]
    async fn create_appointment(&self, draft: &AppointmentDraft) -> APIResponse<Appointment> {
        let mut body = create_appointment::RequestBody::from(draft);
        if body.location_id.trim().is_empty() {
            body.location_id = self.location_id.clone();
        }
        let res: create_appointment::APIResponse = self
            .base
            .post(&body, create_appointment::PATH.to_string())
            .await?;
        Ok(res.into())
    }

    #[tracing::instrument(name = "GoHighLevel: delete event", skip(self))]
    async fn delete_appointment(&self, event_id: &ID) -> APIResponse<()> {
        let res: delete_event::APIResponse =
            self.base.delete(delete_event::path(event_id)).await?;
        if !res.succeeded {
            tracing::warn!("GoHighLevel did not confirm deletion of event: {}", event_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendKind;

    struct FixedSys(i64);
    impl ISys for FixedSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    fn config() -> Config {
        let mut config = Config::for_backend(BackendKind::GoHighLevel);
        config.ghl_token = Some("pit-123".into());
        config.events_lookback_days = 1;
        config.events_lookahead_days = 2;
        config
    }

    #[test]
    fn requires_token() {
        let config = Config::for_backend(BackendKind::GoHighLevel);
        assert!(matches!(
            GoHighLevelBackend::new(&config, Arc::new(FixedSys(0))),
            Err(ConfigError::MissingToken)
        ));
    }

    #[test]
    fn events_window_surrounds_now() {
        let now = 1_705_312_800_000;
        let backend = GoHighLevelBackend::new(&config(), Arc::new(FixedSys(now))).unwrap();
        let day = 1000 * 60 * 60 * 24;
        assert_eq!(backend.events_window(), (now - day, now + 2 * day));
    }

    #[test]
    fn huge_window_is_capped() {
        let now = 1_705_312_800_000;
        let mut config = config();
        config.events_lookback_days = 1_000_000_000_000;
        config.events_lookahead_days = i64::MAX;
        let backend = GoHighLevelBackend::new(&config, Arc::new(FixedSys(now))).unwrap();
        let span = MAX_WINDOW_DAYS * 1000 * 60 * 60 * 24;
        assert_eq!(backend.events_window(), (now - span, now + span));

        let backend = GoHighLevelBackend::new(&config, Arc::new(FixedSys(i64::MAX))).unwrap();
        assert_eq!(backend.events_window().1, i64::MAX);
    }

    #[test]
    fn location_is_optional_once_configured() {
        let backend = GoHighLevelBackend::new(&config(), Arc::new(FixedSys(0))).unwrap();
        assert_eq!(backend.required_fields(), &APPOINTMENT_REQUIRED_FIELDS[..]);

        let mut config = config();
        config.ghl_location_id = "ve9EPM428h8vShlRW1KT".into();
        let backend = GoHighLevelBackend::new(&config, Arc::new(FixedSys(0))).unwrap();
        assert!(!backend.required_fields().contains(&DraftField::LocationId));
        assert_eq!(backend.required_fields().len(), 6);
    }
}
