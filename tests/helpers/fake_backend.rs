use actix_web::{web, HttpRequest, HttpResponse};
use calendar_client_api_structs::{
    dtos::{AppointmentDTO, CalendarDTO, GenericAppointmentDTO},
    generic, ghl, local, AppointmentRequestBody, ErrorBody,
};
use calendar_client_domain::{AppointmentStatus, ID};
use calendar_client_infra::StatusCode;
use calendar_client_utils::create_remote_id;
use std::sync::Mutex;

/// Which of the backend contracts the fake server speaks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contract {
    Local,
    GoHighLevel,
    Generic,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub version: Option<String>,
}

/// In memory stand-in for the remote calendar services
#[derive(Default)]
pub struct FakeBackend {
    calendars: Mutex<Vec<CalendarDTO>>,
    events: Mutex<Vec<AppointmentDTO>>,
    generic_appointments: Mutex<Vec<GenericAppointmentDTO>>,
    next_generic_id: Mutex<u64>,
    requests: Mutex<Vec<RecordedRequest>>,
    fail_with: Mutex<Option<(StatusCode, ErrorBody)>>,
}

impl FakeBackend {
    pub fn add_calendar(&self, name: &str) -> ID {
        let calendar = CalendarDTO {
            id: ID::from(create_remote_id()),
            name: name.to_string(),
            status: "active".into(),
            description: format!("{} calendar", name),
        };
        let id = calendar.id.clone();
        self.calendars.lock().unwrap().push(calendar);
        id
    }

    pub fn add_event(&self, calendar_id: &ID, title: &str) -> ID {
        let event = AppointmentDTO {
            id: ID::from(create_remote_id()),
            title: title.into(),
            appointment_status: Some(AppointmentStatus::Confirmed),
            calendar_id: calendar_id.to_string(),
            start_time: "2024-01-15T10:00:00+00:00".into(),
            end_time: "2024-01-15T11:00:00+00:00".into(),
            ..Default::default()
        };
        let id = event.id.clone();
        self.events.lock().unwrap().push(event);
        id
    }

    pub fn add_generic_appointment(&self, title: &str, start: &str) -> ID {
        let id = self.next_generic_id();
        self.generic_appointments
            .lock()
            .unwrap()
            .push(GenericAppointmentDTO {
                id: id.clone(),
                title: title.into(),
                start: start.into(),
            });
        id
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len() + self.generic_appointments.lock().unwrap().len()
    }

    pub fn stored_events(&self) -> Vec<AppointmentDTO> {
        self.events.lock().unwrap().clone()
    }

    /// Every following request fails with `status` and `body`
    pub fn fail_with(&self, status: StatusCode, body: ErrorBody) {
        *self.fail_with.lock().unwrap() = Some((status, body));
    }

    pub fn recover(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    fn next_generic_id(&self) -> ID {
        let mut next = self.next_generic_id.lock().unwrap();
        *next += 1;
        ID::from(next.to_string())
    }

    fn record(&self, req: &HttpRequest) -> Option<HttpResponse> {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };
        self.requests.lock().unwrap().push(RecordedRequest {
            method: req.method().to_string(),
            path: req.path().to_string(),
            query: req.query_string().to_string(),
            authorization: header("authorization"),
            version: header("version"),
        });
        self.fail_with
            .lock()
            .unwrap()
            .as_ref()
            .map(|(status, body)| {
                let status = actix_web::http::StatusCode::from_u16(status.as_u16())
                    .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
                HttpResponse::build(status).json(body)
            })
    }

    fn find_calendar(&self, calendar_id: &str) -> Option<CalendarDTO> {
        self.calendars
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id.as_str() == calendar_id)
            .cloned()
    }

    fn store_appointment(&self, body: AppointmentRequestBody) -> AppointmentDTO {
        let event = AppointmentDTO {
            id: ID::from(create_remote_id()),
            title: body.title,
            appointment_status: Some(AppointmentStatus::from(body.appointment_status)),
            status: None,
            assigned_user_id: body.assigned_user_id,
            calendar_id: body.calendar_id,
            location_id: body.location_id,
            contact_id: body.contact_id,
            start_time: body.start_time,
            end_time: body.end_time,
        };
        self.events.lock().unwrap().push(event.clone());
        event
    }
}

type Data = web::Data<FakeBackend>;

pub fn configure_routes(contract: Contract, cfg: &mut web::ServiceConfig) {
    match contract {
        Contract::Local => {
            cfg.route("/calendars/", web::get().to(list_calendars));
            cfg.route(
                "/calendars/webhooks/calendars/appointments/api/",
                web::post().to(local_create_appointment),
            );
            cfg.route("/calendars/{id}/", web::get().to(local_get_calendar));
        }
        Contract::GoHighLevel => {
            cfg.route("/calendars/", web::get().to(list_calendars));
            cfg.route("/calendars/events", web::get().to(ghl_list_events));
            cfg.route(
                "/calendars/events/appointments",
                web::post().to(ghl_create_appointment),
            );
            cfg.route(
                "/calendars/events/{eventId}",
                web::delete().to(ghl_delete_event),
            );
            cfg.route("/calendars/{calendarId}", web::get().to(ghl_get_calendar));
        }
        Contract::Generic => {
            cfg.route("/api/appointments/", web::get().to(generic_list));
            cfg.route("/api/appointments/", web::post().to(generic_create));
            cfg.route("/api/appointments/{id}/", web::delete().to(generic_delete));
        }
    }
}

async fn list_calendars(req: HttpRequest, data: Data) -> HttpResponse {
    if let Some(res) = data.record(&req) {
        return res;
    }
    HttpResponse::Ok().json(local::list_calendars::APIResponse {
        calendars: data.calendars.lock().unwrap().clone(),
    })
}

async fn local_get_calendar(
    req: HttpRequest,
    path: web::Path<local::get_calendar::PathParams>,
    data: Data,
) -> HttpResponse {
    if let Some(res) = data.record(&req) {
        return res;
    }
    match data.find_calendar(path.id.as_str()) {
        Some(calendar) => HttpResponse::Ok().json(calendar),
        None => HttpResponse::NotFound().json(ErrorBody::new(format!(
            "Calendar with ID {} not found",
            path.id
        ))),
    }
}

async fn local_create_appointment(
    req: HttpRequest,
    body: web::Json<local::create_appointment::RequestBody>,
    data: Data,
) -> HttpResponse {
    if let Some(res) = data.record(&req) {
        return res;
    }
    let event = data.store_appointment(body.into_inner());
    HttpResponse::Created().json(event)
}

async fn ghl_get_calendar(
    req: HttpRequest,
    path: web::Path<ghl::get_calendar::PathParams>,
    data: Data,
) -> HttpResponse {
    if let Some(res) = data.record(&req) {
        return res;
    }
    match data.find_calendar(path.calendar_id.as_str()) {
        Some(calendar) => HttpResponse::Ok().json(ghl::get_calendar::APIResponse { calendar }),
        None => HttpResponse::BadRequest().json(ErrorBody {
            message: Some(calendar_client_api_structs::ErrorMessage::Single(
                "Calendar not found".into(),
            )),
            ..Default::default()
        }),
    }
}

async fn ghl_list_events(
    req: HttpRequest,
    query: web::Query<ghl::list_events::QueryParams>,
    data: Data,
) -> HttpResponse {
    if let Some(res) = data.record(&req) {
        return res;
    }
    let events = data
        .events
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.calendar_id == query.calendar_id.as_str())
        .cloned()
        .collect();
    HttpResponse::Ok().json(ghl::list_events::APIResponse { events })
}

async fn ghl_create_appointment(
    req: HttpRequest,
    body: web::Json<ghl::create_appointment::RequestBody>,
    data: Data,
) -> HttpResponse {
    if let Some(res) = data.record(&req) {
        return res;
    }
    let event = data.store_appointment(body.into_inner());
    HttpResponse::Created().json(event)
}

async fn ghl_delete_event(
    req: HttpRequest,
    path: web::Path<ghl::delete_event::PathParams>,
    data: Data,
) -> HttpResponse {
    if let Some(res) = data.record(&req) {
        return res;
    }
    let mut events = data.events.lock().unwrap();
    let before = events.len();
    events.retain(|e| e.id != path.event_id);
    if events.len() == before {
        return HttpResponse::BadRequest().json(ErrorBody {
            message: Some(calendar_client_api_structs::ErrorMessage::Single(
                "Event not found".into(),
            )),
            ..Default::default()
        });
    }
    HttpResponse::Ok().json(ghl::delete_event::APIResponse { succeeded: true })
}

async fn generic_list(req: HttpRequest, data: Data) -> HttpResponse {
    if let Some(res) = data.record(&req) {
        return res;
    }
    let appointments: generic::list_appointments::APIResponse =
        data.generic_appointments.lock().unwrap().clone();
    HttpResponse::Ok().json(appointments)
}

async fn generic_create(
    req: HttpRequest,
    body: web::Json<generic::create_appointment::RequestBody>,
    data: Data,
) -> HttpResponse {
    if let Some(res) = data.record(&req) {
        return res;
    }
    let body = body.into_inner();
    let id = data.add_generic_appointment(&body.title, &body.start);
    HttpResponse::Created().json(GenericAppointmentDTO {
        id,
        title: body.title,
        start: body.start,
    })
}

async fn generic_delete(
    req: HttpRequest,
    path: web::Path<generic::delete_appointment::PathParams>,
    data: Data,
) -> HttpResponse {
    if let Some(res) = data.record(&req) {
        return res;
    }
    let mut appointments = data.generic_appointments.lock().unwrap();
    let before = appointments.len();
    appointments.retain(|a| a.id != path.id);
    if appointments.len() == before {
        return HttpResponse::NotFound().json(ErrorBody::new("Not found."));
    }
    HttpResponse::NoContent().finish()
}
