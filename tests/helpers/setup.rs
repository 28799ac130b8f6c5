use super::fake_backend::{configure_routes, Contract, FakeBackend};
use actix_web::{web, App, HttpServer};
use calendar_client_infra::{BackendKind, ClientContext, Config};
use calendar_client_view::CalendarView;
use std::net::TcpListener;
use std::sync::Arc;

pub const TEST_TOKEN: &str = "pit-test-token";
pub const TEST_LOCATION_ID: &str = "ve9EPM428h8vShlRW1KT";

pub struct TestApp {
    pub address: String,
    pub backend: Arc<FakeBackend>,
    pub config: Config,
}

impl TestApp {
    pub fn context(&self) -> ClientContext {
        ClientContext::create(self.config.clone()).expect("Test config to be valid")
    }

    pub fn view(&self) -> CalendarView {
        CalendarView::new(self.context())
    }
}

fn backend_kind(contract: Contract) -> BackendKind {
    match contract {
        Contract::Local => BackendKind::Local,
        Contract::GoHighLevel => BackendKind::GoHighLevel,
        Contract::Generic => BackendKind::Generic,
    }
}

// Launch a fake backend speaking `contract` as a background task
pub async fn spawn_backend(contract: Contract) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let backend = Arc::new(FakeBackend::default());

    let data = web::Data::from(backend.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(|cfg| configure_routes(contract, cfg))
    })
    .workers(1)
    .listen(listener)
    .expect("Failed to listen on random port")
    .run();
    let _ = actix_web::rt::spawn(server);

    let address = format!("http://127.0.0.1:{}", port);
    let mut config = Config::for_backend(backend_kind(contract));
    config
        .set_base_url(&address)
        .expect("Fake backend address to be valid");
    if contract == Contract::GoHighLevel {
        config.ghl_token = Some(TEST_TOKEN.into());
        config.ghl_location_id = TEST_LOCATION_ID.into();
        config.draft_defaults.location_id = TEST_LOCATION_ID.into();
    }

    TestApp {
        address,
        backend,
        config,
    }
}
