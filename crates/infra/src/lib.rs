mod config;
mod services;
mod system;

pub use config::{BackendKind, Config, ConfigError};
pub use reqwest::StatusCode;
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys};

/// Everything a view needs to talk to the configured backend
#[derive(Clone)]
pub struct ClientContext {
    pub backend: Arc<dyn ICalendarBackend>,
    pub config: Config,
}

impl ClientContext {
    pub fn create(config: Config) -> Result<Self, ConfigError> {
        Self::create_with_sys(config, Arc::new(RealSys {}))
    }

    pub fn create_with_sys(config: Config, sys: Arc<dyn ISys>) -> Result<Self, ConfigError> {
        let backend = services::create_backend(&config, sys)?;
        Ok(Self { backend, config })
    }
}

/// Will setup the client context given the environment
pub fn setup_context() -> Result<ClientContext, ConfigError> {
    ClientContext::create(Config::new()?)
}
