use calendar_client_api_structs::ghl;
use calendar_client_domain::DraftDefaults;
use chrono_tz::Tz;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

const LOCAL_BASE_URL: &str = "http://127.0.0.1:8000";

/// Longest events window span accepted, in days
pub const MAX_WINDOW_DAYS: i64 = 3650;

/// Which backend contract the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Django proxy exposing `calendars/` and the appointments webhook
    Local,
    /// GoHighLevel called directly with a private token
    GoHighLevel,
    /// Plain `api/appointments/` REST resource
    Generic,
}

impl BackendKind {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Local | Self::Generic => LOCAL_BASE_URL,
            Self::GoHighLevel => ghl::BASE_URL,
        }
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "django" => Ok(Self::Local),
            "ghl" | "gohighlevel" | "leadconnector" => Ok(Self::GoHighLevel),
            "generic" | "rest" => Ok(Self::Generic),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Local => "local",
            Self::GoHighLevel => "ghl",
            Self::Generic => "generic",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown calendar backend: `{0}`. Expected one of: local, ghl, generic")]
    UnknownBackend(String),
    #[error("The base url: `{url}` is not valid: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("The base url: `{0}` must use http or https")]
    UnsupportedScheme(String),
    #[error("The GoHighLevel backend requires a private token. Set GHL_PRIVATE_TOKEN.")]
    MissingToken,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendKind,
    /// Explicitly configured base url. When not set the default
    /// of the `backend` is used.
    base_url: Option<Url>,
    /// Bearer token sent to GoHighLevel
    pub ghl_token: Option<String>,
    /// Value of the `Version` header GoHighLevel requires on every request
    pub ghl_api_version: String,
    /// Location (sub account) the GoHighLevel calendars belong to
    pub ghl_location_id: String,
    /// Seed values for new appointment drafts
    pub draft_defaults: DraftDefaults,
    /// How many days back from now events are queried for.
    /// GoHighLevel refuses event queries without a time window.
    pub events_lookback_days: i64,
    /// How many days ahead of now events are queried for
    pub events_lookahead_days: i64,
    /// Timezone appointment times are presented in
    pub display_timezone: Tz,
}

impl Config {
    /// Reads the configuration from the environment, falling back to
    /// defaults for anything that is not set.
    pub fn new() -> Result<Self, ConfigError> {
        let backend = match env_var("CALENDAR_BACKEND") {
            Some(backend) => backend.parse()?,
            None => {
                info!("Did not find CALENDAR_BACKEND environment variable. Using the local backend.");
                BackendKind::Local
            }
        };
        let mut config = Self::for_backend(backend);
        if let Some(url) = env_var("CALENDAR_API_BASE") {
            config.set_base_url(&url)?;
        }

        config.ghl_token = env_var("GHL_PRIVATE_TOKEN");
        if let Some(version) = env_var("GHL_API_VERSION") {
            config.ghl_api_version = version;
        }
        config.ghl_location_id = env_var("GHL_LOCATION_ID").unwrap_or_default();
        config.draft_defaults = DraftDefaults {
            assigned_user_id: env_var("DEFAULT_ASSIGNED_USER_ID").unwrap_or_default(),
            location_id: env_var("DEFAULT_LOCATION_ID")
                .unwrap_or_else(|| config.ghl_location_id.clone()),
            contact_id: env_var("DEFAULT_CONTACT_ID").unwrap_or_default(),
        };
        config.events_lookback_days = parse_days("EVENTS_LOOKBACK_DAYS", 30);
        config.events_lookahead_days = parse_days("EVENTS_LOOKAHEAD_DAYS", 90);
        if let Some(tz) = env_var("DISPLAY_TIMEZONE") {
            match tz.parse::<Tz>() {
                Ok(tz) => config.display_timezone = tz,
                Err(_) => warn!(
                    "The given DISPLAY_TIMEZONE: {} is not valid, falling back to UTC.",
                    tz
                ),
            }
        }

        Ok(config)
    }

    /// Configuration with every value at its default for the given backend
    pub fn for_backend(backend: BackendKind) -> Self {
        Self {
            backend,
            base_url: None,
            ghl_token: None,
            ghl_api_version: ghl::API_VERSION.to_string(),
            ghl_location_id: String::new(),
            draft_defaults: Default::default(),
            events_lookback_days: 30,
            events_lookahead_days: 90,
            display_timezone: Tz::UTC,
        }
    }

    /// The configured base url, or the backend's default one
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.to_string(),
            None => self.backend.default_base_url().to_string(),
        }
    }

    pub fn set_base_url(&mut self, url: &str) -> Result<(), ConfigError> {
        let parsed = Url::parse(url.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            source,
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(url.to_string()));
        }
        self.base_url = Some(parsed);
        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_days(name: &str, default_days: i64) -> i64 {
    match env_var(name) {
        Some(days) => match days.parse::<i64>() {
            Ok(days) if (0..=MAX_WINDOW_DAYS).contains(&days) => days,
            _ => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, days, default_days
                );
                default_days
            }
        },
        None => default_days,
    }
}
