use calendar_client_api_structs::ErrorBody;
use reqwest::{header::HeaderMap, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum APIError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed response from the server: {0}")]
    MalformedResponse(String),
    #[error("{}", describe_status(.status, .message))]
    UnexpectedStatusCode {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("The configured backend does not support {0}")]
    Unsupported(&'static str),
}

fn describe_status(status: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Request failed with status {}", status),
    }
}

impl APIError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatusCode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

/// Thin wrapper around a shared `reqwest::Client` that knows the
/// base address of a backend and the headers every request needs.
pub(crate) struct BaseClient {
    client: Client,
    address: String,
    bearer_token: Option<String>,
    headers: HeaderMap,
}

impl BaseClient {
    pub fn new(address: &str) -> Self {
        Self {
            client: Client::new(),
            address: address.trim_end_matches('/').to_string(),
            bearer_token: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn set_bearer_token(&mut self, token: String) {
        self.bearer_token = Some(token);
    }

    pub fn set_header(&mut self, name: &'static str, value: &str) {
        match value.parse() {
            Ok(value) => {
                self.headers.insert(name, value);
            }
            Err(_) => error!("Header {} has an invalid value and is not sent", name),
        }
    }

    fn get_client(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        let builder = self
            .client
            .request(method, &url)
            .headers(self.headers.clone())
            .header("accept", "application/json");

        if let Some(token) = &self.bearer_token {
            builder.bearer_auth(token)
        } else {
            builder
        }
    }

    async fn send(&self, builder: RequestBuilder, method: &Method, path: &str) -> APIResponse<Response> {
        builder.send().await.map_err(|e| {
            error!(
                "[Network Error] {} {}/{} failed. Error message: {:?}",
                method, self.address, path, e
            );
            APIError::Network(e.to_string())
        })
    }

    async fn check_status_code(&self, res: Response) -> APIResponse<Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let message = match res.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.describe()),
            Err(_) => None,
        };
        error!(
            "[Unexpected Response] Status: {}. Error message: {:?}",
            status, message
        );
        Err(APIError::UnexpectedStatusCode { status, message })
    }

    /// Reads the body as `T`. An empty body, as sent with `204 No Content`,
    /// reads as `T::default()`.
    async fn get_json_response<T: DeserializeOwned + Default>(
        &self,
        res: Response,
    ) -> APIResponse<T> {
        let body = res
            .text()
            .await
            .map_err(|e| APIError::Network(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str::<T>(&body).map_err(|e| {
            error!("[Unexpected Response] Unable to read body. Error message: {:?}", e);
            APIError::MalformedResponse(e.to_string())
        })
    }

    async fn handle_api_response<T: DeserializeOwned + Default>(
        &self,
        res: Response,
    ) -> APIResponse<T> {
        let res = self.check_status_code(res).await?;
        self.get_json_response(res).await
    }

    pub async fn get<T: DeserializeOwned + Default>(&self, path: String) -> APIResponse<T> {
        let builder = self.get_client(Method::GET, &path);
        let res = self.send(builder, &Method::GET, &path).await?;
        self.handle_api_response(res).await
    }

    pub async fn get_with_query<T: DeserializeOwned + Default, Q: Serialize>(
        &self,
        path: String,
        query: &Q,
    ) -> APIResponse<T> {
        let builder = self.get_client(Method::GET, &path).query(query);
        let res = self.send(builder, &Method::GET, &path).await?;
        self.handle_api_response(res).await
    }

    pub async fn post<T: DeserializeOwned + Default, S: Serialize>(
        &self,
        body: &S,
        path: String,
    ) -> APIResponse<T> {
        let builder = self.get_client(Method::POST, &path).json(body);
        let res = self.send(builder, &Method::POST, &path).await?;
        self.handle_api_response(res).await
    }

    pub async fn delete<T: DeserializeOwned + Default>(&self, path: String) -> APIResponse<T> {
        let builder = self.get_client(Method::DELETE, &path);
        let res = self.send(builder, &Method::DELETE, &path).await?;
        self.handle_api_response(res).await
    }
}
