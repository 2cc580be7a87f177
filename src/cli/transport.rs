//! One HTTP request per invocation.

use super::args::Commands;
use super::error::CliError;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// What a subcommand sends.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// The endpoint answers with an empty body on success.
    pub no_content: bool,
}

/// What came back, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub is_json: bool,
    pub text: String,
}

impl ApiRequest {
    fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            body: None,
            no_content: false,
        }
    }

    fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl From<&Commands> for ApiRequest {
    fn from(command: &Commands) -> Self {
        match command {
            Commands::Health => ApiRequest::new(Method::GET, "/health".to_string()),
            Commands::Create {
                name,
                price,
                quantity,
            } => ApiRequest::new(Method::POST, "/products".to_string())
                .with_body(json!({"name": name, "price": price, "quantity": quantity})),
            Commands::List => ApiRequest::new(Method::GET, "/products".to_string()),
            Commands::Get { id } => ApiRequest::new(Method::GET, format!("/products/{id}")),
            Commands::Update {
                id,
                name,
                price,
                quantity,
            } => ApiRequest::new(Method::PUT, format!("/products/{id}"))
                .with_body(json!({"name": name, "price": price, "quantity": quantity})),
            Commands::Delete { id } => ApiRequest {
                no_content: true,
                ..ApiRequest::new(Method::DELETE, format!("/products/{id}"))
            },
        }
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, CliError> {
        let url = self.url(&request.path);
        debug!(method = %request.method, %url, "Sending request");

        let mut builder = self.client.request(request.method.clone(), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await?;

        let status = resp.status();
        let is_json = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        // A status line arrived, so a broken body still counts as a response.
        let text = resp.text().await.unwrap_or_else(|e| {
            warn!(%status, error = %e, "Response body unreadable");
            String::new()
        });
        debug!(%status, bytes = text.len(), "Response received");

        Ok(ApiResponse {
            status,
            is_json,
            text,
        })
    }
}
