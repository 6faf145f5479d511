//! Request and response envelopes
//!
//! Per-call building blocks for [`crate::ApiClient::request`]: what to
//! send, and what came back. Nothing here is retained between calls.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientResult;

/// Longest body excerpt written to the debug trace
const LOG_EXCERPT_CHARS: usize = 200;

/// Request body
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(Form),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }

    /// Short description for the debug trace
    pub(crate) fn summary(&self) -> String {
        match self {
            RequestBody::Empty => "-".to_string(),
            RequestBody::Json(value) => excerpt(&value.to_string()),
            RequestBody::Multipart(_) => "<multipart>".to_string(),
        }
    }
}

/// Everything about a request except its path
#[derive(Debug, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: RequestBody,
    /// Caller headers; these win over the defaults
    pub headers: HeaderMap,
    /// Query pairs, appended in order
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// JSON-encode `body` as the request body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }
}

/// Status plus decoded body of a finished call
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    pub status: StatusCode,
    /// `None` when the body was empty or not JSON
    pub body: Option<Value>,
}

/// Ensure the endpoint starts with a single `/`
pub(crate) fn normalize_path(endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{endpoint}")
    }
}

/// Decode a response body; empty, `null` or non-JSON text yields `None`
pub(crate) fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(|value| !value.is_null())
}

/// User-facing message for a failed call.
///
/// The body's own `error` field wins, then a fixed text for well-known
/// statuses, then `HTTP <status>`.
pub(crate) fn error_message(status: StatusCode, body: Option<&Value>) -> String {
    if let Some(message) = body
        .and_then(|b| b.get("error"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
    {
        return message.to_string();
    }
    match status {
        StatusCode::BAD_REQUEST => "Invalid input. Please check your data.".to_string(),
        StatusCode::NOT_FOUND => "Resource not found.".to_string(),
        StatusCode::INTERNAL_SERVER_ERROR => "Server error. Please try again later.".to_string(),
        _ => format!("HTTP {}", status.as_u16()),
    }
}

pub(crate) fn excerpt(text: &str) -> String {
    if text.chars().count() <= LOG_EXCERPT_CHARS {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(LOG_EXCERPT_CHARS).collect();
        cut.push('…');
        cut
    }
}
