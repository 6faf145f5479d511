//! API client
//!
//! [`ApiClient`] performs every backend call. It owns the HTTP connection
//! pool, the resolved base URL and the session token; clones share all
//! three. Endpoint methods live in [`crate::api`].

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{
    RequestBody, RequestOptions, ResponseEnvelope, error_message, excerpt, normalize_path,
    parse_body,
};
use crate::navigator::{Navigator, NoopNavigator};
use crate::routes::ApiRoutes;
use crate::session::Session;
use crate::storage::{MemoryTokenStore, TokenStore};

/// Client for the ordering backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    http: Client,
    base_url: String,
    config: ClientConfig,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

/// Builder for [`ApiClient`].
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use taptable_client::{ApiClient, ClientConfig, FileTokenStore};
///
/// let client = ApiClient::builder()
///     .config(ClientConfig::new().with_base_url("https://api.taptable.example"))
///     .token_store(Arc::new(FileTokenStore::new("/var/lib/taptable")))
///     .build()
///     .expect("Failed to build client");
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: Option<ClientConfig>,
    store: Option<Arc<dyn TokenStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Durable storage for the session token. Defaults to an in-memory
    /// store private to this client.
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Page navigation hook for the admin redirect. Defaults to
    /// [`NoopNavigator`].
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Resolve the base URL and build the client
    pub fn build(self) -> ClientResult<ApiClient> {
        let config = self.config.unwrap_or_default();
        let base_url = config.resolve_base_url()?;

        let mut http = Client::builder().cookie_store(true);
        if let Some(secs) = config.timeout {
            http = http.timeout(Duration::from_secs(secs));
        }
        let http = http.build()?;

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryTokenStore::new()));
        let session = Session::new(store, config.token_key.clone());
        let navigator = self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator));

        tracing::debug!(base_url = %base_url, authenticated = session.is_authenticated(), "API client ready");

        Ok(ApiClient {
            inner: Arc::new(Inner {
                http,
                base_url,
                config,
                session,
                navigator,
            }),
        })
    }
}

impl ApiClient {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Client with the given configuration and default collaborators
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Self::builder().config(config).build()
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn routes(&self) -> &ApiRoutes {
        &self.inner.config.routes
    }

    // ========== Session ==========

    /// Current session token
    pub fn token(&self) -> Option<String> {
        self.inner.session.token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.is_authenticated()
    }

    /// Replace the session token and persist it
    pub fn set_token(&self, token: impl Into<String>) -> ClientResult<()> {
        self.inner.session.set_token(token)
    }

    /// Forget the session token, in memory and in storage
    pub fn clear_token(&self) -> ClientResult<()> {
        self.inner.session.clear_token()
    }

    // ========== Request execution ==========

    /// Perform a call and return the decoded body.
    ///
    /// A 2xx answer yields its JSON body (`None` when empty or not JSON).
    /// Anything else becomes [`ClientError::Api`]; 401 and 403 also end the
    /// session.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ClientResult<Option<Value>> {
        let path = normalize_path(endpoint);
        // Another client sharing the store may have logged in or out
        let token = self.inner.session.sync();

        let response = self.send(&path, options, token.as_deref()).await?;
        if response.status.is_success() {
            return Ok(response.body);
        }

        if matches!(
            response.status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            self.end_session(token.is_some());
        }

        Err(ClientError::Api {
            status: response.status,
            message: error_message(response.status, response.body.as_ref()),
            body: response.body,
        })
    }

    async fn send(
        &self,
        path: &str,
        options: RequestOptions,
        token: Option<&str>,
    ) -> ClientResult<ResponseEnvelope> {
        let RequestOptions {
            method,
            body,
            headers: extra,
            query,
        } = options;
        let debug = self.inner.config.debug();

        let mut headers = HeaderMap::new();
        if !body.is_multipart() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ClientError::Config(format!("unusable session token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }
        headers.extend(extra);

        if debug {
            tracing::debug!(method = %method, path = %path, body = %body.summary(), "API request");
        }

        let url = format!("{}{}", self.inner.base_url, path);
        let mut request = self.inner.http.request(method.clone(), &url).headers(headers);
        if !query.is_empty() {
            request = request.query(&query);
        }
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.body(serde_json::to_vec(&value)?),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if debug {
            tracing::debug!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                body = %excerpt(&text),
                "API response"
            );
        }

        Ok(ResponseEnvelope {
            status,
            body: parse_body(&text),
        })
    }

    /// Credential rejected: drop the token, and leave the admin section if
    /// the user is in it
    fn end_session(&self, had_token: bool) {
        if !had_token {
            return;
        }
        tracing::warn!("Session rejected by backend, clearing token");
        if let Err(e) = self.inner.session.clear_token() {
            tracing::warn!(error = %e, "Failed to remove persisted token");
        }

        let config = &self.inner.config;
        let in_admin = self
            .inner
            .navigator
            .current_path()
            .is_some_and(|current| {
                config.is_admin_path(&current) && current != config.admin_login_path
            });
        if in_admin {
            self.inner.navigator.redirect(&config.admin_login_path);
        }
    }

    /// Perform a call and decode the body into `T`
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<T> {
        let body = self.request(path, options).await?;
        decode(path, body)
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: Option<Value>) -> ClientResult<T> {
    serde_json::from_value(body.unwrap_or(Value::Null))
        .map_err(|e| ClientError::InvalidResponse(format!("{path}: {e}")))
}
