//! Client configuration
//!
//! The backend base URL is resolved from, in order:
//! 1. an explicit override: `TAPTABLE_API_URL` captured at build time, or
//!    a value set by the host with [`ClientConfig::with_base_url`]
//! 2. a runtime override: `TAPTABLE_API_URL` in the process environment
//! 3. same-origin: scheme and host of the page the app is served from
//!    (`TAPTABLE_ORIGIN`)
//!
//! Empty values count as unset. Trailing slashes are stripped.

use reqwest::Url;
use std::env;

use crate::error::{ClientError, ClientResult};
use crate::routes::ApiRoutes;
use crate::storage::TOKEN_KEY;

/// Base URL baked in at compile time
pub const BUILD_TIME_API_URL: Option<&str> = option_env!("TAPTABLE_API_URL");

/// Deployment environment. Request/response tracing is only emitted in
/// development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// `development`/`dev` select development; anything else is production
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Client configuration for connecting to the ordering backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Explicit base URL override (highest priority)
    pub base_url: Option<String>,
    /// Base URL injected at runtime
    pub runtime_base_url: Option<String>,
    /// Page origin for same-origin deployments (lowest priority)
    pub origin: Option<String>,
    pub environment: Environment,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout: Option<u64>,
    /// Storage key holding the bearer token
    pub token_key: String,
    /// Pages under this path belong to the admin section
    pub admin_prefix: String,
    /// Where a rejected admin session is sent
    pub admin_login_path: String,
    pub routes: ApiRoutes,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            base_url: None,
            runtime_base_url: None,
            origin: None,
            environment: Environment::Production,
            timeout: None,
            token_key: TOKEN_KEY.to_string(),
            admin_prefix: "/admin".to_string(),
            admin_login_path: "/admin/login".to_string(),
            routes: ApiRoutes::default(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> ClientResult<Self> {
        let environment = env::var("TAPTABLE_ENV")
            .map(|v| Environment::from_name(&v))
            .unwrap_or_default();

        let routes = match env::var("TAPTABLE_ROUTES_FILE")
            .ok()
            .filter(|p| !p.is_empty())
        {
            Some(path) => ApiRoutes::from_file(path)?,
            None => ApiRoutes::default(),
        };

        Ok(Self {
            base_url: BUILD_TIME_API_URL.map(str::to_string),
            runtime_base_url: env::var("TAPTABLE_API_URL").ok(),
            origin: env::var("TAPTABLE_ORIGIN").ok(),
            environment,
            timeout: env::var("TAPTABLE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok()),
            routes,
            ..Self::new()
        })
    }

    /// Set the explicit base URL override
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the runtime base URL override
    pub fn with_runtime_base_url(mut self, url: impl Into<String>) -> Self {
        self.runtime_base_url = Some(url.into());
        self
    }

    /// Set the page origin used for same-origin resolution
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }

    /// Set the admin section prefix and its login page
    pub fn with_admin_section(
        mut self,
        prefix: impl Into<String>,
        login_path: impl Into<String>,
    ) -> Self {
        self.admin_prefix = prefix.into();
        self.admin_login_path = login_path.into();
        self
    }

    pub fn with_routes(mut self, routes: ApiRoutes) -> Self {
        self.routes = routes;
        self
    }

    /// Whether request/response tracing is enabled
    pub fn debug(&self) -> bool {
        self.environment.is_development()
    }

    /// Whether `path` lies inside the admin section
    pub fn is_admin_path(&self, path: &str) -> bool {
        let prefix = self.admin_prefix.trim_end_matches('/');
        path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Resolve the backend base URL
    pub fn resolve_base_url(&self) -> ClientResult<String> {
        let raw = match non_empty(self.base_url.as_deref())
            .or_else(|| non_empty(self.runtime_base_url.as_deref()))
        {
            Some(url) => url.to_string(),
            None => match non_empty(self.origin.as_deref()) {
                Some(page) => same_origin(page)?,
                None => {
                    return Err(ClientError::Config(
                        "no backend base URL: set TAPTABLE_API_URL or TAPTABLE_ORIGIN".into(),
                    ));
                }
            },
        };

        let base = raw.trim().trim_end_matches('/').to_string();
        Url::parse(&base)
            .map_err(|e| ClientError::Config(format!("invalid base URL {base}: {e}")))?;
        Ok(base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// `scheme://host[:port]` of a page URL
fn same_origin(page: &str) -> ClientResult<String> {
    let url = Url::parse(page.trim())
        .map_err(|e| ClientError::Config(format!("invalid origin {page}: {e}")))?;
    let host = url
        .host_str()
        .ok_or_else(|| ClientError::Config(format!("origin has no host: {page}")))?;
    Ok(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}
