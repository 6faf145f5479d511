mod common;

use common::FakeBackend;
use parking_lot::Mutex;
use serde_json::json;
use std::io;
use std::sync::Arc;
use taptable_client::{ApiClient, Environment};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log lines in memory
#[derive(Debug, Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run one health check in `environment` and return everything logged
async fn logs_for(environment: Environment) -> String {
    let backend = FakeBackend::start().await;
    backend.respond("GET", "/api/health", 200, json!({"status": "ok"}));

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = ApiClient::new(backend.config().with_environment(environment)).unwrap();
    assert!(client.health_check().await.unwrap().is_ok());

    logs.contents()
}

#[tokio::test]
async fn test_development_logs_requests_and_responses() {
    let logs = logs_for(Environment::Development).await;
    assert!(logs.contains("API request"), "{logs}");
    assert!(logs.contains("API response"), "{logs}");
    assert!(logs.contains("/api/health"), "{logs}");
    assert!(logs.contains("status=200"), "{logs}");
}

#[tokio::test]
async fn test_production_logs_no_calls() {
    let logs = logs_for(Environment::Production).await;
    assert!(!logs.contains("API request"), "{logs}");
    assert!(!logs.contains("API response"), "{logs}");
}
