//! Logging setup for the command-line front end

use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset. Development mode shows the
/// per-call request and response traces, which are emitted at debug level.
pub fn default_filter(development: bool) -> &'static str {
    if development {
        "taptable_client=debug,taptable=debug"
    } else {
        "taptable_client=info,taptable=info"
    }
}

/// Initialize console logging
///
/// # Arguments
/// * `level` - Default filter when `RUST_LOG` is unset (e.g. "taptable_client=info")
/// * `json_format` - Emit JSON lines instead of human-readable output
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr; stdout carries command output
    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()?;

    Ok(())
}
