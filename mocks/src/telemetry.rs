use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{FixtureError, Result};

/// Initialize a tracing subscriber for test output
///
/// `RUST_LOG` wins over the configured level. Output goes through the test
/// writer so the harness captures it per test. A subscriber that is already
/// installed is left in place, so every test may call this.
pub fn init_telemetry(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| FixtureError::InvalidLogging(e.to_string()))?;

    let registry = Registry::default().with(env_filter);

    let installed = match config.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_test_writer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_test_writer()
                    .with_target(true)
                    .with_span_list(true)
                    .flatten_event(true),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_test_writer()
                    .with_target(false),
            )
            .try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(
            log_level = %config.level,
            log_format = ?config.format,
            "Fixture telemetry initialized"
        );
    }

    Ok(())
}

/// [`init_telemetry`] with default logging settings
pub fn init_test_tracing() {
    init_telemetry(&LoggingConfig::default()).ok();
}
