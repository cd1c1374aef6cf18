//! Tracing subscriber setup.
//!
//! Everything diagnostic goes to stderr so stdout only carries command
//! output: logs through an `EnvFilter` and a text or JSON fmt layer and, with
//! the `observability` feature, finished OpenTelemetry spans.

use derive_getters::Getters;
use derive_setters::Setters;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "observability")]
use opentelemetry::{KeyValue, global, trace::TracerProvider};
#[cfg(feature = "observability")]
use opentelemetry_sdk::{
    Resource,
    error::{OTelSdkError, OTelSdkResult},
    trace::{SdkTracerProvider, SpanData, SpanExporter},
};

/// Level used when neither `--verbose` nor `RUST_LOG` says otherwise.
const DEFAULT_LOG_LEVEL: &str = "info";

/// How the binary reports what it is doing.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct ObservabilityConfig {
    /// Name attached to exported spans
    #[setters(into)]
    service_name: String,
    /// Filter that overrides `RUST_LOG` when set
    #[setters(strip_option, into)]
    forced_level: Option<String>,
    /// Emit logs as JSON objects
    json_logs: bool,
}

impl ObservabilityConfig {
    /// Settings for the command-line flags: `--verbose` forces `debug`,
    /// whatever `RUST_LOG` says.
    pub fn from_flags(verbose: bool, json_logs: bool) -> Self {
        Self {
            service_name: env!("CARGO_PKG_NAME").to_string(),
            forced_level: verbose.then(|| "debug".to_string()),
            json_logs,
        }
    }

    /// Filter in effect: the forced level, else `RUST_LOG`, else `info`.
    ///
    /// # Errors
    ///
    /// Returns error if the forced level is not a valid filter directive.
    pub fn env_filter(&self) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
        match &self.forced_level {
            Some(level) => EnvFilter::try_new(level),
            None => EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL)),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::from_flags(false, false)
    }
}

/// Keeps span export alive until [`shutdown_observability`].
#[derive(Debug, Default)]
#[must_use = "dropping the guard without shutdown_observability may lose spans"]
pub struct ObservabilityGuard {
    #[cfg(feature = "observability")]
    provider: Option<SdkTracerProvider>,
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns error if the filter is invalid or a subscriber is already set.
pub fn init_observability(
    config: &ObservabilityConfig,
) -> Result<ObservabilityGuard, Box<dyn std::error::Error>> {
    let env_filter = config.env_filter()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(fmt_layer);

    #[cfg(feature = "observability")]
    let guard = {
        let resource = Resource::builder()
            .with_service_name(config.service_name.clone())
            .with_attributes(vec![KeyValue::new(
                "service.version",
                env!("CARGO_PKG_VERSION"),
            )])
            .build();

        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(StderrSpanExporter)
            .with_resource(resource)
            .build();
        global::set_tracer_provider(provider.clone());

        let tracer = provider.tracer(config.service_name.clone());
        registry
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .try_init()?;

        ObservabilityGuard {
            provider: Some(provider),
        }
    };

    #[cfg(not(feature = "observability"))]
    let guard = {
        registry.try_init()?;
        ObservabilityGuard::default()
    };

    tracing::debug!(
        service = %config.service_name,
        forced_level = ?config.forced_level,
        json = config.json_logs,
        "Observability initialized"
    );
    Ok(guard)
}

/// Flush and stop span export.
pub fn shutdown_observability(guard: ObservabilityGuard) {
    #[cfg(feature = "observability")]
    if let Some(provider) = guard.provider
        && let Err(e) = provider.shutdown()
    {
        tracing::warn!(error = %e, "Failed to shut down span export");
    }

    #[cfg(not(feature = "observability"))]
    drop(guard);
}

/// Writes each finished span as one line on stderr.
#[cfg(feature = "observability")]
#[derive(Debug)]
struct StderrSpanExporter;

#[cfg(feature = "observability")]
impl SpanExporter for StderrSpanExporter {
    fn export(
        &self,
        batch: Vec<SpanData>,
    ) -> impl std::future::Future<Output = OTelSdkResult> + Send {
        use std::io::Write;

        let mut stderr = std::io::stderr().lock();
        let result = batch.iter().try_for_each(|span| {
            let elapsed = span
                .end_time
                .duration_since(span.start_time)
                .unwrap_or_default();
            writeln!(
                stderr,
                "span {} trace_id={} span_id={} parent_id={} elapsed_us={}",
                span.name,
                span.span_context.trace_id(),
                span.span_context.span_id(),
                span.parent_span_id,
                elapsed.as_micros()
            )
        });
        std::future::ready(result.map_err(|e| OTelSdkError::InternalFailure(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_rust_log() {
        let config = ObservabilityConfig::from_flags(true, false);
        assert_eq!(config.forced_level().as_deref(), Some("debug"));
        assert_eq!(config.env_filter().unwrap().to_string(), "debug");
    }

    #[test]
    fn test_quiet_flags_defer_to_environment() {
        let config = ObservabilityConfig::from_flags(false, true);
        assert_eq!(config.forced_level(), &None);
        assert!(*config.json_logs());
        assert_eq!(config, ObservabilityConfig::default().with_json_logs(true));
    }

    #[test]
    fn test_invalid_forced_level_is_rejected() {
        let config = ObservabilityConfig::default().with_forced_level("mediavault=loudest");
        assert!(config.env_filter().is_err());
    }
}
