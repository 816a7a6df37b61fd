use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

/// Diagnostics go to stderr, stdout carries the report.
pub(crate) fn init_telemetry() {
    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("WARN")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
