use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

const DEFAULT_FILTER: &str = "info,weir_core=debug";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize a simple stdout tracing subscriber for development
pub fn init_stdout_tracing() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// Initialize JSON-lines tracing, one object per step event.
///
/// # Arguments
/// * `default_filter` - Filter used when `RUST_LOG` is unset (e.g. "warn,weir_core=info")
pub fn init_json_tracing(default_filter: Option<&str>) -> Result<(), anyhow::Error> {
    Registry::default()
        .with(env_filter(default_filter.unwrap_or(DEFAULT_FILTER)))
        .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
        .try_init()?;

    Ok(())
}
