use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system
///
/// Logs go to stderr without colours; stdout is reserved for the check
/// report. `directive` uses `EnvFilter` syntax (`debug`,
/// `check_diff_cache=trace`, ...). An unparsable directive falls back to
/// `fallback`.
pub fn init(
    directive: Option<&str>,
    fallback: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .map_or_else(|| EnvFilter::try_new(fallback), Ok)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
