use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a log file. When unset, logs go to stderr.
pub const LOG_PATH_ENV: &str = "LOCSEARCH_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Set
/// `LOCSEARCH_LOG` to a file path to log to `{path}.{timestamp}.{pid}`
/// instead of stderr, so concurrent runs never share a file.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file = std::env::var(LOG_PATH_ENV).ok().and_then(|log_path| {
        let pid = std::process::id();
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

        match std::fs::File::create(&unique_path) {
            Ok(file) => Some(file),
            Err(_) => {
                eprintln!("Warning: Failed to create log file: {}", unique_path);
                None
            }
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    let result = match file {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init(),
        None => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339()),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
