use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "SCOREBOARD_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is off unless `SCOREBOARD_LOG` names a file path; stdout belongs
/// to the terminal UI. The level filter comes from `RUST_LOG` (default
/// `info`).
///
/// Each run writes to `{path}.{timestamp}.{pid}` so concurrent instances
/// never share a file. Returns the path actually used.
pub fn init_tracing() -> Option<String> {
    let log_path = std::env::var(LOG_ENV).ok().filter(|p| !p.is_empty())?;
    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&unique_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", unique_path, err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(unique_path)
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}
