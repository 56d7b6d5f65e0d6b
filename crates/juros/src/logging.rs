use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to a daily-rolling file in the data directory.
///
/// Logs are written to `{data_dir}/juros.log.{date}`. The returned guard
/// must stay alive for the lifetime of the program; dropping it flushes any
/// buffered lines. The log level can be controlled via the `level` parameter
/// or the `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;

    let appender = tracing_appender::rolling::daily(data_dir, "juros.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // Build filter from RUST_LOG env var or use provided level
    let default_filter = format!("juros={level},juros_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!("Juros logging initialized (data_dir={})", data_dir.display());
    Ok(guard)
}
