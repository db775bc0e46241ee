// Logging configuration for the player arrows overlay

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter, e.g.
/// `PLAYER_ARROWS_LOG=player_arrows::core::route=trace`
pub const LOG_ENV_VAR: &str = "PLAYER_ARROWS_LOG";

// Writer guards must outlive every log call; dropped only at process exit
static LOG_GUARDS: OnceLock<Vec<WorkerGuard>> = OnceLock::new();

/// Initialize logging with optional console and file outputs.
///
/// Safe to call again after a host reload; only the first call installs
/// a subscriber. Console output is compact and colored, file output is
/// plain with targets so overlay lines are easy to grep out of a shared
/// log.
pub fn init_logging(enable_console: bool, log_file_path: Option<PathBuf>) {
    if LOG_GUARDS.get().is_some() {
        return;
    }

    let mut guards = Vec::new();

    // INFO everywhere, DEBUG for this crate, unless the env var says more
    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
        .add_directive("player_arrows=debug".parse().unwrap());

    let file_layer = log_file_path.and_then(|path| {
        let parent = path.parent()?;
        let file_name = path.file_name()?.to_str()?;

        let appender = tracing_appender::rolling::never(parent, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        guards.push(guard);

        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
    });

    let console_layer = enable_console.then(|| {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(writer)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    let _ = LOG_GUARDS.set(guards);
}
