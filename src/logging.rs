use tracing_appender::non_blocking::WorkerGuard;

use crate::config::Config;

/// Name of the log file inside the configured log directory.
pub const LOG_FILE_NAME: &str = "mazerun.log";

/// Sends tracing output to a log file, keeping stdout free for the maze.
///
/// The returned guard flushes pending log lines when dropped, so keep it alive until the
/// program exits.
pub fn init(config: &Config) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)?;
    let file_appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Logging to {}", config.log_dir.join(LOG_FILE_NAME).display());
    Ok(guard)
}
