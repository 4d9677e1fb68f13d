use std::path::Path;

use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use log::debug;

/// Starts the global logger.
///
/// `RUST_LOG` takes precedence over `base_level`. Output always goes to stderr;
/// when `log_dir` is given, rotating log files are written there as well.
/// The returned handle must stay alive for file output to keep flushing.
pub fn setup_logging(base_level: &str, log_dir: Option<&Path>) -> anyhow::Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(base_level)?;

    let handle = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .duplicate_to_stderr(Duplicate::All)
            .rotate(
                Criterion::Size(1024 * 1024), //1MB
                Naming::Timestamps,
                Cleanup::KeepLogFiles(5),
            )
            .start()?,
        None => logger.log_to_stderr().start()?,
    };

    match log_dir {
        Some(dir) => debug!(
            "Logger started (default level '{}'), files in {}",
            base_level,
            dir.display()
        ),
        None => debug!("Logger started (default level '{}')", base_level),
    }

    Ok(handle)
}
