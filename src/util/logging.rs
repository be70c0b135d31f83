use std::path::PathBuf;

use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle, WriteMode};

use crate::util::error::PodLogError;

/// Logs go to stderr; stdout carries nothing but the fetched log text.
pub fn setup_logging(
    log_level: &str,
    logs_dir: Option<PathBuf>,
) -> Result<LoggerHandle, PodLogError> {
    let logger = Logger::try_with_env_or_str(log_level)?.format(flexi_logger::colored_with_thread);

    let logger = match logs_dir {
        Some(logs_dir) => logger
            .log_to_file(FileSpec::default().directory(logs_dir).suppress_timestamp())
            .append()
            .duplicate_to_stderr(Duplicate::All),
        None => logger.log_to_stderr(),
    };

    Ok(logger.write_mode(WriteMode::Direct).start()?)
}
