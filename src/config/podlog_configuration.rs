use std::path::PathBuf;
use std::time::Duration;

use crate::model::log_request::LogRequest;

#[derive(Debug)]
pub struct PodLogConfiguration {
    pub request: LogRequest,
    pub timeout: Option<Duration>,
    pub accept_invalid_certs: bool,
    pub num_backend_threads: usize,
    pub logs_dir: Option<PathBuf>,
    /// Reported once logging is up; file logging is off in that case.
    pub logs_dir_error: Option<String>,
    pub log_level: String,
}
