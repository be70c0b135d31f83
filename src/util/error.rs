use std::time::Duration;

use crate::model::log_request::LogRequest;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to request logs of {request}: {source}")]
    Connection {
        request: LogRequest,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to read log stream of {request}: {source}")]
    StreamRead {
        request: LogRequest,
        #[source]
        source: std::io::Error,
    },
}

impl LogError {
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    pub fn is_stream_read(&self) -> bool {
        matches!(self, Self::StreamRead { .. })
    }

    pub fn request(&self) -> &LogRequest {
        match self {
            Self::Connection { request, .. } | Self::StreamRead { request, .. } => request,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PodLogError {
    #[error(transparent)]
    Log(#[from] LogError),

    #[error("Kube client error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Timed out after {timeout:?} waiting for logs of {request}")]
    Timeout {
        request: LogRequest,
        timeout: Duration,
    },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("I/O Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}
