//! Reads container logs of Kubernetes pods, either as a snapshot of what the
//! server holds now or as everything a container writes until its log stream
//! is closed.

pub mod backend;
pub mod client;
pub mod config;
pub mod model;
pub mod util;

pub use backend::blocking_log_reader::BlockingLogReader;
pub use backend::log_reader::LogReader;
pub use client::kube_connection::KubeConnection;
pub use client::{ClusterConnection, LogByteStream};
pub use model::log_request::LogRequest;
pub use util::error::{LogError, PodLogError};
