use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::model::log_request::LogRequest;

pub mod kube_connection;

/// Raw chunks of a container log as they arrive from the API server.
pub type LogByteStream = BoxStream<'static, std::io::Result<Vec<u8>>>;

/// An authenticated handle to a cluster that can open container log streams.
///
/// Implementations must report a rejected request (missing namespace, pod or
/// container, denied access) from `open_log_stream` itself, never as stream
/// content. The returned stream ends when the server closes it.
#[async_trait]
pub trait ClusterConnection: Send + Sync {
    async fn open_log_stream(&self, request: &LogRequest) -> Result<LogByteStream, kube::Error>;
}
