use futures::TryStreamExt;
use log::{debug, info};

use crate::client::ClusterConnection;
use crate::model::log_request::LogRequest;
use crate::util::error::LogError;

/// Reads whole container logs through a [`ClusterConnection`].
///
/// Every call opens its own stream and drains it before returning; nothing is
/// shared between calls. In follow mode the returned future completes only when
/// the server closes the stream, so callers that need a deadline wrap the call
/// themselves (see `BlockingLogReader::get_logs_with_timeout`).
pub struct LogReader<C> {
    connection: C,
}

impl<C: ClusterConnection> LogReader<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    pub async fn get_logs(
        &self,
        namespace: &str,
        pod_name: &str,
        container_name: &str,
    ) -> Result<String, LogError> {
        self.get_text(&LogRequest::snapshot(namespace, pod_name, container_name))
            .await
    }

    pub async fn get_logs_with_follow(
        &self,
        namespace: &str,
        pod_name: &str,
        container_name: &str,
    ) -> Result<String, LogError> {
        self.get_text(&LogRequest::follow(namespace, pod_name, container_name))
            .await
    }

    pub async fn get_text(&self, request: &LogRequest) -> Result<String, LogError> {
        let bytes = self.fetch(request).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub async fn fetch(&self, request: &LogRequest) -> Result<Vec<u8>, LogError> {
        debug!(
            "About to fetch log of pod {} in namespace {} (container {}) with follow={}",
            request.pod_name, request.namespace, request.container_name, request.follow
        );

        let stream = self
            .connection
            .open_log_stream(request)
            .await
            .map_err(|source| LogError::Connection {
                request: request.clone(),
                source,
            })?;

        let bytes: Vec<u8> = stream
            .try_concat()
            .await
            .map_err(|source| LogError::StreamRead {
                request: request.clone(),
                source,
            })?;

        info!("Fetched {} bytes of log for {request}", bytes.len());

        Ok(bytes)
    }
}
