use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use log::{info, warn};
use tokio::runtime::Runtime;

use crate::backend::log_reader::LogReader;
use crate::client::kube_connection::KubeConnection;
use crate::client::ClusterConnection;
use crate::model::log_request::LogRequest;
use crate::util::error::PodLogError;

fn next_worker_name() -> String {
    static WORKER_ID: AtomicUsize = AtomicUsize::new(0);
    format!("k8s-{}", WORKER_ID.fetch_add(1, Ordering::Relaxed))
}

/// Synchronous face of [`LogReader`]: every call blocks the calling thread on
/// an owned runtime until the log is fully read.
pub struct BlockingLogReader<C = KubeConnection> {
    runtime: Runtime,
    reader: LogReader<C>,
}

impl BlockingLogReader<KubeConnection> {
    pub fn connect(
        num_backend_threads: usize,
        accept_invalid_certs: bool,
    ) -> Result<Self, PodLogError> {
        let runtime = Self::spawn_runtime(num_backend_threads)?;

        let connection =
            runtime.block_on(async { KubeConnection::infer(accept_invalid_certs).await })?;

        Ok(Self {
            runtime,
            reader: LogReader::new(connection),
        })
    }
}

impl<C: ClusterConnection> BlockingLogReader<C> {
    pub fn with_connection(
        num_backend_threads: usize,
        connection: C,
    ) -> Result<Self, PodLogError> {
        Ok(Self {
            runtime: Self::spawn_runtime(num_backend_threads)?,
            reader: LogReader::new(connection),
        })
    }

    fn spawn_runtime(worker_threads: usize) -> Result<Runtime, PodLogError> {
        if worker_threads == 0 {
            return Err(PodLogError::Configuration(
                "at least one backend thread is required".to_string(),
            ));
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads)
            .thread_name_fn(next_worker_name)
            .enable_all()
            .build()?;
        info!("Started log runtime with {worker_threads} worker threads");

        Ok(runtime)
    }

    pub fn get_logs(
        &self,
        namespace: &str,
        pod_name: &str,
        container_name: &str,
    ) -> Result<String, PodLogError> {
        let request = LogRequest::snapshot(namespace, pod_name, container_name);
        self.get_logs_with_timeout(&request, None)
    }

    /// Blocks until the server closes the stream, usually when the container exits.
    pub fn get_logs_with_follow(
        &self,
        namespace: &str,
        pod_name: &str,
        container_name: &str,
    ) -> Result<String, PodLogError> {
        let request = LogRequest::follow(namespace, pod_name, container_name);
        self.get_logs_with_timeout(&request, None)
    }

    /// `None` waits for as long as the stream stays open. On expiry the
    /// stream is dropped and nothing read so far is returned.
    pub fn get_logs_with_timeout(
        &self,
        request: &LogRequest,
        timeout: Option<Duration>,
    ) -> Result<String, PodLogError> {
        let Some(timeout) = timeout else {
            return Ok(self.runtime.block_on(self.reader.get_text(request))?);
        };

        info!("Waiting at most {timeout:?} for logs of {request}");
        match self
            .runtime
            .block_on(async { tokio::time::timeout(timeout, self.reader.get_text(request)).await })
        {
            Ok(result) => Ok(result?),
            Err(_) => {
                warn!("Gave up on logs of {request} after {timeout:?}");
                Err(PodLogError::Timeout {
                    request: request.clone(),
                    timeout,
                })
            }
        }
    }
}
