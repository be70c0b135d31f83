use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use hyper::{Body, StatusCode};
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::serde_json;
use kube::error::ErrorResponse;
use kube::{Client, Resource};
use log::{debug, info};

use crate::client::{ClusterConnection, LogByteStream};
use crate::model::log_request::LogRequest;

#[derive(Clone)]
pub struct KubeConnection {
    client: Client,
}

impl KubeConnection {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Resolves the cluster from the in-cluster environment or the local kubeconfig.
    pub async fn infer(accept_invalid_certs: bool) -> Result<Self, kube::Error> {
        let config = Self::get_default_config(accept_invalid_certs).await?;
        info!("Initialized k8s configuration for {}", config.cluster_url);

        let client = Client::try_from(config)?;
        info!("Initialized client");

        Ok(Self::new(client))
    }

    async fn get_default_config(accept_invalid_certs: bool) -> Result<kube::Config, kube::Error> {
        kube::Config::infer()
            .await
            .map(|mut config| {
                config.accept_invalid_certs = accept_invalid_certs;
                // a followed log stays silent for as long as the container does
                config.read_timeout = None;
                config
            })
            .map_err(kube::Error::InferConfig)
    }
}

#[async_trait]
impl ClusterConnection for KubeConnection {
    async fn open_log_stream(&self, request: &LogRequest) -> Result<LogByteStream, kube::Error> {
        let url_path = Pod::url_path(&(), Some(request.namespace.as_str()));
        let http_request = kube::core::Request::new(url_path)
            .logs(&request.pod_name, &request.log_params())
            .map_err(kube::Error::BuildRequest)?;

        debug!("Sending {} {}", http_request.method(), http_request.uri());
        let response = self.client.send(http_request.map(Body::from)).await?;

        let status = response.status();
        if !status.is_success() {
            let body = hyper::body::to_bytes(response.into_body())
                .await
                .map_err(kube::Error::HyperError)?;
            return Err(kube::Error::Api(api_error_response(status, &body)));
        }

        let stream = response
            .into_body()
            .map_ok(|bytes| bytes.to_vec())
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err));

        Ok(stream.boxed())
    }
}

/// The API server answers with a `Status` object on failure; proxies in
/// between may answer with anything else.
fn api_error_response(status: StatusCode, body: &[u8]) -> ErrorResponse {
    if let Ok(response) = serde_json::from_slice::<ErrorResponse>(body) {
        return response;
    }

    let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
    let text = String::from_utf8_lossy(body).trim().to_string();

    ErrorResponse {
        status: "Failure".to_string(),
        message: if text.is_empty() { reason.clone() } else { text },
        reason,
        code: status.as_u16(),
    }
}
