use std::fmt::{Display, Formatter};

use kube::api::LogParams;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRequest {
    pub namespace: String,
    pub pod_name: String,
    pub container_name: String,
    pub follow: bool,
}

impl LogRequest {
    pub fn new(namespace: &str, pod_name: &str, container_name: &str, follow: bool) -> Self {
        Self {
            namespace: namespace.to_string(),
            pod_name: pod_name.to_string(),
            container_name: container_name.to_string(),
            follow,
        }
    }

    /// Whatever the server has buffered for the container right now.
    pub fn snapshot(namespace: &str, pod_name: &str, container_name: &str) -> Self {
        Self::new(namespace, pod_name, container_name, false)
    }

    /// Everything the container writes until the server closes the stream.
    pub fn follow(namespace: &str, pod_name: &str, container_name: &str) -> Self {
        Self::new(namespace, pod_name, container_name, true)
    }

    pub fn log_params(&self) -> LogParams {
        LogParams {
            container: Some(self.container_name.clone()),
            follow: self.follow,
            ..LogParams::default()
        }
    }
}

impl Display for LogRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}[{}]",
            self.namespace, self.pod_name, self.container_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_params() {
        let params = LogRequest::follow("ns1", "pod-a", "main").log_params();
        assert_eq!(params.container.as_deref(), Some("main"));
        assert!(params.follow);
        assert!(params.tail_lines.is_none());
        assert!(params.since_seconds.is_none());
        assert!(!params.previous);
        assert!(!params.timestamps);

        assert!(!LogRequest::snapshot("ns1", "pod-a", "main").log_params().follow);
    }

    #[test]
    fn test_display() {
        let request = LogRequest::snapshot("ns1", "pod-a", "main");
        assert_eq!(request.to_string(), "ns1/pod-a[main]");
    }
}
