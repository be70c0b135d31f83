use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::config::podlog_configuration::PodLogConfiguration;
use crate::model::log_request::LogRequest;
use crate::util::error::PodLogError;
use crate::util::paths::PODLOG_HOME_DIR;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = r###"podlog

Prints the log of a single pod container. With --follow, waits until the
container's log stream is closed by the server and prints everything it wrote.
"###
)]
pub struct Args {
    /// Name of the pod
    pod: String,

    /// Namespace of the pod
    #[arg(short, long, default_value = "default")]
    namespace: String,

    /// Name of the container inside the pod
    #[arg(short, long)]
    container: String,

    /// Wait for the container's log stream to close before printing.
    #[arg(short, long)]
    follow: bool,

    /// Give up after this many seconds. Without it, --follow waits indefinitely.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Skip TLS verification of the API server certificate.
    #[arg(long)]
    accept_invalid_certs: bool,

    /// Number of tokio worker threads used to communicate with k8s cluster.
    #[arg(long, default_value_t = 2)]
    num_backend_threads: usize,

    /// A directory where podlog keeps its own files.
    #[arg(long, default_value_os_t = PODLOG_HOME_DIR.clone())]
    home_dir: PathBuf,

    /// A directory where podlog logs will be stored. If not specified, it will be set to
    /// [<podlog-home-dir>/logs]. If the directory can't be created, logs go to stderr only.
    #[arg(long)]
    logs_dir: Option<PathBuf>,

    /// Log level or filter spec, overridden by RUST_LOG.
    #[arg(long, default_value = "info")]
    log_level: String,
}

pub fn get_logs_dir(podlog_home_dir: &Path) -> PathBuf {
    podlog_home_dir.join("logs")
}

impl TryFrom<Args> for PodLogConfiguration {
    type Error = PodLogError;

    fn try_from(value: Args) -> Result<Self, Self::Error> {
        if value.num_backend_threads == 0 {
            return Err(PodLogError::Configuration(
                "--num-backend-threads must be at least 1".to_string(),
            ));
        }

        let logs_dir = value
            .logs_dir
            .unwrap_or_else(|| get_logs_dir(&value.home_dir));
        // the logger is not running yet, so a failure is carried in the configuration
        let (logs_dir, logs_dir_error) = match std::fs::create_dir_all(&logs_dir) {
            Ok(()) => (Some(logs_dir), None),
            Err(err) => (
                None,
                Some(format!("Failed to create logs dir {}: {err}", logs_dir.display())),
            ),
        };

        Ok(Self {
            request: LogRequest::new(
                &value.namespace,
                &value.pod,
                &value.container,
                value.follow,
            ),
            timeout: value.timeout_secs.map(Duration::from_secs),
            accept_invalid_certs: value.accept_invalid_certs,
            num_backend_threads: value.num_backend_threads,
            logs_dir,
            logs_dir_error,
            log_level: value.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("podlog").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let home_dir = temp_dir.path().join("home");

        let args = parse(&["pod-a", "-c", "main", "--home-dir", home_dir.to_str().unwrap()]);
        let config = PodLogConfiguration::try_from(args).unwrap();

        assert_eq!(config.request, LogRequest::snapshot("default", "pod-a", "main"));
        assert_eq!(config.timeout, None);
        assert_eq!(config.num_backend_threads, 2);
        assert!(!config.accept_invalid_certs);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.logs_dir, Some(home_dir.join("logs")));
        assert!(home_dir.join("logs").is_dir());
        assert!(config.logs_dir_error.is_none());
    }

    #[test]
    fn test_follow_with_timeout() {
        let temp_dir = tempfile::tempdir().unwrap();
        let logs_dir = temp_dir.path().join("elsewhere");

        let args = parse(&[
            "pod-a",
            "-n",
            "ns1",
            "-c",
            "main",
            "-f",
            "--timeout-secs",
            "30",
            "--home-dir",
            temp_dir.path().to_str().unwrap(),
            "--logs-dir",
            logs_dir.to_str().unwrap(),
        ]);
        let config = PodLogConfiguration::try_from(args).unwrap();

        assert_eq!(config.request, LogRequest::follow("ns1", "pod-a", "main"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.logs_dir, Some(logs_dir));
    }

    #[test]
    fn test_unusable_logs_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("file");
        std::fs::write(&file, b"").unwrap();

        let args = parse(&[
            "pod-a",
            "-c",
            "main",
            "--home-dir",
            temp_dir.path().to_str().unwrap(),
            "--logs-dir",
            file.join("logs").to_str().unwrap(),
        ]);
        let config = PodLogConfiguration::try_from(args).unwrap();
        assert!(config.logs_dir.is_none());
        let message = config.logs_dir_error.unwrap();
        assert!(message.starts_with("Failed to create logs dir"), "{message}");
    }

    #[test]
    fn test_container_is_required() {
        assert!(Args::try_parse_from(["podlog", "pod-a"]).is_err());
    }

    #[test]
    fn test_zero_backend_threads() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = parse(&[
            "pod-a",
            "-c",
            "main",
            "--num-backend-threads",
            "0",
            "--home-dir",
            temp_dir.path().to_str().unwrap(),
        ]);
        assert!(matches!(
            PodLogConfiguration::try_from(args),
            Err(PodLogError::Configuration(_))
        ));
    }
}
