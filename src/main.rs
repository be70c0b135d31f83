use std::io::Write;

use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};

use podlog::config::args::Args;
use podlog::config::podlog_configuration::PodLogConfiguration;
use podlog::util::logging::setup_logging;
use podlog::BlockingLogReader;

fn main() -> Result<()> {
    let configuration = PodLogConfiguration::try_from(Args::parse())?;
    let _logger = setup_logging(&configuration.log_level, configuration.logs_dir.clone())?;
    if let Some(message) = &configuration.logs_dir_error {
        warn!("{message}; logging to stderr only");
    }
    debug!("{:?}", configuration);

    let reader = BlockingLogReader::connect(
        configuration.num_backend_threads,
        configuration.accept_invalid_certs,
    )?;

    if configuration.request.follow {
        info!(
            "Following logs of {} until the stream is closed",
            configuration.request
        );
    }
    let text = reader.get_logs_with_timeout(&configuration.request, configuration.timeout)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
