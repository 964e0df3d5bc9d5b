use color_eyre::Result;
use std::{fs::create_dir_all, path::PathBuf};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = ".logs";
const LOG_FILE: &str = "lark-relay.log";
const SERVICE_NAME: &str = "lark-relay";

/// Initialize tracing: `RUST_LOG`-filtered records to a file under `.logs/`
/// (daily rolling in debug builds, single file in release). The terminal is
/// reserved for user-facing output; the log only records submissions,
/// replies and failures. The `bunyan` feature switches the file to JSON.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn setup_logger() -> Result<()> {
    let logfile = open_logfile()?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(feature = "bunyan")]
    {
        use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};

        let formatter = BunyanFormattingLayer::new(SERVICE_NAME.into(), logfile);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(formatter)
            .init();
    }

    #[cfg(not(feature = "bunyan"))]
    {
        let formatter = tracing_subscriber::fmt::layer()
            .with_writer(logfile)
            .with_ansi(false);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(formatter)
            .init();
    }

    Ok(())
}

fn open_logfile() -> Result<RollingFileAppender> {
    let log_dir_path = PathBuf::from(LOG_DIR);
    create_dir_all(&log_dir_path)?;

    let logfile = if cfg!(debug_assertions) {
        rolling::daily(log_dir_path, LOG_FILE)
    } else {
        rolling::never(log_dir_path, LOG_FILE)
    };
    Ok(logfile)
}
