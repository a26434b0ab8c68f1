//! Log output for the `pricewise` binary.
//!
//! Records go to stderr so report and JSON output on stdout stay clean, and
//! optionally to an append-only file. `--quiet` drops the terminal layer only.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "warn";

/// Logging options taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` applies when `None`.
    pub level: Option<String>,
    /// File that log records are appended to.
    pub file: Option<PathBuf>,
    /// Silences terminal log output; file logging is unaffected.
    pub quiet: bool,
}

impl LogSettings {
    /// The filter for these settings: `level`, else `RUST_LOG`, else `warn`.
    pub fn filter(&self) -> Result<EnvFilter> {
        match &self.level {
            Some(level) => {
                EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
            }
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Installs the global subscriber. Fails on a bad filter, an unwritable log
/// file, or a second call.
pub fn init(settings: &LogSettings) -> Result<()> {
    let filter = settings.filter()?;
    let file = settings.file.as_deref().map(open_log_file).transpose()?;

    let stderr_layer = (!settings.quiet).then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
    });
    let file_layer = file.map(|file| fmt::layer().with_writer(Mutex::new(file)).with_ansi(false));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global logger is already installed")?;

    debug!(?settings, "logging initialized");
    Ok(())
}
