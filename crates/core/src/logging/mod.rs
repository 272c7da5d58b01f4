//! JSON-lines logging for the library and the CLI.
//!
//! Transactions emit `event`-tagged records (`command_dispatched`,
//! `transaction_failed`, ...) through `tracing`; this module routes them to
//! an append-only `logs.jsonl` file so command output on stdout stays clean.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{info, subscriber::set_global_default};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

use crate::settings::LogLevel;

// Keeps the background writer alive for the rest of the process.
static WORKER_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Default log file location (`<state dir>/keactl/logs.jsonl`).
pub fn logs_path() -> Option<PathBuf> {
  dirs::state_dir()
    .or_else(dirs::data_dir)
    .map(|p| p.join("keactl").join("logs.jsonl"))
}

/// Install the global JSON-lines subscriber writing to `path`.
///
/// Logging is best effort: an unwritable path leaves the process without a
/// subscriber rather than failing the command, and only the first call per
/// process takes effect.
pub fn init(path: &Path, level: LogLevel) {
  if let Some(parent) = path.parent() {
    let _ = fs::create_dir_all(parent);
  }
  let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
    return;
  };

  let (writer, guard) = tracing_appender::non_blocking(file);
  let _ = WORKER_GUARD.set(guard);

  let layer = fmt::layer()
    .with_timer(ChronoUtc::rfc_3339())
    .json()
    .with_current_span(true)
    .with_span_list(true)
    .with_target(false)
    .with_thread_ids(false)
    .with_thread_names(false)
    .with_writer(move || writer.clone());
  let subscriber = Registry::default()
    .with(EnvFilter::new(level.as_filter()))
    .with(layer);
  let _ = set_global_default(subscriber);

  info!(event = "logging_started", path = %path.display(), level = ?level);
}
