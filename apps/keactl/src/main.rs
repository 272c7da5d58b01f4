fn main() {
  // Initialize structured logging early. A broken config file falls back to
  // the default log level here; the command dispatch reloads the settings
  // and warns about the error on stderr.
  let root = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
  let settings = keactl_core::settings::load(Some(&root)).unwrap_or_default();
  if let Some(log_path) = keactl_core::logging::logs_path() {
    keactl_core::logging::init(&log_path, settings.log_level);
  }

  cli::run();
}
