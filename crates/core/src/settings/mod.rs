use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::DEFAULT_ENDPOINT;

/// Log level for the CLI and library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  Off,
  Warn,
  #[default]
  Info,
  Debug,
  Trace,
}

impl LogLevel {
  /// Directive string understood by the tracing filter.
  pub fn as_filter(self) -> &'static str {
    match self {
      LogLevel::Off => "off",
      LogLevel::Warn => "warn",
      LogLevel::Info => "info",
      LogLevel::Debug => "debug",
      LogLevel::Trace => "trace",
    }
  }
}

/// Effective settings after merging defaults, global, and project config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
  /// Base URL of the control agent
  pub endpoint: String,
  pub username: String,
  pub password: String,
  pub log_level: LogLevel,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      endpoint: DEFAULT_ENDPOINT.to_string(),
      username: "root".to_string(),
      password: "root".to_string(),
      log_level: LogLevel::Info,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
struct PartialSettings {
  pub endpoint: Option<String>,
  pub username: Option<String>,
  pub password: Option<String>,
  pub log_level: Option<LogLevel>,
}

impl PartialSettings {
  fn merge_over(self, base: Settings) -> Settings {
    let PartialSettings {
      endpoint,
      username,
      password,
      log_level,
    } = self;
    let Settings {
      endpoint: base_endpoint,
      username: base_username,
      password: base_password,
      log_level: base_log_level,
    } = base;
    Settings {
      endpoint: endpoint.unwrap_or(base_endpoint),
      username: username.unwrap_or(base_username),
      password: password.unwrap_or(base_password),
      log_level: log_level.unwrap_or(base_log_level),
    }
  }
}

#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml: {0}")]
  Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Location of the global config file (~/.config/keactl/config.toml)
pub fn global_config_path() -> Option<PathBuf> {
  dirs::config_dir().map(|p| p.join("keactl").join("config.toml"))
}

/// Location of the project config file (./keactl.toml)
pub fn project_config_path(project_root: &Path) -> PathBuf {
  project_root.join("keactl.toml")
}

/// Load settings by resolving the default global and project paths.
/// Project config overrides global; both override defaults.
pub fn load(project_root: Option<&Path>) -> Result<Settings> {
  let global = global_config_path();
  let project = project_root.map(project_config_path);
  load_from_paths(global.as_deref(), project.as_deref())
}

fn load_from_paths(global: Option<&Path>, project: Option<&Path>) -> Result<Settings> {
  let mut settings = Settings::default();

  if let Some(g) = global
    && let Ok(s) = fs::read_to_string(g)
  {
    let partial: PartialSettings = toml::from_str(&s)?;
    settings = partial.merge_over(settings);
  }

  if let Some(p) = project
    && let Ok(s) = fs::read_to_string(p)
  {
    let partial: PartialSettings = toml::from_str(&s)?;
    settings = partial.merge_over(settings);
  }

  Ok(settings)
}

/// Endpoint precedence: an explicit flag, then KEACTL_ENDPOINT, then the
/// value from the config files.
pub fn resolve_endpoint(flag: Option<&str>, settings: &Settings) -> String {
  if let Some(endpoint) = flag {
    return endpoint.to_string();
  }
  if let Ok(endpoint) = env::var("KEACTL_ENDPOINT")
    && !endpoint.is_empty()
  {
    return endpoint;
  }
  settings.endpoint.clone()
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::fs;

  #[test]
  fn defaults_point_at_the_local_agent() {
    let settings = Settings::default();
    assert_eq!(settings.endpoint, "http://127.0.0.1:8000");
    assert_eq!(settings.username, "root");
    assert_eq!(settings.password, "root");
    assert_eq!(settings.log_level, LogLevel::Info);
  }

  #[test]
  fn merge_precedence_project_overrides_global_over_defaults() {
    let td = tempfile::tempdir().unwrap();
    let global = td.path().join("global.toml");
    let project = td.path().join("project.toml");

    fs::write(
      &global,
      r#"
endpoint = "http://10.0.0.1:8000"
log_level = "warn"
"#,
    )
    .unwrap();

    fs::write(
      &project,
      r#"
endpoint = "http://10.0.0.2:8000"
password = "lab"
"#,
    )
    .unwrap();

    let settings = load_from_paths(Some(&global), Some(&project)).unwrap();
    // project overrides global
    assert_eq!(settings.endpoint, "http://10.0.0.2:8000");
    // global overrides default
    assert_eq!(settings.log_level, LogLevel::Warn);
    // project adds value, default survives where nothing overrides
    assert_eq!(settings.password, "lab");
    assert_eq!(settings.username, "root");
  }

  #[test]
  fn missing_files_fall_back_to_defaults() {
    let td = tempfile::tempdir().unwrap();
    let settings = load_from_paths(
      Some(&td.path().join("nope.toml")),
      Some(&td.path().join("also-nope.toml")),
    )
    .unwrap();
    assert_eq!(settings, Settings::default());
  }

  #[test]
  fn invalid_toml_is_an_error() {
    let td = tempfile::tempdir().unwrap();
    let project = td.path().join("broken.toml");
    fs::write(&project, "endpoint = [not toml").unwrap();
    let err = load_from_paths(None, Some(&project)).unwrap_err();
    assert!(matches!(err, SettingsError::Toml(_)));
  }

  #[test]
  fn endpoint_flag_beats_env_beats_config() {
    let settings = Settings {
      endpoint: "http://config:8000".to_string(),
      ..Default::default()
    };
    unsafe { std::env::set_var("KEACTL_ENDPOINT", "http://env:8000") };
    assert_eq!(
      resolve_endpoint(Some("http://flag:8000"), &settings),
      "http://flag:8000"
    );
    assert_eq!(resolve_endpoint(None, &settings), "http://env:8000");
    unsafe { std::env::remove_var("KEACTL_ENDPOINT") };
    assert_eq!(resolve_endpoint(None, &settings), "http://config:8000");
  }
}
