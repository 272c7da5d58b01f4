use std::fs;
use std::path::Path;

use keactl_core::client::Context;
use keactl_core::settings;
use serde_json::Value;
use tracing::debug;
use yansi::Paint;

use crate::args::Commands;
use crate::output::{self, Render};

/// Run one command against the agent and print its result. Returns the
/// process exit code: 0 on success, 1 on any failure.
pub fn dispatch(command: Commands, raw_json: bool, endpoint: Option<&str>) -> i32 {
  let mut ctx = match open_context(endpoint) {
    Ok(ctx) => ctx,
    Err(message) => {
      eprintln!("{} {}", "Error:".red(), message);
      return 1;
    }
  };
  debug!(event = "cli_dispatch", endpoint = %ctx.endpoint());

  use Commands::*;
  let (render, outcome) = match command {
    ListCommands(args) => (Render::Generic, ctx.list_commands(&args.service)),
    VersionGet(args) => {
      let services: Vec<&str> = args.services.iter().map(String::as_str).collect();
      (Render::Version, ctx.version_get(&services))
    }
    StatusGet(args) => (Render::Status, ctx.status_get(&args.service)),
    ConfigGet(args) => (Render::Config, ctx.config_get(&args.service)),
    ConfigSet(args) => match read_config_document(&args.file) {
      Ok(document) => (Render::Generic, ctx.config_set(&args.service, &document)),
      Err(message) => {
        eprintln!("{} {}", "Error:".red(), message);
        return 1;
      }
    },
    ConfigTest(args) => match read_config_document(&args.file) {
      Ok(document) => (Render::Generic, ctx.config_test(&args.service, &document)),
      Err(message) => {
        eprintln!("{} {}", "Error:".red(), message);
        return 1;
      }
    },
    ConfigReload(args) => (Render::SimpleStatus, ctx.config_reload(&args.service)),
    ConfigWrite(args) => (
      Render::Generic,
      ctx.config_write(&args.service, &args.filename),
    ),
    Subnet4List => (Render::SubnetList, ctx.subnet4_list()),
    Subnet6List => (Render::SubnetList, ctx.subnet6_list()),
    Lease4GetByIp(args) => (Render::LeaseList, ctx.lease4_get_by_ip(&args.ip_address)),
    StatisticGetAll(args) => (Render::Statistics, ctx.statistic_get_all(&args.service)),
    CacheGet(args) => (Render::Generic, ctx.cache_get(&args.service)),
    CacheSize(args) => (Render::Generic, ctx.cache_size(&args.service)),
    CacheClear(args) => (Render::SimpleStatus, ctx.cache_clear(&args.service)),
  };

  match outcome {
    Ok(elements) => {
      output::render(render, &elements, raw_json);
      0
    }
    Err(_) => {
      eprintln!("{} {}", "Error:".red(), ctx.last_error());
      1
    }
  }
}

fn open_context(endpoint: Option<&str>) -> Result<Context, String> {
  let cwd = std::env::current_dir().ok();
  let mut settings = settings::load(cwd.as_deref()).unwrap_or_else(|error| {
    eprintln!("{} ignoring config: {error}", "Warning:".yellow());
    settings::Settings::default()
  });
  settings.endpoint = settings::resolve_endpoint(endpoint, &settings);
  Context::with_settings(&settings).map_err(|e| e.to_string())
}

fn read_config_document(path: &Path) -> Result<Value, String> {
  let raw =
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
  serde_json::from_str(&raw).map_err(|e| format!("{} is not valid JSON: {e}", path.display()))
}
