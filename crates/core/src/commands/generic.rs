use serde_json::Value;

use crate::client::{Context, Result};

impl Context {
  /// `list-commands`: names of the commands a service supports.
  pub fn list_commands(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("list-commands", &[service], None)
  }

  /// `version-get` for any number of services; with an empty slice the
  /// control agent answers for itself.
  pub fn version_get(&mut self, services: &[&str]) -> Result<Vec<Value>> {
    self.transact("version-get", services, None)
  }

  /// `status-get`: pid, uptime and reload time of one service.
  pub fn status_get(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("status-get", &[service], None)
  }

  /// `build-report`: the configure/build parameters of one service.
  pub fn build_report(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("build-report", &[service], None)
  }

  /// `shutdown`: ask one service to exit cleanly.
  pub fn shutdown(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("shutdown", &[service], None)
  }
}
