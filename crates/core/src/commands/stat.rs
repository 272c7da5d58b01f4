use serde_json::{Value, json};

use crate::client::{Context, Result};

impl Context {
  pub fn statistic_get(&mut self, service: &str, name: &str) -> Result<Vec<Value>> {
    self.transact("statistic-get", &[service], Some(json!({ "name": name })))
  }

  pub fn statistic_get_all(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("statistic-get-all", &[service], None)
  }

  pub fn statistic_reset(&mut self, service: &str, name: &str) -> Result<Vec<Value>> {
    self.transact("statistic-reset", &[service], Some(json!({ "name": name })))
  }

  pub fn statistic_reset_all(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("statistic-reset-all", &[service], None)
  }

  pub fn statistic_remove(&mut self, service: &str, name: &str) -> Result<Vec<Value>> {
    self.transact("statistic-remove", &[service], Some(json!({ "name": name })))
  }

  pub fn statistic_remove_all(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("statistic-remove-all", &[service], None)
  }
}
