use serde_json::Value;

use crate::client::{Context, Result};

impl Context {
  pub fn cache_clear(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("cache-clear", &[service], None)
  }

  pub fn cache_size(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("cache-size", &[service], None)
  }

  pub fn cache_get(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("cache-get", &[service], None)
  }
}
