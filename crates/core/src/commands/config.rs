use serde_json::{Map, Value, json};

use crate::client::{Context, Result, service_config_key};

impl Context {
  pub fn config_get(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("config-get", &[service], None)
  }

  /// `config-set`: replace the running configuration of one service. The
  /// document is nested under the capitalized service key on the wire.
  pub fn config_set(&mut self, service: &str, config: &Value) -> Result<Vec<Value>> {
    self.transact("config-set", &[service], Some(nest_config(service, config)))
  }

  /// `config-test`: validate a configuration without applying it.
  pub fn config_test(&mut self, service: &str, config: &Value) -> Result<Vec<Value>> {
    self.transact("config-test", &[service], Some(nest_config(service, config)))
  }

  /// `config-reload`: re-read the configuration file from disk.
  pub fn config_reload(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("config-reload", &[service], None)
  }

  /// `config-write`: persist the running configuration to `filename` on
  /// the server side.
  pub fn config_write(&mut self, service: &str, filename: &str) -> Result<Vec<Value>> {
    self.transact(
      "config-write",
      &[service],
      Some(json!({ "filename": filename })),
    )
  }

  /// `config-backend-pull`: fetch pending changes from config backends.
  pub fn config_backend_pull(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("config-backend-pull", &[service], None)
  }

  /// `config-hash-get`: hash of the running configuration.
  pub fn config_hash_get(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("config-hash-get", &[service], None)
  }

  /// `server-tag-get`: the config-backend server tag of one service.
  pub fn server_tag_get(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("server-tag-get", &[service], None)
  }
}

fn nest_config(service: &str, config: &Value) -> Value {
  let mut arguments = Map::new();
  arguments.insert(service_config_key(service), config.clone());
  Value::Object(arguments)
}
