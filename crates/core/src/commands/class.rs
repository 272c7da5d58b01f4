use serde_json::{Value, json};

use crate::client::{Context, Result};

impl Context {
  /// `class-add`: the class definition is passed through as arguments.
  pub fn class_add(&mut self, service: &str, class: &Value) -> Result<Vec<Value>> {
    self.transact("class-add", &[service], Some(class.clone()))
  }

  pub fn class_del(&mut self, service: &str, name: &str) -> Result<Vec<Value>> {
    self.transact("class-del", &[service], Some(json!({ "name": name })))
  }

  pub fn class_list(&mut self, service: &str) -> Result<Vec<Value>> {
    self.transact("class-list", &[service], None)
  }
}
