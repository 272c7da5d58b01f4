use serde_json::{Value, json};

use crate::client::{Context, Result};

impl Context {
  pub fn subnet4_list(&mut self) -> Result<Vec<Value>> {
    self.transact("subnet4-list", &["dhcp4"], None)
  }

  pub fn subnet4_get(&mut self, id: u32) -> Result<Vec<Value>> {
    self.transact("subnet4-get", &["dhcp4"], Some(json!({ "id": id })))
  }

  /// `subnet4-add`: the argument document is passed through as-is.
  pub fn subnet4_add(&mut self, arguments: &Value) -> Result<Vec<Value>> {
    self.transact("subnet4-add", &["dhcp4"], Some(arguments.clone()))
  }

  pub fn subnet4_update(&mut self, arguments: &Value) -> Result<Vec<Value>> {
    self.transact("subnet4-update", &["dhcp4"], Some(arguments.clone()))
  }

  pub fn subnet4_del(&mut self, id: u32) -> Result<Vec<Value>> {
    self.transact("subnet4-del", &["dhcp4"], Some(json!({ "id": id })))
  }

  pub fn subnet6_list(&mut self) -> Result<Vec<Value>> {
    self.transact("subnet6-list", &["dhcp6"], None)
  }

  pub fn subnet6_get(&mut self, id: u32) -> Result<Vec<Value>> {
    self.transact("subnet6-get", &["dhcp6"], Some(json!({ "id": id })))
  }

  pub fn subnet6_add(&mut self, arguments: &Value) -> Result<Vec<Value>> {
    self.transact("subnet6-add", &["dhcp6"], Some(arguments.clone()))
  }

  pub fn subnet6_update(&mut self, arguments: &Value) -> Result<Vec<Value>> {
    self.transact("subnet6-update", &["dhcp6"], Some(arguments.clone()))
  }

  pub fn subnet6_del(&mut self, id: u32) -> Result<Vec<Value>> {
    self.transact("subnet6-del", &["dhcp6"], Some(json!({ "id": id })))
  }
}
