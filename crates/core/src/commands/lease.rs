use serde_json::{Value, json};

use crate::client::{Context, Result};

impl Context {
  /// `lease4-add`: the lease fields are passed through as arguments.
  pub fn lease4_add(&mut self, lease: &Value) -> Result<Vec<Value>> {
    self.transact("lease4-add", &["dhcp4"], Some(lease.clone()))
  }

  pub fn lease4_del(&mut self, ip_address: &str) -> Result<Vec<Value>> {
    self.transact(
      "lease4-del",
      &["dhcp4"],
      Some(json!({ "ip-address": ip_address })),
    )
  }

  pub fn lease4_get_by_ip(&mut self, ip_address: &str) -> Result<Vec<Value>> {
    self.transact(
      "lease4-get",
      &["dhcp4"],
      Some(json!({ "ip-address": ip_address })),
    )
  }

  pub fn lease4_get_by_hw_address(&mut self, hw_address: &str) -> Result<Vec<Value>> {
    self.transact(
      "lease4-get-by-hw-address",
      &["dhcp4"],
      Some(json!({ "hw-address": hw_address })),
    )
  }

  pub fn lease4_get_by_client_id(&mut self, client_id: &str) -> Result<Vec<Value>> {
    self.transact(
      "lease4-get-by-client-id",
      &["dhcp4"],
      Some(json!({ "client-id": client_id })),
    )
  }

  pub fn lease4_get_all(&mut self, subnet_id: u32) -> Result<Vec<Value>> {
    self.transact(
      "lease4-get-all",
      &["dhcp4"],
      Some(json!({ "subnets": [subnet_id] })),
    )
  }

  /// `lease4-wipe`: drop every lease of one subnet.
  pub fn lease4_wipe(&mut self, subnet_id: u32) -> Result<Vec<Value>> {
    self.transact(
      "lease4-wipe",
      &["dhcp4"],
      Some(json!({ "subnet-id": subnet_id })),
    )
  }

  pub fn lease6_add(&mut self, lease: &Value) -> Result<Vec<Value>> {
    self.transact("lease6-add", &["dhcp6"], Some(lease.clone()))
  }

  pub fn lease6_del(&mut self, ip_address: &str) -> Result<Vec<Value>> {
    self.transact(
      "lease6-del",
      &["dhcp6"],
      Some(json!({ "ip-address": ip_address })),
    )
  }

  pub fn lease6_get_by_ip(&mut self, ip_address: &str) -> Result<Vec<Value>> {
    self.transact(
      "lease6-get",
      &["dhcp6"],
      Some(json!({ "ip-address": ip_address })),
    )
  }

  pub fn lease6_get_by_duid(&mut self, duid: &str, iaid: u32) -> Result<Vec<Value>> {
    self.transact(
      "lease6-get-by-duid",
      &["dhcp6"],
      Some(json!({ "duid": duid, "iaid": iaid })),
    )
  }

  pub fn lease6_get_all(&mut self, subnet_id: u32) -> Result<Vec<Value>> {
    self.transact(
      "lease6-get-all",
      &["dhcp6"],
      Some(json!({ "subnets": [subnet_id] })),
    )
  }

  pub fn lease6_wipe(&mut self, subnet_id: u32) -> Result<Vec<Value>> {
    self.transact(
      "lease6-wipe",
      &["dhcp6"],
      Some(json!({ "subnet-id": subnet_id })),
    )
  }
}
