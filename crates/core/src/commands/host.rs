use serde_json::{Value, json};

use crate::client::{Context, Result};

impl Context {
  /// `reservation-add`: the host document is nested under `reservation`.
  pub fn reservation_add(&mut self, service: &str, host: &Value) -> Result<Vec<Value>> {
    self.transact(
      "reservation-add",
      &[service],
      Some(json!({ "reservation": host })),
    )
  }

  /// `reservation-del` addressed by IP, the only identifier type exposed
  /// here.
  pub fn reservation_del_by_ip(
    &mut self,
    service: &str,
    subnet_id: u32,
    ip_address: &str,
  ) -> Result<Vec<Value>> {
    self.transact(
      "reservation-del",
      &[service],
      Some(json!({
        "subnet-id": subnet_id,
        "identifier-type": "ip-address",
        "identifier": ip_address,
      })),
    )
  }

  pub fn reservation_get_by_ip(&mut self, service: &str, ip_address: &str) -> Result<Vec<Value>> {
    self.transact(
      "reservation-get-by-address",
      &[service],
      Some(json!({ "ip-address": ip_address })),
    )
  }

  pub fn reservation_get_all(&mut self, service: &str, subnet_id: u32) -> Result<Vec<Value>> {
    self.transact(
      "reservation-get-all",
      &[service],
      Some(json!({ "subnet-id": subnet_id })),
    )
  }
}
