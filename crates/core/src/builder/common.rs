//! Builders shared between the DHCPv4, DHCPv6 and D2 assemblers.

use serde_json::Value;

use super::types::{
  ClientClass, ControlSocket, DdnsClient, DdnsDomain, LeaseDatabase, Logger, LoggerOutput,
  OptionData, TsigKey,
};
use super::{
  BuildError, BuildResult, attach, attach_section, collect_array, leaf, nonempty, object, require,
  string_array,
};

pub(crate) fn option_data(entry: &OptionData) -> BuildResult {
  let mut node = object();
  match (nonempty(&entry.name), entry.code) {
    (Some(name), _) => attach(&mut node, Some("name"), leaf(name))?,
    (None, Some(code)) if code > 0 => attach(&mut node, Some("code"), leaf(code))?,
    _ => {
      return Err(BuildError::MissingField {
        entity: "option-data",
        field: "name or code",
      });
    }
  }
  attach(&mut node, Some("data"), leaf(entry.data.as_str()))?;
  Ok(node)
}

pub(crate) fn option_data_array(entries: &[OptionData]) -> BuildResult<Option<Value>> {
  collect_array(entries, option_data)
}

fn logger_output(output: &LoggerOutput) -> BuildResult {
  let mut node = object();
  attach(
    &mut node,
    Some("output"),
    leaf(require("logger output", "target", &output.output)?),
  )?;
  if let Some(maxsize) = output.maxsize {
    attach(&mut node, Some("maxsize"), leaf(maxsize))?;
  }
  if let Some(maxver) = output.maxver {
    attach(&mut node, Some("maxver"), leaf(maxver))?;
  }
  attach(&mut node, Some("flush"), leaf(output.flush))?;
  Ok(node)
}

pub(crate) fn logger(logger: &Logger) -> BuildResult {
  let mut node = object();
  attach(
    &mut node,
    Some("name"),
    leaf(require("logger", "name", &logger.name)?),
  )?;
  attach(
    &mut node,
    Some("severity"),
    leaf(require("logger", "severity", &logger.severity)?),
  )?;
  if let Some(level) = logger.debuglevel {
    attach(&mut node, Some("debuglevel"), leaf(level))?;
  }
  attach_section(
    &mut node,
    "output-options",
    collect_array(&logger.outputs, logger_output),
  )?;
  Ok(node)
}

pub(crate) fn tsig_key(key: &TsigKey) -> BuildResult {
  let mut node = object();
  attach(
    &mut node,
    Some("name"),
    leaf(require("tsig key", "name", &key.name)?),
  )?;
  attach(
    &mut node,
    Some("algorithm"),
    leaf(require("tsig key", "algorithm", &key.algorithm)?),
  )?;
  attach(
    &mut node,
    Some("secret"),
    leaf(require("tsig key", "secret", &key.secret)?),
  )?;
  Ok(node)
}

pub(crate) fn ddns_domain(domain: &DdnsDomain) -> BuildResult {
  let mut node = object();
  attach(
    &mut node,
    Some("name"),
    leaf(require("ddns domain", "name", &domain.name)?),
  )?;
  if let Some(key_name) = nonempty(&domain.key_name) {
    attach(&mut node, Some("key-name"), leaf(key_name))?;
  }
  attach_section(
    &mut node,
    "dns-servers",
    collect_array(&domain.dns_servers, |server| {
      let mut entry = object();
      attach(
        &mut entry,
        Some("ip-address"),
        leaf(require("dns server", "ip address", server)?),
      )?;
      Ok(entry)
    }),
  )?;
  Ok(node)
}

pub(crate) fn hooks_libraries(paths: &[String]) -> BuildResult<Option<Value>> {
  collect_array(paths, |path| {
    let mut node = object();
    attach(
      &mut node,
      Some("library"),
      leaf(require("hooks library", "path", path)?),
    )?;
    Ok(node)
  })
}

pub(crate) fn client_class(class: &ClientClass) -> BuildResult {
  let mut node = object();
  attach(
    &mut node,
    Some("name"),
    leaf(require("client class", "name", &class.name)?),
  )?;
  if let Some(test) = nonempty(&class.test) {
    attach(&mut node, Some("test"), leaf(test))?;
  }
  attach_section(&mut node, "option-data", option_data_array(&class.option_data))?;
  Ok(node)
}

pub(crate) fn lease_database(db: &LeaseDatabase) -> BuildResult {
  let mut node = object();
  attach(
    &mut node,
    Some("type"),
    leaf(require("lease database", "type", &db.kind)?),
  )?;
  if let Some(name) = nonempty(&db.name) {
    attach(&mut node, Some("name"), leaf(name))?;
  }
  attach(&mut node, Some("persist"), leaf(db.persist))?;
  if let Some(interval) = db.lfc_interval {
    attach(&mut node, Some("lfc-interval"), leaf(interval))?;
  }
  Ok(node)
}

pub(crate) fn control_socket(socket: &ControlSocket) -> BuildResult {
  let mut node = object();
  attach(
    &mut node,
    Some("socket-type"),
    leaf(require("control socket", "type", &socket.socket_type)?),
  )?;
  attach(
    &mut node,
    Some("socket-name"),
    leaf(require("control socket", "name", &socket.socket_name)?),
  )?;
  Ok(node)
}

pub(crate) fn ddns_client(ddns: &DdnsClient) -> BuildResult {
  let mut node = object();
  attach(&mut node, Some("enable-updates"), leaf(ddns.enable_updates))?;
  if let Some(ip) = nonempty(&ddns.server_ip) {
    attach(&mut node, Some("server-ip"), leaf(ip))?;
  }
  if let Some(port) = ddns.server_port {
    attach(&mut node, Some("server-port"), leaf(port))?;
  }
  if let Some(prefix) = nonempty(&ddns.generated_prefix) {
    attach(&mut node, Some("generated-prefix"), leaf(prefix))?;
  }
  if let Some(suffix) = nonempty(&ddns.qualifying_suffix) {
    attach(&mut node, Some("qualifying-suffix"), leaf(suffix))?;
  }
  Ok(node)
}

pub(crate) fn interfaces_config(interfaces: &[String]) -> BuildResult {
  let mut node = object();
  attach(&mut node, Some("interfaces"), Ok(string_array(interfaces)))?;
  Ok(node)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use serde_json::json;

  #[test]
  fn option_prefers_name_over_code() {
    let node = option_data(&OptionData {
      name: Some("domain-name-servers".to_string()),
      code: Some(6),
      data: "8.8.8.8".to_string(),
    })
    .unwrap();
    assert_eq!(
      node,
      json!({"name": "domain-name-servers", "data": "8.8.8.8"})
    );
  }

  #[test]
  fn option_falls_back_to_positive_code() {
    let node = option_data(&OptionData {
      name: None,
      code: Some(119),
      data: "example.org".to_string(),
    })
    .unwrap();
    assert_eq!(node, json!({"code": 119, "data": "example.org"}));
  }

  #[test]
  fn option_without_name_or_code_fails() {
    let err = option_data(&OptionData {
      name: None,
      code: Some(0),
      data: "x".to_string(),
    })
    .unwrap_err();
    assert_eq!(
      err,
      BuildError::MissingField {
        entity: "option-data",
        field: "name or code"
      }
    );
  }

  #[test]
  fn empty_option_name_counts_as_absent() {
    let node = option_data(&OptionData {
      name: Some(String::new()),
      code: Some(12),
      data: String::new(),
    })
    .unwrap();
    assert_eq!(node, json!({"code": 12, "data": ""}));
  }

  #[test]
  fn logger_includes_outputs_and_optional_debuglevel() {
    let node = logger(&Logger {
      name: "kea-dhcp4".to_string(),
      severity: "DEBUG".to_string(),
      debuglevel: Some(99),
      outputs: vec![LoggerOutput {
        output: "/var/log/kea-dhcp4.log".to_string(),
        maxsize: Some(1048576),
        maxver: Some(4),
        flush: true,
      }],
    })
    .unwrap();
    assert_eq!(
      node,
      json!({
        "name": "kea-dhcp4",
        "severity": "DEBUG",
        "debuglevel": 99,
        "output-options": [{
          "output": "/var/log/kea-dhcp4.log",
          "maxsize": 1048576,
          "maxver": 4,
          "flush": true
        }]
      })
    );
  }

  #[test]
  fn lease_database_defaults_to_memfile() {
    let node = lease_database(&LeaseDatabase::default()).unwrap();
    assert_eq!(node, json!({"type": "memfile", "persist": true}));
  }

  #[test]
  fn ddns_domain_nests_dns_servers() {
    let node = ddns_domain(&DdnsDomain {
      name: "example.org.".to_string(),
      key_name: Some("ddns-key".to_string()),
      dns_servers: vec!["192.0.2.1".to_string()],
    })
    .unwrap();
    assert_eq!(
      node,
      json!({
        "name": "example.org.",
        "key-name": "ddns-key",
        "dns-servers": [{"ip-address": "192.0.2.1"}]
      })
    );
  }

  #[test]
  fn tsig_key_requires_all_fields() {
    let err = tsig_key(&TsigKey {
      name: "k".to_string(),
      algorithm: String::new(),
      secret: "s".to_string(),
    })
    .unwrap_err();
    assert_eq!(
      err,
      BuildError::MissingField {
        entity: "tsig key",
        field: "algorithm"
      }
    );
  }
}
