//! Assembler for `DhcpDdns` (D2) configuration documents.

use super::common::{ddns_domain, logger, tsig_key};
use super::types::D2Config;
use super::{BuildResult, attach, attach_section, collect_array, leaf, nonempty, object};

/// Assemble the complete document for `config-set` on service `d2`.
pub fn d2_config(config: &D2Config) -> BuildResult {
  let mut doc = object();
  if let Some(ip) = nonempty(&config.ip_address) {
    attach(&mut doc, Some("ip-address"), leaf(ip))?;
  }
  if let Some(port) = config.port {
    attach(&mut doc, Some("port"), leaf(port))?;
  }
  attach_section(
    &mut doc,
    "tsig-keys",
    collect_array(&config.tsig_keys, tsig_key),
  )?;
  if !config.forward_domains.is_empty() {
    let mut forward = object();
    attach_section(
      &mut forward,
      "ddns-domains",
      collect_array(&config.forward_domains, ddns_domain),
    )?;
    attach(&mut doc, Some("forward-ddns"), Ok(forward))?;
  }
  if !config.reverse_domains.is_empty() {
    let mut reverse = object();
    attach_section(
      &mut reverse,
      "ddns-domains",
      collect_array(&config.reverse_domains, ddns_domain),
    )?;
    attach(&mut doc, Some("reverse-ddns"), Ok(reverse))?;
  }
  attach_section(&mut doc, "loggers", collect_array(&config.loggers, logger))?;
  Ok(doc)
}

#[cfg(test)]
mod tests {
  use super::super::types::{DdnsDomain, TsigKey};
  use super::*;
  use pretty_assertions::assert_eq;
  use serde_json::json;

  #[test]
  fn document_nests_domains_under_forward_and_reverse() {
    let config = D2Config {
      ip_address: Some("127.0.0.1".to_string()),
      port: Some(53001),
      tsig_keys: vec![TsigKey {
        name: "ddns-key".to_string(),
        algorithm: "HMAC-SHA256".to_string(),
        secret: "c2VjcmV0".to_string(),
      }],
      forward_domains: vec![DdnsDomain {
        name: "example.org.".to_string(),
        key_name: Some("ddns-key".to_string()),
        dns_servers: vec!["192.0.2.1".to_string()],
      }],
      reverse_domains: vec![DdnsDomain {
        name: "2.0.192.in-addr.arpa.".to_string(),
        key_name: None,
        dns_servers: vec!["192.0.2.1".to_string()],
      }],
      loggers: Vec::new(),
    };
    let doc = d2_config(&config).unwrap();
    assert_eq!(
      doc,
      json!({
        "ip-address": "127.0.0.1",
        "port": 53001,
        "tsig-keys": [{
          "name": "ddns-key",
          "algorithm": "HMAC-SHA256",
          "secret": "c2VjcmV0"
        }],
        "forward-ddns": {
          "ddns-domains": [{
            "name": "example.org.",
            "key-name": "ddns-key",
            "dns-servers": [{"ip-address": "192.0.2.1"}]
          }]
        },
        "reverse-ddns": {
          "ddns-domains": [{
            "name": "2.0.192.in-addr.arpa.",
            "dns-servers": [{"ip-address": "192.0.2.1"}]
          }]
        }
      })
    );
  }

  #[test]
  fn empty_config_is_an_empty_document() {
    assert_eq!(d2_config(&D2Config::default()).unwrap(), json!({}));
  }

  #[test]
  fn bad_domain_fails_the_whole_document() {
    let config = D2Config {
      forward_domains: vec![DdnsDomain::default()],
      ..Default::default()
    };
    assert!(d2_config(&config).is_err());
  }
}
