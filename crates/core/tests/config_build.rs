//! Full configuration documents assembled and pushed through `config-set`.

use keactl_core::builder::{
  ClientClass, ControlSocket, D2Config, DdnsClient, DdnsDomain, Dhcp4Config, Dhcp4Pool,
  Dhcp4Reservation, Dhcp4Subnet, Dhcp6Config, Dhcp6Pool, Dhcp6Subnet, Logger, LoggerOutput,
  OptionData, TsigKey, d2_config, dhcp4_config, dhcp6_config,
};
use keactl_core::client::Context;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_support::StubAgent;

fn full_v4_config() -> Dhcp4Config {
  Dhcp4Config {
    interfaces: vec!["eth0".to_string()],
    authoritative: true,
    valid_lifetime: Some(4000),
    renew_timer: Some(1000),
    rebind_timer: Some(2000),
    control_socket: Some(ControlSocket {
      socket_type: "unix".to_string(),
      socket_name: "/tmp/kea4-ctrl-socket".to_string(),
    }),
    ddns: Some(DdnsClient {
      enable_updates: true,
      server_ip: Some("127.0.0.1".to_string()),
      server_port: Some(53001),
      qualifying_suffix: Some("example.org.".to_string()),
      ..Default::default()
    }),
    hooks_libraries: vec!["/usr/lib/kea/hooks/libdhcp_lease_cmds.so".to_string()],
    option_data: vec![OptionData {
      name: Some("domain-name-servers".to_string()),
      code: None,
      data: "192.0.2.1".to_string(),
    }],
    client_classes: vec![ClientClass {
      name: "voip".to_string(),
      test: Some("substring(option[60].hex,0,6) == 'Aastra'".to_string()),
      option_data: Vec::new(),
    }],
    loggers: vec![Logger {
      name: "kea-dhcp4".to_string(),
      severity: "INFO".to_string(),
      debuglevel: None,
      outputs: vec![LoggerOutput {
        output: "stdout".to_string(),
        maxsize: None,
        maxver: None,
        flush: true,
      }],
    }],
    subnets: vec![Dhcp4Subnet {
      id: 1,
      subnet: "192.0.2.0/24".to_string(),
      pools: vec![Dhcp4Pool {
        range: "192.0.2.10 - 192.0.2.100".to_string(),
        client_class: Some("voip".to_string()),
      }],
      reservations: vec![Dhcp4Reservation {
        hw_address: Some("1a:1b:1c:1d:1e:1f".to_string()),
        ip_address: Some("192.0.2.201".to_string()),
        hostname: Some("printer".to_string()),
        ..Default::default()
      }],
      ..Default::default()
    }],
    ..Default::default()
  }
}

#[test]
fn dhcp4_document_has_every_configured_section() {
  let doc = dhcp4_config(&full_v4_config()).unwrap();
  assert_eq!(
    doc,
    json!({
      "authoritative": true,
      "valid-lifetime": 4000,
      "renew-timer": 1000,
      "rebind-timer": 2000,
      "interfaces-config": {"interfaces": ["eth0"]},
      "lease-database": {"type": "memfile", "persist": true},
      "control-socket": {
        "socket-type": "unix",
        "socket-name": "/tmp/kea4-ctrl-socket"
      },
      "dhcp-ddns": {
        "enable-updates": true,
        "server-ip": "127.0.0.1",
        "server-port": 53001,
        "qualifying-suffix": "example.org."
      },
      "hooks-libraries": [
        {"library": "/usr/lib/kea/hooks/libdhcp_lease_cmds.so"}
      ],
      "option-data": [
        {"name": "domain-name-servers", "data": "192.0.2.1"}
      ],
      "client-classes": [{
        "name": "voip",
        "test": "substring(option[60].hex,0,6) == 'Aastra'"
      }],
      "loggers": [{
        "name": "kea-dhcp4",
        "severity": "INFO",
        "output-options": [{"output": "stdout", "flush": true}]
      }],
      "subnet4": [{
        "id": 1,
        "subnet": "192.0.2.0/24",
        "pools": [{
          "pool": "192.0.2.10 - 192.0.2.100",
          "client-class": "voip"
        }],
        "reservations": [{
          "hw-address": "1a:1b:1c:1d:1e:1f",
          "ip-address": "192.0.2.201",
          "hostname": "printer"
        }]
      }]
    })
  );
}

#[test]
fn built_document_round_trips_through_config_set() {
  let agent = StubAgent::start();
  let mut ctx = Context::create(Some(&agent.endpoint())).expect("context");

  let doc = dhcp4_config(&full_v4_config()).unwrap();
  ctx.config_set("dhcp4", &doc).expect("transaction");

  let requests = agent.requests();
  assert_eq!(requests.len(), 1);
  assert_eq!(requests[0]["command"], json!("config-set"));
  assert_eq!(requests[0]["arguments"]["Dhcp4"], doc);
}

#[test]
fn dhcp6_document_keeps_pd_pools_separate() {
  let config = Dhcp6Config {
    interfaces: vec!["eth0".to_string()],
    preferred_lifetime: Some(3000),
    valid_lifetime: Some(4000),
    subnets: vec![Dhcp6Subnet {
      id: 1,
      subnet: "2001:db8:1::/64".to_string(),
      pools: vec![
        Dhcp6Pool::Address {
          range: "2001:db8:1::100 - 2001:db8:1::ffff".to_string(),
        },
        Dhcp6Pool::Prefix {
          prefix: "2001:db8:8000::".to_string(),
          prefix_len: 48,
          delegated_len: Some(64),
        },
      ],
      ..Default::default()
    }],
    ..Default::default()
  };
  let doc = dhcp6_config(&config).unwrap();
  assert_eq!(doc["subnet6"][0]["pools"].as_array().unwrap().len(), 1);
  assert_eq!(doc["subnet6"][0]["pd-pools"].as_array().unwrap().len(), 1);
  assert_eq!(
    doc["subnet6"][0]["pd-pools"][0],
    json!({
      "prefix": "2001:db8:8000::",
      "prefix-len": 48,
      "delegated-len": 64
    })
  );
}

#[test]
fn d2_document_round_trips_through_config_set() {
  let agent = StubAgent::start();
  let mut ctx = Context::create(Some(&agent.endpoint())).expect("context");

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
    ..Default::default()
  };
  let doc = d2_config(&config).unwrap();
  ctx.config_set("d2", &doc).expect("transaction");

  let requests = agent.requests();
  assert_eq!(requests[0]["arguments"]["D2"], doc);
}

#[test]
fn invalid_input_yields_no_document_at_all() {
  // Option without name or code, nested three levels deep
  let config = Dhcp4Config {
    subnets: vec![Dhcp4Subnet {
      id: 1,
      subnet: "192.0.2.0/24".to_string(),
      reservations: vec![Dhcp4Reservation {
        hw_address: Some("1a:1b:1c:1d:1e:1f".to_string()),
        option_data: vec![OptionData::default()],
        ..Default::default()
      }],
      ..Default::default()
    }],
    ..Default::default()
  };
  assert!(dhcp4_config(&config).is_err());
}
