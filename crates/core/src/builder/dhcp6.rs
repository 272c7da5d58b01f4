//! Assembler for `Dhcp6` configuration documents. Mirrors the DHCPv4
//! assembler, with prefix delegation pools and multi-address reservations
//! on top.

use super::common::{
  client_class, control_socket, ddns_client, hooks_libraries, interfaces_config, lease_database,
  logger, option_data_array,
};
use super::types::{Dhcp6Config, Dhcp6Pool, Dhcp6Reservation, Dhcp6Subnet, SharedNetwork};
use super::{
  BuildError, BuildResult, array, attach, attach_section, collect_array, leaf, nonempty, object,
  require, string_array,
};

fn address_pool(range: &str) -> BuildResult {
  let mut node = object();
  attach(
    &mut node,
    Some("pool"),
    leaf(require("pool", "range", range)?),
  )?;
  Ok(node)
}

fn pd_pool(prefix: &str, prefix_len: u8, delegated_len: Option<u8>) -> BuildResult {
  let mut node = object();
  attach(
    &mut node,
    Some("prefix"),
    leaf(require("pd pool", "prefix", prefix)?),
  )?;
  attach(&mut node, Some("prefix-len"), leaf(prefix_len))?;
  if let Some(len) = delegated_len {
    attach(&mut node, Some("delegated-len"), leaf(len))?;
  }
  Ok(node)
}

fn reservation(reservation: &Dhcp6Reservation) -> BuildResult {
  if nonempty(&reservation.duid).is_none() && nonempty(&reservation.hw_address).is_none() {
    return Err(BuildError::MissingField {
      entity: "reservation",
      field: "duid or hw-address",
    });
  }
  let mut node = object();
  if let Some(duid) = nonempty(&reservation.duid) {
    attach(&mut node, Some("duid"), leaf(duid))?;
  }
  if let Some(hw) = nonempty(&reservation.hw_address) {
    attach(&mut node, Some("hw-address"), leaf(hw))?;
  }
  if !reservation.ip_addresses.is_empty() {
    attach(
      &mut node,
      Some("ip-addresses"),
      Ok(string_array(&reservation.ip_addresses)),
    )?;
  }
  if !reservation.prefixes.is_empty() {
    attach(
      &mut node,
      Some("prefixes"),
      Ok(string_array(&reservation.prefixes)),
    )?;
  }
  if let Some(hostname) = nonempty(&reservation.hostname) {
    attach(&mut node, Some("hostname"), leaf(hostname))?;
  }
  if let Some(class) = nonempty(&reservation.client_class) {
    attach(&mut node, Some("client-class"), leaf(class))?;
  }
  attach_section(
    &mut node,
    "option-data",
    option_data_array(&reservation.option_data),
  )?;
  Ok(node)
}

/// Build one subnet document, also usable on its own for `subnet6-add`.
pub fn dhcp6_subnet(subnet: &Dhcp6Subnet) -> BuildResult {
  let mut node = object();
  attach(&mut node, Some("id"), leaf(subnet.id))?;
  attach(
    &mut node,
    Some("subnet"),
    leaf(require("subnet", "prefix", &subnet.subnet)?),
  )?;
  if let Some(lifetime) = subnet.preferred_lifetime {
    attach(&mut node, Some("preferred-lifetime"), leaf(lifetime))?;
  }
  if let Some(lifetime) = subnet.valid_lifetime {
    attach(&mut node, Some("valid-lifetime"), leaf(lifetime))?;
  }
  if let Some(timer) = subnet.renew_timer {
    attach(&mut node, Some("renew-timer"), leaf(timer))?;
  }
  if let Some(timer) = subnet.rebind_timer {
    attach(&mut node, Some("rebind-timer"), leaf(timer))?;
  }

  let mut pools = array();
  let mut pd_pools = array();
  let mut pool_count = 0usize;
  let mut pd_count = 0usize;
  for entry in &subnet.pools {
    match entry {
      Dhcp6Pool::Address { range } => {
        attach(&mut pools, None, address_pool(range))?;
        pool_count += 1;
      }
      Dhcp6Pool::Prefix {
        prefix,
        prefix_len,
        delegated_len,
      } => {
        attach(&mut pd_pools, None, pd_pool(prefix, *prefix_len, *delegated_len))?;
        pd_count += 1;
      }
    }
  }
  if pool_count > 0 {
    attach(&mut node, Some("pools"), Ok(pools))?;
  }
  if pd_count > 0 {
    attach(&mut node, Some("pd-pools"), Ok(pd_pools))?;
  }

  attach_section(&mut node, "option-data", option_data_array(&subnet.option_data))?;
  attach_section(
    &mut node,
    "reservations",
    collect_array(&subnet.reservations, reservation),
  )?;
  Ok(node)
}

fn shared_networks(network: &SharedNetwork, subnets: &[Dhcp6Subnet]) -> BuildResult {
  let subnet_array = collect_array(subnets, dhcp6_subnet)?.ok_or(BuildError::MissingField {
    entity: "shared network",
    field: "subnet list",
  })?;
  let mut entry = object();
  attach(
    &mut entry,
    Some("name"),
    leaf(require("shared network", "name", &network.name)?),
  )?;
  attach(
    &mut entry,
    Some("interface"),
    leaf(require("shared network", "interface", &network.interface)?),
  )?;
  attach(&mut entry, Some("subnet6"), Ok(subnet_array))?;
  let mut node = array();
  attach(&mut node, None, Ok(entry))?;
  Ok(node)
}

/// Assemble the complete document for `config-set` on service `dhcp6`.
pub fn dhcp6_config(config: &Dhcp6Config) -> BuildResult {
  let mut doc = object();
  if let Some(lifetime) = config.preferred_lifetime {
    attach(&mut doc, Some("preferred-lifetime"), leaf(lifetime))?;
  }
  if let Some(lifetime) = config.valid_lifetime {
    attach(&mut doc, Some("valid-lifetime"), leaf(lifetime))?;
  }
  if let Some(timer) = config.renew_timer {
    attach(&mut doc, Some("renew-timer"), leaf(timer))?;
  }
  if let Some(timer) = config.rebind_timer {
    attach(&mut doc, Some("rebind-timer"), leaf(timer))?;
  }
  if let Some(server_id) = &config.server_id {
    let mut node = object();
    attach(
      &mut node,
      Some("type"),
      leaf(require("server id", "type", &server_id.id_type)?),
    )?;
    if let Some(identifier) = nonempty(&server_id.identifier) {
      attach(&mut node, Some("identifier"), leaf(identifier))?;
    }
    attach(&mut doc, Some("server-id"), Ok(node))?;
  }
  attach(
    &mut doc,
    Some("interfaces-config"),
    interfaces_config(&config.interfaces),
  )?;
  attach(
    &mut doc,
    Some("lease-database"),
    lease_database(&config.lease_database),
  )?;
  if let Some(socket) = &config.control_socket {
    attach(&mut doc, Some("control-socket"), control_socket(socket))?;
  }
  if let Some(ddns) = &config.ddns {
    attach(&mut doc, Some("dhcp-ddns"), ddns_client(ddns))?;
  }
  attach_section(
    &mut doc,
    "hooks-libraries",
    hooks_libraries(&config.hooks_libraries),
  )?;
  attach_section(&mut doc, "option-data", option_data_array(&config.option_data))?;
  attach_section(
    &mut doc,
    "client-classes",
    collect_array(&config.client_classes, client_class),
  )?;
  attach_section(&mut doc, "loggers", collect_array(&config.loggers, logger))?;
  match &config.shared_network {
    Some(network) => attach(
      &mut doc,
      Some("shared-networks"),
      shared_networks(network, &config.subnets),
    )?,
    None => attach_section(
      &mut doc,
      "subnet6",
      collect_array(&config.subnets, dhcp6_subnet),
    )?,
  }
  Ok(doc)
}
