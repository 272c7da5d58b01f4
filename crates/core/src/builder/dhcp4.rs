//! Assembler for `Dhcp4` configuration documents.

use super::common::{
  client_class, control_socket, ddns_client, hooks_libraries, interfaces_config, lease_database,
  logger, option_data_array,
};
use super::types::{Dhcp4Config, Dhcp4Pool, Dhcp4Reservation, Dhcp4Subnet, SharedNetwork};
use super::{
  BuildError, BuildResult, attach, attach_section, collect_array, leaf, nonempty, object, require,
};

fn pool(pool: &Dhcp4Pool) -> BuildResult {
  let mut node = object();
  attach(
    &mut node,
    Some("pool"),
    leaf(require("pool", "range", &pool.range)?),
  )?;
  if let Some(class) = nonempty(&pool.client_class) {
    attach(&mut node, Some("client-class"), leaf(class))?;
  }
  Ok(node)
}

fn reservation(reservation: &Dhcp4Reservation) -> BuildResult {
  let mut node = object();
  if let Some(hw) = nonempty(&reservation.hw_address) {
    attach(&mut node, Some("hw-address"), leaf(hw))?;
  }
  if let Some(client_id) = nonempty(&reservation.client_id) {
    attach(&mut node, Some("client-id"), leaf(client_id))?;
  }
  if let Some(ip) = nonempty(&reservation.ip_address) {
    attach(&mut node, Some("ip-address"), leaf(ip))?;
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

/// Build one subnet document, also usable on its own for `subnet4-add`.
pub fn dhcp4_subnet(subnet: &Dhcp4Subnet) -> BuildResult {
  let mut node = object();
  attach(&mut node, Some("id"), leaf(subnet.id))?;
  attach(
    &mut node,
    Some("subnet"),
    leaf(require("subnet", "prefix", &subnet.subnet)?),
  )?;
  if let Some(lifetime) = subnet.valid_lifetime {
    attach(&mut node, Some("valid-lifetime"), leaf(lifetime))?;
  }
  if let Some(timer) = subnet.renew_timer {
    attach(&mut node, Some("renew-timer"), leaf(timer))?;
  }
  if let Some(timer) = subnet.rebind_timer {
    attach(&mut node, Some("rebind-timer"), leaf(timer))?;
  }
  attach_section(&mut node, "pools", collect_array(&subnet.pools, pool))?;
  attach_section(&mut node, "option-data", option_data_array(&subnet.option_data))?;
  attach_section(
    &mut node,
    "reservations",
    collect_array(&subnet.reservations, reservation),
  )?;
  Ok(node)
}

fn shared_networks(network: &SharedNetwork, subnets: &[Dhcp4Subnet]) -> BuildResult {
  let subnet_array = collect_array(subnets, dhcp4_subnet)?.ok_or(BuildError::MissingField {
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
  attach(&mut entry, Some("subnet4"), Ok(subnet_array))?;
  let mut node = super::array();
  attach(&mut node, None, Ok(entry))?;
  Ok(node)
}

/// Assemble the complete document for `config-set` on service `dhcp4`.
///
/// With a shared network configured the subnets move inside it; otherwise
/// they form the top-level `subnet4` list.
pub fn dhcp4_config(config: &Dhcp4Config) -> BuildResult {
  let mut doc = object();
  if config.authoritative {
    attach(&mut doc, Some("authoritative"), leaf(true))?;
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
      "subnet4",
      collect_array(&config.subnets, dhcp4_subnet),
    )?,
  }
  Ok(doc)
}
