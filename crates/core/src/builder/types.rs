//! Typed inputs for the configuration assemblers. Empty strings and `None`
//! mean "omit this field"; what is required is enforced by the assemblers,
//! not the types.

/// One `option-data` entry. Needs a name or a positive code; `data` is
/// always emitted, even when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionData {
  pub name: Option<String>,
  pub code: Option<u32>,
  pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggerOutput {
  pub output: String,
  pub maxsize: Option<i64>,
  pub maxver: Option<i64>,
  pub flush: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Logger {
  pub name: String,
  pub severity: String,
  pub debuglevel: Option<u32>,
  pub outputs: Vec<LoggerOutput>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TsigKey {
  pub name: String,
  pub algorithm: String,
  pub secret: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DdnsDomain {
  pub name: String,
  pub key_name: Option<String>,
  pub dns_servers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaseDatabase {
  pub kind: String,
  pub name: Option<String>,
  pub persist: bool,
  pub lfc_interval: Option<u32>,
}

impl Default for LeaseDatabase {
  fn default() -> Self {
    Self {
      kind: "memfile".to_string(),
      name: None,
      persist: true,
      lfc_interval: None,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlSocket {
  pub socket_type: String,
  pub socket_name: String,
}

/// The `dhcp-ddns` client block of a DHCP server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DdnsClient {
  pub enable_updates: bool,
  pub server_ip: Option<String>,
  pub server_port: Option<u16>,
  pub generated_prefix: Option<String>,
  pub qualifying_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientClass {
  pub name: String,
  pub test: Option<String>,
  pub option_data: Vec<OptionData>,
}

/// Wrapping shared network. When set, the assembler emits a single
/// `shared-networks` entry containing all subnets instead of a top-level
/// subnet list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedNetwork {
  pub name: String,
  pub interface: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dhcp4Pool {
  pub range: String,
  pub client_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dhcp4Reservation {
  pub hw_address: Option<String>,
  pub client_id: Option<String>,
  pub ip_address: Option<String>,
  pub hostname: Option<String>,
  pub client_class: Option<String>,
  pub option_data: Vec<OptionData>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dhcp4Subnet {
  pub id: u32,
  pub subnet: String,
  pub valid_lifetime: Option<u32>,
  pub renew_timer: Option<u32>,
  pub rebind_timer: Option<u32>,
  pub pools: Vec<Dhcp4Pool>,
  pub option_data: Vec<OptionData>,
  pub reservations: Vec<Dhcp4Reservation>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dhcp4Config {
  pub interfaces: Vec<String>,
  pub authoritative: bool,
  pub valid_lifetime: Option<u32>,
  pub renew_timer: Option<u32>,
  pub rebind_timer: Option<u32>,
  pub lease_database: LeaseDatabase,
  pub control_socket: Option<ControlSocket>,
  pub ddns: Option<DdnsClient>,
  pub hooks_libraries: Vec<String>,
  pub option_data: Vec<OptionData>,
  pub client_classes: Vec<ClientClass>,
  pub loggers: Vec<Logger>,
  pub shared_network: Option<SharedNetwork>,
  pub subnets: Vec<Dhcp4Subnet>,
}

/// Address pools land in `pools`, prefix delegation pools in `pd-pools`.
#[derive(Debug, Clone, PartialEq)]
pub enum Dhcp6Pool {
  Address {
    range: String,
  },
  Prefix {
    prefix: String,
    prefix_len: u8,
    delegated_len: Option<u8>,
  },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dhcp6Reservation {
  pub duid: Option<String>,
  pub hw_address: Option<String>,
  pub ip_addresses: Vec<String>,
  pub prefixes: Vec<String>,
  pub hostname: Option<String>,
  pub client_class: Option<String>,
  pub option_data: Vec<OptionData>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dhcp6Subnet {
  pub id: u32,
  pub subnet: String,
  pub preferred_lifetime: Option<u32>,
  pub valid_lifetime: Option<u32>,
  pub renew_timer: Option<u32>,
  pub rebind_timer: Option<u32>,
  pub pools: Vec<Dhcp6Pool>,
  pub option_data: Vec<OptionData>,
  pub reservations: Vec<Dhcp6Reservation>,
}

/// `server-id` block of a DHCPv6 server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerId {
  pub id_type: String,
  pub identifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dhcp6Config {
  pub interfaces: Vec<String>,
  pub preferred_lifetime: Option<u32>,
  pub valid_lifetime: Option<u32>,
  pub renew_timer: Option<u32>,
  pub rebind_timer: Option<u32>,
  pub server_id: Option<ServerId>,
  pub lease_database: LeaseDatabase,
  pub control_socket: Option<ControlSocket>,
  pub ddns: Option<DdnsClient>,
  pub hooks_libraries: Vec<String>,
  pub option_data: Vec<OptionData>,
  pub client_classes: Vec<ClientClass>,
  pub loggers: Vec<Logger>,
  pub shared_network: Option<SharedNetwork>,
  pub subnets: Vec<Dhcp6Subnet>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct D2Config {
  pub ip_address: Option<String>,
  pub port: Option<u16>,
  pub tsig_keys: Vec<TsigKey>,
  pub forward_domains: Vec<DdnsDomain>,
  pub reverse_domains: Vec<DdnsDomain>,
  pub loggers: Vec<Logger>,
}
