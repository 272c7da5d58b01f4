use std::path::PathBuf;

use clap::{Args as ClapArgs, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about = "Kea Control Agent CLI", long_about = None, bin_name = "keactl")]
pub struct Cli {
  /// Output the raw JSON 'arguments' payload from the response
  #[arg(long, global = true)]
  pub json: bool,
  /// Control agent endpoint, e.g. http://127.0.0.1:8000
  #[arg(long, global = true)]
  pub endpoint: Option<String>,
  #[command(subcommand)]
  pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// List the commands a service supports
  ListCommands(ServiceArg),
  /// Query daemon versions (the agent itself when no service is given)
  VersionGet(VersionArgs),
  /// Show pid and uptime of a service
  StatusGet(ServiceArg),
  /// Fetch the running configuration of a service
  ConfigGet(ServiceArg),
  /// Apply a JSON configuration file to a service
  ConfigSet(ConfigFileArgs),
  /// Validate a JSON configuration file without applying it
  ConfigTest(ConfigFileArgs),
  /// Re-read the configuration file from disk
  ConfigReload(ServiceArg),
  /// Write the running configuration to a file on the server
  ConfigWrite(ConfigWriteArgs),
  /// List configured DHCPv4 subnets
  Subnet4List,
  /// List configured DHCPv6 subnets
  Subnet6List,
  /// Look up a DHCPv4 lease by IP address
  Lease4GetByIp(IpArg),
  /// Fetch all statistics of a service
  StatisticGetAll(ServiceArg),
  /// Dump the host cache of a service
  CacheGet(ServiceArg),
  /// Show the host cache size of a service
  CacheSize(ServiceArg),
  /// Clear the host cache of a service
  CacheClear(ServiceArg),
}

#[derive(Debug, ClapArgs)]
pub struct ServiceArg {
  /// Target service (dhcp4, dhcp6, d2)
  pub service: String,
}

#[derive(Debug, ClapArgs)]
pub struct VersionArgs {
  /// Target services; empty addresses the control agent itself
  pub services: Vec<String>,
}

#[derive(Debug, ClapArgs)]
pub struct ConfigFileArgs {
  /// Target service (dhcp4, dhcp6, d2)
  pub service: String,
  /// Path to a JSON configuration document
  pub file: PathBuf,
}

#[derive(Debug, ClapArgs)]
pub struct ConfigWriteArgs {
  /// Target service (dhcp4, dhcp6, d2)
  pub service: String,
  /// Destination path on the server side
  pub filename: String,
}

#[derive(Debug, ClapArgs)]
pub struct IpArg {
  /// Lease IP address
  pub ip_address: String,
}

impl Cli {
  /// Print the top-level help page; the caller decides how to proceed.
  pub fn print_help() {
    let mut cmd = Cli::command();
    cmd.print_help().expect("print help");
    println!();
  }
}
