//! Client library for the Kea Control Agent's JSON command protocol.
//!
//! Provides a blocking [`client::Context`] speaking the command envelope
//! protocol over HTTP, typed wrappers for the daemon, configuration, subnet,
//! lease, reservation, statistic, class and cache command families, and a
//! checked builder assembling `Dhcp4`/`Dhcp6`/`DhcpDdns` configuration
//! documents for `config-set`.
//!
//! Quick start:
//! - Connect with `keactl_core::client::Context::create(None)`.
//! - Call a wrapper like `ctx.version_get(&["dhcp4"])`.
//! - On failure, `ctx.last_error()` describes what went wrong.

pub mod builder;
pub mod client;
mod commands;
pub mod logging;
pub mod settings;
