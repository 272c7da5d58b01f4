//! Thin wrappers mapping one method to one wire command each. All of them
//! delegate to [`Context::transact`](crate::client::Context::transact) and
//! inherit its validation and error reporting.

mod cache;
mod class;
mod config;
mod generic;
mod host;
mod lease;
mod stat;
mod subnet;
