use thiserror::Error;

/// Failures of the HTTP exchange itself, before any protocol validation.
#[derive(Debug, Error)]
pub enum TransportError {
  #[error("connection: {0}")]
  Client(#[from] hyper_util::client::legacy::Error),
  #[error("body: {0}")]
  Body(#[from] hyper::Error),
  #[error("invalid request: {0}")]
  Request(#[from] hyper::http::Error),
}

/// Failures while setting up a [`Context`](crate::client::Context).
#[derive(Debug, Error)]
pub enum InitError {
  #[error("invalid endpoint `{endpoint}`: {source}")]
  InvalidEndpoint {
    endpoint: String,
    #[source]
    source: hyper::http::uri::InvalidUri,
  },
  #[error("failed to start transport runtime: {0}")]
  Runtime(#[from] std::io::Error),
}

/// Transaction failures, in the order the transaction engine checks them.
///
/// `Api` is only raised for calls targeting zero or one services; a
/// non-zero result inside a multi-service response is returned as data so
/// one failing service cannot mask the others.
#[derive(Debug, Error)]
pub enum Error {
  #[error("transport: {0}")]
  Transport(#[from] TransportError),
  #[error("HTTP request failed with status {0}")]
  HttpStatus(u16),
  #[error("protocol: {0}")]
  Protocol(String),
  #[error("control agent error ({code}): {text}")]
  Api { code: i64, text: String },
}

pub type Result<T> = std::result::Result<T, Error>;
