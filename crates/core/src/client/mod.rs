//! Transaction engine for the control agent's JSON command protocol.
//!
//! Every command, from `version-get` to a full `config-set`, goes through
//! [`Context::transact`]: encode the envelope, POST it, and validate the
//! response array. The command wrappers in [`crate::commands`] are thin
//! shims over this one path.

use serde_json::Value;
use tracing::debug;

mod envelope;
mod error;
mod transport;

pub use envelope::{CommandEnvelope, ServiceResult, service_config_key};
pub use error::{Error, InitError, Result, TransportError};
pub use transport::DEFAULT_ENDPOINT;

use transport::Transport;

use crate::settings::Settings;

/// Sentinel kept in `last_error` while no transaction has failed.
pub const NO_ERROR: &str = "No error";

/// A connection to one control agent.
///
/// Holds the HTTP client, the raw body of the most recent response, and a
/// human-readable description of the most recent failure. The buffers are
/// reset at the start of every transaction, so they always describe the
/// last call only.
pub struct Context {
  transport: Transport,
  response_body: Vec<u8>,
  last_error: String,
}

impl Context {
  /// Connect to `endpoint`, or to [`DEFAULT_ENDPOINT`] when `None`.
  pub fn create(endpoint: Option<&str>) -> std::result::Result<Self, InitError> {
    Ok(Self::wrap(Transport::connect(endpoint)?))
  }

  /// Connect using endpoint and credentials from [`Settings`].
  pub fn with_settings(settings: &Settings) -> std::result::Result<Self, InitError> {
    Ok(Self::wrap(Transport::with_credentials(
      Some(&settings.endpoint),
      &settings.username,
      &settings.password,
    )?))
  }

  fn wrap(transport: Transport) -> Self {
    Self {
      transport,
      response_body: Vec::new(),
      last_error: NO_ERROR.to_string(),
    }
  }

  pub fn endpoint(&self) -> String {
    self.transport.endpoint().to_string()
  }

  /// Description of the most recent failure, or `"No error"`.
  pub fn last_error(&self) -> &str {
    &self.last_error
  }

  /// Raw body of the most recent HTTP response, valid JSON or not.
  pub fn last_response(&self) -> &[u8] {
    &self.response_body
  }

  /// Run one command transaction against the agent.
  ///
  /// Validation covers element 0 of the response array: it must be an
  /// object carrying a numeric `result`. A non-zero result fails the call
  /// only when at most one service was targeted; with two or more services
  /// the full array is returned so per-service outcomes stay visible.
  pub fn transact(
    &mut self,
    command: &str,
    services: &[&str],
    arguments: Option<Value>,
  ) -> Result<Vec<Value>> {
    self.response_body.clear();
    self.last_error.clear();
    self.last_error.push_str(NO_ERROR);
    let outcome = self.exchange(command, services, arguments);
    if let Err(error) = &outcome {
      self.last_error = error.to_string();
      debug!(event = "transaction_failed", command, error = %error);
    }
    outcome
  }

  fn exchange(
    &mut self,
    command: &str,
    services: &[&str],
    arguments: Option<Value>,
  ) -> Result<Vec<Value>> {
    let envelope = CommandEnvelope::new(command, services, arguments);
    let request = serde_json::to_vec(&envelope)
      .map_err(|e| Error::Protocol(format!("failed to encode command envelope: {e}")))?;
    debug!(event = "command_dispatched", command, services = services.len());

    let (status, body) = self.transport.post(request).map_err(Error::from)?;
    self.response_body = body;
    if status != 200 {
      return Err(Error::HttpStatus(status));
    }

    let parsed: Value = serde_json::from_slice(&self.response_body)
      .map_err(|e| Error::Protocol(format!("response is not valid JSON: {e}")))?;
    let Value::Array(elements) = parsed else {
      return Err(Error::Protocol("response is not a JSON array".to_string()));
    };
    {
      let first = match elements.first() {
        Some(Value::Object(object)) => object,
        _ => {
          return Err(Error::Protocol(
            "first response element is not an object".to_string(),
          ));
        }
      };
      let code = first
        .get("result")
        .and_then(Value::as_i64)
        .ok_or_else(|| {
          Error::Protocol("first response element has no numeric result".to_string())
        })?;
      if code != 0 && services.len() <= 1 {
        let text = first
          .get("text")
          .and_then(Value::as_str)
          .unwrap_or("Unknown error")
          .to_string();
        return Err(Error::Api { code, text });
      }
    }
    debug!(
      event = "command_completed",
      command,
      elements = elements.len()
    );
    Ok(elements)
  }
}
