use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire shape of one command request.
///
/// `service` is omitted entirely when no services are targeted (the command
/// is then addressed to the control agent itself) and `arguments` is omitted
/// when absent. Attaching `arguments` moves the document into the envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandEnvelope {
  pub command: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub service: Option<Vec<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub arguments: Option<Value>,
}

impl CommandEnvelope {
  pub fn new(command: &str, services: &[&str], arguments: Option<Value>) -> Self {
    let service = if services.is_empty() {
      None
    } else {
      Some(services.iter().map(|s| s.to_string()).collect())
    };
    Self {
      command: command.to_string(),
      service,
      arguments,
    }
  }
}

/// Typed view over one element of the response array.
///
/// The transaction engine validates only element 0; later elements of a
/// multi-service response are handed back raw so the caller can inspect
/// them per service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResult {
  pub result: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub arguments: Option<Value>,
}

impl ServiceResult {
  pub fn from_value(value: &Value) -> Option<Self> {
    serde_json::from_value(value.clone()).ok()
  }

  pub fn is_success(&self) -> bool {
    self.result == 0
  }
}

/// `config-set` and `config-test` nest the configuration under a key equal
/// to the service name with its first character upper-cased, e.g. service
/// `dhcp4` sends `{"Dhcp4": {...}}`.
pub fn service_config_key(service: &str) -> String {
  let mut chars = service.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    None => String::new(),
  }
}
