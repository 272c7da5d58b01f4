use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Uri, header};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;

use super::error::{InitError, TransportError};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

// Credentials the lab control agent is provisioned with.
const DEFAULT_USERNAME: &str = "root";
const DEFAULT_PASSWORD: &str = "root";

/// Blocking HTTP adapter over the async client stack.
///
/// Owns a current-thread runtime so the public API stays synchronous; one
/// exchange occupies the calling thread until the response body is read.
pub struct Transport {
  endpoint: Uri,
  authorization: String,
  client: Client<HttpConnector, Full<Bytes>>,
  runtime: tokio::runtime::Runtime,
}

impl Transport {
  pub fn connect(endpoint: Option<&str>) -> Result<Self, InitError> {
    Self::with_credentials(endpoint, DEFAULT_USERNAME, DEFAULT_PASSWORD)
  }

  pub fn with_credentials(
    endpoint: Option<&str>,
    username: &str,
    password: &str,
  ) -> Result<Self, InitError> {
    let raw = endpoint.unwrap_or(DEFAULT_ENDPOINT);
    let endpoint = raw
      .parse::<Uri>()
      .map_err(|source| InitError::InvalidEndpoint {
        endpoint: raw.to_string(),
        source,
      })?;
    let runtime = tokio::runtime::Builder::new_current_thread()
      .enable_io()
      .enable_time()
      .build()?;
    let client = Client::builder(TokioExecutor::new()).build_http();
    let authorization = format!("Basic {}", BASE64.encode(format!("{username}:{password}")));
    Ok(Self {
      endpoint,
      authorization,
      client,
      runtime,
    })
  }

  pub fn endpoint(&self) -> &Uri {
    &self.endpoint
  }

  /// Perform one request/response exchange and return the status code with
  /// the raw response body.
  pub fn post(&self, body: Vec<u8>) -> Result<(u16, Vec<u8>), TransportError> {
    let request = Request::builder()
      .method(Method::POST)
      .uri(self.endpoint.clone())
      .header(header::CONTENT_TYPE, "application/json")
      .header(header::AUTHORIZATION, self.authorization.as_str())
      .body(Full::from(Bytes::from(body)))?;
    self.runtime.block_on(async {
      let response = self.client.request(request).await?;
      let status = response.status().as_u16();
      let bytes = response.into_body().collect().await?.to_bytes();
      Ok((status, bytes.to_vec()))
    })
  }
}
