//! Test helpers: a stub control agent speaking just enough of the HTTP
//! command protocol to exercise clients end to end.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::watch;

#[derive(Default)]
struct StubState {
  queued: VecDeque<(u16, String)>,
  requests: Vec<Value>,
}

/// In-process control agent bound to an ephemeral localhost port.
///
/// Responses are served from a queue; when the queue is empty every request
/// gets `[{"result": 0}]`. Request bodies are captured for assertions.
/// Dropping the stub shuts the server down and joins its thread.
pub struct StubAgent {
  addr: SocketAddr,
  state: Arc<Mutex<StubState>>,
  shutdown: watch::Sender<bool>,
  thread: Option<JoinHandle<()>>,
}

impl StubAgent {
  pub fn start() -> Self {
    let state: Arc<Mutex<StubState>> = Arc::default();
    let (shutdown, shutdown_rx) = watch::channel(false);
    let (addr_tx, addr_rx) = mpsc::channel();
    let serve_state = state.clone();
    let thread = std::thread::spawn(move || serve(serve_state, addr_tx, shutdown_rx));
    let addr = addr_rx.recv().expect("stub agent failed to bind");
    Self {
      addr,
      state,
      shutdown,
      thread: Some(thread),
    }
  }

  /// Base URL of the stub, e.g. `http://127.0.0.1:49152`.
  pub fn endpoint(&self) -> String {
    format!("http://{}", self.addr)
  }

  /// Queue the next response as raw status and body.
  pub fn enqueue(&self, status: u16, body: &str) {
    self
      .state
      .lock()
      .unwrap()
      .queued
      .push_back((status, body.to_string()));
  }

  /// Queue a 200 response with the given JSON body.
  pub fn enqueue_json(&self, body: Value) {
    self.enqueue(200, &body.to_string());
  }

  /// Request bodies received so far, parsed as JSON.
  pub fn requests(&self) -> Vec<Value> {
    self.state.lock().unwrap().requests.clone()
  }
}

impl Drop for StubAgent {
  fn drop(&mut self) {
    let _ = self.shutdown.send(true);
    if let Some(thread) = self.thread.take() {
      let _ = thread.join();
    }
  }
}

fn serve(
  state: Arc<Mutex<StubState>>,
  addr_tx: mpsc::Sender<SocketAddr>,
  mut shutdown_rx: watch::Receiver<bool>,
) {
  let runtime = tokio::runtime::Builder::new_current_thread()
    .enable_io()
    .enable_time()
    .build()
    .expect("stub agent runtime");
  runtime.block_on(async move {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub agent");
    let _ = addr_tx.send(listener.local_addr().expect("stub agent local addr"));
    loop {
      tokio::select! {
        _ = shutdown_rx.changed() => break,
        accepted = listener.accept() => {
          let Ok((stream, _)) = accepted else { break };
          let conn_state = state.clone();
          tokio::spawn(async move {
            let service = service_fn(move |req| handle(conn_state.clone(), req));
            let _ = hyper::server::conn::http1::Builder::new()
              .serve_connection(TokioIo::new(stream), service)
              .await;
          });
        }
      }
    }
  });
}

async fn handle(
  state: Arc<Mutex<StubState>>,
  request: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, std::convert::Infallible> {
  let bytes = request
    .into_body()
    .collect()
    .await
    .map(|collected| collected.to_bytes())
    .unwrap_or_default();
  let (status, body) = {
    let mut state = state.lock().unwrap();
    if let Ok(parsed) = serde_json::from_slice::<Value>(&bytes) {
      state.requests.push(parsed);
    }
    state
      .queued
      .pop_front()
      .unwrap_or((200, "[{\"result\":0}]".to_string()))
  };
  let response = Response::builder()
    .status(StatusCode::from_u16(status).unwrap_or(StatusCode::OK))
    .header("content-type", "application/json")
    .body(Full::from(Bytes::from(body)))
    .unwrap();
  Ok(response)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stub_binds_and_shuts_down_on_drop() {
    let agent = StubAgent::start();
    assert!(agent.endpoint().starts_with("http://127.0.0.1:"));
    drop(agent);
  }
}
