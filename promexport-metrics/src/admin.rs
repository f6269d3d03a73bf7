// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./admin_test.rs"]
mod admin_test;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use log::info;
use promexport_common::stats::Collector;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::net::TcpListener;

//
// AdminState
//

// Serves process stats and the liveness/readiness probes.
pub struct AdminState {
  collector: Collector,
  ready: AtomicBool,
}

impl AdminState {
  #[must_use]
  pub fn new(collector: Collector) -> Arc<Self> {
    Arc::new(Self {
      collector,
      ready: AtomicBool::new(false),
    })
  }

  // Flip readiness once the ingestion listener is accepting requests.
  pub fn set_ready(&self, ready: bool) {
    self.ready.store(ready, Ordering::Relaxed);
  }

  #[allow(clippy::unused_async)]
  async fn metrics(State(state): State<Arc<Self>>) -> Response {
    match state.collector.text_output() {
      Ok(output) => ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], output).into_response(),
      Err(e) => {
        log::warn!("failed to render stats: {e}");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      },
    }
  }

  #[allow(clippy::unused_async)]
  async fn healthy() -> &'static str {
    "OK"
  }

  #[allow(clippy::unused_async)]
  async fn ready(State(state): State<Arc<Self>>) -> Response {
    if state.ready.load(Ordering::Relaxed) {
      "OK".into_response()
    } else {
      (StatusCode::SERVICE_UNAVAILABLE, "not ready").into_response()
    }
  }

  #[allow(clippy::unused_async)]
  async fn root() -> &'static str {
    "promexport admin server"
  }

  pub fn make_router(self: Arc<Self>) -> Router {
    Router::new()
      .route("/", get(Self::root))
      .route("/metrics", get(Self::metrics))
      .route("/-/healthy", get(Self::healthy))
      .route("/-/ready", get(Self::ready))
      .with_state(self)
  }

  pub async fn serve(self: Arc<Self>, listener: TcpListener) -> anyhow::Result<()> {
    info!("admin server starting on: {}", listener.local_addr()?);
    axum::serve(listener, self.make_router()).await?;
    Ok(())
  }
}
