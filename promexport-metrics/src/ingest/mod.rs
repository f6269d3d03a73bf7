// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./mod_test.rs"]
mod mod_test;

use crate::backend::{DynamicTimeSeriesWriter, WriteError};
use crate::convert::{ConvertError, ConvertOptions, convert_request};
use crate::export::write_points;
use axum::Router;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use bytes::Bytes;
use http::header::{CONTENT_ENCODING, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};
use itertools::Itertools;
use prometheus::{IntCounter, IntGauge};
use promexport_common::error_every;
use promexport_common::stats::{AutoGauge, Scope};
use promexport_protobuf::protos::prometheus::write::v2::types::Request;
use protobuf::Message;
use std::sync::Arc;
use time::ext::NumericalDuration;

pub const REMOTE_WRITE_PATH: &str =
  "/v1/projects/{project_id}/location/global/prometheus/api/v2/write";
pub const REMOTE_WRITE_CONTENT_TYPE: &str =
  "application/x-protobuf;proto=io.prometheus.write.v2.Request";
pub const REMOTE_WRITE_ENCODING: &str = "snappy";
pub const MAX_ALLOWED_REQUEST_SIZE: usize = 20_000_000;

//
// Stats
//

#[derive(Clone, Debug)]
struct Stats {
  requests_total: IntCounter,
  requests_active: IntGauge,
  requests_4xx: IntCounter,
  requests_5xx: IntCounter,
  points_written: IntCounter,
  points_failed: IntCounter,
}

impl Stats {
  fn new(scope: &Scope) -> Self {
    let scope = scope.scope("remote_write");
    Self {
      requests_total: scope.counter("requests_total"),
      requests_active: scope.gauge("requests_active"),
      requests_4xx: scope.counter("requests_4xx"),
      requests_5xx: scope.counter("requests_5xx"),
      points_written: scope.counter("points_written"),
      points_failed: scope.counter("points_failed"),
    }
  }
}

//
// DecodeError
//

#[derive(thiserror::Error, Debug)]
enum DecodeError {
  #[error("snappy decode error: {0}")]
  SnappyDecode(#[from] snap::Error),
  #[error("protobuf decode error: {0}")]
  ProtobufDecode(#[from] protobuf::Error),
}

fn decode_body(body: &[u8]) -> Result<Request, DecodeError> {
  let decompressed = snap::raw::Decoder::new().decompress_vec(body)?;
  log::trace!(
    "decompressed request from {} bytes to {} bytes",
    body.len(),
    decompressed.len()
  );
  Ok(Request::parse_from_tokio_bytes(&Bytes::from(decompressed))?)
}

fn make_error_response(status: StatusCode, message: String) -> Response {
  (status, message).into_response()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &http::HeaderName) -> Option<&'a str> {
  headers.get(name).and_then(|value| value.to_str().ok())
}

fn content_type_matches(value: &str) -> bool {
  let normalized: String = value.chars().filter(|c| !c.is_whitespace()).collect();
  normalized.eq_ignore_ascii_case(REMOTE_WRITE_CONTENT_TYPE)
}

// Server errors outrank client errors. Within a class the higher code wins.
fn most_severe(statuses: impl IntoIterator<Item = StatusCode>) -> Option<StatusCode> {
  statuses
    .into_iter()
    .max_by_key(|status| (status.is_server_error(), status.as_u16()))
}

//
// IngestConfig
//

#[derive(Clone, Debug)]
pub struct IngestConfig {
  pub metric_type_prefix: String,
  pub allow_classic_histograms: bool,
  pub max_concurrent_writes: usize,
}

//
// RemoteWriteIngest
//

// Accepts remote write v2 requests and writes every converted sample to the backend. Requests are
// independent of each other and carry no state between calls.
pub struct RemoteWriteIngest {
  config: IngestConfig,
  writer: DynamicTimeSeriesWriter,
  project_id_regex: regex::Regex,
  stats: Stats,
}

impl RemoteWriteIngest {
  pub fn new(
    scope: &Scope,
    config: IngestConfig,
    writer: DynamicTimeSeriesWriter,
  ) -> anyhow::Result<Arc<Self>> {
    Ok(Arc::new(Self {
      config,
      writer,
      project_id_regex: regex::Regex::new("^[a-z0-9-]+$")?,
      stats: Stats::new(scope),
    }))
  }

  pub fn router(self: Arc<Self>) -> Router {
    Router::new()
      .route(REMOTE_WRITE_PATH, post(remote_write_handler))
      .layer(DefaultBodyLimit::max(MAX_ALLOWED_REQUEST_SIZE))
      .with_state(self)
  }

  // Validate, decode, convert and write one request. Never fails silently: every problem maps to a
  // status code and a message in the response body.
  pub async fn handle_write(&self, project_id: &str, headers: &HeaderMap, body: Bytes) -> Response {
    self.stats.requests_total.inc();
    let _active = AutoGauge::new(self.stats.requests_active.clone());

    let response = self.do_handle_write(project_id, headers, body).await;
    let status = response.status();
    if status.is_server_error() {
      self.stats.requests_5xx.inc();
    } else if status.is_client_error() {
      self.stats.requests_4xx.inc();
    }
    response
  }

  async fn do_handle_write(&self, project_id: &str, headers: &HeaderMap, body: Bytes) -> Response {
    if !self.project_id_regex.is_match(project_id) {
      log::debug!("invalid project id in path: {project_id:?}");
      return make_error_response(
        StatusCode::BAD_REQUEST,
        format!("invalid project id {project_id:?}"),
      );
    }

    match header_str(headers, &CONTENT_TYPE) {
      Some(content_type) if content_type_matches(content_type) => {},
      content_type => {
        log::debug!("unsupported content type: {content_type:?}");
        return make_error_response(
          StatusCode::UNSUPPORTED_MEDIA_TYPE,
          format!("unsupported content type {content_type:?}, expected {REMOTE_WRITE_CONTENT_TYPE}"),
        );
      },
    }
    match header_str(headers, &CONTENT_ENCODING) {
      Some(encoding) if encoding.trim().eq_ignore_ascii_case(REMOTE_WRITE_ENCODING) => {},
      encoding => {
        log::debug!("unsupported content encoding: {encoding:?}");
        return make_error_response(
          StatusCode::UNSUPPORTED_MEDIA_TYPE,
          format!("unsupported content encoding {encoding:?}, expected {REMOTE_WRITE_ENCODING}"),
        );
      },
    }

    if body.len() > MAX_ALLOWED_REQUEST_SIZE {
      log::debug!("request body of {} bytes exceeds limit", body.len());
      return make_error_response(
        StatusCode::PAYLOAD_TOO_LARGE,
        format!(
          "body size ({} bytes) exceeds limit ({MAX_ALLOWED_REQUEST_SIZE} bytes)",
          body.len()
        ),
      );
    }

    let request = match decode_body(&body) {
      Ok(request) => request,
      Err(e) => {
        log::debug!("remote write request body failed to decode: {e}");
        return make_error_response(
          StatusCode::BAD_REQUEST,
          format!("body failed to decode: {e}"),
        );
      },
    };

    let (points, convert_errors) = convert_request(
      &request,
      &ConvertOptions {
        project_id: project_id.to_string(),
        metric_type_prefix: self.config.metric_type_prefix.clone(),
        allow_classic_histograms: self.config.allow_classic_histograms,
      },
    );
    let (written, write_errors) =
      write_points(&self.writer, points, self.config.max_concurrent_writes).await;
    self.stats.points_written.inc_by(written as u64);
    self.stats.points_failed.inc_by(write_errors.len() as u64);

    make_write_response(&convert_errors, &write_errors)
  }
}

fn make_write_response(convert_errors: &[ConvertError], write_errors: &[WriteError]) -> Response {
  let Some(status) = most_severe(
    convert_errors
      .iter()
      .map(ConvertError::status)
      .chain(write_errors.iter().map(WriteError::status)),
  ) else {
    return StatusCode::NO_CONTENT.into_response();
  };

  let message = convert_errors
    .iter()
    .map(ToString::to_string)
    .chain(write_errors.iter().map(ToString::to_string))
    .join(", ");
  if status.is_server_error() {
    error_every!(1.minutes(), "remote write failed with {status}: {message}");
  } else {
    log::debug!("invalid remote write request: {message}");
  }
  make_error_response(status, message)
}

async fn remote_write_handler(
  State(state): State<Arc<RemoteWriteIngest>>,
  Path(project_id): Path<String>,
  headers: HeaderMap,
  body: Bytes,
) -> Response {
  state.handle_write(&project_id, &headers, body).await
}
