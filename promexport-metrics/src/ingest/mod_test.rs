// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{
  IngestConfig,
  MAX_ALLOWED_REQUEST_SIZE,
  REMOTE_WRITE_CONTENT_TYPE,
  RemoteWriteIngest,
  most_severe,
};
use crate::backend::{TimeInterval, TypedValue, WriteError};
use crate::test::{RecordingWriter, RequestBuilder, encode_request};
use axum::response::Response;
use bytes::Bytes;
use http::header::{CONTENT_ENCODING, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use promexport_common::stats::Collector;
use promexport_protobuf::protos::prometheus::write::v2::types::metadata::MetricType;
use std::sync::Arc;

async fn body_text(response: Response) -> String {
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  String::from_utf8(bytes.to_vec()).unwrap()
}

struct Helper {
  ingest: Arc<RemoteWriteIngest>,
  writer: Arc<RecordingWriter>,
}

impl Helper {
  fn new(allow_classic_histograms: bool) -> Self {
    let writer = Arc::new(RecordingWriter::default());
    let ingest = RemoteWriteIngest::new(
      &Collector::default().scope("test"),
      IngestConfig {
        metric_type_prefix: "prometheus.googleapis.com".to_string(),
        allow_classic_histograms,
        max_concurrent_writes: 4,
      },
      writer.clone(),
    )
    .unwrap();
    Self { ingest, writer }
  }

  async fn write(&self, project_id: &str, body: Bytes) -> Response {
    self.ingest.handle_write(project_id, &headers(), body).await
  }
}

fn headers() -> HeaderMap {
  let mut headers = HeaderMap::new();
  headers.insert(
    CONTENT_TYPE,
    HeaderValue::from_static(REMOTE_WRITE_CONTENT_TYPE),
  );
  headers.insert(CONTENT_ENCODING, HeaderValue::from_static("snappy"));
  headers
}

fn counter_labels() -> Vec<(&'static str, &'static str)> {
  vec![
    ("__name__", "requests_total"),
    ("location", "us-east1"),
    ("job", "api"),
    ("instance", "a:9090"),
  ]
}

#[tokio::test]
async fn counter_end_to_end() {
  let helper = Helper::new(false);

  let body = encode_request(
    &RequestBuilder::new()
      .series(
        &counter_labels(),
        Some(MetricType::METRIC_TYPE_COUNTER),
        &[(2000, 5.0)],
        1000,
      )
      .build(),
  );
  assert_eq!(
    StatusCode::NO_CONTENT,
    helper.write("my-project-1", body).await.status()
  );

  let body = encode_request(
    &RequestBuilder::new()
      .series(
        &counter_labels(),
        Some(MetricType::METRIC_TYPE_COUNTER),
        &[(3000, 12.0)],
        1000,
      )
      .build(),
  );
  let response = helper.write("my-project-1", body).await;
  assert_eq!(StatusCode::NO_CONTENT, response.status());
  assert!(body_text(response).await.is_empty());

  let points = helper.writer.take_points();
  assert_eq!(
    vec![
      (TimeInterval::cumulative(1000, 2000), TypedValue::Double(5.0)),
      (TimeInterval::cumulative(1000, 3000), TypedValue::Double(12.0)),
    ],
    points
      .iter()
      .map(|point| (point.interval, point.value.clone()))
      .collect::<Vec<_>>()
  );
  // The project comes from the path.
  assert_eq!("my-project-1", points[0].template.project_id());
}

#[tokio::test]
async fn invalid_project_id() {
  let helper = Helper::new(false);
  for project_id in ["My-Project", "proj_1", ""] {
    let response = helper.write(project_id, Bytes::new()).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());
  }
}

#[tokio::test]
async fn unsupported_media() {
  let helper = Helper::new(false);
  let body = encode_request(&RequestBuilder::new().build());

  let mut wrong_type = headers();
  wrong_type.insert(CONTENT_TYPE, HeaderValue::from_static("application/x-protobuf"));
  let mut v1_type = headers();
  v1_type.insert(
    CONTENT_TYPE,
    HeaderValue::from_static("application/x-protobuf;proto=prometheus.WriteRequest"),
  );
  let mut no_type = headers();
  no_type.remove(CONTENT_TYPE);
  let mut gzip = headers();
  gzip.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
  let mut no_encoding = headers();
  no_encoding.remove(CONTENT_ENCODING);

  for headers in [wrong_type, v1_type, no_type, gzip, no_encoding] {
    let response = helper.ingest.handle_write("proj", &headers, body.clone()).await;
    assert_eq!(StatusCode::UNSUPPORTED_MEDIA_TYPE, response.status());
  }

  // Whitespace and case in the content type are tolerated.
  let mut spaced = headers();
  spaced.insert(
    CONTENT_TYPE,
    HeaderValue::from_static("application/x-protobuf; proto=io.prometheus.write.v2.Request"),
  );
  let response = helper.ingest.handle_write("proj", &spaced, body).await;
  assert_eq!(StatusCode::NO_CONTENT, response.status());
}

#[tokio::test]
async fn body_too_large() {
  let helper = Helper::new(false);
  let body = Bytes::from(vec![0; MAX_ALLOWED_REQUEST_SIZE + 1]);
  assert_eq!(
    StatusCode::PAYLOAD_TOO_LARGE,
    helper.write("proj", body).await.status()
  );
}

#[tokio::test]
async fn decode_failures() {
  let helper = Helper::new(false);

  // Not snappy.
  let response = helper
    .write("proj", Bytes::from_static(b"definitely not snappy"))
    .await;
  assert_eq!(StatusCode::BAD_REQUEST, response.status());
  assert!(body_text(response).await.starts_with("body failed to decode: snappy"));

  // Snappy, but not protobuf.
  let body = snap::raw::Encoder::new()
    .compress_vec(&[0xff, 0xff, 0xff])
    .unwrap();
  let response = helper.write("proj", body.into()).await;
  assert_eq!(StatusCode::BAD_REQUEST, response.status());
  assert!(body_text(response).await.starts_with("body failed to decode: protobuf"));
}

#[tokio::test]
async fn validation_errors_reported_and_valid_points_written() {
  let helper = Helper::new(false);
  let body = encode_request(
    &RequestBuilder::new()
      .series(
        &[("__name__", "untyped"), ("job", "api")],
        None,
        &[(1000, 1.0)],
        0,
      )
      .series(
        &[("__name__", "latency_bucket"), ("le", "1")],
        Some(MetricType::METRIC_TYPE_HISTOGRAM),
        &[(2000, 1.0)],
        1000,
      )
      .series(
        &[("__name__", "up")],
        Some(MetricType::METRIC_TYPE_GAUGE),
        &[(1000, 1.0)],
        0,
      )
      .build(),
  );

  let response = helper.write("proj", body).await;
  assert_eq!(StatusCode::BAD_REQUEST, response.status());
  assert_eq!(
    "untyped: type is required, latency_bucket: self-contained histograms required",
    body_text(response).await
  );
  let points = helper.writer.take_points();
  assert_eq!(1, points.len());
  assert_eq!("prometheus.googleapis.com/up/gauge", &*points[0].template.metric_type);
}

#[tokio::test]
async fn classic_histograms_allowed() {
  let helper = Helper::new(true);
  let body = encode_request(
    &RequestBuilder::new()
      .series(
        &[("__name__", "latency_bucket"), ("le", "1")],
        Some(MetricType::METRIC_TYPE_HISTOGRAM),
        &[(2000, 1.0)],
        1000,
      )
      .build(),
  );
  assert_eq!(
    StatusCode::NO_CONTENT,
    helper.write("proj", body).await.status()
  );
  assert_eq!(
    "prometheus.googleapis.com/latency_bucket/counter",
    &*helper.writer.take_points()[0].template.metric_type
  );
}

#[tokio::test]
async fn backend_failures_map_to_status() {
  let helper = Helper::new(false);
  helper.writer.fail_metric_type(
    "prometheus.googleapis.com/up/gauge",
    WriteError::ResourceExhausted("quota exceeded".to_string()),
  );
  helper.writer.fail_metric_type(
    "prometheus.googleapis.com/down/gauge",
    WriteError::InvalidArgument("bad point".to_string()),
  );

  let gauge = |name: &str| {
    encode_request(
      &RequestBuilder::new()
        .series(
          &[("__name__", name)],
          Some(MetricType::METRIC_TYPE_GAUGE),
          &[(1000, 1.0)],
          0,
        )
        .build(),
    )
  };

  let response = helper.write("proj", gauge("up")).await;
  assert_eq!(StatusCode::SERVICE_UNAVAILABLE, response.status());
  assert_eq!("resource exhausted: quota exceeded", body_text(response).await);

  let response = helper.write("proj", gauge("down")).await;
  assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[test]
fn severity() {
  assert_eq!(None, most_severe(std::iter::empty()));
  assert_eq!(
    Some(StatusCode::SERVICE_UNAVAILABLE),
    most_severe([
      StatusCode::BAD_REQUEST,
      StatusCode::SERVICE_UNAVAILABLE,
      StatusCode::INTERNAL_SERVER_ERROR
    ])
  );
  assert_eq!(
    Some(StatusCode::INTERNAL_SERVER_ERROR),
    most_severe([StatusCode::INTERNAL_SERVER_ERROR, StatusCode::BAD_REQUEST])
  );
}

#[tokio::test]
async fn router() {
  let helper = Helper::new(false);
  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let address = listener.local_addr().unwrap();
  let server = tokio::spawn(async move {
    axum::serve(listener, helper.ingest.clone().router())
      .await
      .unwrap();
  });

  let body = encode_request(
    &RequestBuilder::new()
      .series(
        &[("__name__", "up")],
        Some(MetricType::METRIC_TYPE_GAUGE),
        &[(1000, 1.0)],
        0,
      )
      .build(),
  );
  let client = reqwest::Client::new();
  let url =
    format!("http://{address}/v1/projects/my-proj/location/global/prometheus/api/v2/write");
  let response = client
    .post(&url)
    .header(CONTENT_TYPE, REMOTE_WRITE_CONTENT_TYPE)
    .header(CONTENT_ENCODING, "snappy")
    .body(body)
    .send()
    .await
    .unwrap();
  assert_eq!(StatusCode::NO_CONTENT, response.status());

  let response = client.get(&url).send().await.unwrap();
  assert_eq!(StatusCode::METHOD_NOT_ALLOWED, response.status());

  let response = client
    .post(format!("http://{address}/v1/projects/my-proj/write"))
    .send()
    .await
    .unwrap();
  assert_eq!(StatusCode::NOT_FOUND, response.status());

  server.abort();
}
