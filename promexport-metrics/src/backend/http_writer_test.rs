// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{HttpWriter, HttpWriterConfig, make_request_body, status_to_write_error};
use crate::backend::{
  Distribution,
  MetricKind,
  TimeInterval,
  TypedValue,
  ValueType,
  WriteError,
};
use crate::test::make_template;
use assert_matches::assert_matches;
use http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn double_cumulative_body() {
  let point = make_template(
    "prometheus.googleapis.com/requests_total/counter",
    &[("method", "GET")],
    MetricKind::Cumulative,
    ValueType::Double,
  )
  .point(TimeInterval::cumulative(1000, 2000), TypedValue::Double(5.0));

  let body = serde_json::to_value(make_request_body(&point).unwrap()).unwrap();
  assert_eq!(
    json!({
      "timeSeries": [{
        "resource": {
          "type": "prometheus_target",
          "labels": {
            "cluster": "",
            "instance": "a:9090",
            "job": "api",
            "location": "us-east1",
            "namespace": "",
            "project_id": "proj",
          },
        },
        "metric": {
          "type": "prometheus.googleapis.com/requests_total/counter",
          "labels": { "method": "GET" },
        },
        "metricKind": "CUMULATIVE",
        "valueType": "DOUBLE",
        "points": [{
          "interval": {
            "startTime": "1970-01-01T00:00:01Z",
            "endTime": "1970-01-01T00:00:02Z",
          },
          "value": { "doubleValue": 5.0 },
        }],
      }],
    }),
    body
  );
}

#[test]
fn gauge_distribution_body() {
  let point = make_template(
    "prometheus.googleapis.com/latency/histogram",
    &[],
    MetricKind::Gauge,
    ValueType::Distribution,
  )
  .point(
    TimeInterval::gauge(1500),
    TypedValue::Distribution(Distribution {
      count: 3,
      mean: 2.0,
      sum_of_squared_deviation: 0.0,
      bounds: vec![1.0, 5.0],
      bucket_counts: vec![1, 2, 0],
    }),
  );

  let body = serde_json::to_value(make_request_body(&point).unwrap()).unwrap();
  let series = &body["timeSeries"][0];
  assert_eq!(json!("GAUGE"), series["metricKind"]);
  assert_eq!(
    json!({ "endTime": "1970-01-01T00:00:01.5Z" }),
    series["points"][0]["interval"]
  );
  assert_eq!(
    json!({
      "distributionValue": {
        "count": "3",
        "mean": 2.0,
        "sumOfSquaredDeviation": 0.0,
        "bucketOptions": { "explicitBuckets": { "bounds": [1.0, 5.0] } },
        "bucketCounts": ["1", "2", "0"],
      }
    }),
    series["points"][0]["value"]
  );
}

#[test]
fn invalid_points() {
  let template = make_template(
    "prometheus.googleapis.com/requests_total/counter",
    &[],
    MetricKind::Cumulative,
    ValueType::Double,
  );

  let missing_start = template.point(TimeInterval::gauge(2000), TypedValue::Double(1.0));
  assert_matches!(
    make_request_body(&missing_start),
    Err(WriteError::InvalidArgument(_))
  );

  let degenerate = template.point(TimeInterval::cumulative(2000, 2000), TypedValue::Double(1.0));
  assert_matches!(
    make_request_body(&degenerate),
    Err(WriteError::InvalidArgument(_))
  );
}

#[test]
fn status_mapping() {
  assert_matches!(
    status_to_write_error(StatusCode::BAD_REQUEST, String::new()),
    WriteError::InvalidArgument(_)
  );
  assert_matches!(
    status_to_write_error(StatusCode::CONFLICT, String::new()),
    WriteError::AlreadyExists(_)
  );
  assert_matches!(
    status_to_write_error(StatusCode::TOO_MANY_REQUESTS, String::new()),
    WriteError::ResourceExhausted(_)
  );
  assert_matches!(
    status_to_write_error(StatusCode::SERVICE_UNAVAILABLE, String::new()),
    WriteError::Unavailable(_)
  );
  let error = status_to_write_error(StatusCode::FORBIDDEN, "denied".to_string());
  assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, error.status());
  assert_eq!("internal: 403 Forbidden: denied", error.to_string());

  assert_eq!(
    StatusCode::BAD_REQUEST,
    WriteError::AlreadyExists(String::new()).status()
  );
  assert_eq!(
    StatusCode::SERVICE_UNAVAILABLE,
    WriteError::ResourceExhausted(String::new()).status()
  );
}

#[test]
fn project_url() {
  let writer = HttpWriter::new(HttpWriterConfig {
    endpoint: "https://monitoring.example.com/".to_string(),
    auth_token: None,
    timeout: std::time::Duration::from_secs(5),
  })
  .unwrap();
  assert_eq!(
    "https://monitoring.example.com/v3/projects/proj/timeSeries",
    writer.url_for_project("proj")
  );
}
