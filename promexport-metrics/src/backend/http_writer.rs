// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./http_writer_test.rs"]
mod http_writer_test;

use super::{
  Distribution,
  MetricKind,
  TimeInterval,
  TimeSeriesPoint,
  TimeSeriesWriter,
  TypedValue,
  ValueType,
  WriteError,
};
use crate::labels::{LabelSet, RESOURCE_TYPE};
use async_trait::async_trait;
use http::StatusCode;
use http::header::AUTHORIZATION;
use serde::Serialize;
use std::collections::BTreeMap;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

//
// Request body
//

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeSeriesRequest {
  pub time_series: Vec<TimeSeriesBody>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesBody {
  pub resource: TypedLabels,
  pub metric: TypedLabels,
  pub metric_kind: &'static str,
  pub value_type: &'static str,
  pub points: Vec<PointBody>,
}

#[derive(Serialize, Debug)]
pub struct TypedLabels {
  #[serde(rename = "type")]
  pub type_: String,
  pub labels: BTreeMap<String, String>,
}

#[derive(Serialize, Debug)]
pub struct PointBody {
  pub interval: IntervalBody,
  pub value: ValueBody,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IntervalBody {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_time: Option<String>,
  pub end_time: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub enum ValueBody {
  DoubleValue(f64),
  DistributionValue(DistributionBody),
}

// int64 fields are encoded as strings in the JSON mapping of the backend API.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DistributionBody {
  pub count: String,
  pub mean: f64,
  pub sum_of_squared_deviation: f64,
  pub bucket_options: BucketOptionsBody,
  pub bucket_counts: Vec<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BucketOptionsBody {
  pub explicit_buckets: ExplicitBucketsBody,
}

#[derive(Serialize, Debug)]
pub struct ExplicitBucketsBody {
  pub bounds: Vec<f64>,
}

fn format_millis(ms: i64) -> Result<String, WriteError> {
  OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
    .ok()
    .and_then(|time| time.format(&Rfc3339).ok())
    .ok_or_else(|| WriteError::InvalidArgument(format!("timestamp {ms} is out of range")))
}

fn labels_to_map(labels: &LabelSet) -> BTreeMap<String, String> {
  labels
    .iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

fn interval_body(interval: &TimeInterval) -> Result<IntervalBody, WriteError> {
  Ok(IntervalBody {
    start_time: interval.start_ms.map(format_millis).transpose()?,
    end_time: format_millis(interval.end_ms)?,
  })
}

fn distribution_body(distribution: &Distribution) -> DistributionBody {
  DistributionBody {
    count: distribution.count.to_string(),
    mean: distribution.mean,
    sum_of_squared_deviation: distribution.sum_of_squared_deviation,
    bucket_options: BucketOptionsBody {
      explicit_buckets: ExplicitBucketsBody {
        bounds: distribution.bounds.clone(),
      },
    },
    bucket_counts: distribution
      .bucket_counts
      .iter()
      .map(ToString::to_string)
      .collect(),
  }
}

// Build the JSON body for a single point write.
pub fn make_request_body(point: &TimeSeriesPoint) -> Result<CreateTimeSeriesRequest, WriteError> {
  let template = &point.template;
  if template.kind == MetricKind::Cumulative
    && point
      .interval
      .start_ms
      .is_none_or(|start| start >= point.interval.end_ms)
  {
    return Err(WriteError::InvalidArgument(format!(
      "cumulative point requires a start time before the end time: {point}"
    )));
  }

  let value = match (&point.value, template.value_type) {
    (TypedValue::Double(value), ValueType::Double) => ValueBody::DoubleValue(*value),
    (TypedValue::Distribution(distribution), ValueType::Distribution) => {
      ValueBody::DistributionValue(distribution_body(distribution))
    },
    _ => {
      return Err(WriteError::InvalidArgument(format!(
        "value does not match value type {}: {point}",
        template.value_type.as_str()
      )));
    },
  };

  Ok(CreateTimeSeriesRequest {
    time_series: vec![TimeSeriesBody {
      resource: TypedLabels {
        type_: RESOURCE_TYPE.to_string(),
        labels: labels_to_map(&template.resource),
      },
      metric: TypedLabels {
        type_: template.metric_type.to_string(),
        labels: labels_to_map(&template.metric_labels),
      },
      metric_kind: template.kind.as_str(),
      value_type: template.value_type.as_str(),
      points: vec![PointBody {
        interval: interval_body(&point.interval)?,
        value,
      }],
    }],
  })
}

// Map a failed backend response onto the write error taxonomy.
#[must_use]
pub fn status_to_write_error(status: StatusCode, message: String) -> WriteError {
  match status {
    StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
      WriteError::InvalidArgument(message)
    },
    StatusCode::CONFLICT => WriteError::AlreadyExists(message),
    StatusCode::TOO_MANY_REQUESTS => WriteError::ResourceExhausted(message),
    StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
      WriteError::Unavailable(message)
    },
    _ => WriteError::Internal(format!("{status}: {message}")),
  }
}

//
// HttpWriterConfig
//

#[derive(Clone, Debug)]
pub struct HttpWriterConfig {
  pub endpoint: String,
  pub auth_token: Option<String>,
  pub timeout: std::time::Duration,
}

//
// HttpWriter
//

// Writes points to the backend's JSON time series API.
pub struct HttpWriter {
  client: reqwest::Client,
  config: HttpWriterConfig,
}

impl HttpWriter {
  pub fn new(config: HttpWriterConfig) -> anyhow::Result<Self> {
    let client = reqwest::Client::builder().timeout(config.timeout).build()?;
    Ok(Self { client, config })
  }

  #[must_use]
  pub fn url_for_project(&self, project_id: &str) -> String {
    format!(
      "{}/v3/projects/{project_id}/timeSeries",
      self.config.endpoint.trim_end_matches('/')
    )
  }
}

#[async_trait]
impl TimeSeriesWriter for HttpWriter {
  async fn create_time_series(&self, point: TimeSeriesPoint) -> Result<(), WriteError> {
    let body = make_request_body(&point)?;
    let mut request = self
      .client
      .post(self.url_for_project(point.template.project_id()))
      .json(&body);
    if let Some(token) = &self.config.auth_token {
      request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }

    let response = request
      .send()
      .await
      .map_err(|e| WriteError::Unavailable(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
      return Ok(());
    }

    let message = response.text().await.unwrap_or_default();
    log::debug!("backend write failed with {status}: {message}");
    Err(status_to_write_error(status, message))
  }
}
