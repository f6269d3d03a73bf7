// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use crate::labels::LabelSet;
use async_trait::async_trait;
use std::fmt::Display;
use std::sync::Arc;

pub mod http_writer;
pub mod log_writer;

//
// MetricKind
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
  Gauge,
  Cumulative,
}

impl MetricKind {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Gauge => "GAUGE",
      Self::Cumulative => "CUMULATIVE",
    }
  }
}

//
// ValueType
//

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
  Double,
  Distribution,
}

impl ValueType {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Double => "DOUBLE",
      Self::Distribution => "DISTRIBUTION",
    }
  }
}

//
// Distribution
//

// A self-contained histogram. `bucket_counts` has one more entry than `bounds`: bucket i covers
// (bounds[i-1], bounds[i]] and the last bucket is the overflow bucket.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Distribution {
  pub count: u64,
  pub mean: f64,
  pub sum_of_squared_deviation: f64,
  pub bounds: Vec<f64>,
  pub bucket_counts: Vec<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypedValue {
  Double(f64),
  Distribution(Distribution),
}

impl TypedValue {
  #[must_use]
  pub const fn value_type(&self) -> ValueType {
    match self {
      Self::Double(_) => ValueType::Double,
      Self::Distribution(_) => ValueType::Distribution,
    }
  }
}

//
// TimeInterval
//

// Millisecond interval of a point. Gauge points only carry an end time. Cumulative points carry the
// start of the accumulation window which must be strictly before the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeInterval {
  pub start_ms: Option<i64>,
  pub end_ms: i64,
}

impl TimeInterval {
  #[must_use]
  pub const fn gauge(end_ms: i64) -> Self {
    Self {
      start_ms: None,
      end_ms,
    }
  }

  #[must_use]
  pub const fn cumulative(start_ms: i64, end_ms: i64) -> Self {
    Self {
      start_ms: Some(start_ms),
      end_ms,
    }
  }
}

//
// SeriesTemplate
//

// Everything about an output series except the point. Templates are built once per series refresh
// out of interned pieces so producing a point for a sample only clones reference counts.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesTemplate {
  pub resource: Arc<LabelSet>,
  pub metric_type: Arc<str>,
  pub metric_labels: Arc<LabelSet>,
  pub kind: MetricKind,
  pub value_type: ValueType,
}

impl SeriesTemplate {
  #[must_use]
  pub fn point(&self, interval: TimeInterval, value: TypedValue) -> TimeSeriesPoint {
    debug_assert_eq!(self.value_type, value.value_type());
    TimeSeriesPoint {
      template: self.clone(),
      interval,
      value,
    }
  }

  #[must_use]
  pub fn project_id(&self) -> &str {
    self
      .resource
      .get(crate::labels::PROJECT_ID_LABEL)
      .unwrap_or_default()
  }
}

//
// TimeSeriesPoint
//

// A single point write. The backend accepts exactly one point per series per call.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeriesPoint {
  pub template: SeriesTemplate,
  pub interval: TimeInterval,
  pub value: TypedValue,
}

impl Display for TimeSeriesPoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}{} {} {} @{:?}..{}",
      self.template.metric_type,
      self.template.metric_labels,
      self.template.kind.as_str(),
      self.template.resource,
      self.interval.start_ms,
      self.interval.end_ms
    )
  }
}

//
// WriteError
//

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),
  #[error("already exists or out of order: {0}")]
  AlreadyExists(String),
  #[error("resource exhausted: {0}")]
  ResourceExhausted(String),
  #[error("unavailable: {0}")]
  Unavailable(String),
  #[error("internal: {0}")]
  Internal(String),
}

impl WriteError {
  // HTTP status the ingestion surface reports for this failure.
  #[must_use]
  pub fn status(&self) -> http::StatusCode {
    match self {
      Self::InvalidArgument(_) | Self::AlreadyExists(_) => http::StatusCode::BAD_REQUEST,
      Self::ResourceExhausted(_) | Self::Unavailable(_) => http::StatusCode::SERVICE_UNAVAILABLE,
      Self::Internal(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

//
// TimeSeriesWriter
//

// The remote monitoring backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TimeSeriesWriter: Send + Sync {
  async fn create_time_series(&self, point: TimeSeriesPoint) -> Result<(), WriteError>;
}

pub type DynamicTimeSeriesWriter = Arc<dyn TimeSeriesWriter>;
