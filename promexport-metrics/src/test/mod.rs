// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use crate::backend::{
  MetricKind,
  SeriesTemplate,
  TimeSeriesPoint,
  TimeSeriesWriter,
  ValueType,
  WriteError,
};
use crate::labels::LabelSet;
use crate::series_cache::{LabelResolver, SeriesRef};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use promexport_protobuf::protos::prometheus::write::v2::types::metadata::MetricType as ProtoMetricType;
use promexport_protobuf::protos::prometheus::write::v2::types::{
  Histogram,
  Metadata,
  Request,
  Sample,
  TimeSeries,
};
use protobuf::{Message, MessageField};
use std::collections::HashMap;
use std::sync::Arc;

#[must_use]
pub fn make_resource() -> LabelSet {
  LabelSet::from_pairs([
    ("project_id", "proj"),
    ("location", "us-east1"),
    ("cluster", ""),
    ("namespace", ""),
    ("job", "api"),
    ("instance", "a:9090"),
  ])
}

#[must_use]
pub fn make_template(
  metric_type: &str,
  metric_labels: &[(&str, &str)],
  kind: MetricKind,
  value_type: ValueType,
) -> SeriesTemplate {
  SeriesTemplate {
    resource: Arc::new(make_resource()),
    metric_type: metric_type.into(),
    metric_labels: Arc::new(LabelSet::from_pairs(metric_labels.iter().copied())),
    kind,
    value_type,
  }
}

//
// StaticLabelResolver
//

#[derive(Default)]
pub struct StaticLabelResolver {
  labels: Mutex<HashMap<SeriesRef, LabelSet>>,
}

impl StaticLabelResolver {
  pub fn insert(&self, series_ref: SeriesRef, labels: &[(&str, &str)]) {
    self
      .labels
      .lock()
      .insert(series_ref, LabelSet::from_pairs(labels.iter().copied()));
  }

  pub fn remove(&self, series_ref: SeriesRef) {
    self.labels.lock().remove(&series_ref);
  }
}

impl LabelResolver for StaticLabelResolver {
  fn resolve(&self, series_ref: SeriesRef) -> Option<LabelSet> {
    self.labels.lock().get(&series_ref).cloned()
  }
}

//
// RecordingWriter
//

// Records every written point. Fails writes whose metric type matches a configured failure.
#[derive(Default)]
pub struct RecordingWriter {
  points: Mutex<Vec<TimeSeriesPoint>>,
  failures: Mutex<HashMap<String, WriteError>>,
}

impl RecordingWriter {
  pub fn fail_metric_type(&self, metric_type: &str, error: WriteError) {
    self.failures.lock().insert(metric_type.to_string(), error);
  }

  #[must_use]
  pub fn take_points(&self) -> Vec<TimeSeriesPoint> {
    let mut points = std::mem::take(&mut *self.points.lock());
    points.sort_by(|a, b| {
      (&*a.template.metric_type, a.interval.end_ms)
        .cmp(&(&*b.template.metric_type, b.interval.end_ms))
    });
    points
  }
}

#[async_trait]
impl TimeSeriesWriter for RecordingWriter {
  async fn create_time_series(&self, point: TimeSeriesPoint) -> Result<(), WriteError> {
    if let Some(error) = self.failures.lock().get(&*point.template.metric_type) {
      return Err(error.clone());
    }
    self.points.lock().push(point);
    Ok(())
  }
}

//
// RequestBuilder
//

// Builds remote write requests, taking care of the symbol table.
#[derive(Default)]
pub struct RequestBuilder {
  symbols: Vec<String>,
  symbol_index: HashMap<String, u32>,
  timeseries: Vec<TimeSeries>,
}

impl RequestBuilder {
  #[must_use]
  pub fn new() -> Self {
    // Index 0 is always the empty string.
    let mut builder = Self::default();
    builder.symbol("");
    builder
  }

  fn symbol(&mut self, value: &str) -> u32 {
    if let Some(index) = self.symbol_index.get(value) {
      return *index;
    }
    let index = self.symbols.len() as u32;
    self.symbols.push(value.to_string());
    self.symbol_index.insert(value.to_string(), index);
    index
  }

  #[must_use]
  pub fn labels_refs(&mut self, labels: &[(&str, &str)]) -> Vec<u32> {
    labels
      .iter()
      .flat_map(|(name, value)| [self.symbol(name), self.symbol(value)])
      .collect()
  }

  pub fn series(
    &mut self,
    labels: &[(&str, &str)],
    metric_type: Option<ProtoMetricType>,
    samples: &[(i64, f64)],
    created_timestamp: i64,
  ) -> &mut Self {
    let labels_refs = self.labels_refs(labels);
    self.timeseries.push(TimeSeries {
      labels_refs,
      samples: samples
        .iter()
        .map(|(timestamp, value)| Sample {
          value: *value,
          timestamp: *timestamp,
          ..Default::default()
        })
        .collect(),
      metadata: make_metadata(metric_type),
      created_timestamp,
      ..Default::default()
    });
    self
  }

  pub fn histogram_series(
    &mut self,
    labels: &[(&str, &str)],
    metric_type: ProtoMetricType,
    histograms: Vec<Histogram>,
    created_timestamp: i64,
  ) -> &mut Self {
    let labels_refs = self.labels_refs(labels);
    self.timeseries.push(TimeSeries {
      labels_refs,
      histograms,
      metadata: make_metadata(Some(metric_type)),
      created_timestamp,
      ..Default::default()
    });
    self
  }

  pub fn raw_series(&mut self, timeseries: TimeSeries) -> &mut Self {
    self.timeseries.push(timeseries);
    self
  }

  #[must_use]
  pub fn build(&self) -> Request {
    Request {
      symbols: self.symbols.iter().map(|s| s.as_str().into()).collect(),
      timeseries: self.timeseries.clone(),
      ..Default::default()
    }
  }
}

fn make_metadata(metric_type: Option<ProtoMetricType>) -> MessageField<Metadata> {
  metric_type.map_or_else(MessageField::none, |metric_type| {
    MessageField::some(Metadata {
      type_: metric_type.into(),
      ..Default::default()
    })
  })
}

// Serialize and snappy compress a request the way remote write senders do.
#[must_use]
pub fn encode_request(request: &Request) -> Bytes {
  let serialized = request.write_to_bytes().unwrap();
  snap::raw::Encoder::new()
    .compress_vec(&serialized)
    .unwrap()
    .into()
}
