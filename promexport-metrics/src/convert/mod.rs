// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt


pub mod histogram;

use crate::backend::{
  MetricKind,
  SeriesTemplate,
  TimeInterval,
  TimeSeriesPoint,
  TypedValue,
};
use crate::classify::{MetricType, OutputSpec, SeriesKind, is_classic_histogram_part, metric_type};
use crate::labels::{LabelError, LabelSet, PROJECT_ID_LABEL, SeriesLabels};
use histogram::histogram_to_distribution;
use promexport_protobuf::protos::prometheus::write::v2::types::histogram::ResetHint;
use promexport_protobuf::protos::prometheus::write::v2::types::{Request, TimeSeries};
use protobuf::Chars;
use std::sync::Arc;

// Prometheus marks a series as stale by writing this NaN.
pub const STALE_NAN_BITS: u64 = 0x7ff0_0000_0000_0002;

#[must_use]
pub fn is_stale_nan(value: f64) -> bool {
  value.to_bits() == STALE_NAN_BITS
}

//
// ConvertError
//

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
  #[error("decode error: {0}")]
  Decode(String),
  #[error("{series}: {message}")]
  Invalid { series: String, message: String },
}

impl ConvertError {
  fn invalid(series: &str, message: impl Into<String>) -> Self {
    Self::Invalid {
      series: series.to_string(),
      message: message.into(),
    }
  }

  #[must_use]
  pub const fn status(&self) -> http::StatusCode {
    http::StatusCode::BAD_REQUEST
  }
}

//
// ConvertOptions
//

#[derive(Clone, Debug)]
pub struct ConvertOptions {
  // Fills the project_id resource label for series that do not carry one.
  pub project_id: String,
  pub metric_type_prefix: String,
  // Accept histogram series that are not self-contained and write them as plain counters.
  pub allow_classic_histograms: bool,
}

// Convert a remote write request into backend points. Every record and every sample is converted
// independently. Failures are collected and returned alongside the points that did convert.
#[must_use]
pub fn convert_request(
  request: &Request,
  options: &ConvertOptions,
) -> (Vec<TimeSeriesPoint>, Vec<ConvertError>) {
  let mut points = Vec::new();
  let mut errors = Vec::new();
  for timeseries in &request.timeseries {
    convert_series(
      &request.symbols,
      timeseries,
      options,
      &mut points,
      &mut errors,
    );
  }
  (points, errors)
}

fn resolve_labels(symbols: &[Chars], labels_refs: &[u32]) -> Result<LabelSet, ConvertError> {
  if labels_refs.len() % 2 != 0 {
    return Err(ConvertError::Decode(format!(
      "odd number of label references: {}",
      labels_refs.len()
    )));
  }

  let symbol = |index: u32| {
    symbols
      .get(index as usize)
      .map(|symbol| &**symbol)
      .ok_or_else(|| {
        ConvertError::Decode(format!(
          "label reference {index} out of range of {} symbols",
          symbols.len()
        ))
      })
  };

  let mut labels = LabelSet::new();
  for pair in labels_refs.chunks_exact(2) {
    let name = symbol(pair[0])?;
    if name.is_empty() {
      return Err(ConvertError::Decode("empty label name".to_string()));
    }
    if labels.insert(name, symbol(pair[1])?).is_some() {
      return Err(ConvertError::Decode(format!("duplicate label {name}")));
    }
  }
  Ok(labels)
}

// The shared pieces of the output series for one record.
struct RecordTemplates {
  resource: Arc<LabelSet>,
  metric_labels: Arc<LabelSet>,
  name: String,
}

impl RecordTemplates {
  fn template(&self, prefix: &str, output: &OutputSpec) -> SeriesTemplate {
    SeriesTemplate {
      resource: self.resource.clone(),
      metric_type: metric_type(prefix, &self.name, output.suffix).into(),
      metric_labels: self.metric_labels.clone(),
      kind: output.kind,
      value_type: output.value_type,
    }
  }
}

fn convert_series(
  symbols: &[Chars],
  timeseries: &TimeSeries,
  options: &ConvertOptions,
  points: &mut Vec<TimeSeriesPoint>,
  errors: &mut Vec<ConvertError>,
) {
  let labels = match resolve_labels(symbols, &timeseries.labels_refs) {
    Ok(labels) => labels,
    Err(e) => {
      errors.push(e);
      return;
    },
  };
  let Some(name) = labels
    .metric_name()
    .filter(|name| !name.is_empty())
    .map(ToString::to_string)
  else {
    errors.push(ConvertError::Decode(format!(
      "{}: {}",
      labels,
      LabelError::MissingName
    )));
    return;
  };

  let Some(declared) = timeseries
    .metadata
    .type_
    .enum_value()
    .ok()
    .and_then(MetricType::from_proto)
  else {
    errors.push(ConvertError::invalid(&name, "type is required"));
    return;
  };

  // A series carries either float samples or histogram samples, never both.
  if !timeseries.histograms.is_empty() {
    if !timeseries.samples.is_empty() {
      errors.push(ConvertError::invalid(
        &name,
        "series carries both float and histogram samples",
      ));
      return;
    }
    if !declared.is_histogram() {
      errors.push(ConvertError::invalid(
        &name,
        "non-histogram series carries histogram samples",
      ));
      return;
    }
  }

  let native_histogram = declared.is_histogram() && !timeseries.histograms.is_empty();
  let kind = if declared.is_histogram() && !native_histogram {
    if !options.allow_classic_histograms {
      errors.push(ConvertError::invalid(
        &name,
        "self-contained histograms required",
      ));
      return;
    }
    if !is_classic_histogram_part(&name) {
      errors.push(ConvertError::invalid(
        &name,
        "histogram series carries no native histogram samples",
      ));
      return;
    }
    SeriesKind::ClassicHistogramPart
  } else {
    SeriesKind::classify(declared, &name)
  };

  let defaults = LabelSet::from_pairs([(PROJECT_ID_LABEL, options.project_id.as_str())]);
  let split = match SeriesLabels::split(labels, &defaults, native_histogram) {
    Ok(split) => split,
    Err(e) => {
      errors.push(ConvertError::invalid(&name, e.to_string()));
      return;
    },
  };
  let templates = RecordTemplates {
    resource: Arc::new(split.resource),
    metric_labels: Arc::new(split.metric),
    name: split.name,
  };

  if native_histogram {
    convert_histograms(timeseries, declared, &templates, options, points, errors);
  } else {
    convert_samples(timeseries, kind, &templates, options, points, errors);
  }
}

fn cumulative_interval(
  name: &str,
  created_timestamp: i64,
  timestamp: i64,
) -> Result<TimeInterval, ConvertError> {
  if created_timestamp >= timestamp {
    return Err(ConvertError::invalid(
      name,
      format!("created timestamp {created_timestamp} must be before sample timestamp {timestamp}"),
    ));
  }
  Ok(TimeInterval::cumulative(created_timestamp, timestamp))
}

fn missing_created_timestamp(name: &str) -> ConvertError {
  ConvertError::invalid(name, "created timestamp is required for cumulative metrics")
}

fn convert_samples(
  timeseries: &TimeSeries,
  kind: SeriesKind,
  templates: &RecordTemplates,
  options: &ConvertOptions,
  points: &mut Vec<TimeSeriesPoint>,
  errors: &mut Vec<ConvertError>,
) {
  let name = templates.name.as_str();
  for output in kind.outputs() {
    let template = templates.template(&options.metric_type_prefix, output);
    if output.kind == MetricKind::Cumulative && timeseries.created_timestamp == 0 {
      errors.push(missing_created_timestamp(name));
      continue;
    }

    for sample in &timeseries.samples {
      if is_stale_nan(sample.value) {
        continue;
      }
      let interval = match output.kind {
        MetricKind::Gauge => TimeInterval::gauge(sample.timestamp),
        MetricKind::Cumulative => {
          match cumulative_interval(name, timeseries.created_timestamp, sample.timestamp) {
            Ok(interval) => interval,
            Err(e) => {
              errors.push(e);
              continue;
            },
          }
        },
      };
      points.push(template.point(interval, TypedValue::Double(sample.value)));
    }
  }
}

fn convert_histograms(
  timeseries: &TimeSeries,
  declared: MetricType,
  templates: &RecordTemplates,
  options: &ConvertOptions,
  points: &mut Vec<TimeSeriesPoint>,
  errors: &mut Vec<ConvertError>,
) {
  let name = templates.name.as_str();
  let mut gauge_template = None;
  let mut cumulative_template = None;
  for histogram in &timeseries.histograms {
    if is_stale_nan(histogram.sum) {
      continue;
    }

    let gauge = declared == MetricType::GaugeHistogram
      || histogram.reset_hint.enum_value() == Ok(ResetHint::RESET_HINT_GAUGE);
    let (kind, slot) = if gauge {
      (SeriesKind::GaugeHistogram, &mut gauge_template)
    } else {
      (SeriesKind::Histogram, &mut cumulative_template)
    };
    let template = slot.get_or_insert_with(|| {
      templates.template(&options.metric_type_prefix, &kind.outputs()[0])
    });

    let interval = if gauge {
      TimeInterval::gauge(histogram.timestamp)
    } else if timeseries.created_timestamp == 0 {
      errors.push(missing_created_timestamp(name));
      continue;
    } else {
      match cumulative_interval(name, timeseries.created_timestamp, histogram.timestamp) {
        Ok(interval) => interval,
        Err(e) => {
          errors.push(e);
          continue;
        },
      }
    };

    match histogram_to_distribution(histogram) {
      Ok(distribution) => {
        points.push(template.point(interval, TypedValue::Distribution(distribution)));
      },
      Err(message) => errors.push(ConvertError::invalid(name, message)),
    }
  }
}
