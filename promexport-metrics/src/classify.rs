// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./classify_test.rs"]
mod classify_test;

use crate::backend::{MetricKind, ValueType};
use promexport_protobuf::protos::prometheus::write::v2::types::metadata::MetricType as ProtoMetricType;
use std::collections::HashMap;

pub const DEFAULT_METRIC_TYPE_PREFIX: &str = "prometheus.googleapis.com";

const SUM_SUFFIX: &str = "_sum";
const COUNT_SUFFIX: &str = "_count";
const BUCKET_SUFFIX: &str = "_bucket";
const TOTAL_SUFFIX: &str = "_total";

//
// MetricType
//

// The declared type of a metric family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricType {
  Counter,
  Gauge,
  Histogram,
  GaugeHistogram,
  Summary,
  Info,
  StateSet,
  Unknown,
}

impl MetricType {
  // Returns None for an unspecified type.
  #[must_use]
  pub const fn from_proto(proto: ProtoMetricType) -> Option<Self> {
    match proto {
      ProtoMetricType::METRIC_TYPE_UNSPECIFIED => None,
      ProtoMetricType::METRIC_TYPE_COUNTER => Some(Self::Counter),
      ProtoMetricType::METRIC_TYPE_GAUGE => Some(Self::Gauge),
      ProtoMetricType::METRIC_TYPE_HISTOGRAM => Some(Self::Histogram),
      ProtoMetricType::METRIC_TYPE_GAUGEHISTOGRAM => Some(Self::GaugeHistogram),
      ProtoMetricType::METRIC_TYPE_SUMMARY => Some(Self::Summary),
      ProtoMetricType::METRIC_TYPE_INFO => Some(Self::Info),
      ProtoMetricType::METRIC_TYPE_STATESET => Some(Self::StateSet),
    }
  }

  #[must_use]
  pub const fn is_histogram(self) -> bool {
    matches!(self, Self::Histogram | Self::GaugeHistogram)
  }
}

//
// MetadataLookup
//

// Maps a metric family name to its declared type. Called while holding the series cache lock so
// implementations must be cheap and must not block.
pub trait MetadataLookup: Send + Sync {
  fn lookup(&self, family: &str) -> Option<MetricType>;
}

impl<S: std::hash::BuildHasher + Send + Sync> MetadataLookup for HashMap<String, MetricType, S> {
  fn lookup(&self, family: &str) -> Option<MetricType> {
    self.get(family).copied()
  }
}

//
// OutputSpec
//

// One output series produced for an input series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputSpec {
  pub kind: MetricKind,
  pub value_type: ValueType,
  pub suffix: &'static str,
}

const fn output_spec(kind: MetricKind, value_type: ValueType, suffix: &'static str) -> OutputSpec {
  OutputSpec {
    kind,
    value_type,
    suffix,
  }
}

const COUNTER: OutputSpec = output_spec(MetricKind::Cumulative, ValueType::Double, "counter");
const GAUGE: OutputSpec = output_spec(MetricKind::Gauge, ValueType::Double, "gauge");
const HISTOGRAM: OutputSpec = output_spec(MetricKind::Cumulative, ValueType::Distribution, "histogram");
const GAUGE_HISTOGRAM: OutputSpec = output_spec(MetricKind::Gauge, ValueType::Distribution, "histogram");
const SUMMARY_QUANTILE: OutputSpec = output_spec(MetricKind::Gauge, ValueType::Double, "summary");
const SUMMARY_COUNT: OutputSpec = output_spec(MetricKind::Cumulative, ValueType::Double, "summary");
const SUMMARY_SUM: OutputSpec = output_spec(MetricKind::Cumulative, ValueType::Double, "summary:counter");
const UNKNOWN_GAUGE: OutputSpec = output_spec(MetricKind::Gauge, ValueType::Double, "unknown");
const UNKNOWN_COUNTER: OutputSpec =
  output_spec(MetricKind::Cumulative, ValueType::Double, "unknown:counter");

//
// SeriesKind
//

// The classification of a single input series. Summaries are split by name suffix into their
// quantile, sum and count series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
  Counter,
  Gauge,
  Histogram,
  GaugeHistogram,
  SummaryQuantile,
  SummarySum,
  SummaryCount,
  Info,
  StateSet,
  // Type unknown. Exported both as a gauge and as a counter.
  Unknown,
  // A `_bucket`, `_sum` or `_count` series of a histogram that is not self-contained. Only
  // exported when explicitly allowed, as a plain counter.
  ClassicHistogramPart,
}

impl SeriesKind {
  // Classify a series given the declared type of its family and its full metric name.
  #[must_use]
  pub fn classify(declared: MetricType, name: &str) -> Self {
    match declared {
      MetricType::Counter => Self::Counter,
      MetricType::Gauge => Self::Gauge,
      MetricType::Histogram => Self::Histogram,
      MetricType::GaugeHistogram => Self::GaugeHistogram,
      MetricType::Summary => {
        if name.ends_with(SUM_SUFFIX) {
          Self::SummarySum
        } else if name.ends_with(COUNT_SUFFIX) {
          Self::SummaryCount
        } else {
          Self::SummaryQuantile
        }
      },
      MetricType::Info => Self::Info,
      MetricType::StateSet => Self::StateSet,
      MetricType::Unknown => Self::Unknown,
    }
  }

  // The output series written for samples of this series. At most one gauge and one cumulative.
  #[must_use]
  pub const fn outputs(self) -> &'static [OutputSpec] {
    match self {
      Self::Counter | Self::ClassicHistogramPart => &[COUNTER],
      Self::Gauge | Self::Info | Self::StateSet => &[GAUGE],
      Self::Histogram => &[HISTOGRAM],
      Self::GaugeHistogram => &[GAUGE_HISTOGRAM],
      Self::SummaryQuantile => &[SUMMARY_QUANTILE],
      Self::SummarySum => &[SUMMARY_SUM],
      Self::SummaryCount => &[SUMMARY_COUNT],
      Self::Unknown => &[UNKNOWN_GAUGE, UNKNOWN_COUNTER],
    }
  }

  // Histogram buckets are carried inside the distribution, so the bucket label is not a metric
  // label of the output series.
  #[must_use]
  pub const fn drops_bucket_label(self) -> bool {
    matches!(self, Self::Histogram | Self::GaugeHistogram)
  }
}

// Resolve the kind of a scraped series whose family type must be looked up by name. The exact name
// is tried first, then the name with a well known series suffix stripped. Series of a histogram
// family that are not self-contained come back as `ClassicHistogramPart`. Anything not found is
// `Unknown`.
#[must_use]
pub fn resolve_kind(name: &str, metadata: &dyn MetadataLookup) -> SeriesKind {
  if let Some(declared) = metadata.lookup(name) {
    return SeriesKind::classify(declared, name);
  }

  for suffix in [TOTAL_SUFFIX, SUM_SUFFIX, COUNT_SUFFIX, BUCKET_SUFFIX] {
    let Some(family) = name.strip_suffix(suffix) else {
      continue;
    };
    match metadata.lookup(family) {
      Some(declared) if declared.is_histogram() => return SeriesKind::ClassicHistogramPart,
      Some(declared) => return SeriesKind::classify(declared, name),
      None => {},
    }
  }

  SeriesKind::Unknown
}

// Whether a histogram-typed push series is one of the split `_bucket`, `_sum` or `_count` series.
#[must_use]
pub fn is_classic_histogram_part(name: &str) -> bool {
  [BUCKET_SUFFIX, SUM_SUFFIX, COUNT_SUFFIX]
    .iter()
    .any(|suffix| name.ends_with(suffix))
}

// `<prefix>/<name>/<suffix>`, where suffix may carry a secondary `:<suffix>`.
#[must_use]
pub fn metric_type(prefix: &str, name: &str, suffix: &str) -> String {
  format!("{prefix}/{name}/{suffix}")
}
