// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

use anyhow::{Context, bail};
use promexport_common::proto::{ProtoDurationToTimeDuration, yaml_to_proto};
use promexport_common::stats::Scope;
use promexport_metrics::backend::http_writer::{HttpWriter, HttpWriterConfig};
use promexport_metrics::backend::log_writer::LogWriter;
use promexport_metrics::backend::DynamicTimeSeriesWriter;
use promexport_metrics::classify::DEFAULT_METRIC_TYPE_PREFIX;
use promexport_metrics::ingest::IngestConfig;
use promexport_metrics::labels::{LabelMatcher, LabelSet};
use promexport_metrics::series_cache::SeriesCacheConfig;
use promexport_protobuf::protos::promexport::config::bootstrap::v1::bootstrap::backend_config::Backend_type;
use promexport_protobuf::protos::promexport::config::bootstrap::v1::bootstrap::label_matcher::MatchType;
use promexport_protobuf::protos::promexport::config::bootstrap::v1::bootstrap::{
  BackendConfig,
  Config,
  ExportConfig,
  LabelMatcher as LabelMatcherConfig,
};
use protobuf::MessageFull;
use std::sync::Arc;
use time::Duration;
use time::ext::NumericalDuration;

pub const DEFAULT_GC_INTERVAL: Duration = Duration::minutes(10);
pub const DEFAULT_GC_INACTIVITY_WINDOW: Duration = Duration::hours(1);
pub const DEFAULT_MAX_CONCURRENT_WRITES: usize = 16;
pub const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::seconds(30);

pub fn load_from_file<T: MessageFull>(path: &str) -> anyhow::Result<T> {
  let file_contents = std::fs::read_to_string(path)?;
  yaml_to_proto(&file_contents)
}

// Checks everything that can be checked without binding sockets or talking to the backend.
pub fn validate(config: &Config) -> anyhow::Result<()> {
  if config.listen.is_empty() {
    bail!("listen is required");
  }

  let export = config.export.get_or_default();
  if metric_type_prefix(export).is_empty() {
    bail!("export.metric_type_prefix must not be empty");
  }
  for label in &export.external_labels {
    if label.name.is_empty() {
      bail!("export.external_labels entries require a name");
    }
  }
  make_matchers(export)?;
  for (name, duration) in [
    ("gc_interval", export.gc_interval.unwrap_duration_or(DEFAULT_GC_INTERVAL)),
    (
      "gc_inactivity_window",
      export
        .gc_inactivity_window
        .unwrap_duration_or(DEFAULT_GC_INACTIVITY_WINDOW),
    ),
  ] {
    if duration <= Duration::ZERO {
      bail!("export.{name} must be positive");
    }
  }

  match &config.backend.get_or_default().backend_type {
    Some(Backend_type::Http(http)) => {
      if http.endpoint.is_empty() {
        bail!("backend.http.endpoint is required");
      }
    },
    Some(Backend_type::Log(_)) => {},
    Some(_) => bail!("unsupported backend"),
    None => bail!("a backend is required"),
  }

  Ok(())
}

#[must_use]
pub fn metric_type_prefix(export: &ExportConfig) -> String {
  if export.metric_type_prefix.is_empty() {
    DEFAULT_METRIC_TYPE_PREFIX.to_string()
  } else {
    export.metric_type_prefix.to_string()
  }
}

fn make_matcher(config: &LabelMatcherConfig) -> anyhow::Result<LabelMatcher> {
  if config.name.is_empty() {
    bail!("matcher requires a label name");
  }
  let name = config.name.to_string();
  let matcher = match config.type_.enum_value() {
    Ok(MatchType::EQUAL) => LabelMatcher::equal(name, config.value.to_string()),
    Ok(MatchType::NOT_EQUAL) => LabelMatcher::not_equal(name, config.value.to_string()),
    Ok(MatchType::REGEX) => LabelMatcher::regex(name, &config.value)
      .with_context(|| format!("invalid matcher regex {:?}", &*config.value))?,
    Ok(MatchType::NOT_REGEX) => LabelMatcher::not_regex(name, &config.value)
      .with_context(|| format!("invalid matcher regex {:?}", &*config.value))?,
    Err(value) => bail!("unknown matcher type {value}"),
  };
  Ok(matcher)
}

pub fn make_matchers(export: &ExportConfig) -> anyhow::Result<Vec<LabelMatcher>> {
  export.matchers.iter().map(make_matcher).collect()
}

pub fn make_series_cache_config(config: &Config) -> anyhow::Result<SeriesCacheConfig> {
  let export = config.export.get_or_default();
  Ok(SeriesCacheConfig {
    metric_type_prefix: metric_type_prefix(export),
    external_labels: export
      .external_labels
      .iter()
      .map(|label| (label.name.to_string(), label.value.to_string()))
      .collect::<LabelSet>(),
    matchers: make_matchers(export)?,
    allow_classic_histograms: config.ingest.get_or_default().allow_classic_histograms,
  })
}

// Returns the gc interval and the inactivity window.
#[must_use]
pub fn gc_settings(config: &Config) -> (Duration, Duration) {
  let export = config.export.get_or_default();
  (
    export.gc_interval.unwrap_duration_or(DEFAULT_GC_INTERVAL),
    export
      .gc_inactivity_window
      .unwrap_duration_or(DEFAULT_GC_INACTIVITY_WINDOW),
  )
}

#[must_use]
pub fn make_ingest_config(config: &Config) -> IngestConfig {
  let ingest = config.ingest.get_or_default();
  IngestConfig {
    metric_type_prefix: metric_type_prefix(config.export.get_or_default()),
    allow_classic_histograms: ingest.allow_classic_histograms,
    max_concurrent_writes: if ingest.max_concurrent_writes == 0 {
      DEFAULT_MAX_CONCURRENT_WRITES
    } else {
      ingest.max_concurrent_writes as usize
    },
  }
}

pub fn make_writer(backend: &BackendConfig, scope: &Scope) -> anyhow::Result<DynamicTimeSeriesWriter> {
  match &backend.backend_type {
    Some(Backend_type::Http(http)) => {
      let auth_token = if http.auth_token_env.is_empty() {
        None
      } else {
        Some(
          std::env::var(&*http.auth_token_env)
            .with_context(|| format!("can't read auth token from ${}", &*http.auth_token_env))?,
        )
      };
      log::info!("writing points to {}", &*http.endpoint);
      Ok(Arc::new(HttpWriter::new(HttpWriterConfig {
        endpoint: http.endpoint.to_string(),
        auth_token,
        timeout: http
          .timeout
          .unwrap_duration_or(DEFAULT_BACKEND_TIMEOUT)
          .max(1.seconds())
          .unsigned_abs(),
      })?))
    },
    Some(Backend_type::Log(_)) => {
      log::info!("logging points instead of writing them");
      Ok(Arc::new(LogWriter::new(scope)))
    },
    Some(_) => bail!("unsupported backend"),
    None => bail!("a backend is required"),
  }
}
