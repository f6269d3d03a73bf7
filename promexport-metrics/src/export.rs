// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./export_test.rs"]
mod export_test;

use crate::backend::{
  DynamicTimeSeriesWriter,
  TimeInterval,
  TimeSeriesPoint,
  TypedValue,
  WriteError,
};
use crate::classify::{MetadataLookup, SeriesKind};
use crate::convert::is_stale_nan;
use crate::series_cache::{SeriesCache, SeriesRef};
use futures::StreamExt;
use prometheus::IntCounter;
use promexport_common::shutdown::ComponentShutdown;
use promexport_common::stats::Scope;
use std::sync::Arc;

//
// ScrapeSample
//

// A raw sample from a scrape. Only the series reference identifies the series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrapeSample {
  pub series_ref: SeriesRef,
  pub timestamp_ms: i64,
  pub value: f64,
}

//
// Stats
//

#[derive(Clone, Debug)]
struct Stats {
  samples_received: IntCounter,
  samples_skipped: IntCounter,
  points_written: IntCounter,
  points_failed: IntCounter,
}

impl Stats {
  fn new(scope: &Scope) -> Self {
    let scope = scope.scope("exporter");
    Self {
      samples_received: scope.counter("samples_received"),
      samples_skipped: scope.counter("samples_skipped"),
      points_written: scope.counter("points_written"),
      points_failed: scope.counter("points_failed"),
    }
  }
}

//
// Exporter
//

// The scrape path. Samples are identified by series reference only, so everything about the
// series comes from the series cache, and cumulative values are anchored by the cache's counter
// reset tracking.
pub struct Exporter {
  cache: Arc<SeriesCache>,
  writer: DynamicTimeSeriesWriter,
  max_concurrent_writes: usize,
  stats: Stats,
}

impl Exporter {
  #[must_use]
  pub fn new(
    scope: &Scope,
    cache: Arc<SeriesCache>,
    writer: DynamicTimeSeriesWriter,
    max_concurrent_writes: usize,
  ) -> Self {
    Self {
      cache,
      writer,
      max_concurrent_writes: max_concurrent_writes.max(1),
      stats: Stats::new(scope),
    }
  }

  #[must_use]
  pub const fn cache(&self) -> &Arc<SeriesCache> {
    &self.cache
  }

  // Turn a batch of scraped samples into points. Samples of series that are not exportable, stale
  // markers, and baseline samples of cumulative series produce nothing.
  #[must_use]
  pub fn build_points(
    &self,
    samples: &[ScrapeSample],
    metadata: &dyn MetadataLookup,
  ) -> Vec<TimeSeriesPoint> {
    self.stats.samples_received.inc_by(samples.len() as u64);
    let mut points = Vec::with_capacity(samples.len());
    for sample in samples {
      if is_stale_nan(sample.value) {
        self.stats.samples_skipped.inc();
        continue;
      }

      let (series, valid) = self
        .cache
        .get(sample.series_ref, sample.timestamp_ms, metadata);
      if !valid || series.dropped {
        self.stats.samples_skipped.inc();
        continue;
      }
      if matches!(
        series.kind,
        Some(SeriesKind::Histogram | SeriesKind::GaugeHistogram)
      ) {
        log::debug!(
          "skipping scalar sample for native histogram series {}",
          sample.series_ref
        );
        self.stats.samples_skipped.inc();
        continue;
      }

      if let Some(gauge) = &series.gauge {
        points.push(gauge.point(
          TimeInterval::gauge(sample.timestamp_ms),
          TypedValue::Double(sample.value),
        ));
      }
      if let Some(cumulative) = &series.cumulative {
        if let Some((reset_timestamp, value)) =
          self
            .cache
            .get_reset_adjusted(sample.series_ref, sample.timestamp_ms, sample.value)
        {
          points.push(cumulative.point(
            TimeInterval::cumulative(reset_timestamp, sample.timestamp_ms),
            TypedValue::Double(value),
          ));
        }
      }
    }
    points
  }

  // Build and write the points for a batch of samples. Returns the number of points written and
  // the failures.
  pub async fn export(
    &self,
    samples: &[ScrapeSample],
    metadata: &dyn MetadataLookup,
  ) -> (usize, Vec<WriteError>) {
    let points = self.build_points(samples, metadata);
    let (written, errors) = write_points(&self.writer, points, self.max_concurrent_writes).await;
    self.stats.points_written.inc_by(written as u64);
    self.stats.points_failed.inc_by(errors.len() as u64);
    (written, errors)
  }
}

// Write points with bounded concurrency. Returns the number written and the failures.
pub async fn write_points(
  writer: &DynamicTimeSeriesWriter,
  points: Vec<TimeSeriesPoint>,
  max_concurrent_writes: usize,
) -> (usize, Vec<WriteError>) {
  let results: Vec<_> = futures::stream::iter(points)
    .map(|point| writer.create_time_series(point))
    .buffer_unordered(max_concurrent_writes.max(1))
    .collect()
    .await;

  let mut written = 0;
  let mut errors = Vec::new();
  for result in results {
    match result {
      Ok(()) => written += 1,
      Err(e) => errors.push(e),
    }
  }
  (written, errors)
}

// Periodically garbage collect series that have not been used within the inactivity window.
pub async fn run_gc_loop(
  cache: Arc<SeriesCache>,
  interval: time::Duration,
  inactivity_window: time::Duration,
  mut shutdown: ComponentShutdown,
) {
  let period = interval.unsigned_abs().max(std::time::Duration::from_secs(1));
  let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
  loop {
    tokio::select! {
      _ = ticker.tick() => {
        let removed = cache.garbage_collect(inactivity_window);
        log::debug!("series cache gc removed {removed} entries, {} remain", cache.len());
      },
      () = shutdown.cancelled() => break,
    }
  }
  log::debug!("series cache gc loop shutting down");
}
