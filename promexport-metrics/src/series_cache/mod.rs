// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./mod_test.rs"]
mod mod_test;

pub mod reset;

use crate::backend::{MetricKind, SeriesTemplate};
use crate::classify::{MetadataLookup, SeriesKind, metric_type, resolve_kind};
use crate::clock::{DurationJitter, TimeProvider};
use crate::intern::InternPool;
use crate::labels::{LabelError, LabelMatcher, LabelSet, SeriesLabels};
use parking_lot::Mutex;
use prometheus::{IntCounter, IntGauge};
use promexport_common::stats::Scope;
use promexport_common::warn_every;
use reset::ResetState;
use std::collections::HashMap;
use std::sync::Arc;
use time::Duration;
use time::ext::NumericalDuration;

// Templates are rebuilt every REFRESH_INTERVAL +/- REFRESH_JITTER so that series created in bulk do
// not all refresh at once.
const REFRESH_INTERVAL: Duration = Duration::minutes(10);
const REFRESH_JITTER: Duration = Duration::minutes(10);

// Opaque per process reference to a scraped series.
pub type SeriesRef = u64;

//
// LabelResolver
//

// Resolves a series reference to its label set. Returns None once the reference is invalidated.
pub trait LabelResolver: Send + Sync {
  fn resolve(&self, series_ref: SeriesRef) -> Option<LabelSet>;
}

//
// SeriesCacheConfig
//

#[derive(Clone, Debug, Default)]
pub struct SeriesCacheConfig {
  pub metric_type_prefix: String,
  // Added to every series that does not already carry the label with a non-empty value.
  pub external_labels: LabelSet,
  // Series must match all matchers to be exported.
  pub matchers: Vec<LabelMatcher>,
  pub allow_classic_histograms: bool,
}

//
// Stats
//

#[derive(Clone, Debug)]
struct Stats {
  cache_size: IntGauge,
  refreshes: IntCounter,
  population_failures: IntCounter,
  dropped: IntCounter,
  gc_removed: IntCounter,
}

impl Stats {
  fn new(scope: &Scope) -> Self {
    let scope = scope.scope("series_cache");
    Self {
      cache_size: scope.gauge("cache_size"),
      refreshes: scope.counter("refreshes"),
      population_failures: scope.counter("population_failures"),
      dropped: scope.counter("dropped"),
      gc_removed: scope.counter("gc_removed"),
    }
  }
}

//
// PopulateError
//

#[derive(thiserror::Error, Debug)]
enum PopulateError {
  #[error("series reference {0} could not be resolved")]
  Unresolved(SeriesRef),
  #[error("{0}: self-contained histograms required")]
  ClassicHistogram(String),
  #[error(transparent)]
  Labels(#[from] LabelError),
}

//
// CachedSeries
//

// The exportable view of a cache entry. Templates are shared with the cache.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CachedSeries {
  pub kind: Option<SeriesKind>,
  pub gauge: Option<SeriesTemplate>,
  pub cumulative: Option<SeriesTemplate>,
  // Excluded by a matcher. Sticky for the life of the entry since matchers never change.
  pub dropped: bool,
}

impl CachedSeries {
  fn has_templates(&self) -> bool {
    self.gauge.is_some() || self.cumulative.is_some()
  }

  // Returns every interned piece of the templates to the pool.
  fn release(&mut self, pool: &InternPool) {
    for template in [self.gauge.take(), self.cumulative.take()].into_iter().flatten() {
      pool.release_labels(&template.resource);
      pool.release_labels(&template.metric_labels);
      pool.release_str(&template.metric_type);
    }
  }
}

//
// SeriesEntry
//

struct SeriesEntry {
  // None until the series reference has been resolved at least once.
  labels: Option<LabelSet>,
  series: CachedSeries,
  next_refresh_ms: i64,
  last_used_ms: i64,
  reset: Arc<Mutex<ResetState>>,
}

impl SeriesEntry {
  fn new() -> Self {
    Self {
      labels: None,
      series: CachedSeries::default(),
      next_refresh_ms: i64::MIN,
      last_used_ms: i64::MIN,
      reset: Arc::default(),
    }
  }

  fn valid(&self) -> bool {
    self.labels.is_some() && (self.series.dropped || self.series.has_templates())
  }
}

//
// SeriesCache
//

// Remembers how each scraped series maps onto the backend model and tracks its counter reset
// state. A single mutex guards the entry table. Reset state has its own per entry lock so that
// adjusting samples does not contend with template refreshes. The intern pool is only ever called
// with the table lock held, never the other way around.
pub struct SeriesCache {
  entries: Mutex<HashMap<SeriesRef, SeriesEntry, ahash::RandomState>>,
  pool: Arc<InternPool>,
  resolver: Arc<dyn LabelResolver>,
  config: SeriesCacheConfig,
  time_provider: Box<dyn TimeProvider>,
  jitter: Box<dyn DurationJitter>,
  stats: Stats,
}

impl SeriesCache {
  #[must_use]
  pub fn new(
    scope: &Scope,
    pool: Arc<InternPool>,
    resolver: Arc<dyn LabelResolver>,
    config: SeriesCacheConfig,
    time_provider: Box<dyn TimeProvider>,
    jitter: Box<dyn DurationJitter>,
  ) -> Arc<Self> {
    Arc::new(Self {
      entries: Mutex::default(),
      pool,
      resolver,
      config,
      time_provider,
      jitter,
      stats: Stats::new(scope),
    })
  }

  // Look up or create the entry for a series, refreshing it if its refresh deadline has passed.
  // Returns the entry's exportable view and whether the entry is valid.
  pub fn get(
    &self,
    series_ref: SeriesRef,
    timestamp_ms: i64,
    metadata: &dyn MetadataLookup,
  ) -> (CachedSeries, bool) {
    let now_ms = self.time_provider.unix_now_millis();
    let mut entries = self.entries.lock();
    let entry = entries.entry(series_ref).or_insert_with(SeriesEntry::new);

    if now_ms >= entry.next_refresh_ms {
      self.refresh(series_ref, entry, metadata);
      entry.next_refresh_ms = now_ms
        + (REFRESH_INTERVAL - REFRESH_JITTER
          + self.jitter.full_jitter_duration(REFRESH_JITTER * 2))
        .whole_milliseconds() as i64;
    }
    entry.last_used_ms = timestamp_ms;

    let valid = entry.valid();
    let series = entry.series.clone();
    self.stats.cache_size.set(entries.len() as i64);
    (series, valid)
  }

  // Run a raw cumulative sample through the series' counter reset state. Returns None if the sample
  // must be dropped, including when the series is unknown.
  pub fn get_reset_adjusted(
    &self,
    series_ref: SeriesRef,
    timestamp_ms: i64,
    value: f64,
  ) -> Option<(i64, f64)> {
    let reset = self.entries.lock().get(&series_ref)?.reset.clone();
    let mut reset = reset.lock();
    reset.adjust(timestamp_ms, value)
  }

  // Remove every entry last used before now - inactivity_window. Returns the number removed.
  pub fn garbage_collect(&self, inactivity_window: Duration) -> usize {
    let cutoff_ms =
      self.time_provider.unix_now_millis() - inactivity_window.whole_milliseconds() as i64;
    let mut entries = self.entries.lock();
    let before = entries.len();
    entries.retain(|series_ref, entry| {
      if entry.last_used_ms >= cutoff_ms {
        return true;
      }
      log::trace!("collecting series {series_ref}");
      entry.series.release(&self.pool);
      false
    });

    let removed = before - entries.len();
    self.stats.gc_removed.inc_by(removed as u64);
    self.stats.cache_size.set(entries.len() as i64);
    removed
  }

  // Force every entry to refresh on its next use.
  pub fn invalidate_all(&self) {
    for entry in self.entries.lock().values_mut() {
      entry.next_refresh_ms = i64::MIN;
    }
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.lock().len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn refresh(&self, series_ref: SeriesRef, entry: &mut SeriesEntry, metadata: &dyn MetadataLookup) {
    if entry.series.dropped {
      return;
    }
    self.stats.refreshes.inc();

    match self.populate(series_ref, metadata) {
      Ok((labels, series)) => {
        if series.dropped {
          self.stats.dropped.inc();
        }
        // The new templates are fully built before the old ones are released.
        entry.series.release(&self.pool);
        entry.labels = Some(labels);
        entry.series = series;
      },
      Err(e) => {
        warn_every!(1.minutes(), "failed to populate series {series_ref}: {e}");
        self.stats.population_failures.inc();
        entry.series.release(&self.pool);
        entry.series.kind = None;
      },
    }
  }

  fn populate(
    &self,
    series_ref: SeriesRef,
    metadata: &dyn MetadataLookup,
  ) -> Result<(LabelSet, CachedSeries), PopulateError> {
    let mut labels = self
      .resolver
      .resolve(series_ref)
      .ok_or(PopulateError::Unresolved(series_ref))?;
    for (name, value) in self.config.external_labels.iter() {
      if labels.get(name).is_none_or(str::is_empty) {
        labels.insert(name, value);
      }
    }

    if !self.config.matchers.iter().all(|matcher| matcher.matches(&labels)) {
      return Ok((
        labels,
        CachedSeries {
          dropped: true,
          ..Default::default()
        },
      ));
    }

    let name = labels
      .metric_name()
      .filter(|name| !name.is_empty())
      .ok_or(LabelError::MissingName)?;
    let kind = resolve_kind(name, metadata);
    if kind == SeriesKind::ClassicHistogramPart && !self.config.allow_classic_histograms {
      return Err(PopulateError::ClassicHistogram(name.to_string()));
    }

    let split = SeriesLabels::split(labels.clone(), &LabelSet::default(), kind.drops_bucket_label())?;
    let mut series = CachedSeries {
      kind: Some(kind),
      ..Default::default()
    };
    for output in kind.outputs() {
      let template = SeriesTemplate {
        resource: self.pool.intern_labels(&split.resource),
        metric_type: self.pool.intern_str(&metric_type(
          &self.config.metric_type_prefix,
          &split.name,
          output.suffix,
        )),
        metric_labels: self.pool.intern_labels(&split.metric),
        kind: output.kind,
        value_type: output.value_type,
      };
      match output.kind {
        MetricKind::Gauge => series.gauge = Some(template),
        MetricKind::Cumulative => series.cumulative = Some(template),
      }
    }

    Ok((labels, series))
  }
}
