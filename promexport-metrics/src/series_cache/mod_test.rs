// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{SeriesCache, SeriesCacheConfig};
use crate::backend::{MetricKind, ValueType};
use crate::classify::{DEFAULT_METRIC_TYPE_PREFIX, MetricType, SeriesKind};
use crate::clock::{TestDurationJitter, TestTimeProvider};
use crate::intern::InternPool;
use crate::labels::{LabelMatcher, LabelSet};
use crate::test::{StaticLabelResolver, make_resource};
use pretty_assertions::assert_eq;
use promexport_common::stats::Collector;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use time::ext::NumericalDuration;

struct Helper {
  cache: Arc<SeriesCache>,
  pool: Arc<InternPool>,
  resolver: Arc<StaticLabelResolver>,
  time: TestTimeProvider,
  metadata: HashMap<String, MetricType>,
}

impl Helper {
  fn new(config: SeriesCacheConfig) -> Self {
    let collector = Collector::default();
    let pool = InternPool::new(&collector.scope("test"));
    let resolver = Arc::new(StaticLabelResolver::default());
    let time = TestTimeProvider::new(1_000_000);
    let cache = SeriesCache::new(
      &collector.scope("test"),
      pool.clone(),
      resolver.clone(),
      SeriesCacheConfig {
        metric_type_prefix: DEFAULT_METRIC_TYPE_PREFIX.to_string(),
        ..config
      },
      Box::new(TestTimeProvider {
        time_ms: time.time_ms.clone(),
      }),
      Box::new(TestDurationJitter {}),
    );
    let metadata = HashMap::from([
      ("requests".to_string(), MetricType::Counter),
      ("temperature".to_string(), MetricType::Gauge),
      ("latency".to_string(), MetricType::Histogram),
    ]);

    Self {
      cache,
      pool,
      resolver,
      time,
      metadata,
    }
  }

  fn add_series(&self, series_ref: u64, name: &str, extra: &[(&str, &str)]) {
    let mut labels = vec![
      ("__name__", name),
      ("project_id", "proj"),
      ("location", "us-east1"),
      ("job", "api"),
      ("instance", "a:9090"),
    ];
    labels.extend_from_slice(extra);
    self.resolver.insert(series_ref, &labels);
  }
}

#[test]
fn populate_counter() {
  let helper = Helper::new(SeriesCacheConfig::default());
  helper.add_series(1, "requests_total", &[("method", "GET")]);

  let (series, valid) = helper.cache.get(1, 1000, &helper.metadata);
  assert!(valid);
  assert!(!series.dropped);
  assert_eq!(Some(SeriesKind::Counter), series.kind);
  assert!(series.gauge.is_none());
  let template = series.cumulative.unwrap();
  assert_eq!(
    "prometheus.googleapis.com/requests_total/counter",
    &*template.metric_type
  );
  assert_eq!(MetricKind::Cumulative, template.kind);
  assert_eq!(ValueType::Double, template.value_type);
  assert_eq!(make_resource(), *template.resource);
  assert_eq!(
    LabelSet::from_pairs([("method", "GET")]),
    *template.metric_labels
  );
  assert_eq!(1, helper.cache.len());
}

#[test]
fn unknown_series_has_both_templates() {
  let helper = Helper::new(SeriesCacheConfig::default());
  helper.add_series(1, "mystery", &[]);

  let (series, valid) = helper.cache.get(1, 1000, &helper.metadata);
  assert!(valid);
  assert_eq!(Some(SeriesKind::Unknown), series.kind);
  let gauge = series.gauge.unwrap();
  let cumulative = series.cumulative.unwrap();
  assert_eq!("prometheus.googleapis.com/mystery/unknown", &*gauge.metric_type);
  assert_eq!(
    "prometheus.googleapis.com/mystery/unknown:counter",
    &*cumulative.metric_type
  );
  // Both templates share the interned label sets.
  assert!(Arc::ptr_eq(&gauge.resource, &cumulative.resource));
  assert!(Arc::ptr_eq(&gauge.metric_labels, &cumulative.metric_labels));
  assert_eq!(2, helper.pool.labels_ref_count(&make_resource()));
}

#[test]
fn series_share_interned_resource() {
  let helper = Helper::new(SeriesCacheConfig::default());
  helper.add_series(1, "temperature", &[("room", "a")]);
  helper.add_series(2, "temperature", &[("room", "b")]);

  let (first, _) = helper.cache.get(1, 1000, &helper.metadata);
  let (second, _) = helper.cache.get(2, 1000, &helper.metadata);
  let first = first.gauge.unwrap();
  let second = second.gauge.unwrap();
  assert!(Arc::ptr_eq(&first.resource, &second.resource));
  assert!(Arc::ptr_eq(&first.metric_type, &second.metric_type));
  assert!(!Arc::ptr_eq(&first.metric_labels, &second.metric_labels));
}

#[test]
fn external_labels() {
  let helper = Helper::new(SeriesCacheConfig {
    external_labels: LabelSet::from_pairs([("cluster", "prod"), ("location", "eu-west1")]),
    ..Default::default()
  });
  helper.add_series(1, "temperature", &[]);

  let (series, _) = helper.cache.get(1, 1000, &helper.metadata);
  let resource = series.gauge.unwrap().resource;
  assert_eq!(Some("prod"), resource.get("cluster"));
  // The series' own label wins.
  assert_eq!(Some("us-east1"), resource.get("location"));
}

#[test]
fn matcher_drop_is_sticky() {
  let helper = Helper::new(SeriesCacheConfig {
    matchers: vec![LabelMatcher::equal("env", "prod")],
    ..Default::default()
  });
  helper.add_series(1, "temperature", &[("env", "dev")]);

  let (series, valid) = helper.cache.get(1, 1000, &helper.metadata);
  assert!(valid);
  assert!(series.dropped);
  assert!(series.gauge.is_none());
  assert!(helper.pool.is_empty());

  // Even if the labels would now match, a dropped entry is not repopulated.
  helper.add_series(1, "temperature", &[("env", "prod")]);
  helper.cache.invalidate_all();
  let (series, valid) = helper.cache.get(1, 2000, &helper.metadata);
  assert!(valid);
  assert!(series.dropped);

  helper.add_series(2, "temperature", &[("env", "prod")]);
  let (series, valid) = helper.cache.get(2, 2000, &helper.metadata);
  assert!(valid);
  assert!(!series.dropped);
  assert!(series.gauge.is_some());
}

#[test]
fn population_failure_retried_after_refresh_interval() {
  let helper = Helper::new(SeriesCacheConfig::default());

  // Unresolvable reference.
  let (series, valid) = helper.cache.get(1, 1000, &helper.metadata);
  assert!(!valid);
  assert!(!series.dropped);
  assert!(series.gauge.is_none() && series.cumulative.is_none());

  // Resolvable now, but the entry is not refreshed before its deadline.
  helper.add_series(1, "temperature", &[]);
  helper.time.advance(20.minutes() - 1.milliseconds());
  assert!(!helper.cache.get(1, 2000, &helper.metadata).1);

  helper.time.advance(1.milliseconds());
  let (series, valid) = helper.cache.get(1, 3000, &helper.metadata);
  assert!(valid);
  assert!(series.gauge.is_some());
}

#[test]
fn too_many_labels() {
  let helper = Helper::new(SeriesCacheConfig::default());
  let names: Vec<String> = (0 .. 101).map(|i| format!("label_{i}")).collect();
  let extra: Vec<(&str, &str)> = names.iter().map(|name| (name.as_str(), "x")).collect();
  helper.add_series(1, "temperature", &extra);

  let (_, valid) = helper.cache.get(1, 1000, &helper.metadata);
  assert!(!valid);
  assert!(helper.pool.is_empty());

  helper.add_series(2, "temperature", &extra[.. 100]);
  assert!(helper.cache.get(2, 1000, &helper.metadata).1);
}

#[test]
fn classic_histogram_parts() {
  let helper = Helper::new(SeriesCacheConfig::default());
  helper.add_series(1, "latency_bucket", &[("le", "0.5")]);
  assert!(!helper.cache.get(1, 1000, &helper.metadata).1);

  let helper = Helper::new(SeriesCacheConfig {
    allow_classic_histograms: true,
    ..Default::default()
  });
  helper.add_series(1, "latency_bucket", &[("le", "0.5")]);
  let (series, valid) = helper.cache.get(1, 1000, &helper.metadata);
  assert!(valid);
  assert_eq!(Some(SeriesKind::ClassicHistogramPart), series.kind);
  let template = series.cumulative.unwrap();
  assert_eq!(
    "prometheus.googleapis.com/latency_bucket/counter",
    &*template.metric_type
  );
  // The bucket label is a regular metric label here.
  assert_eq!(LabelSet::from_pairs([("le", "0.5")]), *template.metric_labels);
}

#[test]
fn reset_adjusted() {
  let helper = Helper::new(SeriesCacheConfig::default());
  assert_eq!(None, helper.cache.get_reset_adjusted(1, 1000, 5.0));

  helper.add_series(1, "requests_total", &[]);
  helper.cache.get(1, 1000, &helper.metadata);
  assert_eq!(None, helper.cache.get_reset_adjusted(1, 1000, 100.0));
  assert_eq!(Some((1000, 5.0)), helper.cache.get_reset_adjusted(1, 2000, 105.0));
  assert_eq!(Some((2999, 20.0)), helper.cache.get_reset_adjusted(1, 3000, 20.0));
}

#[test]
fn garbage_collect() {
  let helper = Helper::new(SeriesCacheConfig::default());
  helper.add_series(1, "requests_total", &[]);
  helper.add_series(2, "temperature", &[]);

  let last_used = 5_000_000;
  helper.cache.get(1, last_used, &helper.metadata);
  helper.cache.get(2, last_used + 10.minutes().whole_milliseconds() as i64, &helper.metadata);

  helper.time.set(last_used + 1.hours().whole_milliseconds() as i64 - 1);
  assert_eq!(0, helper.cache.garbage_collect(1.hours()));
  assert_eq!(2, helper.cache.len());

  helper.time.set(last_used + 1.hours().whole_milliseconds() as i64 + 1);
  assert_eq!(1, helper.cache.garbage_collect(1.hours()));
  assert_eq!(1, helper.cache.len());
  // Collecting again is a no-op.
  assert_eq!(0, helper.cache.garbage_collect(1.hours()));

  helper.time.set(last_used + 2.hours().whole_milliseconds() as i64);
  assert_eq!(1, helper.cache.garbage_collect(1.hours()));
  assert!(helper.cache.is_empty());
  assert!(helper.pool.is_empty());

  // A collected series starts over with a fresh baseline.
  helper.cache.get(1, last_used, &helper.metadata);
  assert_eq!(None, helper.cache.get_reset_adjusted(1, 1000, 1.0));
}

#[test]
fn invalidate_all_rebuilds_templates() {
  let helper = Helper::new(SeriesCacheConfig::default());
  helper.add_series(1, "temperature", &[("room", "a")]);
  let (before, _) = helper.cache.get(1, 1000, &helper.metadata);

  // Without invalidation the change is not picked up before the deadline.
  helper.add_series(1, "temperature", &[("room", "b")]);
  let (unchanged, _) = helper.cache.get(1, 2000, &helper.metadata);
  assert_eq!(before, unchanged);

  helper.cache.invalidate_all();
  let (after, valid) = helper.cache.get(1, 3000, &helper.metadata);
  assert!(valid);
  assert_eq!(
    LabelSet::from_pairs([("room", "b")]),
    *after.gauge.unwrap().metric_labels
  );
  assert_eq!(
    0,
    helper
      .pool
      .labels_ref_count(&LabelSet::from_pairs([("room", "a")]))
  );
  assert_eq!(1, helper.pool.labels_ref_count(&make_resource()));
}

#[test]
fn refresh_does_not_leak() {
  let helper = Helper::new(SeriesCacheConfig::default());
  helper.add_series(1, "mystery", &[]);
  for i in 0 .. 10 {
    helper.cache.invalidate_all();
    assert!(helper.cache.get(1, 1000 + i, &helper.metadata).1);
  }
  assert_eq!((2, 2), helper.pool.len());
  assert_eq!(2, helper.pool.labels_ref_count(&make_resource()));

  // A series that disappears releases its templates on the next refresh.
  helper.resolver.remove(1);
  helper.cache.invalidate_all();
  assert!(!helper.cache.get(1, 2000, &helper.metadata).1);
  assert!(helper.pool.is_empty());
}

#[test]
fn concurrent_get_and_collect() {
  let helper = Helper::new(SeriesCacheConfig::default());
  for series_ref in 0 .. 4 {
    let shard = series_ref.to_string();
    helper.add_series(series_ref, "requests_total", &[("shard", shard.as_str())]);
  }
  helper.add_series(4, "temperature", &[]);
  let done = AtomicBool::new(false);

  std::thread::scope(|scope| {
    let workers: Vec<_> = (0 .. 4)
      .map(|worker| {
        let helper = &helper;
        scope.spawn(move || {
          for t in 1 .. 2_000i64 {
            // Every worker shares series 0 with the others and owns one more.
            for series_ref in [0, worker + 1] {
              let (_series, _valid) = helper.cache.get(series_ref, t, &helper.metadata);
              // Values go back to zero every 50 samples.
              if let Some((reset_ms, value)) =
                helper.cache.get_reset_adjusted(series_ref, t, (t % 50) as f64)
              {
                assert!(reset_ms < t, "reset {reset_ms} not before {t}");
                assert!(value >= 0.0, "negative adjusted value {value}");
              }
            }
            let _ = helper.cache.get(4, t, &helper.metadata);
          }
        })
      })
      .collect();

    // Every sample timestamp is older than the provider's clock, so a zero window collects
    // everything not in use.
    scope.spawn(|| {
      while !done.load(Ordering::Relaxed) {
        helper.cache.garbage_collect(time::Duration::ZERO);
        helper.cache.invalidate_all();
      }
    });

    for worker in workers {
      worker.join().unwrap();
    }
    done.store(true, Ordering::Relaxed);
  });

  helper.cache.garbage_collect(time::Duration::ZERO);
  assert!(helper.cache.is_empty());
  assert!(helper.pool.is_empty());
}

#[test]
fn empty_project_id_is_a_population_failure() {
  let helper = Helper::new(SeriesCacheConfig::default());
  helper
    .resolver
    .insert(1, &[("__name__", "temperature"), ("location", "us-east1")]);

  let (series, valid) = helper.cache.get(1, 1000, &helper.metadata);
  assert!(!valid);
  assert!(series.gauge.is_none());
  assert!(helper.pool.is_empty());

  // An external project id makes the same series exportable.
  let helper = Helper::new(SeriesCacheConfig {
    external_labels: LabelSet::from_pairs([("project_id", "proj")]),
    ..Default::default()
  });
  helper
    .resolver
    .insert(1, &[("__name__", "temperature"), ("location", "us-east1")]);
  let (series, valid) = helper.cache.get(1, 1000, &helper.metadata);
  assert!(valid);
  assert_eq!(Some("proj"), series.gauge.unwrap().resource.get("project_id"));
}
