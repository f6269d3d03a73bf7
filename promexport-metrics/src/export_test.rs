// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{Exporter, ScrapeSample, run_gc_loop, write_points};
use crate::backend::{
  DynamicTimeSeriesWriter,
  MetricKind,
  MockTimeSeriesWriter,
  TimeInterval,
  TypedValue,
  ValueType,
  WriteError,
};
use crate::classify::MetricType;
use crate::clock::{TestDurationJitter, TestTimeProvider};
use crate::convert::STALE_NAN_BITS;
use crate::intern::InternPool;
use crate::labels::LabelMatcher;
use crate::series_cache::{SeriesCache, SeriesCacheConfig};
use crate::test::{RecordingWriter, StaticLabelResolver, make_template};
use pretty_assertions::assert_eq;
use promexport_common::shutdown::ComponentShutdownTrigger;
use promexport_common::stats::Collector;
use std::collections::HashMap;
use std::sync::Arc;
use time::ext::NumericalDuration;

struct Helper {
  exporter: Exporter,
  writer: Arc<RecordingWriter>,
  resolver: Arc<StaticLabelResolver>,
  time: TestTimeProvider,
  metadata: HashMap<String, MetricType>,
}

impl Helper {
  fn new(config: SeriesCacheConfig) -> Self {
    let collector = Collector::default();
    let scope = collector.scope("test");
    let resolver = Arc::new(StaticLabelResolver::default());
    let time = TestTimeProvider::new(1_000_000);
    let cache = SeriesCache::new(
      &scope,
      InternPool::new(&scope),
      resolver.clone(),
      SeriesCacheConfig {
        metric_type_prefix: "prometheus.googleapis.com".to_string(),
        ..config
      },
      Box::new(TestTimeProvider {
        time_ms: time.time_ms.clone(),
      }),
      Box::new(TestDurationJitter {}),
    );
    let writer = Arc::new(RecordingWriter::default());
    let exporter = Exporter::new(&scope, cache, writer.clone(), 4);

    for (series_ref, name, env) in [
      (1, "requests_total", "prod"),
      (2, "temperature", "prod"),
      (3, "mystery", "prod"),
      (4, "temperature", "dev"),
    ] {
      resolver.insert(
        series_ref,
        &[
          ("__name__", name),
          ("project_id", "proj"),
          ("location", "us-east1"),
          ("job", "api"),
          ("instance", "a:9090"),
          ("env", env),
        ],
      );
    }

    Self {
      exporter,
      writer,
      resolver,
      time,
      metadata: HashMap::from([
        ("requests".to_string(), MetricType::Counter),
        ("temperature".to_string(), MetricType::Gauge),
      ]),
    }
  }
}

fn sample(series_ref: u64, timestamp_ms: i64, value: f64) -> ScrapeSample {
  ScrapeSample {
    series_ref,
    timestamp_ms,
    value,
  }
}

#[test]
fn counter_points_are_reset_adjusted() {
  let helper = Helper::new(SeriesCacheConfig::default());

  // The first sample only sets the baseline.
  assert!(
    helper
      .exporter
      .build_points(&[sample(1, 1000, 10.0)], &helper.metadata)
      .is_empty()
  );

  let points = helper
    .exporter
    .build_points(&[sample(1, 2000, 15.0), sample(1, 3000, 4.0)], &helper.metadata);
  assert_eq!(
    vec![
      (TimeInterval::cumulative(1000, 2000), TypedValue::Double(5.0)),
      (TimeInterval::cumulative(2999, 3000), TypedValue::Double(4.0)),
    ],
    points
      .iter()
      .map(|point| (point.interval, point.value.clone()))
      .collect::<Vec<_>>()
  );
  assert_eq!(
    "prometheus.googleapis.com/requests_total/counter",
    &*points[0].template.metric_type
  );
}

#[test]
fn gauge_and_unknown_points() {
  let helper = Helper::new(SeriesCacheConfig::default());
  let points = helper.exporter.build_points(
    &[sample(2, 1000, 21.5), sample(3, 1000, 7.0), sample(3, 2000, 9.0)],
    &helper.metadata,
  );
  assert_eq!(
    vec![
      (
        "prometheus.googleapis.com/temperature/gauge",
        MetricKind::Gauge,
        TimeInterval::gauge(1000),
        TypedValue::Double(21.5)
      ),
      (
        "prometheus.googleapis.com/mystery/unknown",
        MetricKind::Gauge,
        TimeInterval::gauge(1000),
        TypedValue::Double(7.0)
      ),
      (
        "prometheus.googleapis.com/mystery/unknown",
        MetricKind::Gauge,
        TimeInterval::gauge(2000),
        TypedValue::Double(9.0)
      ),
      (
        "prometheus.googleapis.com/mystery/unknown:counter",
        MetricKind::Cumulative,
        TimeInterval::cumulative(1000, 2000),
        TypedValue::Double(2.0)
      ),
    ],
    points
      .iter()
      .map(|point| (
        &*point.template.metric_type,
        point.template.kind,
        point.interval,
        point.value.clone()
      ))
      .collect::<Vec<_>>()
  );
}

#[test]
fn skipped_samples() {
  let helper = Helper::new(SeriesCacheConfig {
    matchers: vec![LabelMatcher::equal("env", "prod")],
    ..Default::default()
  });
  let points = helper.exporter.build_points(
    &[
      // Dropped by the matcher.
      sample(4, 1000, 1.0),
      // Unknown reference.
      sample(99, 1000, 1.0),
      // Stale marker.
      sample(2, 1000, f64::from_bits(STALE_NAN_BITS)),
      sample(2, 2000, 3.0),
    ],
    &helper.metadata,
  );
  assert_eq!(1, points.len());
  assert_eq!(TimeInterval::gauge(2000), points[0].interval);

  // A series removed upstream stops exporting once its entry refreshes.
  helper.resolver.remove(2);
  helper.exporter.cache().invalidate_all();
  assert!(
    helper
      .exporter
      .build_points(&[sample(2, 3000, 3.0)], &helper.metadata)
      .is_empty()
  );
}

#[tokio::test]
async fn export_writes_points() {
  let helper = Helper::new(SeriesCacheConfig::default());
  helper.writer.fail_metric_type(
    "prometheus.googleapis.com/mystery/unknown",
    WriteError::ResourceExhausted("quota".to_string()),
  );

  let (written, errors) = helper
    .exporter
    .export(
      &[sample(2, 1000, 1.0), sample(2, 2000, 2.0), sample(3, 1000, 5.0)],
      &helper.metadata,
    )
    .await;
  assert_eq!(2, written);
  assert_eq!(vec![WriteError::ResourceExhausted("quota".to_string())], errors);
  assert_eq!(2, helper.writer.take_points().len());
}

#[tokio::test]
async fn write_points_bounded() {
  let mut writer = MockTimeSeriesWriter::new();
  writer
    .expect_create_time_series()
    .times(3)
    .returning(|point| {
      if point.interval.end_ms == 2000 {
        Err(WriteError::Internal("boom".to_string()))
      } else {
        Ok(())
      }
    });
  let writer: DynamicTimeSeriesWriter = Arc::new(writer);
  let template = make_template(
    "prometheus.googleapis.com/up/gauge",
    &[],
    MetricKind::Gauge,
    ValueType::Double,
  );
  let points = (1 ..= 3)
    .map(|i| template.point(TimeInterval::gauge(i * 1000), TypedValue::Double(1.0)))
    .collect();

  let (written, errors) = write_points(&writer, points, 1).await;
  assert_eq!(2, written);
  assert_eq!(vec![WriteError::Internal("boom".to_string())], errors);
}

#[tokio::test(start_paused = true)]
async fn gc_loop() {
  let helper = Helper::new(SeriesCacheConfig::default());
  let points = helper
    .exporter
    .build_points(&[sample(2, 1_000_000, 1.0)], &helper.metadata);
  assert_eq!(1, points.len());
  assert_eq!(1, helper.exporter.cache().len());

  let trigger = ComponentShutdownTrigger::default();
  let gc = tokio::spawn(run_gc_loop(
    helper.exporter.cache().clone(),
    10.minutes(),
    1.hours(),
    trigger.make_shutdown(),
  ));

  // Still inside the inactivity window.
  helper.time.advance(30.minutes());
  tokio::time::sleep(std::time::Duration::from_secs(11 * 60)).await;
  assert_eq!(1, helper.exporter.cache().len());

  helper.time.advance(1.hours());
  tokio::time::sleep(std::time::Duration::from_secs(10 * 60)).await;
  assert!(helper.exporter.cache().is_empty());

  trigger.shutdown();
  gc.await.unwrap();
}
