// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{AutoGauge, Collector};
use pretty_assertions::assert_eq;

#[test]
fn nested_scopes() {
  let collector = Collector::default();
  let scope = collector.scope("ingest").scope("remote_write");
  let counter = scope.counter("requests_total");
  counter.inc();

  let families = collector.gather();
  assert_eq!(1, families.len());
  assert!(
    collector
      .text_output()
      .unwrap()
      .contains("ingest:remote_write:requests_total 1")
  );
}

#[test]
fn duplicate_registration() {
  let collector = Collector::default();
  let scope = collector.scope("test");
  let first = scope.counter("dup");
  let second = scope.counter("dup");
  first.inc();
  second.inc();
  assert_eq!(1, first.get());
  assert_eq!(1, second.get());
}

#[test]
fn auto_gauge() {
  let collector = Collector::default();
  let gauge = collector.scope("test").gauge("active");
  {
    let _active = AutoGauge::new(gauge.clone());
    assert_eq!(1, gauge.get());
  }
  assert_eq!(0, gauge.get());
}
