// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::should_log_at;
use std::sync::atomic::AtomicI64;
use time::ext::NumericalDuration;

#[test]
fn rate_limit() {
  let last_logged = AtomicI64::new(i64::MIN);
  assert!(should_log_at(&last_logged, 1.minutes(), 1_000));
  assert!(!should_log_at(&last_logged, 1.minutes(), 1_001));
  assert!(!should_log_at(&last_logged, 1.minutes(), 60_999));
  assert!(should_log_at(&last_logged, 1.minutes(), 61_000));
}

#[test]
fn macro_expands() {
  for _ in 0 .. 3 {
    crate::warn_every!(1.minutes(), "only logged once: {}", 1);
    crate::error_every!(1.minutes(), "only logged once: {}", 2);
  }
}
