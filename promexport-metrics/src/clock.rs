// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use time::{Duration, OffsetDateTime};

//
// TimeProvider
//

pub trait TimeProvider: Send + Sync + 'static {
  // Milliseconds since the unix epoch, the unit sample timestamps use.
  fn unix_now_millis(&self) -> i64;
}

//
// RealTimeProvider
//

pub struct RealTimeProvider {}

impl TimeProvider for RealTimeProvider {
  fn unix_now_millis(&self) -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
  }
}

//
// TestTimeProvider
//

#[derive(Default)]
pub struct TestTimeProvider {
  pub time_ms: Arc<AtomicI64>,
}

impl TestTimeProvider {
  #[must_use]
  pub fn new(time_ms: i64) -> Self {
    Self {
      time_ms: Arc::new(AtomicI64::new(time_ms)),
    }
  }

  pub fn set(&self, time_ms: i64) {
    self.time_ms.store(time_ms, Ordering::SeqCst);
  }

  pub fn advance(&self, duration: Duration) {
    self.time_ms.fetch_add(
      duration.whole_milliseconds() as i64,
      Ordering::SeqCst,
    );
  }
}

impl TimeProvider for TestTimeProvider {
  fn unix_now_millis(&self) -> i64 {
    self.time_ms.load(Ordering::SeqCst)
  }
}

//
// DurationJitter
//

pub trait DurationJitter: Send + Sync {
  // jitter from 0 ..= duration
  fn full_jitter_duration(&self, input: Duration) -> Duration;
}

//
// RealDurationJitter
//

pub struct RealDurationJitter {}

impl DurationJitter for RealDurationJitter {
  fn full_jitter_duration(&self, input: Duration) -> Duration {
    thread_local! {
      static RANDOM: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
    }

    let max_millis = input.whole_milliseconds().max(0) as u64;
    let jittered_as_millis =
      RANDOM.with(|random| random.borrow_mut().random_range(0 ..= max_millis));
    Duration::milliseconds(jittered_as_millis as i64)
  }
}

//
// TestDurationJitter
//

// Always returns the full duration so deadlines are predictable.
pub struct TestDurationJitter {}

impl DurationJitter for TestDurationJitter {
  fn full_jitter_duration(&self, input: Duration) -> Duration {
    input
  }
}
