// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./logging_test.rs"]
mod logging_test;

use std::sync::Once;
use std::sync::atomic::{AtomicI64, Ordering};
use time::{Duration, OffsetDateTime};

static INIT: Once = Once::new();

// Install env_logger as the log backend. Defaults to info when RUST_LOG is not set. Safe to call
// more than once.
pub fn initialize_logger() {
  INIT.call_once(|| {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ignored = env_logger::Builder::from_env(env)
      .format_timestamp_millis()
      .try_init();
  });
}

// Returns true if a rate limited call site that last logged at `last_logged` (unix millis) may log
// again now. Only one caller wins a given window.
#[doc(hidden)]
pub fn should_log(last_logged: &AtomicI64, interval: Duration) -> bool {
  should_log_at(
    last_logged,
    interval,
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64,
  )
}

fn should_log_at(last_logged: &AtomicI64, interval: Duration, now_ms: i64) -> bool {
  let previous = last_logged.load(Ordering::Relaxed);
  if previous != i64::MIN && now_ms - previous < interval.whole_milliseconds() as i64 {
    return false;
  }
  last_logged
    .compare_exchange(previous, now_ms, Ordering::Relaxed, Ordering::Relaxed)
    .is_ok()
}

// Log a warning at most once per interval for the call site.
#[macro_export]
macro_rules! warn_every {
  ($interval:expr, $($arg:tt)+) => {{
    static LAST_LOGGED: ::std::sync::atomic::AtomicI64 =
      ::std::sync::atomic::AtomicI64::new(i64::MIN);
    if $crate::logging::should_log(&LAST_LOGGED, $interval) {
      $crate::private_log::warn!($($arg)+);
    }
  }};
}

// Log an error at most once per interval for the call site.
#[macro_export]
macro_rules! error_every {
  ($interval:expr, $($arg:tt)+) => {{
    static LAST_LOGGED: ::std::sync::atomic::AtomicI64 =
      ::std::sync::atomic::AtomicI64::new(i64::MIN);
    if $crate::logging::should_log(&LAST_LOGGED, $interval) {
      $crate::private_log::error!($($arg)+);
    }
  }};
}
