// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./reset_test.rs"]
mod reset_test;

//
// ResetState
//

// Counter reset tracking for one series. Turns raw accumulating values into values relative to a
// reset anchor, which gives the backend a stable start time for each cumulative series.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ResetState {
  #[default]
  Unseen,
  Tracking {
    reset_timestamp: i64,
    reset_value: f64,
    last_value: f64,
  },
}

impl ResetState {
  // Adjust a raw sample. Returns the reset timestamp and adjusted value, or None if the sample must
  // be dropped. The first sample only establishes the baseline since the accumulation window
  // before it is unknown. Only a recurrence of the anchor timestamp is guarded against, general out
  // of order samples for the same series are not corrected.
  pub fn adjust(&mut self, timestamp: i64, value: f64) -> Option<(i64, f64)> {
    match self {
      Self::Unseen => {
        *self = Self::Tracking {
          reset_timestamp: timestamp,
          reset_value: value,
          last_value: value,
        };
        None
      },
      Self::Tracking {
        reset_timestamp,
        reset_value,
        last_value,
      } => {
        if timestamp <= *reset_timestamp {
          return None;
        }

        if value < *last_value {
          // Anchor one millisecond before the sample so the interval is never empty.
          *reset_value = 0.0;
          *reset_timestamp = timestamp - 1;
        }
        *last_value = value;

        Some((*reset_timestamp, value - *reset_value))
      },
    }
  }
}
