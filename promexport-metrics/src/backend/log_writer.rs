// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{TimeSeriesPoint, TimeSeriesWriter, WriteError};
use async_trait::async_trait;
use prometheus::IntCounter;
use promexport_common::stats::Scope;

//
// LogWriter
//

// Logs every point instead of sending it anywhere. Useful for dry runs and local testing.
pub struct LogWriter {
  points_logged: IntCounter,
}

impl LogWriter {
  #[must_use]
  pub fn new(scope: &Scope) -> Self {
    Self {
      points_logged: scope.scope("log_writer").counter("points_logged"),
    }
  }
}

#[async_trait]
impl TimeSeriesWriter for LogWriter {
  async fn create_time_series(&self, point: TimeSeriesPoint) -> Result<(), WriteError> {
    log::debug!("write: {point} value={:?}", point.value);
    self.points_logged.inc();
    Ok(())
  }
}
