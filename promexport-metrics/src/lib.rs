// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

pub mod admin;
pub mod backend;
pub mod classify;
pub mod clock;
pub mod convert;
pub mod export;
pub mod ingest;
pub mod intern;
pub mod labels;
pub mod series_cache;
#[cfg(test)]
pub mod test;

#[cfg(test)]
#[ctor::ctor]
fn test_global_init() {
  use promexport_common::global_initialize;

  global_initialize();
}
