// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

pub mod logging;
pub mod proto;
pub mod shutdown;
pub mod stats;

#[doc(hidden)]
pub use ::log as private_log;

#[cfg(test)]
#[ctor::ctor]
fn test_global_init() {
  global_initialize();
}

pub fn global_initialize() {
  logging::initialize_logger();

  // Invariant violations (for example releasing an interned value that was never interned) are
  // bugs. In release builds make sure they take the whole process down instead of leaving a
  // poisoned worker behind.
  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    log::error!("panic: {info}");
    default_hook(info);
    #[cfg(not(debug_assertions))]
    std::process::abort();
  }));
}

pub trait LossyIntoToFloat {
  fn lossy_to_f64(self) -> f64;
}

impl LossyIntoToFloat for u64 {
  #[allow(clippy::cast_precision_loss)]
  fn lossy_to_f64(self) -> f64 {
    self as f64
  }
}

pub trait LossyFloatToInt {
  fn lossy_to_u64(self) -> u64;
}

impl LossyFloatToInt for f64 {
  #[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
  )]
  fn lossy_to_u64(self) -> u64 {
    self as u64
  }
}
