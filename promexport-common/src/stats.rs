// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./stats_test.rs"]
mod stats_test;

use prometheus::core::Collector as PromCollector;
use prometheus::proto::MetricFamily;
use prometheus::{IntCounter, IntGauge, Registry, TextEncoder};

//
// Collector
//

// Owns the registry that every stat created through a scope is registered in.
#[derive(Clone, Default)]
pub struct Collector {
  registry: Registry,
}

impl Collector {
  #[must_use]
  pub fn scope(&self, name: &str) -> Scope {
    Scope {
      registry: self.registry.clone(),
      prefix: name.to_string(),
    }
  }

  #[must_use]
  pub fn gather(&self) -> Vec<MetricFamily> {
    self.registry.gather()
  }

  // Render all stats in the prometheus text exposition format.
  pub fn text_output(&self) -> anyhow::Result<String> {
    Ok(TextEncoder::new().encode_to_string(&self.gather())?)
  }
}

//
// Scope
//

// A named prefix for stats. Nested scopes are joined with ':'.
#[derive(Clone)]
pub struct Scope {
  registry: Registry,
  prefix: String,
}

impl Scope {
  #[must_use]
  pub fn scope(&self, name: &str) -> Self {
    Self {
      registry: self.registry.clone(),
      prefix: self.full_name(name),
    }
  }

  #[must_use]
  pub fn counter(&self, name: &str) -> IntCounter {
    let name = self.full_name(name);
    self.register(IntCounter::new(name.clone(), name).unwrap())
  }

  #[must_use]
  pub fn gauge(&self, name: &str) -> IntGauge {
    let name = self.full_name(name);
    self.register(IntGauge::new(name.clone(), name).unwrap())
  }

  fn full_name(&self, name: &str) -> String {
    if self.prefix.is_empty() {
      name.to_string()
    } else {
      format!("{}:{}", self.prefix, name)
    }
  }

  // Registration only fails for duplicates. The duplicate still counts, it just is not exported a
  // second time.
  fn register<T: PromCollector + Clone + 'static>(&self, stat: T) -> T {
    if let Err(e) = self.registry.register(Box::new(stat.clone())) {
      log::debug!("not registering stat: {e}");
    }
    stat
  }
}

//
// AutoGauge
//

// Increments a gauge on creation and decrements it on drop.
pub struct AutoGauge {
  gauge: IntGauge,
}

impl AutoGauge {
  #[must_use]
  pub fn new(gauge: IntGauge) -> Self {
    gauge.inc();
    Self { gauge }
  }
}

impl Drop for AutoGauge {
  fn drop(&mut self) {
    self.gauge.dec();
  }
}
