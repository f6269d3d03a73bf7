// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./intern_test.rs"]
mod intern_test;

use crate::labels::LabelSet;
use parking_lot::Mutex;
use prometheus::IntGauge;
use promexport_common::stats::Scope;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

//
// Stats
//

#[derive(Clone, Debug)]
struct Stats {
  strings: IntGauge,
  label_sets: IntGauge,
}

impl Stats {
  fn new(scope: &Scope) -> Self {
    let scope = scope.scope("intern_pool");
    Self {
      strings: scope.gauge("strings"),
      label_sets: scope.gauge("label_sets"),
    }
  }
}

//
// RefCountedTable
//

// Maps each distinct value to the single shared copy handed out for it and the number of
// outstanding references to that copy.
struct RefCountedTable<T: ?Sized> {
  entries: HashMap<Arc<T>, usize, ahash::RandomState>,
}

impl<T: ?Sized> Default for RefCountedTable<T> {
  fn default() -> Self {
    Self {
      entries: HashMap::default(),
    }
  }
}

impl<T: ?Sized + Hash + Eq> RefCountedTable<T> {
  fn intern(&mut self, value: &T, to_owned: impl FnOnce(&T) -> Arc<T>) -> Arc<T> {
    let owned = match self.entries.get_key_value(value) {
      Some((existing, _)) => existing.clone(),
      None => to_owned(value),
    };
    *self.entries.entry(owned.clone()).or_default() += 1;
    owned
  }

  // Returns false if the value was never interned.
  fn release(&mut self, value: &T) -> bool {
    let Some(count) = self.entries.get_mut(value) else {
      return false;
    };
    *count -= 1;
    if *count == 0 {
      self.entries.remove(value);
    }
    true
  }

  fn ref_count(&self, value: &T) -> usize {
    self.entries.get(value).copied().unwrap_or_default()
  }

  fn len(&self) -> usize {
    self.entries.len()
  }
}

#[derive(Default)]
struct Tables {
  strings: RefCountedTable<str>,
  label_sets: RefCountedTable<LabelSet>,
}

//
// InternPool
//

// Deduplicates the strings and label sets referenced by cached series templates. Every intern
// call must be paired with exactly one release of an equal value. Interning is only done when a
// series template is (re)built, which happens at a low jittered rate, so a single mutex is
// sufficient. The pool never calls back into its callers while holding the lock.
pub struct InternPool {
  tables: Mutex<Tables>,
  stats: Stats,
}

impl InternPool {
  #[must_use]
  pub fn new(scope: &Scope) -> Arc<Self> {
    Arc::new(Self {
      tables: Mutex::default(),
      stats: Stats::new(scope),
    })
  }

  // Returns the pool owned copy of the string, allocating it on first use.
  pub fn intern_str(&self, value: &str) -> Arc<str> {
    let mut tables = self.tables.lock();
    let interned = tables.strings.intern(value, |value| Arc::from(value));
    self.stats.strings.set(tables.strings.len() as i64);
    interned
  }

  // Returns the pool owned copy of the label set, allocating it on first use.
  pub fn intern_labels(&self, value: &LabelSet) -> Arc<LabelSet> {
    let mut tables = self.tables.lock();
    let interned = tables
      .label_sets
      .intern(value, |value| Arc::new(value.clone()));
    self.stats.label_sets.set(tables.label_sets.len() as i64);
    interned
  }

  // Drops one reference to the string.
  //
  // # Panics
  //
  // Panics if the string is not currently interned. That can only happen if intern and release
  // calls are mismatched.
  pub fn release_str(&self, value: &str) {
    let mut tables = self.tables.lock();
    assert!(
      tables.strings.release(value),
      "released string that was never interned: {value:?}"
    );
    self.stats.strings.set(tables.strings.len() as i64);
  }

  // Drops one reference to the label set.
  //
  // # Panics
  //
  // Panics if the label set is not currently interned.
  pub fn release_labels(&self, value: &LabelSet) {
    let mut tables = self.tables.lock();
    assert!(
      tables.label_sets.release(value),
      "released label set that was never interned: {value}"
    );
    self.stats.label_sets.set(tables.label_sets.len() as i64);
  }

  #[must_use]
  pub fn str_ref_count(&self, value: &str) -> usize {
    self.tables.lock().strings.ref_count(value)
  }

  #[must_use]
  pub fn labels_ref_count(&self, value: &LabelSet) -> usize {
    self.tables.lock().label_sets.ref_count(value)
  }

  #[must_use]
  pub fn len(&self) -> (usize, usize) {
    let tables = self.tables.lock();
    (tables.strings.len(), tables.label_sets.len())
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == (0, 0)
  }
}
