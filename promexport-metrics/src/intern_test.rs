// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::InternPool;
use crate::labels::LabelSet;
use pretty_assertions::assert_eq;
use promexport_common::stats::Collector;
use std::sync::Arc;

fn make_pool() -> Arc<InternPool> {
  InternPool::new(&Collector::default().scope("test"))
}

#[test]
fn intern_release_strings() {
  let pool = make_pool();
  let first = pool.intern_str("prometheus.googleapis.com/up/gauge");
  let second = pool.intern_str(&String::from("prometheus.googleapis.com/up/gauge"));
  let third = pool.intern_str("prometheus.googleapis.com/up/gauge");
  assert!(Arc::ptr_eq(&first, &second));
  assert!(Arc::ptr_eq(&first, &third));
  assert_eq!(3, pool.str_ref_count("prometheus.googleapis.com/up/gauge"));
  assert_eq!((1, 0), pool.len());

  pool.release_str(&first);
  pool.release_str(&second);
  assert_eq!(1, pool.str_ref_count("prometheus.googleapis.com/up/gauge"));
  pool.release_str(&third);
  assert_eq!(0, pool.str_ref_count("prometheus.googleapis.com/up/gauge"));
  assert!(pool.is_empty());

  // Once fully released, a new intern allocates a fresh copy.
  let fourth = pool.intern_str("prometheus.googleapis.com/up/gauge");
  assert!(!Arc::ptr_eq(&first, &fourth));
}

#[test]
fn intern_release_label_sets() {
  let pool = make_pool();
  let a = LabelSet::from_pairs([("job", "api"), ("instance", "a")]);
  // Same contents, different insertion order.
  let b = LabelSet::from_pairs([("instance", "a"), ("job", "api")]);
  let c = LabelSet::from_pairs([("job", "api"), ("instance", "c")]);

  let interned_a = pool.intern_labels(&a);
  let interned_b = pool.intern_labels(&b);
  let interned_c = pool.intern_labels(&c);
  assert!(Arc::ptr_eq(&interned_a, &interned_b));
  assert!(!Arc::ptr_eq(&interned_a, &interned_c));
  assert_eq!((0, 2), pool.len());

  for _ in 0 .. 2 {
    pool.release_labels(&a);
  }
  pool.release_labels(&c);
  assert!(pool.is_empty());
}

#[test]
fn intern_n_release_n() {
  let pool = make_pool();
  let labels = LabelSet::from_pairs([("method", "GET")]);
  let first = pool.intern_labels(&labels);
  for _ in 1 .. 50 {
    assert!(Arc::ptr_eq(&first, &pool.intern_labels(&labels)));
  }
  assert_eq!(50, pool.labels_ref_count(&labels));
  for _ in 0 .. 50 {
    pool.release_labels(&labels);
  }
  assert!(pool.is_empty());
}

#[test]
#[should_panic(expected = "never interned")]
fn release_never_interned_string() {
  make_pool().release_str("nope");
}

#[test]
#[should_panic(expected = "never interned")]
fn release_too_many_times() {
  let pool = make_pool();
  let labels = LabelSet::from_pairs([("a", "b")]);
  let _interned = pool.intern_labels(&labels);
  pool.release_labels(&labels);
  pool.release_labels(&labels);
}

#[test]
fn concurrent_intern_release() {
  let pool = make_pool();
  let threads: Vec<_> = (0 .. 8)
    .map(|i| {
      let pool = pool.clone();
      std::thread::spawn(move || {
        let labels = LabelSet::from_pairs([("shard", (i % 2).to_string())]);
        for _ in 0 .. 1000 {
          let interned = pool.intern_labels(&labels);
          let name = pool.intern_str("shared");
          assert_eq!(labels, *interned);
          pool.release_str(&name);
          pool.release_labels(&labels);
        }
      })
    })
    .collect();
  for thread in threads {
    thread.join().unwrap();
  }
  assert!(pool.is_empty());
}
