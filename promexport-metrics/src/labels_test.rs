// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{LabelError, LabelMatcher, LabelSet, MAX_METRIC_LABELS, SeriesLabels};
use pretty_assertions::assert_eq;

fn defaults() -> LabelSet {
  LabelSet::from_pairs([("project_id", "my-project"), ("location", "us-east1")])
}

#[test]
fn display_and_order() {
  let labels = LabelSet::from_pairs([("b", "2"), ("a", "1")]);
  assert_eq!(r#"{a="1", b="2"}"#, labels.to_string());
  assert_eq!(LabelSet::from_pairs([("a", "1"), ("b", "2")]), labels);
}

#[test]
fn split_fills_resource() {
  let labels = LabelSet::from_pairs([
    ("__name__", "requests_total"),
    ("job", "api"),
    ("instance", "10.0.0.1:9090"),
    ("method", "GET"),
  ]);
  let split = SeriesLabels::split(labels, &defaults(), false).unwrap();
  assert_eq!("requests_total", split.name);
  assert_eq!(
    LabelSet::from_pairs([
      ("project_id", "my-project"),
      ("location", "us-east1"),
      ("cluster", ""),
      ("namespace", ""),
      ("job", "api"),
      ("instance", "10.0.0.1:9090"),
    ]),
    split.resource
  );
  assert_eq!(LabelSet::from_pairs([("method", "GET")]), split.metric);
}

#[test]
fn split_series_label_wins_over_default() {
  let labels = LabelSet::from_pairs([("__name__", "up"), ("project_id", "other")]);
  let split = SeriesLabels::split(labels, &defaults(), false).unwrap();
  assert_eq!(Some("other"), split.resource.get("project_id"));

  // An explicitly empty label is the same as an absent one.
  let labels = LabelSet::from_pairs([("__name__", "up"), ("location", "")]);
  let split = SeriesLabels::split(labels, &defaults(), false).unwrap();
  assert_eq!(Some("us-east1"), split.resource.get("location"));
}

#[test]
fn split_errors() {
  assert_eq!(
    Err(LabelError::MissingName),
    SeriesLabels::split(LabelSet::from_pairs([("job", "a")]), &defaults(), false)
  );
  assert_eq!(
    Err(LabelError::MissingName),
    SeriesLabels::split(LabelSet::from_pairs([("__name__", "")]), &defaults(), false)
  );
  assert_eq!(
    Err(LabelError::EmptyProjectId),
    SeriesLabels::split(
      LabelSet::from_pairs([("__name__", "up")]),
      &LabelSet::new(),
      false
    )
  );
}

#[test]
fn label_limit() {
  let mut labels = LabelSet::from_pairs([("__name__", "up")]);
  for i in 0 .. MAX_METRIC_LABELS {
    labels.insert(format!("label_{i}"), "value");
  }
  // Resource labels do not count against the limit.
  labels.insert("job", "api");
  assert_eq!(
    MAX_METRIC_LABELS,
    SeriesLabels::split(labels.clone(), &defaults(), false)
      .unwrap()
      .metric
      .len()
  );

  labels.insert("one_too_many", "value");
  let error = SeriesLabels::split(labels, &defaults(), false).unwrap_err();
  assert_eq!(LabelError::TooManyLabels(101), error);
  assert!(error.to_string().contains("100"));
}

#[test]
fn bucket_label() {
  let labels = LabelSet::from_pairs([("__name__", "latency"), ("le", "0.5")]);
  assert!(
    SeriesLabels::split(labels.clone(), &defaults(), true)
      .unwrap()
      .metric
      .is_empty()
  );
  assert_eq!(
    Some("0.5"),
    SeriesLabels::split(labels, &defaults(), false)
      .unwrap()
      .metric
      .get("le")
  );
}

#[test]
fn matchers() {
  let labels = LabelSet::from_pairs([("__name__", "up"), ("job", "api-server")]);

  assert!(LabelMatcher::equal("job", "api-server").matches(&labels));
  assert!(!LabelMatcher::equal("job", "api").matches(&labels));
  assert!(LabelMatcher::not_equal("job", "api").matches(&labels));
  // Missing labels match as empty.
  assert!(LabelMatcher::equal("cluster", "").matches(&labels));
  assert!(!LabelMatcher::not_equal("cluster", "").matches(&labels));

  assert!(LabelMatcher::regex("job", "api-.*").unwrap().matches(&labels));
  // Regexes are anchored.
  assert!(!LabelMatcher::regex("job", "api").unwrap().matches(&labels));
  assert!(LabelMatcher::not_regex("job", "api").unwrap().matches(&labels));
  assert!(LabelMatcher::regex("__name__", "up|down").unwrap().matches(&labels));
  assert!(LabelMatcher::regex("job", "(").is_err());
}
