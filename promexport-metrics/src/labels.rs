// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./labels_test.rs"]
mod labels_test;

use std::collections::BTreeMap;
use std::fmt::Display;

pub const METRIC_NAME_LABEL: &str = "__name__";
pub const BUCKET_LABEL: &str = "le";

// The backend rejects series with more metric labels than this.
pub const MAX_METRIC_LABELS: usize = 100;

pub const RESOURCE_TYPE: &str = "prometheus_target";
pub const PROJECT_ID_LABEL: &str = "project_id";
pub const LOCATION_LABEL: &str = "location";
pub const CLUSTER_LABEL: &str = "cluster";
pub const NAMESPACE_LABEL: &str = "namespace";
pub const JOB_LABEL: &str = "job";
pub const INSTANCE_LABEL: &str = "instance";

// The labels that make up the monitored resource, in backend order.
pub const RESOURCE_LABELS: [&str; 6] = [
  PROJECT_ID_LABEL,
  LOCATION_LABEL,
  CLUSTER_LABEL,
  NAMESPACE_LABEL,
  JOB_LABEL,
  INSTANCE_LABEL,
];

//
// LabelSet
//

// A set of label name/value pairs. Names are unique and iteration is sorted by name, so two sets
// with the same contents compare and hash equal regardless of insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelSet(BTreeMap<String, String>);

impl LabelSet {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn from_pairs<N: Into<String>, V: Into<String>>(
    pairs: impl IntoIterator<Item = (N, V)>,
  ) -> Self {
    Self(
      pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect(),
    )
  }

  #[must_use]
  pub fn get(&self, name: &str) -> Option<&str> {
    self.0.get(name).map(String::as_str)
  }

  pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
    self.0.insert(name.into(), value.into())
  }

  pub fn remove(&mut self, name: &str) -> Option<String> {
    self.0.remove(name)
  }

  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.0.contains_key(name)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
  }

  #[must_use]
  pub fn metric_name(&self) -> Option<&str> {
    self.get(METRIC_NAME_LABEL)
  }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for LabelSet {
  fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
    Self::from_pairs(iter)
  }
}

impl Display for LabelSet {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{{")?;
    for (i, (name, value)) in self.0.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{name}={value:?}")?;
    }
    write!(f, "}}")
  }
}

//
// LabelError
//

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
  #[error("metric name label is missing or empty")]
  MissingName,
  #[error("too many metric labels: {0} exceeds the limit of {MAX_METRIC_LABELS}")]
  TooManyLabels(usize),
  #[error("resource label {0} is missing")]
  IncompleteResource(&'static str),
  #[error("project_id resource label is empty")]
  EmptyProjectId,
}

//
// SeriesLabels
//

// A series label set split into the pieces the backend addresses separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesLabels {
  pub name: String,
  pub resource: LabelSet,
  pub metric: LabelSet,
}

impl SeriesLabels {
  // Split a series label set into metric name, resource labels and metric labels. Resource labels
  // that are absent (or set to the empty string) take their value from `resource_defaults`, falling
  // back to the empty string, so the resource always carries all six keys.
  pub fn split(
    mut labels: LabelSet,
    resource_defaults: &LabelSet,
    drop_bucket_label: bool,
  ) -> Result<Self, LabelError> {
    let name = labels
      .remove(METRIC_NAME_LABEL)
      .filter(|name| !name.is_empty())
      .ok_or(LabelError::MissingName)?;

    let mut resource = LabelSet::new();
    for key in RESOURCE_LABELS {
      let value = labels
        .remove(key)
        .filter(|value| !value.is_empty())
        .or_else(|| resource_defaults.get(key).map(ToString::to_string))
        .unwrap_or_default();
      resource.insert(key, value);
    }
    validate_resource(&resource)?;

    if drop_bucket_label {
      labels.remove(BUCKET_LABEL);
    }
    if labels.len() > MAX_METRIC_LABELS {
      return Err(LabelError::TooManyLabels(labels.len()));
    }

    Ok(Self {
      name,
      resource,
      metric: labels,
    })
  }
}

// Every resource must carry exactly the six resource keys and a project to write into.
fn validate_resource(resource: &LabelSet) -> Result<(), LabelError> {
  if let Some(missing) = RESOURCE_LABELS
    .into_iter()
    .find(|key| !resource.contains(key))
  {
    return Err(LabelError::IncompleteResource(missing));
  }
  debug_assert_eq!(RESOURCE_LABELS.len(), resource.len());
  if resource.get(PROJECT_ID_LABEL).is_none_or(str::is_empty) {
    return Err(LabelError::EmptyProjectId);
  }
  Ok(())
}

//
// LabelMatcher
//

#[derive(Clone, Debug)]
enum MatchKind {
  Equal(String),
  NotEqual(String),
  Regex(regex::Regex),
  NotRegex(regex::Regex),
}

// A prometheus style label matcher. A missing label matches as the empty string and regexes are
// anchored at both ends.
#[derive(Clone, Debug)]
pub struct LabelMatcher {
  name: String,
  kind: MatchKind,
}

impl LabelMatcher {
  #[must_use]
  pub fn equal(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      kind: MatchKind::Equal(value.into()),
    }
  }

  #[must_use]
  pub fn not_equal(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      kind: MatchKind::NotEqual(value.into()),
    }
  }

  pub fn regex(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
    Ok(Self {
      name: name.into(),
      kind: MatchKind::Regex(anchored(pattern)?),
    })
  }

  pub fn not_regex(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
    Ok(Self {
      name: name.into(),
      kind: MatchKind::NotRegex(anchored(pattern)?),
    })
  }

  #[must_use]
  pub fn matches(&self, labels: &LabelSet) -> bool {
    let value = labels.get(&self.name).unwrap_or_default();
    match &self.kind {
      MatchKind::Equal(expected) => value == expected,
      MatchKind::NotEqual(expected) => value != expected,
      MatchKind::Regex(regex) => regex.is_match(value),
      MatchKind::NotRegex(regex) => !regex.is_match(value),
    }
  }
}

fn anchored(pattern: &str) -> Result<regex::Regex, regex::Error> {
  regex::Regex::new(&format!("^(?:{pattern})$"))
}
