// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./proto_test.rs"]
mod proto_test;

use protobuf::MessageFull;
use time::Duration;

// Convert a YAML value to a proto by round tripping through JSON.
pub fn yaml_value_to_proto<T: MessageFull>(value: &serde_yaml::Value) -> anyhow::Result<T> {
  let json = serde_json::to_string_pretty(&value)?;
  let mut message = T::new();
  protobuf_json_mapping::merge_from_str(&mut message, &json)?;
  Ok(message)
}

// Convert a YAML string to a proto by round tripping through JSON.
pub fn yaml_to_proto<T: MessageFull>(yaml: &str) -> anyhow::Result<T> {
  // Go from YAML -> JSON -> Rust Protobuf.
  let yaml: serde_yaml::Value = serde_yaml::from_str(yaml)?;
  yaml_value_to_proto(&yaml)
}

//
// ProtoDurationToTimeDuration
//

// Helper to take a google.protobuf.Duration and unwrap it with a default.
pub trait ProtoDurationToTimeDuration {
  fn unwrap_duration_or(&self, default: Duration) -> Duration;
}

impl ProtoDurationToTimeDuration
  for protobuf::MessageField<protobuf::well_known_types::duration::Duration>
{
  fn unwrap_duration_or(&self, default: Duration) -> Duration {
    self
      .as_ref()
      .map_or(default, |d| Duration::new(d.seconds, d.nanos))
  }
}
