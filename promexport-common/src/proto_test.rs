// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use super::{ProtoDurationToTimeDuration, yaml_to_proto};
use pretty_assertions::assert_eq;
use promexport_protobuf::protos::promexport::config::bootstrap::v1::bootstrap::backend_config::Backend_type;
use promexport_protobuf::protos::promexport::config::bootstrap::v1::bootstrap::Config;
use time::ext::NumericalDuration;

#[test]
fn yaml_round_trip() {
  let config: Config = yaml_to_proto(
    r"
listen: 0.0.0.0:9090
export:
  gc_interval: 30s
  external_labels:
  - name: cluster
    value: prod
backend:
  log: {}
",
  )
  .unwrap();

  assert_eq!("0.0.0.0:9090", config.listen.to_string());
  assert_eq!(
    30.seconds(),
    config.export.gc_interval.unwrap_duration_or(1.minutes())
  );
  assert_eq!(
    10.minutes(),
    config
      .export
      .gc_inactivity_window
      .unwrap_duration_or(10.minutes())
  );
  assert_eq!("cluster", &*config.export.external_labels[0].name);
  assert!(matches!(
    config.backend.backend_type,
    Some(Backend_type::Log(_))
  ));
}

#[test]
fn unknown_field() {
  assert!(yaml_to_proto::<Config>("not_a_field: 1").is_err());
}
