// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use protobuf_codegen::Customize;
use std::path::Path;

const GENERATED_HEADER: &str = r"// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt
";

fn generate_directory(root_path: &Path, partial_path: &Path) {
  for file in std::fs::read_dir(root_path.join(partial_path)).unwrap() {
    let file = file.unwrap();
    if file.file_type().unwrap().is_dir() {
      generate_directory(root_path, &partial_path.join(file.file_name()));
    } else if file.file_type().unwrap().is_file() {
      std::fs::create_dir_all(Path::new("src/protos").join(partial_path)).unwrap();
      // The pure parser keeps the build free of a protoc install.
      protobuf_codegen::Codegen::new()
        .pure()
        .customize(
          Customize::default()
            .gen_mod_rs(false)
            .tokio_bytes(true)
            .tokio_bytes_for_string(true),
        )
        .includes(["proto/"])
        .inputs([file.path()])
        .out_dir(Path::new("src/protos").join(partial_path))
        .run_from_script();
      add_header(&Path::new("src/protos").join(partial_path));
    }
  }
}

// Generated files get the same license header as the rest of the tree. The hand written mod.rs
// files already carry it.
fn add_header(out_dir: &Path) {
  for file in std::fs::read_dir(out_dir).unwrap() {
    let path = file.unwrap().path();
    if path.extension().is_none_or(|extension| extension != "rs") {
      continue;
    }
    let contents = std::fs::read_to_string(&path).unwrap();
    if !contents.starts_with(GENERATED_HEADER) {
      std::fs::write(&path, format!("{GENERATED_HEADER}\n{contents}")).unwrap();
    }
  }
}

fn main() {
  if std::env::var("SKIP_PROTO_GEN").is_ok() {
    return;
  }

  println!("cargo:rerun-if-changed=proto/");

  generate_directory(Path::new("proto"), Path::new(""));
}
