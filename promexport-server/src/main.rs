// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

use anyhow::Context;
use clap::Parser;
use log::info;
use promexport_common::global_initialize;
use promexport_protobuf::protos::promexport::config::bootstrap::v1::bootstrap::Config;
use promexport_server::{ServerContext, ServerHooks, run_server};
use std::num::NonZeroUsize;
use tikv_jemallocator::Jemalloc;
use tokio::select;
use tokio::signal::unix::{SignalKind, signal};

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Parser, Debug, Clone)]
struct Options {
  #[arg(short = 'c', long = "config")]
  pub config: String,

  #[arg(long = "config-check-and-exit")]
  pub config_check: bool,

  #[arg(long = "version")]
  pub version: bool,
}

struct NullHooks {}

#[async_trait::async_trait]
impl ServerHooks for NullHooks {
  async fn server_started(&self, context: ServerContext) {
    info!(
      "accepting remote write requests on {}",
      context.listen_address
    );
  }
}

fn main() -> anyhow::Result<()> {
  global_initialize();
  let opts = Options::parse();

  if opts.version {
    println!("promexport: {}", env!("CARGO_PKG_VERSION"));
    return Ok(());
  }
  info!("promexport loading: {}", env!("CARGO_PKG_VERSION"));

  let config: Config = promexport_server::config::load_from_file(&opts.config)
    .with_context(|| format!("can't load config file from {}", opts.config))?;
  info!("loaded config file {}", opts.config);

  let num_threads = std::thread::available_parallelism().unwrap_or_else(|_| {
    log::warn!("could not determine number of CPUs. Defaulting to 1");
    NonZeroUsize::MIN
  });
  info!("running server with {num_threads} workers");
  let runtime = tokio::runtime::Builder::new_multi_thread()
    .worker_threads(num_threads.into())
    .enable_all()
    .build()?;

  // Signal streams have to be created inside the runtime.
  let (mut sigint, mut sigterm) = {
    let _guard = runtime.enter();
    (
      signal(SignalKind::interrupt())?,
      signal(SignalKind::terminate())?,
    )
  };
  runtime.block_on(async move {
    run_server(
      config,
      opts.config_check,
      || async move {
        // Trap ctrl+c and sigterm and perform a clean shutdown.
        select! {
          _ = sigint.recv() => info!("received sigint"),
          _ = sigterm.recv() => info!("received sigterm"),
        }
      },
      NullHooks {},
    )
    .await
  })
}
