// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

pub mod config;


use anyhow::Context;
use futures::Future;
use log::info;
use promexport_common::shutdown::{ComponentShutdown, ComponentShutdownTrigger};
use promexport_common::stats::Collector;
use promexport_metrics::admin::AdminState;
use promexport_metrics::clock::{RealDurationJitter, RealTimeProvider};
use promexport_metrics::export::{Exporter, run_gc_loop};
use promexport_metrics::ingest::RemoteWriteIngest;
use promexport_metrics::intern::InternPool;
use promexport_metrics::series_cache::{LabelResolver, SeriesCache};
use promexport_protobuf::protos::promexport::config::bootstrap::v1::bootstrap::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::unix::{SignalKind, signal};
use tokio::task::JoinHandle;

#[cfg(test)]
#[ctor::ctor]
fn test_global_init() {
  use promexport_common::global_initialize;

  global_initialize();
}

//
// ServerContext
//

// Handed to hooks once every listener is bound.
pub struct ServerContext {
  pub collector: Collector,
  pub listen_address: SocketAddr,
  pub admin_address: Option<SocketAddr>,
  // Present only when the hooks supplied a label resolver for the scrape path.
  pub exporter: Option<Arc<Exporter>>,
}

//
// ServerHooks
//

#[async_trait::async_trait]
pub trait ServerHooks {
  // Series references of the scrape path are resolved through this. Without one only the remote
  // write ingestion path runs.
  fn label_resolver(&self) -> Option<Arc<dyn LabelResolver>> {
    None
  }

  async fn server_started(&self, context: ServerContext);
}

// Drops every cached series template on SIGHUP so the next sample of each series rebuilds it.
fn spawn_sighup_handler(
  cache: Arc<SeriesCache>,
  mut shutdown: ComponentShutdown,
) -> anyhow::Result<JoinHandle<anyhow::Result<()>>> {
  let mut sighup = signal(SignalKind::hangup())?;
  Ok(tokio::spawn(async move {
    loop {
      tokio::select! {
        _ = sighup.recv() => {
          info!("received sighup, invalidating {} cached series", cache.len());
          cache.invalidate_all();
        },
        () = shutdown.cancelled() => break,
      }
    }
    anyhow::Ok(())
  }))
}

async fn serve(
  listener: TcpListener,
  router: axum::Router,
  mut shutdown: ComponentShutdown,
) -> anyhow::Result<()> {
  axum::serve(listener, router)
    .with_graceful_shutdown(async move { shutdown.cancelled().await })
    .await?;
  Ok(())
}

pub async fn run_server<ShutdownFuture: Future<Output = ()>>(
  config: Config,
  config_check_only: bool,
  shutdown: impl FnOnce() -> ShutdownFuture,
  hooks: impl ServerHooks,
) -> anyhow::Result<()> {
  config::validate(&config)?;

  let collector = Collector::default();
  let scope = collector.scope("promexport");
  scope.gauge("heartbeat").set(1);

  let writer = config::make_writer(config.backend.get_or_default(), &scope)?;
  let ingest_config = config::make_ingest_config(&config);
  let max_concurrent_writes = ingest_config.max_concurrent_writes;
  let ingest = RemoteWriteIngest::new(&scope, ingest_config, writer.clone())?;
  let series_cache_config = config::make_series_cache_config(&config)?;

  if config_check_only {
    info!("--config-check-and-exit set, exiting");
    return Ok(());
  }

  let shutdown_trigger = ComponentShutdownTrigger::default();
  let mut tasks: Vec<JoinHandle<anyhow::Result<()>>> = Vec::new();

  let exporter = if let Some(resolver) = hooks.label_resolver() {
    let pool = InternPool::new(&scope);
    let cache = SeriesCache::new(
      &scope,
      pool,
      resolver,
      series_cache_config,
      Box::new(RealTimeProvider {}),
      Box::new(RealDurationJitter {}),
    );
    let (gc_interval, gc_inactivity_window) = config::gc_settings(&config);
    let gc_cache = cache.clone();
    let gc_shutdown = shutdown_trigger.make_shutdown();
    tasks.push(tokio::spawn(async move {
      run_gc_loop(gc_cache, gc_interval, gc_inactivity_window, gc_shutdown).await;
      anyhow::Ok(())
    }));
    tasks.push(spawn_sighup_handler(
      cache.clone(),
      shutdown_trigger.make_shutdown(),
    )?);
    info!("scrape export path enabled");
    Some(Arc::new(Exporter::new(
      &scope,
      cache,
      writer,
      max_concurrent_writes,
    )))
  } else {
    None
  };

  let admin_state = AdminState::new(collector.clone());
  let admin_address = if config.admin_listen.is_empty() {
    None
  } else {
    let listener = TcpListener::bind(&*config.admin_listen)
      .await
      .with_context(|| format!("can't bind admin listener to {}", &*config.admin_listen))?;
    let address = listener.local_addr()?;
    info!("admin server listening on: {address}");
    tasks.push(tokio::spawn(serve(
      listener,
      admin_state.clone().make_router(),
      shutdown_trigger.make_shutdown(),
    )));
    Some(address)
  };

  let listener = TcpListener::bind(&*config.listen)
    .await
    .with_context(|| format!("can't bind listener to {}", &*config.listen))?;
  let listen_address = listener.local_addr()?;
  info!("remote write server listening on: {listen_address}");
  tasks.push(tokio::spawn(serve(
    listener,
    ingest.router(),
    shutdown_trigger.make_shutdown(),
  )));
  admin_state.set_ready(true);

  hooks
    .server_started(ServerContext {
      collector,
      listen_address,
      admin_address,
      exporter,
    })
    .await;

  shutdown().await;

  info!("shutting down");
  admin_state.set_ready(false);
  shutdown_trigger.shutdown();
  for task in tasks {
    if let Err(e) = task.await? {
      log::warn!("server task failed: {e}");
    }
  }
  info!("runtime terminated");
  Ok(())
}
