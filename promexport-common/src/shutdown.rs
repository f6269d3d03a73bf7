// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./shutdown_test.rs"]
mod shutdown_test;

use tokio::sync::watch;

//
// ComponentShutdownTrigger
//

// Owned by whoever decides when to shut down. Components hold a ComponentShutdown made from it and
// wait on cancelled().
pub struct ComponentShutdownTrigger {
  sender: watch::Sender<bool>,
}

impl Default for ComponentShutdownTrigger {
  fn default() -> Self {
    Self {
      sender: watch::channel(false).0,
    }
  }
}

impl ComponentShutdownTrigger {
  #[must_use]
  pub fn make_shutdown(&self) -> ComponentShutdown {
    ComponentShutdown {
      receiver: self.sender.subscribe(),
    }
  }

  pub fn shutdown(&self) {
    self.sender.send_replace(true);
  }
}

//
// ComponentShutdown
//

#[derive(Clone)]
pub struct ComponentShutdown {
  receiver: watch::Receiver<bool>,
}

impl ComponentShutdown {
  // Resolves once shutdown has been triggered, or the trigger has been dropped.
  pub async fn cancelled(&mut self) {
    let _ignored = self.receiver.wait_for(|shutdown| *shutdown).await;
  }
}
