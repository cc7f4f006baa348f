//! Permission state observation

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::ports::PermissionGate;

/// Polls the permission gate and publishes grant-state transitions.
///
/// Subscription has an explicit lifecycle: [`PermissionMonitor::start`]
/// spawns the polling task, [`PermissionMonitor::stop`] tears it down.
/// Receivers observe the state at subscription time and every change
/// afterwards; after `stop` they keep the last observed state.
pub struct PermissionMonitor {
    rx: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl PermissionMonitor {
    /// Start polling `gate` at the given interval.
    ///
    /// Must run inside a tokio runtime.
    pub fn start<G>(gate: G, interval: Duration) -> Self
    where
        G: PermissionGate + 'static,
    {
        let (tx, rx) = watch::channel(gate.check().is_ok());

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let granted = gate.check().is_ok();
                tx.send_if_modified(|state| {
                    let changed = *state != granted;
                    *state = granted;
                    changed
                });
            }
        });

        Self { rx, task }
    }

    /// Subscribe to grant-state changes.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }

    /// Whether permission was granted at the last poll.
    pub fn granted(&self) -> bool {
        *self.rx.borrow()
    }

    /// Stop polling.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for PermissionMonitor {
    fn drop(&mut self) {
        self.task.abort();
    }
}
