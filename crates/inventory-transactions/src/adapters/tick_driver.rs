//! Tick driver.
//!
//! Calls `execute()` on every registered group once per tick. Calls for one
//! group never overlap: each runs under that group's lock, and a tick runs
//! the groups one after another.

use super::shared::SharedTransactionGroup;
use crate::config::{ExecutionContext, TransactionGroupConfig};
use crate::ports::inbound::TransactionGroupApi;
use crate::ports::outbound::NotificationSink;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

struct DrivenGroup<G, S> {
    group: SharedTransactionGroup<G>,
    sink: S,
}

/// Drives a set of transaction groups at a fixed interval.
pub struct TickDriver<G, S> {
    groups: Vec<DrivenGroup<G, S>>,
    ctx: ExecutionContext,
    interval: Duration,
    ticks: u64,
}

impl<G, S> TickDriver<G, S>
where
    G: TransactionGroupApi + Send + 'static,
    S: NotificationSink + Send + 'static,
{
    pub fn new(config: &TransactionGroupConfig) -> Self {
        Self {
            groups: Vec::new(),
            ctx: config.execution_context(),
            interval: config.tick_interval(),
            ticks: 0,
        }
    }

    /// Adds a group and the sink its outcomes are reported to.
    pub fn register(&mut self, group: SharedTransactionGroup<G>, sink: S) {
        self.groups.push(DrivenGroup { group, sink });
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one cycle on every registered group.
    pub fn tick(&mut self) {
        for driven in self.groups.iter_mut() {
            driven.group.execute(&self.ctx, &mut driven.sink);
        }
        self.ticks += 1;
    }

    /// Ticks until `shutdown` flips to true or its sender is dropped.
    /// Returns the driver so callers can inspect or restart it.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Self {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            groups = self.groups.len(),
            interval = ?self.interval,
            "Inventory tick driver started"
        );

        loop {
            let stop = *shutdown.borrow();
            if stop {
                break;
            }
            tokio::select! {
                _ = interval.tick() => self.tick(),
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        debug!(ticks = self.ticks, "Inventory tick driver stopped");
        self
    }
}
