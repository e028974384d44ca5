//! Background poll loop.
//! - Fetches once immediately, then on every interval tick
//! - Fetches run one at a time; a late tick is delayed, never stacked
//! - Refresh requests made while one is pending collapse into it
//! - Dropping the handle aborts the task, including any request in flight

use std::time::Duration;

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::api::SpendingSource;
use super::state::SpendingSnapshot;

#[derive(Debug)]
pub enum PollEvent {
    Snapshot {
        snapshot: SpendingSnapshot,
        fetched_at: DateTime<Local>,
    },
    Failed(String),
}

/// Shortest interval the loop will run with.
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

pub struct PollerHandle {
    refresh_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Ask for an extra poll right now. The regular schedule is unchanged.
    pub fn refresh(&self) {
        // Full means a refresh is already pending
        let _ = self.refresh_tx.try_send(());
    }

    /// The loop only ends on its own if the task panicked or the receiver went away.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancel the loop and wait for the task to wind down.
    pub async fn shutdown(mut self) {
        self.task.abort();
        let _ = (&mut self.task).await;
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn spawn<S: SpendingSource>(
    source: S,
    every: Duration,
    events: mpsc::UnboundedSender<PollEvent>,
) -> PollerHandle {
    let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);
    let every = every.max(MIN_INTERVAL);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                Some(()) = refresh_rx.recv() => debug!("manual refresh requested"),
            }

            let event = poll_once(&source).await;
            if events.send(event).is_err() {
                debug!("dashboard gone, stopping poller");
                break;
            }
        }
    });

    PollerHandle { refresh_tx, task }
}

pub async fn poll_once<S: SpendingSource>(source: &S) -> PollEvent {
    match source.fetch().await {
        Ok(snapshot) => {
            info!(
                "snapshot: {} days, {} months, {} categories",
                snapshot.spending_over_time.len(),
                snapshot.monthly_trend.len(),
                snapshot.category_distribution.len()
            );
            PollEvent::Snapshot {
                snapshot,
                fetched_at: Local::now(),
            }
        }
        Err(e) => {
            warn!("poll failed: {e:?}");
            PollEvent::Failed(e.to_string())
        }
    }
}
