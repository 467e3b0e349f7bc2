//! Live waitlist board
//!
//! One background task per view drives two independent loops: a clock tick
//! for the "waiting for N minutes" column and a data refresh that re-runs
//! the list and summary queries. The clock keeps ticking while a refresh is
//! in flight. Refreshes never overlap: they all run on the refresh loop, and
//! an explicit refresh request made while one is in flight queues exactly
//! one more.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use shared::models::{
    NotificationMethod, NotifyRequest, NotifyResponse, WaitlistEntry, WaitlistStatus,
    WaitlistSummary,
};
use shared::waitlist::sort_queue_order;
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::services::WaitlistSource;
use crate::{ClientConfig, ClientResult};

/// Timer periods of a live view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveViewOptions {
    pub refresh_interval: Duration,
    pub clock_interval: Duration,
}

impl LiveViewOptions {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            refresh_interval: config.waitlist_refresh,
            ..Self::default()
        }
    }
}

impl Default for LiveViewOptions {
    fn default() -> Self {
        Self {
            refresh_interval: crate::config::MIN_WAITLIST_REFRESH,
            clock_interval: Duration::from_secs(1),
        }
    }
}

/// What the board shows after the latest refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaitlistSnapshot {
    /// Entries matching the view filter, oldest first
    pub entries: Vec<WaitlistEntry>,
    pub summary: Option<WaitlistSummary>,
    /// Incremented on every published refresh, success or failure
    pub generation: u64,
    /// Time of the last refresh that returned entries
    pub refreshed_at: Option<DateTime<Utc>>,
    /// Error of the latest refresh, cleared by the next successful one
    pub last_error: Option<String>,
}

impl WaitlistSnapshot {
    pub fn is_loaded(&self) -> bool {
        self.refreshed_at.is_some()
    }
}

/// Handle to a running waitlist view
///
/// Dropping the handle stops the background task.
pub struct WaitlistLiveView<S: WaitlistSource + ?Sized> {
    source: Arc<S>,
    branch_id: i64,
    status: WaitlistStatus,
    snapshot: watch::Receiver<WaitlistSnapshot>,
    clock: watch::Receiver<DateTime<Utc>>,
    refresh: Arc<Notify>,
    shutdown: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl<S: WaitlistSource + ?Sized> WaitlistLiveView<S> {
    /// Start a view over `status` entries of `branch_id`
    ///
    /// The first refresh runs immediately.
    pub fn spawn(
        source: Arc<S>,
        branch_id: i64,
        status: WaitlistStatus,
        options: LiveViewOptions,
    ) -> Self {
        Self::spawn_with_shutdown(source, branch_id, status, options, CancellationToken::new())
    }

    /// Like [`spawn`](Self::spawn), stopping when `shutdown` is cancelled
    pub fn spawn_with_shutdown(
        source: Arc<S>,
        branch_id: i64,
        status: WaitlistStatus,
        options: LiveViewOptions,
        shutdown: CancellationToken,
    ) -> Self {
        let (snapshot_tx, snapshot) = watch::channel(WaitlistSnapshot::default());
        let (clock_tx, clock) = watch::channel(Utc::now());
        let refresh = Arc::new(Notify::new());

        let poller = Poller {
            source: source.clone(),
            branch_id,
            status,
            options,
            snapshot_tx,
            clock_tx,
            refresh_requests: refresh.clone(),
            shutdown: shutdown.clone(),
        };
        let task = tokio::spawn(poller.run());

        Self {
            source,
            branch_id,
            status,
            snapshot,
            clock,
            refresh,
            shutdown,
            task: Some(task),
        }
    }

    pub fn branch_id(&self) -> i64 {
        self.branch_id
    }

    pub fn status(&self) -> WaitlistStatus {
        self.status
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> WaitlistSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WaitlistSnapshot> {
        self.snapshot.clone()
    }

    /// Clock ticks, one per `clock_interval`
    pub fn clock(&self) -> watch::Receiver<DateTime<Utc>> {
        self.clock.clone()
    }

    /// Ask for a refresh outside the regular schedule
    pub fn request_refresh(&self) {
        self.refresh.notify_one();
    }

    /// Send the "table ready" message to `entry`
    ///
    /// Without a (non-blank) custom message the default template is used.
    /// One request is made; on success a refresh is requested, on failure
    /// the error is returned as is.
    pub async fn notify(
        &self,
        entry: &WaitlistEntry,
        method: NotificationMethod,
        custom_message: Option<&str>,
    ) -> ClientResult<NotifyResponse> {
        let request = NotifyRequest::build(entry, method, custom_message);
        let result = self.source.notify(entry.id, &request).await;
        self.after_action(&format!("notify via {}", method.label()), entry, &result);
        result
    }

    pub async fn seat(&self, entry: &WaitlistEntry) -> ClientResult<WaitlistEntry> {
        self.set_status(entry, WaitlistStatus::Seated).await
    }

    pub async fn cancel(&self, entry: &WaitlistEntry) -> ClientResult<WaitlistEntry> {
        self.set_status(entry, WaitlistStatus::Cancelled).await
    }

    pub async fn mark_no_show(&self, entry: &WaitlistEntry) -> ClientResult<WaitlistEntry> {
        self.set_status(entry, WaitlistStatus::NoShow).await
    }

    async fn set_status(
        &self,
        entry: &WaitlistEntry,
        status: WaitlistStatus,
    ) -> ClientResult<WaitlistEntry> {
        let result = self.source.update_status(entry.id, status).await;
        self.after_action(status.as_str(), entry, &result);
        result
    }

    fn after_action<T>(&self, action: &str, entry: &WaitlistEntry, result: &ClientResult<T>) {
        match result {
            Ok(_) => {
                tracing::info!(
                    entry_id = entry.id,
                    quote = %entry.quote_number,
                    action,
                    "Waitlist action completed"
                );
                self.request_refresh();
            }
            Err(e) => {
                tracing::warn!(
                    entry_id = entry.id,
                    quote = %entry.quote_number,
                    action,
                    error = %e,
                    "Waitlist action failed"
                );
            }
        }
    }

    /// Stop the background task and wait for it to finish
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            tracing::error!("Waitlist view task failed: {}", e);
        }
    }
}

impl<S: WaitlistSource + ?Sized> Drop for WaitlistLiveView<S> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

struct Poller<S: WaitlistSource + ?Sized> {
    source: Arc<S>,
    branch_id: i64,
    status: WaitlistStatus,
    options: LiveViewOptions,
    snapshot_tx: watch::Sender<WaitlistSnapshot>,
    clock_tx: watch::Sender<DateTime<Utc>>,
    refresh_requests: Arc<Notify>,
    shutdown: CancellationToken,
}

impl<S: WaitlistSource + ?Sized> Poller<S> {
    async fn run(self) {
        tracing::info!(
            branch_id = self.branch_id,
            status = %self.status,
            refresh_secs = self.options.refresh_interval.as_secs_f64(),
            "Waitlist view started"
        );

        tokio::join!(self.run_clock(), self.run_refresh());

        tracing::info!(branch_id = self.branch_id, status = %self.status, "Waitlist view stopped");
    }

    async fn run_clock(&self) {
        let mut clock_tick = tick_interval(self.options.clock_interval);
        loop {
            tokio::select! {
                biased;

                _ = self.shutdown.cancelled() => break,
                _ = clock_tick.tick() => {
                    self.clock_tx.send_replace(Utc::now());
                }
            }
        }
    }

    async fn run_refresh(&self) {
        let mut refresh_tick = tick_interval(self.options.refresh_interval);
        loop {
            tokio::select! {
                biased;

                _ = self.shutdown.cancelled() => break,
                _ = refresh_tick.tick() => {
                    tokio::select! {
                        _ = self.shutdown.cancelled() => break,
                        _ = self.refresh() => {}
                    }
                }
                _ = self.refresh_requests.notified() => {
                    tokio::select! {
                        _ = self.shutdown.cancelled() => break,
                        _ = self.refresh() => {}
                    }
                    refresh_tick.reset();
                }
            }
        }
    }

    async fn refresh(&self) {
        let started = Instant::now();
        let (entries, summary) = tokio::join!(
            self.source.list(self.branch_id, self.status),
            self.source.summary(self.branch_id),
        );

        let mut error = None;
        let entries = match entries {
            Ok(mut entries) => {
                sort_queue_order(&mut entries);
                Some(entries)
            }
            Err(e) => {
                tracing::warn!(branch_id = self.branch_id, error = %e, "Waitlist refresh failed");
                error = Some(e.to_string());
                None
            }
        };
        let summary = match summary {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::warn!(branch_id = self.branch_id, error = %e, "Waitlist summary refresh failed");
                error.get_or_insert_with(|| e.to_string());
                None
            }
        };

        self.snapshot_tx.send_modify(|snapshot| {
            snapshot.generation += 1;
            if let Some(entries) = entries {
                snapshot.entries = entries;
                snapshot.refreshed_at = Some(Utc::now());
            }
            if summary.is_some() {
                snapshot.summary = summary;
            }
            snapshot.last_error = error;
        });

        tracing::debug!(
            branch_id = self.branch_id,
            status = %self.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Waitlist refreshed"
        );
    }
}

fn tick_interval(period: Duration) -> Interval {
    // interval() panics on a zero period
    let mut interval = tokio::time::interval(period.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}
